// File: crates/timeframe-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic small chart to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note; the render is still checked for size, determinism and
//   that each golden scene differs from the others.

use chrono::{DateTime, Utc};
use timeframe_core::{ChartView, DataPoint, RenderOptions, ZoomState};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
    // Golden or not, the bytes must decode to a full-size surface.
    let img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
    let opts = RenderOptions::default();
    assert_eq!((img.width() as i32, img.height() as i32), (opts.width, opts.height));
}

fn series() -> Vec<DataPoint> {
    [0.0, 1.0, 0.0, 1.5, 1.0]
        .into_iter()
        .enumerate()
        .map(|(i, v)| DataPoint::new(DateTime::<Utc>::from_timestamp(i as i64 * 3_600, 0).unwrap(), v))
        .collect()
}

fn render_bytes(zoom: &ZoomState) -> Vec<u8> {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    ChartView::new(&series(), zoom).render_to_png_bytes(&opts).expect("render bytes")
}

fn snap(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name)
}

#[test]
fn golden_basic_chart() {
    write_or_compare(&snap("basic_chart.png"), &render_bytes(&ZoomState::new()));
}

#[test]
fn golden_pending_selection() {
    let data = series();
    let zoom = ZoomState::new().begin_selection(data[3].x()).update_selection(data[1].x());
    write_or_compare(&snap("pending_selection.png"), &render_bytes(&zoom));
}

#[test]
fn golden_zoomed_chart() {
    let data = series();
    let zoom = ZoomState::new().begin_selection(data[1].x()).update_selection(data[3].x()).commit_selection(&data);
    write_or_compare(&snap("zoomed_chart.png"), &render_bytes(&zoom));
}

#[test]
fn golden_scenes_are_deterministic_and_distinct() {
    let data = series();
    let scenes = [
        ZoomState::new(),
        ZoomState::new().begin_selection(data[3].x()).update_selection(data[1].x()),
        ZoomState::new().begin_selection(data[1].x()).update_selection(data[3].x()).commit_selection(&data),
    ];
    let pixels: Vec<Vec<u8>> = scenes
        .iter()
        .map(|z| {
            let bytes = render_bytes(z);
            assert_eq!(bytes, render_bytes(z), "same scene must encode identically");
            image::load_from_memory(&bytes).expect("decode").to_rgba8().into_raw()
        })
        .collect();
    assert_ne!(pixels[0], pixels[1], "pending selection must show an overlay");
    assert_ne!(pixels[0], pixels[2], "zoom must change the plotted line");
    assert_ne!(pixels[1], pixels[2]);
}
