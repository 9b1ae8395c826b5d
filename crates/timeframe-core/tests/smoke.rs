// File: crates/timeframe-core/tests/smoke.rs
// Purpose: End-to-end render smoke tests writing PNGs (empty, zoomed, mid-drag).

use chrono::{DateTime, TimeDelta, Utc};
use timeframe_core::{filter, ChartView, DataPoint, RenderOptions, Timeframe, ZoomState};

fn week() -> Vec<DataPoint> {
    let start = DateTime::parse_from_rfc3339("2024-06-01T00:00:00Z").unwrap().with_timezone(&Utc);
    (0..7 * 24)
        .map(|h| DataPoint::new(start + TimeDelta::hours(h), 50.0 + ((h as f64) / 6.0).sin() * 20.0))
        .collect()
}

#[test]
fn render_smoke_png() {
    let data = filter(&week(), Timeframe::Weekly);
    let view = ChartView::new(&data, &ZoomState::new()).with_hover(Some(10));

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    view.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = view.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn empty_series_renders_without_points() {
    let data = filter(&[], Timeframe::Daily);
    assert!(data.is_empty());
    let view = ChartView::new(&data, &ZoomState::new());
    assert!(view.points().is_empty());
    assert!(view.series.is_empty());

    let bytes = view.render_to_png_bytes(&RenderOptions::default()).expect("empty chart renders");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn single_point_and_pending_selection_render() {
    let one = &week()[..1];
    let view = ChartView::new(one, &ZoomState::new());
    view.render_to_png_bytes(&RenderOptions::default()).expect("single point renders");

    let data = week();
    let zoom = ZoomState::new().begin_selection(data[10].x()).update_selection(data[40].x());
    let view = ChartView::new(&data, &zoom);
    assert_eq!(view.selection, Some((data[10].x(), data[40].x())));
    view.render_to_png_bytes(&RenderOptions::default()).expect("overlay renders");
}

#[test]
fn zoomed_domain_clips_without_error() {
    let data = week();
    let zoom = ZoomState::new()
        .begin_selection(data[20].x())
        .update_selection(data[30].x())
        .commit_selection(&data);
    let view = ChartView::new(&data, &zoom);
    assert_eq!((view.x_axis.min, view.x_axis.max), (data[20].x(), data[30].x()));

    let mut opts = RenderOptions::default();
    opts.theme = timeframe_core::theme::find("light");
    view.render_to_png(&opts, "target/test_out/zoomed.png").expect("zoomed render");
}
