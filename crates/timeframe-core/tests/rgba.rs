// File: crates/timeframe-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use chrono::{DateTime, Utc};
use timeframe_core::{ChartView, DataPoint, RenderOptions, Theme, ZoomState};

fn diagonal() -> Vec<DataPoint> {
    (0..5)
        .map(|i| DataPoint::new(DateTime::<Utc>::from_timestamp(i * 86_400, 0).unwrap(), i as f64))
        .collect()
}

fn pixel(px: &[u8], stride: usize, x: i32, y: i32) -> [u8; 4] {
    let i = y as usize * stride + x as usize * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn render_rgba8_buffer() {
    let view = ChartView::new(&diagonal(), &ZoomState::new());

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = view.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left corner sits in the margin: opaque background.
    let bg = Theme::dark().background;
    assert_eq!(pixel(&px, stride, 0, 0), [bg.r(), bg.g(), bg.b(), 255]);
}

#[test]
fn selection_overlay_tints_the_plot() {
    let data = diagonal();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;

    let plain = ChartView::new(&data, &ZoomState::new());
    let dragging = ChartView::new(
        &data,
        &ZoomState::new().begin_selection(data[1].x()).update_selection(data[3].x()),
    );

    // Sample between the two markers near the top of the plot, away from the line.
    let sx = plain.x_scale(&opts);
    let x = sx.to_px(data[2].x()) as i32 + 3;
    let y = plain.plot_rect(&opts).top + 4;

    let (a, _, _, stride) = plain.render_to_rgba8(&opts).unwrap();
    let (b, _, _, _) = dragging.render_to_rgba8(&opts).unwrap();
    assert_ne!(pixel(&a, stride, x, y), pixel(&b, stride, x, y));
}
