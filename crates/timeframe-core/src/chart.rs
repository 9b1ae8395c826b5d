// File: crates/timeframe-core/src/chart.rs
// Summary: Headless rendering pipeline for ChartView using Skia CPU raster surfaces (PNG / RGBA export).

use anyhow::Result;
use skia_safe as skia;

use crate::axis::format_date;
use crate::geometry::{clamp, RectI32};
use crate::grid::linspace;
use crate::scale::LinearScale;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ChartView;

/// Default export file name.
pub const EXPORT_FILE_NAME: &str = "chart.png";

const LABEL_SIZE: f32 = 12.0;

#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text (ticks, legend label, tooltip). Off for pixel-stable snapshots.
    pub draw_labels: bool,
    pub x_ticks: usize,
    pub y_ticks: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
            x_ticks: 6,
            y_ticks: 5,
        }
    }
}

impl ChartView {
    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &bytes)?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), points = self.points().len(), "exported chart");
        Ok(())
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.raster(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Unpremultiplied RGBA8 pixels: `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.raster(opts)?;
        let (w, h) = (surface.width(), surface.height());
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("reading back {w}x{h} raster pixels failed");
        }
        Ok((pixels, w, h, row_bytes))
    }

    fn raster(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width.max(1), opts.height.max(1)))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts);
        Ok(surface)
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let plot = self.plot_rect(opts);
        let (sx, sy) = (self.x_scale(opts), self.y_scale(opts));
        let x_ticks = linspace(self.x_axis.min, self.x_axis.max, opts.x_ticks);
        let y_ticks = linspace(self.y_axis.min, self.y_axis.max, opts.y_ticks);
        let shaper = opts.draw_labels.then(TextShaper::new);

        draw_grid(canvas, theme, &plot, &x_ticks, &y_ticks, &sx, &sy);
        draw_axes(canvas, theme, &plot);
        if let Some(shaper) = &shaper {
            for &x in &x_ticks {
                let label = self.x_axis.format_tick(x, opts.x_ticks);
                shaper.draw_centered(canvas, &label, sx.to_px(x) as f32, plot.bottom as f32 + 18.0, LABEL_SIZE, theme.tick);
            }
            for &y in &y_ticks {
                let label = self.y_axis.format_tick(y, opts.y_ticks);
                shaper.draw_right(canvas, &label, plot.left as f32 - 8.0, sy.to_px(y) as f32 + 4.0, LABEL_SIZE, theme.tick);
            }
        }

        // Everything data-driven stays inside the plot area, whatever the domain.
        canvas.save();
        canvas.clip_rect(to_rect(&plot), skia::ClipOp::Intersect, true);
        if let Some((a, b)) = self.selection {
            draw_selection(canvas, theme, &plot, sx.to_px(a.min(b)) as f32, sx.to_px(a.max(b)) as f32);
        }
        draw_line(canvas, theme, &self.series.data_xy, &sx, &sy);
        if let Some(p) = self.hovered() {
            draw_active_dot(canvas, theme, sx.to_px(p.x()) as f32, sy.to_px(p.value) as f32);
        }
        canvas.restore();

        draw_legend(canvas, theme, opts, &self.series.label, shaper.as_ref());
        if let (Some(p), Some(shaper)) = (self.hovered(), &shaper) {
            let lines = [tooltip_time(p.x()), format!("value : {}", p.value)];
            draw_tooltip(canvas, theme, opts, shaper, &lines, sx.to_px(p.x()) as f32, sy.to_px(p.value) as f32);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn to_rect(r: &RectI32) -> skia::Rect {
    skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
}

fn tooltip_time(ms: f64) -> String {
    match chrono::DateTime::<chrono::Utc>::from_timestamp_millis(ms.round() as i64) {
        Some(dt) => dt.format("%-m/%-d/%Y %H:%M").to_string(),
        None => format_date(ms),
    }
}

fn draw_grid(
    canvas: &skia::Canvas,
    theme: &Theme,
    plot: &RectI32,
    x_ticks: &[f64],
    y_ticks: &[f64],
    sx: &LinearScale,
    sy: &LinearScale,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_path_effect(skia::PathEffect::dash(&[3.0, 3.0], 0.0));

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    for &x in x_ticks {
        let px = sx.to_px(x) as f32;
        canvas.draw_line((px, t), (px, b), &paint);
    }
    for &y in y_ticks {
        let py = sy.to_px(y) as f32;
        canvas.draw_line((l, py), (r, py), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, theme: &Theme, plot: &RectI32) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);
}

fn draw_selection(canvas: &skia::Canvas, theme: &Theme, plot: &RectI32, x0: f32, x1: f32) {
    let rect = skia::Rect::from_ltrb(x0, plot.top as f32, x1.max(x0 + 1.0), plot.bottom as f32);

    let mut fill = skia::Paint::default();
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.selection_fill);
    canvas.draw_rect(rect, &fill);

    let mut stroke = skia::Paint::default();
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(1.0);
    stroke.set_color(theme.selection_stroke);
    canvas.draw_rect(rect, &stroke);
}

fn draw_line(canvas: &skia::Canvas, theme: &Theme, data: &[(f64, f64)], sx: &LinearScale, sy: &LinearScale) {
    let Some(&(x0, y0)) = data.first() else {
        return;
    };
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_color(theme.line_stroke);

    if data.len() == 1 {
        // Nothing to connect; keep a lone sample visible.
        stroke.set_style(skia::paint::Style::Fill);
        canvas.draw_circle((sx.to_px(x0) as f32, sy.to_px(y0) as f32), 3.0, &stroke);
        return;
    }

    let mut path = skia::Path::new();
    path.move_to((sx.to_px(x0) as f32, sy.to_px(y0) as f32));
    for &(x, y) in data.iter().skip(1) {
        path.line_to((sx.to_px(x) as f32, sy.to_px(y) as f32));
    }
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    canvas.draw_path(&path, &stroke);
}

fn draw_active_dot(canvas: &skia::Canvas, theme: &Theme, x: f32, y: f32) {
    let mut ring = skia::Paint::default();
    ring.set_anti_alias(true);
    ring.set_style(skia::paint::Style::Fill);
    ring.set_color(theme.background);
    canvas.draw_circle((x, y), 6.0, &ring);
    ring.set_color(theme.active_dot);
    canvas.draw_circle((x, y), 4.5, &ring);
}

fn draw_legend(canvas: &skia::Canvas, theme: &Theme, opts: &RenderOptions, label: &str, shaper: Option<&TextShaper>) {
    let text_w = shaper.map(|s| s.measure_width(label, LABEL_SIZE)).unwrap_or(0.0);
    let swatch = 14.0f32;
    let total = swatch + 6.0 + text_w;
    let x = (opts.width as f32 - total) * 0.5;
    let y = opts.height as f32 - 14.0;

    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_stroke_width(2.0);
    paint.set_color(theme.line_stroke);
    canvas.draw_line((x, y - 4.0), (x + swatch, y - 4.0), &paint);

    if let Some(shaper) = shaper {
        shaper.draw_left(canvas, label, x + swatch + 6.0, y, LABEL_SIZE, theme.line_stroke);
    }
}

fn draw_tooltip(
    canvas: &skia::Canvas,
    theme: &Theme,
    opts: &RenderOptions,
    shaper: &TextShaper,
    lines: &[String],
    anchor_x: f32,
    anchor_y: f32,
) {
    let pad = 8.0f32;
    let line_h = LABEL_SIZE + 6.0;
    let text_w = lines.iter().map(|l| shaper.measure_width(l, LABEL_SIZE)).fold(0.0f32, f32::max);
    let (w, h) = (text_w + pad * 2.0, line_h * lines.len() as f32 + pad);

    // Prefer right of the point; flip left near the edge, then keep on-surface.
    let mut left = anchor_x + 12.0;
    if left + w > opts.width as f32 {
        left = anchor_x - 12.0 - w;
    }
    let left = clamp(left, 0.0, (opts.width as f32 - w).max(0.0));
    let top = clamp(anchor_y - h - 12.0, 0.0, (opts.height as f32 - h).max(0.0));
    let rect = skia::Rect::from_xywh(left, top, w, h);

    let mut bg = skia::Paint::default();
    bg.set_anti_alias(true);
    bg.set_style(skia::paint::Style::Fill);
    bg.set_color(theme.tooltip_background);
    canvas.draw_round_rect(rect, 4.0, 4.0, &bg);

    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_color(theme.tooltip_border);
    canvas.draw_round_rect(rect, 4.0, 4.0, &border);

    for (i, line) in lines.iter().enumerate() {
        let baseline = top + pad + line_h * (i as f32 + 1.0) - 6.0;
        shaper.draw_left(canvas, line, left + pad, baseline, LABEL_SIZE, theme.tooltip_text);
    }
}
