// File: crates/timeframe-core/src/view.rs
// Summary: ChartView: the renderable snapshot of (filtered series, zoom state) plus pixel <-> data lookups.

use crate::axis::Axis;
use crate::chart::RenderOptions;
use crate::geometry::RectI32;
use crate::scale::LinearScale;
use crate::series::{extent, pad_extent, DataPoint, Series};
use crate::types::{DEGENERATE_X_PAD_MS, HIT_RADIUS_PX, Y_PADDING};
use crate::zoom::ZoomState;

#[derive(Clone, Debug, PartialEq)]
pub struct ChartView {
    points: Vec<DataPoint>,
    pub series: Series,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Unordered markers of an in-progress drag.
    pub selection: Option<(f64, f64)>,
    /// Index into `points` of the hovered point.
    pub hover: Option<usize>,
}

impl ChartView {
    /// Resolve `zoom` against `points`; `Auto` domains follow the data extent.
    pub fn new(points: &[DataPoint], zoom: &ZoomState) -> Self {
        let (x_min, x_max) = zoom.x_domain.resolve(auto_x_domain(points));
        let (y_min, y_max) = zoom.y_domain.resolve(auto_y_domain(points));
        Self {
            points: points.to_vec(),
            series: Series::from_points("value", points),
            x_axis: Axis::time(x_min, x_max),
            y_axis: Axis::value(y_min, y_max),
            selection: zoom.selection.pending(),
            hover: None,
        }
    }

    pub fn with_hover(mut self, hover: Option<usize>) -> Self {
        self.hover = hover.filter(|&i| i < self.points.len());
        self
    }

    pub fn points(&self) -> &[DataPoint] { &self.points }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn hovered(&self) -> Option<&DataPoint> {
        self.hover.and_then(|i| self.points.get(i))
    }

    pub fn plot_rect(&self, opts: &RenderOptions) -> RectI32 {
        RectI32::plot_area(opts.width, opts.height, &opts.insets)
    }

    pub fn x_scale(&self, opts: &RenderOptions) -> LinearScale {
        let r = self.plot_rect(opts);
        LinearScale::horizontal(self.x_axis.min, self.x_axis.max, r.left, r.right)
    }

    pub fn y_scale(&self, opts: &RenderOptions) -> LinearScale {
        let r = self.plot_rect(opts);
        LinearScale::vertical(self.y_axis.min, self.y_axis.max, r.top, r.bottom)
    }

    /// Index of the visible point horizontally closest to pixel column `px`.
    pub fn nearest_index(&self, px: f64, opts: &RenderOptions) -> Option<usize> {
        let sx = self.x_scale(opts);
        self.points
            .iter()
            .enumerate()
            .filter(|(_, p)| self.x_axis.contains(p.x()))
            .map(|(i, p)| (i, (sx.to_px(p.x()) - px).abs()))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    /// X (epoch ms) of the point under `px`, snapped to the data.
    /// `None` outside the plot area or when nothing is visible.
    pub fn x_at(&self, px: f64, opts: &RenderOptions) -> Option<f64> {
        let r = self.plot_rect(opts);
        if px < r.left as f64 || px > r.right as f64 {
            return None;
        }
        self.nearest_index(px, opts).map(|i| self.points[i].x())
    }

    /// Plotted point within the click radius of `(px, py)`.
    pub fn hit_test(&self, px: f64, py: f64, opts: &RenderOptions) -> Option<&DataPoint> {
        let (sx, sy) = (self.x_scale(opts), self.y_scale(opts));
        let i = self.nearest_index(px, opts)?;
        let p = &self.points[i];
        let (dx, dy) = (sx.to_px(p.x()) - px, sy.to_px(p.value) - py);
        (dx.hypot(dy) <= HIT_RADIUS_PX).then_some(p)
    }
}

/// Timestamp extent; a single instant is widened so the scale keeps a span.
pub fn auto_x_domain(points: &[DataPoint]) -> (f64, f64) {
    match extent(points.iter().map(DataPoint::x)) {
        Some((lo, hi)) if hi - lo < 1.0 => (lo - DEGENERATE_X_PAD_MS, hi + DEGENERATE_X_PAD_MS),
        Some(ext) => ext,
        None => (0.0, 1.0),
    }
}

/// Value extent padded by [`Y_PADDING`] on both sides.
pub fn auto_y_domain(points: &[DataPoint]) -> (f64, f64) {
    match extent(points.iter().map(|p| p.value)) {
        Some((lo, hi)) => pad_extent(lo, hi, Y_PADDING),
        None => (0.0, 1.0),
    }
}
