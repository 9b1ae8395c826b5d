// File: crates/timeframe-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings, zoom offsets).

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 400;

/// Padding added above and below the value extent when a y-domain is derived from data.
pub const Y_PADDING: f64 = 1.0;

/// Half-width applied around a single timestamp so the x scale never collapses.
pub const DEGENERATE_X_PAD_MS: f64 = 3_600_000.0;

/// Pixel radius within which a click lands on a plotted point.
pub const HIT_RADIUS_PX: f64 = 8.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Insets {
    pub const fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    // Extra bottom room holds the date ticks and the legend row.
    fn default() -> Self {
        Self::new(72, 30, 20, 64)
    }
}
