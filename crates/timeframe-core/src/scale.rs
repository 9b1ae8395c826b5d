// File: crates/timeframe-core/src/scale.rs
// Summary: Linear data <-> pixel transforms for the X (time) and Y (value) axes.

/// Logical X coordinate (epoch milliseconds).
pub type Logical = f64;
/// Value Y coordinate.
pub type Value = f64;

/// Maps the closed data interval `[d0, d1]` onto the pixel interval `[r0, r1]`.
/// `r1 < r0` is allowed (Y grows downwards on screen).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (mut d0, mut d1) = domain;
        if (d1 - d0).abs() < 1e-12 {
            (d0, d1) = crate::series::pad_extent(d0.min(d1), d0.max(d1), 0.5);
        }
        Self { d0, d1, r0: range.0, r1: range.1 }
    }

    /// Horizontal scale over a plot spanning `left..right` pixels.
    pub fn horizontal(min: Logical, max: Logical, left: i32, right: i32) -> Self {
        Self::new((min, max), (left as f64, right as f64))
    }

    /// Vertical scale over a plot spanning `top..bottom` pixels; larger values sit higher.
    pub fn vertical(min: Value, max: Value, top: i32, bottom: i32) -> Self {
        Self::new((min, max), (bottom as f64, top as f64))
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        self.r0 + (v - self.d0) / (self.d1 - self.d0) * (self.r1 - self.r0)
    }
}
