// File: crates/timeframe-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math (plot rectangle, clamping).

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Plot area of a `width` x `height` surface after removing `insets`.
    /// Never inverted: a surface smaller than its insets yields a 1px rect.
    pub fn plot_area(width: i32, height: i32, insets: &Insets) -> Self {
        let right = (width - insets.right).max(insets.left + 1);
        let bottom = (height - insets.bottom).max(insets.top + 1);
        Self::from_ltrb(insets.left, insets.top, right, bottom)
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
