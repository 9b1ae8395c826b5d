// File: crates/timeframe-core/src/zoom.rs
// Summary: Drag-to-zoom state: pending selection gesture plus visible x/y domains.
//
// Every operation consumes the current state and returns the next one; nothing
// is mutated in place, so handlers can swap the whole value on each event.

use serde::{Deserialize, Serialize};

use crate::series::{extent, pad_extent, DataPoint};
use crate::types::Y_PADDING;

/// Visible range of one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Domain {
    /// Follow the data extent.
    #[default]
    Auto,
    Fixed { min: f64, max: f64 },
}

impl Domain {
    pub fn fixed(a: f64, b: f64) -> Self {
        Domain::Fixed { min: a.min(b), max: a.max(b) }
    }

    pub fn is_auto(&self) -> bool { matches!(self, Domain::Auto) }

    /// Concrete `(min, max)`; `auto` supplies the range used in `Auto` mode.
    pub fn resolve(&self, auto: (f64, f64)) -> (f64, f64) {
        match *self {
            Domain::Auto => auto,
            Domain::Fixed { min, max } => (min, max),
        }
    }
}

/// Selection gesture: press records the left marker, drag the right one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Selection {
    #[default]
    Idle,
    Selecting { left: f64, right: Option<f64> },
}

impl Selection {
    pub fn is_selecting(&self) -> bool { matches!(self, Selection::Selecting { .. }) }

    /// Both markers, unordered, once the drag has moved.
    pub fn pending(&self) -> Option<(f64, f64)> {
        match *self {
            Selection::Selecting { left, right: Some(right) } => Some((left, right)),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoomState {
    pub x_domain: Domain,
    pub y_domain: Domain,
    pub selection: Selection,
}

impl ZoomState {
    pub fn new() -> Self { Self::default() }

    /// Start a gesture at `x`. Ignored while a gesture is already running.
    pub fn begin_selection(self, x: f64) -> Self {
        match self.selection {
            Selection::Idle => Self { selection: Selection::Selecting { left: x, right: None }, ..self },
            Selection::Selecting { .. } => self,
        }
    }

    /// Move the right marker to `x`. No-op while idle.
    pub fn update_selection(self, x: f64) -> Self {
        match self.selection {
            Selection::Selecting { left, .. } => Self { selection: Selection::Selecting { left, right: Some(x) }, ..self },
            Selection::Idle => self,
        }
    }

    /// Finish the gesture. Zooms to `[left, right]` when the markers differ,
    /// deriving a padded y-domain from the points of `series` inside that range.
    /// Always ends idle.
    pub fn commit_selection(self, series: &[DataPoint]) -> Self {
        let idle = Self { selection: Selection::Idle, ..self };
        let Some((a, b)) = self.selection.pending() else {
            return idle;
        };
        if a == b {
            tracing::debug!(x = a, "zero-width selection, domain unchanged");
            return idle;
        }
        let (left, right) = if a > b { (b, a) } else { (a, b) };
        let y_domain = y_domain_for(series, left, right);
        tracing::debug!(left, right, ?y_domain, "zoomed to selection");
        Self { x_domain: Domain::Fixed { min: left, max: right }, y_domain, selection: Selection::Idle }
    }

    /// Back to the full extent.
    pub fn reset(self) -> Self {
        Self::default()
    }
}

/// Padded value extent of the points with `left <= x <= right`. An empty
/// sub-range falls back to the whole series, and an empty series to `Auto`.
fn y_domain_for(series: &[DataPoint], left: f64, right: f64) -> Domain {
    let inside = series.iter().filter(|p| p.x() >= left && p.x() <= right).map(|p| p.value);
    match extent(inside).or_else(|| extent(series.iter().map(|p| p.value))) {
        Some((lo, hi)) => {
            let (min, max) = pad_extent(lo, hi, Y_PADDING);
            Domain::Fixed { min, max }
        }
        None => Domain::Auto,
    }
}
