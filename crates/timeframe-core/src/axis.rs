// File: crates/timeframe-core/src/axis.rs
// Summary: Axis model: resolved range, kind and tick formatting.

use chrono::{DateTime, Utc};

use crate::grid::tick_precision;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    /// Epoch milliseconds rendered as calendar dates.
    Time,
    Value,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub kind: AxisKind,
}

impl Axis {
    pub fn new(min: f64, max: f64, kind: AxisKind) -> Self {
        Self { min, max, kind }
    }

    pub fn time(min: f64, max: f64) -> Self {
        Self::new(min, max, AxisKind::Time)
    }

    pub fn value(min: f64, max: f64) -> Self {
        Self::new(min, max, AxisKind::Value)
    }

    pub fn span(&self) -> f64 { self.max - self.min }

    pub fn contains(&self, v: f64) -> bool { v >= self.min && v <= self.max }

    /// Tick label for `v` given `ticks` labels across the axis.
    pub fn format_tick(&self, v: f64, ticks: usize) -> String {
        match self.kind {
            AxisKind::Time => format_date(v),
            AxisKind::Value => format!("{:.*}", tick_precision(self.span(), ticks), v),
        }
    }
}

/// `M/D/YYYY` for an epoch-millisecond x coordinate.
pub fn format_date(ms: f64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(ms.round() as i64) {
        Some(dt) => dt.format("%-m/%-d/%Y").to_string(),
        None => String::new(),
    }
}
