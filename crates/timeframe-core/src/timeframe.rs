// File: crates/timeframe-core/src/timeframe.rs
// Summary: Trailing-window timeframe selection and the filter deriving the displayed subset.

use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::series::DataPoint;

/// Trailing window measured back from the latest timestamp of the series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    #[default]
    Daily,
    Weekly,
    /// Fixed 30 days, not a calendar month.
    Monthly,
    All,
}

impl Timeframe {
    pub const ALL: [Timeframe; 4] = [Timeframe::Daily, Timeframe::Weekly, Timeframe::Monthly, Timeframe::All];

    /// Window width; `None` means unbounded.
    pub fn window(self) -> Option<TimeDelta> {
        match self {
            Timeframe::Daily => Some(TimeDelta::hours(24)),
            Timeframe::Weekly => Some(TimeDelta::days(7)),
            Timeframe::Monthly => Some(TimeDelta::days(30)),
            Timeframe::All => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Timeframe::Daily => "Daily",
            Timeframe::Weekly => "Weekly",
            Timeframe::Monthly => "Monthly",
            Timeframe::All => "All",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_ascii_lowercase())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown timeframe `{0}` (expected daily, weekly, monthly or all)")]
pub struct ParseTimeframeError(pub String);

impl FromStr for Timeframe {
    type Err = ParseTimeframeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Timeframe::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseTimeframeError(s.to_string()))
    }
}

/// Points with `timestamp >= latest - window`, in input order.
pub fn filter(series: &[DataPoint], timeframe: Timeframe) -> Vec<DataPoint> {
    let Some(latest) = series.iter().map(|p| p.timestamp).max() else {
        return Vec::new();
    };
    // Unbounded, or a cutoff before the representable range: everything is in the window.
    let Some(cutoff) = timeframe.window().and_then(|w| latest.checked_sub_signed(w)) else {
        return series.to_vec();
    };
    let out: Vec<DataPoint> = series.iter().filter(|p| p.timestamp >= cutoff).cloned().collect();
    tracing::debug!(%timeframe, kept = out.len(), total = series.len(), "applied timeframe window");
    out
}
