// File: crates/timeframe-core/src/series.rs
// Summary: Time-series model: normalized data points and the plotted XY projection.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One normalized sample. Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl DataPoint {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }

    /// X coordinate used by scales and zoom domains (epoch milliseconds).
    #[inline]
    pub fn x(&self) -> f64 {
        self.timestamp.timestamp_millis() as f64
    }

    /// Canonical ISO-8601 form, e.g. `2024-01-01T00:00:00.000Z`.
    pub fn iso_timestamp(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// `(min, max)` of `values`, or `None` when there are none.
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let mut it = values.into_iter();
    let first = it.next()?;
    Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}

/// `(lo - pad, hi + pad)`. When `pad` vanishes at the magnitude of the
/// bounds it grows to a relative `1e-9` of them, so the span stays positive.
pub fn pad_extent(lo: f64, hi: f64, pad: f64) -> (f64, f64) {
    let (a, b) = (lo - pad, hi + pad);
    if a < lo && b > hi {
        return (a, b);
    }
    let pad = pad.max(lo.abs().max(hi.abs()) * RELATIVE_PAD);
    (lo - pad, hi + pad)
}

const RELATIVE_PAD: f64 = 1e-9;

/// A named line as plotted: `(x, y)` pairs in the source order.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: String,
    pub data_xy: Vec<(f64, f64)>,
}

impl Series {
    pub fn with_data(label: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), data_xy: data }
    }

    pub fn from_points(label: impl Into<String>, points: &[DataPoint]) -> Self {
        Self::with_data(label, points.iter().map(|p| (p.x(), p.value)).collect())
    }

    pub fn len(&self) -> usize { self.data_xy.len() }

    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }
}

mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
