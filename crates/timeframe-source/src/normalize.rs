// File: crates/timeframe-source/src/normalize.rs
// Summary: Raw `{timestamp, value}` records -> typed DataPoints. One bad record rejects the whole load.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;
use timeframe_core::DataPoint;

use crate::error::FetchError;

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse a response body and normalize every record.
pub fn parse_body(text: &str) -> Result<Vec<DataPoint>, FetchError> {
    let body: Value = serde_json::from_str(text).map_err(|e| FetchError::Body(e.to_string()))?;
    normalize(&body)
}

/// `body` must be an array of objects carrying `timestamp` and `value`.
pub fn normalize(body: &Value) -> Result<Vec<DataPoint>, FetchError> {
    let records = body
        .as_array()
        .ok_or_else(|| FetchError::Shape(format!("expected a JSON array, got {}", kind(body))))?;
    records.iter().enumerate().map(|(i, r)| record(i, r)).collect()
}

fn record(index: usize, raw: &Value) -> Result<DataPoint, FetchError> {
    let obj = raw
        .as_object()
        .ok_or_else(|| FetchError::malformed(index, format!("expected an object, got {}", kind(raw))))?;
    let ts = obj.get("timestamp").ok_or_else(|| FetchError::malformed(index, "missing `timestamp`"))?;
    let value = obj.get("value").ok_or_else(|| FetchError::malformed(index, "missing `value`"))?;
    Ok(DataPoint::new(
        parse_timestamp(ts).map_err(|e| FetchError::malformed(index, e))?,
        parse_value(value).map_err(|e| FetchError::malformed(index, e))?,
    ))
}

/// Numbers are epoch milliseconds; strings are RFC 3339, a naive date-time
/// (read as UTC) or a bare `YYYY-MM-DD` (midnight UTC).
pub fn parse_timestamp(raw: &Value) -> Result<DateTime<Utc>, String> {
    match raw {
        Value::Number(n) => {
            let ms = n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite() && f.abs() < 9.0e15).map(|f| f.trunc() as i64))
                .ok_or_else(|| format!("timestamp {n} is out of range"))?;
            DateTime::from_timestamp_millis(ms).ok_or_else(|| format!("timestamp {ms} is out of range"))
        }
        Value::String(s) => parse_timestamp_str(s),
        other => Err(format!("timestamp must be a string or number, got {}", kind(other))),
    }
}

/// String form of [`parse_timestamp`].
pub fn parse_timestamp_str(s: &str) -> Result<DateTime<Utc>, String> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("unparsable timestamp {s:?}"))
}

/// JSON numbers, or strings holding a decimal number. Must be finite.
pub fn parse_value(raw: &Value) -> Result<f64, String> {
    let v = match raw {
        Value::Number(n) => n.as_f64().ok_or_else(|| format!("value {n} is not representable"))?,
        Value::String(s) if !s.trim().is_empty() => {
            s.trim().parse::<f64>().map_err(|_| format!("non-numeric value {s:?}"))?
        }
        Value::String(_) => return Err("empty value".to_string()),
        other => return Err(format!("value must be a number, got {}", kind(other))),
    };
    if v.is_finite() { Ok(v) } else { Err(format!("non-finite value {v}")) }
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
