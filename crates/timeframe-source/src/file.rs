// File: crates/timeframe-source/src/file.rs
// Summary: Local series files: a JSON array like the endpoint's body, or a CSV with a header row.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use timeframe_core::DataPoint;

use crate::error::FetchError;
use crate::normalize::{normalize, parse_body};

const TIME_COLUMNS: [&str; 4] = ["timestamp", "time", "date", "datetime"];
const VALUE_COLUMNS: [&str; 3] = ["value", "val", "y"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path { &self.path }

    pub fn load(&self) -> Result<Vec<DataPoint>, FetchError> {
        let is_csv = self
            .path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if is_csv {
            normalize(&read_csv(&self.path)?)
        } else {
            let text = std::fs::read_to_string(&self.path).map_err(|e| io_error(&self.path, e))?;
            parse_body(&text)
        }
    }
}

fn io_error(path: &Path, e: impl std::fmt::Display) -> FetchError {
    FetchError::Io { path: path.display().to_string(), message: e.to_string() }
}

/// Rows become `{timestamp, value}` objects so CSV and JSON share one
/// normalization path. Integer timestamp cells are epoch milliseconds.
fn read_csv(path: &Path) -> Result<Value, FetchError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| io_error(path, e))?;

    let headers = rdr
        .headers()
        .map_err(|e| FetchError::Csv(e.to_string()))?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let (Some(i_time), Some(i_value)) = (idx(&TIME_COLUMNS), idx(&VALUE_COLUMNS)) else {
        return Err(FetchError::Csv(format!("need timestamp and value columns, found {headers:?}")));
    };

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec.map_err(|e| FetchError::Csv(e.to_string()))?;
        let cell = |i: usize| rec.get(i).unwrap_or_default().to_string();
        let ts = cell(i_time);
        let ts = match ts.parse::<i64>() {
            Ok(ms) => Value::from(ms),
            Err(_) => Value::String(ts),
        };
        let mut obj = Map::new();
        obj.insert("timestamp".to_string(), ts);
        obj.insert("value".to_string(), Value::String(cell(i_value)));
        rows.push(Value::Object(obj));
    }
    Ok(Value::Array(rows))
}
