// File: crates/timeframe-source/src/error.rs
// Summary: Load failure classes; every variant carries the underlying message.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("request to {url} timed out after {secs}s")]
    Timeout { url: String, secs: u64 },

    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("response is not valid JSON: {0}")]
    Body(String),

    #[error("unexpected response shape: {0}")]
    Shape(String),

    #[error("record {index} is malformed: {reason}")]
    Malformed { index: usize, reason: String },

    #[error("cannot read {path}: {message}")]
    Io { path: String, message: String },

    #[error("invalid CSV: {0}")]
    Csv(String),
}

impl FetchError {
    pub(crate) fn malformed(index: usize, reason: impl Into<String>) -> Self {
        FetchError::Malformed { index, reason: reason.into() }
    }
}
