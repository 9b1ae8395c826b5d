// File: crates/timeframe-source/src/lib.rs
// Summary: DataSource entry point: one load of the series from an HTTP endpoint or a local file.

pub mod config;
pub mod error;
pub mod file;
pub mod http;
pub mod normalize;

use std::time::Duration;

use timeframe_core::DataPoint;

pub use crate::config::{SourceConfig, DEFAULT_URL};
pub use crate::error::FetchError;
pub use crate::file::FileSource;
pub use crate::http::HttpSource;
pub use crate::normalize::{normalize, parse_body, parse_timestamp_str};

#[derive(Clone, Debug)]
pub enum Source {
    Http(HttpSource),
    File(FileSource),
}

impl Source {
    /// `http://` and `https://` locations are fetched; anything else is a file path.
    pub fn from_location(location: &str, timeout: Duration) -> Result<Self, FetchError> {
        let lower = location.trim().to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(Source::Http(HttpSource::new(location.trim(), timeout)?))
        } else {
            Ok(Source::File(FileSource::new(location.trim())))
        }
    }

    pub fn location(&self) -> String {
        match self {
            Source::Http(h) => h.url().to_string(),
            Source::File(f) => f.path().display().to_string(),
        }
    }

    /// Exactly one attempt; the whole series or an error.
    pub async fn load(&self) -> Result<Vec<DataPoint>, FetchError> {
        let location = self.location();
        tracing::info!(%location, "loading series");
        let result = match self {
            Source::Http(h) => h.load().await,
            Source::File(f) => f.load(),
        };
        match &result {
            Ok(points) => tracing::info!(%location, points = points.len(), "series loaded"),
            Err(e) => tracing::warn!(%location, error = %e, "series load failed"),
        }
        result
    }
}
