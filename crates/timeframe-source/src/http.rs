// File: crates/timeframe-source/src/http.rs
// Summary: Single GET of the series endpoint with a request timeout; no retries, no caching.

use std::time::Duration;

use timeframe_core::DataPoint;

use crate::error::FetchError;
use crate::normalize::parse_body;

#[derive(Clone, Debug)]
pub struct HttpSource {
    url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let url = url.into();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Network { url: url.clone(), message: e.to_string() })?;
        Ok(Self { url, timeout, client })
    }

    pub fn url(&self) -> &str { &self.url }

    pub async fn load(&self) -> Result<Vec<DataPoint>, FetchError> {
        let response = self.client.get(&self.url).send().await.map_err(|e| self.request_error(e))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: self.url.clone(), status: status.as_u16() });
        }
        let text = response.text().await.map_err(|e| self.request_error(e))?;
        tracing::debug!(url = %self.url, bytes = text.len(), "received response body");
        parse_body(&text)
    }

    fn request_error(&self, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout { url: self.url.clone(), secs: self.timeout.as_secs() }
        } else {
            FetchError::Network { url: self.url.clone(), message: e.to_string() }
        }
    }
}
