// File: crates/timeframe-source/src/config.rs
// Summary: Runtime settings (endpoint, timeout, theme, chart size) from `timeframe.toml` and TIMEFRAME_* env vars.

use std::time::Duration;

use serde::Deserialize;
use timeframe_core::{theme, RenderOptions};

use crate::error::FetchError;
use crate::Source;

pub const DEFAULT_URL: &str = "https://3dd739c0-3e49-4bd7-9cc1-7e9bd15ab167.mock.pstmn.io/api/data";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SourceConfig {
    /// `http(s)://` URL or a local `.json` / `.csv` path.
    pub url: String,
    pub timeout_secs: u64,
    pub theme: String,
    pub width: i32,
    pub height: i32,
}

impl Default for SourceConfig {
    fn default() -> Self {
        let opts = RenderOptions::default();
        Self {
            url: DEFAULT_URL.to_string(),
            timeout_secs: 10,
            theme: opts.theme.name.to_string(),
            width: opts.width,
            height: opts.height,
        }
    }
}

impl SourceConfig {
    /// Defaults, overridden by an optional `timeframe.{toml,json,yaml}` in the
    /// working directory, overridden by `TIMEFRAME_*` environment variables.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        Self::load_from("timeframe")
    }

    /// Same layering with the settings file at `name` (extension optional).
    pub fn load_from(name: &str) -> Result<Self, ::config::ConfigError> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::with_name(name).required(false))
            .add_source(::config::Environment::with_prefix("TIMEFRAME").try_parsing(true))
            .build()?;
        settings.try_deserialize()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    pub fn source(&self) -> Result<Source, FetchError> {
        Source::from_location(&self.url, self.timeout())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.width.max(64),
            height: self.height.max(64),
            theme: theme::find(&self.theme),
            ..RenderOptions::default()
        }
    }
}
