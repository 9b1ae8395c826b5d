// File: crates/timeframe-dioxus/src/bin/desktop_demo.rs
// Purpose: Launcher for the desktop timeframe chart; settings come from timeframe.toml / TIMEFRAME_* env.

use timeframe_source::SourceConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .init();

    let config = match SourceConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "invalid settings, using defaults");
            SourceConfig::default()
        }
    };
    if let Err(e) = timeframe_dioxus::run_desktop(config) {
        eprintln!("timeframe-dioxus error: {e}");
        std::process::exit(1);
    }
}
