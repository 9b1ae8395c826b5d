// File: crates/demo/src/main.rs
// Summary: `timeframe-export [SOURCE] [--timeframe T] [--zoom FROM TO] [--out PATH]` renders the chart to a PNG.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use timeframe_core::{filter, ChartView, Timeframe, ZoomState, EXPORT_FILE_NAME};
use timeframe_source::{parse_timestamp_str, SourceConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const USAGE: &str = "usage: timeframe-export [SOURCE] [--timeframe daily|weekly|monthly|all] [--zoom FROM TO] [--out PATH]";

#[derive(Debug, PartialEq)]
struct Args {
    source: Option<String>,
    timeframe: Timeframe,
    /// Epoch-ms bounds of a drag selection, in the order given.
    zoom: Option<(f64, f64)>,
    out: PathBuf,
}

impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut parsed = Args { source: None, timeframe: Timeframe::default(), zoom: None, out: PathBuf::from(EXPORT_FILE_NAME) };
        let mut it = args.into_iter();
        while let Some(arg) = it.next() {
            match arg.as_str() {
                "--timeframe" | "-t" => {
                    let v = it.next().context("--timeframe needs a value")?;
                    parsed.timeframe = v.parse()?;
                }
                "--zoom" | "-z" => {
                    let (Some(from), Some(to)) = (it.next(), it.next()) else {
                        bail!("--zoom needs FROM and TO timestamps");
                    };
                    parsed.zoom = Some((zoom_bound(&from)?, zoom_bound(&to)?));
                }
                "--out" | "-o" => parsed.out = PathBuf::from(it.next().context("--out needs a path")?),
                "--help" | "-h" => bail!("{USAGE}"),
                flag if flag.starts_with('-') => bail!("unknown option `{flag}`\n{USAGE}"),
                _ if parsed.source.is_none() => parsed.source = Some(arg),
                _ => bail!("unexpected argument `{arg}`\n{USAGE}"),
            }
        }
        Ok(parsed)
    }
}

fn zoom_bound(s: &str) -> Result<f64> {
    let ts = parse_timestamp_str(s).map_err(anyhow::Error::msg).with_context(|| format!("bad --zoom bound `{s}`"))?;
    Ok(ts.timestamp_millis() as f64)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .init();

    let args = Args::parse(std::env::args().skip(1))?;
    let mut config = SourceConfig::load().context("reading timeframe settings")?;
    if let Some(source) = &args.source {
        config.url = source.clone();
    }

    let source = config.source()?;
    let points = source.load().await.with_context(|| format!("loading {}", source.location()))?;
    let visible = filter(&points, args.timeframe);

    // Same gesture the page runs on a drag: markers, then commit against the visible points.
    let zoom = match args.zoom {
        Some((from, to)) => ZoomState::new().begin_selection(from).update_selection(to).commit_selection(&visible),
        None => ZoomState::new(),
    };

    let view = ChartView::new(&visible, &zoom);
    view.render_to_png(&config.render_options(), &args.out)?;
    println!(
        "Wrote {} ({} of {} points, {})",
        args.out.display(),
        visible.len(),
        points.len(),
        args.timeframe
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args> {
        Args::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args, Args { source: None, timeframe: Timeframe::Daily, zoom: None, out: PathBuf::from("chart.png") });
    }

    #[test]
    fn all_options() {
        let args = parse(&[
            "data.csv",
            "--timeframe",
            "Weekly",
            "--zoom",
            "2024-01-02T00:00:00Z",
            "2024-01-01",
            "-o",
            "out/week.png",
        ])
        .unwrap();
        assert_eq!(args.source.as_deref(), Some("data.csv"));
        assert_eq!(args.timeframe, Timeframe::Weekly);
        assert_eq!(args.zoom, Some((1_704_153_600_000.0, 1_704_067_200_000.0)));
        assert_eq!(args.out, PathBuf::from("out/week.png"));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse(&["--timeframe", "hourly"]).is_err());
        assert!(parse(&["--zoom", "2024-01-01"]).is_err());
        assert!(parse(&["--zoom", "soon", "2024-01-01"]).is_err());
        assert!(parse(&["a.json", "b.json"]).is_err());
        assert!(parse(&["--verbose"]).is_err());
    }
}
