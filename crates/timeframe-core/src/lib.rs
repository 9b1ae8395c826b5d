// File: crates/timeframe-core/src/lib.rs
// Summary: Core library entry point; exports the series model, timeframe filter, zoom state and chart view.

pub mod axis;
pub mod chart;
pub mod geometry;
pub mod grid;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;
pub mod timeframe;
pub mod types;
pub mod view;
pub mod zoom;

pub use axis::{Axis, AxisKind};
pub use chart::{RenderOptions, EXPORT_FILE_NAME};
pub use series::{DataPoint, Series};
pub use text::TextShaper;
pub use theme::Theme;
pub use timeframe::{filter, ParseTimeframeError, Timeframe};
pub use view::ChartView;
pub use zoom::{Domain, Selection, ZoomState};
