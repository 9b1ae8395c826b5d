// File: crates/timeframe-dioxus/src/page.rs
// Summary: UI-independent page state: load lifecycle, active timeframe, zoom gesture, hover and point clicks.

use std::path::Path;

use anyhow::{bail, Result};
use timeframe_core::{filter, ChartView, DataPoint, RenderOptions, Timeframe, ZoomState};
use timeframe_source::FetchError;

/// Lifecycle of the single load issued when the page mounts.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Loading,
    Failed(String),
    Ready(Vec<DataPoint>),
}

/// What the page shows right now.
#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    Loading,
    Error(String),
    Chart(ChartView),
}

#[derive(Clone, Debug)]
pub struct ChartPage {
    load: LoadState,
    pub timeframe: Timeframe,
    pub zoom: ZoomState,
    hover: Option<usize>,
    message: Option<String>,
    /// Set when a release finished a real drag; the click that follows it is not a point click.
    drag_released: bool,
    opts: RenderOptions,
}

impl ChartPage {
    pub fn new(opts: RenderOptions) -> Self {
        Self {
            load: LoadState::Loading,
            timeframe: Timeframe::default(),
            zoom: ZoomState::new(),
            hover: None,
            message: None,
            drag_released: false,
            opts,
        }
    }

    pub fn load_state(&self) -> &LoadState { &self.load }

    pub fn options(&self) -> &RenderOptions { &self.opts }

    /// Apply the load result. Only the first completion counts; returns
    /// whether this one was applied.
    pub fn loaded(&mut self, result: Result<Vec<DataPoint>, FetchError>) -> bool {
        if self.load != LoadState::Loading {
            tracing::debug!("late load result ignored");
            return false;
        }
        self.load = match result {
            Ok(points) => LoadState::Ready(points),
            Err(e) => LoadState::Failed(e.to_string()),
        };
        true
    }

    /// Points of the active timeframe; empty until the load succeeds.
    pub fn filtered(&self) -> Vec<DataPoint> {
        match &self.load {
            LoadState::Ready(points) => filter(points, self.timeframe),
            _ => Vec::new(),
        }
    }

    pub fn view(&self) -> Option<ChartView> {
        match &self.load {
            LoadState::Ready(_) => Some(ChartView::new(&self.filtered(), &self.zoom).with_hover(self.hover)),
            _ => None,
        }
    }

    pub fn screen(&self) -> Screen {
        match &self.load {
            LoadState::Loading => Screen::Loading,
            LoadState::Failed(msg) => Screen::Error(msg.clone()),
            LoadState::Ready(_) => self.view().map_or(Screen::Loading, Screen::Chart),
        }
    }

    /// Switch the window. The zoom domain is kept; a half-made selection is dropped.
    pub fn select_timeframe(&mut self, timeframe: Timeframe) {
        tracing::info!(%timeframe, "timeframe selected");
        self.timeframe = timeframe;
        self.zoom = ZoomState { selection: Default::default(), ..self.zoom };
        self.hover = None;
    }

    pub fn mouse_down(&mut self, px: f64) {
        self.drag_released = false;
        if let Some(x) = self.view().and_then(|v| v.x_at(px, &self.opts)) {
            self.zoom = self.zoom.begin_selection(x);
        }
    }

    pub fn mouse_move(&mut self, px: f64) {
        let Some(view) = self.view() else { return };
        match view.x_at(px, &self.opts) {
            Some(x) => {
                self.hover = view.nearest_index(px, &self.opts);
                self.zoom = self.zoom.update_selection(x);
            }
            None => self.hover = None,
        }
    }

    /// Finish the gesture. Returns whether it was a drag across distinct points.
    pub fn mouse_up(&mut self) -> bool {
        let dragged = matches!(self.zoom.selection.pending(), Some((a, b)) if a != b);
        self.zoom = self.zoom.commit_selection(&self.filtered());
        self.drag_released = dragged;
        dragged
    }

    pub fn mouse_leave(&mut self) {
        self.hover = None;
    }

    /// Click on a plotted point: remembers and returns "Value: V at T".
    /// The click ending a drag is ignored.
    pub fn click(&mut self, px: f64, py: f64) -> Option<String> {
        if std::mem::take(&mut self.drag_released) {
            return None;
        }
        let view = self.view()?;
        let p = view.hit_test(px, py, &self.opts)?;
        let msg = format!("Value: {} at {}", p.value, p.iso_timestamp());
        self.message = Some(msg.clone());
        Some(msg)
    }

    pub fn message(&self) -> Option<&str> { self.message.as_deref() }

    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    pub fn dismiss_message(&mut self) {
        self.message = None;
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.reset();
    }

    /// Current chart as PNG bytes, for the on-screen image.
    pub fn render_png(&self) -> Result<Vec<u8>> {
        match self.view() {
            Some(view) => view.render_to_png_bytes(&self.opts),
            None => bail!("no chart to render"),
        }
    }

    /// Save exactly what is on screen.
    pub fn export(&self, path: impl AsRef<Path>) -> Result<()> {
        match self.view() {
            Some(view) => view.render_to_png(&self.opts, path),
            None => bail!("nothing to export before the series has loaded"),
        }
    }
}
