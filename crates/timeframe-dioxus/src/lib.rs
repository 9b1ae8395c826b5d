// File: crates/timeframe-dioxus/src/lib.rs
// Summary: Desktop page for the timeframe chart: toolbar, drag-to-zoom image and point clicks.
// Notes:
// - Page state lives in `page` and builds without UI crates; the Dioxus component is
//   behind the `desktop` feature.
// - The chart is drawn by timeframe-core and shown as a PNG data-URL <img>.

pub mod page;

pub use page::{ChartPage, LoadState, Screen};

#[cfg(feature = "desktop")]
pub mod ui {
    use base64::Engine as _;
    use dioxus::prelude::*;
    use timeframe_core::{Timeframe, EXPORT_FILE_NAME};
    use timeframe_source::SourceConfig;

    use crate::page::{ChartPage, Screen};

    const BUTTON_STYLE: &str = "padding:4px 12px; background:#2a2a30; color:#ddd; border:1px solid #444; border-radius:3px; cursor:pointer;";

    fn toggle_style(selected: bool) -> String {
        if selected {
            format!("{BUTTON_STYLE} background:#8884d8; color:#111;")
        } else {
            BUTTON_STYLE.to_string()
        }
    }

    /// Loads the series once on mount, then serves the interactive chart.
    #[component]
    pub fn TimeframeChart(config: SourceConfig) -> Element {
        let opts = config.render_options();
        let (width, height) = (opts.width, opts.height);
        let mut page = use_signal(move || ChartPage::new(opts));

        // Dropped with the component: an unmounted page never sees the result.
        let _load = use_resource(move || {
            let config = config.clone();
            async move {
                let result = match config.source() {
                    Ok(source) => source.load().await,
                    Err(e) => Err(e),
                };
                page.write().loaded(result);
            }
        });

        let screen = page.read().screen();
        let body = match screen {
            Screen::Loading => rsx! { div { style: "padding:16px;", "Loading..." } },
            Screen::Error(msg) => rsx! { div { style: "padding:16px; color:#f66;", "Error: {msg}" } },
            Screen::Chart(view) => {
                let src = match view.render_to_png_bytes(page.read().options()) {
                    Ok(bytes) => format!("data:image/png;base64,{}", base64::engine::general_purpose::STANDARD.encode(bytes)),
                    Err(e) => {
                        tracing::error!(error = %e, "chart render failed");
                        String::new()
                    }
                };
                let active = page.read().timeframe;
                let message = page.read().message().map(str::to_string);
                rsx! {
                    div { style: "display:flex; gap:6px; padding:8px;",
                        for (tf, label) in [Timeframe::Daily, Timeframe::Weekly, Timeframe::Monthly].map(|tf| (tf, tf.label())) {
                            button {
                                style: toggle_style(tf == active),
                                onclick: move |_| page.write().select_timeframe(tf),
                                "{label}"
                            }
                        }
                        button {
                            style: BUTTON_STYLE,
                            onclick: move |_| {
                                let result = page.read().export(EXPORT_FILE_NAME);
                                match result {
                                    Ok(()) => page.write().set_message(format!("Saved {EXPORT_FILE_NAME}")),
                                    Err(e) => {
                                        tracing::error!(error = %e, "export failed");
                                        page.write().set_message(format!("Export failed: {e}"));
                                    }
                                }
                            },
                            "Export"
                        }
                        button { style: BUTTON_STYLE, onclick: move |_| page.write().zoom_out(), "Zoom Out" }
                    }
                    if let Some(msg) = message {
                        div { style: "margin:0 8px 8px; padding:6px 10px; background:#1e1e24; border:1px solid #444; display:flex; gap:12px;",
                            span { "{msg}" }
                            button { style: BUTTON_STYLE, onclick: move |_| page.write().dismiss_message(), "OK" }
                        }
                    }
                    div {
                        style: format!("position:relative; width:{width}px; height:{height}px; user-select:none; cursor:crosshair;"),
                        onmousedown: move |evt: MouseEvent| page.write().mouse_down(evt.element_coordinates().x),
                        onmousemove: move |evt: MouseEvent| page.write().mouse_move(evt.element_coordinates().x),
                        onmouseup: move |_| {
                            page.write().mouse_up();
                        },
                        onmouseleave: move |_| page.write().mouse_leave(),
                        onclick: move |evt: MouseEvent| {
                            let p = evt.element_coordinates();
                            page.write().click(p.x, p.y);
                        },
                        img {
                            src,
                            draggable: "false",
                            style: format!("position:absolute; left:0; top:0; width:{width}px; height:{height}px; pointer-events:none;"),
                        }
                    }
                }
            }
        };

        rsx! {
            div { style: "font-family:sans-serif; background:#121214; color:#ddd; min-height:100vh;",
                {body}
            }
        }
    }

    #[component]
    fn App() -> Element {
        let config = use_context::<SourceConfig>();
        rsx! { TimeframeChart { config } }
    }

    /// Open the desktop window; `config` is handed to the page as context.
    pub fn run_desktop(config: SourceConfig) -> anyhow::Result<()> {
        let size = dioxus_desktop::tao::dpi::LogicalSize::new(config.width as f64 + 32.0, config.height as f64 + 120.0);
        let cfg = dioxus_desktop::Config::new()
            .with_window(dioxus_desktop::WindowBuilder::new().with_title("Timeframe Chart").with_inner_size(size))
            .with_prerendered("<style>html,body{margin:0;background:#121214}</style>".to_string());
        let contexts: Vec<Box<dyn Fn() -> Box<dyn std::any::Any> + Send + Sync>> =
            vec![Box::new(move || Box::new(config.clone()) as Box<dyn std::any::Any>)];
        let platform: Vec<Box<dyn std::any::Any>> = vec![Box::new(cfg)];
        dioxus_desktop::launch::launch(App, contexts, platform)
    }
}

/// Fallback when the `desktop` feature is not enabled.
#[cfg(not(feature = "desktop"))]
pub fn run_desktop(_config: timeframe_source::SourceConfig) -> anyhow::Result<()> {
    anyhow::bail!("timeframe-dioxus built without `desktop` feature; enable it to open the window")
}

#[cfg(feature = "desktop")]
pub use ui::run_desktop;
