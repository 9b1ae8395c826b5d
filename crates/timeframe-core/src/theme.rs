// File: crates/timeframe-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub tick: skia::Color,
    pub line_stroke: skia::Color,
    pub active_dot: skia::Color,
    pub selection_fill: skia::Color,
    pub selection_stroke: skia::Color,
    pub tooltip_background: skia::Color,
    pub tooltip_border: skia::Color,
    pub tooltip_text: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 52, 52, 58),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            line_stroke: skia::Color::from_argb(255, 0x88, 0x84, 0xd8),
            active_dot: skia::Color::from_argb(255, 0xb3, 0xb0, 0xff),
            selection_fill: skia::Color::from_argb(70, 200, 200, 210),
            selection_stroke: skia::Color::from_argb(77, 200, 200, 210),
            tooltip_background: skia::Color::from_argb(235, 32, 32, 38),
            tooltip_border: skia::Color::from_argb(255, 90, 90, 100),
            tooltip_text: skia::Color::from_argb(255, 235, 235, 245),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 204, 204, 204),
            axis_line: skia::Color::from_argb(255, 102, 102, 102),
            tick: skia::Color::from_argb(255, 102, 102, 102),
            line_stroke: skia::Color::from_argb(255, 0x88, 0x84, 0xd8),
            active_dot: skia::Color::from_argb(255, 0x88, 0x84, 0xd8),
            selection_fill: skia::Color::from_argb(60, 120, 120, 130),
            selection_stroke: skia::Color::from_argb(77, 120, 120, 130),
            tooltip_background: skia::Color::from_argb(245, 255, 255, 255),
            tooltip_border: skia::Color::from_argb(255, 204, 204, 204),
            tooltip_text: skia::Color::from_argb(255, 20, 20, 30),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}
