// File: crates/vizkit-core/src/theme.rs
// Summary: Named visual themes selecting axes, grid, spine and text colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub axes_face: skia::Color,
    pub grid: skia::Color,
    pub spine: skia::Color,
    /// Spines are hidden on the "grid" themes with a tinted face.
    pub draw_spines: bool,
    pub text: skia::Color,
    pub tick: skia::Color,
    /// Tick marks outside the spines ("ticks" theme only).
    pub tick_marks: bool,
    pub legend_face: skia::Color,
    pub legend_edge: skia::Color,
}

impl Theme {
    pub fn whitegrid() -> Self {
        Self {
            name: "whitegrid",
            axes_face: skia::Color::WHITE,
            grid: skia::Color::from_argb(255, 0xCC, 0xCC, 0xCC),
            spine: skia::Color::from_argb(255, 0xCC, 0xCC, 0xCC),
            draw_spines: true,
            text: skia::Color::from_argb(255, 0x26, 0x26, 0x26),
            tick: skia::Color::from_argb(255, 0x26, 0x26, 0x26),
            tick_marks: false,
            legend_face: skia::Color::from_argb(204, 255, 255, 255),
            legend_edge: skia::Color::from_argb(255, 0xCC, 0xCC, 0xCC),
        }
    }

    pub fn darkgrid() -> Self {
        Self {
            name: "darkgrid",
            axes_face: skia::Color::from_argb(255, 0xEA, 0xEA, 0xF2),
            grid: skia::Color::WHITE,
            spine: skia::Color::WHITE,
            draw_spines: false,
            ..Self::whitegrid()
        }
    }

    pub fn white() -> Self {
        Self {
            name: "white",
            grid: skia::Color::from_argb(255, 0xB0, 0xB0, 0xB0),
            spine: skia::Color::from_argb(255, 0x26, 0x26, 0x26),
            ..Self::whitegrid()
        }
    }

    pub fn dark() -> Self {
        Self { name: "dark", grid: skia::Color::WHITE, ..Self::darkgrid() }
    }

    pub fn ticks() -> Self {
        Self { name: "ticks", tick_marks: true, ..Self::white() }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::whitegrid()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::whitegrid(), Theme::darkgrid(), Theme::white(), Theme::dark(), Theme::ticks()]
}

/// Find a theme by its `name`.
pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}
