// File: crates/vizkit-core/src/style.rs
// Summary: Resolved rendering defaults handed explicitly to every renderer.

use tracing::{debug, warn};

use crate::config::{FontSizes, GlobalSettings, StyleConfig};
use crate::theme::{self, Theme};
use crate::types::FigureSize;

/// Global and typographic settings resolved once per manager.
///
/// Renderers read these values instead of any process-wide state, so two
/// managers with different documents can render side by side.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleContext {
    pub theme: Theme,
    pub font_family: String,
    /// Render negative tick values with U+2212 instead of ASCII `-`.
    pub unicode_minus: bool,
    pub figure_size: FigureSize,
    pub dpi: f32,
    pub alpha: f32,
    pub grid_alpha: f32,
    /// Base font size for tick and annotation text.
    pub base_font_size: f32,
    pub fonts: FontSizes,
}

impl StyleContext {
    pub fn apply(config: &StyleConfig) -> Self {
        let global = GlobalSettings::resolve(config);
        let fonts = FontSizes::resolve(config);
        let theme = theme::find(&global.style).unwrap_or_else(|| {
            warn!(style = %global.style, "unknown style, using whitegrid");
            Theme::whitegrid()
        });
        debug!(
            theme = theme.name,
            font = %global.font_family,
            width_in = global.figure_size.width_in,
            height_in = global.figure_size.height_in,
            dpi = global.dpi,
            "applied style"
        );
        Self {
            theme,
            font_family: global.font_family,
            unicode_minus: false,
            figure_size: global.figure_size,
            dpi: global.dpi,
            alpha: global.alpha,
            grid_alpha: global.grid_alpha,
            base_font_size: fonts.tick_label,
            fonts,
        }
    }

    /// Format a tick value, honoring the unicode-minus policy.
    pub fn minus(&self, text: String) -> String {
        if self.unicode_minus { text.replace('-', "\u{2212}") } else { text }
    }
}

impl Default for StyleContext {
    fn default() -> Self {
        Self::apply(&StyleConfig::default())
    }
}
