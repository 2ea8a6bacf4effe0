// File: crates/vizkit-core/src/color.rs
// Summary: Color strings, the indexed category palette and continuous colormaps.

use skia_safe as skia;

use crate::config::StyleConfig;
use crate::error::{VizError, VizResult};

/// Ten-color category cycle, addressed as `C0`..`C9`.
pub const PALETTE: [skia::Color; 10] = [
    skia::Color::new(0xFF1F77B4),
    skia::Color::new(0xFFFF7F0E),
    skia::Color::new(0xFF2CA02C),
    skia::Color::new(0xFFD62728),
    skia::Color::new(0xFF9467BD),
    skia::Color::new(0xFF8C564B),
    skia::Color::new(0xFFE377C2),
    skia::Color::new(0xFF7F7F7F),
    skia::Color::new(0xFFBCBD22),
    skia::Color::new(0xFF17BECF),
];

/// Box face used when a category has no configured color.
pub const NEUTRAL_GRAY: skia::Color = skia::Color::new(0xFF333333);

const NAMED: &[(&str, u32)] = &[
    ("white", 0xFFFFFFFF),
    ("black", 0xFF000000),
    ("gray", 0xFF808080),
    ("grey", 0xFF808080),
    ("lightgray", 0xFFD3D3D3),
    ("darkgray", 0xFFA9A9A9),
    ("red", 0xFFFF0000),
    ("green", 0xFF008000),
    ("blue", 0xFF0000FF),
    ("orange", 0xFFFFA500),
    ("purple", 0xFF800080),
    ("tomato", 0xFFFF6347),
    ("steelblue", 0xFF4682B4),
    ("seagreen", 0xFF2E8B57),
    ("peru", 0xFFCD853F),
    ("navy", 0xFF000080),
    ("teal", 0xFF008080),
];

/// Indexed palette color `C{index}`; the cycle wraps every ten entries.
pub fn palette(index: usize) -> skia::Color {
    PALETTE[index % PALETTE.len()]
}

/// Parse `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `C<n>`, `none` or a named color.
pub fn parse_color(spec: &str) -> VizResult<skia::Color> {
    let s = spec.trim();
    let invalid = || VizError::InvalidColor(spec.to_owned());

    if let Some(hex) = s.strip_prefix('#') {
        let digits = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        return match hex.len() {
            3 => {
                let expand = |n: u32| ((n & 0xF) * 17) as u8;
                Ok(skia::Color::from_argb(255, expand(digits >> 8), expand(digits >> 4), expand(digits)))
            }
            6 => Ok(skia::Color::new(0xFF00_0000 | digits)),
            8 => Ok(skia::Color::new(digits.rotate_right(8))),
            _ => Err(invalid()),
        };
    }
    if let Some(index) = s.strip_prefix('C') {
        let index: usize = index.parse().map_err(|_| invalid())?;
        return Ok(palette(index));
    }
    if s.eq_ignore_ascii_case("none") || s.eq_ignore_ascii_case("transparent") {
        return Ok(skia::Color::TRANSPARENT);
    }
    NAMED
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(s))
        .map(|&(_, argb)| skia::Color::new(argb))
        .ok_or_else(invalid)
}

/// Scale a color's alpha channel by `alpha` (clamped to 0..=1).
pub fn with_alpha(color: skia::Color, alpha: f32) -> skia::Color {
    let a = (color.a() as f32 * alpha.clamp(0.0, 1.0)).round() as u8;
    color.with_a(a)
}

/// Category name to color mapping from `colors.strategy_colors`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryColors {
    entries: Vec<(String, String)>,
}

impl CategoryColors {
    pub fn from_config(config: &StyleConfig) -> Self {
        Self { entries: config.string_pairs(&["colors", "strategy_colors"]) }
    }

    /// Configured color string for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Configured color for `name`, else the palette color for `index`.
    pub fn resolve_indexed(&self, name: &str, index: usize) -> VizResult<skia::Color> {
        match self.get(name) {
            Some(spec) => parse_color(spec),
            None => Ok(palette(index)),
        }
    }

    /// Configured color for `name`, else `fallback`.
    pub fn resolve_or(&self, name: &str, fallback: skia::Color) -> VizResult<skia::Color> {
        match self.get(name) {
            Some(spec) => parse_color(spec),
            None => Ok(fallback),
        }
    }
}

/// Piecewise-linear continuous colormap over `[0, 1]`.
#[derive(Clone, Debug)]
pub struct Colormap {
    stops: Vec<skia::Color>,
}

const RDBU: &[u32] = &[
    0x67001F, 0xB2182B, 0xD6604D, 0xF4A582, 0xFDDBC7, 0xF7F7F7, 0xD1E5F0, 0x92C5DE, 0x4393C3,
    0x2166AC, 0x053061,
];
const COOLWARM: &[u32] = &[0x3B4CC0, 0x7396F5, 0xB0CBFC, 0xDDDDDD, 0xF6BFA6, 0xE7745B, 0xB40426];
const VIRIDIS: &[u32] = &[0x440154, 0x482878, 0x3E4A89, 0x31688E, 0x26828E, 0x1F9E89, 0x35B779, 0x6DCD59, 0xB4DE2C, 0xFDE725];
const BLUES: &[u32] = &[0xF7FBFF, 0xDEEBF7, 0xC6DBEF, 0x9ECAE1, 0x6BAED6, 0x4292C6, 0x2171B5, 0x08519C, 0x08306B];
const REDS: &[u32] = &[0xFFF5F0, 0xFEE0D2, 0xFCBBA1, 0xFC9272, 0xFB6A4A, 0xEF3B2C, 0xCB181D, 0xA50F15, 0x67000D];
const YLORRD: &[u32] = &[0xFFFFCC, 0xFFEDA0, 0xFED976, 0xFEB24C, 0xFD8D3C, 0xFC4E2A, 0xE31A1C, 0xBD0026, 0x800026];

impl Colormap {
    /// Look up a colormap by name; a `_r` suffix reverses it.
    pub fn by_name(name: &str) -> VizResult<Self> {
        let (base, reversed) = match name.strip_suffix("_r") {
            Some(base) => (base, true),
            None => (name, false),
        };
        let table = match base {
            "RdBu" => RDBU,
            "coolwarm" => COOLWARM,
            "viridis" => VIRIDIS,
            "Blues" => BLUES,
            "Reds" => REDS,
            "YlOrRd" => YLORRD,
            _ => return Err(VizError::UnknownColormap(name.to_owned())),
        };
        let mut stops: Vec<skia::Color> = table.iter().map(|&rgb| skia::Color::new(0xFF00_0000 | rgb)).collect();
        if reversed {
            stops.reverse();
        }
        Ok(Self { stops })
    }

    /// Color at `t` in `[0, 1]`; values outside are clamped.
    pub fn sample(&self, t: f64) -> skia::Color {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let last = self.stops.len() - 1;
        let pos = t * last as f64;
        let i = (pos.floor() as usize).min(last.saturating_sub(1));
        let frac = (pos - i as f64) as f32;
        let (a, b) = (self.stops[i], self.stops[(i + 1).min(last)]);
        let lerp = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * frac).round() as u8;
        skia::Color::from_argb(255, lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
    }
}

/// Relative luminance (sRGB, 0..1), used to pick readable annotation text.
pub fn relative_luminance(color: skia::Color) -> f32 {
    let channel = |c: u8| {
        let c = c as f32 / 255.0;
        if c <= 0.03928 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
    };
    0.2126 * channel(color.r()) + 0.7152 * channel(color.g()) + 0.0722 * channel(color.b())
}
