// File: crates/vizkit-core/src/types.rs
// Summary: Shared types and constants (figure sizes, point units, paddings).

use serde::Deserialize;

/// Typographic points per inch; figure geometry is laid out in points.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Figure size in inches, as written in the style document (`[w, h]`).
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(from = "[f32; 2]")]
pub struct FigureSize {
    pub width_in: f32,
    pub height_in: f32,
}

impl FigureSize {
    pub const fn new(width_in: f32, height_in: f32) -> Self {
        Self { width_in, height_in }
    }
    pub fn width_pt(&self) -> f32 { self.width_in * POINTS_PER_INCH }
    pub fn height_pt(&self) -> f32 { self.height_in * POINTS_PER_INCH }

    /// Pixel dimensions at `dpi`, never smaller than one pixel.
    pub fn pixels(&self, dpi: f32) -> (i32, i32) {
        let w = (self.width_in * dpi).round().max(1.0) as i32;
        let h = (self.height_in * dpi).round().max(1.0) as i32;
        (w, h)
    }
}

impl From<[f32; 2]> for FigureSize {
    fn from([w, h]: [f32; 2]) -> Self {
        Self::new(w, h)
    }
}

/// Margins around the plot area, in points.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left: left.max(0.0), right: right.max(0.0), top: top.max(0.0), bottom: bottom.max(0.0) }
    }
}
