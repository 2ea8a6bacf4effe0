// File: crates/vizkit-core/src/config/params.rs
// Summary: Resolved per-section parameters; every field falls back to a literal default.

use serde::Deserialize;

use super::StyleConfig;
use crate::types::FigureSize;

#[derive(Clone, Debug, PartialEq)]
pub struct GlobalSettings {
    pub style: String,
    pub font_family: String,
    pub figure_size: FigureSize,
    pub dpi: f32,
    pub alpha: f32,
    pub grid_alpha: f32,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            style: "whitegrid".to_owned(),
            font_family: "DejaVu Sans".to_owned(),
            figure_size: FigureSize::new(10.0, 8.0),
            dpi: 300.0,
            alpha: 0.7,
            grid_alpha: 0.3,
        }
    }
}

impl GlobalSettings {
    pub fn resolve(config: &StyleConfig) -> Self {
        let d = Self::default();
        let key = |name| ["global_settings", name];
        Self {
            style: config.get_or(&key("style"), d.style),
            font_family: config.get_or(&key("font_family"), d.font_family),
            figure_size: config.get_or(&key("figure_size"), d.figure_size),
            dpi: config.get_or(&key("dpi"), d.dpi),
            alpha: config.get_or(&key("alpha"), d.alpha),
            grid_alpha: config.get_or(&key("grid_alpha"), d.grid_alpha),
        }
    }
}

/// Font sizes per typographic role, in points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSizes {
    pub title: f32,
    pub axis_label: f32,
    pub tick_label: f32,
    pub legend: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self { title: 16.0, axis_label: 14.0, tick_label: 12.0, legend: 12.0 }
    }
}

impl FontSizes {
    pub fn resolve(config: &StyleConfig) -> Self {
        let d = Self::default();
        let key = |name| ["font_sizes", name];
        Self {
            title: config.get_or(&key("title"), d.title),
            axis_label: config.get_or(&key("axis_label"), d.axis_label),
            tick_label: config.get_or(&key("tick_label"), d.tick_label),
            legend: config.get_or(&key("legend"), d.legend),
        }
    }
}

/// Stroke pattern, written either as a matplotlib shorthand or by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum LineStyle {
    #[serde(rename = "-", alias = "solid")]
    Solid,
    #[serde(rename = "--", alias = "dashed")]
    Dashed,
    #[serde(rename = ":", alias = "dotted")]
    Dotted,
    #[serde(rename = "-.", alias = "dashdot")]
    DashDot,
}

impl LineStyle {
    /// On/off dash intervals for a stroke of `width` points; `None` when solid.
    pub fn intervals(self, width: f32) -> Option<Vec<f32>> {
        let w = width.max(0.5);
        match self {
            LineStyle::Solid => None,
            LineStyle::Dashed => Some(vec![3.7 * w, 1.6 * w]),
            LineStyle::Dotted => Some(vec![1.0 * w, 1.65 * w]),
            LineStyle::DashDot => Some(vec![6.4 * w, 1.6 * w, 1.0 * w, 1.6 * w]),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrendLineParams {
    pub color: String,
    pub style: LineStyle,
    pub alpha: f32,
    pub width: f32,
}

impl Default for TrendLineParams {
    fn default() -> Self {
        Self { color: "#FF6347".to_owned(), style: LineStyle::Dashed, alpha: 0.8, width: 2.0 }
    }
}

impl TrendLineParams {
    pub fn resolve(config: &StyleConfig) -> Self {
        let d = Self::default();
        let key = |name| ["scatter_plot", "trend_line", name];
        // The generic `colors.trend_line` sits between the block and the literal.
        let generic_color = config.get_or(&["colors", "trend_line"], d.color);
        Self {
            color: config.get_or(&key("color"), generic_color),
            style: config.get_or(&key("style"), d.style),
            alpha: config.get_or(&key("alpha"), d.alpha),
            width: config.get_or(&key("width"), d.width),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScatterParams {
    /// Marker area in points squared.
    pub marker_size: f32,
    pub marker_alpha: f32,
    pub trend_line: TrendLineParams,
}

impl Default for ScatterParams {
    fn default() -> Self {
        Self { marker_size: 60.0, marker_alpha: 0.7, trend_line: TrendLineParams::default() }
    }
}

impl ScatterParams {
    pub fn resolve(config: &StyleConfig) -> Self {
        let d = Self::default();
        let alpha = config.get_or(&["global_settings", "alpha"], d.marker_alpha);
        Self {
            marker_size: config.get_or(&["scatter_plot", "marker_size"], d.marker_size),
            marker_alpha: config.get_or(&["scatter_plot", "marker_alpha"], alpha),
            trend_line: TrendLineParams::resolve(config),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxParams {
    pub notch: bool,
    pub patch_alpha: f32,
}

impl Default for BoxParams {
    fn default() -> Self {
        Self { notch: true, patch_alpha: 0.7 }
    }
}

impl BoxParams {
    pub fn resolve(config: &StyleConfig) -> Self {
        let d = Self::default();
        let alpha = config.get_or(&["global_settings", "alpha"], d.patch_alpha);
        Self {
            notch: config.get_or(&["box_plot", "notch"], d.notch),
            patch_alpha: config.get_or(&["box_plot", "patch_alpha"], alpha),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HistogramParams {
    pub alpha: f32,
    pub bins: usize,
    pub edge_color: String,
    pub edge_width: f32,
}

impl Default for HistogramParams {
    fn default() -> Self {
        Self { alpha: 0.6, bins: 20, edge_color: "black".to_owned(), edge_width: 0.5 }
    }
}

impl HistogramParams {
    pub fn resolve(config: &StyleConfig) -> Self {
        let d = Self::default();
        let key = |name| ["histogram", name];
        Self {
            alpha: config.get_or(&key("alpha"), d.alpha),
            bins: config.get_or(&key("bins"), d.bins).max(1),
            edge_color: config.get_or(&key("edge_color"), d.edge_color),
            edge_width: config.get_or(&key("edge_width"), d.edge_width),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeatmapParams {
    pub annot: bool,
    pub colormap: String,
    pub center: f64,
    pub square: bool,
    pub linewidths: f32,
    pub cbar_shrink: f32,
    pub fmt: String,
    pub figure_size: FigureSize,
}

impl Default for HeatmapParams {
    fn default() -> Self {
        Self {
            annot: true,
            colormap: "RdBu_r".to_owned(),
            center: 0.0,
            square: true,
            linewidths: 0.5,
            cbar_shrink: 0.8,
            fmt: ".3f".to_owned(),
            figure_size: FigureSize::new(8.0, 6.0),
        }
    }
}

impl HeatmapParams {
    pub fn resolve(config: &StyleConfig) -> Self {
        let d = Self::default();
        let key = |name| ["heatmap", name];
        Self {
            annot: config.get_or(&key("annot"), d.annot),
            colormap: config.get_or(&["colors", "heatmap_colormap"], d.colormap),
            center: config.get_or(&["colors", "heatmap_center"], d.center),
            square: config.get_or(&key("square"), d.square),
            linewidths: config.get_or(&key("linewidths"), d.linewidths),
            cbar_shrink: config.get_or(&key("cbar_shrink"), d.cbar_shrink),
            fmt: config.get_or(&key("fmt"), d.fmt),
            figure_size: config.get_or(
                &["chart_types", "correlation_heatmap", "figure_size"],
                d.figure_size,
            ),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxesParams {
    /// Rotation of categorical x tick labels, degrees counter-clockwise.
    pub x_rotation: f32,
}

impl Default for AxesParams {
    fn default() -> Self {
        Self { x_rotation: 45.0 }
    }
}

impl AxesParams {
    pub fn resolve(config: &StyleConfig) -> Self {
        Self { x_rotation: config.get_or(&["axes", "x_rotation"], Self::default().x_rotation) }
    }
}

/// How much of the figure ends up in the written file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BBoxMode {
    /// Crop to the drawn content plus a small pad.
    Tight,
    /// Keep the whole figure.
    Standard,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SaveParams {
    pub dpi: f32,
    pub bbox: BBoxMode,
    pub facecolor: String,
    pub edgecolor: String,
    pub transparent: bool,
}

impl Default for SaveParams {
    fn default() -> Self {
        Self {
            dpi: 300.0,
            bbox: BBoxMode::Tight,
            facecolor: "white".to_owned(),
            edgecolor: "none".to_owned(),
            transparent: false,
        }
    }
}

impl SaveParams {
    pub fn resolve(config: &StyleConfig) -> Self {
        let d = Self::default();
        let key = |name| ["output", "save_params", name];
        // An explicit `bbox_inches: null` keeps the whole figure.
        let bbox = config.get_or(&key("bbox_inches"), Some(d.bbox)).unwrap_or(BBoxMode::Standard);
        Self {
            dpi: config.get_or(&key("dpi"), d.dpi),
            bbox,
            facecolor: config.get_or(&key("facecolor"), d.facecolor),
            edgecolor: config.get_or(&key("edgecolor"), d.edgecolor),
            transparent: config.get_or(&key("transparent"), d.transparent),
        }
    }
}
