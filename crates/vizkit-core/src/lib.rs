// File: crates/vizkit-core/src/lib.rs
// Summary: Library entry point; configuration-driven chart creation and one-shot helpers.

pub mod axes;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod figure;
pub mod legend;
pub mod manager;
pub mod render;
pub mod scale;
pub mod stats;
pub mod style;
pub mod telemetry;
pub mod text;
pub mod theme;
pub mod ticks;
pub mod trend;
pub mod types;
pub mod writer;

use std::path::Path;

pub use color::CategoryColors;
pub use config::{StyleConfig, DEFAULT_CONFIG_PATH};
pub use data::{Column, DataTable, LabeledMatrix};
pub use error::{VizError, VizResult};
pub use figure::Figure;
pub use manager::VisualizationManager;
pub use render::{
    BoxRequest, ChartLabels, HeatmapRequest, HistogramRequest, SavedChart, ScatterRequest, SeriesSummary,
};
pub use style::StyleContext;
pub use telemetry::init_default_tracing;
pub use theme::Theme;
pub use trend::TrendLine;
pub use types::FigureSize;
pub use writer::SavedArtifact;

/// Manager for the style document at `path`, with the built-in defaults
/// standing in when it cannot be loaded.
pub fn load_visualization_style(path: impl AsRef<Path>) -> VisualizationManager {
    VisualizationManager::new(path)
}

// One-shot helpers: each renders one request with a manager built from
// DEFAULT_CONFIG_PATH. Titles, labels, grouping and the trend line come from
// the request builder.

pub fn quick_scatter(req: &ScatterRequest<'_>) -> VizResult<SavedChart> {
    load_visualization_style(DEFAULT_CONFIG_PATH).create_scatter(req)
}

pub fn quick_boxplot(req: &BoxRequest<'_>) -> VizResult<SavedChart> {
    load_visualization_style(DEFAULT_CONFIG_PATH).create_box(req)
}

pub fn quick_heatmap(req: &HeatmapRequest<'_>) -> VizResult<SavedChart> {
    load_visualization_style(DEFAULT_CONFIG_PATH).create_heatmap(req)
}

pub fn quick_histogram(req: &HistogramRequest<'_>) -> VizResult<SavedChart> {
    load_visualization_style(DEFAULT_CONFIG_PATH).create_histogram(req)
}
