// File: crates/vizkit-core/src/manager.rs
// Summary: VisualizationManager: owns the style document and context, renders and saves charts.

use std::path::Path;

use tracing::debug;

use crate::color::CategoryColors;
use crate::config::{SaveParams, StyleConfig};
use crate::error::VizResult;
use crate::render::{
    boxplot, heatmap, histogram, scatter, BoxRequest, HeatmapRequest, HistogramRequest, RenderFn, SavedChart,
    ScatterRequest,
};
use crate::style::StyleContext;
use crate::writer;

/// Entry point for chart creation.
///
/// The manager resolves its style document once; every `create_*` call
/// renders into a fresh figure, writes it, and keeps no drawing state.
#[derive(Clone, Debug)]
pub struct VisualizationManager {
    config: StyleConfig,
    style: StyleContext,
}

impl VisualizationManager {
    /// Load the style document at `config_path` (built-in defaults when it
    /// cannot be loaded).
    pub fn new(config_path: impl AsRef<Path>) -> Self {
        Self::from_config(StyleConfig::load(config_path))
    }

    pub fn from_config(config: StyleConfig) -> Self {
        let style = StyleContext::apply(&config);
        Self { config, style }
    }

    pub fn config(&self) -> &StyleConfig {
        &self.config
    }

    pub fn style(&self) -> &StyleContext {
        &self.style
    }

    /// Category colors from `colors.strategy_colors`.
    pub fn colors(&self) -> CategoryColors {
        CategoryColors::from_config(&self.config)
    }

    pub fn create_scatter(&self, req: &ScatterRequest<'_>) -> VizResult<SavedChart> {
        self.create(scatter::render, req, &req.output)
    }

    pub fn create_box(&self, req: &BoxRequest<'_>) -> VizResult<SavedChart> {
        self.create(boxplot::render, req, &req.output)
    }

    pub fn create_heatmap(&self, req: &HeatmapRequest<'_>) -> VizResult<SavedChart> {
        self.create(heatmap::render, req, &req.output)
    }

    pub fn create_histogram(&self, req: &HistogramRequest<'_>) -> VizResult<SavedChart> {
        self.create(histogram::render, req, &req.output)
    }

    fn create<R>(&self, render: RenderFn<R>, req: &R, output: &Path) -> VizResult<SavedChart> {
        let mut rendered = render(&self.style, &self.config, req)?;
        let save = SaveParams::resolve(&self.config);
        let artifact = writer::save(&mut rendered.figure, output, &save)?;
        debug!(path = %artifact.path.display(), series = rendered.series.len(), "chart complete");
        Ok(SavedChart::new(artifact, rendered.series, rendered.trend))
    }
}

impl Default for VisualizationManager {
    fn default() -> Self {
        Self::from_config(StyleConfig::default())
    }
}
