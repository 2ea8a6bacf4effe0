// File: crates/vizkit-core/src/render/mod.rs
// Summary: Chart requests, render results and the finalization shared by all chart kinds.

//! Chart renderers.
//!
//! Each chart kind has one stateless `render` function taking the resolved
//! [`StyleContext`], the [`StyleConfig`] for per-chart parameters, and a
//! request. It returns a [`Rendered`] chart holding the populated [`Figure`];
//! writing it out is the caller's job.

pub mod boxplot;
pub mod heatmap;
pub mod histogram;
pub mod scatter;

use std::path::{Path, PathBuf};

use skia_safe as skia;

use crate::axes::Axes;
use crate::config::{SaveParams, StyleConfig};
use crate::data::{DataTable, LabeledMatrix};
use crate::error::VizResult;
use crate::figure::Figure;
use crate::legend::Legend;
use crate::style::StyleContext;
use crate::trend::TrendLine;
use crate::types::FigureSize;
use crate::writer::SavedArtifact;

/// Title and axis labels of a chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLabels {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl ChartLabels {
    pub fn new(title: impl Into<String>, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self { title: title.into(), x_label: x_label.into(), y_label: y_label.into() }
    }
}

macro_rules! label_setters {
    () => {
        pub fn title(mut self, title: impl Into<String>) -> Self {
            self.labels.title = title.into();
            self
        }

        pub fn x_label(mut self, label: impl Into<String>) -> Self {
            self.labels.x_label = label.into();
            self
        }

        pub fn y_label(mut self, label: impl Into<String>) -> Self {
            self.labels.y_label = label.into();
            self
        }
    };
}

/// Scatter chart of `x` against `y`, optionally split into named groups.
#[derive(Clone, Debug)]
pub struct ScatterRequest<'a> {
    pub x: &'a [f64],
    pub y: &'a [f64],
    pub groups: Option<&'a [String]>,
    pub group_names: Option<&'a [String]>,
    pub output: PathBuf,
    pub labels: ChartLabels,
    pub trend_line: bool,
}

impl<'a> ScatterRequest<'a> {
    pub fn new(x: &'a [f64], y: &'a [f64], output: impl Into<PathBuf>) -> Self {
        Self {
            x,
            y,
            groups: None,
            group_names: None,
            output: output.into(),
            labels: ChartLabels::new("Scatter Plot", "X Variable", "Y Variable"),
            trend_line: true,
        }
    }

    /// Per-point group label, compared against each of the group names.
    pub fn groups(mut self, groups: &'a [String]) -> Self {
        self.groups = Some(groups);
        self
    }

    /// Groups to draw, in drawing and legend order.
    pub fn group_names(mut self, names: &'a [String]) -> Self {
        self.group_names = Some(names);
        self
    }

    pub fn trend_line(mut self, on: bool) -> Self {
        self.trend_line = on;
        self
    }

    label_setters!();
}

/// Box per distinct value of `category_column`, over `value_column`.
#[derive(Clone, Debug)]
pub struct BoxRequest<'a> {
    pub data: &'a DataTable,
    pub category_column: String,
    pub value_column: String,
    pub output: PathBuf,
    pub labels: ChartLabels,
}

impl<'a> BoxRequest<'a> {
    pub fn new(
        data: &'a DataTable,
        category_column: impl Into<String>,
        value_column: impl Into<String>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            data,
            category_column: category_column.into(),
            value_column: value_column.into(),
            output: output.into(),
            labels: ChartLabels::new("Box Plot", "Category", "Value"),
        }
    }

    label_setters!();
}

#[derive(Clone, Debug)]
pub struct HeatmapRequest<'a> {
    pub matrix: &'a LabeledMatrix,
    pub output: PathBuf,
    pub title: String,
}

impl<'a> HeatmapRequest<'a> {
    pub fn new(matrix: &'a LabeledMatrix, output: impl Into<PathBuf>) -> Self {
        Self { matrix, output: output.into(), title: "Heatmap".to_owned() }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

#[derive(Clone, Debug)]
pub struct HistogramRequest<'a> {
    pub data: &'a [f64],
    pub groups: Option<&'a [String]>,
    pub group_names: Option<&'a [String]>,
    pub output: PathBuf,
    pub labels: ChartLabels,
}

impl<'a> HistogramRequest<'a> {
    pub fn new(data: &'a [f64], output: impl Into<PathBuf>) -> Self {
        Self {
            data,
            groups: None,
            group_names: None,
            output: output.into(),
            labels: ChartLabels::new("Histogram", "Value", "Frequency"),
        }
    }

    pub fn groups(mut self, groups: &'a [String]) -> Self {
        self.groups = Some(groups);
        self
    }

    pub fn group_names(mut self, names: &'a [String]) -> Self {
        self.group_names = Some(names);
        self
    }

    label_setters!();
}

/// One drawn series (group, box or histogram subset) and how many values it holds.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesSummary {
    pub label: String,
    pub count: usize,
}

/// Populated figure and what went into it, before it is written.
pub struct Rendered {
    pub figure: Figure,
    pub series: Vec<SeriesSummary>,
    pub trend: Option<TrendLine>,
}

/// Summary of a written chart.
#[derive(Clone, Debug, PartialEq)]
pub struct SavedChart {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub series: Vec<SeriesSummary>,
    pub trend: Option<TrendLine>,
}

impl SavedChart {
    pub(crate) fn new(artifact: SavedArtifact, series: Vec<SeriesSummary>, trend: Option<TrendLine>) -> Self {
        Self { path: artifact.path, width: artifact.width, height: artifact.height, series, trend }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Values drawn across all series.
    pub fn total_count(&self) -> usize {
        self.series.iter().map(|s| s.count).sum()
    }
}

/// Figures rasterize at the save dpi, or at the global dpi when that is unusable.
pub(crate) fn new_figure(ctx: &StyleContext, config: &StyleConfig, size: FigureSize) -> VizResult<Figure> {
    let save_dpi = SaveParams::resolve(config).dpi;
    let dpi = if save_dpi.is_finite() && save_dpi > 0.0 { save_dpi } else { ctx.dpi };
    Figure::new(size, dpi, &ctx.font_family)
}

/// Spines, ticks, bold title and axis labels, then the legend when one was
/// requested. `occupied` holds data positions the legend should avoid.
pub(crate) fn finalize(
    fig: &mut Figure,
    ctx: &StyleContext,
    axes: &Axes,
    labels: &ChartLabels,
    legend: Option<&Legend>,
    occupied: &[skia::Point],
) {
    axes.draw_spines(fig, ctx);
    axes.draw_ticks(fig, ctx);
    axes.draw_labels(fig, ctx, &labels.title, &labels.x_label, &labels.y_label);
    if let Some(legend) = legend.filter(|l| !l.is_empty()) {
        legend.draw(fig, ctx, axes.frame, occupied);
    }
}

/// Signature shared by the per-kind `render` functions.
pub(crate) type RenderFn<R> = fn(&StyleContext, &StyleConfig, &R) -> VizResult<Rendered>;
