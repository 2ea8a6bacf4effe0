// File: crates/vizkit-core/src/render/boxplot.rs
// Summary: Box renderer: one (optionally notched) Tukey box per category, in first-seen order.

use skia_safe as skia;

use super::{finalize, new_figure, BoxRequest, Rendered, SeriesSummary};
use crate::axes::{AxisSpec, Axes};
use crate::color::{with_alpha, CategoryColors, NEUTRAL_GRAY, PALETTE};
use crate::config::{AxesParams, BoxParams, StyleConfig};
use crate::data::{display_label, select};
use crate::error::VizResult;
use crate::figure::{fill_paint, stroke_paint, Figure};
use crate::scale::Limits;
use crate::stats::BoxStats;
use crate::style::StyleContext;

const MARGIN: f64 = 0.05;
/// Box width as a fraction of one category slot.
const BOX_WIDTH: f64 = 0.5;
const LINE_WIDTH: f32 = 1.0;
const FLIER_RADIUS: f32 = 3.0;

pub fn render(ctx: &StyleContext, config: &StyleConfig, req: &BoxRequest<'_>) -> VizResult<Rendered> {
    let params = BoxParams::resolve(config);
    let axes_params = AxesParams::resolve(config);
    let colors = CategoryColors::from_config(config);

    let labels = req.data.column(&req.category_column)?.to_text();
    let values = req.data.numbers(&req.value_column)?;

    let mut categories: Vec<&str> = Vec::new();
    for label in &labels {
        if !categories.contains(&label.as_str()) {
            categories.push(label);
        }
    }

    let mut boxes = Vec::with_capacity(categories.len());
    for &category in &categories {
        let indices: Vec<usize> = labels.iter().enumerate().filter(|(_, l)| *l == category).map(|(i, _)| i).collect();
        let subset = select(values, &indices, "value column")?;
        let face = colors.resolve_or(category, NEUTRAL_GRAY)?;
        boxes.push((category, BoxStats::compute(&subset), face, subset.len()));
    }

    let y_limits = boxes
        .iter()
        .filter_map(|(_, stats, _, _)| stats.as_ref().map(|s| s.extent(params.notch)))
        .map(|(lo, hi)| Limits::new(lo, hi))
        .reduce(Limits::union)
        .unwrap_or_default();

    let mut fig = new_figure(ctx, config, ctx.figure_size)?;
    let x_axis = AxisSpec::Categorical {
        labels: categories.iter().map(|c| display_label(c)).collect(),
        rotation: axes_params.x_rotation,
    };
    let axes = Axes::new(&fig, ctx, x_axis, AxisSpec::Numeric(y_limits.with_margin(MARGIN)), 0.0);
    axes.draw_background(&mut fig, ctx, Some(ctx.grid_alpha));

    axes.clip(&mut fig);
    for (i, (_, stats, face, _)) in boxes.iter().enumerate() {
        if let Some(stats) = stats {
            draw_box(&mut fig, &axes, i as f64 + 0.5, stats, with_alpha(*face, params.patch_alpha), params.notch);
        }
    }
    axes.unclip(&mut fig);

    finalize(&mut fig, ctx, &axes, &req.labels, None, &[]);

    let series = boxes
        .into_iter()
        .map(|(category, _, _, count)| SeriesSummary { label: display_label(category), count })
        .collect();
    Ok(Rendered { figure: fig, series, trend: None })
}

fn draw_box(fig: &mut Figure, axes: &Axes, center: f64, stats: &BoxStats, face: skia::Color, notch: bool) {
    let half = BOX_WIDTH * 0.5;
    let (left, right) = (axes.x.to_px(center - half), axes.x.to_px(center + half));
    let mid = axes.x.to_px(center);
    let y = |v: f64| axes.y.to_px(v);
    // Notches pinch the box to half its width at the median.
    let inset = if notch { (right - left) * 0.25 } else { 0.0 };

    let mut path = skia::Path::new();
    if notch {
        path.move_to((left, y(stats.q1)));
        path.line_to((left, y(stats.notch_lo)));
        path.line_to((left + inset, y(stats.median)));
        path.line_to((left, y(stats.notch_hi)));
        path.line_to((left, y(stats.q3)));
        path.line_to((right, y(stats.q3)));
        path.line_to((right, y(stats.notch_hi)));
        path.line_to((right - inset, y(stats.median)));
        path.line_to((right, y(stats.notch_lo)));
        path.line_to((right, y(stats.q1)));
    } else {
        path.move_to((left, y(stats.q1)));
        path.line_to((left, y(stats.q3)));
        path.line_to((right, y(stats.q3)));
        path.line_to((right, y(stats.q1)));
    }
    path.close();

    let edge = stroke_paint(skia::Color::BLACK, LINE_WIDTH);
    let canvas = fig.canvas();
    canvas.draw_path(&path, &fill_paint(face));
    canvas.draw_path(&path, &edge);

    // whiskers and caps
    let cap_half = (right - left) * 0.25;
    for (from, to) in [(stats.q1, stats.whisker_lo), (stats.q3, stats.whisker_hi)] {
        canvas.draw_line((mid, y(from)), (mid, y(to)), &edge);
        canvas.draw_line((mid - cap_half, y(to)), (mid + cap_half, y(to)), &edge);
    }

    let median = stroke_paint(PALETTE[1], LINE_WIDTH * 1.5);
    canvas.draw_line((left + inset, y(stats.median)), (right - inset, y(stats.median)), &median);

    for &v in &stats.fliers {
        canvas.draw_circle((mid, y(v)), FLIER_RADIUS, &edge);
    }
}
