// File: crates/vizkit-core/src/render/scatter.rs
// Summary: Scatter renderer with optional named groups and a fitted trend line.

use skia_safe as skia;

use super::{finalize, new_figure, Rendered, ScatterRequest, SeriesSummary};
use crate::axes::{AxisSpec, Axes};
use crate::color::{palette, with_alpha, CategoryColors};
use crate::config::{ScatterParams, StyleConfig};
use crate::data::{display_label, resolve_grouping, select};
use crate::error::{VizError, VizResult};
use crate::figure::fill_paint;
use crate::legend::{Legend, Swatch};
use crate::scale::Limits;
use crate::style::StyleContext;
use crate::trend::{self, TrendLine};

const MARGIN: f64 = 0.05;

struct Series {
    label: String,
    color: skia::Color,
    x: Vec<f64>,
    y: Vec<f64>,
}

pub fn render(ctx: &StyleContext, config: &StyleConfig, req: &ScatterRequest<'_>) -> VizResult<Rendered> {
    let params = ScatterParams::resolve(config);
    if req.y.len() != req.x.len() {
        return Err(VizError::LengthMismatch { what: "y values", got: req.y.len(), expected: req.x.len() });
    }

    let grouping = resolve_grouping(req.groups, req.group_names, req.x.len())?;
    let series = match &grouping {
        Some(groups) => {
            let colors = CategoryColors::from_config(config);
            groups
                .iter()
                .enumerate()
                .map(|(i, group)| {
                    Ok(Series {
                        label: display_label(group.name),
                        color: colors.resolve_indexed(group.name, i)?,
                        x: select(req.x, &group.indices, "x values")?,
                        y: select(req.y, &group.indices, "y values")?,
                    })
                })
                .collect::<VizResult<Vec<_>>>()?
        }
        None => vec![Series {
            label: req.labels.y_label.clone(),
            color: palette(0),
            x: req.x.to_vec(),
            y: req.y.to_vec(),
        }],
    };

    // The fit always covers every point, grouped or not. Its endpoints count
    // toward the y limits, so the line is fitted before the axes exist.
    let limits_fit = if req.trend_line { Some(TrendLine::fit(req.x, req.y)?) } else { None };

    let trend_y = limits_fit.iter().flat_map(|t| [t.start.1, t.end.1]);
    let x_limits = Limits::of(series.iter().flat_map(|s| s.x.iter().copied())).unwrap_or_default();
    let y_limits = Limits::of(series.iter().flat_map(|s| s.y.iter().copied()).chain(trend_y)).unwrap_or_default();

    let mut fig = new_figure(ctx, config, ctx.figure_size)?;
    let axes = Axes::new(
        &fig,
        ctx,
        AxisSpec::Numeric(x_limits.with_margin(MARGIN)),
        AxisSpec::Numeric(y_limits.with_margin(MARGIN)),
        0.0,
    );
    axes.draw_background(&mut fig, ctx, Some(ctx.grid_alpha));

    // Marker size is an area in pt², like the side of a square marker squared.
    let radius = params.marker_size.max(0.0).sqrt() * 0.5;
    let mut legend = Legend::default();
    let mut occupied = Vec::new();
    axes.clip(&mut fig);
    for s in &series {
        let color = with_alpha(s.color, params.marker_alpha);
        let paint = fill_paint(color);
        for (&x, &y) in s.x.iter().zip(&s.y) {
            if !(x.is_finite() && y.is_finite()) {
                continue;
            }
            let p = axes.to_px(x, y);
            fig.canvas().draw_circle(p, radius, &paint);
            occupied.push(p);
        }
        legend.push(s.label.clone(), Swatch::Marker { color });
    }
    axes.unclip(&mut fig);

    let trend = if req.trend_line {
        Some(trend::annotate(&mut fig, &axes, req.x, req.y, &params.trend_line, &mut legend)?)
    } else {
        None
    };

    let legend = grouping.is_some().then_some(&legend);
    finalize(&mut fig, ctx, &axes, &req.labels, legend, &occupied);

    let series = series.into_iter().map(|s| SeriesSummary { count: s.x.len(), label: s.label }).collect();
    Ok(Rendered { figure: fig, series, trend })
}
