// File: crates/vizkit-core/src/render/histogram.rs
// Summary: Histogram renderer with optional named groups overlaid as translucent bars.

use skia_safe as skia;

use super::{finalize, new_figure, HistogramRequest, Rendered, SeriesSummary};
use crate::axes::{AxisSpec, Axes};
use crate::color::{palette, parse_color, with_alpha, CategoryColors};
use crate::config::{HistogramParams, StyleConfig};
use crate::data::{display_label, resolve_grouping, select};
use crate::error::VizResult;
use crate::figure::{fill_paint, stroke_paint};
use crate::legend::{Legend, Swatch};
use crate::scale::Limits;
use crate::stats::Histogram;
use crate::style::StyleContext;

const MARGIN: f64 = 0.05;

pub fn render(ctx: &StyleContext, config: &StyleConfig, req: &HistogramRequest<'_>) -> VizResult<Rendered> {
    let params = HistogramParams::resolve(config);
    let edge_color = with_alpha(parse_color(&params.edge_color)?, params.alpha);

    let grouping = resolve_grouping(req.groups, req.group_names, req.data.len())?;
    let subsets: Vec<(String, skia::Color, Vec<f64>)> = match &grouping {
        Some(groups) => {
            let colors = CategoryColors::from_config(config);
            groups
                .iter()
                .enumerate()
                .map(|(i, g)| {
                    Ok((display_label(g.name), colors.resolve_indexed(g.name, i)?, select(req.data, &g.indices, "data")?))
                })
                .collect::<VizResult<_>>()?
        }
        None => vec![(req.labels.x_label.clone(), palette(0), req.data.to_vec())],
    };
    let hists: Vec<Option<Histogram>> = subsets.iter().map(|(_, _, v)| Histogram::compute(v, params.bins)).collect();

    let x_limits = hists
        .iter()
        .flatten()
        .filter_map(|h| Limits::of(h.edges.iter().copied()))
        .reduce(Limits::union)
        .unwrap_or_default();
    let top = hists.iter().flatten().map(Histogram::max_count).max().unwrap_or(0).max(1);
    let y_limits = Limits::new(0.0, top as f64);

    let mut fig = new_figure(ctx, config, ctx.figure_size)?;
    let axes = Axes::new(
        &fig,
        ctx,
        AxisSpec::Numeric(x_limits.with_margin(MARGIN)),
        AxisSpec::Numeric(y_limits.with_top_margin(MARGIN)),
        0.0,
    );
    axes.draw_background(&mut fig, ctx, Some(ctx.grid_alpha));

    let edge = stroke_paint(edge_color, params.edge_width);
    let mut legend = Legend::default();
    let mut occupied = Vec::new();
    axes.clip(&mut fig);
    for ((label, color, _), hist) in subsets.iter().zip(&hists) {
        let face = with_alpha(*color, params.alpha);
        if let Some(hist) = hist {
            let fill = fill_paint(face);
            for (i, &count) in hist.counts.iter().enumerate() {
                if count == 0 {
                    continue;
                }
                let tl = axes.to_px(hist.edges[i], count as f64);
                let br = axes.to_px(hist.edges[i + 1], 0.0);
                let bar = skia::Rect::new(tl.x, tl.y, br.x, br.y);
                let canvas = fig.canvas();
                canvas.draw_rect(bar, &fill);
                if params.edge_width > 0.0 {
                    canvas.draw_rect(bar, &edge);
                }
                occupied.push(skia::Point::new(bar.center_x(), bar.top));
                occupied.push(skia::Point::new(bar.center_x(), bar.center_y()));
            }
        }
        legend.push(label.clone(), Swatch::Patch { face, edge: edge_color, edge_width: params.edge_width });
    }
    axes.unclip(&mut fig);

    let legend = grouping.is_some().then_some(&legend);
    finalize(&mut fig, ctx, &axes, &req.labels, legend, &occupied);

    let series = subsets
        .into_iter()
        .zip(&hists)
        .map(|((label, _, _), hist)| SeriesSummary { label, count: hist.as_ref().map_or(0, Histogram::total) })
        .collect();
    Ok(Rendered { figure: fig, series, trend: None })
}
