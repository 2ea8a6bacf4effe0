// File: crates/vizkit-core/src/render/heatmap.rs
// Summary: Heatmap renderer: labeled matrix cells, centered colormap, annotations and colorbar.

use skia_safe as skia;

use super::{new_figure, HeatmapRequest, Rendered, SeriesSummary};
use crate::axes::{AxisSpec, Axes};
use crate::color::{relative_luminance, Colormap};
use crate::config::{HeatmapParams, StyleConfig};
use crate::error::VizResult;
use crate::figure::{fill_paint, stroke_paint, Figure};
use crate::scale::{LinearScale, Limits};
use crate::style::StyleContext;
use crate::text::{HAlign, TextSpec, VAlign};
use crate::ticks::{nice_ticks, tick_label, NumberFormat};

/// Cells darker than this get light annotation text.
const LIGHT_TEXT_BELOW: f32 = 0.408;
const CBAR_WIDTH: f32 = 14.0;
const CBAR_GAP: f32 = 12.0;
const CBAR_SLICES: usize = 128;

/// Color range symmetric about `center`, covering every finite value.
pub(crate) fn centered_range(values: impl IntoIterator<Item = f64>, center: f64) -> Limits {
    let reach = match Limits::of(values) {
        Some(l) => (l.max - center).abs().max((l.min - center).abs()),
        None => 0.0,
    };
    let reach = if reach > 0.0 { reach } else { 1.0 };
    Limits::new(center - reach, center + reach)
}

/// Span the colorbar shows: the finite data, or the color range when the data is flat.
pub(crate) fn colorbar_range(values: impl IntoIterator<Item = f64>, color_range: Limits) -> Limits {
    Limits::of(values).filter(|l| l.max > l.min).unwrap_or(color_range)
}

pub fn render(ctx: &StyleContext, config: &StyleConfig, req: &HeatmapRequest<'_>) -> VizResult<Rendered> {
    let params = HeatmapParams::resolve(config);
    let cmap = Colormap::by_name(&params.colormap)?;
    let fmt = NumberFormat::parse(&params.fmt)?;
    let matrix = req.matrix;
    let (rows, cols) = (matrix.rows(), matrix.cols());

    let range = centered_range(matrix.values(), params.center);
    let norm = |v: f64| (v - range.min) / (range.max - range.min);
    let bar_range = colorbar_range(matrix.values(), range);

    let mut fig = new_figure(ctx, config, params.figure_size)?;
    let tick_spec = TextSpec { size: ctx.fonts.tick_label, color: ctx.theme.tick, bold: false };
    let (cbar_ticks, cbar_step) = nice_ticks(bar_range.min, bar_range.max, 5);
    let cbar_labels: Vec<String> = cbar_ticks.iter().map(|&v| ctx.minus(tick_label(v, cbar_step))).collect();
    let cbar_label_w = cbar_labels.iter().map(|l| fig.text().measure(l, tick_spec).0).fold(0.0, f32::max);

    // Column labels turn vertical once they outgrow an estimated cell width.
    let est_cell = fig.width_pt() * 0.6 / cols.max(1) as f32;
    let widest = matrix.col_labels().iter().map(|l| fig.text().measure(l, tick_spec).0).fold(0.0, f32::max);
    let x_rotation = if widest > est_cell * 0.9 { 90.0 } else { 0.0 };

    let x_axis = AxisSpec::Categorical { labels: matrix.col_labels().to_vec(), rotation: x_rotation };
    // Row 0 sits at the top.
    let y_axis = AxisSpec::Categorical { labels: matrix.row_labels().iter().rev().cloned().collect(), rotation: 0.0 };
    let reserve = CBAR_GAP + CBAR_WIDTH + 6.0 + cbar_label_w;
    let mut axes = Axes::new(&fig, ctx, x_axis, y_axis, reserve);
    if params.square && rows > 0 && cols > 0 {
        axes.fit_aspect(cols as f32 / rows as f32);
    }

    let gap = stroke_paint(skia::Color::WHITE, params.linewidths);
    for r in 0..rows {
        for c in 0..cols {
            let v = matrix.get(r, c);
            if !v.is_finite() {
                continue;
            }
            let y0 = (rows - 1 - r) as f64;
            let tl = axes.to_px(c as f64, y0 + 1.0);
            let br = axes.to_px(c as f64 + 1.0, y0);
            let cell = skia::Rect::new(tl.x, tl.y, br.x, br.y);
            let face = cmap.sample(norm(v));
            let canvas = fig.canvas();
            canvas.draw_rect(cell, &fill_paint(face));
            if params.linewidths > 0.0 {
                canvas.draw_rect(cell, &gap);
            }
            if params.annot {
                annotate_cell(&mut fig, ctx, cell, &fmt.format(v), face);
            }
        }
    }
    fig.mark_ink(axes.frame);

    axes.draw_ticks(&mut fig, ctx);
    axes.draw_labels(&mut fig, ctx, &req.title, "", "");
    let cbar = Colorbar { color_range: range, bar_range, shrink: params.cbar_shrink };
    draw_colorbar(&mut fig, &axes, &cmap, cbar, &cbar_ticks, &cbar_labels, tick_spec);

    let series = (0..rows)
        .map(|r| SeriesSummary {
            label: matrix.row_labels()[r].clone(),
            count: (0..cols).filter(|&c| matrix.get(r, c).is_finite()).count(),
        })
        .collect();
    Ok(Rendered { figure: fig, series, trend: None })
}

fn annotate_cell(fig: &mut Figure, ctx: &StyleContext, cell: skia::Rect, text: &str, face: skia::Color) {
    let color = if relative_luminance(face) < LIGHT_TEXT_BELOW { skia::Color::WHITE } else { ctx.theme.text };
    let chars = text.chars().count().max(1) as f32;
    let size = ctx.base_font_size.min(cell.height() * 0.45).min(cell.width() / (chars * 0.62));
    let spec = TextSpec { size, color, bold: false };
    fig.draw_text(text, skia::Point::new(cell.center_x(), cell.center_y()), (HAlign::Center, VAlign::Middle), 0.0, spec);
}

/// Colors follow `color_range`; the bar itself spans `bar_range`.
#[derive(Clone, Copy)]
struct Colorbar {
    color_range: Limits,
    bar_range: Limits,
    shrink: f32,
}

fn draw_colorbar(
    fig: &mut Figure,
    axes: &Axes,
    cmap: &Colormap,
    cbar: Colorbar,
    ticks: &[f64],
    labels: &[String],
    spec: TextSpec,
) {
    let Colorbar { color_range, bar_range, shrink } = cbar;
    let frame = axes.frame;
    let height = frame.height() * shrink.clamp(0.05, 1.0);
    let top = frame.center_y() - height * 0.5;
    let bar = skia::Rect::from_xywh(frame.right + CBAR_GAP, top, CBAR_WIDTH, height);
    let scale = LinearScale::new(bar_range.min, bar_range.max, bar.bottom, bar.top);
    let span = color_range.max - color_range.min;

    let slice_h = height / CBAR_SLICES as f32;
    let canvas = fig.canvas();
    for i in 0..CBAR_SLICES {
        let t = (i as f64 + 0.5) / CBAR_SLICES as f64;
        let v = bar_range.min + t * (bar_range.max - bar_range.min);
        let y = bar.bottom - slice_h * (i + 1) as f32;
        // Overlap slices by a hair to hide seams.
        let slice = skia::Rect::from_xywh(bar.left, y, bar.width(), slice_h + 0.25);
        canvas.draw_rect(slice, &fill_paint(cmap.sample((v - color_range.min) / span)));
    }
    canvas.draw_rect(bar, &stroke_paint(spec.color, 0.5));
    fig.mark_ink(bar);

    for (&v, label) in ticks.iter().zip(labels) {
        if !scale.contains(v) {
            continue;
        }
        let y = scale.to_px(v);
        fig.canvas().draw_line((bar.right, y), (bar.right + 3.0, y), &stroke_paint(spec.color, 0.8));
        fig.draw_text(label, skia::Point::new(bar.right + 5.0, y), (HAlign::Left, VAlign::Middle), 0.0, spec);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_symmetric_about_center() {
        let r = centered_range([-0.2, 0.9, f64::NAN], 0.0);
        assert_eq!(r, Limits::new(-0.9, 0.9));
        let r = centered_range([1.0, 2.0], 1.5);
        assert_eq!(r, Limits::new(1.0, 2.0));
    }

    #[test]
    fn colorbar_trims_to_data() {
        let values = [-0.2, 0.9, f64::NAN];
        let color = centered_range(values, 0.0);
        assert_eq!(colorbar_range(values, color), Limits::new(-0.2, 0.9));
        assert_eq!(colorbar_range([0.5, 0.5], Limits::new(-0.5, 1.5)), Limits::new(-0.5, 1.5));
    }

    #[test]
    fn flat_or_empty_input_gets_unit_reach() {
        assert_eq!(centered_range([0.0, 0.0], 0.0), Limits::new(-1.0, 1.0));
        assert_eq!(centered_range(std::iter::empty(), 2.0), Limits::new(1.0, 3.0));
    }
}
