// File: crates/vizkit-core/src/trend.rs
// Summary: First-degree least-squares trend fit and its dashed overlay on scatter axes.

use skia_safe as skia;

use crate::axes::Axes;
use crate::color::{parse_color, with_alpha};
use crate::config::TrendLineParams;
use crate::error::{VizError, VizResult};
use crate::figure::{styled_stroke_paint, Figure};
use crate::legend::{Legend, Swatch};

pub const TREND_LABEL: &str = "Trend Line";

/// Fitted line `y = slope * x + intercept`, drawn from `start` to `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
    pub start: (f64, f64),
    pub end: (f64, f64),
}

impl TrendLine {
    /// Least-squares fit over the pairs where both coordinates are finite.
    pub fn fit(x: &[f64], y: &[f64]) -> VizResult<Self> {
        if x.len() != y.len() {
            return Err(VizError::LengthMismatch { what: "trend y values", got: y.len(), expected: x.len() });
        }
        let pairs: Vec<(f64, f64)> = x
            .iter()
            .zip(y)
            .map(|(&a, &b)| (a, b))
            .filter(|(a, b)| a.is_finite() && b.is_finite())
            .collect();
        let n = pairs.len();
        if n < 2 {
            return Err(VizError::DegenerateFit { points: n });
        }

        let nf = n as f64;
        let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / nf;
        let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / nf;
        let (sxx, sxy) = pairs.iter().fold((0.0, 0.0), |(sxx, sxy), &(a, b)| {
            let dx = a - mean_x;
            (sxx + dx * dx, sxy + dx * (b - mean_y))
        });
        if sxx <= f64::EPSILON * nf * mean_x.abs().max(1.0) {
            return Err(VizError::DegenerateFit { points: n });
        }

        let slope = sxy / sxx;
        let intercept = mean_y - slope * mean_x;
        let (x0, x1) = pairs
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p.0), hi.max(p.0)));
        let at = |v: f64| (v, slope * v + intercept);
        Ok(Self { slope, intercept, start: at(x0), end: at(x1) })
    }

    pub fn eval(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Draw inside the axes frame and add the `Trend Line` legend entry.
    pub fn draw(&self, fig: &mut Figure, axes: &Axes, params: &TrendLineParams, legend: &mut Legend) -> VizResult<()> {
        let color = with_alpha(parse_color(&params.color)?, params.alpha);
        let paint = styled_stroke_paint(color, params.width, params.style);
        let (p0, p1) = (axes.to_px(self.start.0, self.start.1), axes.to_px(self.end.0, self.end.1));

        axes.clip(fig);
        fig.canvas().draw_line(p0, p1, &paint);
        axes.unclip(fig);
        fig.mark_ink(skia::Rect::new(p0.x.min(p1.x), p0.y.min(p1.y), p0.x.max(p1.x), p0.y.max(p1.y)));

        legend.push(TREND_LABEL, Swatch::Line { color, width: params.width, style: params.style });
        Ok(())
    }
}

/// Fit `(x, y)` and draw the line on `axes`.
pub fn annotate(
    fig: &mut Figure,
    axes: &Axes,
    x: &[f64],
    y: &[f64],
    params: &TrendLineParams,
    legend: &mut Legend,
) -> VizResult<TrendLine> {
    let line = TrendLine::fit(x, y)?;
    line.draw(fig, axes, params, legend)?;
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn fits_exact_line() {
        let line = TrendLine::fit(&[0.0, 1.0, 2.0], &[1.0, 3.0, 5.0]).unwrap();
        assert_abs_diff_eq!(line.slope, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(line.intercept, 1.0, epsilon = 1e-12);
        assert_eq!(line.start, (0.0, 1.0));
        assert_abs_diff_eq!(line.end.1, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn endpoints_follow_x_extremes_not_order() {
        let line = TrendLine::fit(&[3.0, -1.0, 2.0], &[1.0, 2.0, 0.0]).unwrap();
        assert_eq!(line.start.0, -1.0);
        assert_eq!(line.end.0, 3.0);
        assert_abs_diff_eq!(line.end.1, line.eval(3.0), epsilon = 1e-12);
    }

    #[test]
    fn annotate_draws_inside_frame_and_labels_legend() {
        use crate::axes::AxisSpec;
        use crate::config::StyleConfig;
        use crate::scale::Limits;
        use crate::style::StyleContext;
        use crate::types::FigureSize;

        let ctx = StyleContext::apply(&StyleConfig::default());
        let mut fig = Figure::new(FigureSize::new(4.0, 3.0), 50.0, &ctx.font_family).unwrap();
        let axes = Axes::new(
            &fig,
            &ctx,
            AxisSpec::Numeric(Limits::new(0.0, 4.0)),
            AxisSpec::Numeric(Limits::new(0.0, 10.0)),
            0.0,
        );
        let mut legend = Legend::default();
        assert!(fig.ink_bounds().is_none());

        let params = TrendLineParams::default();
        let line = annotate(&mut fig, &axes, &[0.0, 2.0, 4.0], &[1.0, 5.0, 9.0], &params, &mut legend).unwrap();
        assert_abs_diff_eq!(line.slope, 2.0, epsilon = 1e-12);

        let ink = fig.ink_bounds().unwrap();
        assert!(ink.left >= axes.frame.left - 0.5 && ink.right <= axes.frame.right + 0.5);
        assert_eq!(legend.entries.len(), 1);
        assert_eq!(legend.entries[0].label, TREND_LABEL);
        assert!(matches!(legend.entries[0].swatch, Swatch::Line { .. }));

        let err = annotate(&mut fig, &axes, &[1.0], &[1.0], &params, &mut legend).unwrap_err();
        assert!(matches!(err, VizError::DegenerateFit { points: 1 }));
        assert_eq!(legend.entries.len(), 1);
    }

    #[test]
    fn degenerate_inputs_are_errors() {
        assert!(matches!(TrendLine::fit(&[1.0], &[1.0]), Err(VizError::DegenerateFit { points: 1 })));
        assert!(matches!(TrendLine::fit(&[2.0, 2.0], &[1.0, 3.0]), Err(VizError::DegenerateFit { .. })));
        assert!(matches!(TrendLine::fit(&[1.0, 2.0], &[1.0]), Err(VizError::LengthMismatch { .. })));
    }
}
