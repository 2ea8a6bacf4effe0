// File: crates/vizkit-core/src/axes.rs
// Summary: Single-axes layout: insets from font sizes, ticks, grid, spines and labels.

use skia_safe as skia;

use crate::color::with_alpha;
use crate::figure::{fill_paint, stroke_paint, Figure};
use crate::scale::{LinearScale, Limits};
use crate::style::StyleContext;
use crate::text::{HAlign, TextSpec, VAlign};
use crate::ticks::{nice_ticks, tick_label};
use crate::types::Insets;

const PAD: f32 = 6.0;
const TICK_LEN: f32 = 3.5;

/// What an axis shows: a numeric range, or one slot per label.
#[derive(Clone, Debug)]
pub enum AxisSpec {
    Numeric(Limits),
    /// Label `i` sits at position `i + 0.5`; limits are `0..n`.
    Categorical { labels: Vec<String>, rotation: f32 },
}

#[derive(Clone, Debug)]
struct AxisTicks {
    limits: Limits,
    positions: Vec<f64>,
    labels: Vec<String>,
    rotation: f32,
    categorical: bool,
}

impl AxisTicks {
    fn build(spec: AxisSpec, ctx: &StyleContext, target: usize) -> Self {
        match spec {
            AxisSpec::Numeric(limits) => {
                let (positions, step) = nice_ticks(limits.min, limits.max, target);
                let labels = positions.iter().map(|&v| ctx.minus(tick_label(v, step))).collect();
                Self { limits, positions, labels, rotation: 0.0, categorical: false }
            }
            AxisSpec::Categorical { labels, rotation } => {
                let positions = (0..labels.len()).map(|i| i as f64 + 0.5).collect();
                let limits = Limits::new(0.0, labels.len().max(1) as f64);
                Self { limits, positions, labels, rotation, categorical: true }
            }
        }
    }

    fn label_spec(ctx: &StyleContext) -> TextSpec {
        TextSpec { size: ctx.fonts.tick_label, color: ctx.theme.tick, bold: false }
    }

    /// Extent of the labels perpendicular to the axis, after rotation.
    fn band(&self, fig: &Figure, ctx: &StyleContext, horizontal: bool) -> f32 {
        let spec = Self::label_spec(ctx);
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        self.labels
            .iter()
            .map(|label| {
                let (w, h) = fig.text().measure(label, spec);
                if horizontal { w * sin.abs() + h * cos.abs() } else { w * cos.abs() + h * sin.abs() }
            })
            .fold(0.0, f32::max)
    }
}

/// The plot area of a figure and the data transforms into it.
#[derive(Clone, Debug)]
pub struct Axes {
    pub frame: skia::Rect,
    pub x: LinearScale,
    pub y: LinearScale,
    x_ticks: AxisTicks,
    y_ticks: AxisTicks,
}

impl Axes {
    /// Lay out the axes inside `fig`, keeping `reserve_right` points free on
    /// the right (colorbar).
    pub fn new(fig: &Figure, ctx: &StyleContext, x: AxisSpec, y: AxisSpec, reserve_right: f32) -> Self {
        let (w, h) = (fig.width_pt(), fig.height_pt());
        let x_target = ((w * 0.8) / 72.0).round().clamp(3.0, 10.0) as usize;
        let y_target = ((h * 0.8) / 60.0).round().clamp(3.0, 10.0) as usize;
        let x_ticks = AxisTicks::build(x, ctx, x_target);
        let y_ticks = AxisTicks::build(y, ctx, y_target);

        let x_band = x_ticks.band(fig, ctx, true) + PAD;
        let y_band = y_ticks.band(fig, ctx, false) + PAD;
        let label_band = ctx.fonts.axis_label * 1.4 + PAD;

        let insets = Insets::new(
            y_band + label_band + PAD,
            2.0 * PAD + reserve_right.max(0.0) + w * 0.02,
            ctx.fonts.title * 1.4 + 2.0 * PAD,
            x_band + label_band + PAD,
        );
        // Never let the margins eat more than ~90% of either dimension.
        let left = insets.left.min(w * 0.45);
        let top = insets.top.min(h * 0.45);
        let frame = skia::Rect::new(
            left,
            top,
            (w - insets.right).max(left + 10.0),
            (h - insets.bottom).max(top + 10.0),
        );
        let mut axes = Self {
            frame,
            x: LinearScale::new(0.0, 1.0, 0.0, 1.0),
            y: LinearScale::new(0.0, 1.0, 1.0, 0.0),
            x_ticks,
            y_ticks,
        };
        axes.rescale();
        axes
    }

    fn rescale(&mut self) {
        let (xl, yl) = (self.x_ticks.limits, self.y_ticks.limits);
        self.x = LinearScale::new(xl.min, xl.max, self.frame.left, self.frame.right);
        self.y = LinearScale::new(yl.min, yl.max, self.frame.bottom, self.frame.top);
    }

    /// Shrink the frame around its center so that width / height == `ratio`.
    pub fn fit_aspect(&mut self, ratio: f32) {
        if !(ratio.is_finite() && ratio > 0.0) {
            return;
        }
        let (w, h) = (self.frame.width(), self.frame.height());
        let (cx, cy) = (self.frame.center_x(), self.frame.center_y());
        let (nw, nh) = if w / h > ratio { (h * ratio, h) } else { (w, w / ratio) };
        self.frame = skia::Rect::from_xywh(cx - nw * 0.5, cy - nh * 0.5, nw, nh);
        self.rescale();
    }

    #[inline]
    pub fn to_px(&self, x: f64, y: f64) -> skia::Point {
        skia::Point::new(self.x.to_px(x), self.y.to_px(y))
    }

    /// Restrict subsequent drawing to the frame until [`Axes::unclip`].
    pub fn clip(&self, fig: &mut Figure) {
        let canvas = fig.canvas();
        canvas.save();
        canvas.clip_rect(self.frame, skia::ClipOp::Intersect, true);
    }

    pub fn unclip(&self, fig: &mut Figure) {
        fig.canvas().restore();
    }

    /// Axes face and, when `grid_alpha` is set, grid lines at the major ticks.
    pub fn draw_background(&self, fig: &mut Figure, ctx: &StyleContext, grid_alpha: Option<f32>) {
        let frame = self.frame;
        fig.canvas().draw_rect(frame, &fill_paint(ctx.theme.axes_face));
        fig.mark_ink(frame);

        let Some(alpha) = grid_alpha else { return };
        let paint = stroke_paint(with_alpha(ctx.theme.grid, alpha), 0.8);
        let canvas = fig.canvas();
        for &v in &self.x_ticks.positions {
            let px = self.x.to_px(v);
            canvas.draw_line((px, frame.top), (px, frame.bottom), &paint);
        }
        for &v in &self.y_ticks.positions {
            let py = self.y.to_px(v);
            canvas.draw_line((frame.left, py), (frame.right, py), &paint);
        }
    }

    pub fn draw_spines(&self, fig: &mut Figure, ctx: &StyleContext) {
        if !ctx.theme.draw_spines {
            return;
        }
        let paint = stroke_paint(ctx.theme.spine, 1.0);
        fig.canvas().draw_rect(self.frame, &paint);
    }

    /// Tick labels (and tick marks on themes that have them).
    pub fn draw_ticks(&self, fig: &mut Figure, ctx: &StyleContext) {
        let spec = AxisTicks::label_spec(ctx);
        let frame = self.frame;
        let marks = ctx.theme.tick_marks;
        let mark_paint = stroke_paint(ctx.theme.tick, 0.8);
        let offset = if marks { TICK_LEN + 2.0 } else { 3.5 };

        let rotation = self.x_ticks.rotation;
        for (&v, label) in self.x_ticks.positions.iter().zip(&self.x_ticks.labels) {
            let px = self.x.to_px(v);
            if !self.x_ticks.categorical && !self.x.contains(v) {
                continue;
            }
            if marks {
                fig.canvas().draw_line((px, frame.bottom), (px, frame.bottom + TICK_LEN), &mark_paint);
            }
            if rotation == 0.0 {
                fig.draw_text(label, skia::Point::new(px, frame.bottom + offset), (HAlign::Center, VAlign::Top), 0.0, spec);
            } else {
                // Rotate about the label center, then drop it below the axis.
                let (w, h) = fig.text().measure(label, spec);
                let (sin, cos) = rotation.to_radians().sin_cos();
                let half = 0.5 * (w * sin.abs() + h * cos.abs());
                let at = skia::Point::new(px, frame.bottom + offset + half);
                fig.draw_text(label, at, (HAlign::Center, VAlign::Middle), rotation, spec);
            }
        }

        for (&v, label) in self.y_ticks.positions.iter().zip(&self.y_ticks.labels) {
            let py = self.y.to_px(v);
            if !self.y_ticks.categorical && !self.y.contains(v) {
                continue;
            }
            if marks {
                fig.canvas().draw_line((frame.left - TICK_LEN, py), (frame.left, py), &mark_paint);
            }
            fig.draw_text(label, skia::Point::new(frame.left - offset, py), (HAlign::Right, VAlign::Middle), 0.0, spec);
        }
    }

    /// Bold title above the frame and bold axis labels outside the tick labels.
    pub fn draw_labels(&self, fig: &mut Figure, ctx: &StyleContext, title: &str, xlabel: &str, ylabel: &str) {
        let frame = self.frame;
        let title_spec = TextSpec { size: ctx.fonts.title, color: ctx.theme.text, bold: true };
        let label_spec = TextSpec { size: ctx.fonts.axis_label, color: ctx.theme.text, bold: true };

        fig.draw_text(title, skia::Point::new(frame.center_x(), frame.top - PAD), (HAlign::Center, VAlign::Bottom), 0.0, title_spec);

        let x_band = self.x_ticks.band(fig, ctx, true) + PAD;
        fig.draw_text(
            xlabel,
            skia::Point::new(frame.center_x(), frame.bottom + x_band + PAD * 0.5),
            (HAlign::Center, VAlign::Top),
            0.0,
            label_spec,
        );

        let y_band = self.y_ticks.band(fig, ctx, false) + PAD;
        fig.draw_text(
            ylabel,
            skia::Point::new(frame.left - y_band - PAD * 0.5, frame.center_y()),
            (HAlign::Center, VAlign::Bottom),
            90.0,
            label_spec,
        );
    }
}
