// File: crates/vizkit-core/src/legend.rs
// Summary: Legend entries and "best" corner placement inside the axes frame.

use skia_safe as skia;

use crate::config::LineStyle;
use crate::figure::{fill_paint, stroke_paint, styled_stroke_paint, Figure};
use crate::style::StyleContext;
use crate::text::{HAlign, TextSpec, VAlign};

/// Sample glyph drawn next to a legend label. Colors carry their alpha.
#[derive(Clone, Copy, Debug)]
pub enum Swatch {
    Marker { color: skia::Color },
    Line { color: skia::Color, width: f32, style: LineStyle },
    Patch { face: skia::Color, edge: skia::Color, edge_width: f32 },
}

#[derive(Clone, Debug)]
pub struct LegendEntry {
    pub label: String,
    pub swatch: Swatch,
}

#[derive(Clone, Debug, Default)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    pub fn push(&mut self, label: impl Into<String>, swatch: Swatch) {
        self.entries.push(LegendEntry { label: label.into(), swatch });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Draw inside `frame` at the corner covering the fewest `occupied` points.
    /// Returns the legend box.
    pub fn draw(&self, fig: &mut Figure, ctx: &StyleContext, frame: skia::Rect, occupied: &[skia::Point]) -> skia::Rect {
        let size = ctx.fonts.legend;
        let spec = TextSpec { size, color: ctx.theme.text, bold: false };
        let pad = size * 0.5;
        let row = size * 1.4;
        let swatch_w = size * 2.0;

        let label_w = self
            .entries
            .iter()
            .map(|e| fig.text().measure(&e.label, spec).0)
            .fold(0.0, f32::max);
        let w = pad * 3.0 + swatch_w + label_w;
        let h = pad * 2.0 + row * self.entries.len() as f32;

        let rect = best_corner(frame, w, h, size * 0.6, occupied);

        let canvas = fig.canvas();
        let radius = size * 0.25;
        canvas.draw_round_rect(rect, radius, radius, &fill_paint(ctx.theme.legend_face));
        canvas.draw_round_rect(rect, radius, radius, &stroke_paint(ctx.theme.legend_edge, 0.8));

        for (i, entry) in self.entries.iter().enumerate() {
            let cy = rect.top + pad + row * (i as f32 + 0.5);
            let sx = rect.left + pad;
            draw_swatch(fig.canvas(), entry.swatch, skia::Rect::from_xywh(sx, cy - size * 0.35, swatch_w, size * 0.7));
            fig.draw_text(
                &entry.label,
                skia::Point::new(sx + swatch_w + pad, cy),
                (HAlign::Left, VAlign::Middle),
                0.0,
                spec,
            );
        }
        fig.mark_ink(rect);
        rect
    }
}

fn draw_swatch(canvas: &skia::Canvas, swatch: Swatch, slot: skia::Rect) {
    match swatch {
        Swatch::Marker { color } => {
            let r = slot.height() * 0.45;
            canvas.draw_circle((slot.center_x(), slot.center_y()), r, &fill_paint(color));
        }
        Swatch::Line { color, width, style } => {
            let paint = styled_stroke_paint(color, width, style);
            canvas.draw_line((slot.left, slot.center_y()), (slot.right, slot.center_y()), &paint);
        }
        Swatch::Patch { face, edge, edge_width } => {
            canvas.draw_rect(slot, &fill_paint(face));
            if edge_width > 0.0 && edge.a() > 0 {
                canvas.draw_rect(slot, &stroke_paint(edge, edge_width));
            }
        }
    }
}

/// Candidate corners in preference order: upper right, upper left, lower
/// left, lower right. Ties keep the earlier corner.
fn best_corner(frame: skia::Rect, w: f32, h: f32, inset: f32, occupied: &[skia::Point]) -> skia::Rect {
    let (l, r) = (frame.left + inset, frame.right - inset - w);
    let (t, b) = (frame.top + inset, frame.bottom - inset - h);
    let candidates = [
        skia::Rect::from_xywh(r, t, w, h),
        skia::Rect::from_xywh(l, t, w, h),
        skia::Rect::from_xywh(l, b, w, h),
        skia::Rect::from_xywh(r, b, w, h),
    ];
    let mut best = candidates[0];
    let mut best_count = usize::MAX;
    for rect in candidates {
        let count = occupied.iter().filter(|p| rect.contains(**p)).count();
        if count < best_count {
            best = rect;
            best_count = count;
        }
    }
    best
}
