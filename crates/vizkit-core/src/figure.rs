// File: crates/vizkit-core/src/figure.rs
// Summary: Figure canvas backed by a Skia CPU raster surface, laid out in points.

use skia_safe as skia;
use tracing::debug;

use crate::config::LineStyle;
use crate::error::{VizError, VizResult};
use crate::text::{HAlign, TextShaper, TextSpec, VAlign};
use crate::types::{FigureSize, POINTS_PER_INCH};

/// In-memory drawing surface for one chart.
///
/// Drawing coordinates are typographic points with the origin at the top-left
/// corner; the surface itself is `size × dpi` pixels. The figure also records
/// the union of everything drawn (`ink`) so the writer can crop tightly.
pub struct Figure {
    surface: skia::Surface,
    size: FigureSize,
    dpi: f32,
    text: TextShaper,
    ink: Option<skia::Rect>,
}

impl Figure {
    pub fn new(size: FigureSize, dpi: f32, font_family: &str) -> VizResult<Self> {
        let dpi = if dpi.is_finite() && dpi > 0.0 { dpi } else { 100.0 };
        let (width, height) = size.pixels(dpi);
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(VizError::Surface { width, height })?;
        let canvas = surface.canvas();
        canvas.clear(skia::Color::TRANSPARENT);
        let scale = dpi / POINTS_PER_INCH;
        canvas.scale((scale, scale));
        debug!(width, height, dpi, "created figure surface");
        Ok(Self { surface, size, dpi, text: TextShaper::new(font_family), ink: None })
    }

    pub fn size(&self) -> FigureSize { self.size }
    pub fn dpi(&self) -> f32 { self.dpi }
    pub fn width_pt(&self) -> f32 { self.size.width_pt() }
    pub fn height_pt(&self) -> f32 { self.size.height_pt() }

    /// Whole figure in points.
    pub fn bounds(&self) -> skia::Rect {
        skia::Rect::from_wh(self.width_pt(), self.height_pt())
    }

    pub fn canvas(&mut self) -> &skia::Canvas {
        self.surface.canvas()
    }

    pub fn text(&self) -> &TextShaper {
        &self.text
    }

    /// Union of everything drawn so far, in points.
    pub fn ink_bounds(&self) -> Option<skia::Rect> {
        self.ink
    }

    pub fn mark_ink(&mut self, rect: skia::Rect) {
        if !(rect.left.is_finite() && rect.top.is_finite() && rect.right.is_finite() && rect.bottom.is_finite()) {
            return;
        }
        self.ink = Some(match self.ink {
            None => rect,
            Some(ink) => skia::Rect::new(
                ink.left.min(rect.left),
                ink.top.min(rect.top),
                ink.right.max(rect.right),
                ink.bottom.max(rect.bottom),
            ),
        });
    }

    pub fn snapshot(&mut self) -> skia::Image {
        self.surface.image_snapshot()
    }

    /// Draw text and record its bounds as ink.
    pub fn draw_text(
        &mut self,
        text: &str,
        at: skia::Point,
        align: (HAlign, VAlign),
        rotation: f32,
        spec: TextSpec,
    ) -> skia::Rect {
        if text.is_empty() {
            return skia::Rect::from_xywh(at.x, at.y, 0.0, 0.0);
        }
        let canvas = self.surface.canvas();
        let bounds = self.text.draw(canvas, text, at, align, rotation, spec);
        self.mark_ink(bounds);
        bounds
    }
}

// ---- paints -----------------------------------------------------------------

pub fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

pub fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

pub fn styled_stroke_paint(color: skia::Color, width: f32, style: LineStyle) -> skia::Paint {
    let mut paint = stroke_paint(color, width);
    if let Some(intervals) = style.intervals(width) {
        paint.set_path_effect(skia::PathEffect::dash(&intervals, 0.0));
    }
    paint
}
