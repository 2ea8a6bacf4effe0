// File: crates/vizkit-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout with alignment and rotation.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Middle,
    Bottom,
}

/// One run of text: size in points, color, weight.
#[derive(Clone, Copy, Debug)]
pub struct TextSpec {
    pub size: f32,
    pub color: skia::Color,
    pub bold: bool,
}

pub struct TextShaper {
    fonts: FontCollection,
    family: String,
}

impl TextShaper {
    pub fn new(family: &str) -> Self {
        let mut fc = FontCollection::new();
        // Families missing from the system resolve through the default manager.
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc, family: family.to_owned() }
    }

    fn make_style(&self, spec: TextSpec) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(spec.size.max(1.0));
        ts.set_color(spec.color);
        ts.set_font_families(&[self.family.as_str(), "DejaVu Sans", "Arial", "Helvetica", "sans-serif"]);
        if spec.bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, spec: TextSpec) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&self.make_style(spec));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// (width, height) of the laid-out text.
    pub fn measure(&self, text: &str, spec: TextSpec) -> (f32, f32) {
        let p = self.layout(text, spec);
        (p.longest_line(), p.height())
    }

    /// Draw `text` anchored at `at`, rotated `rotation` degrees counter-clockwise
    /// around the anchor. Returns the axis-aligned bounds of the drawn text.
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        at: skia::Point,
        align: (HAlign, VAlign),
        rotation: f32,
        spec: TextSpec,
    ) -> skia::Rect {
        let paragraph = self.layout(text, spec);
        let (w, h) = (paragraph.longest_line(), paragraph.height());
        let dx = match align.0 {
            HAlign::Left => 0.0,
            HAlign::Center => -w * 0.5,
            HAlign::Right => -w,
        };
        let dy = match align.1 {
            VAlign::Top => 0.0,
            VAlign::Middle => -h * 0.5,
            VAlign::Bottom => -h,
        };

        canvas.save();
        canvas.translate((at.x, at.y));
        if rotation != 0.0 {
            canvas.rotate(-rotation, None);
        }
        paragraph.paint(canvas, (dx, dy));
        canvas.restore();

        rotated_bounds(at, skia::Rect::from_xywh(dx, dy, w, h), rotation)
    }
}

/// Bounds of `local` (relative to `at`) after rotating `rotation` degrees
/// counter-clockwise on screen.
fn rotated_bounds(at: skia::Point, local: skia::Rect, rotation: f32) -> skia::Rect {
    let (sin, cos) = (-rotation).to_radians().sin_cos();
    let corners = [
        (local.left, local.top),
        (local.right, local.top),
        (local.left, local.bottom),
        (local.right, local.bottom),
    ];
    let mut out = skia::Rect::new(f32::MAX, f32::MAX, f32::MIN, f32::MIN);
    for (x, y) in corners {
        let px = at.x + x * cos - y * sin;
        let py = at.y + x * sin + y * cos;
        out.left = out.left.min(px);
        out.top = out.top.min(py);
        out.right = out.right.max(px);
        out.bottom = out.bottom.max(py);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_turn_swaps_extent() {
        let local = skia::Rect::from_xywh(-10.0, -2.0, 20.0, 4.0);
        let b = rotated_bounds(skia::Point::new(0.0, 0.0), local, 90.0);
        assert!((b.width() - 4.0).abs() < 1e-4);
        assert!((b.height() - 20.0).abs() < 1e-4);
    }
}
