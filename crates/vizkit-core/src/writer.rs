// File: crates/vizkit-core/src/writer.rs
// Summary: Persist a rendered figure: crop, resample to the save dpi, fill, encode, write.

use std::path::{Path, PathBuf};

use skia_safe as skia;
use tracing::{debug, info};

use crate::color::parse_color;
use crate::config::{BBoxMode, SaveParams};
use crate::error::{VizError, VizResult};
use crate::figure::{stroke_paint, Figure};
use crate::types::POINTS_PER_INCH;

/// Padding around the drawn content when cropping tightly (0.1 in).
pub const TIGHT_PAD_PT: f32 = 0.1 * POINTS_PER_INCH;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedArtifact {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Png,
    Jpeg,
}

impl OutputFormat {
    fn from_path(path: &Path) -> VizResult<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("png") => Ok(Self::Png),
            Some("jpg" | "jpeg") => Ok(Self::Jpeg),
            _ => Err(VizError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    fn encoded(self) -> skia::EncodedImageFormat {
        match self {
            Self::Png => skia::EncodedImageFormat::PNG,
            Self::Jpeg => skia::EncodedImageFormat::JPEG,
        }
    }
}

/// Part of the figure (in points) that ends up in the file.
pub fn output_region(fig: &Figure, bbox: BBoxMode) -> skia::Rect {
    let bounds = fig.bounds();
    match (bbox, fig.ink_bounds()) {
        (BBoxMode::Tight, Some(ink)) => {
            let padded = ink.with_outset((TIGHT_PAD_PT, TIGHT_PAD_PT));
            skia::Rect::new(
                padded.left.max(bounds.left),
                padded.top.max(bounds.top),
                padded.right.min(bounds.right),
                padded.bottom.min(bounds.bottom),
            )
        }
        _ => bounds,
    }
}

/// Write `fig` to `path`, replacing any existing file and creating missing
/// parent directories. The format follows the extension.
pub fn save(fig: &mut Figure, path: impl AsRef<Path>, params: &SaveParams) -> VizResult<SavedArtifact> {
    let path = path.as_ref();
    let format = OutputFormat::from_path(path)?;
    let dpi = if params.dpi.is_finite() && params.dpi > 0.0 { params.dpi } else { fig.dpi() };

    // Crop on whole source pixels; at the figure's own dpi the copy is 1:1.
    let region = output_region(fig, params.bbox);
    let src_scale = fig.dpi() / POINTS_PER_INCH;
    let src = skia::Rect::new(
        region.left * src_scale,
        region.top * src_scale,
        region.right * src_scale,
        region.bottom * src_scale,
    )
    .round();
    let resample = dpi / fig.dpi();
    let to_px = |px: i32| (px as f32 * resample).round().max(1.0) as i32;
    let (width, height) = (to_px(src.width()), to_px(src.height()));

    let mut surface = skia::surfaces::raster_n32_premul((width, height)).ok_or(VizError::Surface { width, height })?;
    let background = if params.transparent { skia::Color::TRANSPARENT } else { parse_color(&params.facecolor)? };
    let edge = parse_color(&params.edgecolor)?;

    let src = skia::Rect::from_irect(src);
    let dst = skia::Rect::from_iwh(width, height);
    let image = fig.snapshot();

    let canvas = surface.canvas();
    canvas.clear(background);
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    canvas.draw_image_rect(&image, Some((&src, skia::canvas::SrcRectConstraint::Strict)), dst, &paint);
    if edge.a() > 0 {
        let w = (dpi / POINTS_PER_INCH).max(1.0);
        canvas.draw_rect(dst.with_inset((w * 0.5, w * 0.5)), &stroke_paint(edge, w));
    }

    #[allow(deprecated)]
    let data = surface
        .image_snapshot()
        .encode_to_data(format.encoded())
        .ok_or_else(|| VizError::Encode(path.to_path_buf()))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, data.as_bytes())?;
    debug!(width, height, dpi, ?format, "encoded figure");
    info!("Figure saved to: {}", path.display());

    Ok(SavedArtifact { path: path.to_path_buf(), width: width as u32, height: height as u32 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(OutputFormat::from_path(Path::new("a/b.PNG")).unwrap(), OutputFormat::Png);
        assert_eq!(OutputFormat::from_path(Path::new("b.jpeg")).unwrap(), OutputFormat::Jpeg);
        assert!(matches!(OutputFormat::from_path(Path::new("b.svg")), Err(VizError::UnsupportedFormat(_))));
        assert!(OutputFormat::from_path(Path::new("noext")).is_err());
    }
}
