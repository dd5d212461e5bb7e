//! Vertical image stitching, the functional core.
//!
//! Bytes in, PNG bytes out. No file I/O, no host calls.

use image::{imageops, DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

/// Most images a single stitch accepts.
pub const MAX_STITCH_IMAGES: usize = 8;
/// Fewest images a stitch accepts.
pub const MIN_STITCH_IMAGES: usize = 2;
/// Height of the band between two images.
pub const SEPARATOR_HEIGHT: u32 = 30;
/// Height of the dark bar drawn in the middle of each band.
pub const SEPARATOR_BAR_HEIGHT: u32 = 12;
/// Largest composite buffer we allocate, matching `image`'s default
/// decoder allocation limit.
pub const MAX_CANVAS_BYTES: u64 = 512 * 1024 * 1024;
pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const BAR_COLOR: Rgba<u8> = Rgba([34, 34, 34, 255]);

/// Where one source image landed on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone)]
pub struct StitchResult {
    /// PNG-encoded composite.
    pub png_bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Widest single source. Not necessarily the same source as `max_source_height`.
    pub max_source_width: u32,
    /// Tallest single source.
    pub max_source_height: u32,
    /// One entry per source, in input order.
    pub placements: Vec<Placement>,
}

#[derive(Debug, thiserror::Error)]
pub enum StitchError {
    #[error("Too many images: {count} selected, at most {MAX_STITCH_IMAGES} can be stitched")]
    TooManyImages { count: usize },

    #[error("Select at least {MIN_STITCH_IMAGES} images to stitch ({count} selected)")]
    TooFewImages { count: usize },

    #[error("Image {index} could not be decoded: {reason}")]
    DecodeError { index: usize, reason: String },

    #[error("Stitched image would be too large")]
    CanvasTooLarge,

    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Fail fast on the source count, before any bytes are fetched or decoded.
pub fn check_count(count: usize) -> Result<(), StitchError> {
    if count > MAX_STITCH_IMAGES {
        return Err(StitchError::TooManyImages { count });
    }
    if count < MIN_STITCH_IMAGES {
        return Err(StitchError::TooFewImages { count });
    }
    Ok(())
}

/// Stacks the sources top to bottom, each horizontally centered, with a
/// separator band between neighbours.
///
/// Canvas width is the widest source; height is the sum of source heights
/// plus one `SEPARATOR_HEIGHT` per gap. Any undecodable source fails the
/// whole stitch.
pub fn stitch<B: AsRef<[u8]>>(sources: &[B]) -> Result<StitchResult, StitchError> {
    check_count(sources.len())?;

    let images = sources
        .iter()
        .enumerate()
        .map(|(index, bytes)| {
            image::load_from_memory(bytes.as_ref())
                .map_err(|e| StitchError::DecodeError { index, reason: e.to_string() })
        })
        .collect::<Result<Vec<DynamicImage>, _>>()?;

    let max_source_width = images.iter().map(|i| i.width()).max().unwrap_or(0);
    let max_source_height = images.iter().map(|i| i.height()).max().unwrap_or(0);

    let gaps = images.len() as u32 - 1;
    let mut height = gaps.checked_mul(SEPARATOR_HEIGHT);
    for img in &images {
        height = height.and_then(|h| h.checked_add(img.height()));
    }
    let height = height.ok_or(StitchError::CanvasTooLarge)?;
    let width = max_source_width;

    // A wide source plus a tall one can imply a canvas far larger than any
    // single input.
    let canvas_bytes = width as u64 * height as u64 * 4;
    if canvas_bytes > MAX_CANVAS_BYTES {
        log::warn!("[stitch] refusing {}x{} canvas ({} bytes)", width, height, canvas_bytes);
        return Err(StitchError::CanvasTooLarge);
    }

    let mut canvas = RgbaImage::from_pixel(width, height, BACKGROUND);
    let bar = RgbaImage::from_pixel(width, SEPARATOR_BAR_HEIGHT, BAR_COLOR);
    let bar_offset = (SEPARATOR_HEIGHT - SEPARATOR_BAR_HEIGHT) / 2;

    let mut placements = Vec::with_capacity(images.len());
    let mut y = 0u32;
    for (index, img) in images.iter().enumerate() {
        let x = (width - img.width()) / 2;
        imageops::overlay(&mut canvas, &img.to_rgba8(), x as i64, y as i64);
        placements.push(Placement { x, y, width: img.width(), height: img.height() });
        y += img.height();

        if index + 1 < images.len() {
            imageops::replace(&mut canvas, &bar, 0, (y + bar_offset) as i64);
            y += SEPARATOR_HEIGHT;
        }
    }

    let mut png_bytes: Vec<u8> = Vec::new();
    DynamicImage::ImageRgba8(canvas)
        .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
        .map_err(|e| StitchError::EncodingFailed(e.to_string()))?;

    log::info!(
        "[stitch] composed {} images into {}x{} ({} bytes)",
        images.len(),
        width,
        height,
        png_bytes.len()
    );

    Ok(StitchResult {
        png_bytes,
        width,
        height,
        max_source_width,
        max_source_height,
        placements,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba(color)));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png).unwrap();
        bytes
    }

    const RED: [u8; 4] = [255, 0, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];

    #[test]
    fn dimensions_include_separators() {
        let result = stitch(&[png(100, 50, RED), png(200, 80, BLUE)]).unwrap();
        assert_eq!(result.width, 200);
        assert_eq!(result.height, 50 + 80 + 30);
        assert_eq!(result.max_source_width, 200);
        assert_eq!(result.max_source_height, 80);
    }

    #[test]
    fn max_dimensions_come_from_different_sources() {
        let result = stitch(&[png(300, 10, RED), png(20, 90, BLUE), png(40, 40, RED)]).unwrap();
        assert_eq!(result.max_source_width, 300);
        assert_eq!(result.max_source_height, 90);
        assert_eq!(result.height, 10 + 90 + 40 + 2 * SEPARATOR_HEIGHT);
    }

    #[test]
    fn sources_are_centered_and_stacked() {
        let result = stitch(&[png(100, 50, RED), png(200, 80, BLUE)]).unwrap();
        assert_eq!(result.placements[0], Placement { x: 50, y: 0, width: 100, height: 50 });
        assert_eq!(result.placements[1], Placement { x: 0, y: 80, width: 200, height: 80 });
    }

    #[test]
    fn pixels_match_layout() {
        let result = stitch(&[png(100, 50, RED), png(200, 80, BLUE)]).unwrap();
        let canvas = image::load_from_memory(&result.png_bytes).unwrap().to_rgba8();

        // Margin beside the narrow image stays white.
        assert_eq!(*canvas.get_pixel(10, 10), BACKGROUND);
        assert_eq!(*canvas.get_pixel(100, 10), Rgba(RED));
        // Band: white, dark bar in the middle, white again.
        assert_eq!(*canvas.get_pixel(100, 50), BACKGROUND);
        assert_eq!(*canvas.get_pixel(0, 50 + 9), BAR_COLOR);
        assert_eq!(*canvas.get_pixel(199, 50 + 20), BAR_COLOR);
        assert_eq!(*canvas.get_pixel(100, 50 + 21), BACKGROUND);
        assert_eq!(*canvas.get_pixel(100, 80), Rgba(BLUE));
        assert_eq!(*canvas.get_pixel(199, 159), Rgba(BLUE));
    }

    #[test]
    fn wide_and_tall_sources_exceed_canvas_limit() {
        let result = stitch(&[png(200_000, 1, RED), png(1, 200_000, BLUE)]);
        assert!(matches!(result, Err(StitchError::CanvasTooLarge)));
    }

    #[test]
    fn too_many_fails_before_decoding() {
        // Garbage bytes would produce DecodeError if decoding were attempted.
        let sources = vec![b"not an image".to_vec(); 9];
        assert!(matches!(stitch(&sources), Err(StitchError::TooManyImages { count: 9 })));
    }

    #[test]
    fn single_image_is_rejected() {
        assert!(matches!(stitch(&[png(10, 10, RED)]), Err(StitchError::TooFewImages { count: 1 })));
        let empty: [Vec<u8>; 0] = [];
        assert!(matches!(stitch(&empty), Err(StitchError::TooFewImages { count: 0 })));
    }

    #[test]
    fn one_bad_source_fails_everything() {
        let result = stitch(&[png(10, 10, RED), b"garbage".to_vec()]);
        assert!(matches!(result, Err(StitchError::DecodeError { index: 1, .. })));
    }

    #[test]
    fn output_is_png() {
        let result = stitch(&[png(4, 4, RED), png(4, 4, BLUE)]).unwrap();
        assert_eq!(&result.png_bytes[..4], &[0x89, 0x50, 0x4E, 0x47]);
    }
}
