//! JPEG compression with an optional width cap.

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::DynamicImage;
use std::path::{Path, PathBuf};

use crate::settings::Settings;

#[derive(Debug, thiserror::Error)]
pub enum CompressError {
    #[error("Failed to read image: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to decode image: {0}")]
    Decode(String),

    #[error("JPEG encoding failed: {0}")]
    Encode(String),
}

/// Shrinks `image` to `max_width` (keeping aspect ratio) when it is wider,
/// then encodes it as JPEG. `max_width == 0` never resizes.
pub fn compress(image: &DynamicImage, quality: u8, max_width: u32) -> Result<Vec<u8>, CompressError> {
    let resized;
    let image = if max_width > 0 && image.width() > max_width {
        let height = scaled_height(image.width(), image.height(), max_width);
        log::debug!(
            "[capture] resizing {}x{} to {}x{}",
            image.width(),
            image.height(),
            max_width,
            height
        );
        resized = image.resize_exact(max_width, height, FilterType::Lanczos3);
        &resized
    } else {
        image
    };

    // JPEG has no alpha channel.
    let rgb = image.to_rgb8();
    let mut jpeg_bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg_bytes, quality)
        .encode_image(&rgb)
        .map_err(|e| CompressError::Encode(e.to_string()))?;
    Ok(jpeg_bytes)
}

fn scaled_height(width: u32, height: u32, target_width: u32) -> u32 {
    let scaled = (height as f64 * target_width as f64 / width as f64).round() as u32;
    scaled.max(1)
}

/// Compresses the file at `path` into a sibling `.jpg` and removes the
/// original. Falls back to the untouched original when encoding fails.
pub fn optimize_file(path: &Path, settings: &Settings) -> Result<PathBuf, CompressError> {
    let bytes = std::fs::read(path)?;
    let image = image::load_from_memory(&bytes).map_err(|e| CompressError::Decode(e.to_string()))?;

    let jpeg_bytes = match compress(&image, settings.jpeg_quality(), settings.max_width) {
        Ok(jpeg_bytes) => jpeg_bytes,
        Err(e) => {
            log::warn!("[capture] keeping {} uncompressed: {}", path.display(), e);
            return Ok(path.to_path_buf());
        }
    };

    let jpeg_path = path.with_extension("jpg");
    std::fs::write(&jpeg_path, &jpeg_bytes)?;
    if jpeg_path != path {
        if let Err(e) = std::fs::remove_file(path) {
            log::warn!("[capture] could not remove {}: {}", path.display(), e);
        }
    }

    log::info!(
        "[capture] compressed {} -> {} ({} bytes, quality {})",
        path.display(),
        jpeg_path.display(),
        jpeg_bytes.len(),
        settings.jpeg_quality()
    );
    Ok(jpeg_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, ImageFormat, Rgba, RgbaImage};

    fn gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
        }))
    }

    #[test]
    fn wide_images_are_resized() {
        let jpeg = compress(&gradient(2000, 1000), 70, 1024).unwrap();
        let decoded = image::load_from_memory(&jpeg).unwrap();
        assert_eq!(decoded.dimensions(), (1024, 512));
    }

    #[test]
    fn narrow_images_keep_size() {
        let jpeg = compress(&gradient(300, 200), 70, 1024).unwrap();
        let decoded = image::load_from_memory(&jpeg).unwrap();
        assert_eq!(decoded.dimensions(), (300, 200));
    }

    #[test]
    fn zero_max_width_never_resizes() {
        let jpeg = compress(&gradient(3000, 10), 50, 0).unwrap();
        assert_eq!(image::load_from_memory(&jpeg).unwrap().width(), 3000);
    }

    #[test]
    fn output_is_jpeg() {
        let jpeg = compress(&gradient(8, 8), 90, 0).unwrap();
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn optimize_file_replaces_png() {
        let dir = tempfile::tempdir().unwrap();
        let png_path = dir.path().join("shot.png");
        gradient(64, 32).save_with_format(&png_path, ImageFormat::Png).unwrap();

        let out = optimize_file(&png_path, &Settings::default()).unwrap();
        assert_eq!(out, dir.path().join("shot.jpg"));
        assert!(out.exists());
        assert!(!png_path.exists());
    }

    #[test]
    fn optimize_file_rejects_non_images() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.png");
        std::fs::write(&path, b"nope").unwrap();
        assert!(matches!(
            optimize_file(&path, &Settings::default()),
            Err(CompressError::Decode(_))
        ));
    }
}
