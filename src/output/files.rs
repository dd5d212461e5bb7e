//! Small file operations behind the rename popup and the editor.

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::Local;
use std::io;
use std::path::{Path, PathBuf};

use super::compress::{optimize_file, CompressError};
use super::filename::screenshot_path;
use crate::settings::Settings;

/// Drops the two characters macOS forbids in filenames (`/` and `:`).
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '/' && *c != ':')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Target of a rename: same directory, same extension (`jpg` if none).
pub fn renamed_path(old: &Path, new_name: &str) -> Option<PathBuf> {
    let dir = old.parent()?;
    let ext = old.extension().and_then(|e| e.to_str()).unwrap_or("jpg");
    Some(dir.join(format!("{}.{}", sanitize_name(new_name), ext)))
}

pub fn rename_screenshot(old: &Path, new_name: &str) -> io::Result<PathBuf> {
    let new_path = renamed_path(old, new_name)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Invalid path"))?;
    std::fs::rename(old, &new_path)?;
    Ok(new_path)
}

pub fn mime_type(path: &Path) -> &'static str {
    let lower = path.to_string_lossy().to_lowercase();
    if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
        "image/jpeg"
    } else {
        "image/png"
    }
}

/// `data:<mime>;base64,<payload>` for handing images to the webview.
pub fn to_data_url(bytes: &[u8], path: &Path) -> String {
    format!("data:{};base64,{}", mime_type(path), STANDARD.encode(bytes))
}

/// Accepts either a full data URL or a bare base64 payload.
pub fn decode_data_url(data: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let payload = match data.split_once(";base64,") {
        Some((header, payload)) if header.starts_with("data:") => payload,
        _ => data,
    };
    STANDARD.decode(payload.trim())
}

/// Compresses a fresh capture and moves it to its template name in `dir`.
pub fn finalize_capture(temp: &Path, dir: &Path, settings: &Settings) -> Result<PathBuf, CompressError> {
    let optimized = optimize_file(temp, settings)?;
    let (width, height) =
        image::image_dimensions(&optimized).map_err(|e| CompressError::Decode(e.to_string()))?;
    let extension = optimized
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("png")
        .to_string();

    let final_path = screenshot_path(dir, &extension, settings, width, height, Local::now());
    std::fs::rename(&optimized, &final_path)?;
    log::info!("[capture] saved {}", final_path.display());
    Ok(final_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, RgbaImage};

    #[test]
    fn sanitize_strips_forbidden_characters() {
        assert_eq!(sanitize_name("  a/b:c  "), "abc");
        assert_eq!(sanitize_name("bug report 12"), "bug report 12");
    }

    #[test]
    fn rename_keeps_extension() {
        assert_eq!(
            renamed_path(Path::new("/d/old.jpg"), "new: name"),
            Some(PathBuf::from("/d/new name.jpg"))
        );
        assert_eq!(
            renamed_path(Path::new("/d/noext"), "x"),
            Some(PathBuf::from("/d/x.jpg"))
        );
    }

    #[test]
    fn rename_moves_file() {
        let dir = tempfile::tempdir().unwrap();
        let old = dir.path().join("a.png");
        std::fs::write(&old, b"x").unwrap();
        let new = rename_screenshot(&old, "b").unwrap();
        assert_eq!(new, dir.path().join("b.png"));
        assert!(new.exists() && !old.exists());
    }

    #[test]
    fn data_url_mime_by_extension() {
        assert!(to_data_url(b"x", Path::new("a.JPG")).starts_with("data:image/jpeg;base64,"));
        assert!(to_data_url(b"x", Path::new("a.jpeg")).starts_with("data:image/jpeg;base64,"));
        assert_eq!(to_data_url(b"hi", Path::new("a.png")), "data:image/png;base64,aGk=");
    }

    #[test]
    fn decode_accepts_data_url_or_bare_payload() {
        assert_eq!(decode_data_url("data:image/png;base64,aGk=").unwrap(), b"hi");
        assert_eq!(decode_data_url("aGk=").unwrap(), b"hi");
        assert!(decode_data_url("data:image/png;base64,!!").is_err());
    }

    #[test]
    fn finalize_names_by_template() {
        let dir = tempfile::tempdir().unwrap();
        let temp = dir.path().join("llm-scr_tmp_1.png");
        DynamicImage::ImageRgba8(RgbaImage::new(40, 30))
            .save_with_format(&temp, ImageFormat::Png)
            .unwrap();

        let out = finalize_capture(&temp, dir.path(), &Settings::default()).unwrap();
        let name = out.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("llm-scr_"), "{name}");
        assert!(name.ends_with("_70%_40x30.jpg"), "{name}");
        assert!(out.exists());
        assert!(!temp.exists());
    }
}
