//! Image clipboard via `arboard`.

use std::path::Path;

use arboard::{Clipboard, ImageData};

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Failed to read image: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to decode image: {0}")]
    Decode(String),

    #[error("Failed to access clipboard: {0}")]
    Clipboard(#[from] arboard::Error),
}

/// Decodes PNG or JPEG bytes into the RGBA layout the clipboard expects.
pub fn to_image_data(bytes: &[u8]) -> Result<ImageData<'static>, ClipboardError> {
    let img = image::load_from_memory(bytes).map_err(|e| ClipboardError::Decode(e.to_string()))?;
    let rgba = img.to_rgba8();
    Ok(ImageData {
        width: rgba.width() as usize,
        height: rgba.height() as usize,
        bytes: rgba.into_raw().into(),
    })
}

pub fn copy_image_bytes(bytes: &[u8]) -> Result<(), ClipboardError> {
    let data = to_image_data(bytes)?;
    let (width, height) = (data.width, data.height);
    Clipboard::new()?.set_image(data)?;
    log::info!("[clipboard] copied {}x{} image", width, height);
    Ok(())
}

pub fn copy_image_file(path: &Path) -> Result<(), ClipboardError> {
    copy_image_bytes(&std::fs::read(path)?)
}
