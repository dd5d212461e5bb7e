//! Screen capture domain: public API.
//!
//! Area captures go through the system picker; full-screen captures grab
//! the primary monitor directly. Both end in the output pipeline.

mod interactive;
#[cfg(feature = "desktop")]
mod screenshot;

pub use interactive::capture_area;
#[cfg(feature = "desktop")]
pub use screenshot::capture_primary_monitor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureKind {
    Area,
    Fullscreen,
}

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("Failed to enumerate monitors: {0}")]
    MonitorEnumeration(String),

    #[error("No primary monitor found")]
    NoPrimaryMonitor,

    #[error("Screen capture failed: {0}")]
    CaptureFailed(String),

    #[error("Failed to run screencapture: {0}")]
    Launch(std::io::Error),

    #[error("Screenshot cancelled")]
    Cancelled,

    #[error("Please finish renaming the current screenshot first")]
    RenamePending,

    #[error(transparent)]
    Output(#[from] crate::output::CompressError),
}

/// Captures, compresses and names a screenshot in `dir`.
#[cfg(feature = "desktop")]
pub fn capture(
    kind: CaptureKind,
    dir: &std::path::Path,
    settings: &crate::settings::Settings,
) -> Result<std::path::PathBuf, CaptureError> {
    use crate::output::{finalize_capture, temp_screenshot_path};

    let start = std::time::Instant::now();
    let temp = temp_screenshot_path(dir, "png");

    match kind {
        CaptureKind::Area => capture_area(&temp)?,
        CaptureKind::Fullscreen => {
            let screenshot = capture_primary_monitor()?;
            screenshot
                .save_with_format(&temp, image::ImageFormat::Png)
                .map_err(|e| CaptureError::CaptureFailed(e.to_string()))?;
        }
    }
    log::info!("[capture] {:?} captured in {}ms", kind, start.elapsed().as_millis());

    let path = finalize_capture(&temp, dir, settings)?;
    log::info!("[capture] {:?} finished in {}ms", kind, start.elapsed().as_millis());
    Ok(path)
}
