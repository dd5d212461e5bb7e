//! Area selection through macOS `screencapture -i`.

use std::path::Path;
use std::process::Command;

use super::CaptureError;

/// Lets the user drag out a region and writes it to `path` as PNG.
///
/// `screencapture` exits successfully even when the user presses Escape,
/// so a missing file afterwards means the capture was cancelled.
pub fn capture_area(path: &Path) -> Result<(), CaptureError> {
    let output = Command::new("screencapture")
        .arg("-i")
        .arg("-x")
        .arg(path)
        .output()
        .map_err(CaptureError::Launch)?;

    if !output.status.success() {
        return Err(CaptureError::CaptureFailed(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }
    if !path.exists() {
        return Err(CaptureError::Cancelled);
    }
    Ok(())
}
