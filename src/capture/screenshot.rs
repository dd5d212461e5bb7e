//! Full-screen capture using the `xcap` crate.
//!
//! This is the infrastructure layer: it talks to the OS.

use image::DynamicImage;
use xcap::Monitor;

use super::CaptureError;

/// Captures the primary monitor's screen as a `DynamicImage`.
///
/// Falls back to the first monitor when none reports itself as primary.
pub fn capture_primary_monitor() -> Result<DynamicImage, CaptureError> {
    let monitors = Monitor::all().map_err(|e| CaptureError::MonitorEnumeration(e.to_string()))?;

    let mut primary = None;
    let mut first = None;
    for monitor in monitors {
        if monitor.is_primary().unwrap_or(false) {
            primary = Some(monitor);
            break;
        }
        if first.is_none() {
            first = Some(monitor);
        }
    }
    let monitor = primary.or(first).ok_or(CaptureError::NoPrimaryMonitor)?;

    let image = monitor
        .capture_image()
        .map_err(|e| CaptureError::CaptureFailed(e.to_string()))?;

    Ok(DynamicImage::ImageRgba8(image))
}
