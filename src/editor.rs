//! Editor window geometry.
//!
//! The window hugs the image plus padding and the toolbar, shrinking the
//! canvas only when the image would not fit the maximum window.

const TOOLBAR_HEIGHT: f64 = 72.0;
const MIN_WIDTH: f64 = 580.0;
const MIN_HEIGHT: f64 = 250.0;
const MAX_WIDTH: f64 = 1400.0;
const MAX_HEIGHT: f64 = 900.0;
const MAX_PADDING: f64 = 40.0;

pub const EDITOR_MIN_SIZE: (f64, f64) = (MIN_WIDTH, MIN_HEIGHT);

/// Padding around the canvas. Images that already fill most of the window
/// (or were shrunk to `maxWidth`) get less.
pub fn editor_padding(img_width: u32, img_height: u32, was_resized: bool) -> f64 {
    if was_resized {
        return 0.0;
    }
    let fill_w = img_width as f64 / (MAX_WIDTH - MAX_PADDING);
    let fill_h = img_height as f64 / (MAX_HEIGHT - TOOLBAR_HEIGHT - MAX_PADDING);
    let fill = fill_w.max(fill_h).min(1.0);
    MAX_PADDING * (1.0 - fill)
}

/// `(width, height)` of the editor window for an image.
pub fn editor_window_size(img_width: u32, img_height: u32, padding: f64) -> (f64, f64) {
    let (img_w, img_h) = (img_width as f64, img_height as f64);
    let available_w = MAX_WIDTH - padding;
    let available_h = MAX_HEIGHT - TOOLBAR_HEIGHT - padding;

    let (canvas_w, canvas_h) = if img_w <= available_w && img_h <= available_h {
        (img_w, img_h)
    } else {
        let scale = (available_w / img_w).min(available_h / img_h);
        (img_w * scale, img_h * scale)
    };

    let window_w = (canvas_w + padding).clamp(MIN_WIDTH, MAX_WIDTH);
    let window_h = (canvas_h + TOOLBAR_HEIGHT + padding).clamp(MIN_HEIGHT, MAX_HEIGHT);
    (window_w, window_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resized_images_get_no_padding() {
        assert_eq!(editor_padding(100, 100, true), 0.0);
    }

    #[test]
    fn small_images_get_nearly_full_padding() {
        let p = editor_padding(0, 0, false);
        assert_eq!(p, MAX_PADDING);
        let p = editor_padding(1360, 100, false);
        assert!(p.abs() < 1e-9);
        let p = editor_padding(680, 0, false);
        assert!((p - MAX_PADDING / 2.0).abs() < 1e-9);
    }

    #[test]
    fn small_image_clamps_to_minimum() {
        assert_eq!(editor_window_size(100, 50, 40.0), (MIN_WIDTH, MIN_HEIGHT));
    }

    #[test]
    fn fitting_image_wraps_tightly() {
        let (w, h) = editor_window_size(800, 600, 10.0);
        assert_eq!(w, 810.0);
        assert_eq!(h, 600.0 + TOOLBAR_HEIGHT + 10.0);
    }

    #[test]
    fn huge_image_scales_into_max_window() {
        let (w, h) = editor_window_size(4000, 3000, 0.0);
        assert!(w <= MAX_WIDTH && h <= MAX_HEIGHT);
        // Height-bound: canvas = 828 tall, 1104 wide.
        assert!((w - 1104.0).abs() < 1e-6);
        assert!((h - MAX_HEIGHT).abs() < 1e-6);
    }
}
