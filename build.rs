//! Build script for the screenshot app.
//!
//! Only the `desktop` feature needs Tauri's generated context; the library
//! core builds with no extra steps.

fn main() {
    #[cfg(feature = "desktop")]
    tauri_build::build();
}
