//! Everything between a raw capture and a file on the Desktop:
//! compression, naming, renames, backups of originals.

mod backup;
mod compress;
mod filename;
mod files;

pub use backup::BackupCache;
pub use compress::{compress, optimize_file, CompressError};
pub use filename::{output_dir, render_base_name, screenshot_path, temp_screenshot_path};
pub use files::{
    decode_data_url, finalize_capture, mime_type, rename_screenshot, renamed_path, sanitize_name,
    to_data_url,
};
