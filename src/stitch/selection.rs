//! Finder selection: which files the user wants stitched.

use std::path::{Path, PathBuf};
use std::process::Command;

const FINDER_SELECTION_SCRIPT: &str = r#"
tell application "Finder"
    activate
    delay 0.1
    set selectedItems to selection
    if selectedItems is {} then
        try
            set selectedItems to selection of Finder window 1
        end try
    end if
    set output to ""
    repeat with anItem in selectedItems
        set output to output & (POSIX path of (anItem as alias)) & linefeed
    end repeat
end tell
return output
"#;

#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("Failed to read Finder selection: {0}")]
    Launch(#[from] std::io::Error),

    #[error("Failed to read Finder selection: {0}")]
    Script(String),
}

/// Asks Finder (via `osascript`) for the selected files, keeping only
/// stitchable images.
pub fn finder_selection() -> Result<Vec<PathBuf>, SelectionError> {
    let output = Command::new("osascript")
        .args(["-e", FINDER_SELECTION_SCRIPT])
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let message = stderr.trim();
        log::warn!("[stitch] finder selection error: {}", message);
        return Err(SelectionError::Script(if message.is_empty() {
            "osascript exited with an error".to_string()
        } else {
            message.to_string()
        }));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let paths = parse_selection(&stdout);
    log::info!("[stitch] finder selection filtered count: {}", paths.len());
    Ok(paths)
}

/// One path per line; blank lines, missing files and non-images dropped.
pub fn parse_selection(raw: &str) -> Vec<PathBuf> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .filter(|path| path.is_file() && is_stitchable(path))
        .collect()
}

pub fn is_stitchable(path: &Path) -> bool {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    matches!(ext.as_str(), "png" | "jpg" | "jpeg")
}
