//! Screenshot filenames from the user's template.

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

use crate::settings::{BlockKind, Settings, DEFAULT_PREFIX};

const FALLBACK_NAME: &str = "screenshot";
const TEMP_PREFIX: &str = "llm-scr_tmp_";

/// Joins the enabled template blocks with `_`.
///
/// The counter block contributes nothing here; it only switches on the
/// collision suffix in [`screenshot_path`].
pub fn render_base_name(settings: &Settings, width: u32, height: u32, now: DateTime<Local>) -> String {
    let parts: Vec<String> = settings
        .filename_template
        .blocks
        .iter()
        .filter(|block| block.enabled)
        .filter_map(|block| match block.id {
            BlockKind::Prefix => Some(
                block
                    .value
                    .clone()
                    .unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            ),
            BlockKind::Date => Some(now.format("%m-%d").to_string()),
            BlockKind::Time => Some(now.format("%H-%M-%S").to_string()),
            BlockKind::Quality => Some(format!("{}%", settings.quality)),
            BlockKind::Dimensions => Some(format!("{}x{}", width, height)),
            BlockKind::Counter | BlockKind::Unknown => None,
        })
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        parts.join("_")
    }
}

/// Final path for a screenshot in `dir`.
///
/// With the counter on, picks the first of `base.ext`, `base_2.ext`,
/// `base_3.ext`... that does not exist yet.
pub fn screenshot_path(
    dir: &Path,
    extension: &str,
    settings: &Settings,
    width: u32,
    height: u32,
    now: DateTime<Local>,
) -> PathBuf {
    let base = render_base_name(settings, width, height, now);
    let first = dir.join(format!("{}.{}", base, extension));

    if !settings.filename_template.counter_enabled() {
        return first;
    }

    std::iter::once(first)
        .chain((2u32..).map(|n| dir.join(format!("{}_{}.{}", base, n, extension))))
        .find(|candidate| !candidate.exists())
        .unwrap_or_else(|| dir.join(format!("{}.{}", base, extension)))
}

/// Scratch path for a capture before it is compressed and named.
pub fn temp_screenshot_path(dir: &Path, extension: &str) -> PathBuf {
    let millis = Local::now().timestamp_millis();
    dir.join(format!("{}{}.{}", TEMP_PREFIX, millis, extension))
}

/// `$HOME/Desktop`, where screenshots land.
pub fn output_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("Desktop")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::FilenameBlock;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 7, 9, 5, 2).unwrap()
    }

    #[test]
    fn default_template() {
        let name = render_base_name(&Settings::default(), 800, 600, fixed_now());
        assert_eq!(name, "llm-scr_03-07_09-05-02_70%_800x600");
    }

    #[test]
    fn disabled_blocks_and_custom_prefix() {
        let mut settings = Settings::default();
        for block in &mut settings.filename_template.blocks {
            block.enabled = matches!(block.id, BlockKind::Prefix | BlockKind::Dimensions);
            if block.id == BlockKind::Prefix {
                block.value = Some("bug".into());
            }
        }
        assert_eq!(render_base_name(&settings, 10, 20, fixed_now()), "bug_10x20");
    }

    #[test]
    fn empty_template_falls_back() {
        let mut settings = Settings::default();
        settings.filename_template.blocks = vec![FilenameBlock {
            id: BlockKind::Prefix,
            enabled: true,
            value: Some(String::new()),
        }];
        assert_eq!(render_base_name(&settings, 1, 1, fixed_now()), "screenshot");
    }

    #[test]
    fn counter_skips_taken_names() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings::default();
        settings.filename_template.use_counter = true;
        for block in &mut settings.filename_template.blocks {
            block.enabled = block.id == BlockKind::Prefix;
        }

        let first = screenshot_path(dir.path(), "jpg", &settings, 1, 1, fixed_now());
        assert_eq!(first, dir.path().join("llm-scr.jpg"));
        std::fs::write(&first, b"x").unwrap();

        let second = screenshot_path(dir.path(), "jpg", &settings, 1, 1, fixed_now());
        assert_eq!(second, dir.path().join("llm-scr_2.jpg"));
        std::fs::write(&second, b"x").unwrap();

        let third = screenshot_path(dir.path(), "jpg", &settings, 1, 1, fixed_now());
        assert_eq!(third, dir.path().join("llm-scr_3.jpg"));
    }

    #[test]
    fn without_counter_existing_name_is_reused() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::default();
        let path = screenshot_path(dir.path(), "png", &settings, 5, 5, fixed_now());
        std::fs::write(&path, b"x").unwrap();
        assert_eq!(screenshot_path(dir.path(), "png", &settings, 5, 5, fixed_now()), path);
    }

    #[test]
    fn temp_paths_are_marked() {
        let path = temp_screenshot_path(Path::new("/tmp"), "png");
        let name = path.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("llm-scr_tmp_"));
        assert!(name.ends_with(".png"));
    }
}
