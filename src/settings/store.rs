use std::path::{Path, PathBuf};

use super::Settings;
use crate::shortcut::ShortcutBindings;

const SETTINGS_FILE: &str = ".screenshot_app_settings.json";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write settings: {0}")]
    Write(#[from] std::io::Error),
}

/// `$HOME/.screenshot_app_settings.json`, or under `/tmp` without a home.
pub fn settings_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join(SETTINGS_FILE)
}

/// Never fails: a missing or corrupt file yields defaults.
pub fn load(path: &Path) -> Settings {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            if path.exists() {
                log::warn!("[settings] could not read {}: {}", path.display(), e);
            }
            return Settings::default();
        }
    };

    serde_json::from_str(&content).unwrap_or_else(|e| {
        log::warn!("[settings] {} is not valid settings JSON: {}", path.display(), e);
        Settings::default()
    })
}

pub fn save(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    let content = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, content)?;
    log::debug!("[settings] saved to {}", path.display());
    Ok(())
}

/// Whether the file already knows about the stitch shortcut. A missing file
/// counts as up to date; an unreadable one does not.
pub fn has_stitch_shortcut(path: &Path) -> bool {
    if !path.exists() {
        return true;
    }
    std::fs::read_to_string(path)
        .ok()
        .and_then(|content| serde_json::from_str::<serde_json::Value>(&content).ok())
        .is_some_and(|value| value.get("stitchShortcut").is_some())
}

/// Loads settings and repairs stored shortcuts (see
/// [`ShortcutBindings::resolve_or_default`]). Rewrites the file only when
/// something changed.
pub fn load_and_migrate(path: &Path) -> (Settings, ShortcutBindings) {
    let mut settings = load(path);
    let resolved = ShortcutBindings::resolve_or_default(
        &settings.fullscreen_shortcut,
        &settings.area_shortcut,
        &settings.stitch_shortcut,
    );
    settings.apply_bindings(&resolved.bindings);

    if resolved.changed || !has_stitch_shortcut(path) {
        match save(path, &settings) {
            Ok(()) => log::info!("[settings] migrated {}", path.display()),
            Err(e) => log::warn!("[settings] migration not saved: {}", e),
        }
    }

    (settings, resolved.bindings)
}
