//! Tauri command handlers for frontend communication.
//!
//! Thin wrappers: each converts its domain error to a `String` at the IPC
//! boundary. Commands that block on the filesystem or child processes run
//! off the main thread.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tauri::{AppHandle, Manager, State};

use crate::capture::CaptureKind;
use crate::flows::{self, StitchOutput};
use crate::output::{decode_data_url, rename_screenshot as rename_file, to_data_url};
use crate::settings::{self, Settings};
use crate::shortcut::{
    check_distinct, format_for_display, normalize, record, KeyEvent, RecordOutcome,
    ShortcutBindings, ShortcutError,
};
use crate::state::AppState;
use crate::stitch::finder_selection;
use crate::windows::{self, PopupContext};
use crate::{clipboard, hotkeys};

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Format problems get an "Invalid shortcut" prefix; collisions read as-is.
fn shortcut_message(e: ShortcutError) -> String {
    if e.is_invalid_format() {
        format!("Invalid shortcut: {}", e)
    } else {
        e.to_string()
    }
}

/// Tauri command: current settings for the settings panel.
#[tauri::command]
pub fn get_settings(state: State<'_, AppState>) -> Settings {
    state.settings_snapshot()
}

/// Tauri command: persist settings.
///
/// The shortcuts are kept as registered; they only change through
/// `update_shortcuts`.
#[tauri::command]
pub fn save_settings(state: State<'_, AppState>, settings: Settings) -> Result<(), String> {
    let mut settings = settings;
    let bindings = *state.bindings.lock().unwrap();
    settings.apply_bindings(&bindings);
    settings::save(&state.settings_path, &settings).map_err(|e| e.to_string())?;
    *state.settings.lock().unwrap() = settings;
    Ok(())
}

/// Tauri command: re-register all three global shortcuts.
#[tauri::command]
pub fn update_shortcuts(
    app: AppHandle,
    fullscreen_shortcut: String,
    area_shortcut: String,
    stitch_shortcut: String,
) -> Result<(), String> {
    let bindings = ShortcutBindings::parse(&fullscreen_shortcut, &area_shortcut, &stitch_shortcut)
        .map_err(shortcut_message)?;
    hotkeys::update_shortcuts(&app, bindings).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn normalize_shortcut(shortcut: String) -> Result<String, String> {
    normalize(&shortcut).map_err(shortcut_message)
}

#[tauri::command]
pub fn format_shortcut(shortcut: String) -> String {
    format_for_display(&shortcut)
}

/// Validates a recorded shortcut against every other binding.
#[tauri::command]
pub fn check_shortcut(candidate: String, others: Vec<String>) -> Result<String, String> {
    let mut canonical = normalize(&candidate).map_err(shortcut_message)?;
    for other in &others {
        canonical = check_distinct(&canonical, other).map_err(shortcut_message)?;
    }
    Ok(canonical)
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum RecordedKey {
    Pending { display: String },
    Complete { shortcut: String, display: String },
    Rejected { error: String },
}

/// Tauri command: interpret one keydown in the shortcut recorder.
#[tauri::command]
pub fn record_shortcut_key(event: KeyEvent) -> RecordedKey {
    match record(&event) {
        RecordOutcome::Pending(modifiers) => RecordedKey::Pending {
            display: modifiers.iter().map(|m| m.glyph()).collect(),
        },
        RecordOutcome::Complete(shortcut) => {
            let shortcut = shortcut.to_string();
            RecordedKey::Complete {
                display: format_for_display(&shortcut),
                shortcut,
            }
        }
        RecordOutcome::Rejected(e) => RecordedKey::Rejected {
            error: e.to_string(),
        },
    }
}

#[tauri::command(async)]
pub fn take_screenshot(app: AppHandle) -> Result<String, String> {
    flows::capture_to_file(&app, CaptureKind::Area)
        .map(|p| path_string(&p))
        .map_err(|e| e.to_string())
}

#[tauri::command(async)]
pub fn take_fullscreen_screenshot(app: AppHandle) -> Result<String, String> {
    flows::capture_to_file(&app, CaptureKind::Fullscreen)
        .map(|p| path_string(&p))
        .map_err(|e| e.to_string())
}

#[tauri::command(async)]
pub fn get_finder_selection() -> Result<Vec<String>, String> {
    let paths = finder_selection().map_err(|e| e.to_string())?;
    Ok(paths.iter().map(|p| path_string(p)).collect())
}

/// Tauri command: stitch the given files top to bottom.
#[tauri::command(async)]
pub fn stitch_images(app: AppHandle, paths: Vec<String>) -> Result<StitchOutput, String> {
    let _guard = app
        .state::<AppState>()
        .stitch_lock
        .try_acquire()
        .ok_or_else(|| flows::FlowError::StitchBusy.to_string())?;
    let paths: Vec<PathBuf> = paths.into_iter().map(PathBuf::from).collect();
    flows::stitch_paths(&app, &paths).map_err(|e| e.to_string())
}

/// Same as the stitch shortcut: Finder selection in, rename popup out.
#[tauri::command]
pub fn stitch_finder_selection(app: AppHandle) {
    flows::start_stitch(&app);
}

#[tauri::command]
pub fn rename_screenshot(old_path: String, new_name: String) -> Result<String, String> {
    rename_file(Path::new(&old_path), &new_name)
        .map(|p| path_string(&p))
        .map_err(|e| format!("Failed to rename: {}", e))
}

#[tauri::command]
pub fn delete_screenshot(app: AppHandle, filepath: String) -> Result<(), String> {
    flows::delete_screenshot(&app, Path::new(&filepath))
        .map_err(|e| format!("Failed to delete: {}", e))
}

#[tauri::command]
pub fn read_image_base64(filepath: String) -> Result<String, String> {
    let path = Path::new(&filepath);
    let bytes = std::fs::read(path).map_err(|e| format!("Failed to read image: {}", e))?;
    Ok(to_data_url(&bytes, path))
}

#[tauri::command]
pub fn read_original_image_base64(
    state: State<'_, AppState>,
    filepath: String,
) -> Result<String, String> {
    let path = Path::new(&filepath);
    let bytes = state
        .backups
        .read_original(path)
        .map_err(|e| format!("Failed to read original: {}", e))?;
    Ok(to_data_url(&bytes, path))
}

#[tauri::command]
pub fn ensure_original_backup(state: State<'_, AppState>, filepath: String) -> Result<bool, String> {
    state
        .backups
        .ensure(Path::new(&filepath))
        .map_err(|e| format!("Failed to back up original: {}", e))
}

#[tauri::command]
pub fn delete_original_backup(state: State<'_, AppState>, filepath: String) -> Result<(), String> {
    state
        .backups
        .delete(Path::new(&filepath))
        .map_err(|e| e.to_string())
}

/// Tauri command: overwrite the screenshot with the editor's output.
#[tauri::command]
pub fn save_edited_screenshot(filepath: String, base64_data: String) -> Result<String, String> {
    let bytes = decode_data_url(&base64_data).map_err(|e| format!("Failed to decode base64: {}", e))?;
    std::fs::write(&filepath, bytes).map_err(|e| format!("Failed to write file: {}", e))?;
    Ok(filepath)
}

#[tauri::command]
pub fn copy_image_to_clipboard(base64_data: String) -> Result<(), String> {
    let bytes = decode_data_url(&base64_data).map_err(|e| format!("Failed to decode base64: {}", e))?;
    clipboard::copy_image_bytes(&bytes).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn copy_file_to_clipboard(filepath: String) -> Result<(), String> {
    clipboard::copy_image_file(Path::new(&filepath)).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn open_rename_popup(
    app: AppHandle,
    filepath: String,
    context: Option<PopupContext>,
) -> Result<(), String> {
    windows::open_rename_popup(&app, Path::new(&filepath), &context.unwrap_or_default())
        .map_err(|e| format!("Failed to open rename window: {}", e))
}

#[tauri::command]
pub fn close_rename_popup(app: AppHandle) {
    windows::close(&app, windows::RENAME);
}

#[tauri::command]
pub fn open_editor_window(
    app: AppHandle,
    filepath: String,
    note: Option<String>,
    burned_note: Option<String>,
) -> Result<(), String> {
    let context = PopupContext {
        note,
        burned_note,
        ..PopupContext::default()
    };
    windows::open_editor(&app, Path::new(&filepath), &context).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn close_editor_and_open_rename(
    app: AppHandle,
    filepath: String,
    note: Option<String>,
    burned_note: Option<String>,
) -> Result<(), String> {
    windows::close(&app, windows::EDITOR);
    let context = PopupContext {
        note,
        burned_note,
        ..PopupContext::default()
    };
    windows::open_rename_popup(&app, Path::new(&filepath), &context).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn close_editor_window(app: AppHandle) {
    windows::close(&app, windows::EDITOR);
}

#[tauri::command]
pub fn open_shortcut_config(
    app: AppHandle,
    target: String,
    current_shortcut: String,
    other_shortcuts: Vec<String>,
) -> Result<(), String> {
    windows::open_shortcut_config(&app, &target, &current_shortcut, &other_shortcuts)
        .map_err(|e| format!("Failed to open shortcut config: {}", e))
}

#[tauri::command]
pub fn close_shortcut_config(app: AppHandle) {
    windows::close(&app, windows::SHORTCUT_CONFIG);
}

#[tauri::command]
pub fn show_alert(title: String, message: String) {
    log::warn!("[alert] {}: {}", title, message);
}
