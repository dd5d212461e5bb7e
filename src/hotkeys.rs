//! Global shortcut registration.
//!
//! The OS registrations always mirror `AppState::bindings`; a failed update
//! puts the previous set back before reporting the error.

use tauri::plugin::TauriPlugin;
use tauri::{AppHandle, Manager, Runtime, Wry};
use tauri_plugin_global_shortcut::{
    GlobalShortcut, GlobalShortcutExt, Shortcut as OsShortcut, ShortcutEvent, ShortcutState,
};

use crate::capture::CaptureKind;
use crate::settings::{self, SettingsError};
use crate::shortcut::{ShortcutAction, ShortcutBindings, ShortcutError};
use crate::state::AppState;
use crate::{flows, tray, windows};

#[derive(Debug, thiserror::Error)]
pub enum HotkeyError {
    #[error(transparent)]
    Shortcut(#[from] ShortcutError),

    #[error("Failed to register {action:?} shortcut {shortcut}: {source}")]
    Register {
        action: ShortcutAction,
        shortcut: String,
        source: tauri_plugin_global_shortcut::Error,
    },

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("Failed to update tray: {0}")]
    Tray(#[from] tauri::Error),
}

const ACTIONS: [ShortcutAction; 3] = [
    ShortcutAction::Fullscreen,
    ShortcutAction::Area,
    ShortcutAction::Stitch,
];

/// The global shortcut plugin, dispatching presses to the bound action.
pub fn plugin() -> TauriPlugin<Wry> {
    tauri_plugin_global_shortcut::Builder::new()
        .with_handler(handle_shortcut)
        .build()
}

/// Registers the bindings loaded at startup.
pub fn register_startup(app: &AppHandle) -> Result<(), HotkeyError> {
    let bindings = *app.state::<AppState>().bindings.lock().unwrap();
    register_all(app.global_shortcut(), &bindings)?;
    log::info!(
        "[shortcut] registered {} / {} / {}",
        bindings.fullscreen,
        bindings.area,
        bindings.stitch
    );
    Ok(())
}

fn handle_shortcut(app: &AppHandle, pressed: &OsShortcut, event: ShortcutEvent) {
    if event.state() != ShortcutState::Pressed {
        return;
    }
    // The recorder needs the keys for itself.
    if windows::is_open(app, windows::SHORTCUT_CONFIG) {
        return;
    }

    let bindings = *app.state::<AppState>().bindings.lock().unwrap();
    let Some(action) = action_for_os(&bindings, pressed) else {
        return;
    };
    log::info!("[shortcut] {:?} triggered", action);

    match action {
        ShortcutAction::Fullscreen => flows::spawn_capture(app, CaptureKind::Fullscreen),
        ShortcutAction::Area => flows::spawn_capture(app, CaptureKind::Area),
        ShortcutAction::Stitch => flows::start_stitch(app),
    }
}

fn action_for_os(bindings: &ShortcutBindings, pressed: &OsShortcut) -> Option<ShortcutAction> {
    bindings
        .all()
        .iter()
        .find(|s| OsShortcut::from(*s) == *pressed)
        .and_then(|s| bindings.action_for(s))
}

fn binding(bindings: &ShortcutBindings, action: ShortcutAction) -> OsShortcut {
    let shortcut = match action {
        ShortcutAction::Fullscreen => bindings.fullscreen,
        ShortcutAction::Area => bindings.area,
        ShortcutAction::Stitch => bindings.stitch,
    };
    OsShortcut::from(&shortcut)
}

fn register_all<R: Runtime>(
    global: &GlobalShortcut<R>,
    bindings: &ShortcutBindings,
) -> Result<(), HotkeyError> {
    for action in ACTIONS {
        let shortcut = binding(bindings, action);
        global
            .register(shortcut)
            .map_err(|source| HotkeyError::Register {
                action,
                shortcut: shortcut.into_string(),
                source,
            })?;
    }
    Ok(())
}

fn unregister_all<R: Runtime>(global: &GlobalShortcut<R>, bindings: &ShortcutBindings) {
    for action in ACTIONS {
        // Not every shortcut of a half-registered set is present.
        let _ = global.unregister(binding(bindings, action));
    }
}

fn restore<R: Runtime>(global: &GlobalShortcut<R>, failed: &ShortcutBindings, old: &ShortcutBindings) {
    unregister_all(global, failed);
    if let Err(e) = register_all(global, old) {
        log::error!("[shortcut] could not restore previous shortcuts: {}", e);
    }
}

/// Swaps the registered shortcuts for `new`, persists them and refreshes
/// the tray. Any failure leaves the previous registrations and settings.
pub fn update_shortcuts(app: &AppHandle, new: ShortcutBindings) -> Result<(), HotkeyError> {
    new.ensure_distinct()?;

    let state = app.state::<AppState>();
    let old = *state.bindings.lock().unwrap();
    let global = app.global_shortcut();

    unregister_all(global, &old);
    if let Err(e) = register_all(global, &new) {
        restore(global, &new, &old);
        return Err(e);
    }

    let (snapshot, previous) = {
        let mut settings = state.settings.lock().unwrap();
        let previous = settings.clone();
        settings.apply_bindings(&new);
        (settings.clone(), previous)
    };
    if let Err(e) = settings::save(&state.settings_path, &snapshot) {
        *state.settings.lock().unwrap() = previous;
        restore(global, &new, &old);
        return Err(e.into());
    }

    *state.bindings.lock().unwrap() = new;
    log::info!(
        "[shortcut] now {} / {} / {}",
        new.fullscreen,
        new.area,
        new.stitch
    );

    tray::update_tray_labels(app)?;
    Ok(())
}
