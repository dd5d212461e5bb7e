//! Screenshot utility: capture, stitch, compress, rename.
//!
//! The library core is platform-neutral and always built:
//! - Shortcut codec (shortcut/)
//! - Vertical image stitcher (stitch/)
//! - Settings and their persistence (settings/)
//! - Output pipeline: compression, naming, backups (output/)
//! - Editor window geometry (editor.rs)
//!
//! The `desktop` feature adds the Tauri app shell on top: tray, global
//! shortcuts, windows, clipboard and the command handlers.

pub mod capture;
pub mod editor;
pub mod output;
pub mod settings;
pub mod shortcut;
pub mod stitch;

#[cfg(feature = "desktop")]
mod clipboard;
#[cfg(feature = "desktop")]
mod commands;
#[cfg(feature = "desktop")]
mod flows;
#[cfg(feature = "desktop")]
mod hotkeys;
#[cfg(feature = "desktop")]
mod state;
#[cfg(feature = "desktop")]
mod tray;
#[cfg(feature = "desktop")]
mod windows;

/// Entry point, called by the binary.
#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use output::BackupCache;
    use state::AppState;
    use tauri::{Manager, WindowEvent};

    env_logger::init();

    BackupCache::new(BackupCache::default_dir()).clear();

    let settings_path = settings::settings_path();
    let (initial_settings, bindings) = settings::load_and_migrate(&settings_path);

    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .plugin(hotkeys::plugin())
        .manage(AppState::new(initial_settings, bindings, settings_path))
        .invoke_handler(tauri::generate_handler![
            commands::get_settings,
            commands::save_settings,
            commands::update_shortcuts,
            commands::normalize_shortcut,
            commands::format_shortcut,
            commands::check_shortcut,
            commands::record_shortcut_key,
            commands::take_screenshot,
            commands::take_fullscreen_screenshot,
            commands::get_finder_selection,
            commands::stitch_images,
            commands::stitch_finder_selection,
            commands::rename_screenshot,
            commands::delete_screenshot,
            commands::read_image_base64,
            commands::read_original_image_base64,
            commands::ensure_original_backup,
            commands::delete_original_backup,
            commands::save_edited_screenshot,
            commands::copy_image_to_clipboard,
            commands::copy_file_to_clipboard,
            commands::open_rename_popup,
            commands::close_rename_popup,
            commands::open_editor_window,
            commands::close_editor_and_open_rename,
            commands::close_editor_window,
            commands::open_shortcut_config,
            commands::close_shortcut_config,
            commands::show_alert,
        ])
        .setup(|app| {
            log::info!("Screenshot app starting up");

            if let Err(e) = hotkeys::register_startup(app.handle()) {
                log::error!("[shortcut] startup registration failed: {}", e);
            }
            tray::setup_tray(app.handle())?;

            log::info!("System tray initialized, ready for captures");
            Ok(())
        })
        .on_window_event(|window, event| {
            // The main window only hides; the app lives in the tray.
            if window.label() == windows::MAIN {
                if let WindowEvent::CloseRequested { api, .. } = event {
                    api.prevent_close();
                    let _ = window.hide();
                }
            }
        })
        .run(tauri::generate_context!())
        .expect("Error running screenshot app");
}
