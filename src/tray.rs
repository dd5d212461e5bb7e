//! System tray setup and menu handler.
//!
//! The menu labels carry the current shortcuts in glyph form, so the menu
//! is rebuilt whenever the bindings change.

use tauri::{
    image::Image as TauriImage,
    menu::{Menu, MenuBuilder, MenuItemBuilder},
    tray::{MouseButton, MouseButtonState, TrayIconBuilder, TrayIconEvent},
    AppHandle, Manager, Runtime,
};

use crate::capture::CaptureKind;
use crate::settings::Settings;
use crate::shortcut::format_for_display;
use crate::state::AppState;
use crate::{flows, windows};

const TRAY_ID: &str = "main";

fn build_menu<R: Runtime>(app: &AppHandle<R>, settings: &Settings) -> tauri::Result<Menu<R>> {
    let fullscreen = MenuItemBuilder::with_id(
        "fullscreen",
        format!("Screenshot Full ({})", format_for_display(&settings.fullscreen_shortcut)),
    )
    .build(app)?;
    let area = MenuItemBuilder::with_id(
        "area",
        format!("Screenshot Area ({})", format_for_display(&settings.area_shortcut)),
    )
    .build(app)?;
    let stitch = MenuItemBuilder::with_id(
        "stitch",
        format!("Stitch Images ({})", format_for_display(&settings.stitch_shortcut)),
    )
    .build(app)?;
    let show = MenuItemBuilder::with_id("show", "Show App").build(app)?;
    let quit = MenuItemBuilder::with_id("quit", "Quit").build(app)?;

    MenuBuilder::new(app)
        .item(&fullscreen)
        .item(&area)
        .item(&stitch)
        .separator()
        .item(&show)
        .item(&quit)
        .build()
}

/// Sets up the tray icon.
///
/// Left-click: shows the main window.
/// Menu: captures, stitch, show, quit.
pub fn setup_tray(app: &AppHandle) -> Result<(), Box<dyn std::error::Error>> {
    let settings = app.state::<AppState>().settings_snapshot();
    let menu = build_menu(app, &settings)?;

    // Decode the PNG icon to RGBA for Tauri's Image type
    let icon_bytes = include_bytes!("../icons/32x32.png");
    let icon_img = image::load_from_memory(icon_bytes)
        .map_err(|e| format!("Failed to decode tray icon: {}", e))?;
    let rgba = icon_img.to_rgba8();
    let (w, h) = (rgba.width(), rgba.height());
    let tray_icon = TauriImage::new_owned(rgba.into_raw(), w, h);

    TrayIconBuilder::with_id(TRAY_ID)
        .icon(tray_icon)
        .tooltip("Screenshot")
        .menu(&menu)
        .show_menu_on_left_click(false)
        .on_tray_icon_event(|tray_icon, event| {
            if let TrayIconEvent::Click {
                button: MouseButton::Left,
                button_state: MouseButtonState::Up,
                ..
            } = event
            {
                windows::show_main(tray_icon.app_handle());
            }
        })
        .on_menu_event(|app, event| match event.id().as_ref() {
            "fullscreen" => flows::spawn_capture(app, CaptureKind::Fullscreen),
            "area" => flows::spawn_capture(app, CaptureKind::Area),
            "stitch" => flows::start_stitch(app),
            "show" => windows::show_main(app),
            "quit" => {
                log::info!("Quit requested from tray menu");
                app.exit(0);
            }
            _ => {}
        })
        .build(app)?;

    Ok(())
}

/// Rebuilds the menu after the shortcuts changed.
pub fn update_tray_labels(app: &AppHandle) -> tauri::Result<()> {
    let settings = app.state::<AppState>().settings_snapshot();
    let menu = build_menu(app, &settings)?;
    if let Some(tray) = app.tray_by_id(TRAY_ID) {
        tray.set_menu(Some(menu))?;
    }
    Ok(())
}
