//! Secondary windows: rename popup, editor, shortcut recorder.
//!
//! Each window is a static page of the frontend; its inputs travel in the
//! query string.

use std::path::Path;

use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindowBuilder};

use crate::editor::{editor_padding, editor_window_size, EDITOR_MIN_SIZE};
use crate::state::AppState;

pub const MAIN: &str = "main";
pub const RENAME: &str = "rename";
pub const EDITOR: &str = "editor";
pub const SHORTCUT_CONFIG: &str = "shortcut-config";

const RENAME_SIZE: (f64, f64) = (410.0, 215.0);
const SHORTCUT_CONFIG_SIZE: (f64, f64) = (260.0, 180.0);

pub fn is_open(app: &AppHandle, label: &str) -> bool {
    app.get_webview_window(label).is_some()
}

pub fn close(app: &AppHandle, label: &str) {
    if let Some(window) = app.get_webview_window(label) {
        if let Err(e) = window.close() {
            log::warn!("[windows] could not close {}: {}", label, e);
        }
    }
}

pub fn show_main(app: &AppHandle) {
    if let Some(window) = app.get_webview_window(MAIN) {
        let _ = window.show();
        let _ = window.set_focus();
    }
}

/// Extra context the rename popup forwards to the editor.
#[derive(Debug, Default, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopupContext {
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub burned_note: Option<String>,
    /// Largest source dimensions, set for stitched composites.
    #[serde(default)]
    pub max_source: Option<(u32, u32)>,
}

impl PopupContext {
    fn query(&self) -> String {
        let mut query = String::new();
        if let Some(note) = &self.note {
            query.push_str(&format!("&note={}", urlencoding::encode(note)));
        }
        if let Some(burned) = &self.burned_note {
            query.push_str(&format!("&burnedNote={}", urlencoding::encode(burned)));
        }
        if let Some((w, h)) = self.max_source {
            query.push_str(&format!("&maxSourceWidth={}&maxSourceHeight={}", w, h));
        }
        query
    }
}

pub fn open_rename_popup(app: &AppHandle, path: &Path, context: &PopupContext) -> tauri::Result<()> {
    close(app, RENAME);
    let url = format!(
        "/rename.html?path={}{}",
        urlencoding::encode(&path.to_string_lossy()),
        context.query()
    );

    WebviewWindowBuilder::new(app, RENAME, WebviewUrl::App(url.into()))
        .title("Screenshot")
        .inner_size(RENAME_SIZE.0, RENAME_SIZE.1)
        .resizable(false)
        .always_on_top(true)
        .center()
        .focused(true)
        .decorations(false)
        .transparent(true)
        .build()?;

    log::info!("[windows] rename popup for {}", path.display());
    Ok(())
}

/// Opens the editor sized to the image. Closes the rename popup first.
pub fn open_editor(app: &AppHandle, path: &Path, context: &PopupContext) -> tauri::Result<()> {
    close(app, RENAME);
    close(app, EDITOR);

    let (width, height) = image::image_dimensions(path).unwrap_or((800, 600));
    let max_width = app.state::<AppState>().settings_snapshot().max_width;
    // A capture exactly `maxWidth` wide was shrunk by compression.
    let was_resized = max_width > 0 && width == max_width;
    let padding = editor_padding(width, height, was_resized);
    let (window_w, window_h) = editor_window_size(width, height, padding);

    let url = format!(
        "/editor.html?path={}&padding={}{}",
        urlencoding::encode(&path.to_string_lossy()),
        padding.round() as i32,
        context.query()
    );

    WebviewWindowBuilder::new(app, EDITOR, WebviewUrl::App(url.into()))
        .title("Edit Screenshot")
        .inner_size(window_w, window_h)
        .min_inner_size(EDITOR_MIN_SIZE.0, EDITOR_MIN_SIZE.1)
        .resizable(true)
        .center()
        .build()?;

    log::info!(
        "[windows] editor {}x{} for {}x{} image",
        window_w,
        window_h,
        width,
        height
    );
    Ok(())
}

/// Opens the recorder for one action. `others` are the shortcuts it must
/// not collide with.
pub fn open_shortcut_config(
    app: &AppHandle,
    target: &str,
    current: &str,
    others: &[String],
) -> tauri::Result<()> {
    close(app, SHORTCUT_CONFIG);
    let others = others
        .iter()
        .map(|s| urlencoding::encode(s).into_owned())
        .collect::<Vec<_>>()
        .join(",");
    let url = format!(
        "/shortcut-config.html?target={}&current={}&others={}",
        urlencoding::encode(target),
        urlencoding::encode(current),
        others
    );

    WebviewWindowBuilder::new(app, SHORTCUT_CONFIG, WebviewUrl::App(url.into()))
        .title("Configure Shortcut")
        .inner_size(SHORTCUT_CONFIG_SIZE.0, SHORTCUT_CONFIG_SIZE.1)
        .resizable(false)
        .always_on_top(true)
        .center()
        .focused(true)
        .decorations(false)
        .transparent(true)
        .build()?;
    Ok(())
}
