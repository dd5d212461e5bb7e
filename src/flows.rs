//! User-triggered flows shared by the tray, global shortcuts and commands.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use tauri::{AppHandle, Emitter, Manager};

use crate::capture::{self, CaptureError, CaptureKind};
use crate::output::{finalize_capture, output_dir, temp_screenshot_path};
use crate::settings::Settings;
use crate::state::AppState;
use crate::stitch::{
    finder_selection, run_stitch, HostError, PipelineError, SelectionError, StitchHost,
    StitchResult,
};
use crate::windows::{self, PopupContext};

pub const STITCH_FAILED_EVENT: &str = "stitch-failed";

#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Stitch(#[from] PipelineError),

    #[error("Stitch already in progress")]
    StitchBusy,

    #[error("Stitch produced no output")]
    NothingDelivered,

    #[error("Failed to open window: {0}")]
    Window(#[from] tauri::Error),
}

/// Where a finished composite ended up.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StitchOutput {
    pub path: PathBuf,
    pub max_source_width: u32,
    pub max_source_height: u32,
}

/// Reads sources from disk and saves the composite through the capture
/// output pipeline.
struct DesktopHost {
    dir: PathBuf,
    settings: Settings,
    delivered: RefCell<Option<StitchOutput>>,
}

impl StitchHost for DesktopHost {
    type Id = PathBuf;

    fn fetch_image_bytes(&self, path: &PathBuf) -> Result<Vec<u8>, HostError> {
        std::fs::read(path).map_err(|e| HostError(format!("{}: {}", path.display(), e)))
    }

    fn deliver_result(&self, result: StitchResult) -> Result<(), HostError> {
        let temp = temp_screenshot_path(&self.dir, "png");
        std::fs::write(&temp, &result.png_bytes)?;
        let path = finalize_capture(&temp, &self.dir, &self.settings)
            .map_err(|e| HostError(e.to_string()))?;
        log::info!(
            "[stitch] saved {}x{} composite to {}",
            result.width,
            result.height,
            path.display()
        );
        *self.delivered.borrow_mut() = Some(StitchOutput {
            path,
            max_source_width: result.max_source_width,
            max_source_height: result.max_source_height,
        });
        Ok(())
    }
}

/// Captures into the output directory. Refused while a rename is pending.
pub fn capture_to_file(app: &AppHandle, kind: CaptureKind) -> Result<PathBuf, FlowError> {
    if windows::is_open(app, windows::RENAME) {
        return Err(CaptureError::RenamePending.into());
    }
    let settings = app.state::<AppState>().settings_snapshot();
    Ok(capture::capture(kind, &output_dir(), &settings)?)
}

/// Captures on a worker thread and opens the rename popup on success.
pub fn spawn_capture(app: &AppHandle, kind: CaptureKind) {
    let app = app.clone();
    std::thread::spawn(move || match capture_to_file(&app, kind) {
        Ok(path) => {
            if let Err(e) = windows::open_rename_popup(&app, &path, &PopupContext::default()) {
                log::error!("[capture] could not open rename popup: {}", e);
            }
        }
        Err(FlowError::Capture(CaptureError::Cancelled)) => {
            log::info!("[capture] {:?} cancelled", kind);
        }
        Err(e) => log::error!("[capture] {:?} failed: {}", kind, e),
    });
}

/// Stitches `paths` in order. The caller must hold the stitch lock.
pub fn stitch_paths(app: &AppHandle, paths: &[PathBuf]) -> Result<StitchOutput, FlowError> {
    let host = DesktopHost {
        dir: output_dir(),
        settings: app.state::<AppState>().settings_snapshot(),
        delivered: RefCell::new(None),
    };
    run_stitch(&host, paths)?;
    host.delivered.into_inner().ok_or(FlowError::NothingDelivered)
}

fn stitch_selection_and_rename(app: &AppHandle) -> Result<(), FlowError> {
    let paths = finder_selection()?;
    let output = stitch_paths(app, &paths)?;
    let context = PopupContext {
        max_source: Some((output.max_source_width, output.max_source_height)),
        ..PopupContext::default()
    };
    windows::open_rename_popup(app, &output.path, &context)?;
    Ok(())
}

/// Stitches the current Finder selection unless a stitch is running.
/// Failures are reported to the frontend as a `stitch-failed` event.
pub fn start_stitch(app: &AppHandle) {
    let Some(guard) = app.state::<AppState>().stitch_lock.try_acquire() else {
        log::info!("[stitch] request ignored: stitch already running");
        return;
    };
    log::info!("[stitch] request accepted");

    let app = app.clone();
    std::thread::spawn(move || {
        let _guard = guard;
        if let Err(e) = stitch_selection_and_rename(&app) {
            log::error!("[stitch] {}", e);
            if let Err(emit_err) = app.emit(STITCH_FAILED_EVENT, e.to_string()) {
                log::warn!("[stitch] could not report failure: {}", emit_err);
            }
        }
    });
}

/// Deletes a screenshot and its backup, closing any window showing it.
pub fn delete_screenshot(app: &AppHandle, path: &Path) -> std::io::Result<()> {
    let state = app.state::<AppState>();
    if let Err(e) = state.backups.delete(path) {
        log::warn!("[backup] could not delete backup of {}: {}", path.display(), e);
    }
    std::fs::remove_file(path)?;
    windows::close(app, windows::RENAME);
    windows::close(app, windows::EDITOR);
    log::info!("[capture] deleted {}", path.display());
    Ok(())
}
