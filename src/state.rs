//! Shared state managed by the Tauri app.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::output::BackupCache;
use crate::settings::Settings;
use crate::shortcut::ShortcutBindings;
use crate::stitch::StitchLock;

pub struct AppState {
    pub settings: Mutex<Settings>,
    /// Shortcuts currently registered with the OS.
    pub bindings: Mutex<ShortcutBindings>,
    pub stitch_lock: Arc<StitchLock>,
    pub backups: BackupCache,
    pub settings_path: PathBuf,
}

impl AppState {
    pub fn new(settings: Settings, bindings: ShortcutBindings, settings_path: PathBuf) -> Self {
        Self {
            settings: Mutex::new(settings),
            bindings: Mutex::new(bindings),
            stitch_lock: StitchLock::new(),
            backups: BackupCache::new(BackupCache::default_dir()),
            settings_path,
        }
    }

    pub fn settings_snapshot(&self) -> Settings {
        self.settings.lock().unwrap().clone()
    }
}
