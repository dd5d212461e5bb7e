//! Originals kept aside before the editor overwrites a screenshot.

use sha2::{Digest, Sha256};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct BackupCache {
    dir: PathBuf,
}

impl BackupCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<user cache dir>/screenshotapp/backups`.
    pub fn default_dir() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("screenshotapp")
            .join("backups")
    }

    pub fn backup_path(&self, file: &Path) -> PathBuf {
        self.dir.join(format!("{}.original", path_hash(file)))
    }

    /// Copies `file` aside unless a backup already exists.
    /// Returns whether a new backup was written.
    pub fn ensure(&self, file: &Path) -> io::Result<bool> {
        let backup = self.backup_path(file);
        if backup.exists() {
            return Ok(false);
        }
        std::fs::create_dir_all(&self.dir)?;
        std::fs::copy(file, &backup)?;
        log::debug!("[backup] saved original of {}", file.display());
        Ok(true)
    }

    /// The pre-edit bytes, or the current file when nothing was backed up.
    pub fn read_original(&self, file: &Path) -> io::Result<Vec<u8>> {
        let backup = self.backup_path(file);
        if backup.exists() {
            std::fs::read(backup)
        } else {
            std::fs::read(file)
        }
    }

    pub fn delete(&self, file: &Path) -> io::Result<()> {
        match std::fs::remove_file(self.backup_path(file)) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }

    /// Removes every backup. Run at startup; backups never outlive a session.
    pub fn clear(&self) {
        let Ok(entries) = std::fs::read_dir(&self.dir) else {
            return;
        };
        for entry in entries.flatten() {
            if let Err(e) = std::fs::remove_file(entry.path()) {
                log::warn!("[backup] could not remove {}: {}", entry.path().display(), e);
            }
        }
    }
}

/// First 16 hex chars of the SHA-256 of the path.
fn path_hash(file: &Path) -> String {
    let digest = Sha256::digest(file.to_string_lossy().as_bytes());
    digest[..8].iter().map(|b| format!("{:02x}", b)).collect()
}
