//! File-backed session slot with atomic writes.

use crate::vault::{LoadedSession, SessionVault};
use crate::vault_error::{VaultError, VaultResult};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use dp_core::UserIdentity;
use log::{info, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Session slot persisted as a single JSON file.
pub struct FileVault {
    path: PathBuf,
}

impl FileVault {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("session.json"))
    }
}

impl SessionVault for FileVault {
    /// Loads the session slot.
    ///
    /// Returns:
    /// - `Ok(LoadedSession { identity: Some(...), .. })` - loaded successfully
    /// - `Ok(LoadedSession { identity: None, corruption: None })` - file doesn't exist (first launch)
    /// - `Ok(LoadedSession { identity: None, corruption: Some(...) })` - file exists but corrupted
    fn load(&self) -> VaultResult<LoadedSession> {
        if !self.path.exists() {
            info!("No session file at {:?} (first launch)", self.path);
            return Ok(LoadedSession::absent());
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| VaultError::file_read(self.path.clone(), e))?;

        match serde_json::from_str::<UserIdentity>(&contents) {
            Ok(identity) => {
                info!("Loaded session for {}", identity.id);
                Ok(LoadedSession::found(identity))
            }
            Err(e) => {
                warn!("Session file corrupted at {:?}: {e}", self.path);
                Ok(LoadedSession::corrupt(e.to_string()))
            }
        }
    }

    /// Saves the identity using the atomic write pattern.
    ///
    /// 1. Writes to temp file
    /// 2. Syncs to disk (fsync)
    /// 3. Atomic rename to final location
    ///
    /// This prevents corruption if the process dies mid-write.
    fn store(&self, identity: &UserIdentity) -> VaultResult<()> {
        let dir = self.dir();
        fs::create_dir_all(&dir).map_err(|e| VaultError::dir_creation(dir.clone(), e))?;

        let temp_path = dir.join(format!("{}.tmp.{}", self.file_name(), std::process::id()));

        // Serialize with pretty printing for debuggability
        let json = serde_json::to_string_pretty(identity)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| VaultError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| VaultError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| VaultError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            // Clean up temp file on failure
            let _ = fs::remove_file(&temp_path);
            VaultError::atomic_rename(temp_path, self.path.clone(), e)
        })?;

        info!("Saved session for {}", identity.id);
        Ok(())
    }

    fn clear(&self) -> VaultResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(VaultError::file_write(self.path.clone(), e)),
        }
    }

    /// Renames `session.json` to `session.json.corrupted.{timestamp}`.
    fn backup_corrupted(&self) -> VaultResult<Option<PathBuf>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self
            .dir()
            .join(format!("{}.corrupted.{timestamp}", self.file_name()));

        fs::rename(&self.path, &backup_path).map_err(VaultError::backup_failed)?;

        warn!("Backed up corrupted session to {backup_path:?}");
        Ok(Some(backup_path))
    }
}
