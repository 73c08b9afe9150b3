//! The backing file: one JSON array of `{username, password}` objects.
//!
//! Always read whole and replaced whole; never appended to or streamed.

use crate::{AuthError, LoadResult, Result as AuthResult};

use std::path::{Path, PathBuf};

use log::{info, warn};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use wh_core::User;

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";
const DEFAULT_FILE_NAME: &str = "users.json";

#[derive(Debug, Clone)]
pub struct UserFile {
    path: PathBuf,
    backup_corrupted: bool,
}

impl UserFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            backup_corrupted: true,
        }
    }

    /// Whether an unusable file is kept aside before it is overwritten.
    pub fn with_backup_corrupted(mut self, backup_corrupted: bool) -> Self {
        self.backup_corrupted = backup_corrupted;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backs_up_corrupted(&self) -> bool {
        self.backup_corrupted
    }

    /// Reads and classifies the backing file.
    ///
    /// Returns:
    /// - `Ok(LoadResult::Loaded(..))` - array of users
    /// - `Ok(LoadResult::Missing)` - file doesn't exist (first launch)
    /// - `Ok(LoadResult::NotAnArray)` - valid JSON of the wrong shape
    /// - `Ok(LoadResult::Corrupted { .. })` - unparseable content
    /// - `Err(..)` - the file exists but could not be read
    pub async fn load(&self) -> AuthResult<LoadResult> {
        let exists = fs::try_exists(&self.path)
            .await
            .map_err(|e| AuthError::file_read(self.path.clone(), e))?;

        if !exists {
            info!("No users file at {:?} (first launch)", self.path);
            return Ok(LoadResult::Missing);
        }

        let contents = fs::read_to_string(&self.path)
            .await
            .map_err(|e| AuthError::file_read(self.path.clone(), e))?;

        let document: serde_json::Value = match serde_json::from_str(&contents) {
            Ok(value) => value,
            Err(e) => {
                warn!("Users file corrupted at {:?}: {e}", self.path);
                return Ok(LoadResult::Corrupted {
                    message: e.to_string(),
                });
            }
        };

        if !document.is_array() {
            warn!("Users file at {:?} is not an array", self.path);
            return Ok(LoadResult::NotAnArray);
        }

        match serde_json::from_value::<Vec<User>>(document) {
            Ok(users) => {
                info!("Loaded {} users from {:?}", users.len(), self.path);
                Ok(LoadResult::Loaded(users))
            }
            Err(e) => {
                warn!("Users file at {:?} holds malformed records: {e}", self.path);
                Ok(LoadResult::Corrupted {
                    message: e.to_string(),
                })
            }
        }
    }

    /// Replaces the backing file with `users` using an atomic write.
    ///
    /// 1. Writes to temp file
    /// 2. Syncs to disk (fsync)
    /// 3. Atomic rename to final location
    pub async fn save(&self, users: &[User]) -> AuthResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| AuthError::dir_creation(dir.to_path_buf(), e))?;
        }

        let temp_path = self.sibling(&format!("tmp.{}", std::process::id()));

        // Pretty printed so the file stays hand-editable
        let json = serde_json::to_string_pretty(users)?;

        {
            let mut file = fs::File::create(&temp_path)
                .await
                .map_err(|e| AuthError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .await
                .map_err(|e| AuthError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .await
                .map_err(|e| AuthError::file_write(temp_path.clone(), e))?;
        }

        if let Err(e) = fs::rename(&temp_path, &self.path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(AuthError::atomic_rename(temp_path, self.path.clone(), e));
        }

        info!("Saved {} users to {:?}", users.len(), self.path);
        Ok(())
    }

    /// Moves an unusable backing file to `<name>.corrupted.<timestamp>`.
    ///
    /// Returns `Ok(None)` when backups are disabled or there is no file.
    pub async fn backup_corrupted(&self) -> AuthResult<Option<PathBuf>> {
        if !self.backup_corrupted {
            return Ok(None);
        }

        let exists = fs::try_exists(&self.path)
            .await
            .map_err(AuthError::backup_failed)?;
        if !exists {
            return Ok(None);
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self.sibling(&format!("corrupted.{timestamp}"));

        fs::rename(&self.path, &backup_path)
            .await
            .map_err(AuthError::backup_failed)?;

        warn!("Backed up corrupted users file to {backup_path:?}");
        Ok(Some(backup_path))
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from(DEFAULT_FILE_NAME));
        self.path.with_file_name(format!("{name}.{suffix}"))
    }
}
