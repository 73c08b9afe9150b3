use crate::{ConfigError, ConfigErrorResult, DEFAULT_BACKUP_CORRUPTED, DEFAULT_USERS_FILENAME};

use std::path::Path;

use serde::Deserialize;

/// Where the credential list lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Backing file, relative to the config directory
    pub users_file: String,
    /// Keep a timestamped copy of an unreadable users file before overwriting it
    pub backup_corrupted: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            users_file: String::from(DEFAULT_USERS_FILENAME),
            backup_corrupted: DEFAULT_BACKUP_CORRUPTED,
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.users_file.trim().is_empty() {
            return Err(ConfigError::storage("storage.users_file cannot be empty"));
        }

        // The backing file is application-private; keep it inside the config dir
        let path = Path::new(&self.users_file);
        if path.is_absolute() || self.users_file.contains("..") {
            return Err(ConfigError::storage(
                "storage.users_file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
