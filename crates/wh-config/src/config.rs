use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, CatalogConfig, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIRECTORY, LoggingConfig, StorageConfig, ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub auth: AuthConfig,
    pub validation: ValidationConfig,
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for WH_CONFIG_DIR env var, else use ./.washoku/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply WH_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: WH_CONFIG_DIR env var > ./.washoku/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRECTORY))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.storage.validate()?;
        self.auth.validate()?;
        self.validation.validate()?;
        self.catalog.validate()?;
        self.logging.validate()?;

        Ok(())
    }

    /// Absolute path to the users backing file.
    pub fn users_file_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.storage.users_file))
    }

    /// Absolute path to a catalog override, if one is configured.
    pub fn catalog_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.catalog.path {
            Some(ref path) => Ok(Some(Self::config_dir()?.join(path))),
            None => Ok(None),
        }
    }

    /// Absolute path to the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(filename),
            )),
            None => Ok(None),
        }
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  storage: {} (backup corrupted: {})",
            self.storage.users_file, self.storage.backup_corrupted
        );
        info!("  auth: login delay={}ms", self.auth.login_delay_ms);
        info!(
            "  validation: password={}-{}, username<={}",
            self.validation.min_password_length,
            self.validation.max_password_length,
            self.validation.max_username_length
        );
        info!(
            "  catalog: {}",
            self.catalog.path.as_deref().unwrap_or("embedded")
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Storage
        Self::apply_env_string("WH_USERS_FILE", &mut self.storage.users_file);
        Self::apply_env_bool("WH_BACKUP_CORRUPTED", &mut self.storage.backup_corrupted);

        // Auth
        Self::apply_env_parse("WH_LOGIN_DELAY_MS", &mut self.auth.login_delay_ms);

        // Validation
        Self::apply_env_parse(
            "WH_MIN_PASSWORD_LENGTH",
            &mut self.validation.min_password_length,
        );
        Self::apply_env_parse(
            "WH_MAX_PASSWORD_LENGTH",
            &mut self.validation.max_password_length,
        );
        Self::apply_env_parse(
            "WH_MAX_USERNAME_LENGTH",
            &mut self.validation.max_username_length,
        );

        // Catalog
        Self::apply_env_option_string("WH_CATALOG_PATH", &mut self.catalog.path);

        // Logging
        Self::apply_env_parse("WH_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("WH_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("WH_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
