mod auth_config;
mod catalog_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;
mod validation_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use catalog_config::CatalogConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;
pub use validation_config::ValidationConfig;

const CONFIG_DIR_ENV: &str = "WH_CONFIG_DIR";
const DEFAULT_CONFIG_DIRECTORY: &str = ".washoku";
const CONFIG_FILENAME: &str = "config.toml";
const DEFAULT_USERS_FILENAME: &str = "users.json";
const DEFAULT_BACKUP_CORRUPTED: bool = true;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
