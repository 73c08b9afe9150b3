use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// Menu source. The embedded menu is used unless `path` is set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog JSON, relative to the config directory
    pub path: Option<String>,
}

impl CatalogConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(ref path) = self.path
            && path.trim().is_empty()
        {
            return Err(ConfigError::catalog("catalog.path cannot be empty when set"));
        }
        Ok(())
    }
}
