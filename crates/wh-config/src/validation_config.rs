use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Validation constraints
pub const MIN_PASSWORD_LENGTH: usize = 1;
pub const MAX_PASSWORD_LENGTH: usize = 256;
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 3;
pub const DEFAULT_MAX_PASSWORD_LENGTH: usize = 50;

pub const MIN_USERNAME_LENGTH: usize = 1;
pub const MAX_USERNAME_LENGTH: usize = 64;
pub const DEFAULT_MAX_USERNAME_LENGTH: usize = 20;

/// Field limits applied to the login and registration forms.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Shortest password accepted at registration
    pub min_password_length: usize,
    /// Longest password accepted at registration
    pub max_password_length: usize,
    /// Longest username accepted at registration
    pub max_username_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            max_password_length: DEFAULT_MAX_PASSWORD_LENGTH,
            max_username_length: DEFAULT_MAX_USERNAME_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.min_password_length < MIN_PASSWORD_LENGTH
            || self.min_password_length > MAX_PASSWORD_LENGTH
        {
            return Err(ConfigError::config(format!(
                "validation.min_password_length must be {}-{}, got {}",
                MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH, self.min_password_length
            )));
        }

        if self.max_password_length < self.min_password_length
            || self.max_password_length > MAX_PASSWORD_LENGTH
        {
            return Err(ConfigError::config(format!(
                "validation.max_password_length must be {}-{}, got {}",
                self.min_password_length, MAX_PASSWORD_LENGTH, self.max_password_length
            )));
        }

        if self.max_username_length < MIN_USERNAME_LENGTH
            || self.max_username_length > MAX_USERNAME_LENGTH
        {
            return Err(ConfigError::config(format!(
                "validation.max_username_length must be {}-{}, got {}",
                MIN_USERNAME_LENGTH, MAX_USERNAME_LENGTH, self.max_username_length
            )));
        }

        Ok(())
    }
}
