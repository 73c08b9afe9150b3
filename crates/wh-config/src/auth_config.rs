use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_LOGIN_DELAY_MS: u64 = 800;
pub const MAX_LOGIN_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Pause before a login attempt is checked
    pub login_delay_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: DEFAULT_LOGIN_DELAY_MS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.login_delay_ms > MAX_LOGIN_DELAY_MS {
            return Err(ConfigError::auth(format!(
                "auth.login_delay_ms must be 0-{}, got {}",
                MAX_LOGIN_DELAY_MS, self.login_delay_ms
            )));
        }
        Ok(())
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }
}
