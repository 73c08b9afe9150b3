
use crate::AppContext;

use std::env;
use std::path::Path;

use tempfile::TempDir;
use wh_config::Config;
use wh_core::User;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Temp config directory with WH_CONFIG_DIR pointing at it
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("WH_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}

/// Defaults with the login delay turned off
pub(crate) fn test_config() -> Config {
    let mut config = Config::default();
    config.auth.login_delay_ms = 0;
    config
}

pub(crate) async fn test_context() -> AppContext {
    AppContext::from_config(test_config()).await.unwrap()
}

pub(crate) fn users_on_disk(config_dir: &Path) -> Vec<User> {
    let contents = std::fs::read_to_string(config_dir.join("users.json")).unwrap();
    serde_json::from_str(&contents).unwrap()
}
