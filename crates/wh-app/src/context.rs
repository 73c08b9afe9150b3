//! Startup wiring: one explicitly constructed context handed to every screen.

use crate::error::{AppError, Result as AppErrorResult};
use crate::logger;

use std::path::Path;

use log::{error, info};
use wh_auth::{CredentialStore, UserFile};
use wh_config::Config;
use wh_core::MenuCatalog;

/// Everything the screens share: configuration, the credential store (with
/// its session) and the menu catalog.
#[derive(Debug)]
pub struct AppContext {
    config: Config,
    store: CredentialStore,
    catalog: MenuCatalog,
}

impl AppContext {
    /// Full startup: load and validate config, start logging, then build the
    /// context.
    pub async fn bootstrap() -> AppErrorResult<Self> {
        let config = Config::load()?;
        config.validate()?;

        let log_file_path = match config.log_file_path()? {
            Some(path) => {
                if let Some(log_dir) = path.parent() {
                    std::fs::create_dir_all(log_dir)
                        .map_err(|e| AppError::log_dir(log_dir.to_path_buf(), e))?;
                }
                Some(path)
            }
            None => None,
        };

        // Initialize logger (before any other logging)
        logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

        info!("Starting wh-app v{}", env!("CARGO_PKG_VERSION"));
        config.log_summary();

        Self::from_config(config).await
    }

    /// Builds the context from an already loaded config. Activates the
    /// credential store, so the backing file is resolved on return.
    pub async fn from_config(config: Config) -> AppErrorResult<Self> {
        let users_file = UserFile::new(config.users_file_path()?)
            .with_backup_corrupted(config.storage.backup_corrupted);
        let mut store = CredentialStore::new(users_file);
        let origin = store.activate().await;
        info!("Credential store ready: {} users ({origin:?})", store.len());

        let catalog = match config.catalog_path()? {
            Some(path) => Self::load_catalog_override(&path).await?,
            None => MenuCatalog::embedded()?,
        };
        info!("Menu catalog ready: {} items", catalog.item_count());

        Ok(Self {
            config,
            store,
            catalog,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut CredentialStore {
        &mut self.store
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    /// An unreadable or invalid override falls back to the embedded menu.
    async fn load_catalog_override(path: &Path) -> AppErrorResult<MenuCatalog> {
        let loaded = match tokio::fs::read_to_string(path).await {
            Ok(contents) => MenuCatalog::from_json(&contents).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        match loaded {
            Ok(catalog) => {
                info!("Loaded menu catalog from {}", path.display());
                Ok(catalog)
            }
            Err(message) => {
                error!(
                    "Failed to load menu catalog from {}: {message}; using embedded menu",
                    path.display()
                );
                Ok(MenuCatalog::embedded()?)
            }
        }
    }
}
