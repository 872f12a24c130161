//! Application configuration.
//!
//! Resolution order for each setting: environment variable → platform default.

use std::path::PathBuf;

use account_registry_core::services::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};

/// Overrides the directory holding the store file.
pub const DATA_DIR_ENV: &str = "ACCOUNT_REGISTRY_DATA_DIR";
/// Overrides the key the saved accounts are stored under.
pub const STORAGE_KEY_ENV: &str = "ACCOUNT_REGISTRY_STORAGE_KEY";

pub const DEFAULT_STORE_FILE: &str = "accounts.json";
const APP_DIR_NAME: &str = "account-registry";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Directory holding the store file
    pub data_dir: PathBuf,
    /// Store file name inside `data_dir`
    pub store_file: String,
    /// Key the saved accounts are stored under
    pub storage_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            store_file: DEFAULT_STORE_FILE.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl AppConfig {
    /// Build config from the process environment, falling back to defaults.
    pub fn resolve() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build config from an arbitrary variable lookup. Empty values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();
        if let Some(dir) = var(DATA_DIR_ENV) {
            log::info!("Data directory overridden by {DATA_DIR_ENV}");
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(key) = var(STORAGE_KEY_ENV) {
            log::info!("Storage key overridden by {STORAGE_KEY_ENV}");
            config.storage_key = key;
        }
        config
    }

    /// Full path of the store file.
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(&self.store_file)
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}
