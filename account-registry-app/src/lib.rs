//! Platform-agnostic application bootstrap for the account list editor.
//!
//! Provides `AppState` (the loaded registry plus its configuration) and
//! `AppStateBuilder` (adapter injection).

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used, clippy::panic))]

pub mod adapters;
pub mod config;

use std::sync::Arc;

use account_registry_core::error::RegistryResult;
use account_registry_core::services::{AccountRegistry, LoadResult, StorageContext};
use account_registry_core::traits::KeyValueStore;

use crate::adapters::JsonFileStore;
use crate::config::AppConfig;

/// Platform-agnostic application state.
///
/// Every frontend constructs this once at startup via `AppStateBuilder`.
pub struct AppState {
    /// Account registry, already loaded from the store
    pub registry: AccountRegistry,
    /// Outcome of the initial load
    pub load_result: LoadResult,
    /// Configuration the state was built with
    pub config: AppConfig,
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Optional
/// - `store` — defaults to `JsonFileStore` at `config.store_path()`
/// - `config` — defaults to `AppConfig::resolve()`
pub struct AppStateBuilder {
    store: Option<Arc<dyn KeyValueStore>>,
    config: Option<AppConfig>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: None,
            config: None,
        }
    }

    #[must_use]
    pub fn store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    #[must_use]
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the `AppState` and run the initial load.
    ///
    /// # Errors
    /// Returns the store's error if it cannot be read. Unreadable stored
    /// content is not an error; it is reported in `load_result.warning`.
    pub fn build(self) -> RegistryResult<AppState> {
        let config = self.config.unwrap_or_else(AppConfig::resolve);
        let store = self.store.unwrap_or_else(|| {
            let path = config.store_path();
            log::info!("Using account store at {}", path.display());
            Arc::new(JsonFileStore::new(path))
        });

        let ctx = StorageContext::new(store, config.storage_key.clone());
        let (registry, load_result) = AccountRegistry::open(ctx).inspect_err(|e| {
            log::error!("Failed to open account registry: {e}");
        })?;

        match load_result.warning {
            Some(ref warning) => log::warn!("Account registry started empty: {warning}"),
            None => log::info!(
                "Account registry ready: {} saved accounts",
                load_result.loaded_count
            ),
        }

        Ok(AppState {
            registry,
            load_result,
            config,
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
