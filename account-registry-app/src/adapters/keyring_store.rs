//! Keyring-based key-value store.
//!
//! Uses the system keychain (macOS Keychain, Windows Credential Manager,
//! Linux Secret Service) via the `keyring` crate. Each key becomes one
//! keychain entry under a shared service name, holding the JSON payload as
//! its secret.

use keyring::Entry;

use account_registry_core::error::{RegistryError, RegistryResult};
use account_registry_core::traits::KeyValueStore;

/// Default keychain service name.
pub const DEFAULT_SERVICE_NAME: &str = "account-registry";

/// Keyring-based store.
pub struct KeyringStore {
    service: String,
}

impl KeyringStore {
    pub fn new() -> Self {
        Self::with_service(DEFAULT_SERVICE_NAME)
    }

    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(&self, key: &str) -> RegistryResult<Entry> {
        Entry::new(&self.service, key).map_err(|e| {
            log::error!("keyring Entry::new failed for key={key:?}: {e}");
            RegistryError::StorageError(e.to_string())
        })
    }
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for KeyringStore {
    fn get(&self, key: &str) -> RegistryResult<Option<String>> {
        log::debug!("keyring GET: service={:?} key={key:?}", self.service);
        match self.entry(key)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => {
                log::warn!("keyring get_password failed for key={key:?}: {e}");
                Err(RegistryError::StorageError(e.to_string()))
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> RegistryResult<()> {
        log::debug!("keyring SET: service={:?} key={key:?}", self.service);
        self.entry(key)?.set_password(value).map_err(|e| {
            log::error!("keyring set_password failed for key={key:?}: {e}");
            RegistryError::StorageError(e.to_string())
        })
    }
}
