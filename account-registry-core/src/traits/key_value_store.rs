//! Persistence medium abstract Trait

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{RegistryError, RegistryResult};

/// Synchronous string-keyed store
///
/// The registry keeps its whole saved collection under a single key.
///
/// Platform implementation:
/// - Any: `InMemoryStore`
/// - Desktop / CLI: `JsonFileStore` (JSON file on disk)
/// - Desktop: `KeyringStore` (system keychain, feature `keyring-store`)
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Returns
    /// * `Ok(Some(value))` - key present
    /// * `Ok(None)` - key absent
    fn get(&self, key: &str) -> RegistryResult<Option<String>>;

    /// Write `value` under `key`, replacing any prior value
    ///
    /// # Arguments
    /// * `key` - storage key
    /// * `value` - serialized payload
    fn set(&self, key: &str, value: &str) -> RegistryResult<()>;
}

/// In-memory store
///
/// Default implementation, available on all platforms. Clones share the same
/// underlying map.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one entry
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.write() {
            entries.insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> RegistryResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| RegistryError::StorageError("store lock poisoned during read".into()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> RegistryResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| RegistryError::StorageError("store lock poisoned during write".into()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
