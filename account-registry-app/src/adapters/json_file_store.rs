//! JSON file key-value store.
//!
//! Keeps every key in one JSON object on disk (`{"savedAccounts": "[...]"}`),
//! with an in-memory cache filled on first access. Each `set` rewrites the
//! whole file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use account_registry_core::error::{RegistryError, RegistryResult};
use account_registry_core::traits::KeyValueStore;

type Entries = BTreeMap<String, String>;

/// JSON file backed store.
pub struct JsonFileStore {
    path: PathBuf,
    /// 内存缓存
    cache: RwLock<Option<Entries>>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RwLock::new(None),
        }
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(&self) -> RegistryResult<Entries> {
        if !self.path.exists() {
            return Ok(Entries::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            RegistryError::StorageError(format!("read {}: {e}", self.path.display()))
        })?;

        if content.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&content)
            .map_err(|e| RegistryError::CorruptState(format!("{}: {e}", self.path.display())))
    }

    fn write_file(&self, entries: &Entries) -> RegistryResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    RegistryError::StorageError(format!("create {}: {e}", parent.display()))
                })?;
            }
        }

        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| RegistryError::SerializationError(e.to_string()))?;

        fs::write(&self.path, content).map_err(|e| {
            RegistryError::StorageError(format!("write {}: {e}", self.path.display()))
        })
    }

    fn poisoned() -> RegistryError {
        RegistryError::StorageError("store cache lock poisoned".to_string())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> RegistryResult<Option<String>> {
        {
            let cache = self.cache.read().map_err(|_| Self::poisoned())?;
            if let Some(ref entries) = *cache {
                return Ok(entries.get(key).cloned());
            }
        }

        let mut cache = self.cache.write().map_err(|_| Self::poisoned())?;
        if let Some(ref entries) = *cache {
            return Ok(entries.get(key).cloned());
        }

        let entries = self.read_file()?;
        log::debug!(
            "Loaded {} entries from {}",
            entries.len(),
            self.path.display()
        );
        let value = entries.get(key).cloned();
        *cache = Some(entries);
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> RegistryResult<()> {
        let mut cache = self.cache.write().map_err(|_| Self::poisoned())?;

        let mut entries = match cache.take() {
            Some(entries) => entries,
            None => match self.read_file() {
                Ok(entries) => entries,
                Err(e @ RegistryError::CorruptState(_)) => {
                    log::warn!("Overwriting unreadable store file: {e}");
                    Entries::new()
                }
                Err(e) => return Err(e),
            },
        };

        entries.insert(key.to_string(), value.to_string());

        // 写入失败时缓存保持未加载状态，下次访问重新读取文件
        self.write_file(&entries)?;
        log::debug!("Saved key {key:?} to {}", self.path.display());

        *cache = Some(entries);
        Ok(())
    }
}
