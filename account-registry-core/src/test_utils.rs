//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::error::{RegistryError, RegistryResult};
use crate::services::{AccountRegistry, StorageContext, DEFAULT_STORAGE_KEY};
use crate::traits::KeyValueStore;
use crate::types::Account;

// ===== MockKeyValueStore =====

pub struct MockKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
    /// 成功写入次数
    writes: AtomicUsize,
    /// 如果 Some，get 时返回此错误
    get_error: RwLock<Option<String>>,
    /// 如果 Some，set 时返回此错误（用于测试写入失败路径）
    set_error: RwLock<Option<String>>,
}

impl MockKeyValueStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            writes: AtomicUsize::new(0),
            get_error: RwLock::new(None),
            set_error: RwLock::new(None),
        }
    }

    pub fn set_get_error(&self, err: Option<String>) {
        *self.get_error.write().unwrap() = err;
    }

    pub fn set_set_error(&self, err: Option<String>) {
        *self.set_error.write().unwrap() = err;
    }

    /// 直接写入原始值（不计入写入次数）
    pub fn seed(&self, key: &str, value: &str) {
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl KeyValueStore for MockKeyValueStore {
    fn get(&self, key: &str) -> RegistryResult<Option<String>> {
        if let Some(ref msg) = *self.get_error.read().unwrap() {
            return Err(RegistryError::StorageError(msg.clone()));
        }
        Ok(self.entries.read().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> RegistryResult<()> {
        if let Some(ref msg) = *self.set_error.read().unwrap() {
            return Err(RegistryError::StorageError(msg.clone()));
        }
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ===== 工厂方法 =====

/// 创建测试用 `AccountRegistry`（空存储，默认键）
pub fn create_test_registry() -> (AccountRegistry, Arc<MockKeyValueStore>) {
    let store = Arc::new(MockKeyValueStore::new());
    let ctx = StorageContext::with_default_key(store.clone());
    (AccountRegistry::new(ctx), store)
}

/// 读取默认键下已持久化的账户
pub fn stored_accounts(store: &MockKeyValueStore) -> Vec<Account> {
    let raw = store
        .get(DEFAULT_STORAGE_KEY)
        .unwrap()
        .expect("nothing persisted under the default key");
    serde_json::from_str(&raw).unwrap()
}
