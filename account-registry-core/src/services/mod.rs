//! 业务逻辑服务层

mod account_registry;
pub mod validation;

pub use account_registry::{AccountLocation, AccountRegistry, LoadResult};

use std::sync::Arc;

use crate::error::{RegistryError, RegistryResult};
use crate::traits::KeyValueStore;
use crate::types::Account;

/// Key the saved collection is stored under unless configured otherwise
pub const DEFAULT_STORAGE_KEY: &str = "savedAccounts";

/// 存储上下文 - 持有持久化依赖
///
/// 平台层需要创建此上下文，并注入平台特定的存储实现。
#[derive(Clone)]
pub struct StorageContext {
    /// 键值存储
    store: Arc<dyn KeyValueStore>,
    /// 已保存账户所在的键
    storage_key: String,
}

impl StorageContext {
    /// 创建存储上下文
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, storage_key: impl Into<String>) -> Self {
        Self {
            store,
            storage_key: storage_key.into(),
        }
    }

    /// 使用默认键创建存储上下文
    #[must_use]
    pub fn with_default_key(store: Arc<dyn KeyValueStore>) -> Self {
        Self::new(store, DEFAULT_STORAGE_KEY)
    }

    /// 获取底层存储
    #[must_use]
    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    /// 获取存储键
    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// 读取已保存账户
    ///
    /// # Returns
    /// * `Ok(Some(accounts))` - 键存在且可解析
    /// * `Ok(None)` - 键不存在
    /// * `Err(CorruptState)` - 键存在但内容无法解析
    pub(crate) fn read_accounts(&self) -> RegistryResult<Option<Vec<Account>>> {
        let Some(raw) = self.store.get(&self.storage_key)? else {
            return Ok(None);
        };

        let accounts: Vec<Account> = serde_json::from_str(&raw)
            .map_err(|e| RegistryError::CorruptState(format!("{}: {e}", self.storage_key)))?;

        log::debug!(
            "Read {} saved accounts from key {:?}",
            accounts.len(),
            self.storage_key
        );
        Ok(Some(accounts))
    }

    /// 写入已保存账户（整体替换）
    pub(crate) fn write_accounts(&self, accounts: &[Account]) -> RegistryResult<()> {
        let json = serde_json::to_string(accounts)
            .map_err(|e| RegistryError::SerializationError(e.to_string()))?;

        self.store.set(&self.storage_key, &json)?;

        log::debug!(
            "Wrote {} saved accounts to key {:?}",
            accounts.len(),
            self.storage_key
        );
        Ok(())
    }
}
