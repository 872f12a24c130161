//! 账户相关类型定义

use serde::{Deserialize, Serialize};

use super::Label;
use crate::error::ValidationError;

/// 账户类型
///
/// 序列化字面量沿用前端写入的值（`"LDAP"` / `"Локальная"`）。
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AccountType {
    /// 目录服务认证（无需本地密码）
    #[default]
    #[serde(rename = "LDAP")]
    DirectoryBased,
    /// 本地认证（密码随记录保存）
    #[serde(rename = "Локальная")]
    Local,
}

impl AccountType {
    /// 是否需要本地密码
    #[must_use]
    pub const fn requires_password(self) -> bool {
        matches!(self, Self::Local)
    }
}

/// 可校验字段
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AccountField {
    Login,
    Password,
}

impl AccountField {
    /// 字段名（与 `errors` 映射中的键一致）
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Password => "password",
        }
    }

    /// 必填提示
    #[must_use]
    pub const fn required_message(self) -> &'static str {
        match self {
            Self::Login => "Login is required",
            Self::Password => "Password is required for local accounts",
        }
    }
}

/// 字段错误映射（空表示当前有效）
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountErrors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl AccountErrors {
    /// 由一次完整校验的结果构建（整体替换，不做合并）
    #[must_use]
    pub fn from_validation(errors: &[ValidationError]) -> Self {
        let mut result = Self::default();
        for err in errors {
            result.set(err.field(), err.to_string());
        }
        result
    }

    /// 是否没有任何错误
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.login.is_none() && self.password.is_none()
    }

    /// 错误数量
    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.login.is_some()) + usize::from(self.password.is_some())
    }

    /// 获取字段错误
    #[must_use]
    pub fn get(&self, field: AccountField) -> Option<&str> {
        match field {
            AccountField::Login => self.login.as_deref(),
            AccountField::Password => self.password.as_deref(),
        }
    }

    /// 设置字段错误
    pub fn set(&mut self, field: AccountField, message: String) {
        match field {
            AccountField::Login => self.login = Some(message),
            AccountField::Password => self.password = Some(message),
        }
    }
}

/// 账户信息
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// 账户 ID (UUID)，创建后不可变
    pub id: String,
    /// 标签（有序，允许重复）
    #[serde(default)]
    pub labels: Vec<Label>,
    /// 账户类型
    pub account_type: AccountType,
    /// 登录名
    pub login: String,
    /// 密码（仅本地账户必填）
    pub password: Option<String>,
    /// 最近一次校验的结果
    #[serde(default)]
    pub errors: AccountErrors,
}

impl Account {
    /// 创建空白草稿记录
    #[must_use]
    pub fn new_draft() -> Self {
        Self::with_id(uuid::Uuid::new_v4().to_string())
    }

    /// 使用指定 ID 创建空白记录
    #[must_use]
    pub fn with_id(id: String) -> Self {
        Self {
            id,
            labels: Vec::new(),
            account_type: AccountType::default(),
            login: String::new(),
            password: None,
            errors: AccountErrors::default(),
        }
    }

    /// 当前是否有效（基于最近一次校验）
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// 更新账户请求（支持部分更新）
///
/// `id` 与 `errors` 不可通过更新修改。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<Label>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,

    /// `Some(None)` 表示清空密码
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<Option<String>>,
}

impl AccountUpdate {
    /// 空更新
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn labels(mut self, labels: Vec<Label>) -> Self {
        self.labels = Some(labels);
        self
    }

    #[must_use]
    pub fn account_type(mut self, account_type: AccountType) -> Self {
        self.account_type = Some(account_type);
        self
    }

    #[must_use]
    pub fn login(mut self, login: impl Into<String>) -> Self {
        self.login = Some(login.into());
        self
    }

    #[must_use]
    pub fn password(mut self, password: Option<String>) -> Self {
        self.password = Some(password);
        self
    }

    /// 是否没有任何待更新字段
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_none()
            && self.account_type.is_none()
            && self.login.is_none()
            && self.password.is_none()
    }

    /// 应用更新到现有账户（浅合并：提供的字段覆盖，未提供的保持原值）
    pub fn apply_to(&self, account: &mut Account) {
        if let Some(ref labels) = self.labels {
            account.labels.clone_from(labels);
        }
        if let Some(account_type) = self.account_type {
            account.account_type = account_type;
        }
        if let Some(ref login) = self.login {
            account.login.clone_from(login);
        }
        if let Some(ref password) = self.password {
            account.password.clone_from(password);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_draft_has_defaults() {
        let account = Account::new_draft();
        assert!(!account.id.is_empty());
        assert!(account.labels.is_empty());
        assert_eq!(account.account_type, AccountType::DirectoryBased);
        assert_eq!(account.login, "");
        assert_eq!(account.password, None);
        assert!(account.errors.is_empty());
    }

    #[test]
    fn new_drafts_get_distinct_ids() {
        assert_ne!(Account::new_draft().id, Account::new_draft().id);
    }

    #[test]
    fn account_type_wire_literals() {
        assert_eq!(
            serde_json::to_string(&AccountType::DirectoryBased).unwrap(),
            "\"LDAP\""
        );
        assert_eq!(
            serde_json::to_string(&AccountType::Local).unwrap(),
            "\"Локальная\""
        );
    }

    #[test]
    fn account_serializes_in_storage_shape() {
        let mut account = Account::with_id("abc".to_string());
        account.login = "bob".to_string();
        account.labels = vec![Label::new("dev")];

        let value = serde_json::to_value(&account).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "abc",
                "labels": [{ "text": "dev" }],
                "accountType": "LDAP",
                "login": "bob",
                "password": null,
                "errors": {}
            })
        );
    }

    #[test]
    fn account_deserializes_with_field_errors() {
        let json = r#"{
            "id": "x1",
            "labels": [],
            "accountType": "Локальная",
            "login": "",
            "password": "",
            "errors": { "login": "Login is required" }
        }"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.account_type, AccountType::Local);
        assert_eq!(account.password, Some(String::new()));
        assert_eq!(
            account.errors.get(AccountField::Login),
            Some("Login is required")
        );
        assert_eq!(account.errors.get(AccountField::Password), None);
        assert!(!account.is_valid());
    }

    #[test]
    fn apply_to_partial_update() {
        let mut account = Account::with_id("a".to_string());
        account.login = "old".to_string();
        account.password = Some("pw".to_string());

        AccountUpdate::new()
            .account_type(AccountType::Local)
            .apply_to(&mut account);

        assert_eq!(account.account_type, AccountType::Local);
        // 未更新的字段保持不变
        assert_eq!(account.login, "old");
        assert_eq!(account.password, Some("pw".to_string()));
    }

    #[test]
    fn apply_to_clears_password() {
        let mut account = Account::with_id("a".to_string());
        account.password = Some("pw".to_string());

        AccountUpdate::new().password(None).apply_to(&mut account);

        assert_eq!(account.password, None);
    }

    #[test]
    fn errors_from_validation_replace_wholesale() {
        let errors = AccountErrors::from_validation(&[ValidationError::RequiredField {
            field: AccountField::Password,
        }]);
        assert_eq!(errors.len(), 1);
        assert!(errors.login.is_none());
        assert_eq!(
            errors.password.as_deref(),
            Some("Password is required for local accounts")
        );
    }

    #[test]
    fn update_is_empty() {
        assert!(AccountUpdate::new().is_empty());
        assert!(!AccountUpdate::new().login("x").is_empty());
    }
}
