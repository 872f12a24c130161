//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::types::AccountField;

/// Maximum length (in characters) of a login or password
pub const MAX_FIELD_LENGTH: usize = 100;

/// Field-level validation failure
///
/// Never returned as `Err` from a registry operation. The `Display` output is
/// the human-readable message recorded on the account's `errors` mapping.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ValidationError {
    /// A required field is empty (or whitespace-only)
    #[error("{}", .field.required_message())]
    RequiredField { field: AccountField },

    /// A field exceeds the maximum length
    #[error("Maximum {max} characters")]
    MaxLength { field: AccountField, max: usize },
}

impl ValidationError {
    /// Field the error is attached to
    #[must_use]
    pub fn field(&self) -> AccountField {
        match self {
            Self::RequiredField { field } | Self::MaxLength { field, .. } => *field,
        }
    }
}

/// Registry error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum RegistryError {
    /// Account not found
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// Persisted state could not be parsed
    #[error("Corrupt persisted state: {0}")]
    CorruptState(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl RegistryError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::AccountNotFound(_) | Self::CorruptState(_) => true,
            Self::SerializationError(_) | Self::StorageError(_) => false,
        }
    }
}

/// Registry Result type alias
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_messages_differ_per_field() {
        let login = ValidationError::RequiredField {
            field: AccountField::Login,
        };
        let password = ValidationError::RequiredField {
            field: AccountField::Password,
        };
        assert_eq!(login.to_string(), "Login is required");
        assert_eq!(
            password.to_string(),
            "Password is required for local accounts"
        );
    }

    #[test]
    fn max_length_message_names_limit() {
        let err = ValidationError::MaxLength {
            field: AccountField::Login,
            max: MAX_FIELD_LENGTH,
        };
        assert_eq!(err.to_string(), "Maximum 100 characters");
        assert_eq!(err.field(), AccountField::Login);
    }

    #[test]
    fn expected_errors_classified() {
        assert!(RegistryError::AccountNotFound("x".to_string()).is_expected());
        assert!(RegistryError::CorruptState("bad".to_string()).is_expected());
        assert!(!RegistryError::StorageError("disk".to_string()).is_expected());
    }
}
