//! Account Registry Core Library
//!
//! Provides the state management behind an account-list editor:
//! - Draft and saved account collections (Account Registry)
//! - Login/password validation rules
//! - Label string codec
//!
//! This library is designed to be platform-independent, abstracting the storage layer through traits.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used, clippy::panic))]

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{RegistryError, RegistryResult, ValidationError, MAX_FIELD_LENGTH};
pub use services::validation::{check_account, validate_account};
pub use services::{AccountLocation, AccountRegistry, LoadResult, StorageContext};
pub use traits::{InMemoryStore, KeyValueStore};
pub use utils::{format_labels, parse_labels};
