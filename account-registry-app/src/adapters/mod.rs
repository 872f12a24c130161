//! Platform-agnostic storage adapters.

mod json_file_store;

#[cfg(feature = "keyring-store")]
mod keyring_store;

pub use json_file_store::JsonFileStore;

#[cfg(feature = "keyring-store")]
pub use keyring_store::KeyringStore;
