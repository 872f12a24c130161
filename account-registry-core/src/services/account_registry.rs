//! Account registry service
//!
//! Owns the draft and saved account collections. Drafts are created by
//! [`AccountRegistry::add_account`] and only reach the saved collection (and
//! the store) through [`AccountRegistry::validate_and_save_account`]. Every
//! operation that changes the saved collection writes it through to the store
//! before returning.
//!
//! In-memory state is authoritative: when a write-through fails the mutation
//! is kept, the error is returned, and the next successful write brings the
//! store back in line.

use std::collections::HashSet;

use crate::error::{RegistryError, RegistryResult};
use crate::services::validation;
use crate::services::StorageContext;
use crate::types::{Account, AccountUpdate};

/// Which collection currently holds an account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountLocation {
    Draft,
    Saved,
}

/// Initial load results
#[derive(Debug)]
pub struct LoadResult {
    /// Number of saved accounts loaded from the store
    pub loaded_count: usize,
    /// Set when the stored state was unreadable and the registry started empty
    pub warning: Option<RegistryError>,
}

/// Account registry
pub struct AccountRegistry {
    ctx: StorageContext,
    /// Newest first
    draft_accounts: Vec<Account>,
    saved_accounts: Vec<Account>,
}

impl AccountRegistry {
    /// Create an empty registry without touching the store
    #[must_use]
    pub fn new(ctx: StorageContext) -> Self {
        Self {
            ctx,
            draft_accounts: Vec::new(),
            saved_accounts: Vec::new(),
        }
    }

    /// Create a registry and load the saved collection from the store
    ///
    /// Corrupt stored state does not fail the call: the registry starts empty
    /// and the problem is reported in [`LoadResult::warning`].
    pub fn open(ctx: StorageContext) -> RegistryResult<(Self, LoadResult)> {
        let mut registry = Self::new(ctx);

        let result = match registry.load_from_storage() {
            Ok(loaded_count) => LoadResult {
                loaded_count,
                warning: None,
            },
            Err(e @ RegistryError::CorruptState(_)) => {
                log::warn!("Ignoring unreadable saved accounts, starting empty: {e}");
                LoadResult {
                    loaded_count: 0,
                    warning: Some(e),
                }
            }
            Err(e) => return Err(e),
        };

        Ok((registry, result))
    }

    /// Storage context in use
    #[must_use]
    pub fn context(&self) -> &StorageContext {
        &self.ctx
    }

    // ===== Read operations =====

    /// All accounts: drafts first, then saved
    pub fn accounts(&self) -> impl Iterator<Item = &Account> + '_ {
        self.draft_accounts.iter().chain(self.saved_accounts.iter())
    }

    /// Drafts, newest first
    #[must_use]
    pub fn draft_accounts(&self) -> &[Account] {
        &self.draft_accounts
    }

    /// Saved accounts, in commit order
    #[must_use]
    pub fn saved_accounts(&self) -> &[Account] {
        &self.saved_accounts
    }

    /// Get account based on ID (drafts are searched first)
    #[must_use]
    pub fn find_account(&self, id: &str) -> Option<&Account> {
        self.accounts().find(|a| a.id == id)
    }

    /// Which collection holds `id`
    #[must_use]
    pub fn locate(&self, id: &str) -> Option<AccountLocation> {
        if self.draft_accounts.iter().any(|a| a.id == id) {
            Some(AccountLocation::Draft)
        } else if self.saved_accounts.iter().any(|a| a.id == id) {
            Some(AccountLocation::Saved)
        } else {
            None
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.draft_accounts.len() + self.saved_accounts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.draft_accounts.is_empty() && self.saved_accounts.is_empty()
    }

    // ===== Life cycle operations =====

    /// Create a blank draft at the front of the draft list
    ///
    /// Not validated and not persisted. Returns the new account ID.
    pub fn add_account(&mut self) -> String {
        let account = Account::new_draft();
        let id = account.id.clone();
        self.draft_accounts.insert(0, account);
        log::debug!("Added draft account {id}");
        id
    }

    /// Remove an account from whichever collection holds it
    ///
    /// Unknown IDs are a no-op. The store is only written when the saved
    /// collection changed. Returns whether anything was removed.
    pub fn remove_account(&mut self, id: &str) -> RegistryResult<bool> {
        let drafts_before = self.draft_accounts.len();
        self.draft_accounts.retain(|a| a.id != id);
        let removed_draft = self.draft_accounts.len() != drafts_before;

        let saved_before = self.saved_accounts.len();
        self.saved_accounts.retain(|a| a.id != id);
        let removed_saved = self.saved_accounts.len() != saved_before;

        if removed_saved {
            self.save_to_storage()?;
            log::info!("Removed saved account {id}");
        } else if removed_draft {
            log::debug!("Removed draft account {id}");
        }

        Ok(removed_draft || removed_saved)
    }

    /// Remove every account and persist the empty saved collection
    pub fn remove_all_accounts(&mut self) -> RegistryResult<()> {
        let count = self.len();
        self.draft_accounts.clear();
        self.saved_accounts.clear();
        self.save_to_storage()?;
        log::info!("Removed all {count} accounts");
        Ok(())
    }

    /// Update account
    ///
    /// Provided fields replace the current values, omitted fields are kept.
    /// The account is re-validated afterwards so its `errors` track the new
    /// values. Saved accounts are written through to the store; drafts still
    /// need [`Self::validate_and_save_account`]. Returns the validity after
    /// the update.
    pub fn update_account(&mut self, id: &str, update: &AccountUpdate) -> RegistryResult<bool> {
        let (account, location) = self.find_account_mut(id)?;

        update.apply_to(account);
        let is_valid = validation::validate_account(account);

        if location == AccountLocation::Saved {
            self.save_to_storage()?;
        }

        Ok(is_valid)
    }

    /// Validate an account in place without moving or persisting it
    pub fn validate_account(&mut self, id: &str) -> RegistryResult<bool> {
        let (account, _) = self.find_account_mut(id)?;
        Ok(validation::validate_account(account))
    }

    /// Validate an account and, if valid, commit it to the saved collection
    ///
    /// A valid draft leaves the draft list and a snapshot of it is appended to
    /// the saved list (never twice for the same ID). The saved collection is
    /// then persisted. An invalid account stays where it is and nothing is
    /// written.
    pub fn validate_and_save_account(&mut self, id: &str) -> RegistryResult<bool> {
        let (account, location) = self.find_account_mut(id)?;

        if !validation::validate_account(account) {
            log::debug!(
                "Account {id} failed validation with {} error(s)",
                account.errors.len()
            );
            return Ok(false);
        }

        if location == AccountLocation::Draft {
            let Some(pos) = self.draft_accounts.iter().position(|a| a.id == id) else {
                return Err(RegistryError::AccountNotFound(id.to_string()));
            };
            let account = self.draft_accounts.remove(pos);

            if self.saved_accounts.iter().any(|a| a.id == id) {
                log::warn!("Account {id} already saved, dropping duplicate draft");
            } else {
                self.saved_accounts.push(account);
                log::info!("Committed account {id}");
            }
        }

        self.save_to_storage()?;
        Ok(true)
    }

    // ===== Persistence =====

    /// Replace the saved collection with the one in the store
    ///
    /// A missing key yields an empty collection. Unparsable content also
    /// leaves the collection empty and fails with `CorruptState`. Drafts are
    /// kept unless one shares an ID with a loaded account. Returns the number
    /// of saved accounts loaded.
    pub fn load_from_storage(&mut self) -> RegistryResult<usize> {
        let loaded = match self.ctx.read_accounts() {
            Ok(loaded) => loaded.unwrap_or_default(),
            Err(e @ RegistryError::CorruptState(_)) => {
                self.saved_accounts.clear();
                return Err(e);
            }
            Err(e) => return Err(e),
        };

        let mut seen = HashSet::new();
        let mut saved = Vec::with_capacity(loaded.len());
        for account in loaded {
            if seen.insert(account.id.clone()) {
                saved.push(account);
            } else {
                log::warn!("Skipping duplicate stored account {}", account.id);
            }
        }

        self.draft_accounts.retain(|a| {
            let collides = seen.contains(&a.id);
            if collides {
                log::warn!("Dropping draft {} shadowed by a stored account", a.id);
            }
            !collides
        });

        self.saved_accounts = saved;
        log::info!(
            "Loaded {} saved accounts from store",
            self.saved_accounts.len()
        );
        Ok(self.saved_accounts.len())
    }

    /// Write the saved collection to the store, replacing any prior value
    pub fn save_to_storage(&self) -> RegistryResult<()> {
        self.ctx.write_accounts(&self.saved_accounts).inspect_err(|e| {
            log::error!("Failed to persist saved accounts: {e}");
        })
    }

    /// First match wins: drafts, then saved
    fn find_account_mut(&mut self, id: &str) -> RegistryResult<(&mut Account, AccountLocation)> {
        if let Some(account) = self.draft_accounts.iter_mut().find(|a| a.id == id) {
            return Ok((account, AccountLocation::Draft));
        }
        self.saved_accounts
            .iter_mut()
            .find(|a| a.id == id)
            .map(|account| (account, AccountLocation::Saved))
            .ok_or_else(|| RegistryError::AccountNotFound(id.to_string()))
    }
}
