//! Account validation rules
//!
//! Two independent rules, both of which may fire on the same pass:
//! - `login`: required (non-blank after trimming), then at most
//!   [`MAX_FIELD_LENGTH`] characters
//! - `password`: only for [`AccountType::Local`](crate::types::AccountType::Local);
//!   required (non-null, non-blank after trimming), then at most
//!   [`MAX_FIELD_LENGTH`] characters
//!
//! Per field the required and length checks are mutually exclusive. The
//! length is measured on the untrimmed value.

use crate::error::{ValidationError, MAX_FIELD_LENGTH};
use crate::types::{Account, AccountErrors, AccountField};

/// Run every rule against `account` without touching it.
#[must_use]
pub fn check_account(account: &Account) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(err) = check_required_text(AccountField::Login, Some(account.login.as_str())) {
        errors.push(err);
    }

    if account.account_type.requires_password() {
        if let Some(err) = check_required_text(AccountField::Password, account.password.as_deref())
        {
            errors.push(err);
        }
    }

    errors
}

/// Validate `account`, replacing its `errors` mapping with the result.
///
/// Returns `true` iff no rule fired.
pub fn validate_account(account: &mut Account) -> bool {
    let errors = check_account(account);
    account.errors = AccountErrors::from_validation(&errors);
    errors.is_empty()
}

/// `None` and blank strings are the same required-field failure.
fn check_required_text(field: AccountField, value: Option<&str>) -> Option<ValidationError> {
    match value {
        None => Some(ValidationError::RequiredField { field }),
        Some(text) if text.trim().is_empty() => Some(ValidationError::RequiredField { field }),
        Some(text) if text.chars().count() > MAX_FIELD_LENGTH => Some(ValidationError::MaxLength {
            field,
            max: MAX_FIELD_LENGTH,
        }),
        Some(_) => None,
    }
}
