//! 类型定义模块

mod account;
mod label;

pub use account::{Account, AccountErrors, AccountField, AccountType, AccountUpdate};
pub use label::Label;
