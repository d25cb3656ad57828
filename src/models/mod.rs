//! Core data models for bankcli
//!
//! Accounts, their transaction logs, identifiers and the money type.

pub mod account;
pub mod ids;
pub mod ledger;
pub mod money;
pub mod transaction;

pub use account::Account;
pub use ids::{AccountId, ACCOUNT_ID_PREFIX, ACCOUNT_ID_RANGE};
pub use ledger::Ledger;
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionKind, TransactionLog};
