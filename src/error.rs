//! Custom error types for bankcli
//!
//! This module defines the error hierarchy for the ledger using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Money;

/// The main error type for bankcli operations
#[derive(Error, Debug)]
pub enum BankError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Rejected input (bad amounts, self-transfers, empty ids)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Withdrawal or transfer would overdraw the account
    #[error("Insufficient funds in account '{account}': need {needed}, have {available}")]
    InsufficientFunds {
        account: String,
        needed: Money,
        available: Money,
    },

    /// Every `ACC-####` identifier is already taken
    #[error("No free account identifiers left after {attempts} attempts")]
    IdSpaceExhausted { attempts: usize },

    /// Snapshot file could not be read or has the wrong shape
    #[error("Snapshot is corrupt: {0}")]
    PersistenceCorrupt(String),

    /// Snapshot could not be written to disk
    #[error("Failed to save snapshot: {0}")]
    PersistenceWriteFailed(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BankError {
    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Create a validation error for a balance that would leave the i64 range
    pub fn balance_overflow(account: &str, amount: Money) -> Self {
        Self::Validation(format!(
            "Amount {} would overflow the balance of account {}",
            amount, account
        ))
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for BankError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BankError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for bankcli operations
pub type BankResult<T> = Result<T, BankError>;
