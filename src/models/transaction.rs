//! Transaction model
//!
//! A transaction is an immutable record of one balance-affecting event on an
//! account. Records live in the account's [`TransactionLog`], which only
//! supports appending.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Kind of balance-affecting event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    TransferOut,
    TransferIn,
}

impl TransactionKind {
    /// Returns true if this kind adds money to the account
    pub fn is_inflow(&self) -> bool {
        matches!(self, Self::Deposit | Self::TransferIn)
    }

    /// The amount's effect on the balance (negated for outflows)
    pub fn signed(&self, amount: Money) -> Money {
        if self.is_inflow() {
            amount
        } else {
            -amount
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Deposit => "DEPOSIT",
            Self::Withdrawal => "WITHDRAWAL",
            Self::TransferOut => "TRANSFER_OUT",
            Self::TransferIn => "TRANSFER_IN",
        };
        f.pad(label)
    }
}

/// A single entry in an account's history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Amount as supplied by the caller (always unsigned in intent)
    pub amount: Money,

    pub timestamp: DateTime<Utc>,

    /// Account balance immediately after this event was applied
    pub balance_after: Money,

    #[serde(default)]
    pub description: String,
}

impl Transaction {
    pub fn new(
        kind: TransactionKind,
        amount: Money,
        balance_after: Money,
        description: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            kind,
            amount,
            timestamp,
            balance_after,
            description: description.into(),
        }
    }
}

/// Append-only, chronologically ordered list of transactions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionLog(Vec<Transaction>);

impl TransactionLog {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Add a record after every existing one
    pub fn append(&mut self, transaction: Transaction) {
        self.0.push(transaction);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&Transaction> {
        self.0.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Transaction] {
        &self.0
    }

    /// Net balance effect of every record in the log
    pub fn net_total(&self) -> Money {
        self.0.iter().map(|t| t.kind.signed(t.amount)).sum()
    }
}

impl<'a> IntoIterator for &'a TransactionLog {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
