//! Account model
//!
//! Represents a balance-holding account together with its transaction log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{BankError, BankResult};

use super::ids::AccountId;
use super::money::Money;
use super::transaction::{Transaction, TransactionKind, TransactionLog};

/// A bank account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Account holder; empty for accounts opened implicitly by a transfer
    #[serde(default)]
    pub holder_name: String,

    /// Current balance
    pub balance: Money,

    /// When the account was created
    pub created_at: DateTime<Utc>,

    /// History of balance-affecting events, oldest first
    #[serde(default)]
    pub transactions: TransactionLog,
}

impl Account {
    /// Create an account with an empty history
    pub fn new(
        id: AccountId,
        holder_name: impl Into<String>,
        balance: Money,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            holder_name: holder_name.into(),
            balance,
            created_at,
            transactions: TransactionLog::new(),
        }
    }

    /// Append a record to the log, snapshotting the current balance
    ///
    /// The caller must already have applied the balance change.
    pub fn record(
        &mut self,
        kind: TransactionKind,
        amount: Money,
        description: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> &Transaction {
        let transaction = Transaction::new(kind, amount, self.balance, description, timestamp);
        self.transactions.append(transaction);
        // Just appended, so the log is non-empty
        &self.transactions.as_slice()[self.transactions.len() - 1]
    }

    /// Credit the balance and log the event
    ///
    /// Fails without touching the account if the balance would overflow.
    pub fn credit(
        &mut self,
        kind: TransactionKind,
        amount: Money,
        description: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> BankResult<()> {
        self.balance = self.credited(amount)?;
        self.record(kind, amount, description, timestamp);
        Ok(())
    }

    /// Debit the balance and log the event
    ///
    /// Fails without touching the account if the balance would overflow.
    pub fn debit(
        &mut self,
        kind: TransactionKind,
        amount: Money,
        description: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> BankResult<()> {
        self.balance = self.debited(amount)?;
        self.record(kind, amount, description, timestamp);
        Ok(())
    }

    /// The balance after crediting `amount`
    pub fn credited(&self, amount: Money) -> BankResult<Money> {
        self.balance
            .checked_add(amount)
            .ok_or_else(|| BankError::balance_overflow(self.id.as_str(), amount))
    }

    /// The balance after debiting `amount`
    pub fn debited(&self, amount: Money) -> BankResult<Money> {
        self.balance
            .checked_sub(amount)
            .ok_or_else(|| BankError::balance_overflow(self.id.as_str(), amount))
    }

    /// Whether the balance matches the net effect of the logged history
    pub fn is_reconciled_with_log(&self) -> bool {
        self.balance == self.transactions.net_total()
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.holder_name.is_empty() {
            write!(f, "{}", self.id)
        } else {
            write!(f, "{} ({})", self.id, self.holder_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_account() -> Account {
        Account::new(AccountId::new("ACC-1234"), "Ada", Money::zero(), Utc::now())
    }

    #[test]
    fn test_new_account() {
        let account = test_account();
        assert_eq!(account.holder_name, "Ada");
        assert!(account.balance.is_zero());
        assert!(account.transactions.is_empty());
    }

    #[test]
    fn test_credit_and_debit_snapshot_balance() {
        let mut account = test_account();
        let now = Utc::now();

        account
            .credit(TransactionKind::Deposit, Money::from_cents(10000), "Deposit", now)
            .unwrap();
        account
            .debit(TransactionKind::Withdrawal, Money::from_cents(2550), "Withdrawal", now)
            .unwrap();

        assert_eq!(account.balance.cents(), 7450);
        let history: Vec<_> = account.transactions.iter().map(|t| t.balance_after.cents()).collect();
        assert_eq!(history, vec![10000, 7450]);
        assert!(account.is_reconciled_with_log());
    }

    #[test]
    fn test_overflowing_credit_is_rejected() {
        let mut account = Account::new(
            AccountId::new("ACC-1234"),
            "Ada",
            Money::from_cents(i64::MAX - 10),
            Utc::now(),
        );

        let err = account
            .credit(TransactionKind::Deposit, Money::from_cents(11), "Deposit", Utc::now())
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(account.balance.cents(), i64::MAX - 10);
        assert!(account.transactions.is_empty());

        let mut low = Account::new(AccountId::new("ACC-4321"), "Bob", Money::from_cents(i64::MIN), Utc::now());
        assert!(low
            .debit(TransactionKind::Withdrawal, Money::from_cents(1), "Withdrawal", Utc::now())
            .is_err());
    }

    #[test]
    fn test_record_does_not_touch_balance() {
        let mut account = test_account();
        let recorded = account.record(
            TransactionKind::TransferIn,
            Money::from_cents(500),
            "From ACC-1111",
            Utc::now(),
        );
        assert_eq!(recorded.balance_after, Money::zero());
        assert!(account.balance.is_zero());
        assert!(!account.is_reconciled_with_log());
    }

    #[test]
    fn test_serialization_field_names() {
        let mut account = test_account();
        account
            .credit(TransactionKind::Deposit, Money::from_cents(10000), "Initial deposit", Utc::now())
            .unwrap();

        let value = serde_json::to_value(&account).unwrap();
        assert_eq!(value["id"], "ACC-1234");
        assert_eq!(value["holderName"], "Ada");
        assert_eq!(value["balance"], 100);
        assert!(value["createdAt"].is_string());
        assert_eq!(value["transactions"][0]["type"], "DEPOSIT");

        let back: Account = serde_json::from_value(value).unwrap();
        assert_eq!(back, account);
    }

    #[test]
    fn test_display() {
        let account = test_account();
        assert_eq!(account.to_string(), "ACC-1234 (Ada)");

        let anonymous = Account::new(AccountId::new("ACC-9999"), "", Money::zero(), Utc::now());
        assert_eq!(anonymous.to_string(), "ACC-9999");
    }
}
