//! Account service
//!
//! Ledger operations on single accounts: opening, deposits, withdrawals,
//! history, details, listing and deletion. Each mutating operation runs under
//! one write lock and persists once on success; a failed operation leaves
//! the ledger untouched.

use chrono::Utc;
use tracing::debug;

use crate::config::Settings;
use crate::error::{BankError, BankResult};
use crate::models::{Account, Money, Transaction, TransactionKind};
use crate::storage::LedgerStore;

use super::registry::{generate_id, require, require_mut};
use super::validation::{check_amount, check_funds, check_opening_amount};

/// Service for account management
pub struct AccountService<'a> {
    store: &'a LedgerStore,
    settings: &'a Settings,
}

/// Every account plus the sum of their balances
#[derive(Debug, Clone)]
pub struct AccountListing {
    pub accounts: Vec<Account>,
    pub total_balance: Money,
}

impl<'a> AccountService<'a> {
    pub fn new(store: &'a LedgerStore, settings: &'a Settings) -> Self {
        Self { store, settings }
    }

    /// Open a new account funded by `initial_deposit`
    pub fn create_account(&self, holder_name: &str, initial_deposit: Money) -> BankResult<Account> {
        check_opening_amount(self.settings, initial_deposit)?;

        let account = self.store.write(|ledger| {
            let id = generate_id(ledger, &mut rand::thread_rng())?;
            let now = Utc::now();

            let mut account = Account::new(id, holder_name, Money::zero(), now);
            account.credit(TransactionKind::Deposit, initial_deposit, "Initial deposit", now)?;

            ledger.push(account.clone());
            Ok(account)
        })?;

        debug!(id = %account.id, balance = %account.balance, "account created");
        self.store.persist()?;
        Ok(account)
    }

    /// Add `amount` to an account
    pub fn deposit(&self, id: &str, amount: Money) -> BankResult<Account> {
        check_amount(self.settings, amount, "Deposit")?;

        let account = self.store.write(|ledger| {
            let account = require_mut(ledger, id)?;
            account.credit(TransactionKind::Deposit, amount, "Deposit", Utc::now())?;
            Ok(account.clone())
        })?;

        debug!(id, %amount, balance = %account.balance, "deposit");
        self.store.persist()?;
        Ok(account)
    }

    /// Take `amount` out of an account
    pub fn withdraw(&self, id: &str, amount: Money) -> BankResult<Account> {
        check_amount(self.settings, amount, "Withdrawal")?;

        let account = self.store.write(|ledger| {
            let account = require_mut(ledger, id)?;
            check_funds(self.settings, account, amount)?;
            account.debit(TransactionKind::Withdrawal, amount, "Withdrawal", Utc::now())?;
            Ok(account.clone())
        })?;

        debug!(id, %amount, balance = %account.balance, "withdrawal");
        self.store.persist()?;
        Ok(account)
    }

    /// An account's transactions, oldest first
    pub fn history(&self, id: &str) -> BankResult<Vec<Transaction>> {
        self.store
            .read(|ledger| require(ledger, id).map(|a| a.transactions.as_slice().to_vec()))?
    }

    /// A single account's current state
    pub fn show_account(&self, id: &str) -> BankResult<Account> {
        self.store.read(|ledger| require(ledger, id).cloned())?
    }

    /// Remove an account and its history
    pub fn delete_account(&self, id: &str) -> BankResult<Account> {
        let removed = self.store.write(|ledger| {
            let index = ledger
                .position(id)
                .ok_or_else(|| BankError::account_not_found(id))?;
            Ok(ledger.remove(index))
        })?;

        debug!(id, "account deleted");
        self.store.persist()?;
        Ok(removed)
    }

    /// All accounts in insertion order with their total balance
    pub fn list_accounts(&self) -> BankResult<AccountListing> {
        self.store.read(|ledger| AccountListing {
            accounts: ledger.accounts().to_vec(),
            total_balance: ledger.total_balance(),
        })
    }
}
