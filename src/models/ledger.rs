//! Ledger model
//!
//! The full ordered set of accounts. This is also the shape of the snapshot
//! file: `{ "accounts": [...] }`.

use serde::{Deserialize, Serialize};

use super::account::Account;
use super::money::Money;

/// All accounts, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    accounts: Vec<Account>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Position of the account with exactly this id
    pub fn position(&self, id: &str) -> Option<usize> {
        self.accounts.iter().position(|a| a.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&Account> {
        self.accounts.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Account> {
        self.accounts.get_mut(index)
    }

    /// Add an account after all existing ones
    pub fn push(&mut self, account: Account) {
        self.accounts.push(account);
    }

    /// Remove and return the account at `index`, keeping the order of the rest
    pub fn remove(&mut self, index: usize) -> Account {
        self.accounts.remove(index)
    }

    /// Sum of every account balance
    pub fn total_balance(&self) -> Money {
        self.accounts.iter().map(|a| a.balance).sum()
    }
}
