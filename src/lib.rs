//! bankcli - Terminal banking ledger
//!
//! This library provides the core functionality for the bankcli application:
//! accounts with balances and an append-only transaction history, kept in
//! memory and persisted as a single JSON snapshot.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and settings
//! - `error`: Custom error types
//! - `models`: Core data models (money, accounts, transactions, ledger)
//! - `storage`: Snapshot loading and the background snapshot writer
//! - `services`: Ledger operations
//! - `display`: Terminal formatting
//! - `cli`: One-shot commands and the interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use bankcli::config::{BankPaths, Settings};
//! use bankcli::services::AccountService;
//! use bankcli::storage::LedgerStore;
//!
//! let paths = BankPaths::new()?;
//! let settings = Settings::load_or_default(&paths)?;
//! let store = LedgerStore::open(paths.data_file());
//! let account = AccountService::new(&store, &settings)
//!     .create_account("Ada Lovelace", Money::from_cents(10000))?;
//! store.flush().await?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::BankError;
