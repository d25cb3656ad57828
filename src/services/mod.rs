//! Service layer for bankcli
//!
//! The service layer provides the ledger operations on top of the storage
//! layer, handling validation, id generation and history recording.

pub mod account;
pub mod registry;
pub mod transfer;
pub mod validation;

pub use account::{AccountListing, AccountService};
pub use transfer::{TransferReceipt, TransferService};
