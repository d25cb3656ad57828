//! Snapshot loading
//!
//! A snapshot is the whole ledger serialized to one JSON file. Loading never
//! fails: a missing file is created empty, and an unreadable or malformed file
//! yields an empty ledger plus a [`LoadOutcome::Corrupt`] for the caller to
//! report. The corrupt file itself is left untouched.

use std::collections::HashSet;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::BankError;
use crate::models::Ledger;

use super::file_io::{read_json_value, write_json_atomic};

/// What happened when the snapshot was loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No snapshot existed; an empty one was written
    Created,
    /// The snapshot was read successfully
    Loaded { accounts: usize },
    /// The snapshot could not be used; the ledger starts empty
    Corrupt { reason: String },
}

impl LoadOutcome {
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt { .. })
    }
}

/// Load the ledger stored at `path`
pub fn load_snapshot(path: &Path) -> (Ledger, LoadOutcome) {
    match read_ledger(path) {
        Ok(Some(ledger)) => {
            debug!(path = %path.display(), accounts = ledger.len(), "loaded snapshot");
            warn_on_duplicate_ids(&ledger);
            for account in ledger.accounts().iter().filter(|a| !a.is_reconciled_with_log()) {
                debug!(id = %account.id, "balance differs from the net of its history");
            }
            let accounts = ledger.len();
            (ledger, LoadOutcome::Loaded { accounts })
        }
        Ok(None) => {
            let ledger = Ledger::new();
            if let Err(e) = write_json_atomic(path, &ledger) {
                warn!(path = %path.display(), error = %e, "could not create empty snapshot");
            }
            (ledger, LoadOutcome::Created)
        }
        Err(e) => {
            let reason = match e {
                BankError::PersistenceCorrupt(reason) => reason,
                other => other.to_string(),
            };
            warn!(path = %path.display(), %reason, "snapshot is corrupt, starting with an empty ledger");
            (Ledger::new(), LoadOutcome::Corrupt { reason })
        }
    }
}

fn read_ledger(path: &Path) -> Result<Option<Ledger>, BankError> {
    let Some(value) = read_json_value(path)? else {
        return Ok(None);
    };

    let has_accounts_array = value
        .as_object()
        .and_then(|obj| obj.get("accounts"))
        .is_some_and(|accounts| accounts.is_array());
    if !has_accounts_array {
        return Err(BankError::PersistenceCorrupt(format!(
            "{} is not an object with an `accounts` array",
            path.display()
        )));
    }

    warn_on_null_amounts(&value);

    serde_json::from_value(value).map(Some).map_err(|e| {
        BankError::PersistenceCorrupt(format!("Invalid account record in {}: {}", path.display(), e))
    })
}

/// Amounts stored as `null` by older versions load as zero; name each one
fn warn_on_null_amounts(value: &Value) {
    let Some(accounts) = value.get("accounts").and_then(Value::as_array) else {
        return;
    };
    for account in accounts {
        let id = account.get("id").and_then(Value::as_str).unwrap_or("<unknown>");
        if account.get("balance").is_some_and(Value::is_null) {
            warn!(id, "null balance in snapshot, reading it as 0.00");
        }
        let transactions = account.get("transactions").and_then(Value::as_array);
        for (index, txn) in transactions.into_iter().flatten().enumerate() {
            for field in ["amount", "balanceAfter"] {
                if txn.get(field).is_some_and(Value::is_null) {
                    warn!(id, index, field, "null transaction amount in snapshot, reading it as 0.00");
                }
            }
        }
    }
}

fn warn_on_duplicate_ids(ledger: &Ledger) {
    let mut seen = HashSet::new();
    for account in ledger.accounts() {
        if !seen.insert(account.id.as_str()) {
            warn!(id = %account.id, "snapshot contains a duplicate account id; lookups use the first one");
        }
    }
}
