//! Storage layer for bankcli
//!
//! Owns the in-memory ledger and its JSON snapshot file. Mutations happen in
//! memory under a single write lock; persisting hands a copy of the ledger to
//! the background [`SnapshotWriter`].

pub mod file_io;
pub mod snapshot;
pub mod writer;

pub use file_io::{read_json_value, write_json_atomic};
pub use snapshot::{load_snapshot, LoadOutcome};
pub use writer::SnapshotWriter;

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::BankError;
use crate::models::Ledger;

/// The authoritative ledger plus its persistence
pub struct LedgerStore {
    path: PathBuf,
    ledger: RwLock<Ledger>,
    writer: SnapshotWriter,
    load_outcome: LoadOutcome,
}

impl LedgerStore {
    /// Load the snapshot at `path` and start its writer
    ///
    /// Never fails: see [`load_snapshot`] for how missing or corrupt files
    /// are handled. Must be called from within a tokio runtime.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (ledger, load_outcome) = load_snapshot(&path);

        Self {
            writer: SnapshotWriter::spawn(path.clone()),
            ledger: RwLock::new(ledger),
            load_outcome,
            path,
        }
    }

    /// Path of the snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// How the snapshot was loaded at startup
    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.load_outcome
    }

    /// Run `f` with shared access to the ledger
    pub fn read<R>(&self, f: impl FnOnce(&Ledger) -> R) -> Result<R, BankError> {
        let ledger = self
            .ledger
            .read()
            .map_err(|e| BankError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(f(&ledger))
    }

    /// Run `f` with exclusive access to the ledger
    ///
    /// Does not persist; callers follow a successful mutation with
    /// [`LedgerStore::persist`].
    pub fn write<R>(
        &self,
        f: impl FnOnce(&mut Ledger) -> Result<R, BankError>,
    ) -> Result<R, BankError> {
        let mut ledger = self
            .ledger
            .write()
            .map_err(|e| BankError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        f(&mut ledger)
    }

    /// Copy of the current ledger
    pub fn snapshot(&self) -> Result<Ledger, BankError> {
        self.read(Ledger::clone)
    }

    /// Queue the current ledger for writing; returns immediately
    pub fn persist(&self) -> Result<(), BankError> {
        let snapshot = self.snapshot()?;
        self.writer.submit(snapshot);
        Ok(())
    }

    /// Wait for the most recent [`LedgerStore::persist`] to reach disk
    pub async fn flush(&self) -> Result<(), BankError> {
        self.writer.flush().await
    }

    /// Persist and wait for the write to finish
    pub async fn save(&self) -> Result<(), BankError> {
        self.persist()?;
        self.flush().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, AccountId, Money, TransactionKind};
    use chrono::Utc;
    use tempfile::TempDir;

    fn sample_account(id: &str) -> Account {
        let mut account = Account::new(AccountId::new(id), "Sample", Money::zero(), Utc::now());
        account.credit(
            TransactionKind::Deposit,
            Money::from_cents(12345),
            "Initial deposit",
            Utc::now(),
        )
        .unwrap();
        account
    }

    #[tokio::test]
    async fn test_open_creates_empty_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bank-data.json");

        let store = LedgerStore::open(&path);
        assert_eq!(store.load_outcome(), &LoadOutcome::Created);
        assert!(path.exists());
        assert_eq!(store.read(|l| l.len()).unwrap(), 0);
    }

    #[tokio::test]
    async fn test_save_and_reload_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bank-data.json");

        let store = LedgerStore::open(&path);
        store
            .write(|ledger| {
                ledger.push(sample_account("ACC-1111"));
                ledger.push(sample_account("ACC-2222"));
                Ok(())
            })
            .unwrap();
        store.save().await.unwrap();
        let before = store.snapshot().unwrap();

        let reopened = LedgerStore::open(&path);
        assert_eq!(reopened.load_outcome(), &LoadOutcome::Loaded { accounts: 2 });
        assert_eq!(reopened.snapshot().unwrap(), before);
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_starts_empty_without_rewriting() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bank-data.json");
        std::fs::write(&path, "garbage").unwrap();

        let store = LedgerStore::open(&path);
        assert!(store.load_outcome().is_corrupt());
        assert_eq!(store.read(|l| l.len()).unwrap(), 0);

        store.flush().await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "garbage");
    }

    #[tokio::test]
    async fn test_failed_mutation_keeps_state() {
        let temp_dir = TempDir::new().unwrap();
        let store = LedgerStore::open(temp_dir.path().join("bank-data.json"));

        let result: Result<(), BankError> =
            store.write(|_| Err(BankError::Validation("nope".into())));
        assert!(result.is_err());
        assert_eq!(store.read(|l| l.len()).unwrap(), 0);
    }
}
