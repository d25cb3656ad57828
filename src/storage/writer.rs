//! Background snapshot writer
//!
//! A single tokio task owns the snapshot file. Submissions go through a
//! `watch` channel, so while one write is in flight only the newest pending
//! snapshot is kept and written next. [`SnapshotWriter::flush`] waits until
//! the most recent submission has reached disk (or failed).

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, error};

use crate::error::{BankError, BankResult};
use crate::models::Ledger;

use super::file_io::write_json_atomic;

#[derive(Debug, Clone, Default)]
struct Submission {
    generation: u64,
    snapshot: Option<Arc<Ledger>>,
}

/// Outcome of the last completed write
#[derive(Debug, Clone, Default)]
struct WriteStatus {
    generation: u64,
    error: Option<String>,
}

/// Coalescing writer for ledger snapshots
pub struct SnapshotWriter {
    submissions: watch::Sender<Submission>,
    status: watch::Receiver<WriteStatus>,
    generation: AtomicU64,
}

impl SnapshotWriter {
    /// Start the writer task for `path`
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(path: PathBuf) -> Self {
        let (submissions, submission_rx) = watch::channel(Submission::default());
        let (status_tx, status) = watch::channel(WriteStatus::default());

        tokio::spawn(run(path, submission_rx, status_tx));

        Self {
            submissions,
            status,
            generation: AtomicU64::new(0),
        }
    }

    /// Queue a snapshot for writing without waiting for it
    ///
    /// Replaces any snapshot that has not been picked up yet.
    pub fn submit(&self, ledger: Ledger) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.submissions.send_replace(Submission {
            generation,
            snapshot: Some(Arc::new(ledger)),
        });
        generation
    }

    /// Wait until the latest submitted snapshot has been written
    pub async fn flush(&self) -> BankResult<()> {
        let target = self.generation.load(Ordering::SeqCst);
        if target == 0 {
            return Ok(());
        }

        let mut status = self.status.clone();
        let outcome = status
            .wait_for(|s| s.generation >= target)
            .await
            .map(|s| s.error.clone())
            .map_err(|_| BankError::PersistenceWriteFailed("snapshot writer stopped".into()))?;

        match outcome {
            Some(reason) => Err(BankError::PersistenceWriteFailed(reason)),
            None => Ok(()),
        }
    }
}

async fn run(
    path: PathBuf,
    mut submissions: watch::Receiver<Submission>,
    status: watch::Sender<WriteStatus>,
) {
    while submissions.changed().await.is_ok() {
        let submission = submissions.borrow_and_update().clone();
        let Some(snapshot) = submission.snapshot else {
            continue;
        };

        let target = path.clone();
        let result =
            tokio::task::spawn_blocking(move || write_json_atomic(&target, &*snapshot)).await;

        let error = match result {
            Ok(Ok(())) => {
                debug!(path = %path.display(), generation = submission.generation, "snapshot written");
                None
            }
            Ok(Err(e)) => {
                error!(path = %path.display(), error = %e, "failed to write snapshot");
                Some(e.to_string())
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "snapshot write task panicked");
                Some(e.to_string())
            }
        };

        status.send_replace(WriteStatus {
            generation: submission.generation,
            error,
        });
    }
}
