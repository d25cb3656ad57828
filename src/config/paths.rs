//! Path management for bankcli
//!
//! ## Path Resolution Order
//!
//! 1. Explicit directory passed on the command line (`--home`)
//! 2. `BANKCLI_HOME` environment variable (if set)
//! 3. The process working directory

use std::path::{Path, PathBuf};

use crate::error::BankError;

/// Environment variable overriding the base directory
pub const HOME_ENV_VAR: &str = "BANKCLI_HOME";

/// Manages all paths used by bankcli
#[derive(Debug, Clone)]
pub struct BankPaths {
    /// Directory holding the snapshot and settings files
    base_dir: PathBuf,
}

impl BankPaths {
    /// Resolve paths from the environment, falling back to the working directory
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    pub fn new() -> Result<Self, BankError> {
        let base_dir = match std::env::var_os(HOME_ENV_VAR) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => std::env::current_dir().map_err(|e| {
                BankError::Config(format!("Could not determine working directory: {}", e))
            })?,
        };

        Ok(Self { base_dir })
    }

    /// Create BankPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the ledger snapshot
    pub fn data_file(&self) -> PathBuf {
        self.base_dir.join("bank-data.json")
    }

    /// Get the path to the optional settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("bank-settings.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), BankError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BankError::Io(format!("Failed to create base directory: {}", e)))
    }
}
