//! User settings for bankcli
//!
//! Controls display preferences and how strictly ledger operations validate
//! their input. Every field has a default, so a missing or partial settings
//! file is fine.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::BankPaths;
use crate::error::BankError;

/// User settings for bankcli
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Schema version for migration support
    pub schema_version: u32,

    /// Currency symbol used when displaying amounts
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    pub date_format: String,

    /// Reject zero and negative amounts for deposits, withdrawals and transfers
    pub require_positive_amounts: bool,

    /// Allow withdrawals and transfers to push a balance below zero
    pub allow_overdraft: bool,

    /// Reproduce the historical transfer rules: destinations ending in `7`
    /// are never credited and transfers above 500.00 leave no record on
    /// the destination
    pub legacy_transfer_rules: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: 1,
            currency_symbol: "$".to_string(),
            date_format: "%Y-%m-%d".to_string(),
            require_positive_amounts: true,
            allow_overdraft: false,
            legacy_transfer_rules: false,
        }
    }
}

impl Settings {
    /// Settings matching the unvalidated behavior of earlier releases
    pub fn permissive() -> Self {
        Self {
            require_positive_amounts: false,
            allow_overdraft: true,
            legacy_transfer_rules: true,
            ..Self::default()
        }
    }

    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_default(paths: &BankPaths) -> Result<Self, BankError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| BankError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| BankError::Config(format!("Failed to parse settings file: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check values serde cannot: `date_format` must be a valid strftime string
    pub fn validate(&self) -> Result<(), BankError> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(BankError::Config(format!(
                "Invalid date_format '{}' in settings file",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BankPaths) -> Result<(), BankError> {
        self.validate()?;
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BankError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
