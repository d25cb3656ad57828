//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger data for terminal display:
//! account tables, detail boxes and transaction histories.

pub mod account;
pub mod transaction;

pub use account::{format_account_details, format_account_list};
pub use transaction::format_transaction_history;

use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::config::Settings;

/// Format `timestamp` with the configured `date_format`
///
/// Falls back to `%Y-%m-%d` if the format is rejected at render time.
pub(crate) fn format_date(timestamp: &DateTime<Utc>, settings: &Settings) -> String {
    let mut out = String::new();
    if write!(out, "{}", timestamp.format(&settings.date_format)).is_err() {
        return timestamp.format("%Y-%m-%d").to_string();
    }
    out
}
