//! Transaction display formatting
//!
//! Renders an account's history as a register table.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::Transaction;

use super::format_date;

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Balance After")]
    balance_after: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl HistoryRow {
    fn new(txn: &Transaction, settings: &Settings) -> Self {
        let symbol = &settings.currency_symbol;
        Self {
            date: format_date(&txn.timestamp, settings),
            kind: txn.kind.to_string(),
            amount: txn.amount.format_with_symbol(symbol),
            balance_after: txn.balance_after.format_with_symbol(symbol),
            description: txn.description.clone(),
        }
    }
}

/// Format an account's transactions, oldest first
pub fn format_transaction_history(transactions: &[Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions found.".to_string();
    }

    let mut table = Table::new(transactions.iter().map(|t| HistoryRow::new(t, settings)));
    table
        .with(Style::modern())
        .with(Modify::new(Columns::new(2..4)).with(Alignment::right()));
    table.to_string()
}
