//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::{Account, Money};

use super::format_date;

#[derive(Tabled)]
struct AccountRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Holder Name")]
    holder: String,
    #[tabled(rename = "Balance")]
    balance: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

/// Format a list of accounts as a table followed by totals
pub fn format_account_list(accounts: &[Account], total: Money, settings: &Settings) -> String {
    if accounts.is_empty() {
        return "No accounts found.".to_string();
    }

    let rows = accounts.iter().map(|account| AccountRow {
        id: account.id.to_string(),
        holder: account.holder_name.clone(),
        balance: account.balance.format_with_symbol(&settings.currency_symbol),
        status: "ACTIVE",
    });

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Columns::single(2)).with(Alignment::right()));

    let mut output = table.to_string();
    output.push('\n');
    output.push_str(&format!("Total Accounts: {}\n", accounts.len()));
    output.push_str(&format!(
        "Total Balance:  {}\n",
        total.format_with_symbol(&settings.currency_symbol)
    ));
    output
}

/// Format a single account's details
pub fn format_account_details(account: &Account, settings: &Settings) -> String {
    let holder = if account.holder_name.is_empty() {
        "(none)"
    } else {
        account.holder_name.as_str()
    };

    let lines = [
        format!("Account ID:   {}", account.id),
        format!("Holder Name:  {}", holder),
        format!(
            "Balance:      {}",
            account.balance.format_with_symbol(&settings.currency_symbol)
        ),
        format!(
            "Opened:       {}",
            format_date(&account.created_at, settings)
        ),
        format!("Transactions: {}", account.transactions.len()),
    ];

    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let border = format!("+{}+\n", "-".repeat(width + 2));

    let mut output = border.clone();
    for line in &lines {
        output.push_str(&format!("| {:<width$} |\n", line, width = width));
    }
    output.push_str(&border);
    output
}
