//! Account CLI commands
//!
//! One-shot commands for account management.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_account_details, format_account_list, format_transaction_history};
use crate::error::BankResult;
use crate::services::AccountService;
use crate::storage::LedgerStore;

use super::{parse_amount, print_success};

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Open a new account
    Create {
        /// Account holder name
        holder: String,
        /// Initial deposit (e.g., "100" or "12.50")
        #[arg(allow_hyphen_values = true)]
        deposit: String,
    },
    /// Show account details
    Show {
        /// Account ID
        id: String,
    },
    /// List all accounts
    List,
    /// Deposit funds into an account
    Deposit {
        /// Account ID
        id: String,
        /// Amount to deposit
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Withdraw funds from an account
    Withdraw {
        /// Account ID
        id: String,
        /// Amount to withdraw
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Show an account's transaction history
    History {
        /// Account ID
        id: String,
    },
    /// Delete an account and its history
    Delete {
        /// Account ID
        id: String,
    },
}

impl AccountCommands {
    /// Whether the command changes the ledger
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::Create { .. } | Self::Deposit { .. } | Self::Withdraw { .. } | Self::Delete { .. }
        )
    }
}

/// Handle an account command
pub fn handle_account_command(
    store: &LedgerStore,
    settings: &Settings,
    cmd: AccountCommands,
) -> BankResult<()> {
    let service = AccountService::new(store, settings);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        AccountCommands::Create { holder, deposit } => {
            let deposit = parse_amount(&deposit)?;
            let account = service.create_account(&holder, deposit)?;
            print_success(&format!("Account created successfully. ID: {}", account.id));
        }

        AccountCommands::Show { id } => {
            let account = service.show_account(id.trim())?;
            print!("{}", format_account_details(&account, settings));
        }

        AccountCommands::List => {
            let listing = service.list_accounts()?;
            println!(
                "{}",
                format_account_list(&listing.accounts, listing.total_balance, settings)
            );
        }

        AccountCommands::Deposit { id, amount } => {
            let amount = parse_amount(&amount)?;
            let account = service.deposit(id.trim(), amount)?;
            print_success(&format!(
                "Deposit complete. New balance: {}",
                account.balance.format_with_symbol(symbol)
            ));
        }

        AccountCommands::Withdraw { id, amount } => {
            let amount = parse_amount(&amount)?;
            let account = service.withdraw(id.trim(), amount)?;
            print_success(&format!(
                "Withdrawal complete. New balance: {}",
                account.balance.format_with_symbol(symbol)
            ));
        }

        AccountCommands::History { id } => {
            let history = service.history(id.trim())?;
            println!("{}", format_transaction_history(&history, settings));
        }

        AccountCommands::Delete { id } => {
            let removed = service.delete_account(id.trim())?;
            print_success(&format!("Account deleted: {}", removed));
        }
    }

    Ok(())
}
