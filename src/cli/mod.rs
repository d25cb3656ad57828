//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod shell;
pub mod transfer;

pub use account::{handle_account_command, AccountCommands};
pub use shell::run_shell;
pub use transfer::{handle_transfer_command, TransferArgs};

use crossterm::style::Stylize;

use crate::error::{BankError, BankResult};
use crate::models::Money;

/// Parse user-entered amount text, e.g. "100", "12.50" or "$1,000"
pub fn parse_amount(input: &str) -> BankResult<Money> {
    Money::parse(input).map_err(|e| {
        BankError::Validation(format!(
            "Invalid amount: '{}'. Use a number like '100' or '12.50'. Error: {}",
            input.trim(),
            e
        ))
    })
}

pub(crate) fn print_success(message: &str) {
    println!("{}", message.green());
}

pub(crate) fn print_warning(message: &str) {
    println!("{}", message.yellow());
}

pub(crate) fn print_error(message: &str) {
    eprintln!("{}", message.red());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("100").unwrap().cents(), 10000);
        assert_eq!(parse_amount(" 12.50 ").unwrap().cents(), 1250);
        assert!(parse_amount("abc").unwrap_err().is_validation());
        assert!(parse_amount("").unwrap_err().is_validation());
    }
}
