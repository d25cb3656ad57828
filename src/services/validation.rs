//! Amount and balance checks shared by the ledger operations
//!
//! What is enforced depends on [`Settings`]; with the permissive settings
//! every check passes.

use crate::config::Settings;
use crate::error::{BankError, BankResult};
use crate::models::{Account, Money};

/// Reject non-positive amounts when `require_positive_amounts` is set
pub fn check_amount(settings: &Settings, amount: Money, action: &str) -> BankResult<()> {
    if settings.require_positive_amounts && !amount.is_positive() {
        return Err(BankError::Validation(format!(
            "{} amount must be positive, got {}",
            action, amount
        )));
    }
    Ok(())
}

/// Reject negative opening balances; zero is a valid way to open an account
pub fn check_opening_amount(settings: &Settings, amount: Money) -> BankResult<()> {
    if settings.require_positive_amounts && amount.is_negative() {
        return Err(BankError::Validation(format!(
            "Initial deposit cannot be negative, got {}",
            amount
        )));
    }
    Ok(())
}

/// Reject a debit that would overdraw `account` unless overdrafts are allowed
pub fn check_funds(settings: &Settings, account: &Account, amount: Money) -> BankResult<()> {
    if !settings.allow_overdraft && account.balance < amount {
        return Err(BankError::InsufficientFunds {
            account: account.id.to_string(),
            needed: amount,
            available: account.balance,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccountId;
    use chrono::Utc;

    fn account_with(cents: i64) -> Account {
        Account::new(AccountId::new("ACC-1234"), "Test", Money::from_cents(cents), Utc::now())
    }

    #[test]
    fn test_check_amount() {
        let settings = Settings::default();
        assert!(check_amount(&settings, Money::from_cents(1), "Deposit").is_ok());

        let err = check_amount(&settings, Money::zero(), "Deposit").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Validation error: Deposit amount must be positive, got $0.00"
        );
        assert!(check_amount(&settings, Money::from_cents(-500), "Deposit").is_err());

        let permissive = Settings::permissive();
        assert!(check_amount(&permissive, Money::from_cents(-500), "Deposit").is_ok());
    }

    #[test]
    fn test_check_opening_amount() {
        let settings = Settings::default();
        assert!(check_opening_amount(&settings, Money::zero()).is_ok());
        assert!(check_opening_amount(&settings, Money::from_cents(-1)).is_err());
        assert!(check_opening_amount(&Settings::permissive(), Money::from_cents(-1)).is_ok());
    }

    #[test]
    fn test_check_funds() {
        let settings = Settings::default();
        let account = account_with(10000);

        assert!(check_funds(&settings, &account, Money::from_cents(10000)).is_ok());
        let err = check_funds(&settings, &account, Money::from_cents(15000)).unwrap_err();
        assert!(matches!(err, BankError::InsufficientFunds { .. }));

        let overdraft = Settings {
            allow_overdraft: true,
            ..Settings::default()
        };
        assert!(check_funds(&overdraft, &account, Money::from_cents(15000)).is_ok());
    }
}
