//! Transfer CLI command

use clap::Args;

use crate::config::Settings;
use crate::error::BankResult;
use crate::services::TransferService;
use crate::storage::LedgerStore;

use super::{parse_amount, print_success, print_warning};

/// Arguments for `bankcli transfer`
#[derive(Args)]
pub struct TransferArgs {
    /// Source account ID
    pub from: String,
    /// Destination account ID (opened if it does not exist)
    pub to: String,
    /// Amount to transfer
    #[arg(allow_hyphen_values = true)]
    pub amount: String,
}

/// Handle a transfer command
pub fn handle_transfer_command(
    store: &LedgerStore,
    settings: &Settings,
    args: TransferArgs,
) -> BankResult<()> {
    let amount = parse_amount(&args.amount)?;
    let receipt =
        TransferService::new(store, settings).transfer(args.from.trim(), args.to.trim(), amount)?;

    if receipt.destination_created {
        print_warning(&format!(
            "Destination {} did not exist and was opened.",
            receipt.to
        ));
    }
    print_success(&format!(
        "Transfer completed. {} balance: {}",
        receipt.from,
        receipt
            .source_balance
            .format_with_symbol(&settings.currency_symbol)
    ));
    Ok(())
}
