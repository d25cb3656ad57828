//! Interactive menu shell
//!
//! A numbered menu over the ledger operations. Reads stdin line by line;
//! end of input or Ctrl-C leaves the loop, after which pending snapshot
//! writes are flushed. A failed operation prints its error and returns to
//! the menu.

use std::io::{self, IsTerminal, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{debug, warn};

use crate::config::Settings;
use crate::display::{format_account_details, format_account_list, format_transaction_history};
use crate::error::{BankError, BankResult};
use crate::services::{AccountService, TransferService};
use crate::storage::LedgerStore;

use super::{parse_amount, print_error, print_success, print_warning};

const MENU: [&str; 9] = [
    "Create New Account",
    "View Account Details",
    "List All Accounts",
    "Deposit Funds",
    "Withdraw Funds",
    "Transfer Between Accounts",
    "View Transaction History",
    "Delete Account",
    "Exit Application",
];

/// What the menu loop does after a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Line-oriented prompt over async stdin
struct Prompt {
    lines: Lines<BufReader<Stdin>>,
}

impl Prompt {
    fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Print `question` and read one trimmed line
    ///
    /// `None` means input ended, Ctrl-C was pressed or stdin failed. A line
    /// that is not valid UTF-8 is a `Validation` error; reading can go on.
    async fn ask(&mut self, question: &str) -> BankResult<Option<String>> {
        print!("{}", question);
        io::stdout().flush()?;

        tokio::select! {
            line = self.lines.next_line() => match line {
                Ok(line) => Ok(line.map(|l| l.trim().to_string())),
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    println!();
                    Err(BankError::Validation("Input was not valid UTF-8".into()))
                }
                Err(e) => {
                    println!();
                    warn!(error = %e, "failed to read stdin, leaving the menu");
                    Ok(None)
                }
            },
            _ = tokio::signal::ctrl_c() => {
                println!();
                debug!("interrupted at prompt");
                Ok(None)
            }
        }
    }
}

struct Shell<'a> {
    store: &'a LedgerStore,
    settings: &'a Settings,
    prompt: Prompt,
    interactive: bool,
}

/// Run the interactive menu until the user exits, then flush
pub async fn run_shell(store: &LedgerStore, settings: &Settings) -> BankResult<()> {
    let mut shell = Shell {
        store,
        settings,
        prompt: Prompt::new(),
        interactive: io::stdin().is_terminal() && io::stdout().is_terminal(),
    };

    if store.load_outcome().is_corrupt() {
        print_warning("Warning: Data file corrupted. Starting with empty data.");
    }

    let mut first = true;
    loop {
        match shell.step(first).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => print_error(&format!("Error: {}", e)),
        }
        first = false;
    }

    println!("{}", "Saving and exiting...".cyan());
    store.flush().await
}

fn print_menu() {
    let banner = "=".repeat(38);
    println!("{}", banner.as_str().cyan());
    println!("{}", format!("={:^36}=", "BANKCLI").cyan());
    println!("{}", banner.as_str().cyan());
    println!();
    for (i, label) in MENU.iter().enumerate() {
        println!("{}. {}", i + 1, label);
    }
    println!();
}

fn print_title(title: &str) {
    println!("{}", title.bold());
    println!();
}

impl Shell<'_> {
    /// Show the menu, run one choice and pause
    async fn step(&mut self, first: bool) -> BankResult<Flow> {
        if !first {
            self.clear_screen()?;
        }
        print_menu();

        let Some(choice) = self.prompt.ask("Select option (1-9): ").await? else {
            return Ok(Flow::Quit);
        };

        let outcome = match choice.as_str() {
            "1" => self.create_account().await,
            "2" => self.view_account().await,
            "3" => self.list_accounts(),
            "4" => self.deposit().await,
            "5" => self.withdraw().await,
            "6" => self.transfer().await,
            "7" => self.history().await,
            "8" => self.delete_account().await,
            "9" => return Ok(Flow::Quit),
            _ => {
                print_error("Invalid option. Please select 1-9.");
                Ok(Flow::Continue)
            }
        };

        match outcome {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => return Ok(Flow::Quit),
            Err(e) => print_error(&format!("Error: {}", e)),
        }

        self.pause().await
    }

    fn accounts(&self) -> AccountService<'_> {
        AccountService::new(self.store, self.settings)
    }

    fn money(&self, amount: crate::models::Money) -> String {
        amount.format_with_symbol(&self.settings.currency_symbol)
    }

    fn clear_screen(&self) -> BankResult<()> {
        if self.interactive {
            let mut stdout = io::stdout();
            execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    async fn pause(&mut self) -> BankResult<Flow> {
        if !self.interactive {
            println!();
            return Ok(Flow::Continue);
        }
        let answer = self.prompt.ask("\nPress Enter to continue...").await?;
        Ok(if answer.is_some() {
            Flow::Continue
        } else {
            Flow::Quit
        })
    }

    /// Ask for an account id and confirm it exists before going further
    async fn ask_existing_id(&mut self) -> BankResult<Option<String>> {
        let Some(id) = self.prompt.ask("Account ID: ").await? else {
            return Ok(None);
        };
        self.accounts().show_account(&id)?;
        Ok(Some(id))
    }

    async fn create_account(&mut self) -> BankResult<Flow> {
        self.clear_screen()?;
        print_title("Create New Account");

        let Some(holder) = self.prompt.ask("Account holder name: ").await? else {
            return Ok(Flow::Quit);
        };
        let Some(deposit) = self.prompt.ask("Initial deposit amount: ").await? else {
            return Ok(Flow::Quit);
        };

        let account = self.accounts().create_account(&holder, parse_amount(&deposit)?)?;
        print_success(&format!("Account created successfully. ID: {}", account.id));
        Ok(Flow::Continue)
    }

    async fn view_account(&mut self) -> BankResult<Flow> {
        self.clear_screen()?;
        print_title("View Account Details");

        let Some(id) = self.prompt.ask("Account ID: ").await? else {
            return Ok(Flow::Quit);
        };
        let account = self.accounts().show_account(&id)?;
        print!("{}", format_account_details(&account, self.settings));
        Ok(Flow::Continue)
    }

    fn list_accounts(&self) -> BankResult<Flow> {
        self.clear_screen()?;
        print_title("All Accounts");

        let listing = self.accounts().list_accounts()?;
        if listing.accounts.is_empty() {
            print_warning("No accounts found.");
        } else {
            println!(
                "{}",
                format_account_list(&listing.accounts, listing.total_balance, self.settings)
            );
        }
        Ok(Flow::Continue)
    }

    async fn deposit(&mut self) -> BankResult<Flow> {
        self.clear_screen()?;
        print_title("Deposit Funds");

        let Some(id) = self.ask_existing_id().await? else {
            return Ok(Flow::Quit);
        };
        let Some(amount) = self.prompt.ask("Deposit amount: ").await? else {
            return Ok(Flow::Quit);
        };

        let account = self.accounts().deposit(&id, parse_amount(&amount)?)?;
        print_success(&format!(
            "Deposit complete. New balance: {}",
            self.money(account.balance)
        ));
        Ok(Flow::Continue)
    }

    async fn withdraw(&mut self) -> BankResult<Flow> {
        self.clear_screen()?;
        print_title("Withdraw Funds");

        let Some(id) = self.ask_existing_id().await? else {
            return Ok(Flow::Quit);
        };
        let Some(amount) = self.prompt.ask("Withdrawal amount: ").await? else {
            return Ok(Flow::Quit);
        };

        let account = self.accounts().withdraw(&id, parse_amount(&amount)?)?;
        print_success(&format!(
            "Withdrawal complete. New balance: {}",
            self.money(account.balance)
        ));
        Ok(Flow::Continue)
    }

    async fn transfer(&mut self) -> BankResult<Flow> {
        self.clear_screen()?;
        print_title("Transfer Between Accounts");

        let Some(from) = self.prompt.ask("From Account ID: ").await? else {
            return Ok(Flow::Quit);
        };
        let Some(to) = self.prompt.ask("To Account ID: ").await? else {
            return Ok(Flow::Quit);
        };
        let Some(amount) = self.prompt.ask("Transfer amount: ").await? else {
            return Ok(Flow::Quit);
        };

        let receipt = TransferService::new(self.store, self.settings).transfer(
            &from,
            &to,
            parse_amount(&amount)?,
        )?;
        if receipt.destination_created {
            print_warning(&format!(
                "Destination {} did not exist and was opened.",
                receipt.to
            ));
        }
        print_success("Transfer completed.");
        Ok(Flow::Continue)
    }

    async fn history(&mut self) -> BankResult<Flow> {
        self.clear_screen()?;
        print_title("Transaction History");

        let Some(id) = self.prompt.ask("Account ID: ").await? else {
            return Ok(Flow::Quit);
        };
        let history = self.accounts().history(&id)?;
        if history.is_empty() {
            print_warning("No transactions found.");
        } else {
            println!("{}", format_transaction_history(&history, self.settings));
        }
        Ok(Flow::Continue)
    }

    async fn delete_account(&mut self) -> BankResult<Flow> {
        self.clear_screen()?;
        print_title("Delete Account");

        let Some(id) = self.prompt.ask("Account ID: ").await? else {
            return Ok(Flow::Quit);
        };
        self.accounts().delete_account(&id)?;
        print_success("Account deleted.");
        Ok(Flow::Continue)
    }
}
