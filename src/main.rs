use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bankcli::cli::{
    handle_account_command, handle_transfer_command, run_shell, AccountCommands, TransferArgs,
};
use bankcli::config::{BankPaths, Settings};
use bankcli::storage::LedgerStore;

#[derive(Parser)]
#[command(
    name = "bankcli",
    version,
    about = "Terminal banking ledger",
    long_about = "bankcli keeps a small ledger of bank accounts in a JSON file. \
                  Run it without a command for the interactive menu, or use the \
                  one-shot commands below from scripts."
)]
struct Cli {
    /// Directory holding bank-data.json and bank-settings.json
    #[arg(long, global = true, env = "BANKCLI_HOME")]
    home: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (default)
    Shell,

    #[command(flatten)]
    Account(AccountCommands),

    /// Move money between two accounts
    Transfer(TransferArgs),

    /// Show current configuration and paths
    Config {
        /// Write the effective settings to bank-settings.json
        #[arg(long)]
        write: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = match cli.home {
        Some(dir) => BankPaths::with_base_dir(dir),
        None => BankPaths::new()?,
    };
    paths.ensure_directories()?;
    let settings = Settings::load_or_default(&paths)?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let store = LedgerStore::open(paths.data_file());
            run_shell(&store, &settings).await?;
        }
        Commands::Account(cmd) => {
            let store = LedgerStore::open(paths.data_file());
            let mutating = cmd.is_mutating();
            let result = handle_account_command(&store, &settings, cmd);
            if mutating {
                store.flush().await?;
            }
            result?;
        }
        Commands::Transfer(args) => {
            let store = LedgerStore::open(paths.data_file());
            let result = handle_transfer_command(&store, &settings, args);
            store.flush().await?;
            result?;
        }
        Commands::Config { write } => {
            if write {
                settings.save(&paths)?;
                println!("Wrote {}", paths.settings_file().display());
                println!();
            }
            println!("bankcli Configuration");
            println!("=====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data file:      {}", paths.data_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "bankcli=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
