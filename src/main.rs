use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tally::cli::{
    handle_budget_command, handle_config_command, handle_report_command,
    handle_transaction_command, BudgetCommands, ConfigCommands, ReportCommands,
    TransactionCommands,
};
use tally::config::{Settings, TallyPaths};
use tally::services::Ledger;
use tally::storage::Storage;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Terminal personal bookkeeping",
    long_about = "Tally records income and expenses, tracks monthly budgets per \
                  category, and reports on spending and cash flow. Every change \
                  is saved immediately."
)]
struct Cli {
    /// Base directory for settings and data files
    #[arg(long, global = true, env = "TALLY_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Financial reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Show or initialize configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load both data files, reporting anything that had to be skipped
fn open_ledger(paths: TallyPaths) -> Result<Ledger> {
    let storage = Storage::new(paths)?;
    let ledger = Ledger::open(storage);

    let summary = ledger.load_summary();
    if summary.had_problems() {
        eprintln!(
            "Warning: skipped {} transaction line(s) and {} budget line(s) that could not be read",
            summary.transactions_skipped, summary.budgets_skipped
        );
        for error in &summary.read_errors {
            eprintln!("Warning: {}", error);
        }
    }

    Ok(ledger)
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => TallyPaths::with_base_dir(dir),
        None => TallyPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    let command = match cli.command {
        Some(command) => command,
        None => {
            println!("Tally - terminal personal bookkeeping");
            println!();
            println!("Run 'tally --help' for usage information.");
            return Ok(());
        }
    };

    match command {
        Commands::Config(cmd) => handle_config_command(&paths, &settings, cmd)?,
        Commands::Transaction(cmd) => {
            let mut ledger = open_ledger(paths)?;
            handle_transaction_command(&mut ledger, &settings, cmd)?;
        }
        Commands::Budget(cmd) => {
            let mut ledger = open_ledger(paths)?;
            handle_budget_command(&mut ledger, &settings, cmd)?;
        }
        Commands::Report(cmd) => {
            let ledger = open_ledger(paths)?;
            handle_report_command(&ledger, &settings, cmd)?;
        }
    }

    Ok(())
}
