//! Report CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::error::TallyResult;
use crate::reports::{CashFlowReport, MonthlySummary, SpendingReport};
use crate::services::Ledger;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Totals per category for expenses and income
    Spending {
        /// Show only the top N expense categories
        #[arg(short, long)]
        top: Option<usize>,
    },
    /// Income, expenses and net per month
    Monthly,
    /// Inflow, outflow and savings rate
    CashFlow,
}

/// Handle a report command
pub fn handle_report_command(
    ledger: &Ledger,
    settings: &Settings,
    cmd: ReportCommands,
) -> TallyResult<()> {
    let symbol = &settings.currency_symbol;

    match cmd {
        ReportCommands::Spending { top } => {
            let mut report = SpendingReport::generate(ledger.transactions());
            if let Some(top) = top {
                report.expenses = report.top_expenses(top).to_vec();
            }
            print!("{}", report.format_terminal(symbol));
        }
        ReportCommands::Monthly => {
            print!("{}", MonthlySummary::generate(ledger.transactions()).format_terminal(symbol));
        }
        ReportCommands::CashFlow => {
            print!("{}", CashFlowReport::generate(ledger.transactions()).format_terminal(symbol));
        }
    }

    Ok(())
}
