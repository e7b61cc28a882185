//! Budget CLI commands
//!
//! Implements CLI commands for setting, listing and removing monthly
//! category budgets.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::budget::{format_budget_details, format_budget_list};
use crate::error::{TallyError, TallyResult};
use crate::reports::BudgetStatusReport;
use crate::services::validation::{parse_category, parse_limit};
use crate::services::{BudgetChange, Ledger};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Create a budget or change its monthly limit
    Set {
        /// Category name
        category: String,
        /// Monthly limit (e.g., "150" or "150.00")
        limit: String,
    },
    /// List all budgets with current spending
    List,
    /// Show one budget
    Show {
        /// Category name
        category: String,
    },
    /// Remove a budget
    Remove {
        /// Category name
        category: String,
    },
    /// Compare budgets against actual spending
    Status,
}

/// Handle a budget command
pub fn handle_budget_command(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: BudgetCommands,
) -> TallyResult<()> {
    match cmd {
        BudgetCommands::Set { category, limit } => {
            let category = parse_category(&category)?;
            let limit = parse_limit(&limit)?;

            match ledger.set_budget(category.clone(), limit)? {
                BudgetChange::Created => println!("Budget created for {}", category),
                BudgetChange::Updated => println!("Budget updated for {}", category),
            }

            if let Some(budget) = ledger.budget(&category) {
                print!("{}", format_budget_details(budget, settings));
            }
        }

        BudgetCommands::List => {
            print!("{}", format_budget_list(ledger.budgets(), settings));
        }

        BudgetCommands::Show { category } => {
            let category = parse_category(&category)?;
            let budget = ledger
                .budget(&category)
                .ok_or_else(|| TallyError::budget_not_found(category.as_str()))?;
            print!("{}", format_budget_details(budget, settings));
        }

        BudgetCommands::Remove { category } => {
            let category = parse_category(&category)?;
            let removed = ledger.remove_budget(&category)?;
            println!("Budget for {} removed", removed.category());
        }

        BudgetCommands::Status => {
            let report =
                BudgetStatusReport::generate(ledger.budgets(), settings.budget_warning_percent);
            print!("{}", report.format_terminal(&settings.currency_symbol));
        }
    }

    Ok(())
}
