//! Transaction CLI commands
//!
//! Implements CLI commands for recording, listing, searching and deleting
//! transactions.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::transaction::{format_transaction_details, format_transaction_register};
use crate::error::{TallyError, TallyResult};
use crate::models::Transaction;
use crate::reports::BalanceSummary;
use crate::services::validation::{parse_amount, parse_category, parse_kind};
use crate::services::Ledger;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction dated today
    Add {
        /// "income" or "expense"
        kind: String,
        /// Amount (e.g., "50" or "49.99")
        amount: String,
        /// Category name (stored in upper case)
        category: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// List transactions
    List {
        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,
        /// Show only the most recent N transactions
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Search category and description, ignoring case
    Search {
        /// Text to look for
        term: String,
    },
    /// Show transaction details
    Show {
        /// Transaction ID
        id: String,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
        /// Skip the confirmation step
        #[arg(short, long)]
        force: bool,
    },
    /// Show total income, expenses and balance
    Balance,
}

/// Handle a transaction command
pub fn handle_transaction_command(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: TransactionCommands,
) -> TallyResult<()> {
    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            description,
        } => {
            let kind = parse_kind(&kind)?;
            let amount = parse_amount(&amount, settings)?;
            let category = parse_category(&category)?;

            let txn = Transaction::new(kind, amount, category, &description)
                .map_err(|e| TallyError::Validation(e.to_string()))?;
            let details = format_transaction_details(&txn, settings);
            let category = txn.category().clone();
            let is_expense = txn.is_expense();
            ledger.add_transaction(txn)?;

            println!("Transaction added successfully!");
            print!("{}", details);

            if let Some(budget) = ledger.budget(&category).filter(|_| is_expense) {
                if budget.is_over_budget() {
                    println!();
                    println!(
                        "Warning: {} is over budget by {}",
                        budget.category(),
                        budget
                            .remaining()
                            .abs()
                            .format_with_symbol(&settings.currency_symbol)
                    );
                }
            }
        }

        TransactionCommands::List { category, limit } => {
            let category = category.as_deref().map(parse_category).transpose()?;

            let mut transactions: Vec<&Transaction> = ledger
                .transactions()
                .iter()
                .filter(|t| category.as_ref().map_or(true, |c| t.category() == c))
                .collect();

            if let Some(limit) = limit {
                let skip = transactions.len().saturating_sub(limit);
                transactions = transactions.split_off(skip);
            }

            print!("{}", format_transaction_register(&transactions, settings));
        }

        TransactionCommands::Search { term } => {
            let term = term.trim();
            if term.is_empty() {
                return Err(TallyError::Validation("Search term cannot be empty".into()));
            }

            let results = ledger.search(term);
            if results.is_empty() {
                println!("No transactions found matching: {}", term);
            } else {
                println!("Search results for '{}':", term);
                print!("{}", format_transaction_register(&results, settings));
            }
        }

        TransactionCommands::Show { id } => {
            let txn = ledger
                .find(&id)
                .ok_or_else(|| TallyError::transaction_not_found(id.as_str()))?;
            print!("{}", format_transaction_details(txn, settings));
        }

        TransactionCommands::Delete { id, force } => {
            let txn = ledger
                .find(&id)
                .ok_or_else(|| TallyError::transaction_not_found(id.as_str()))?;

            if !force {
                println!("About to delete transaction:");
                print!("{}", format_transaction_details(txn, settings));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let removed = ledger.delete_transaction(&id)?;
            println!("Deleted transaction: {}", removed.id());
        }

        TransactionCommands::Balance => {
            let summary = BalanceSummary::generate(ledger.transactions());
            print!("{}", summary.format_terminal(&settings.currency_symbol));
        }
    }

    Ok(())
}
