//! Display formatting for terminal output
//!
//! Turns transactions and budgets into the tables printed by the CLI.
//! Report bodies format themselves; this module holds the list views and
//! shared helpers.

pub mod budget;
pub mod report;
pub mod transaction;

pub use budget::{format_budget_details, format_budget_list};
pub use transaction::{format_transaction_details, format_transaction_register};
