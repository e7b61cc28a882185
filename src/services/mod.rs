//! Service layer for Tally
//!
//! Business logic on top of the storage layer: keeping budgets reconciled
//! with the ledger, the session that owns the loaded records, and user-input
//! validation.

pub mod ledger;
pub mod reconciliation;
pub mod validation;

pub use ledger::{BudgetChange, Ledger, LoadSummary};
pub use reconciliation::{apply_delta, full_recompute, is_consistent};
