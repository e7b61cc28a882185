//! Core data models for Tally
//!
//! Transactions, budgets, and the value types they are built from.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;

pub use budget::{Budget, BudgetValidationError};
pub use category::{Category, CategoryValidationError, MAX_CATEGORY_LEN};
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError, MAX_STORED_AMOUNT};
pub use transaction::{
    Transaction, TransactionKind, TransactionValidationError, DEFAULT_DESCRIPTION,
    STORED_DATE_FORMAT,
};
