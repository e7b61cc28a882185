//! Reports module for Tally
//!
//! Read-only views computed from the loaded ledger: balance, spending by
//! category, monthly totals, cash flow and budget status.

pub mod balance;
pub mod budget_status;
pub mod cash_flow;
pub mod monthly;
pub mod spending;

pub use balance::BalanceSummary;
pub use budget_status::{BudgetStatus, BudgetStatusReport, BudgetStatusRow};
pub use cash_flow::{CashFlowRating, CashFlowReport};
pub use monthly::{MonthTotals, MonthlySummary};
pub use spending::{CategoryTotal, SpendingReport};
