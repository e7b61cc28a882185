//! Balance summary
//!
//! Income minus expenses over the whole ledger.

use crate::models::{Money, Transaction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceSummary {
    pub total_income: Money,
    pub total_expenses: Money,
    pub transaction_count: usize,
}

impl BalanceSummary {
    pub fn generate(transactions: &[Transaction]) -> Self {
        let mut summary = Self {
            total_income: Money::zero(),
            total_expenses: Money::zero(),
            transaction_count: transactions.len(),
        };

        for txn in transactions {
            if txn.is_income() {
                summary.total_income += txn.amount();
            } else {
                summary.total_expenses += txn.amount();
            }
        }

        summary
    }

    pub fn net_balance(&self) -> Money {
        self.total_income - self.total_expenses
    }

    pub fn is_negative(&self) -> bool {
        self.net_balance().is_negative()
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Current Financial Summary\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "Total Income:    +{}\n",
            self.total_income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Total Expenses:  -{}\n",
            self.total_expenses.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Current Balance:  {}\n",
            self.net_balance().format_with_symbol(symbol)
        ));

        if self.is_negative() {
            output.push_str("\nWarning: You have a negative balance!\n");
        }

        output
    }
}
