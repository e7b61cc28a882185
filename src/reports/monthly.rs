//! Monthly summary
//!
//! Income, expenses and net per calendar month, oldest month first.

use std::collections::BTreeMap;

use chrono::Datelike;

use crate::models::{Money, Transaction};

/// Totals for one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthTotals {
    pub year: i32,
    pub month: u32,
    pub income: Money,
    pub expenses: Money,
}

impl MonthTotals {
    pub fn net(&self) -> Money {
        self.income - self.expenses
    }

    /// `YYYY-MM`
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySummary {
    pub months: Vec<MonthTotals>,
}

impl MonthlySummary {
    pub fn generate(transactions: &[Transaction]) -> Self {
        let mut by_month: BTreeMap<(i32, u32), (Money, Money)> = BTreeMap::new();

        for txn in transactions {
            let date = txn.date();
            let entry = by_month
                .entry((date.year(), date.month()))
                .or_insert((Money::zero(), Money::zero()));
            if txn.is_income() {
                entry.0 += txn.amount();
            } else {
                entry.1 += txn.amount();
            }
        }

        let months = by_month
            .into_iter()
            .map(|((year, month), (income, expenses))| MonthTotals {
                year,
                month,
                income,
                expenses,
            })
            .collect();

        Self { months }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Monthly Summary\n");
        output.push_str(&"=".repeat(50));
        output.push('\n');

        if self.months.is_empty() {
            output.push_str("No transaction data available.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<8} {:>13} {:>13} {:>13}\n",
            "Month", "Income", "Expenses", "Net"
        ));
        output.push_str(&"-".repeat(50));
        output.push('\n');

        for month in &self.months {
            output.push_str(&format!(
                "{:<8} {:>13} {:>13} {:>13}\n",
                month.label(),
                month.income.format_with_symbol(symbol),
                month.expenses.format_with_symbol(symbol),
                month.net().format_with_symbol(symbol)
            ));
        }

        output
    }
}
