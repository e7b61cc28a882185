//! Budget vs actual
//!
//! One row per budget with its planned limit, reconciled spending, and a
//! status derived from usage.

use std::fmt;

use crate::models::{Budget, Category, Money};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    Good,
    Warning,
    Over,
}

impl BudgetStatus {
    /// OVER above 100%, WARNING above `warning_percent`, otherwise GOOD
    pub fn from_usage(usage_percent: f64, warning_percent: f64) -> Self {
        if usage_percent > 100.0 {
            Self::Over
        } else if usage_percent > warning_percent {
            Self::Warning
        } else {
            Self::Good
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Good => "GOOD",
            Self::Warning => "WARNING",
            Self::Over => "OVER",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatusRow {
    pub category: Category,
    pub planned: Money,
    pub actual: Money,
    pub usage_percent: f64,
    pub status: BudgetStatus,
}

impl BudgetStatusRow {
    /// Planned minus actual; negative when over budget
    pub fn variance(&self) -> Money {
        self.planned - self.actual
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatusReport {
    pub rows: Vec<BudgetStatusRow>,
    pub warning_percent: f64,
}

impl BudgetStatusReport {
    /// Build the report from budgets that have already been reconciled
    pub fn generate(budgets: &[Budget], warning_percent: f64) -> Self {
        let rows = budgets
            .iter()
            .map(|budget| {
                let usage_percent = budget.usage_percentage();
                BudgetStatusRow {
                    category: budget.category().clone(),
                    planned: budget.monthly_limit(),
                    actual: budget.current_spending(),
                    usage_percent,
                    status: BudgetStatus::from_usage(usage_percent, warning_percent),
                }
            })
            .collect();

        Self {
            rows,
            warning_percent,
        }
    }

    pub fn count(&self, status: BudgetStatus) -> usize {
        self.rows.iter().filter(|r| r.status == status).count()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Budget vs Actual Spending\n");
        output.push_str(&"=".repeat(50));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No budgets set. Create a budget first!\n");
            return output;
        }

        for row in &self.rows {
            output.push_str(&format!("{}:\n", row.category));
            output.push_str(&format!(
                "   Planned: {} | Actual: {} | Variance: {}\n",
                row.planned.format_with_symbol(symbol),
                row.actual.format_with_symbol(symbol),
                row.variance().format_with_symbol(symbol)
            ));
            output.push_str(&format!(
                "   Usage: {:.1}% ({})\n\n",
                row.usage_percent, row.status
            ));
        }

        output.push_str(&format!(
            "{} good, {} warning, {} over\n",
            self.count(BudgetStatus::Good),
            self.count(BudgetStatus::Warning),
            self.count(BudgetStatus::Over)
        ));

        output
    }
}
