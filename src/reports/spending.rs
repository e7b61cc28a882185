//! Spending Report
//!
//! Totals per category, split into expenses and income. Each list is sorted
//! by amount, largest first; equal amounts are ordered by category name.

use std::collections::HashMap;

use crate::models::{Category, Money, Transaction};

/// Total for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money,
    pub transaction_count: usize,
}

impl CategoryTotal {
    /// Share of `overall`, as a percentage
    pub fn percentage_of(&self, overall: Money) -> f64 {
        if overall.is_zero() {
            0.0
        } else {
            self.total.as_f64() / overall.as_f64() * 100.0
        }
    }
}

/// Spending Report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpendingReport {
    pub expenses: Vec<CategoryTotal>,
    pub income: Vec<CategoryTotal>,
    pub total_expenses: Money,
    pub total_income: Money,
}

impl SpendingReport {
    pub fn generate(transactions: &[Transaction]) -> Self {
        let mut expenses: HashMap<&Category, (Money, usize)> = HashMap::new();
        let mut income: HashMap<&Category, (Money, usize)> = HashMap::new();

        for txn in transactions {
            let bucket = if txn.is_expense() {
                &mut expenses
            } else {
                &mut income
            };
            let entry = bucket
                .entry(txn.category())
                .or_insert((Money::zero(), 0));
            entry.0 += txn.amount();
            entry.1 += 1;
        }

        let expenses = sorted_totals(expenses);
        let income = sorted_totals(income);

        Self {
            total_expenses: expenses.iter().map(|c| c.total).sum(),
            total_income: income.iter().map(|c| c.total).sum(),
            expenses,
            income,
        }
    }

    /// Get top expense categories
    pub fn top_expenses(&self, limit: usize) -> &[CategoryTotal] {
        &self.expenses[..limit.min(self.expenses.len())]
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Spending by Category\n");
        output.push_str(&"=".repeat(50));
        output.push('\n');
        format_section(&mut output, &self.expenses, self.total_expenses, symbol, "expense");

        output.push_str("\nIncome by Category\n");
        output.push_str(&"=".repeat(50));
        output.push('\n');
        format_section(&mut output, &self.income, self.total_income, symbol, "income");

        output
    }
}

fn sorted_totals(totals: HashMap<&Category, (Money, usize)>) -> Vec<CategoryTotal> {
    let mut rows: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(category, (total, transaction_count))| CategoryTotal {
            category: category.clone(),
            total,
            transaction_count,
        })
        .collect();

    rows.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));
    rows
}

fn format_section(
    output: &mut String,
    rows: &[CategoryTotal],
    overall: Money,
    symbol: &str,
    label: &str,
) {
    if rows.is_empty() {
        output.push_str(&format!("No {} data available.\n", label));
        return;
    }

    output.push_str(&format!(
        "{:<20} {:>12} {:>6} {:>7}\n",
        "Category", "Amount", "Count", "%"
    ));
    output.push_str(&"-".repeat(50));
    output.push('\n');

    for row in rows {
        output.push_str(&format!(
            "{:<20} {:>12} {:>6} {:>6.1}%\n",
            row.category,
            row.total.format_with_symbol(symbol),
            row.transaction_count,
            row.percentage_of(overall)
        ));
    }

    output.push_str(&"-".repeat(50));
    output.push('\n');
    output.push_str(&format!(
        "{:<20} {:>12}\n",
        "TOTAL",
        overall.format_with_symbol(symbol)
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;

    fn txn(kind: TransactionKind, cents: i64, category: &str) -> Transaction {
        Transaction::new(
            kind,
            Money::from_cents(cents),
            Category::parse(category).unwrap(),
            "",
        )
        .unwrap()
    }

    #[test]
    fn test_generate_spending_report() {
        let report = SpendingReport::generate(&[
            txn(TransactionKind::Expense, 5000, "food"),
            txn(TransactionKind::Expense, 3000, "gas"),
            txn(TransactionKind::Expense, 2500, "food"),
            txn(TransactionKind::Income, 100000, "salary"),
        ]);

        assert_eq!(report.expenses.len(), 2);
        assert_eq!(report.expenses[0].category.as_str(), "FOOD");
        assert_eq!(report.expenses[0].total, Money::from_cents(7500));
        assert_eq!(report.expenses[0].transaction_count, 2);
        assert_eq!(report.expenses[1].category.as_str(), "GAS");
        assert_eq!(report.total_expenses, Money::from_cents(10500));

        assert_eq!(report.income.len(), 1);
        assert_eq!(report.total_income, Money::from_cents(100000));
    }

    #[test]
    fn test_ties_ordered_by_name() {
        let report = SpendingReport::generate(&[
            txn(TransactionKind::Expense, 100, "zoo"),
            txn(TransactionKind::Expense, 100, "art"),
        ]);

        assert_eq!(report.expenses[0].category.as_str(), "ART");
        assert_eq!(report.expenses[1].category.as_str(), "ZOO");
    }

    #[test]
    fn test_percentages_and_top() {
        let report = SpendingReport::generate(&[
            txn(TransactionKind::Expense, 7500, "food"),
            txn(TransactionKind::Expense, 2500, "gas"),
        ]);

        let top = report.top_expenses(1);
        assert_eq!(top.len(), 1);
        assert!((top[0].percentage_of(report.total_expenses) - 75.0).abs() < 1e-9);
        assert_eq!(report.top_expenses(10).len(), 2);
    }

    #[test]
    fn test_format_empty() {
        let output = SpendingReport::generate(&[]).format_terminal("$");
        assert!(output.contains("No expense data available."));
        assert!(output.contains("No income data available."));
    }
}
