//! Budget reconciliation
//!
//! Keeps each budget's `current_spending` equal to the sum of EXPENSE
//! transactions in its category. There are two entry points:
//!
//! - [`full_recompute`] rebuilds every budget from the whole ledger. It must
//!   run after any transaction is removed, since there is no way to subtract.
//! - [`apply_delta`] adds a single new expense to its budget in O(1) budgets
//!   touched, for the insert path.
//!
//! Expenses whose category has no budget are ignored here.

use std::collections::HashMap;

use tracing::trace;

use crate::models::{Budget, Category, Money, Transaction};

/// Reset every budget to zero and re-add all expenses
///
/// The result does not depend on transaction order, and running it twice in a
/// row leaves the budgets unchanged.
pub fn full_recompute(transactions: &[Transaction], budgets: &mut [Budget]) {
    for budget in budgets.iter_mut() {
        budget.reset_spending();
    }

    let index: HashMap<Category, usize> = budgets
        .iter()
        .enumerate()
        .map(|(i, b)| (b.category().clone(), i))
        .collect();

    for txn in transactions.iter().filter(|t| t.is_expense()) {
        if let Some(&i) = index.get(txn.category()) {
            budgets[i].add_spending(txn.amount());
        }
    }

    trace!(
        "Recomputed {} budget(s) from {} transaction(s)",
        budgets.len(),
        transactions.len()
    );
}

/// Add `amount` to the budget for `category`, if there is one
///
/// Returns true when a budget was updated.
pub fn apply_delta(budgets: &mut [Budget], category: &Category, amount: Money) -> bool {
    match budgets.iter_mut().find(|b| b.category() == category) {
        Some(budget) => {
            budget.add_spending(amount);
            true
        }
        None => false,
    }
}

/// Sum of EXPENSE amounts in `category`
pub fn expected_spending(transactions: &[Transaction], category: &Category) -> Money {
    transactions
        .iter()
        .filter(|t| t.is_expense() && t.category() == category)
        .map(Transaction::amount)
        .sum()
}

/// True if every budget matches the ledger
pub fn is_consistent(transactions: &[Transaction], budgets: &[Budget]) -> bool {
    budgets
        .iter()
        .all(|b| b.current_spending() == expected_spending(transactions, b.category()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use chrono::NaiveDate;

    fn txn(kind: TransactionKind, cents: i64, category: &str) -> Transaction {
        Transaction::new_dated(
            kind,
            Money::from_cents(cents),
            Category::parse(category).unwrap(),
            "",
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        )
        .unwrap()
    }

    fn budget(category: &str, limit_cents: i64) -> Budget {
        Budget::new(Category::parse(category).unwrap(), Money::from_cents(limit_cents)).unwrap()
    }

    #[test]
    fn test_salary_and_food_scenario() {
        let transactions = vec![
            txn(TransactionKind::Income, 100000, "salary"),
            txn(TransactionKind::Expense, 20000, "food"),
        ];
        let mut budgets = vec![budget("food", 15000)];

        full_recompute(&transactions, &mut budgets);

        let food = &budgets[0];
        assert_eq!(food.current_spending(), Money::from_cents(20000));
        assert!(food.is_over_budget());
        assert_eq!(food.remaining(), Money::from_cents(-5000));
    }

    #[test]
    fn test_income_is_ignored() {
        let transactions = vec![txn(TransactionKind::Income, 5000, "food")];
        let mut budgets = vec![budget("food", 15000)];

        full_recompute(&transactions, &mut budgets);
        assert_eq!(budgets[0].current_spending(), Money::zero());
    }

    #[test]
    fn test_unbudgeted_categories_are_ignored() {
        let transactions = vec![
            txn(TransactionKind::Expense, 700, "travel"),
            txn(TransactionKind::Expense, 300, "food"),
        ];
        let mut budgets = vec![budget("food", 1000), budget("rent", 50000)];

        full_recompute(&transactions, &mut budgets);

        assert_eq!(budgets[0].current_spending(), Money::from_cents(300));
        assert_eq!(budgets[1].current_spending(), Money::zero());
    }

    #[test]
    fn test_recompute_discards_stale_spending() {
        let mut stale = budget("food", 1000);
        stale.add_spending(Money::from_cents(99999));
        let mut budgets = vec![stale];

        full_recompute(&[txn(TransactionKind::Expense, 250, "food")], &mut budgets);
        assert_eq!(budgets[0].current_spending(), Money::from_cents(250));
    }

    #[test]
    fn test_recompute_is_idempotent_and_order_independent() {
        let mut transactions = vec![
            txn(TransactionKind::Expense, 100, "food"),
            txn(TransactionKind::Expense, 250, "rent"),
            txn(TransactionKind::Income, 900, "food"),
            txn(TransactionKind::Expense, 75, "food"),
        ];
        let mut budgets = vec![budget("food", 1000), budget("rent", 1000)];

        full_recompute(&transactions, &mut budgets);
        let first = budgets.clone();
        full_recompute(&transactions, &mut budgets);
        assert_eq!(budgets, first);

        transactions.reverse();
        full_recompute(&transactions, &mut budgets);
        assert_eq!(budgets, first);
        assert!(is_consistent(&transactions, &budgets));
    }

    #[test]
    fn test_apply_delta_matches_full_recompute() {
        let mut transactions = vec![txn(TransactionKind::Expense, 100, "food")];
        let mut budgets = vec![budget("food", 1000)];
        full_recompute(&transactions, &mut budgets);

        let added = txn(TransactionKind::Expense, 425, "food");
        assert!(apply_delta(&mut budgets, added.category(), added.amount()));
        transactions.push(added);

        assert_eq!(budgets[0].current_spending(), Money::from_cents(525));
        assert!(is_consistent(&transactions, &budgets));
    }

    #[test]
    fn test_apply_delta_without_budget_is_noop() {
        let mut budgets = vec![budget("food", 1000)];
        let travel = Category::parse("travel").unwrap();

        assert!(!apply_delta(&mut budgets, &travel, Money::from_cents(500)));
        assert_eq!(budgets[0].current_spending(), Money::zero());
    }

    #[test]
    fn test_empty_inputs() {
        let mut budgets: Vec<Budget> = Vec::new();
        full_recompute(&[], &mut budgets);
        assert!(budgets.is_empty());
    }
}
