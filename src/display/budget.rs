//! Budget display formatting

use crate::config::Settings;
use crate::models::Budget;

use super::report::{format_bar, format_percentage, separator};

/// Format the budget table with a usage bar per row
pub fn format_budget_list(budgets: &[Budget], settings: &Settings) -> String {
    if budgets.is_empty() {
        return "No budgets set.\n".to_string();
    }

    let symbol = &settings.currency_symbol;
    let mut output = String::new();
    output.push_str(&format!(
        "{:<20} {:>12} {:>12} {:>12} {:>8}  {:<10} {}\n",
        "Category", "Spent", "Limit", "Remaining", "Used", "", "Status"
    ));
    output.push_str(&separator(90));
    output.push('\n');

    for budget in budgets {
        let usage = budget.usage_percentage();
        output.push_str(&format!(
            "{:<20} {:>12} {:>12} {:>12} {:>8}  {:<10} {}\n",
            budget.category(),
            budget.current_spending().format_with_symbol(symbol),
            budget.monthly_limit().format_with_symbol(symbol),
            budget.remaining().format_with_symbol(symbol),
            format_percentage(usage),
            format_bar(usage, 100.0, 10),
            status_label(budget)
        ));
    }

    let over = budgets.iter().filter(|b| b.is_over_budget()).count();
    if over > 0 {
        output.push_str(&format!("\n{} budget(s) over the limit\n", over));
    }

    output
}

/// Format a single budget, including how far over it is
pub fn format_budget_details(budget: &Budget, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    let mut output = String::new();

    output.push_str(&format!("Budget:    {}\n", budget.category()));
    output.push_str(&format!(
        "Limit:     {}\n",
        budget.monthly_limit().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Spent:     {}\n",
        budget.current_spending().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Remaining: {}\n",
        budget.remaining().format_with_symbol(symbol)
    ));
    output.push_str(&format!("Status:    {}\n", status_label(budget)));

    if budget.is_over_budget() {
        output.push_str(&format!(
            "You've exceeded this budget by {}\n",
            budget.remaining().abs().format_with_symbol(symbol)
        ));
    }

    output
}

fn status_label(budget: &Budget) -> &'static str {
    if budget.is_over_budget() {
        "OVER BUDGET"
    } else {
        "WITHIN BUDGET"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};

    fn budget(limit: i64, spent: i64) -> Budget {
        Budget::restore(
            Category::parse("food").unwrap(),
            Money::from_cents(limit),
            Money::from_cents(spent),
        )
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(
            format_budget_list(&[], &Settings::default()),
            "No budgets set.\n"
        );
    }

    #[test]
    fn test_list_over_budget() {
        let output = format_budget_list(&[budget(15000, 20000)], &Settings::default());

        assert!(output.contains("FOOD"));
        assert!(output.contains("$200.00"));
        assert!(output.contains("-$50.00"));
        assert!(output.contains("OVER BUDGET"));
        assert!(output.contains("1 budget(s) over the limit"));
    }

    #[test]
    fn test_details_within_budget() {
        let output = format_budget_details(&budget(15000, 5000), &Settings::default());

        assert!(output.contains("Remaining: $100.00"));
        assert!(output.contains("WITHIN BUDGET"));
        assert!(!output.contains("exceeded"));
    }

    #[test]
    fn test_details_over_budget() {
        let output = format_budget_details(&budget(100, 250), &Settings::default());
        assert!(output.contains("You've exceeded this budget by $1.50"));
    }
}
