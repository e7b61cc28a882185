//! Transaction display formatting
//!
//! Register views for the transaction list and search results.

use crate::config::Settings;
use crate::models::{Money, Transaction};

use super::report::{format_date, format_signed, separator, truncate};

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, settings: &Settings) -> String {
    format!(
        "{:<12} {:<24} {:<20} {:>14} {}",
        format_date(txn.date(), &settings.display_date_format),
        txn.id(),
        txn.category(),
        format_signed(txn.kind().sign(), txn.amount(), &settings.currency_symbol),
        truncate(txn.description(), 40)
    )
}

/// Format a list of transactions as a register with totals
pub fn format_transaction_register(transactions: &[&Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12} {:<24} {:<20} {:>14} {}\n",
        "Date", "ID", "Category", "Amount", "Description"
    ));
    output.push_str(&separator(90));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, settings));
        output.push('\n');
    }

    let symbol = &settings.currency_symbol;
    let (income, expenses) = transactions.iter().fold(
        (Money::zero(), Money::zero()),
        |(income, expenses), t| {
            if t.is_income() {
                (income + t.amount(), expenses)
            } else {
                (income, expenses + t.amount())
            }
        },
    );

    output.push_str(&separator(90));
    output.push('\n');
    output.push_str(&format!(
        "{} transaction(s) | Income: {} | Expenses: {} | Net: {}\n",
        transactions.len(),
        format_signed('+', income, symbol),
        format_signed('-', expenses, symbol),
        net_of(transactions).format_with_symbol(symbol)
    ));

    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id()));
    output.push_str(&format!(
        "Date:        {}\n",
        format_date(txn.date(), &settings.display_date_format)
    ));
    output.push_str(&format!("Type:        {}\n", txn.kind()));
    output.push_str(&format!(
        "Amount:      {}\n",
        format_signed(txn.kind().sign(), txn.amount(), symbol)
    ));
    output.push_str(&format!("Category:    {}\n", txn.category()));
    output.push_str(&format!("Description: {}\n", txn.description()));

    output
}

/// Net effect of `transactions` on the balance
pub fn net_of(transactions: &[&Transaction]) -> Money {
    transactions.iter().map(|t| t.signed_amount()).sum()
}
