//! User input validation
//!
//! Turns raw command-line strings into model values. Every failure becomes a
//! [`TallyError::Validation`] so nothing invalid reaches the ledger.

use crate::config::Settings;
use crate::error::{TallyError, TallyResult};
use crate::models::{Category, Money, TransactionKind};

/// Parse a transaction amount: positive and no larger than the configured cap
pub fn parse_amount(input: &str, settings: &Settings) -> TallyResult<Money> {
    let amount = Money::parse(input)
        .map_err(|e| TallyError::Validation(format!("Please enter a valid amount ({})", e)))?;

    if !amount.is_positive() {
        return Err(TallyError::Validation("Amount must be positive".into()));
    }

    if amount > settings.max_transaction_amount {
        return Err(TallyError::Validation(format!(
            "Amount too large (max: {})",
            settings
                .max_transaction_amount
                .format_with_symbol(&settings.currency_symbol)
        )));
    }

    Ok(amount)
}

/// Parse a monthly budget limit: zero or more
pub fn parse_limit(input: &str) -> TallyResult<Money> {
    let limit = Money::parse(input).map_err(|e| {
        TallyError::Validation(format!("Please enter a valid number for budget ({})", e))
    })?;

    if limit.is_negative() {
        return Err(TallyError::Validation(
            "Budget limit cannot be negative".into(),
        ));
    }

    Ok(limit)
}

pub fn parse_category(input: &str) -> TallyResult<Category> {
    Category::parse(input).map_err(|e| TallyError::Validation(e.to_string()))
}

pub fn parse_kind(input: &str) -> TallyResult<TransactionKind> {
    input
        .parse()
        .map_err(|e: crate::models::TransactionValidationError| {
            TallyError::Validation(e.to_string())
        })
}
