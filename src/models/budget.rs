//! Budget model
//!
//! A monthly spending limit for one category. `current_spending` is derived
//! from the transaction ledger by the reconciliation engine; a value read
//! from storage is only trusted until the next reconciliation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::codec::{join_fields, split_fields, DecodeError, LineRecord};

use super::category::Category;
use super::money::{Money, MAX_STORED_AMOUNT};

/// A monthly limit for a single category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    category: Category,
    monthly_limit: Money,
    current_spending: Money,
}

impl Budget {
    /// Create a new budget with no recorded spending
    pub fn new(category: Category, monthly_limit: Money) -> Result<Self, BudgetValidationError> {
        validate_limit(monthly_limit)?;
        Ok(Self {
            category,
            monthly_limit,
            current_spending: Money::zero(),
        })
    }

    /// Reconstruct a budget from stored values
    pub fn restore(category: Category, monthly_limit: Money, current_spending: Money) -> Self {
        Self {
            category,
            monthly_limit,
            current_spending,
        }
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn monthly_limit(&self) -> Money {
        self.monthly_limit
    }

    pub fn current_spending(&self) -> Money {
        self.current_spending
    }

    /// Change the monthly limit
    pub fn set_monthly_limit(&mut self, limit: Money) -> Result<(), BudgetValidationError> {
        validate_limit(limit)?;
        self.monthly_limit = limit;
        Ok(())
    }

    pub fn reset_spending(&mut self) {
        self.current_spending = Money::zero();
    }

    pub fn add_spending(&mut self, amount: Money) {
        self.current_spending += amount;
    }

    /// Limit minus spending; negative when over budget
    pub fn remaining(&self) -> Money {
        self.monthly_limit - self.current_spending
    }

    pub fn is_over_budget(&self) -> bool {
        self.current_spending > self.monthly_limit
    }

    /// Spending as a percentage of the limit. A zero limit yields 0.
    pub fn usage_percentage(&self) -> f64 {
        if self.monthly_limit.is_zero() {
            return 0.0;
        }
        self.current_spending.as_f64() / self.monthly_limit.as_f64() * 100.0
    }
}

fn validate_limit(limit: Money) -> Result<(), BudgetValidationError> {
    if limit.is_negative() {
        return Err(BudgetValidationError::NegativeLimit);
    }
    Ok(())
}

impl LineRecord for Budget {
    const RECORD_NAME: &'static str = "budget";
    const FIELD_COUNT: usize = 3;

    fn encode(&self) -> String {
        join_fields(&[
            self.category.as_str().to_string(),
            self.monthly_limit.to_plain_string(),
            self.current_spending.to_plain_string(),
        ])
    }

    fn decode(line: &str) -> Result<Self, DecodeError> {
        let fields = split_fields(line, Self::FIELD_COUNT)?;

        let category =
            Category::parse(&fields[0]).map_err(|_| DecodeError::Category(fields[0].clone()))?;

        let limit = Money::parse(&fields[1])
            .ok()
            .filter(|m| !m.is_negative() && *m <= MAX_STORED_AMOUNT)
            .ok_or_else(|| DecodeError::Amount(fields[1].clone()))?;

        let spending =
            Money::parse(&fields[2]).map_err(|_| DecodeError::Amount(fields[2].clone()))?;

        Ok(Self::restore(category, limit, spending))
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.is_over_budget() {
            "OVER BUDGET"
        } else {
            "WITHIN BUDGET"
        };
        write!(
            f,
            "{:<15} | {:<9} / {:<9} | {:<9} remaining | {}",
            self.category, self.current_spending, self.monthly_limit, self.remaining(), status
        )
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NegativeLimit,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeLimit => write!(f, "Budget limit cannot be negative"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
