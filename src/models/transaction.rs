//! Transaction model
//!
//! Represents a single income or expense entry. Transactions are never
//! edited after creation; they are only added or deleted.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::codec::{join_fields, split_fields, DecodeError, LineRecord};

use super::category::Category;
use super::ids::TransactionId;
use super::money::{Money, MAX_STORED_AMOUNT};

/// Description used when the user leaves it blank
pub const DEFAULT_DESCRIPTION: &str = "No description";

/// Date format used in stored lines
pub const STORED_DATE_FORMAT: &str = "%Y-%m-%d";

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Stored spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
        }
    }

    /// Sign shown next to amounts in listings
    pub fn sign(&self) -> char {
        match self {
            Self::Income => '+',
            Self::Expense => '-',
        }
    }

    fn from_stored(s: &str) -> Option<Self> {
        match s {
            "INCOME" => Some(Self::Income),
            "EXPENSE" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = TransactionValidationError;

    /// Case-insensitive parse for user input
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_stored(&s.trim().to_uppercase())
            .ok_or_else(|| TransactionValidationError::UnknownKind(s.to_string()))
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    kind: TransactionKind,
    amount: Money,
    category: Category,
    description: String,
    date: NaiveDate,
}

impl Transaction {
    /// Create a new transaction dated today
    pub fn new(
        kind: TransactionKind,
        amount: Money,
        category: Category,
        description: &str,
    ) -> Result<Self, TransactionValidationError> {
        Self::new_dated(kind, amount, category, description, Local::now().date_naive())
    }

    /// Create a new transaction on an explicit date
    ///
    /// Generates a fresh id and substitutes [`DEFAULT_DESCRIPTION`] for a
    /// blank description.
    pub fn new_dated(
        kind: TransactionKind,
        amount: Money,
        category: Category,
        description: &str,
        date: NaiveDate,
    ) -> Result<Self, TransactionValidationError> {
        if !amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(amount));
        }

        let description = description.trim();
        let description = if description.is_empty() {
            DEFAULT_DESCRIPTION.to_string()
        } else {
            description.to_string()
        };

        Ok(Self {
            id: TransactionId::generate(),
            kind,
            amount,
            category,
            description,
            date,
        })
    }

    /// Reconstruct a transaction from stored values, trusting every field
    pub fn restore(
        id: TransactionId,
        kind: TransactionKind,
        amount: Money,
        category: Category,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            kind,
            amount,
            category,
            description: description.into(),
            date,
        }
    }

    pub fn id(&self) -> &TransactionId {
        &self.id
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Amount with sign applied: positive for income, negative for expense
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    /// Case-insensitive substring match on category or description
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.category.as_str().to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }
}

impl LineRecord for Transaction {
    const RECORD_NAME: &'static str = "transaction";
    const FIELD_COUNT: usize = 6;

    fn encode(&self) -> String {
        join_fields(&[
            self.id.as_str().to_string(),
            self.kind.as_str().to_string(),
            self.amount.to_plain_string(),
            self.category.as_str().to_string(),
            self.description.clone(),
            self.date.format(STORED_DATE_FORMAT).to_string(),
        ])
    }

    fn decode(line: &str) -> Result<Self, DecodeError> {
        let fields = split_fields(line, Self::FIELD_COUNT)?;

        let kind = TransactionKind::from_stored(&fields[1])
            .ok_or_else(|| DecodeError::Kind(fields[1].clone()))?;

        let amount = Money::parse(&fields[2])
            .ok()
            .filter(|m| m.is_positive() && *m <= MAX_STORED_AMOUNT)
            .ok_or_else(|| DecodeError::Amount(fields[2].clone()))?;

        let category =
            Category::parse(&fields[3]).map_err(|_| DecodeError::Category(fields[3].clone()))?;

        let date = NaiveDate::parse_from_str(&fields[5], STORED_DATE_FORMAT)
            .map_err(|_| DecodeError::Date(fields[5].clone()))?;

        Ok(Self::restore(
            TransactionId::from_stored(fields[0].as_str()),
            kind,
            amount,
            category,
            fields[4].as_str(),
            date,
        ))
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {:<10} | {}{:<8} | {}",
            self.date.format(STORED_DATE_FORMAT),
            self.id.short(),
            self.category,
            self.kind.sign(),
            self.amount,
            self.description
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    UnknownKind(String),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be positive (got {})", amount)
            }
            Self::UnknownKind(s) => {
                write!(f, "Unknown transaction type '{}': use INCOME or EXPENSE", s)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}
