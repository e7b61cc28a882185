//! Category labels
//!
//! A category is a free-text label shared by transactions and budgets. It is
//! always held upper-cased so that matching is case-insensitive.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum category length in characters
pub const MAX_CATEGORY_LEN: usize = 20;

/// Characters a user-supplied category may not contain
const FORBIDDEN_CHARS: [char; 2] = [',', ';'];

/// Upper-cased category label
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Validate and normalize a category, from user input or a stored line
    pub fn parse(input: &str) -> Result<Self, CategoryValidationError> {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        let len = trimmed.chars().count();
        if len > MAX_CATEGORY_LEN {
            return Err(CategoryValidationError::NameTooLong(len));
        }

        if let Some(c) = trimmed.chars().find(|c| FORBIDDEN_CHARS.contains(c)) {
            return Err(CategoryValidationError::ForbiddenChar(c));
        }

        Ok(Self(trimmed.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    ForbiddenChar(char),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category cannot be empty"),
            Self::NameTooLong(len) => write!(
                f,
                "Category too long ({} characters, max {})",
                len, MAX_CATEGORY_LEN
            ),
            Self::ForbiddenChar(c) => write!(f, "Category cannot contain '{}'", c),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
