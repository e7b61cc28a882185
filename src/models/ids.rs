//! Transaction identifiers
//!
//! Ids are generated once from the creation timestamp plus a random suffix
//! and never reassigned. Ids read back from storage are trusted verbatim.

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

const ID_PREFIX: &str = "TXN_";

/// Number of characters shown by [`TransactionId::short`]
const SHORT_LEN: usize = 8;

/// Identifier of a single transaction
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Create a new id of the form `TXN_<epoch millis>_<0..999>`
    pub fn generate() -> Self {
        let millis = Utc::now().timestamp_millis();
        let suffix: u16 = rand::thread_rng().gen_range(0..1000);
        Self(format!("{}{}_{}", ID_PREFIX, millis, suffix))
    }

    /// Wrap an id read back from storage
    pub fn from_stored(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Truncated form for tabular display
    pub fn short(&self) -> String {
        if self.0.chars().count() <= SHORT_LEN {
            self.0.clone()
        } else {
            let head: String = self.0.chars().take(SHORT_LEN).collect();
            format!("{}...", head)
        }
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for TransactionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
