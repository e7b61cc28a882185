//! Transaction repository
//!
//! Loads and saves the transaction ledger to `transactions.dat`.

use std::path::{Path, PathBuf};

use crate::error::TallyError;
use crate::models::Transaction;

use super::{load_all, save_all, LoadReport};

/// Repository for transaction persistence
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    path: PathBuf,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every readable transaction, in file order
    pub fn load(&self) -> LoadReport<Transaction> {
        load_all(&self.path)
    }

    /// Replace the stored ledger with `transactions`
    pub fn save(&self, transactions: &[Transaction]) -> Result<(), TallyError> {
        save_all(&self.path, transactions)
    }
}
