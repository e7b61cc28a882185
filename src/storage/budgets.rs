//! Budget repository
//!
//! Loads and saves per-category budgets to `budgets.dat`.

use std::path::{Path, PathBuf};

use crate::error::TallyError;
use crate::models::Budget;

use super::{load_all, save_all, LoadReport};

/// Repository for budget persistence
#[derive(Debug, Clone)]
pub struct BudgetRepository {
    path: PathBuf,
}

impl BudgetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every readable budget. Stored spending is returned as-is.
    pub fn load(&self) -> LoadReport<Budget> {
        load_all(&self.path)
    }

    pub fn save(&self, budgets: &[Budget]) -> Result<(), TallyError> {
        save_all(&self.path, budgets)
    }
}
