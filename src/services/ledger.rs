//! Ledger session
//!
//! The [`Ledger`] owns the in-memory transaction and budget collections for
//! the lifetime of one run. Every mutation keeps budgets reconciled and is
//! persisted immediately.

use tracing::{info, warn};

use crate::error::{TallyError, TallyResult};
use crate::models::{Budget, Category, Money, Transaction};
use crate::storage::Storage;

use super::reconciliation::{apply_delta, full_recompute};

/// Counts of records dropped while opening the ledger
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub transactions_loaded: usize,
    pub transactions_skipped: usize,
    pub budgets_loaded: usize,
    pub budgets_skipped: usize,
    /// Read errors for files that existed but could not be read
    pub read_errors: Vec<String>,
}

impl LoadSummary {
    pub fn had_problems(&self) -> bool {
        self.transactions_skipped > 0 || self.budgets_skipped > 0 || !self.read_errors.is_empty()
    }
}

/// What `set_budget` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetChange {
    Created,
    Updated,
}

/// In-memory session state backed by [`Storage`]
pub struct Ledger {
    storage: Storage,
    transactions: Vec<Transaction>,
    budgets: Vec<Budget>,
    load_summary: LoadSummary,
}

impl Ledger {
    /// Load both files and reconcile budgets against the loaded ledger
    pub fn open(storage: Storage) -> Self {
        let txn_report = storage.transactions.load();
        let budget_report = storage.budgets.load();

        let load_summary = LoadSummary {
            transactions_loaded: txn_report.records.len(),
            transactions_skipped: txn_report.skipped.len(),
            budgets_loaded: budget_report.records.len(),
            budgets_skipped: budget_report.skipped.len(),
            read_errors: txn_report
                .read_error
                .into_iter()
                .chain(budget_report.read_error)
                .collect(),
        };

        let mut ledger = Self {
            storage,
            transactions: txn_report.records,
            budgets: dedupe_budgets(budget_report.records),
            load_summary,
        };
        full_recompute(&ledger.transactions, &mut ledger.budgets);

        info!(
            "Opened ledger: {} transaction(s), {} budget(s)",
            ledger.transactions.len(),
            ledger.budgets.len()
        );
        ledger
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn load_summary(&self) -> &LoadSummary {
        &self.load_summary
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn find(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id().as_str() == id)
    }

    /// Transactions whose category or description contains `term`, ignoring case
    pub fn search(&self, term: &str) -> Vec<&Transaction> {
        self.transactions.iter().filter(|t| t.matches(term)).collect()
    }

    pub fn budget(&self, category: &Category) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.category() == category)
    }

    /// Record a new transaction and persist
    ///
    /// The in-memory ledger is updated before saving. If the save fails the
    /// error is returned but the transaction stays in memory, so the session
    /// is ahead of disk until the next successful save.
    pub fn add_transaction(&mut self, txn: Transaction) -> TallyResult<()> {
        if self.find(txn.id().as_str()).is_some() {
            return Err(TallyError::Duplicate {
                entity_type: "Transaction",
                identifier: txn.id().to_string(),
            });
        }

        if txn.is_expense() {
            apply_delta(&mut self.budgets, txn.category(), txn.amount());
        }
        self.transactions.push(txn);

        self.save()
    }

    /// Remove a transaction by id and persist
    pub fn delete_transaction(&mut self, id: &str) -> TallyResult<Transaction> {
        let position = self
            .transactions
            .iter()
            .position(|t| t.id().as_str() == id)
            .ok_or_else(|| TallyError::transaction_not_found(id))?;

        let removed = self.transactions.remove(position);
        if removed.is_expense() {
            full_recompute(&self.transactions, &mut self.budgets);
        }

        self.save()?;
        Ok(removed)
    }

    /// Create a budget for `category` or change the limit of the existing one
    pub fn set_budget(&mut self, category: Category, limit: Money) -> TallyResult<BudgetChange> {
        let change = match self.budgets.iter_mut().find(|b| *b.category() == category) {
            Some(existing) => {
                existing
                    .set_monthly_limit(limit)
                    .map_err(|e| TallyError::Validation(e.to_string()))?;
                BudgetChange::Updated
            }
            None => {
                let budget =
                    Budget::new(category, limit).map_err(|e| TallyError::Validation(e.to_string()))?;
                self.budgets.push(budget);
                BudgetChange::Created
            }
        };

        full_recompute(&self.transactions, &mut self.budgets);
        self.storage.budgets.save(&self.budgets)?;
        Ok(change)
    }

    /// Remove the budget for `category` and persist
    pub fn remove_budget(&mut self, category: &Category) -> TallyResult<Budget> {
        let position = self
            .budgets
            .iter()
            .position(|b| b.category() == category)
            .ok_or_else(|| TallyError::budget_not_found(category.as_str()))?;

        let removed = self.budgets.remove(position);
        self.storage.budgets.save(&self.budgets)?;
        Ok(removed)
    }

    /// Persist both collections
    ///
    /// Both files are attempted even if the first fails; the first error is
    /// returned.
    pub fn save(&self) -> TallyResult<()> {
        let transactions = self.storage.transactions.save(&self.transactions);
        let budgets = self.storage.budgets.save(&self.budgets);
        transactions.and(budgets)
    }
}

/// Keep the first budget per category; later duplicates are dropped
fn dedupe_budgets(budgets: Vec<Budget>) -> Vec<Budget> {
    let mut unique: Vec<Budget> = Vec::with_capacity(budgets.len());
    for budget in budgets {
        if unique.iter().any(|b| b.category() == budget.category()) {
            warn!("Dropping duplicate budget for {}", budget.category());
            continue;
        }
        unique.push(budget);
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::obscure;
    use crate::config::TallyPaths;
    use crate::models::TransactionKind;
    use crate::services::reconciliation::is_consistent;
    use tempfile::TempDir;

    fn open_ledger(temp_dir: &TempDir) -> Ledger {
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        Ledger::open(Storage::new(paths).unwrap())
    }

    fn cat(name: &str) -> Category {
        Category::parse(name).unwrap()
    }

    fn new_txn(kind: TransactionKind, cents: i64, category: &str) -> Transaction {
        Transaction::new(kind, Money::from_cents(cents), cat(category), "").unwrap()
    }

    #[test]
    fn test_open_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let ledger = open_ledger(&temp_dir);

        assert!(ledger.transactions().is_empty());
        assert!(ledger.budgets().is_empty());
        assert!(!ledger.load_summary().had_problems());
    }

    #[test]
    fn test_add_expense_updates_budget_and_persists() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = open_ledger(&temp_dir);
        ledger.set_budget(cat("food"), Money::from_cents(15000)).unwrap();

        ledger
            .add_transaction(new_txn(TransactionKind::Income, 100000, "salary"))
            .unwrap();
        ledger
            .add_transaction(new_txn(TransactionKind::Expense, 20000, "food"))
            .unwrap();

        let food = ledger.budget(&cat("food")).unwrap();
        assert_eq!(food.current_spending(), Money::from_cents(20000));
        assert!(food.is_over_budget());

        let reopened = open_ledger(&temp_dir);
        assert_eq!(reopened.transactions(), ledger.transactions());
        assert_eq!(reopened.budgets(), ledger.budgets());
    }

    #[test]
    fn test_delete_expense_recomputes() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = open_ledger(&temp_dir);
        ledger.set_budget(cat("food"), Money::from_cents(5000)).unwrap();

        let keep = new_txn(TransactionKind::Expense, 1000, "food");
        let doomed = new_txn(TransactionKind::Expense, 2500, "food");
        let doomed_id = doomed.id().to_string();
        ledger.add_transaction(keep).unwrap();
        ledger.add_transaction(doomed).unwrap();

        let removed = ledger.delete_transaction(&doomed_id).unwrap();
        assert_eq!(removed.amount(), Money::from_cents(2500));
        assert_eq!(
            ledger.budget(&cat("food")).unwrap().current_spending(),
            Money::from_cents(1000)
        );
        assert!(is_consistent(ledger.transactions(), ledger.budgets()));
        assert_eq!(open_ledger(&temp_dir).transactions().len(), 1);
    }

    #[test]
    fn test_delete_unknown_id() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = open_ledger(&temp_dir);

        let err = ledger.delete_transaction("TXN_nope").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_new_budget_picks_up_existing_expenses() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = open_ledger(&temp_dir);
        ledger
            .add_transaction(new_txn(TransactionKind::Expense, 4200, "gas"))
            .unwrap();

        let change = ledger.set_budget(cat("gas"), Money::from_cents(10000)).unwrap();

        assert_eq!(change, BudgetChange::Created);
        assert_eq!(
            ledger.budget(&cat("gas")).unwrap().current_spending(),
            Money::from_cents(4200)
        );
    }

    #[test]
    fn test_update_budget_limit() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = open_ledger(&temp_dir);
        ledger.set_budget(cat("food"), Money::from_cents(100)).unwrap();

        let change = ledger.set_budget(cat("FOOD"), Money::from_cents(900)).unwrap();

        assert_eq!(change, BudgetChange::Updated);
        assert_eq!(ledger.budgets().len(), 1);
        assert_eq!(ledger.budgets()[0].monthly_limit(), Money::from_cents(900));
    }

    #[test]
    fn test_remove_budget() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = open_ledger(&temp_dir);
        ledger.set_budget(cat("food"), Money::from_cents(100)).unwrap();

        ledger.remove_budget(&cat("food")).unwrap();
        assert!(ledger.budgets().is_empty());
        assert!(ledger.remove_budget(&cat("food")).unwrap_err().is_not_found());
        assert!(open_ledger(&temp_dir).budgets().is_empty());
    }

    #[test]
    fn test_open_reconciles_stale_stored_spending() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage
            .budgets
            .save(&[Budget::restore(
                cat("food"),
                Money::from_cents(1000),
                Money::from_cents(777),
            )])
            .unwrap();

        let ledger = Ledger::open(storage);
        assert_eq!(ledger.budgets()[0].current_spending(), Money::zero());
    }

    #[test]
    fn test_open_skips_oversized_amounts() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone()).unwrap();

        let huge = obscure("a,EXPENSE,92233720368547758.07,FOOD,x,2024-01-01");
        let normal = obscure("b,EXPENSE,12.50, food ,x,2024-01-02");
        std::fs::write(
            paths.transactions_file(),
            format!("{}\n{}\n{}\n", huge, huge, normal),
        )
        .unwrap();
        std::fs::write(
            paths.budgets_file(),
            format!("{}\n", obscure("FOOD,1.00,0.00")),
        )
        .unwrap();

        let ledger = Ledger::open(storage);

        assert_eq!(ledger.transactions().len(), 1);
        assert_eq!(ledger.load_summary().transactions_skipped, 2);
        assert_eq!(
            ledger.budgets()[0].current_spending(),
            Money::from_cents(1250)
        );
        assert!(is_consistent(ledger.transactions(), ledger.budgets()));
    }

    #[test]
    fn test_open_drops_duplicate_budgets() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage
            .budgets
            .save(&[
                Budget::new(cat("food"), Money::from_cents(100)).unwrap(),
                Budget::new(cat("food"), Money::from_cents(200)).unwrap(),
            ])
            .unwrap();

        let ledger = Ledger::open(storage);
        assert_eq!(ledger.budgets().len(), 1);
        assert_eq!(ledger.budgets()[0].monthly_limit(), Money::from_cents(100));
    }

    #[test]
    fn test_search() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = open_ledger(&temp_dir);
        ledger
            .add_transaction(
                Transaction::new(
                    TransactionKind::Expense,
                    Money::from_cents(300),
                    cat("food"),
                    "Farmers market",
                )
                .unwrap(),
            )
            .unwrap();
        ledger
            .add_transaction(new_txn(TransactionKind::Expense, 100, "rent"))
            .unwrap();

        assert_eq!(ledger.search("MARKET").len(), 1);
        assert_eq!(ledger.search("o").len(), 2);
        assert!(ledger.search("salary").is_empty());
    }
}
