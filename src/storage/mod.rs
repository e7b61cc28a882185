//! Storage layer for Tally
//!
//! Records are persisted one per line, each line independently obscured.
//! Loading is forgiving: a missing file is an empty collection, an unreadable
//! file is logged and treated as empty, and any line that fails to decode is
//! skipped with a warning. Saving always goes through an atomic replace.
//!
//! The two files (transactions, budgets) are independent; nothing keeps
//! them consistent with each other on disk.

pub mod budgets;
pub mod file_io;
pub mod transactions;

use std::path::Path;

use tracing::{debug, warn};

pub use budgets::BudgetRepository;
pub use file_io::{read_lines, write_lines_atomic};
pub use transactions::TransactionRepository;

use crate::codec::{self, DecodeError, LineRecord};
use crate::config::paths::TallyPaths;
use crate::error::TallyError;

/// A stored line that was dropped during load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the file
    pub line_number: usize,
    pub reason: DecodeError,
}

/// Outcome of loading one record file
#[derive(Debug, Clone)]
pub struct LoadReport<T> {
    /// Successfully decoded records, in file order
    pub records: Vec<T>,
    /// Lines that could not be decoded
    pub skipped: Vec<SkippedLine>,
    /// Set when the file existed but could not be read at all
    pub read_error: Option<String>,
}

impl<T> LoadReport<T> {
    fn empty() -> Self {
        Self {
            records: Vec::new(),
            skipped: Vec::new(),
            read_error: None,
        }
    }

    /// True if every line decoded and the file was readable
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.read_error.is_none()
    }
}

/// Load every decodable record from `path`
///
/// Never fails: problems degrade to fewer records, and are reported in the
/// returned [`LoadReport`] and through `tracing`.
pub fn load_all<T: LineRecord>(path: &Path) -> LoadReport<T> {
    let lines = match read_lines(path) {
        Ok(Some(lines)) => lines,
        Ok(None) => {
            debug!("No {} file at {}, starting empty", T::RECORD_NAME, path.display());
            return LoadReport::empty();
        }
        Err(e) => {
            warn!("Could not load {} file: {}", T::RECORD_NAME, e);
            let mut report = LoadReport::empty();
            report.read_error = Some(e.to_string());
            return report;
        }
    };

    let mut report = LoadReport::empty();

    for (index, line) in lines.iter().enumerate() {
        match codec::unseal::<T>(line) {
            Ok(record) => report.records.push(record),
            Err(reason) => {
                warn!(
                    "Skipping unreadable {} at {}:{} ({})",
                    T::RECORD_NAME,
                    path.display(),
                    index + 1,
                    reason
                );
                report.skipped.push(SkippedLine {
                    line_number: index + 1,
                    reason,
                });
            }
        }
    }

    debug!(
        "Loaded {} {} record(s) from {} ({} skipped)",
        report.records.len(),
        T::RECORD_NAME,
        path.display(),
        report.skipped.len()
    );

    report
}

/// Replace the contents of `path` with one sealed line per record
pub fn save_all<T: LineRecord>(path: &Path, records: &[T]) -> Result<(), TallyError> {
    write_lines_atomic(path, records.iter().map(codec::seal))
        .inspect(|_| {
            debug!(
                "Saved {} {} record(s) to {}",
                records.len(),
                T::RECORD_NAME,
                path.display()
            )
        })
        .inspect_err(|e| warn!("Could not save {} file: {}", T::RECORD_NAME, e))
}

/// Storage coordinator that provides access to both record files
#[derive(Debug, Clone)]
pub struct Storage {
    paths: TallyPaths,
    pub transactions: TransactionRepository,
    pub budgets: BudgetRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: TallyPaths) -> Result<Self, TallyError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TallyPaths {
        &self.paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::obscure;
    use crate::models::{Budget, Category, Money, Transaction, TransactionKind};
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn sample_transaction(category: &str, cents: i64) -> Transaction {
        Transaction::new_dated(
            TransactionKind::Expense,
            Money::from_cents(cents),
            Category::parse(category).unwrap(),
            "sample",
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let report: LoadReport<Transaction> = load_all(&temp_dir.path().join("none.dat"));

        assert!(report.records.is_empty());
        assert!(report.is_clean());
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.dat");
        let records = vec![
            sample_transaction("food", 100),
            sample_transaction("rent", 200),
            sample_transaction("gas", 300),
        ];

        save_all(&path, &records).unwrap();
        let report: LoadReport<Transaction> = load_all(&path);

        assert_eq!(report.records, records);
        assert!(report.is_clean());
    }

    #[test]
    fn test_lines_on_disk_are_obscured() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budgets.dat");
        let budget = Budget::new(Category::parse("food").unwrap(), Money::from_cents(100)).unwrap();

        save_all(&path, &[budget]).unwrap();
        let raw = fs::read_to_string(&path).unwrap();

        assert!(!raw.contains("FOOD"));
        assert_eq!(raw, format!("{}\n", obscure("FOOD,1.00,0.00")));
    }

    #[test]
    fn test_corrupt_lines_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.dat");
        let good_a = sample_transaction("food", 100);
        let good_b = sample_transaction("rent", 200);

        let lines = vec![
            codec::seal(&good_a),
            obscure("only,three,fields"),
            obscure("id,BONUS,1.00,FOOD,x,2024-01-01"),
            obscure("id,EXPENSE,1.00,FOOD,x,01/02/2024"),
            "%%% not base64 %%%".to_string(),
            String::new(),
            codec::seal(&good_b),
        ];
        write_lines_atomic(&path, &lines).unwrap();

        let report: LoadReport<Transaction> = load_all(&path);

        assert_eq!(report.records, vec![good_a, good_b]);
        let skipped: Vec<usize> = report.skipped.iter().map(|s| s.line_number).collect();
        assert_eq!(skipped, vec![2, 3, 4, 5, 6]);
        assert!(report.read_error.is_none());
    }

    #[test]
    fn test_plain_text_line_is_accepted_after_failed_reveal() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budgets.dat");
        // Not valid base64, so reveal hands it through and it parses as plain text
        write_lines_atomic(&path, ["FOOD,150.00,0.00"]).unwrap();

        let report: LoadReport<Budget> = load_all(&path);
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].category().as_str(), "FOOD");
    }

    #[test]
    fn test_unreadable_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        // A directory cannot be read as a line file
        let path = temp_dir.path().join("dir.dat");
        fs::create_dir(&path).unwrap();

        let report: LoadReport<Budget> = load_all(&path);
        assert!(report.records.is_empty());
        assert!(report.read_error.is_some());
    }

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(
            storage.paths().transactions_file(),
            temp_dir.path().join("data").join("transactions.dat")
        );
    }
}
