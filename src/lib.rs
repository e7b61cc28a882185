//! Tally - terminal personal bookkeeping
//!
//! Tally records income and expense transactions, tracks monthly spending
//! limits per category, and keeps both in two line-oriented files whose lines
//! are lightly obscured on disk.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Transactions, budgets and the value types they use
//! - `codec`: Line encoding and the XOR/base64 obscuring layer
//! - `storage`: Tolerant loading and atomic saving of record files
//! - `services`: Budget reconciliation, the ledger session, input validation
//! - `reports`: Balance, spending, monthly, cash flow and budget status
//! - `display`: Terminal formatting for lists
//! - `cli`: clap subcommands and their handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use tally::config::TallyPaths;
//! use tally::services::Ledger;
//! use tally::storage::Storage;
//!
//! let storage = Storage::new(TallyPaths::new()?)?;
//! let ledger = Ledger::open(storage);
//! println!("{} transactions", ledger.transactions().len());
//! ```

pub mod cli;
pub mod codec;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TallyError, TallyResult};
