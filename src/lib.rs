//! Expense tracker - console personal expense record keeping
//!
//! Records expenses (amount, category, date), keeps them in a JSON file and
//! reports totals overall, by category and by day or month.
//!
//! # Architecture
//!
//! - `models`: expense, money, category and date types
//! - `storage`: whole-file JSON persistence with atomic writes
//! - `store`: the in-memory, insertion-ordered expense list
//! - `reports`: pure spending aggregation
//! - `services`: validation plus store/storage coordination
//! - `display`: terminal formatting of expense lists
//! - `cli`: the interactive menu shell
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_tracker::cli::Shell;
//! use expense_tracker::config::TrackerPaths;
//!
//! let paths = TrackerPaths::new();
//! let stdin = std::io::stdin();
//! let mut shell = Shell::open(&paths, stdin.lock(), std::io::stdout())?;
//! shell.run()?;
//! # Ok::<(), expense_tracker::TrackerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod store;

pub use error::{TrackerError, TrackerResult};
