//! Custom error types for the expense tracker
//!
//! Every failure the tracker can report is a variant of [`TrackerError`].
//! Most of them are recovered locally by the interactive shell, which prints
//! the message and returns to the main menu.

use std::path::Path;

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// User-entered text could not be parsed as the expected type
    #[error("Invalid input: {0}")]
    InputValidation(String),

    /// A delete position outside `[1, size]`
    #[error("Invalid selection: position {position} is out of range (1-{size})")]
    OutOfRange { position: i64, size: usize },

    /// Time granularity other than daily/monthly
    #[error("Invalid granularity '{0}': expected 'daily' or 'monthly'")]
    InvalidGranularity(String),

    /// A spending sum left the representable range
    #[error("Spending total is too large to compute")]
    AmountOverflow,

    /// Unrecognized menu or submenu choice
    #[error("Invalid option: '{0}'")]
    InvalidOption(String),

    /// The persisted file exists but cannot be read back as expenses
    #[error("Corrupt data in {path}: {reason}")]
    CorruptData { path: String, reason: String },

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Reading from or writing to the terminal failed
    #[error("Console error: {0}")]
    Console(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Console input ended before the user chose to exit
    #[error("Input closed before exit was chosen")]
    InputClosed,
}

impl TrackerError {
    /// Create a corrupt data error for the file at `path`
    pub fn corrupt(path: &Path, reason: impl Into<String>) -> Self {
        Self::CorruptData {
            path: path.display().to_string(),
            reason: reason.into(),
        }
    }

    /// Check if this error only aborts the current request
    ///
    /// Recoverable errors are reported and the shell returns to the menu.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InputValidation(_)
                | Self::OutOfRange { .. }
                | Self::InvalidGranularity(_)
                | Self::AmountOverflow
                | Self::InvalidOption(_)
                | Self::Io(_)
                | Self::Json(_)
        )
    }

}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
