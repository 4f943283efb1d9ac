//! Storage layer for the expense tracker
//!
//! The whole expense list lives in one JSON file. It is read once at startup
//! and rewritten in full, atomically, after every change.

pub mod file_io;

pub use file_io::{read_json, write_json_atomic};

use std::path::{Path, PathBuf};

use log::debug;

use crate::error::TrackerResult;
use crate::models::Expense;

/// Reads and writes the persisted expense list
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Create a new Storage backed by the file at `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every expense, in stored order
    ///
    /// A missing file is an empty list. A file that cannot be parsed is a
    /// `CorruptData` error and is never modified by this call.
    pub fn load(&self) -> TrackerResult<Vec<Expense>> {
        let expenses: Vec<Expense> = read_json(&self.path)?;
        debug!(
            "Loaded {} expenses from {}",
            expenses.len(),
            self.path.display()
        );
        Ok(expenses)
    }

    /// Replace the file with the given expenses
    pub fn save(&self, expenses: &[Expense]) -> TrackerResult<()> {
        write_json_atomic(&self.path, expenses)?;
        debug!("Saved {} expenses to {}", expenses.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrackerError;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn expense(cents: i64, category: &str, date: &str) -> Expense {
        Expense::new(
            Money::from_cents(cents),
            Category::new(category).unwrap(),
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        )
        .unwrap()
    }

    fn create_test_storage() -> (Storage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(temp_dir.path().join("expenses.json"));
        (storage, temp_dir)
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let (storage, _temp) = create_test_storage();
        assert!(storage.load().unwrap().is_empty());
        assert!(!storage.path().exists());
    }

    #[test]
    fn test_round_trip() {
        let (storage, _temp) = create_test_storage();
        let cases = vec![
            vec![],
            vec![expense(1000, "Food", "2024-01-01")],
            vec![
                expense(1000, "Food", "2024-01-01"),
                expense(2000, "Food", "2024-01-02"),
                expense(500, "Transport", "2024-02-01"),
                expense(1000, "Food", "2024-01-01"),
                expense(1, "Misc", "2023-12-31"),
            ],
        ];

        for expenses in cases {
            storage.save(&expenses).unwrap();
            assert_eq!(storage.load().unwrap(), expenses);
        }
    }

    #[test]
    fn test_save_overwrites() {
        let (storage, _temp) = create_test_storage();
        storage
            .save(&[
                expense(100, "A", "2024-01-01"),
                expense(200, "B", "2024-01-02"),
            ])
            .unwrap();
        storage.save(&[expense(300, "C", "2024-01-03")]).unwrap();

        let loaded = storage.load().unwrap();
        assert_eq!(loaded, vec![expense(300, "C", "2024-01-03")]);
    }

    #[test]
    fn test_file_format() {
        let (storage, _temp) = create_test_storage();
        storage.save(&[expense(1050, "food", "2024-01-01")]).unwrap();

        let text = fs::read_to_string(storage.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{"amount": 10.5, "category": "Food", "date": "2024-01-01"}])
        );
        assert!(text.contains('\n'), "expected pretty-printed output");
    }

    #[test]
    fn test_loads_hand_written_file() {
        let (storage, _temp) = create_test_storage();
        fs::write(
            storage.path(),
            r#"[
    {"amount": 10.0, "category": "Food", "date": "2024-01-01"},
    {"amount": 4, "category": "coffee", "date": "2024-01-02"}
]"#,
        )
        .unwrap();

        let loaded = storage.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1].amount.cents(), 400);
        assert_eq!(loaded[1].category.as_str(), "Coffee");
    }

    #[test]
    fn test_corrupt_file_is_reported_and_kept() {
        let (storage, _temp) = create_test_storage();
        let bad_files = [
            "{ not json",
            r#"{"amount": 1, "category": "Food", "date": "2024-01-01"}"#,
            r#"[{"amount": "ten", "category": "Food", "date": "2024-01-01"}]"#,
            r#"[{"amount": 1, "category": "Food", "date": "2024-1-1"}]"#,
        ];

        for content in bad_files {
            fs::write(storage.path(), content).unwrap();
            let err = storage.load().unwrap_err();
            assert!(
                matches!(err, TrackerError::CorruptData { .. }),
                "unexpected error for {}: {:?}",
                content,
                err
            );
            assert_eq!(fs::read_to_string(storage.path()).unwrap(), content);
        }
    }

    #[test]
    fn test_save_failure_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        // A directory where the file should be makes the rename fail.
        let path = temp_dir.path().join("expenses.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let storage = Storage::new(path);
        let err = storage.save(&[expense(100, "Food", "2024-01-01")]).unwrap_err();
        assert!(matches!(err, TrackerError::Io(_)));
        assert!(!temp_dir.path().join("expenses.json.tmp").exists());
    }
}
