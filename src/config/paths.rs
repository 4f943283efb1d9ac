//! Path management for the expense tracker
//!
//! The data file lives in one base directory. In production that is the
//! process working directory; the file name is fixed.

use std::path::PathBuf;

/// File name of the persisted expense list
pub const EXPENSES_FILE_NAME: &str = "expenses.json";

/// Resolves where the expense tracker keeps its data
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    /// Directory holding the data file
    base_dir: PathBuf,
}

impl TrackerPaths {
    /// Paths relative to the current working directory
    pub fn new() -> Self {
        Self {
            base_dir: PathBuf::from("."),
        }
    }

    /// Create TrackerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.base_dir.join(EXPENSES_FILE_NAME)
    }
}

impl Default for TrackerPaths {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn test_default_paths_are_relative() {
        let paths = TrackerPaths::new();
        assert_eq!(paths.expenses_file(), Path::new(".").join("expenses.json"));
        assert!(paths.expenses_file().is_relative());
    }

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.expenses_file(), temp_dir.path().join("expenses.json"));
    }
}
