//! Category label model
//!
//! Categories are free-form labels. They are normalized once, when the value
//! is constructed, so that "food", " food " and "Food" group together.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A normalized, non-empty category label
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Category(String);

impl Category {
    /// Normalize raw user text into a category
    ///
    /// Trims surrounding whitespace and uppercases the first letter; the rest
    /// is kept as entered.
    pub fn new(raw: &str) -> Result<Self, CategoryValidationError> {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        let first = chars.next().ok_or(CategoryValidationError::Empty)?;

        let mut normalized: String = first.to_uppercase().collect();
        normalized.push_str(chars.as_str());
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Category {
    type Error = CategoryValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    Empty,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "category cannot be empty"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
