//! In-memory expense store
//!
//! Holds the session's expenses in insertion order. Positions are 1-based
//! and computed from that order; they are never stored on a record.

use crate::error::{TrackerError, TrackerResult};
use crate::models::Expense;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already-ordered expenses, e.g. a loaded file
    pub fn from_expenses(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }

    /// Add an expense at the end
    pub fn append(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Remove the expense at a 1-based position
    ///
    /// Later expenses move down one position.
    pub fn remove_at(&mut self, position: usize) -> TrackerResult<Expense> {
        let size = self.expenses.len();
        if position == 0 || position > size {
            return Err(TrackerError::OutOfRange {
                position: i64::try_from(position).unwrap_or(i64::MAX),
                size,
            });
        }
        Ok(self.expenses.remove(position - 1))
    }

    /// Get the expense at a 1-based position
    pub fn get(&self, position: usize) -> Option<&Expense> {
        position
            .checked_sub(1)
            .and_then(|index| self.expenses.get(index))
    }

    /// All expenses, in insertion order
    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    /// Expenses paired with their 1-based positions
    pub fn enumerate(&self) -> impl Iterator<Item = (usize, &Expense)> {
        self.expenses.iter().enumerate().map(|(i, e)| (i + 1, e))
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
