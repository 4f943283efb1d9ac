//! Expense service
//!
//! Validates new expenses and keeps the in-memory store and the data file in
//! step: every successful change is saved in full.

use chrono::{Local, NaiveDate};
use log::info;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, Expense, Money};
use crate::storage::Storage;
use crate::store::ExpenseStore;

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub amount: Money,
    /// Raw category text; normalized on creation
    pub category: String,
    /// `None` means today
    pub date: Option<NaiveDate>,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    store: &'a mut ExpenseStore,
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(store: &'a mut ExpenseStore, storage: &'a Storage) -> Self {
        Self { store, storage }
    }

    /// Validate, append and persist a new expense
    ///
    /// Validation failures leave the store and the file untouched. If the
    /// save fails the expense stays in the store and the error is returned.
    pub fn add(&mut self, input: CreateExpenseInput) -> TrackerResult<Expense> {
        if !input.amount.is_positive() {
            return Err(TrackerError::InputValidation(
                "amount must be greater than zero".into(),
            ));
        }

        let category = Category::new(&input.category)
            .map_err(|e| TrackerError::InputValidation(e.to_string()))?;
        let date = input.date.unwrap_or_else(|| Local::now().date_naive());

        let expense = Expense::new(input.amount, category, date)
            .map_err(|e| TrackerError::InputValidation(e.to_string()))?;

        self.store.append(expense.clone());
        let position = self.store.len();
        self.storage.save(self.store.all())?;

        info!("Added expense #{}: {}", position, expense);

        Ok(expense)
    }

    /// Remove and persist the expense at a 1-based position
    ///
    /// If the save fails the expense is already gone from the store and the
    /// error is returned.
    pub fn delete(&mut self, position: usize) -> TrackerResult<Expense> {
        let removed = self.store.remove_at(position)?;
        self.storage.save(self.store.all())?;

        info!("Deleted expense #{}: {}", position, removed);

        Ok(removed)
    }
}
