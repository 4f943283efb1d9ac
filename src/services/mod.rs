//! Service layer for the expense tracker
//!
//! Business rules on top of the in-memory store and the storage layer.

pub mod expense;

pub use expense::{CreateExpenseInput, ExpenseService};
