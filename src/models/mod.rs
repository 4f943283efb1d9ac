//! Core data models for the expense tracker
//!
//! An [`Expense`] is built from a [`Money`] amount, a normalized
//! [`Category`] and a calendar date.

pub mod category;
pub mod date;
pub mod expense;
pub mod money;

pub use category::{Category, CategoryValidationError};
pub use date::{format_date, parse_date, DateParseError};
pub use expense::{Expense, ExpenseValidationError};
pub use money::{Money, MoneyParseError, MAX_CENTS};
