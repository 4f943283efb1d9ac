//! Expense model
//!
//! A single recorded transaction: how much, on what, and when.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::date::{format_date, iso_date};
use super::money::Money;

/// A recorded expense
///
/// Serializes to exactly the keys `amount`, `category` and `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ExpenseRecord")]
pub struct Expense {
    /// Amount spent (never negative)
    pub amount: Money,

    /// Normalized category label
    pub category: Category,

    /// Day the money was spent
    #[serde(with = "iso_date")]
    pub date: NaiveDate,
}

/// On-disk shape, checked before it becomes an [`Expense`]
#[derive(Deserialize)]
struct ExpenseRecord {
    amount: Money,
    category: Category,
    #[serde(with = "iso_date")]
    date: NaiveDate,
}

impl TryFrom<ExpenseRecord> for Expense {
    type Error = ExpenseValidationError;

    fn try_from(record: ExpenseRecord) -> Result<Self, Self::Error> {
        Self::new(record.amount, record.category, record.date)
    }
}

impl Expense {
    /// Create a new expense
    ///
    /// Rejects negative amounts. A zero amount is accepted here; the add
    /// flow asks for a positive one.
    pub fn new(
        amount: Money,
        category: Category,
        date: NaiveDate,
    ) -> Result<Self, ExpenseValidationError> {
        if amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount(amount));
        }
        Ok(Self {
            amount,
            category,
            date,
        })
    }

    /// Date as `YYYY-MM-DD`, the key used for daily totals
    pub fn day_key(&self) -> String {
        format_date(self.date)
    }

    /// Date as `YYYY-MM`, the key used for monthly totals
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {}", self.day_key(), self.category, self.amount)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NegativeAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "amount {} must not be negative", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
