//! Spending aggregation
//!
//! Pure functions that sum expense amounts overall, per category, or per
//! day/month. Nothing here touches storage.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, Money};

/// Time bucket size for [`by_time`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    /// One bucket per `YYYY-MM-DD`
    Daily,
    /// One bucket per `YYYY-MM`
    Monthly,
}

impl Granularity {
    fn key(&self, expense: &Expense) -> String {
        match self {
            Self::Daily => expense.day_key(),
            Self::Monthly => expense.month_key(),
        }
    }
}

impl FromStr for Granularity {
    type Err = TrackerError;

    /// Case-insensitive `daily` or `monthly`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "monthly" => Ok(Self::Monthly),
            _ => Err(TrackerError::InvalidGranularity(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "Daily"),
            Self::Monthly => write!(f, "Monthly"),
        }
    }
}

/// Totals keyed by category or date, in order of first appearance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpendingBreakdown {
    rows: Vec<(String, Money)>,
}

impl SpendingBreakdown {
    fn grouped<'a, I, F>(expenses: I, key_of: F) -> TrackerResult<Self>
    where
        I: IntoIterator<Item = &'a Expense>,
        F: Fn(&Expense) -> String,
    {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut rows: Vec<(String, Money)> = Vec::new();

        for expense in expenses {
            let key = key_of(expense);
            match index.get(&key) {
                Some(&i) => {
                    rows[i].1 = rows[i]
                        .1
                        .checked_add(expense.amount)
                        .ok_or(TrackerError::AmountOverflow)?;
                }
                None => {
                    index.insert(key.clone(), rows.len());
                    rows.push((key, expense.amount));
                }
            }
        }

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[(String, Money)] {
        &self.rows
    }

    /// Format the breakdown for terminal display
    pub fn format_terminal(&self, heading: &str) -> String {
        let mut output = format!("{}:\n", heading);
        for (key, amount) in &self.rows {
            output.push_str(&format!("{}: {}\n", key, amount));
        }
        output
    }
}

/// Sum of every amount; zero for no expenses
///
/// Fails with `AmountOverflow` instead of wrapping.
pub fn total(expenses: &[Expense]) -> TrackerResult<Money> {
    expenses.iter().try_fold(Money::zero(), |sum, e| {
        sum.checked_add(e.amount).ok_or(TrackerError::AmountOverflow)
    })
}

/// Totals per category
pub fn by_category(expenses: &[Expense]) -> TrackerResult<SpendingBreakdown> {
    SpendingBreakdown::grouped(expenses, |e| e.category.as_str().to_string())
}

/// Totals per day or month, with the granularity given by name
///
/// Fails with `InvalidGranularity` for anything but daily/monthly.
pub fn by_time(expenses: &[Expense], granularity: &str) -> TrackerResult<SpendingBreakdown> {
    let granularity: Granularity = granularity.parse()?;
    by_period(expenses, granularity)
}

/// Totals per day or month
pub fn by_period(
    expenses: &[Expense],
    granularity: Granularity,
) -> TrackerResult<SpendingBreakdown> {
    SpendingBreakdown::grouped(expenses, |e| granularity.key(e))
}
