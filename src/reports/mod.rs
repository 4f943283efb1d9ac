//! Reports module for the expense tracker
//!
//! Spending totals overall, by category and over time.

pub mod spending;

pub use spending::{by_category, by_period, by_time, total, Granularity, SpendingBreakdown};
