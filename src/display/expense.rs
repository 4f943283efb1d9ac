//! Expense display formatting
//!
//! Numbered rows used by the delete flow.

use crate::models::Expense;
use crate::store::ExpenseStore;

/// Format a single expense as `N. date | category | amount`
pub fn format_expense_row(position: usize, expense: &Expense) -> String {
    format!("{}. {}", position, expense)
}

/// Format every expense with its 1-based position
pub fn format_expense_list(store: &ExpenseStore) -> String {
    let mut output = String::new();
    for (position, expense) in store.enumerate() {
        output.push_str(&format_expense_row(position, expense));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{parse_date, Category, Money};

    fn expense(cents: i64, category: &str, date: &str) -> Expense {
        Expense::new(
            Money::from_cents(cents),
            Category::new(category).unwrap(),
            parse_date(date).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_format_expense_list() {
        let store = ExpenseStore::from_expenses(vec![
            expense(1000, "food", "2024-01-01"),
            expense(599, "Transport", "2024-02-01"),
        ]);

        assert_eq!(
            format_expense_list(&store),
            "1. 2024-01-01 | Food | $10.00\n2. 2024-02-01 | Transport | $5.99\n"
        );
    }
}
