//! Spending trends across months
//!
//! Per-month totals over the whole history, either across all categories or
//! for a single category, plus the month/year keys available for filtering.

use std::collections::BTreeMap;

use crate::models::{Expense, Month};

/// One point of a per-month trend
#[derive(Debug, Clone, PartialEq)]
pub struct MonthTotal {
    /// The `YYYY-MM` month key
    pub key: String,
    /// Human-readable label (e.g., "March 2025")
    pub label: String,
    /// Total for the month
    pub total: f64,
}

fn label_for_key(key: &str) -> String {
    match Month::parse(key) {
        Ok(month) => month.label(),
        Err(_) => key.to_string(),
    }
}

fn totals_by_month<'a, I>(expenses: I) -> Vec<MonthTotal>
where
    I: Iterator<Item = &'a Expense>,
{
    // BTreeMap keeps the month keys in ascending order
    let mut map: BTreeMap<String, f64> = BTreeMap::new();
    for expense in expenses {
        *map.entry(expense.month_key().to_string()).or_insert(0.0) += expense.amount;
    }

    map.into_iter()
        .map(|(key, total)| MonthTotal {
            label: label_for_key(&key),
            key,
            total,
        })
        .collect()
}

/// Per-month totals over all expenses, ascending by month key
pub fn monthly_totals(expenses: &[Expense]) -> Vec<MonthTotal> {
    totals_by_month(expenses.iter())
}

/// Per-month totals for a single category, ascending by month key
pub fn category_monthly_totals(expenses: &[Expense], category: &str) -> Vec<MonthTotal> {
    totals_by_month(expenses.iter().filter(|e| e.category == category))
}

/// Sorted unique `YYYY-MM` keys present in the data
pub fn available_months(expenses: &[Expense]) -> Vec<String> {
    let mut keys: Vec<String> = expenses
        .iter()
        .map(|e| e.month_key().to_string())
        .collect();
    keys.sort();
    keys.dedup();
    keys
}

/// Sorted unique `YYYY` keys present in the data
pub fn available_years(expenses: &[Expense]) -> Vec<String> {
    let mut keys: Vec<String> = expenses.iter().map(|e| e.year_key().to_string()).collect();
    keys.sort();
    keys.dedup();
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_expenses() -> Vec<Expense> {
        vec![
            Expense::new(1, 50.0, "food", "2025-03-05"),
            Expense::new(2, 20.0, "food", "2025-02-10"),
            Expense::new(3, 30.0, "rent", "2025-03-20"),
            Expense::new(4, 10.0, "food", "2024-12-01"),
        ]
    }

    #[test]
    fn test_monthly_totals_sorted_ascending() {
        let totals = monthly_totals(&sample_expenses());

        let keys: Vec<&str> = totals.iter().map(|t| t.key.as_str()).collect();
        assert_eq!(keys, vec!["2024-12", "2025-02", "2025-03"]);

        assert_eq!(totals[0].total, 10.0);
        assert_eq!(totals[1].total, 20.0);
        assert_eq!(totals[2].total, 80.0);
    }

    #[test]
    fn test_monthly_totals_labels() {
        let totals = monthly_totals(&sample_expenses());
        assert_eq!(totals[0].label, "December 2024");
        assert_eq!(totals[2].label, "March 2025");
    }

    #[test]
    fn test_category_monthly_totals() {
        let totals = category_monthly_totals(&sample_expenses(), "food");

        let keys: Vec<&str> = totals.iter().map(|t| t.key.as_str()).collect();
        assert_eq!(keys, vec!["2024-12", "2025-02", "2025-03"]);
        assert_eq!(totals[2].total, 50.0);
    }

    #[test]
    fn test_category_monthly_totals_unknown_category() {
        assert!(category_monthly_totals(&sample_expenses(), "travel").is_empty());
    }

    #[test]
    fn test_available_months() {
        assert_eq!(
            available_months(&sample_expenses()),
            vec!["2024-12", "2025-02", "2025-03"]
        );
    }

    #[test]
    fn test_available_years() {
        assert_eq!(available_years(&sample_expenses()), vec!["2024", "2025"]);
    }
}
