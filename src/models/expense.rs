//! Expense model
//!
//! A single recorded spending event. Expenses are immutable once created
//! except by deletion, and keep the field names of the persisted JSON format.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single recorded spending event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, derived from the creation timestamp (milliseconds)
    pub id: i64,

    /// Amount spent (positive)
    pub amount: f64,

    /// Category name; may reference a category absent from the category set
    pub category: String,

    /// ISO-8601 timestamp string (e.g., "2025-03-05T10:30:00.000Z")
    pub date: String,
}

impl Expense {
    /// Create a new expense
    pub fn new(id: i64, amount: f64, category: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id,
            amount,
            category: category.into(),
            date: date.into(),
        }
    }

    /// Get the `YYYY-MM` month key of this expense's date
    pub fn month_key(&self) -> &str {
        self.date.get(..7).unwrap_or(&self.date)
    }

    /// Get the `YYYY` year key of this expense's date
    pub fn year_key(&self) -> &str {
        self.date.get(..4).unwrap_or(&self.date)
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !(self.amount > 0.0) {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }
        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }
        if self.date.len() < 7 || self.date.as_bytes()[4] != b'-' {
            return Err(ExpenseValidationError::InvalidDate(self.date.clone()));
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.category, self.amount)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseValidationError {
    NonPositiveAmount(f64),
    EmptyCategory,
    InvalidDate(String),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(a) => write!(f, "Expense amount must be positive, got {}", a),
            Self::EmptyCategory => write!(f, "Expense category must not be empty"),
            Self::InvalidDate(d) => write!(f, "Expense date is not an ISO-8601 timestamp: {}", d),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_expense() {
        let e = Expense::new(1, 50.0, "food", "2025-03-05T10:30:00.000Z");
        assert_eq!(e.id, 1);
        assert_eq!(e.amount, 50.0);
        assert_eq!(e.category, "food");
    }

    #[test]
    fn test_month_and_year_keys() {
        let e = Expense::new(1, 50.0, "food", "2025-03-05T10:30:00.000Z");
        assert_eq!(e.month_key(), "2025-03");
        assert_eq!(e.year_key(), "2025");
    }

    #[test]
    fn test_validate() {
        assert!(Expense::new(1, 50.0, "food", "2025-03-05").validate().is_ok());

        assert_eq!(
            Expense::new(1, 0.0, "food", "2025-03-05").validate(),
            Err(ExpenseValidationError::NonPositiveAmount(0.0))
        );
        assert_eq!(
            Expense::new(1, 50.0, "  ", "2025-03-05").validate(),
            Err(ExpenseValidationError::EmptyCategory)
        );
        assert!(matches!(
            Expense::new(1, 50.0, "food", "bad").validate(),
            Err(ExpenseValidationError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_serialization_field_names() {
        let e = Expense::new(1741168200000, 50.0, "food", "2025-03-05T10:30:00.000Z");
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"id\":1741168200000"));
        assert!(json.contains("\"amount\":50.0"));
        assert!(json.contains("\"category\":\"food\""));
        assert!(json.contains("\"date\":\"2025-03-05T10:30:00.000Z\""));

        let back: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(e, back);
    }
}
