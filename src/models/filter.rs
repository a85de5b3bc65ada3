//! Report filter context
//!
//! The user's current month/year/category selection used to scope derived
//! metrics. Ephemeral state, never persisted.

use chrono::{Datelike, NaiveDate};

use super::month::Month;

/// Scope selection for derived metrics
#[derive(Debug, Clone, PartialEq)]
pub struct FilterContext {
    /// Month filter; `None` means all expenses
    pub selected_month: Option<Month>,

    /// Year for the 12-month yearly report
    pub selected_year: i32,

    /// Category whose per-month trend is displayed, if any
    pub selected_category_for_trend: Option<String>,
}

impl FilterContext {
    /// Create an unfiltered context for the year containing `today`
    pub fn for_date(today: NaiveDate) -> Self {
        Self {
            selected_month: None,
            selected_year: today.year(),
            selected_category_for_trend: None,
        }
    }

    /// Set the month filter
    pub fn with_month(mut self, month: Month) -> Self {
        self.selected_month = Some(month);
        self
    }

    /// Set the year for the yearly report
    pub fn with_year(mut self, year: i32) -> Self {
        self.selected_year = year;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_date() {
        let ctx = FilterContext::for_date(NaiveDate::from_ymd_opt(2025, 3, 5).unwrap());
        assert_eq!(ctx.selected_month, None);
        assert_eq!(ctx.selected_year, 2025);
        assert_eq!(ctx.selected_category_for_trend, None);
    }

    #[test]
    fn test_builders() {
        let ctx = FilterContext::for_date(NaiveDate::from_ymd_opt(2025, 3, 5).unwrap())
            .with_month(Month::new(2025, 2))
            .with_year(2024);
        assert_eq!(ctx.selected_month, Some(Month::new(2025, 2)));
        assert_eq!(ctx.selected_year, 2024);
    }
}
