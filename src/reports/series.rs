//! Chart series assembly
//!
//! Charts themselves are an external collaborator; this module only hands
//! them already-computed label/value pairs.

use crate::models::{Expense, Month};

use super::monthly::{filtered_expenses, previous_month_total, total_expenses};
use super::trend::{category_monthly_totals, monthly_totals};

/// Abbreviated month labels for the 12-slot year chart
const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Labels and values ready for a chart collaborator
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    /// Whether the series carries any points
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Category breakdown of a grouped set (pie chart)
pub fn category_breakdown_series(grouped: &[(String, f64)]) -> ChartSeries {
    ChartSeries {
        labels: grouped.iter().map(|(name, _)| name.clone()).collect(),
        values: grouped.iter().map(|(_, total)| *total).collect(),
    }
}

/// Per-month totals over all expenses (line chart)
pub fn monthly_trend_series(expenses: &[Expense]) -> ChartSeries {
    let totals = monthly_totals(expenses);
    ChartSeries {
        labels: totals.iter().map(|t| t.label.clone()).collect(),
        values: totals.iter().map(|t| t.total).collect(),
    }
}

/// Per-month totals for one category (line chart)
pub fn category_trend_series(expenses: &[Expense], category: &str) -> ChartSeries {
    let totals = category_monthly_totals(expenses, category);
    ChartSeries {
        labels: totals.iter().map(|t| t.label.clone()).collect(),
        values: totals.iter().map(|t| t.total).collect(),
    }
}

/// Previous month next to the selected month (bar chart)
pub fn month_comparison_series(expenses: &[Expense], selected_month: &Month) -> ChartSeries {
    let previous = selected_month.prev();
    let filtered = filtered_expenses(expenses, Some(selected_month));

    ChartSeries {
        labels: vec![previous.label(), selected_month.label()],
        values: vec![
            previous_month_total(expenses, selected_month),
            total_expenses(&filtered),
        ],
    }
}

/// The 12 calendar months of one year (bar chart)
pub fn year_series(yearly_totals: &[f64; 12]) -> ChartSeries {
    ChartSeries {
        labels: MONTH_ABBREVS.iter().map(|s| s.to_string()).collect(),
        values: yearly_totals.to_vec(),
    }
}

/// Budget, current spending, and month-end projection (bar chart)
pub fn projection_series(budget: f64, total: f64, projection: i64) -> ChartSeries {
    ChartSeries {
        labels: vec![
            "Budget".to_string(),
            "Current spending".to_string(),
            "End-of-month projection".to_string(),
        ],
        values: vec![budget, total, projection as f64],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_expenses() -> Vec<Expense> {
        vec![
            Expense::new(1, 50.0, "food", "2025-03-05"),
            Expense::new(2, 20.0, "food", "2025-02-10"),
            Expense::new(3, 30.0, "rent", "2025-03-20"),
        ]
    }

    #[test]
    fn test_category_breakdown_series() {
        let grouped = vec![("food".to_string(), 50.0), ("rent".to_string(), 30.0)];
        let series = category_breakdown_series(&grouped);
        assert_eq!(series.labels, vec!["food", "rent"]);
        assert_eq!(series.values, vec![50.0, 30.0]);
    }

    #[test]
    fn test_monthly_trend_series() {
        let series = monthly_trend_series(&sample_expenses());
        assert_eq!(series.labels, vec!["February 2025", "March 2025"]);
        assert_eq!(series.values, vec![20.0, 80.0]);
    }

    #[test]
    fn test_category_trend_series_empty_without_matches() {
        let series = category_trend_series(&sample_expenses(), "travel");
        assert!(series.is_empty());
    }

    #[test]
    fn test_month_comparison_series() {
        let series = month_comparison_series(&sample_expenses(), &Month::new(2025, 3));
        assert_eq!(series.labels, vec!["February 2025", "March 2025"]);
        assert_eq!(series.values, vec![20.0, 80.0]);
    }

    #[test]
    fn test_year_series() {
        let mut totals = [0.0; 12];
        totals[2] = 80.0;
        let series = year_series(&totals);
        assert_eq!(series.labels.len(), 12);
        assert_eq!(series.labels[0], "Jan");
        assert_eq!(series.values[2], 80.0);
    }

    #[test]
    fn test_projection_series() {
        let series = projection_series(800.0, 400.0, 750);
        assert_eq!(series.values, vec![800.0, 400.0, 750.0]);
        assert_eq!(series.labels.len(), 3);
    }
}
