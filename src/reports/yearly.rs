//! Yearly spending metrics
//!
//! A fixed 12-slot view of one calendar year, with highest/lowest month
//! extraction. Expenses with dates that do not carry a parseable
//! `YYYY-MM` prefix are skipped.

use crate::models::Expense;

/// A month extreme: 1-based month number and its total
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthExtreme {
    /// 1-based calendar month (1 = January)
    pub month: u32,
    /// The total for that month
    pub value: f64,
}

/// Per-month totals for the selected year, one slot per calendar month
pub fn yearly_totals(expenses: &[Expense], selected_year: i32) -> [f64; 12] {
    let year_key = format!("{:04}", selected_year);
    let mut totals = [0.0; 12];

    for expense in expenses {
        if expense.year_key() != year_key {
            continue;
        }
        let month = expense
            .date
            .get(5..7)
            .and_then(|s| s.parse::<usize>().ok());
        if let Some(m @ 1..=12) = month {
            totals[m - 1] += expense.amount;
        }
    }

    totals
}

/// Sum of all 12 monthly slots
pub fn yearly_total(totals: &[f64; 12]) -> f64 {
    totals.iter().sum()
}

/// Rounded average monthly spending over the year
pub fn yearly_average(totals: &[f64; 12]) -> i64 {
    (yearly_total(totals) / 12.0).round() as i64
}

/// The month with the highest total; ties resolve to the earliest month
pub fn highest_month(totals: &[f64; 12]) -> MonthExtreme {
    let mut best = MonthExtreme {
        month: 1,
        value: totals[0],
    };
    for (i, &value) in totals.iter().enumerate().skip(1) {
        if value > best.value {
            best = MonthExtreme {
                month: (i + 1) as u32,
                value,
            };
        }
    }
    best
}

/// The month with the lowest total; ties resolve to the earliest month
pub fn lowest_month(totals: &[f64; 12]) -> MonthExtreme {
    let mut best = MonthExtreme {
        month: 1,
        value: totals[0],
    };
    for (i, &value) in totals.iter().enumerate().skip(1) {
        if value < best.value {
            best = MonthExtreme {
                month: (i + 1) as u32,
                value,
            };
        }
    }
    best
}

/// All yearly metrics for one selected year
#[derive(Debug, Clone)]
pub struct YearlyReport {
    pub year: i32,
    pub totals: [f64; 12],
    pub total: f64,
    pub average: i64,
    pub highest: MonthExtreme,
    pub lowest: MonthExtreme,
}

impl YearlyReport {
    /// Compute the full yearly report
    pub fn generate(expenses: &[Expense], selected_year: i32) -> Self {
        let totals = yearly_totals(expenses, selected_year);
        Self {
            year: selected_year,
            totals,
            total: yearly_total(&totals),
            average: yearly_average(&totals),
            highest: highest_month(&totals),
            lowest: lowest_month(&totals),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_expenses() -> Vec<Expense> {
        vec![
            Expense::new(1, 100.0, "rent", "2025-01-01"),
            Expense::new(2, 50.0, "food", "2025-01-15"),
            Expense::new(3, 80.0, "food", "2025-03-10"),
            Expense::new(4, 999.0, "rent", "2024-06-01"),
        ]
    }

    #[test]
    fn test_yearly_totals() {
        let totals = yearly_totals(&sample_expenses(), 2025);
        assert_eq!(totals[0], 150.0);
        assert_eq!(totals[1], 0.0);
        assert_eq!(totals[2], 80.0);
        // Other years excluded
        assert_eq!(totals[5], 0.0);
    }

    #[test]
    fn test_yearly_totals_skips_malformed_dates() {
        let expenses = vec![
            Expense::new(1, 10.0, "food", "2025-01-01"),
            Expense::new(2, 10.0, "food", "2025"),
            Expense::new(3, 10.0, "food", "2025-xx-01"),
        ];
        let totals = yearly_totals(&expenses, 2025);
        assert_eq!(yearly_total(&totals), 10.0);
    }

    #[test]
    fn test_yearly_total_and_average() {
        let totals = yearly_totals(&sample_expenses(), 2025);
        assert_eq!(yearly_total(&totals), 230.0);
        // 230 / 12 = 19.17 -> 19
        assert_eq!(yearly_average(&totals), 19);
    }

    #[test]
    fn test_highest_and_lowest_month() {
        let totals = yearly_totals(&sample_expenses(), 2025);

        let highest = highest_month(&totals);
        assert_eq!(highest.month, 1);
        assert_eq!(highest.value, 150.0);

        // February is the first zero month
        let lowest = lowest_month(&totals);
        assert_eq!(lowest.month, 2);
        assert_eq!(lowest.value, 0.0);
    }

    #[test]
    fn test_ties_resolve_to_first() {
        let mut totals = [0.0; 12];
        totals[3] = 100.0;
        totals[7] = 100.0;

        assert_eq!(highest_month(&totals).month, 4);
        assert_eq!(lowest_month(&totals).month, 1);
    }

    #[test]
    fn test_report_generate() {
        let report = YearlyReport::generate(&sample_expenses(), 2025);
        assert_eq!(report.year, 2025);
        assert_eq!(report.total, 230.0);
        assert_eq!(report.highest.month, 1);
    }
}
