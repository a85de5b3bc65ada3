//! Monthly spending metrics
//!
//! Pure functions deriving totals, groupings, and projections from the
//! expense list and the selected month. Amounts are `f64`; rounding is
//! round-half-away-from-zero (`f64::round`). Floating point is accepted as
//! sufficient for personal budgeting.

use chrono::{Datelike, NaiveDate};

use crate::models::{BudgetData, Expense, Month};

/// Expenses whose ISO date string starts with the selected month's
/// `YYYY-MM` prefix; all expenses when no month is selected.
pub fn filtered_expenses(expenses: &[Expense], selected_month: Option<&Month>) -> Vec<Expense> {
    match selected_month {
        Some(month) => {
            let prefix = month.key();
            expenses
                .iter()
                .filter(|e| e.date.starts_with(&prefix))
                .cloned()
                .collect()
        }
        None => expenses.to_vec(),
    }
}

/// Sum of amounts over the filtered set
pub fn total_expenses(filtered: &[Expense]) -> f64 {
    filtered.iter().map(|e| e.amount).sum()
}

/// Category totals over the filtered set, in first-seen category order
pub fn grouped_expenses(filtered: &[Expense]) -> Vec<(String, f64)> {
    let mut groups: Vec<(String, f64)> = Vec::new();
    for expense in filtered {
        match groups.iter_mut().find(|(name, _)| *name == expense.category) {
            Some((_, total)) => *total += expense.amount,
            None => groups.push((expense.category.clone(), expense.amount)),
        }
    }
    groups
}

/// Total for the calendar month immediately preceding the selected month
pub fn previous_month_total(expenses: &[Expense], selected_month: &Month) -> f64 {
    let prefix = selected_month.prev().key();
    expenses
        .iter()
        .filter(|e| e.date.starts_with(&prefix))
        .map(|e| e.amount)
        .sum()
}

/// Rounded percentage change against the previous month's total
///
/// Defined as 0 when the previous total is 0, a deliberate degenerate-case
/// policy rather than an error.
pub fn month_comparison_percent(total: f64, previous_total: f64) -> i64 {
    if previous_total == 0.0 {
        return 0;
    }
    ((total - previous_total) / previous_total * 100.0).round() as i64
}

/// Rounded average spent per elapsed day of the selected month
///
/// When `selected_month` is the month containing `today`, elapsed days is
/// `today`'s day-of-month; for any other month it is that month's total day
/// count.
pub fn daily_average(filtered: &[Expense], selected_month: &Month, today: NaiveDate) -> i64 {
    let days_passed = if selected_month.contains(today) {
        today.day()
    } else {
        selected_month.days_in_month()
    };
    (total_expenses(filtered) / days_passed as f64).round() as i64
}

/// Projected month-end total from the rounded daily average
pub fn end_of_month_projection(daily_average: i64, selected_month: &Month) -> i64 {
    daily_average * selected_month.days_in_month() as i64
}

/// Percentage of the savings goal still intact, clamped to 0..=100
///
/// 0 when no goal is set.
pub fn goal_progress(goal: f64, total_expenses: f64) -> i64 {
    if goal == 0.0 {
        return 0;
    }
    (((goal - total_expenses) / goal * 100.0).round() as i64).clamp(0, 100)
}

/// Percentage of the monthly budget consumed, clamped to 0..=100
///
/// 0 when no budget is set.
pub fn budget_used_percent(budget: f64, total_expenses: f64) -> i64 {
    if budget == 0.0 {
        return 0;
    }
    ((total_expenses / budget * 100.0).round() as i64).clamp(0, 100)
}

/// Income remaining after the filtered expenses
pub fn balance(income: f64, total_expenses: f64) -> f64 {
    income - total_expenses
}

/// All monthly metrics for one filter selection
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    /// The selected month, if any
    pub month: Option<Month>,
    /// Total of the filtered expenses
    pub total: f64,
    /// Income minus the filtered total
    pub balance: f64,
    /// Category totals in first-seen order
    pub grouped: Vec<(String, f64)>,
    /// Previous calendar month's total (0 with no month selected)
    pub previous_month_total: f64,
    /// Rounded percentage change against the previous month
    pub comparison_percent: i64,
    /// Rounded average spent per elapsed day (0 with no month selected)
    pub daily_average: i64,
    /// Projected month-end total (0 with no month selected)
    pub projection: i64,
    /// Savings-goal progress percentage
    pub goal_progress: i64,
    /// Budget consumption percentage
    pub budget_used_percent: i64,
}

impl MonthlyReport {
    /// Compute the full report for the given selection and reference date
    pub fn generate(data: &BudgetData, selected_month: Option<&Month>, today: NaiveDate) -> Self {
        let filtered = filtered_expenses(&data.expenses, selected_month);
        let total = total_expenses(&filtered);
        let grouped = grouped_expenses(&filtered);

        let (previous_total, daily_avg, projection) = match selected_month {
            Some(month) => {
                let avg = daily_average(&filtered, month, today);
                (
                    previous_month_total(&data.expenses, month),
                    avg,
                    end_of_month_projection(avg, month),
                )
            }
            None => (0.0, 0, 0),
        };

        Self {
            month: selected_month.copied(),
            total,
            balance: balance(data.income, total),
            grouped,
            previous_month_total: previous_total,
            comparison_percent: month_comparison_percent(total, previous_total),
            daily_average: daily_avg,
            projection,
            goal_progress: goal_progress(data.monthly_goal, total),
            budget_used_percent: budget_used_percent(data.monthly_budget, total),
        }
    }
}
