//! Report formatting utilities for terminal output

use crate::reports::{ChartSeries, MonthlyReport, YearlyReport};

/// Format an amount as a plain decimal string
pub fn format_amount(amount: f64) -> String {
    amount.to_string()
}

/// Format a percentage with a sign for changes
pub fn format_change_percent(pct: i64) -> String {
    if pct > 0 {
        format!("+{}%", pct)
    } else {
        format!("{}%", pct)
    }
}

/// Create a simple bar representation of a percentage
pub fn format_bar(percent: i64, width: usize) -> String {
    let percent = percent.clamp(0, 100) as usize;
    let filled = (percent * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Render the monthly report as terminal text
pub fn format_monthly_report(report: &MonthlyReport) -> String {
    let mut output = String::new();

    match &report.month {
        Some(month) => output.push_str(&format!("Spending for {}\n", month.label())),
        None => output.push_str("Spending (all months)\n"),
    }
    output.push_str(&separator(40));
    output.push('\n');

    output.push_str(&format!("Total:        {}\n", format_amount(report.total)));
    output.push_str(&format!(
        "Balance:      {}\n",
        format_amount(report.balance)
    ));

    if !report.grouped.is_empty() {
        output.push_str("\nBy category:\n");
        for (category, total) in &report.grouped {
            output.push_str(&format!("  {:16} {}\n", category, format_amount(*total)));
        }
    }

    if report.month.is_some() {
        output.push_str(&format!(
            "\nPrevious month: {} ({})\n",
            format_amount(report.previous_month_total),
            format_change_percent(report.comparison_percent)
        ));
        output.push_str(&format!("Daily average:  {}\n", report.daily_average));
        output.push_str(&format!("Projection:     {}\n", report.projection));
    }

    output.push_str(&format!(
        "\nBudget used:  {:>3}% {}\n",
        report.budget_used_percent,
        format_bar(report.budget_used_percent, 20)
    ));
    output.push_str(&format!(
        "Goal intact:  {:>3}% {}\n",
        report.goal_progress,
        format_bar(report.goal_progress, 20)
    ));

    output
}

/// Render the yearly report as terminal text
pub fn format_yearly_report(report: &YearlyReport, series: &ChartSeries) -> String {
    let mut output = String::new();

    output.push_str(&format!("Year {}\n", report.year));
    output.push_str(&separator(40));
    output.push('\n');

    let max = report
        .totals
        .iter()
        .cloned()
        .fold(0.0f64, f64::max)
        .max(1.0);

    for (label, value) in series.labels.iter().zip(series.values.iter()) {
        let percent = (value / max * 100.0).round() as i64;
        output.push_str(&format!(
            "{:3} {:>10} {}\n",
            label,
            format_amount(*value),
            format_bar(percent, 20)
        ));
    }

    output.push_str(&format!(
        "\nTotal: {}   Monthly average: {}\n",
        format_amount(report.total),
        report.average
    ));
    output.push_str(&format!(
        "Highest month: {} ({})   Lowest month: {} ({})\n",
        report.highest.month,
        format_amount(report.highest.value),
        report.lowest.month,
        format_amount(report.lowest.value)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetData, Expense, Month};
    use crate::reports::year_series;
    use chrono::NaiveDate;

    #[test]
    fn test_format_amount_plain_decimal() {
        assert_eq!(format_amount(50.0), "50");
        assert_eq!(format_amount(20.5), "20.5");
    }

    #[test]
    fn test_format_change_percent() {
        assert_eq!(format_change_percent(150), "+150%");
        assert_eq!(format_change_percent(-50), "-50%");
        assert_eq!(format_change_percent(0), "0%");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(0, 10), "░░░░░░░░░░");
        assert_eq!(format_bar(100, 10), "██████████");
        assert_eq!(format_bar(50, 10), "█████░░░░░");
        // Out-of-range input is clamped
        assert_eq!(format_bar(250, 10), "██████████");
    }

    #[test]
    fn test_format_monthly_report_smoke() {
        let data = BudgetData {
            expenses: vec![Expense::new(1, 50.0, "food", "2025-03-05")],
            income: 1200.0,
            monthly_budget: 800.0,
            monthly_goal: 200.0,
            ..Default::default()
        };
        let today = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        let report = MonthlyReport::generate(&data, Some(&Month::new(2025, 3)), today);

        let text = format_monthly_report(&report);
        assert!(text.contains("March 2025"));
        assert!(text.contains("food"));
        assert!(text.contains("Budget used"));
    }

    #[test]
    fn test_format_yearly_report_smoke() {
        let expenses = vec![Expense::new(1, 50.0, "food", "2025-03-05")];
        let report = YearlyReport::generate(&expenses, 2025);
        let series = year_series(&report.totals);

        let text = format_yearly_report(&report, &series);
        assert!(text.contains("Year 2025"));
        assert!(text.contains("Mar"));
    }
}
