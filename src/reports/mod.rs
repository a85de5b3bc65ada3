//! Reports module for pocket-budget
//!
//! The calculation engine: pure functions deriving monthly and yearly
//! metrics, trend series, and chart data from the expense list and the
//! filter selection. No derived value here is ever persisted.

pub mod monthly;
pub mod series;
pub mod trend;
pub mod yearly;

pub use monthly::{
    balance, budget_used_percent, daily_average, end_of_month_projection, filtered_expenses,
    goal_progress, grouped_expenses, month_comparison_percent, previous_month_total,
    total_expenses, MonthlyReport,
};
pub use series::{
    category_breakdown_series, category_trend_series, month_comparison_series,
    monthly_trend_series, projection_series, year_series, ChartSeries,
};
pub use trend::{
    available_months, available_years, category_monthly_totals, monthly_totals, MonthTotal,
};
pub use yearly::{
    highest_month, lowest_month, yearly_average, yearly_total, yearly_totals, MonthExtreme,
    YearlyReport,
};
