//! Stats CLI command

use chrono::Local;
use clap::Args;

use crate::display::{format_monthly_report, format_yearly_report};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{FilterContext, Month};
use crate::reports::{category_monthly_totals, year_series, MonthlyReport, YearlyReport};
use crate::services::BudgetBook;
use crate::storage::{FileStore, Vault};

use super::unlock_data_key;

#[derive(Args)]
pub struct StatsArgs {
    /// Scope the monthly stats to one month (YYYY-MM)
    #[arg(short, long)]
    pub month: Option<String>,

    /// Year for the 12-month overview; defaults to the current year
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Also show the per-month trend for one category
    #[arg(short, long)]
    pub category: Option<String>,
}

impl StatsArgs {
    /// Build the filter context for the given reference date
    fn filter_context(self, today: chrono::NaiveDate) -> BudgetResult<FilterContext> {
        let mut ctx = FilterContext::for_date(today);

        if let Some(month) = self.month {
            let month =
                Month::parse(&month).map_err(|e| BudgetError::Validation(e.to_string()))?;
            ctx = ctx.with_month(month);
        }
        if let Some(year) = self.year {
            ctx = ctx.with_year(year);
        }
        ctx.selected_category_for_trend = self.category;

        Ok(ctx)
    }
}

/// Handle the stats command
pub fn handle_stats_command(vault: &Vault<FileStore>, args: StatsArgs) -> BudgetResult<()> {
    let (_session, key) = unlock_data_key(vault)?;
    let book = BudgetBook::load(vault, &key)?;

    // Wall-clock reference date, injected here at the boundary
    let today = Local::now().date_naive();
    let ctx = args.filter_context(today)?;

    let monthly = MonthlyReport::generate(book.data(), ctx.selected_month.as_ref(), today);
    println!("{}", format_monthly_report(&monthly));

    let yearly = YearlyReport::generate(book.expenses(), ctx.selected_year);
    let series = year_series(&yearly.totals);
    println!("{}", format_yearly_report(&yearly, &series));

    if let Some(category) = &ctx.selected_category_for_trend {
        let trend = category_monthly_totals(book.expenses(), category);
        if trend.is_empty() {
            println!("No expenses recorded for category '{}'.", category);
        } else {
            println!("Trend for '{}':", category);
            for point in trend {
                println!("  {:16} {}", point.label, point.total);
            }
        }
    }

    Ok(())
}
