//! CSV export functionality
//!
//! Exports expenses as semicolon-delimited rows with a `date;category;amount`
//! header, optionally scoped to the selected month. Amounts are written as
//! plain decimal strings.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Expense, Month};
use crate::reports::filtered_expenses;

/// Write expenses as CSV, optionally filtered to one month
pub fn write_expenses_csv<W: Write>(
    expenses: &[Expense],
    selected_month: Option<&Month>,
    writer: W,
) -> BudgetResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(writer);

    csv_writer
        .write_record(["date", "category", "amount"])
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    for expense in filtered_expenses(expenses, selected_month) {
        let amount = expense.amount.to_string();
        csv_writer
            .write_record([expense.date.as_str(), expense.category.as_str(), amount.as_str()])
            .map_err(|e| BudgetError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}

/// Render expenses as a CSV string
pub fn expenses_csv_string(
    expenses: &[Expense],
    selected_month: Option<&Month>,
) -> BudgetResult<String> {
    let mut buffer = Vec::new();
    write_expenses_csv(expenses, selected_month, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| BudgetError::Export(e.to_string()))
}

/// Default export filename for the given date (e.g., "budget_2025-03-05.csv")
pub fn csv_filename(today: chrono::NaiveDate) -> String {
    format!("budget_{}.csv", today.format("%Y-%m-%d"))
}
