//! Expense display formatting
//!
//! Renders the expense register as a terminal table.

use tabled::{settings::Style, Table, Tabled};

use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl From<&Expense> for ExpenseRow {
    fn from(expense: &Expense) -> Self {
        // Show the date portion only; the full timestamp is noise here
        let date = expense.date.chars().take(10).collect();
        Self {
            id: expense.id,
            date,
            category: expense.category.clone(),
            amount: expense.amount.to_string(),
        }
    }
}

/// Format a list of expenses as a table
pub fn format_expense_table(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses.iter().map(ExpenseRow::from).collect();
    Table::new(rows).with(Style::rounded()).to_string()
}
