//! Expense CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::display::format_expense_table;
use crate::error::{BudgetError, BudgetResult};
use crate::models::Month;
use crate::reports::filtered_expenses;
use crate::services::BudgetBook;
use crate::storage::{FileStore, Vault};

use super::unlock_data_key;

#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount spent
        amount: f64,
        /// Category name
        category: String,
        /// Expense date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete an expense by id
    Remove {
        /// Expense id (shown by `expense list`)
        id: i64,
    },
    /// List expenses
    List {
        /// Only show one month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Handle expense subcommands
pub fn handle_expense_command(vault: &Vault<FileStore>, cmd: ExpenseCommands) -> BudgetResult<()> {
    let (_session, key) = unlock_data_key(vault)?;
    let mut book = BudgetBook::load(vault, &key)?;

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
        } => {
            let date = date
                .map(|d| {
                    NaiveDate::parse_from_str(&d, "%Y-%m-%d")
                        .map_err(|e| BudgetError::Validation(format!("Invalid date '{}': {}", d, e)))
                })
                .transpose()?;

            let expense = book.add_expense(amount, &category, date)?;
            println!(
                "Added expense {}: {} on {}",
                expense.id, expense.amount, expense.category
            );
            book.save(vault, &key)?;
        }
        ExpenseCommands::Remove { id } => {
            if book.remove_expense(id) {
                println!("Removed expense {}", id);
                book.save(vault, &key)?;
            } else {
                return Err(BudgetError::Validation(format!("No expense with id {}", id)));
            }
        }
        ExpenseCommands::List { month } => {
            let month = month
                .map(|m| {
                    Month::parse(&m).map_err(|e| BudgetError::Validation(e.to_string()))
                })
                .transpose()?;

            let expenses = filtered_expenses(book.expenses(), month.as_ref());
            println!("{}", format_expense_table(&expenses));
        }
    }

    Ok(())
}
