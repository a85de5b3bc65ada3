//! Income, budget, goal, and theme CLI commands

use clap::Subcommand;

use crate::error::{BudgetError, BudgetResult};
use crate::models::Theme;
use crate::services::BudgetBook;
use crate::storage::{FileStore, Vault};

use super::unlock_data_key;

#[derive(Subcommand)]
pub enum SetCommands {
    /// Set monthly income
    Income {
        /// Income amount
        amount: f64,
    },
    /// Set the monthly spending budget
    Budget {
        /// Budget amount
        amount: f64,
    },
    /// Set the monthly savings goal
    Goal {
        /// Goal amount
        amount: f64,
    },
}

/// Handle income/budget/goal subcommands
pub fn handle_set_command(vault: &Vault<FileStore>, cmd: SetCommands) -> BudgetResult<()> {
    let (_session, key) = unlock_data_key(vault)?;
    let mut book = BudgetBook::load(vault, &key)?;

    match cmd {
        SetCommands::Income { amount } => {
            book.set_income(amount)?;
            println!("Income set to {}", amount);
        }
        SetCommands::Budget { amount } => {
            book.set_monthly_budget(amount)?;
            println!("Monthly budget set to {}", amount);
        }
        SetCommands::Goal { amount } => {
            book.set_monthly_goal(amount)?;
            println!("Monthly goal set to {}", amount);
        }
    }

    book.save(vault, &key)
}

#[derive(Subcommand)]
pub enum ThemeCommands {
    /// Show the current theme
    Show,
    /// Set the theme
    Set {
        /// "light" or "dark"
        theme: String,
    },
    /// Switch between light and dark
    Toggle,
}

/// Handle theme subcommands
///
/// The theme slot is plaintext; no unlock is needed.
pub fn handle_theme_command(vault: &Vault<FileStore>, cmd: ThemeCommands) -> BudgetResult<()> {
    match cmd {
        ThemeCommands::Show => {
            let theme = vault.load_theme()?.unwrap_or_default();
            println!("{}", theme);
        }
        ThemeCommands::Set { theme } => {
            let theme: Theme = theme
                .parse()
                .map_err(BudgetError::Validation)?;
            vault.save_theme(theme)?;
            println!("Theme set to {}", theme);
        }
        ThemeCommands::Toggle => {
            let theme = vault.load_theme()?.unwrap_or_default().toggled();
            vault.save_theme(theme)?;
            println!("Theme set to {}", theme);
        }
    }

    Ok(())
}
