//! Category CLI commands

use clap::Subcommand;

use crate::error::{BudgetError, BudgetResult};
use crate::services::BudgetBook;
use crate::storage::{FileStore, Vault};

use super::unlock_data_key;

#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Add a category
    Add {
        /// Category name
        name: String,
    },
    /// Remove a category (expenses referencing it are kept)
    Remove {
        /// Category name
        name: String,
    },
    /// List categories
    List,
}

/// Handle category subcommands
pub fn handle_category_command(
    vault: &Vault<FileStore>,
    cmd: CategoryCommands,
) -> BudgetResult<()> {
    let (_session, key) = unlock_data_key(vault)?;
    let mut book = BudgetBook::load(vault, &key)?;

    match cmd {
        CategoryCommands::Add { name } => {
            if book.add_category(&name) {
                println!("Added category '{}'", name.trim());
                book.save(vault, &key)?;
            } else {
                return Err(BudgetError::Validation(format!(
                    "Category '{}' is empty or already exists",
                    name.trim()
                )));
            }
        }
        CategoryCommands::Remove { name } => {
            if book.remove_category(&name) {
                println!("Removed category '{}'", name);
                book.save(vault, &key)?;
            } else {
                return Err(BudgetError::Validation(format!(
                    "No category named '{}'",
                    name
                )));
            }
        }
        CategoryCommands::List => {
            if book.categories().is_empty() {
                println!("No categories defined.");
            } else {
                for category in book.categories() {
                    println!("{}", category);
                }
            }
        }
    }

    Ok(())
}
