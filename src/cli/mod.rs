//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the service layer. Every handler that touches
//! domain data unlocks the session first (prompting for the PIN when one is
//! set) and derives the data key from it.

pub mod backup;
pub mod category;
pub mod expense;
pub mod pin;
pub mod report;
pub mod settings;

pub use backup::{handle_export_command, handle_import_command, ExportCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use pin::{handle_pin_set_command, handle_status_command};
pub use report::{handle_stats_command, StatsArgs};
pub use settings::{handle_set_command, handle_theme_command, SetCommands, ThemeCommands};

use crate::config::BudgetPaths;
use crate::crypto::DerivedKey;
use crate::error::{BudgetError, BudgetResult};
use crate::storage::{FileStore, LockSession, Vault};

/// Open the vault over the resolved data directory
pub fn open_vault() -> BudgetResult<Vault<FileStore>> {
    let paths = BudgetPaths::new()?;
    paths.ensure_directories()?;
    Vault::open(FileStore::new(paths.data_dir()))
}

/// Unlock the session, prompting for the PIN when one is set
///
/// With no PIN set the session starts unlocked and no prompt appears.
pub fn require_unlock(vault: &Vault<FileStore>) -> BudgetResult<LockSession> {
    let mut session = LockSession::new(vault.load_pin()?);

    if session.is_locked() {
        let attempt = rpassword::prompt_password("PIN: ")
            .map_err(|e| BudgetError::Io(format!("Failed to read PIN: {}", e)))?;
        if !session.unlock(attempt.trim()) {
            return Err(BudgetError::InvalidPin);
        }
    }

    Ok(session)
}

/// Unlock and derive the data key in one step
pub fn unlock_data_key(vault: &Vault<FileStore>) -> BudgetResult<(LockSession, DerivedKey)> {
    let session = require_unlock(vault)?;
    let key = vault.derive_data_key(session.pin())?;
    Ok((session, key))
}
