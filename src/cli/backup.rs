//! Export and import CLI commands

use std::fs;
use std::path::PathBuf;

use chrono::{Local, Utc};
use clap::Subcommand;

use crate::error::{BudgetError, BudgetResult};
use crate::export::{
    csv_filename, expenses_csv_string, export_backup, import_backup, BACKUP_FILENAME,
};
use crate::models::Month;
use crate::services::BudgetBook;
use crate::storage::{FileStore, Vault, DEFAULT_PASSPHRASE};

use super::unlock_data_key;

#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export expenses as semicolon-delimited CSV
    Csv {
        /// Only export one month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
        /// Output file; defaults to budget_<today>.csv
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export an encrypted backup of expenses, categories, and income
    Backup {
        /// Output file
        #[arg(short, long, default_value = BACKUP_FILENAME)]
        output: PathBuf,
    },
}

/// Handle export subcommands
pub fn handle_export_command(vault: &Vault<FileStore>, cmd: ExportCommands) -> BudgetResult<()> {
    let (session, key) = unlock_data_key(vault)?;
    let book = BudgetBook::load(vault, &key)?;

    match cmd {
        ExportCommands::Csv { month, output } => {
            let month = month
                .map(|m| Month::parse(&m).map_err(|e| BudgetError::Validation(e.to_string())))
                .transpose()?;

            let csv = expenses_csv_string(book.expenses(), month.as_ref())?;
            let path =
                output.unwrap_or_else(|| PathBuf::from(csv_filename(Local::now().date_naive())));

            fs::write(&path, csv)
                .map_err(|e| BudgetError::Export(format!("Failed to write {}: {}", path.display(), e)))?;
            println!("Exported CSV to {}", path.display());
        }
        ExportCommands::Backup { output } => {
            let passphrase = session.pin().unwrap_or(DEFAULT_PASSPHRASE);
            let ciphertext = export_backup(&book, passphrase, Utc::now())?;

            fs::write(&output, ciphertext)
                .map_err(|e| BudgetError::Export(format!("Failed to write {}: {}", output.display(), e)))?;
            println!("Exported encrypted backup to {}", output.display());
        }
    }

    Ok(())
}

/// Handle the import command: restore an encrypted backup
pub fn handle_import_command(vault: &Vault<FileStore>, file: PathBuf) -> BudgetResult<()> {
    let (session, key) = unlock_data_key(vault)?;
    let mut book = BudgetBook::load(vault, &key)?;

    let ciphertext = fs::read_to_string(&file)
        .map_err(|e| BudgetError::Import(format!("Failed to read {}: {}", file.display(), e)))?;

    let passphrase = session.pin().unwrap_or(DEFAULT_PASSPHRASE);
    let archive = import_backup(&ciphertext, passphrase).ok_or_else(|| {
        BudgetError::Import("Could not decrypt the backup file. Wrong PIN?".to_string())
    })?;

    let expenses = archive.expenses.len();
    book.restore_backup(archive);
    book.save(vault, &key)?;

    println!("Restored {} expenses from {}", expenses, file.display());
    Ok(())
}
