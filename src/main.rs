use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use pocket_budget::cli::{
    handle_category_command, handle_expense_command, handle_export_command, handle_import_command,
    handle_pin_set_command, handle_set_command, handle_stats_command, handle_status_command,
    handle_theme_command, open_vault, CategoryCommands, ExpenseCommands, ExportCommands,
    SetCommands, StatsArgs, ThemeCommands,
};
use pocket_budget::config::BudgetPaths;

#[derive(Parser)]
#[command(
    name = "pocket",
    version,
    about = "PIN-locked personal budget tracker",
    long_about = "pocket-budget is a personal budget tracker for the terminal. \
                  It records income and categorized expenses, derives monthly and \
                  yearly statistics, and keeps everything at rest encrypted under \
                  a PIN-derived key."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Category management commands
    #[command(subcommand, alias = "cat")]
    Category(CategoryCommands),

    /// Set income, budget, or goal
    #[command(subcommand)]
    Set(SetCommands),

    /// Show monthly and yearly statistics
    Stats(StatsArgs),

    /// Export expenses (CSV) or an encrypted backup
    #[command(subcommand)]
    Export(ExportCommands),

    /// Restore an encrypted backup
    Import {
        /// Backup file to restore
        file: PathBuf,
    },

    /// Set or change the PIN
    Pin,

    /// Theme preference commands
    #[command(subcommand)]
    Theme(ThemeCommands),

    /// Show lock status and verify the PIN
    Status,

    /// Show the data directory
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let vault = open_vault()?;

    match cli.command {
        Commands::Expense(cmd) => handle_expense_command(&vault, cmd)?,
        Commands::Category(cmd) => handle_category_command(&vault, cmd)?,
        Commands::Set(cmd) => handle_set_command(&vault, cmd)?,
        Commands::Stats(args) => handle_stats_command(&vault, args)?,
        Commands::Export(cmd) => handle_export_command(&vault, cmd)?,
        Commands::Import { file } => handle_import_command(&vault, file)?,
        Commands::Pin => handle_pin_set_command(&vault)?,
        Commands::Theme(cmd) => handle_theme_command(&vault, cmd)?,
        Commands::Status => handle_status_command(&vault)?,
        Commands::Config => {
            let paths = BudgetPaths::new()?;
            println!("Data directory: {}", paths.data_dir().display());
        }
    }

    Ok(())
}
