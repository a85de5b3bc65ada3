//! Export module for pocket-budget
//!
//! CSV export of expenses and encrypted full-state backups. The writing of
//! files themselves happens at the CLI boundary; this module produces the
//! content.

pub mod backup;
pub mod csv;

pub use backup::{export_backup, import_backup, BACKUP_FILENAME};
pub use csv::{csv_filename, expenses_csv_string, write_expenses_csv};
