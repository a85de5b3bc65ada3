//! Path management for pocket-budget
//!
//! Resolves where the slot store lives.
//!
//! ## Path Resolution Order
//!
//! 1. `POCKET_BUDGET_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/pocket-budget` on Linux,
//!    the equivalent on macOS/Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::BudgetError;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "POCKET_BUDGET_DATA_DIR";

/// Manages all paths used by pocket-budget
#[derive(Debug, Clone)]
pub struct BudgetPaths {
    /// Base directory for all pocket-budget data
    base_dir: PathBuf,
}

impl BudgetPaths {
    /// Create a new BudgetPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, BudgetError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            let dirs = ProjectDirs::from("", "", "pocket-budget").ok_or_else(|| {
                BudgetError::Config("Could not determine a config directory".into())
            })?;
            dirs.config_dir().to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create BudgetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the slot store directory
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), BudgetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BudgetError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BudgetError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}
