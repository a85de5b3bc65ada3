//! Budget snapshot models
//!
//! `BudgetData` is the full persisted state; `BackupArchive` is the plaintext
//! payload of an encrypted backup file. Both keep the camelCase field names of
//! the persisted JSON format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::expense::Expense;

/// The persisted snapshot of all domain state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetData {
    /// Recorded expenses, insertion order = entry order
    #[serde(default)]
    pub expenses: Vec<Expense>,

    /// The category set; unique strings, no relational integrity with expenses
    #[serde(default)]
    pub categories: Vec<String>,

    /// Monthly income
    #[serde(default)]
    pub income: f64,

    /// Monthly spending budget
    #[serde(default)]
    pub monthly_budget: f64,

    /// Monthly savings goal
    #[serde(default)]
    pub monthly_goal: f64,
}

/// Plaintext payload of an encrypted backup file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupArchive {
    #[serde(default)]
    pub expenses: Vec<Expense>,

    #[serde(default)]
    pub categories: Vec<String>,

    #[serde(default)]
    pub income: f64,

    /// When the backup was created
    pub timestamp: DateTime<Utc>,
}

impl BackupArchive {
    /// Build a backup archive from the current state
    pub fn new(
        expenses: Vec<Expense>,
        categories: Vec<String>,
        income: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            expenses,
            categories,
            income,
            timestamp,
        }
    }
}
