//! Budget book service
//!
//! Holds the in-memory `BudgetData` and applies all mutations: expense
//! entry and deletion, category set management, and the income/budget/goal
//! fields. Persistence goes through the vault as a full-snapshot save.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

use crate::crypto::DerivedKey;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{BackupArchive, BudgetData, Expense};
use crate::storage::{KeyValueStore, Vault};

/// The in-memory budget state and its mutations
pub struct BudgetBook {
    data: BudgetData,
    /// Highest expense id handed out so far; ids are creation-timestamp
    /// millis, bumped past this to stay unique
    last_id: i64,
}

impl BudgetBook {
    /// Wrap an existing snapshot
    pub fn new(data: BudgetData) -> Self {
        let last_id = data.expenses.iter().map(|e| e.id).max().unwrap_or(0);
        Self { data, last_id }
    }

    /// Load the book from the vault
    ///
    /// When every encrypted slot is absent, a legacy plaintext snapshot (if
    /// any) seeds income and expenses, then is migrated to encrypted slots
    /// on the next save.
    pub fn load<S: KeyValueStore>(vault: &Vault<S>, key: &DerivedKey) -> BudgetResult<Self> {
        let mut data = vault.load_all(key)?;

        if data == BudgetData::default() {
            if let Some(legacy) = vault.load_legacy_snapshot()? {
                data.income = legacy.income;
                data.expenses = legacy.expenses;
            }
        }

        Ok(Self::new(data))
    }

    /// Persist the full snapshot and drop any migrated legacy slot
    pub fn save<S: KeyValueStore>(&self, vault: &Vault<S>, key: &DerivedKey) -> BudgetResult<()> {
        vault.save_all(&self.data, key)?;
        vault.clear_legacy_snapshot()
    }

    /// The current snapshot
    pub fn data(&self) -> &BudgetData {
        &self.data
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.data.expenses
    }

    pub fn categories(&self) -> &[String] {
        &self.data.categories
    }

    pub fn income(&self) -> f64 {
        self.data.income
    }

    pub fn monthly_budget(&self) -> f64 {
        self.data.monthly_budget
    }

    pub fn monthly_goal(&self) -> f64 {
        self.data.monthly_goal
    }

    // --- Expenses ---

    /// Record a new expense dated `date` (or now, when omitted)
    pub fn add_expense(
        &mut self,
        amount: f64,
        category: &str,
        date: Option<NaiveDate>,
    ) -> BudgetResult<&Expense> {
        let now = Utc::now();
        let date_string = match date {
            Some(d) => d
                .and_hms_opt(0, 0, 0)
                .unwrap()
                .and_utc()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            None => now.to_rfc3339_opts(SecondsFormat::Millis, true),
        };

        let expense = Expense::new(
            self.next_id(now),
            amount,
            category.trim(),
            date_string,
        );
        expense
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        self.data.expenses.push(expense);
        Ok(self.data.expenses.last().unwrap())
    }

    /// Delete an expense by id; `true` if one was removed
    pub fn remove_expense(&mut self, id: i64) -> bool {
        let before = self.data.expenses.len();
        self.data.expenses.retain(|e| e.id != id);
        self.data.expenses.len() != before
    }

    fn next_id(&mut self, now: DateTime<Utc>) -> i64 {
        let id = now.timestamp_millis().max(self.last_id + 1);
        self.last_id = id;
        id
    }

    // --- Categories ---

    /// Add a category; `false` when blank or already present
    pub fn add_category(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.data.categories.iter().any(|c| c == name) {
            return false;
        }
        self.data.categories.push(name.to_string());
        true
    }

    /// Remove a category; expenses referencing it are untouched
    pub fn remove_category(&mut self, name: &str) -> bool {
        let before = self.data.categories.len();
        self.data.categories.retain(|c| c != name);
        self.data.categories.len() != before
    }

    // --- Scalar fields ---

    pub fn set_income(&mut self, income: f64) -> BudgetResult<()> {
        Self::validate_non_negative("Income", income)?;
        self.data.income = income;
        Ok(())
    }

    pub fn set_monthly_budget(&mut self, budget: f64) -> BudgetResult<()> {
        Self::validate_non_negative("Monthly budget", budget)?;
        self.data.monthly_budget = budget;
        Ok(())
    }

    pub fn set_monthly_goal(&mut self, goal: f64) -> BudgetResult<()> {
        Self::validate_non_negative("Monthly goal", goal)?;
        self.data.monthly_goal = goal;
        Ok(())
    }

    fn validate_non_negative(what: &str, value: f64) -> BudgetResult<()> {
        if !value.is_finite() || value < 0.0 {
            return Err(BudgetError::Validation(format!(
                "{} must be a non-negative number, got {}",
                what, value
            )));
        }
        Ok(())
    }

    // --- Backup ---

    /// Snapshot expenses, categories, and income for an encrypted backup
    pub fn backup(&self, timestamp: DateTime<Utc>) -> BackupArchive {
        BackupArchive::new(
            self.data.expenses.clone(),
            self.data.categories.clone(),
            self.data.income,
            timestamp,
        )
    }

    /// Replace expenses, categories, and income from a decrypted backup
    pub fn restore_backup(&mut self, archive: BackupArchive) {
        self.data.expenses = archive.expenses;
        self.data.categories = archive.categories;
        self.data.income = archive.income;
        self.last_id = self.data.expenses.iter().map(|e| e.id).max().unwrap_or(0);
    }
}
