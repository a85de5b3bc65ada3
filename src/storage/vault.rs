//! The encrypted store
//!
//! Persists domain values as ciphertext strings in a key-value medium, one
//! slot per field. Every load fails closed: a missing slot, a wrong key, or
//! corrupted ciphertext all surface as the type-appropriate default, never
//! as an error.
//!
//! Two passphrases participate:
//!
//! - The data passphrase is the stored PIN, falling back to
//!   [`DEFAULT_PASSPHRASE`] when no PIN is set. SECURITY GAP: before a PIN is
//!   set, data is encrypted under a publicly-known constant and is not
//!   confidentiality-protected.
//! - The PIN itself is stored encrypted under [`PIN_AT_REST_PASSPHRASE`], a
//!   fixed literal. SECURITY GAP: this is obfuscation, not protection;
//!   anyone with the ciphertext and this source can recover the PIN.
//!
//! Both gaps are inherited from the source design and kept for storage
//! compatibility; see DESIGN.md.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::crypto::{
    decrypt_value, derive_key, encrypt_value, DerivedKey, KeyDerivationParams, SecureString,
};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetData, Expense, Theme};

use super::kv::KeyValueStore;

/// Fallback data passphrase used until a PIN is set
pub const DEFAULT_PASSPHRASE: &str = "default_key";

/// Fixed passphrase protecting the PIN at rest
pub const PIN_AT_REST_PASSPHRASE: &str = "master_key";

/// Slot keys on the persistence medium
pub mod slots {
    pub const EXPENSES: &str = "expenses";
    pub const CATEGORIES: &str = "categories";
    pub const INCOME: &str = "income";
    pub const MONTHLY_BUDGET: &str = "monthlyBudget";
    pub const MONTHLY_GOAL: &str = "monthlyGoal";
    pub const APP_PIN: &str = "app_pin";
    pub const THEME: &str = "theme";
    /// Plaintext Argon2 salt and cost parameters (the salt is not a secret)
    pub const KDF_PARAMS: &str = "kdf_params";
    /// Pre-encryption snapshot format, read once for migration
    pub const LEGACY_SNAPSHOT: &str = "budget-app-data";
}

/// Pre-encryption plaintext snapshot, kept only for migration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LegacySnapshot {
    #[serde(default)]
    pub income: f64,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

/// The encrypted store over a key-value persistence medium
pub struct Vault<S: KeyValueStore> {
    store: S,
    params: KeyDerivationParams,
}

impl<S: KeyValueStore> Vault<S> {
    /// Open a vault, loading or creating its key-derivation parameters
    ///
    /// Parameters live in a plaintext slot; a malformed slot is treated as
    /// absent (the data it protected is unrecoverable either way) and fresh
    /// parameters are generated.
    pub fn open(store: S) -> BudgetResult<Self> {
        let params = match store.get(slots::KDF_PARAMS)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(params) => params,
                Err(_) => Self::create_params(&store)?,
            },
            None => Self::create_params(&store)?,
        };

        Ok(Self { store, params })
    }

    /// Open a vault with explicit key-derivation parameters (tests)
    pub fn with_params(store: S, params: KeyDerivationParams) -> BudgetResult<Self> {
        let raw = serde_json::to_string(&params)?;
        store.put(slots::KDF_PARAMS, &raw)?;
        Ok(Self { store, params })
    }

    fn create_params(store: &S) -> BudgetResult<KeyDerivationParams> {
        let params = KeyDerivationParams::new();
        let raw = serde_json::to_string(&params)?;
        store.put(slots::KDF_PARAMS, &raw)?;
        Ok(params)
    }

    /// Access the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    // --- Keys ---

    /// Derive the data key for the given PIN (or the fallback passphrase)
    pub fn derive_data_key(&self, pin: Option<&str>) -> BudgetResult<DerivedKey> {
        derive_key(pin.unwrap_or(DEFAULT_PASSPHRASE), &self.params)
    }

    /// Derive the data key for the currently stored PIN
    pub fn data_key(&self) -> BudgetResult<DerivedKey> {
        let pin = self.load_pin()?;
        self.derive_data_key(pin.as_deref())
    }

    fn pin_at_rest_key(&self) -> BudgetResult<DerivedKey> {
        derive_key(PIN_AT_REST_PASSPHRASE, &self.params)
    }

    // --- PIN slot ---

    /// Load the stored PIN; `None` when unset or undecryptable
    pub fn load_pin(&self) -> BudgetResult<Option<SecureString>> {
        let Some(cipher) = self.store.get(slots::APP_PIN)? else {
            return Ok(None);
        };
        let key = self.pin_at_rest_key()?;
        Ok(decrypt_value::<String>(&cipher, &key).map(SecureString::from))
    }

    /// Persist the PIN, encrypted at rest
    pub fn save_pin(&self, pin: &str) -> BudgetResult<()> {
        let key = self.pin_at_rest_key()?;
        let cipher = encrypt_value(&pin.to_string(), &key)?;
        self.store.put(slots::APP_PIN, &cipher)
    }

    // --- Generic slot plumbing ---

    fn load_slot<T: DeserializeOwned>(
        &self,
        slot: &str,
        key: &DerivedKey,
    ) -> BudgetResult<Option<T>> {
        match self.store.get(slot)? {
            Some(cipher) => Ok(decrypt_value(&cipher, key)),
            None => Ok(None),
        }
    }

    fn save_slot<T: Serialize>(&self, slot: &str, value: &T, key: &DerivedKey) -> BudgetResult<()> {
        let cipher = encrypt_value(value, key)?;
        self.store.put(slot, &cipher)
    }

    // --- Domain slots, one load/save pair each ---

    pub fn load_expenses(&self, key: &DerivedKey) -> BudgetResult<Vec<Expense>> {
        Ok(self
            .load_slot(slots::EXPENSES, key)?
            .unwrap_or_default())
    }

    pub fn save_expenses(&self, expenses: &[Expense], key: &DerivedKey) -> BudgetResult<()> {
        self.save_slot(slots::EXPENSES, &expenses, key)
    }

    pub fn load_categories(&self, key: &DerivedKey) -> BudgetResult<Vec<String>> {
        Ok(self
            .load_slot(slots::CATEGORIES, key)?
            .unwrap_or_default())
    }

    pub fn save_categories(&self, categories: &[String], key: &DerivedKey) -> BudgetResult<()> {
        self.save_slot(slots::CATEGORIES, &categories, key)
    }

    pub fn load_income(&self, key: &DerivedKey) -> BudgetResult<f64> {
        Ok(self.load_slot(slots::INCOME, key)?.unwrap_or(0.0))
    }

    pub fn save_income(&self, income: f64, key: &DerivedKey) -> BudgetResult<()> {
        self.save_slot(slots::INCOME, &income, key)
    }

    pub fn load_monthly_budget(&self, key: &DerivedKey) -> BudgetResult<f64> {
        Ok(self.load_slot(slots::MONTHLY_BUDGET, key)?.unwrap_or(0.0))
    }

    pub fn save_monthly_budget(&self, budget: f64, key: &DerivedKey) -> BudgetResult<()> {
        self.save_slot(slots::MONTHLY_BUDGET, &budget, key)
    }

    pub fn load_monthly_goal(&self, key: &DerivedKey) -> BudgetResult<f64> {
        Ok(self.load_slot(slots::MONTHLY_GOAL, key)?.unwrap_or(0.0))
    }

    pub fn save_monthly_goal(&self, goal: f64, key: &DerivedKey) -> BudgetResult<()> {
        self.save_slot(slots::MONTHLY_GOAL, &goal, key)
    }

    /// Load the full snapshot
    pub fn load_all(&self, key: &DerivedKey) -> BudgetResult<BudgetData> {
        Ok(BudgetData {
            expenses: self.load_expenses(key)?,
            categories: self.load_categories(key)?,
            income: self.load_income(key)?,
            monthly_budget: self.load_monthly_budget(key)?,
            monthly_goal: self.load_monthly_goal(key)?,
        })
    }

    /// Persist the full snapshot
    pub fn save_all(&self, data: &BudgetData, key: &DerivedKey) -> BudgetResult<()> {
        self.save_expenses(&data.expenses, key)?;
        self.save_categories(&data.categories, key)?;
        self.save_income(data.income, key)?;
        self.save_monthly_budget(data.monthly_budget, key)?;
        self.save_monthly_goal(data.monthly_goal, key)?;
        Ok(())
    }

    // --- Plaintext slots ---

    /// Load the theme preference; `None` when unset or unrecognized
    pub fn load_theme(&self) -> BudgetResult<Option<Theme>> {
        Ok(self
            .store
            .get(slots::THEME)?
            .and_then(|raw| raw.parse().ok()))
    }

    /// Persist the theme preference as plaintext
    pub fn save_theme(&self, theme: Theme) -> BudgetResult<()> {
        self.store.put(slots::THEME, &theme.to_string())
    }

    /// Read the legacy plaintext snapshot, if one exists and parses
    ///
    /// Malformed JSON is treated as absent data.
    pub fn load_legacy_snapshot(&self) -> BudgetResult<Option<LegacySnapshot>> {
        Ok(self
            .store
            .get(slots::LEGACY_SNAPSHOT)?
            .and_then(|raw| serde_json::from_str(&raw).ok()))
    }

    /// Drop the legacy snapshot after migration
    pub fn clear_legacy_snapshot(&self) -> BudgetResult<()> {
        self.store.remove(slots::LEGACY_SNAPSHOT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::kv::MemoryStore;
    use argon2::password_hash::{rand_core::OsRng, SaltString};

    fn test_vault() -> Vault<MemoryStore> {
        let salt = SaltString::generate(&mut OsRng);
        let params = KeyDerivationParams::with_values(salt.to_string(), 1024, 1, 1);
        Vault::with_params(MemoryStore::new(), params).unwrap()
    }

    #[test]
    fn test_open_reads_existing_params() {
        let store = MemoryStore::new();
        store
            .put(
                slots::KDF_PARAMS,
                r#"{"salt":"q3zCA+P5GkPcoNgZgXETiA","memory_cost":1024,"time_cost":1,"parallelism":1}"#,
            )
            .unwrap();
        let vault = Vault::open(store).unwrap();
        assert_eq!(vault.params.memory_cost, 1024);
    }

    #[test]
    fn test_open_regenerates_malformed_params() {
        let store = MemoryStore::new();
        store.put(slots::KDF_PARAMS, "not json").unwrap();
        let vault = Vault::open(store).unwrap();
        assert!(!vault.params.salt.is_empty());
    }

    #[test]
    fn test_load_defaults_when_absent() {
        let vault = test_vault();
        let key = vault.data_key().unwrap();

        assert!(vault.load_expenses(&key).unwrap().is_empty());
        assert!(vault.load_categories(&key).unwrap().is_empty());
        assert_eq!(vault.load_income(&key).unwrap(), 0.0);
        assert_eq!(vault.load_monthly_budget(&key).unwrap(), 0.0);
        assert_eq!(vault.load_monthly_goal(&key).unwrap(), 0.0);
    }

    #[test]
    fn test_save_load_round_trip() {
        let vault = test_vault();
        let key = vault.data_key().unwrap();

        let data = BudgetData {
            expenses: vec![Expense::new(1, 50.0, "food", "2025-03-05")],
            categories: vec!["food".into(), "rent".into()],
            income: 1200.0,
            monthly_budget: 800.0,
            monthly_goal: 200.0,
        };

        vault.save_all(&data, &key).unwrap();
        let loaded = vault.load_all(&key).unwrap();
        assert_eq!(data, loaded);
    }

    #[test]
    fn test_wrong_key_loads_defaults() {
        let vault = test_vault();

        let no_pin_key = vault.derive_data_key(None).unwrap();
        vault
            .save_expenses(&[Expense::new(1, 50.0, "food", "2025-03-05")], &no_pin_key)
            .unwrap();

        // Same data read under a PIN-derived key fails closed to the default
        let pin_key = vault.derive_data_key(Some("1234")).unwrap();
        assert!(vault.load_expenses(&pin_key).unwrap().is_empty());
    }

    #[test]
    fn test_corrupted_slot_loads_default() {
        let vault = test_vault();
        let key = vault.data_key().unwrap();

        vault.store().put(slots::INCOME, "garbage").unwrap();
        assert_eq!(vault.load_income(&key).unwrap(), 0.0);
    }

    #[test]
    fn test_pin_round_trip() {
        let vault = test_vault();
        assert!(vault.load_pin().unwrap().is_none());

        vault.save_pin("1234").unwrap();
        let pin = vault.load_pin().unwrap().unwrap();
        assert_eq!(pin.as_str(), "1234");

        // PIN slot holds ciphertext, not the PIN itself
        let raw = vault.store().get(slots::APP_PIN).unwrap().unwrap();
        assert!(!raw.contains("1234"));
    }

    #[test]
    fn test_data_key_tracks_stored_pin() {
        let vault = test_vault();
        let key = vault.data_key().unwrap();
        vault.save_income(1200.0, &key).unwrap();

        // Setting a PIN changes the data key, so the old slot fails closed
        vault.save_pin("1234").unwrap();
        let new_key = vault.data_key().unwrap();
        assert_eq!(vault.load_income(&new_key).unwrap(), 0.0);
    }

    #[test]
    fn test_theme_plaintext_slot() {
        let vault = test_vault();
        assert_eq!(vault.load_theme().unwrap(), None);

        vault.save_theme(Theme::Light).unwrap();
        assert_eq!(vault.load_theme().unwrap(), Some(Theme::Light));
        assert_eq!(
            vault.store().get(slots::THEME).unwrap(),
            Some("light".to_string())
        );
    }

    #[test]
    fn test_legacy_snapshot() {
        let vault = test_vault();
        assert!(vault.load_legacy_snapshot().unwrap().is_none());

        vault
            .store()
            .put(
                slots::LEGACY_SNAPSHOT,
                r#"{"income": 900, "expenses": [{"id": 1, "amount": 50, "category": "food", "date": "2025-03-05"}]}"#,
            )
            .unwrap();

        let snapshot = vault.load_legacy_snapshot().unwrap().unwrap();
        assert_eq!(snapshot.income, 900.0);
        assert_eq!(snapshot.expenses.len(), 1);

        vault.clear_legacy_snapshot().unwrap();
        assert!(vault.load_legacy_snapshot().unwrap().is_none());
    }

    #[test]
    fn test_malformed_legacy_snapshot_ignored() {
        let vault = test_vault();
        vault
            .store()
            .put(slots::LEGACY_SNAPSHOT, "{broken json")
            .unwrap();
        assert!(vault.load_legacy_snapshot().unwrap().is_none());
    }
}
