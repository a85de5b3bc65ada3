//! Encrypted backup export and import
//!
//! A backup is a single ciphertext string (not JSON-wrapped) whose decrypted
//! plaintext is the JSON `BackupArchive`. Unlike the vault slots, a backup
//! must open on a different device, so it embeds its own key-derivation salt:
//! `v1:<salt>:<nonce>:<ciphertext>`. Import fails closed: anything that does
//! not decrypt to a valid archive under the given passphrase yields `None`.

use chrono::{DateTime, Utc};

use crate::crypto::{decrypt_value, derive_key, encrypt_value, KeyDerivationParams};
use crate::error::{BudgetError, BudgetResult};
use crate::models::BackupArchive;
use crate::services::BudgetBook;

/// Default backup filename
pub const BACKUP_FILENAME: &str = "budget_secure_backup.json";

/// Export the book as a single encrypted backup string
///
/// A fresh random salt is generated per backup and embedded in the string.
pub fn export_backup(
    book: &BudgetBook,
    passphrase: &str,
    timestamp: DateTime<Utc>,
) -> BudgetResult<String> {
    let params = KeyDerivationParams::new();
    let key = derive_key(passphrase, &params)?;

    let archive = book.backup(timestamp);
    let slot_cipher = encrypt_value(&archive, &key)?;

    // Splice the salt in after the version tag: v1:<salt>:<nonce>:<ct>
    let rest = slot_cipher
        .strip_prefix("v1:")
        .ok_or_else(|| BudgetError::Export("Unexpected ciphertext format".to_string()))?;
    Ok(format!("v1:{}:{}", params.salt, rest))
}

/// Decrypt a backup string; `None` on wrong passphrase or corrupted content
pub fn import_backup(backup: &str, passphrase: &str) -> Option<BackupArchive> {
    let mut parts = backup.trim().splitn(3, ':');
    let version = parts.next()?;
    let salt = parts.next()?;
    let rest = parts.next()?;

    if version != "v1" {
        return None;
    }

    let params = KeyDerivationParams {
        salt: salt.to_string(),
        ..Default::default()
    };
    let key = derive_key(passphrase, &params).ok()?;

    decrypt_value(&format!("v1:{}", rest), &key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetData, Expense};

    fn sample_book() -> BudgetBook {
        BudgetBook::new(BudgetData {
            expenses: vec![Expense::new(1, 50.0, "food", "2025-03-05")],
            categories: vec!["food".into()],
            income: 1200.0,
            monthly_budget: 800.0,
            monthly_goal: 200.0,
        })
    }

    #[test]
    fn test_backup_round_trip() {
        let book = sample_book();

        let ciphertext = export_backup(&book, "1234", Utc::now()).unwrap();
        let archive = import_backup(&ciphertext, "1234").unwrap();

        assert_eq!(archive.expenses, book.expenses());
        assert_eq!(archive.categories, book.categories());
        assert_eq!(archive.income, book.income());
    }

    #[test]
    fn test_backup_is_single_opaque_string() {
        let ciphertext = export_backup(&sample_book(), "1234", Utc::now()).unwrap();

        // Not JSON-wrapped, and none of the plaintext field names leak through
        assert!(serde_json::from_str::<serde_json::Value>(&ciphertext).is_err());
        assert!(!ciphertext.contains("expenses"));
        assert!(!ciphertext.contains("categories"));
    }

    #[test]
    fn test_import_wrong_passphrase_fails_closed() {
        let ciphertext = export_backup(&sample_book(), "1234", Utc::now()).unwrap();
        assert!(import_backup(&ciphertext, "4321").is_none());
    }

    #[test]
    fn test_import_garbage_fails_closed() {
        assert!(import_backup("", "1234").is_none());
        assert!(import_backup("not a backup", "1234").is_none());
        assert!(import_backup("v2:AAAA:AAAA:AAAA", "1234").is_none());
    }

    #[test]
    fn test_import_tolerates_surrounding_whitespace() {
        let ciphertext = export_backup(&sample_book(), "1234", Utc::now()).unwrap();
        let padded = format!("  {}\n", ciphertext);

        assert!(import_backup(&padded, "1234").is_some());
    }
}
