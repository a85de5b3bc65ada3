//! PIN CLI command

use crate::error::{BudgetError, BudgetResult};
use crate::services::BudgetBook;
use crate::storage::{FileStore, LockSession, Vault, PIN_LENGTH};

use super::{require_unlock, unlock_data_key};

/// Set (or change) the PIN
///
/// The caller is unlocked with the current PIN first. Domain data is loaded
/// under the old key and re-saved under the new PIN-derived key, so nothing
/// becomes unreadable after the change.
pub fn handle_pin_set_command(vault: &Vault<FileStore>) -> BudgetResult<()> {
    let (mut session, old_key) = unlock_data_key(vault)?;
    let book = BudgetBook::load(vault, &old_key)?;

    let pin = rpassword::prompt_password(format!("New PIN ({} characters): ", PIN_LENGTH))
        .map_err(|e| BudgetError::Io(format!("Failed to read PIN: {}", e)))?;
    let confirm = rpassword::prompt_password("Confirm PIN: ")
        .map_err(|e| BudgetError::Io(format!("Failed to read PIN: {}", e)))?;

    if pin != confirm {
        return Err(BudgetError::Validation("PINs do not match".to_string()));
    }

    if !session.set_pin(pin.trim()) {
        return Err(BudgetError::Validation(format!(
            "PIN must be exactly {} characters",
            PIN_LENGTH
        )));
    }

    vault.save_pin(session.pin().unwrap())?;

    // Re-encrypt everything under the new key
    let new_key = vault.derive_data_key(session.pin())?;
    book.save(vault, &new_key)?;

    println!("PIN set. Data re-encrypted under the new PIN.");
    Ok(())
}

/// Show lock status and verify an unlock attempt
pub fn handle_status_command(vault: &Vault<FileStore>) -> BudgetResult<()> {
    let session = LockSession::new(vault.load_pin()?);
    if session.has_pin() {
        println!("A PIN is set; data slots are encrypted under it.");
    } else {
        println!(
            "No PIN set; data slots are encrypted under the built-in fallback key \
             and are NOT confidentiality-protected."
        );
    }

    // Prompts when locked; proves the PIN opens the vault
    let _ = require_unlock(vault)?;
    println!("Vault unlocked.");
    Ok(())
}
