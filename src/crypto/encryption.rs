//! AES-256-GCM encryption of JSON-serializable values
//!
//! Values are serialized to canonical JSON, encrypted with a fresh random
//! nonce per operation, and emitted as a single ciphertext string
//! `v1:<nonce>:<ciphertext>` (both parts base64). Decryption of values fails
//! closed: any failure (wrong key, corrupted or truncated ciphertext,
//! non-JSON plaintext) yields `None`, never an error.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::{
    aead::{Aead, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{BudgetError, BudgetResult};

use super::DerivedKey;

/// Size of the AES-GCM nonce in bytes (96 bits)
const NONCE_SIZE: usize = 12;

/// Ciphertext string format version prefix
const VERSION_PREFIX: &str = "v1";

/// Encrypt raw bytes, producing a `v1:<nonce>:<ciphertext>` string
pub fn encrypt_bytes(plaintext: &[u8], key: &DerivedKey) -> BudgetResult<String> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| BudgetError::Encryption(format!("Failed to create cipher: {}", e)))?;

    // Fresh random nonce per encryption
    let mut nonce_bytes = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, plaintext)
        .map_err(|e| BudgetError::Encryption(format!("Encryption failed: {}", e)))?;

    Ok(format!(
        "{}:{}:{}",
        VERSION_PREFIX,
        STANDARD.encode(nonce_bytes),
        STANDARD.encode(&ciphertext)
    ))
}

/// Decrypt a `v1:<nonce>:<ciphertext>` string back to raw bytes
pub fn decrypt_bytes(encrypted: &str, key: &DerivedKey) -> BudgetResult<Vec<u8>> {
    let mut parts = encrypted.splitn(3, ':');
    let version = parts.next().unwrap_or_default();
    let nonce_part = parts
        .next()
        .ok_or_else(|| BudgetError::Encryption("Missing nonce".to_string()))?;
    let ciphertext_part = parts
        .next()
        .ok_or_else(|| BudgetError::Encryption("Missing ciphertext".to_string()))?;

    if version != VERSION_PREFIX {
        return Err(BudgetError::Encryption(format!(
            "Unsupported ciphertext version: {}",
            version
        )));
    }

    let nonce_bytes = STANDARD
        .decode(nonce_part)
        .map_err(|e| BudgetError::Encryption(format!("Invalid nonce encoding: {}", e)))?;
    if nonce_bytes.len() != NONCE_SIZE {
        return Err(BudgetError::Encryption(format!(
            "Invalid nonce size: expected {}, got {}",
            NONCE_SIZE,
            nonce_bytes.len()
        )));
    }
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = STANDARD
        .decode(ciphertext_part)
        .map_err(|e| BudgetError::Encryption(format!("Invalid ciphertext encoding: {}", e)))?;

    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| BudgetError::Encryption(format!("Failed to create cipher: {}", e)))?;

    cipher.decrypt(nonce, ciphertext.as_ref()).map_err(|_| {
        BudgetError::Encryption("Decryption failed: invalid key or corrupted data".to_string())
    })
}

/// Encrypt a JSON-serializable value to a single ciphertext string
pub fn encrypt_value<T: Serialize>(value: &T, key: &DerivedKey) -> BudgetResult<String> {
    let plaintext = serde_json::to_vec(value)?;
    encrypt_bytes(&plaintext, key)
}

/// Decrypt a ciphertext string back to a value, failing closed
///
/// Returns `None` on any failure: wrong key, corrupted or malformed
/// ciphertext, or plaintext that does not deserialize as `T`.
pub fn decrypt_value<T: DeserializeOwned>(encrypted: &str, key: &DerivedKey) -> Option<T> {
    let plaintext = decrypt_bytes(encrypted, key).ok()?;
    serde_json::from_slice(&plaintext).ok()
}
