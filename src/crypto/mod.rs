//! Cryptographic functions for pocket-budget
//!
//! Provides AES-256-GCM encryption with Argon2id key derivation for at-rest
//! protection of budget data under a PIN-derived key.

pub mod encryption;
pub mod key_derivation;
pub mod secure_memory;

pub use encryption::{decrypt_bytes, decrypt_value, encrypt_bytes, encrypt_value};
pub use key_derivation::{derive_key, DerivedKey, KeyDerivationParams};
pub use secure_memory::SecureString;
