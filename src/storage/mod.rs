//! Storage layer for pocket-budget
//!
//! A string key-value persistence medium (file-backed with atomic writes,
//! or in-memory for tests), the encrypted vault that reads and writes
//! ciphertext slots over it, and the PIN lock session.

pub mod kv;
pub mod lock;
pub mod vault;

pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use lock::{LockSession, PIN_LENGTH};
pub use vault::{LegacySnapshot, Vault, DEFAULT_PASSPHRASE, PIN_AT_REST_PASSPHRASE};
