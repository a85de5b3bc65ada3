//! pocket-budget - PIN-locked personal budget tracker
//!
//! This library provides the core functionality for the pocket-budget
//! application: a personal budget tracker that records income and
//! categorized expenses, derives aggregate statistics and chart data, and
//! keeps everything at rest encrypted under a PIN-derived key.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, the budget snapshot, months)
//! - `reports`: The calculation engine (pure derived metrics)
//! - `crypto`: AES-256-GCM encryption with Argon2id key derivation
//! - `storage`: Key-value persistence, the encrypted vault, and the PIN lock
//! - `services`: Business logic layer
//! - `export`: CSV export and encrypted backups
//! - `display`: Terminal rendering of computed report data
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use pocket_budget::storage::{FileStore, Vault};
//!
//! let vault = Vault::open(FileStore::new(data_dir))?;
//! let key = vault.data_key()?;
//! let data = vault.load_all(&key)?;
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
