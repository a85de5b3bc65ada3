//! Configuration and path management for pocket-budget

pub mod paths;

pub use paths::{BudgetPaths, DATA_DIR_ENV};
