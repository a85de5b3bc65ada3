//! String key-value persistence medium
//!
//! The vault persists through this seam: a string-keyed store of string
//! values with last-writer-wins semantics. `FileStore` keeps one file per
//! slot and writes atomically (temp file, then rename) so a crash cannot
//! leave a half-written slot. `MemoryStore` backs tests.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{BudgetError, BudgetResult};

/// A string-keyed store of string values
pub trait KeyValueStore {
    /// Read a slot; `None` if absent
    fn get(&self, key: &str) -> BudgetResult<Option<String>>;

    /// Write a slot, replacing any previous value
    fn put(&self, key: &str, value: &str) -> BudgetResult<()>;

    /// Delete a slot; deleting an absent slot is not an error
    fn remove(&self, key: &str) -> BudgetResult<()>;
}

/// File-backed store: one file per slot in a single directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given directory
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.dat", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> BudgetResult<Option<String>> {
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path).map_err(|e| {
            BudgetError::Storage(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Ok(Some(contents))
    }

    fn put(&self, key: &str, value: &str) -> BudgetResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            BudgetError::Storage(format!(
                "Failed to create directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let path = self.slot_path(key);

        // Temp file in the same directory, then atomic rename
        let temp_path = path.with_extension("dat.tmp");

        let file = File::create(&temp_path)
            .map_err(|e| BudgetError::Storage(format!("Failed to create temp file: {}", e)))?;

        let mut writer = BufWriter::new(file);
        writer
            .write_all(value.as_bytes())
            .map_err(|e| BudgetError::Storage(format!("Failed to write data: {}", e)))?;
        writer
            .flush()
            .map_err(|e| BudgetError::Storage(format!("Failed to flush data: {}", e)))?;

        // Sync to disk before rename
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| BudgetError::Storage(format!("Failed to sync data: {}", e)))?;

        fs::rename(&temp_path, &path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            BudgetError::Storage(format!("Failed to rename temp file: {}", e))
        })?;

        Ok(())
    }

    fn remove(&self, key: &str) -> BudgetResult<()> {
        let path = self.slot_path(key);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                BudgetError::Storage(format!("Failed to remove {}: {}", path.display(), e))
            })?;
        }
        Ok(())
    }
}

/// In-memory store for tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> BudgetResult<Option<String>> {
        let slots = self
            .slots
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(slots.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> BudgetResult<()> {
        let mut slots = self
            .slots
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> BudgetResult<()> {
        let mut slots = self
            .slots
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        slots.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_get_absent() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());
        assert_eq!(store.get("expenses").unwrap(), None);
    }

    #[test]
    fn test_file_store_put_get() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());

        store.put("income", "v1:abc:def").unwrap();
        assert_eq!(store.get("income").unwrap(), Some("v1:abc:def".to_string()));
    }

    #[test]
    fn test_file_store_overwrite_last_writer_wins() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());

        store.put("theme", "light").unwrap();
        store.put("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap(), Some("dark".to_string()));
    }

    #[test]
    fn test_file_store_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());

        store.put("categories", "data").unwrap();

        let leftovers: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().map_or(false, |ext| ext == "tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_file_store_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("data").join("slots");
        let store = FileStore::new(nested.clone());

        store.put("expenses", "x").unwrap();
        assert!(nested.exists());
    }

    #[test]
    fn test_file_store_remove() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());

        store.put("app_pin", "cipher").unwrap();
        store.remove("app_pin").unwrap();
        assert_eq!(store.get("app_pin").unwrap(), None);

        // Removing again is fine
        store.remove("app_pin").unwrap();
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert_eq!(store.get("expenses").unwrap(), None);

        store.put("expenses", "a").unwrap();
        store.put("expenses", "b").unwrap();
        assert_eq!(store.get("expenses").unwrap(), Some("b".to_string()));

        store.remove("expenses").unwrap();
        assert_eq!(store.get("expenses").unwrap(), None);
    }
}
