//! Key-value persistence for the serialized cart.

pub mod json_file;

pub use json_file::*;

use std::collections::HashMap;
use std::sync::Mutex;

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(String),
}

/// Durable key-value store for the serialized cart. Keys are namespaced
/// strings; payloads must round-trip exactly.
pub trait CartStorage: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&self, key: &str, payload: &str) -> Result<(), StorageError>;
}

/// Map-backed storage for tests and the default demo wiring.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Io("storage lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, payload: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Io("storage lock poisoned".to_string()))?;
        entries.insert(key.to_string(), payload.to_string());
        Ok(())
    }
}
