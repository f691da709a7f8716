//! Key-value persistence seam
//!
//! The page persists through the browser's LocalStorage; the core only sees
//! this trait so it can run (and be tested) against an in-memory map.

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure writing to the backing storage
#[derive(Debug, Error)]
pub enum StorageError {
    /// No storage available (private mode, disabled cookies, native build)
    #[error("storage unavailable")]
    Unavailable,
    /// The backend refused the write (quota exceeded, security error)
    #[error("storage write rejected for key `{key}`: {reason}")]
    WriteRejected { key: String, reason: String },
    #[error("failed to encode value for key `{key}`")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Local string-to-string storage with LocalStorage semantics
pub trait KeyValueStorage {
    /// Value stored under `key`, `None` when absent
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Remove `key`; removing an absent key is not an error
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Decode the JSON stored under `key`.
///
/// Absent and unparsable values both yield `None`; corruption is logged.
pub fn load_json<T: DeserializeOwned>(storage: &impl KeyValueStorage, key: &str) -> Option<T> {
    let json = storage.get(key)?;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring unparsable value under `{}`: {}", key, e);
            None
        }
    }
}

/// Encode `value` as JSON and store it under `key` in one write
pub fn save_json<T: Serialize>(
    storage: &mut impl KeyValueStorage,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })?;
    storage.set(key, &json)
}

/// In-memory storage, used by the native demo and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.items.remove(key);
        Ok(())
    }
}
