//! Browser `localStorage` access behind a small key/value trait.
//!
//! SYSTEM CONTEXT
//! ==============
//! The admin session is the only persisted browser state. Flows take a
//! `KeyValueStore` so they run against real storage in the browser and an
//! in-memory map in native tests.
//!
//! ERROR HANDLING
//! ==============
//! Reads and removals are best-effort. Writes report failure (quota exceeded,
//! storage disabled) because a session that was never persisted must not be
//! treated as a successful login.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("local storage write failed for {0}")]
    WriteFailed(String),
    #[error("could not serialize value for {0}: {1}")]
    Serialize(String, String),
}

/// String key/value persistence.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    /// # Errors
    ///
    /// Returns [`StorageError`] when the value was not persisted.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

/// Load a JSON value stored under `key`.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    serde_json::from_str(&raw).ok()
}

/// Save `value` as JSON under `key`.
///
/// # Errors
///
/// `Serialize` when `value` cannot be encoded, otherwise whatever the store
/// reports.
pub fn save_json<T: Serialize>(
    store: &impl KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)
        .map_err(|e| StorageError::Serialize(key.to_owned(), e.to_string()))?;
    store.set(key, &raw)
}

/// `window.localStorage`. Outside the browser reads are empty and writes
/// fail with `Unavailable`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalSessionStore;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for LocalSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|_| StorageError::WriteFailed(key.to_owned()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// In-memory store for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Store whose writes to `failing_key` are refused, like a full quota.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RefusingStore {
    pub(crate) inner: MemoryStore,
    pub(crate) failing_key: Option<&'static str>,
}

#[cfg(test)]
impl RefusingStore {
    /// Refuses every write.
    pub(crate) fn full() -> Self {
        Self::default()
    }

    /// Refuses writes to `key` only.
    pub(crate) fn refusing(key: &'static str) -> Self {
        Self {
            inner: MemoryStore::default(),
            failing_key: Some(key),
        }
    }
}

#[cfg(test)]
impl KeyValueStore for RefusingStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self.failing_key {
            Some(failing) if failing != key => self.inner.set(key, value),
            _ => Err(StorageError::WriteFailed(key.to_owned())),
        }
    }

    fn remove(&self, key: &str) {
        self.inner.remove(key);
    }
}
