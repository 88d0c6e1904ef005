//! InMemoryValueStore - HashMap-backed store for testing and development.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{StorageError, ValueStore};

/// In-memory value store backed by a HashMap.
///
/// Clone-friendly via Arc: clones share the same storage.
#[derive(Clone)]
pub struct InMemoryValueStore {
    storage: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for InMemoryValueStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryValueStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl ValueStore for InMemoryValueStore {
    fn put(&self, key: &str, value: String) -> Result<(), StorageError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StorageError::Backend("lock poisoned".into()))?;

        storage.insert(key.to_string(), value);
        Ok(())
    }

    fn fetch(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StorageError::Backend("lock poisoned".into()))?;

        Ok(storage.get(key).cloned())
    }

    fn remove(&self, key: &str) -> Result<bool, StorageError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StorageError::Backend("lock poisoned".into()))?;

        Ok(storage.remove(key).is_some())
    }

    fn contains(&self, key: &str) -> Result<bool, StorageError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StorageError::Backend("lock poisoned".into()))?;

        Ok(storage.contains_key(key))
    }

    fn clear(&self) -> Result<usize, StorageError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StorageError::Backend("lock poisoned".into()))?;

        let removed = storage.len();
        storage.clear();
        Ok(removed)
    }

    fn len(&self) -> Result<usize, StorageError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StorageError::Backend("lock poisoned".into()))?;

        Ok(storage.len())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StorageError::Backend("lock poisoned".into()))?;

        Ok(storage.keys().cloned().collect())
    }
}
