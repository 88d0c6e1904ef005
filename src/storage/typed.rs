//! Storage - Typed JSON facade over a raw value store.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{StorageError, ValueStore};

/// Typed facade over a [`ValueStore`]: values go in and out as JSON.
///
/// Missing keys are `Ok(None)`, never errors. A stored value that no
/// longer decodes as the requested type is an error; unlike a silent
/// fallback, that surfaces schema drift at the call site.
///
/// ## Example
///
/// ```
/// use emitter_rust::{InMemoryValueStore, Storage};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// struct Profile {
///     name: String,
///     volume: u8,
/// }
///
/// let storage = Storage::new(InMemoryValueStore::new());
/// storage.set("profile", &Profile { name: "sam".into(), volume: 7 })?;
///
/// let loaded: Option<Profile> = storage.get("profile")?;
/// assert_eq!(loaded, Some(Profile { name: "sam".into(), volume: 7 }));
///
/// let volume: u8 = storage.get_or("missing", 5)?;
/// assert_eq!(volume, 5);
/// # Ok::<(), emitter_rust::StorageError>(())
/// ```
pub struct Storage<S: ValueStore> {
    store: S,
}

impl<S: ValueStore> Storage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Serialize `value` and store it under `key`, replacing any previous
    /// value.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(value).map_err(|e| StorageError::Serialize {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.store.put(key, encoded)
    }

    /// Fetch and deserialize the value under `key`. Returns None if the
    /// key is not present.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.store.fetch(key)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => Ok(Some(value)),
                Err(e) => {
                    log::warn!("stored value at key {} failed to decode: {}", key, e);
                    Err(StorageError::Deserialize {
                        key: key.to_string(),
                        message: e.to_string(),
                    })
                }
            },
            None => Ok(None),
        }
    }

    /// Fetch the value under `key`, falling back to `default` when the
    /// key is missing. Decode failures still propagate.
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T, StorageError> {
        Ok(self.get(key)?.unwrap_or(default))
    }

    /// Remove the value under `key`. Returns true if it existed.
    pub fn remove(&self, key: &str) -> Result<bool, StorageError> {
        self.store.remove(key)
    }

    /// Whether `key` holds a value.
    pub fn has(&self, key: &str) -> Result<bool, StorageError> {
        self.store.contains(key)
    }

    /// Remove everything. Returns how many values were removed.
    pub fn clear(&self) -> Result<usize, StorageError> {
        self.store.clear()
    }

    /// All stored keys, in no particular order.
    pub fn keys(&self) -> Result<Vec<String>, StorageError> {
        self.store.keys()
    }

    /// Number of stored values.
    pub fn len(&self) -> Result<usize, StorageError> {
        self.store.len()
    }

    /// Whether the store holds nothing.
    pub fn is_empty(&self) -> Result<bool, StorageError> {
        self.store.is_empty()
    }

    /// The raw backend.
    pub fn store(&self) -> &S {
        &self.store
    }
}
