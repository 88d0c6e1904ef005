//! ValueStore - Abstract string key-value storage.

use super::StorageError;

/// Abstract string key-value storage for serialized values.
///
/// Implementations own the raw representation; the typed `Storage` facade
/// handles encoding. All methods take `&self`, so implementations manage
/// their own interior mutability.
pub trait ValueStore: Send + Sync {
    /// Store `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: String) -> Result<(), StorageError>;

    /// Fetch the raw value under `key`. Returns None if not present.
    fn fetch(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Remove the value under `key`. Returns true if it existed.
    fn remove(&self, key: &str) -> Result<bool, StorageError>;

    /// Whether `key` currently holds a value.
    fn contains(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.fetch(key)?.is_some())
    }

    /// Remove every stored value. Returns how many were removed.
    fn clear(&self) -> Result<usize, StorageError>;

    /// Number of stored values.
    fn len(&self) -> Result<usize, StorageError>;

    /// Whether the store holds nothing.
    fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.len()? == 0)
    }

    /// All stored keys, in no particular order.
    fn keys(&self) -> Result<Vec<String>, StorageError>;
}
