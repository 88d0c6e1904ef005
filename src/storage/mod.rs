//! Typed key-value storage for settings and small state.
//!
//! A [`Storage`] wraps any [`ValueStore`] backend and moves values in and
//! out as JSON, so callers work with their own types while the backend
//! only ever sees strings. [`InMemoryValueStore`] is the bundled backend
//! for tests and development; persistent backends implement the same
//! trait.
//!
//! ## Example
//!
//! ```ignore
//! use emitter_rust::{InMemoryValueStore, Storage};
//!
//! let storage = Storage::new(InMemoryValueStore::new());
//! storage.set("settings", &settings)?;
//!
//! let saved: Option<Settings> = storage.get("settings")?;
//! let volume: u8 = storage.get_or("volume", 5)?;
//! ```

use std::fmt;

mod in_memory;
mod store;
mod typed;

/// Error type for storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// A value could not be serialized for storage.
    Serialize { key: String, message: String },
    /// A stored value could not be deserialized into the requested type.
    Deserialize { key: String, message: String },
    /// Backend-level error.
    Backend(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Serialize { key, message } => {
                write!(f, "failed to serialize value for key {}: {}", key, message)
            }
            StorageError::Deserialize { key, message } => {
                write!(f, "failed to deserialize value at key {}: {}", key, message)
            }
            StorageError::Backend(msg) => write!(f, "storage backend error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

pub use in_memory::InMemoryValueStore;
pub use store::ValueStore;
pub use typed::Storage;
