//! Durable string-keyed storage and the favorites persistence adapter.
//!
//! The store mirrors a browser's `localStorage`: synchronous, string keys,
//! string values. Callers above [`FavoritesPersistence`] never see a
//! storage error; everything is logged and degraded to an empty result.

mod favorites;
mod file;
mod memory;

use std::path::PathBuf;

use thiserror::Error;

pub use favorites::{FavoritesPersistence, FAVORITES_KEY};
pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors raised by [`KeyValueStore`] implementations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access storage file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage file '{path}' is not a JSON object: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Synchronous key-value store with string keys and values.
pub trait KeyValueStore: Send + Sync {
    /// Read a value. `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Insert or replace a value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a value. Deleting a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Default location of the storage file.
///
/// Uses `{data_dir}/storefront/storage.json`, falling back to the current
/// directory if no data dir is known.
pub fn default_storage_path() -> PathBuf {
    let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data_dir.join("storefront").join("storage.json")
}
