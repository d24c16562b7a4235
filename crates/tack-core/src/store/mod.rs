//! Persistent key-value store
//!
//! A typed key-value accessor for JSON-serializable values. The
//! [`KeyValueStore`] trait is the seam the repository is built against:
//! production code uses [`FileStore`] (one JSON file per key under the
//! data directory), tests inject [`MemoryStore`].
//!
//! Read semantics: a missing key *or* a corrupt stored payload yields the
//! caller-supplied default. Corruption is logged and treated as absence,
//! never as a fatal error.

mod error;
mod file;
mod memory;

pub use error::{StoreError, StoreResult};
pub use file::FileStore;
pub use memory::MemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// Durable mapping from string keys to JSON-serializable values
pub trait KeyValueStore {
    /// Read the raw payload stored under `key`, if any
    fn read_raw(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `payload` under `key`, fully replacing any prior value
    fn write_raw(&mut self, key: &str, payload: &str) -> StoreResult<()>;

    /// Read and deserialize the value stored under `key`
    ///
    /// Returns `default` if the key is absent, unreadable, or holds a
    /// payload that fails to deserialize.
    fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let payload = match self.read_raw(key) {
            Ok(Some(payload)) => payload,
            Ok(None) => return default,
            Err(e) => {
                warn!("failed to read key '{}': {}", key, e);
                return default;
            }
        };

        match serde_json::from_str(&payload) {
            Ok(value) => value,
            Err(e) => {
                warn!("discarding corrupt value for key '{}': {}", key, e);
                default
            }
        }
    }

    /// Serialize and store `value` under `key`
    fn write<T: Serialize>(&mut self, key: &str, value: &T) -> StoreResult<()> {
        let payload = serde_json::to_string(value)?;
        self.write_raw(key, &payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_read_returns_default_when_absent() {
        let store = MemoryStore::new();
        let value: Vec<String> = store.read("missing", vec!["fallback".to_string()]);
        assert_eq!(value, vec!["fallback"]);
    }

    #[test]
    fn test_typed_read_returns_default_on_corrupt_payload() {
        let mut store = MemoryStore::new();
        store.write_raw("broken", "{not json").unwrap();

        let value: Vec<i64> = store.read("broken", vec![42]);
        assert_eq!(value, vec![42]);
    }

    #[test]
    fn test_typed_write_then_read() {
        let mut store = MemoryStore::new();
        store.write("numbers", &vec![1, 2, 3]).unwrap();

        let value: Vec<i64> = store.read("numbers", Vec::new());
        assert_eq!(value, vec![1, 2, 3]);
    }

    #[test]
    fn test_write_fully_replaces_prior_value() {
        let mut store = MemoryStore::new();
        store.write("key", &vec![1, 2, 3]).unwrap();
        store.write("key", &vec![9]).unwrap();

        let value: Vec<i64> = store.read("key", Vec::new());
        assert_eq!(value, vec![9]);
    }
}
