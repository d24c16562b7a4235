//! In-memory key-value store
//!
//! A HashMap-backed fake for tests and ephemeral use. Supports simulating
//! write failures to exercise the repository's durability-loss path.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use crate::store::{KeyValueStore, StoreError, StoreResult};

/// Key-value store held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail as if the disk were full
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Raw payload stored under `key`, for asserting on persisted bytes
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn read_raw(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn write_raw(&mut self, key: &str, payload: &str) -> StoreResult<()> {
        if self.fail_writes {
            return Err(StoreError::from_io(
                io::Error::new(io::ErrorKind::Other, "no space left on device"),
                PathBuf::from(key),
            ));
        }

        self.values.insert(key.to_string(), payload.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_and_read() {
        let mut store = MemoryStore::new();
        store.write_raw("key", "value").unwrap();

        assert_eq!(store.read_raw("key").unwrap().as_deref(), Some("value"));
        assert_eq!(store.raw("key"), Some("value"));
    }

    #[test]
    fn test_failing_writes_leave_prior_value() {
        let mut store = MemoryStore::new();
        store.write_raw("key", "original").unwrap();

        store.set_fail_writes(true);
        let err = store.write_raw("key", "updated").unwrap_err();
        assert!(matches!(err, StoreError::DiskFull { .. }));

        // The stored value is untouched
        assert_eq!(store.raw("key"), Some("original"));
    }
}
