//! In-memory substrate
//!
//! Used by tests and anywhere nothing should touch disk. Writes can be made
//! to fail per key, and raw text can be planted to simulate damaged data.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use super::substrate::{KeyValueStore, SubstrateError};

/// `HashMap`-backed key-value store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    failing: RefCell<HashSet<String>>,
    quota: Option<usize>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the total bytes (keys plus values) the store will hold
    #[must_use]
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    /// Store `value` under `key` as-is, bypassing failure injection
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    /// Current raw value under `key`
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Forget the value under `key`
    pub fn remove(&self, key: &str) -> Option<String> {
        self.entries.borrow_mut().remove(key)
    }

    /// Make every write to `key` fail until [`Self::restore_writes`]
    pub fn fail_writes_to(&self, key: &str) {
        self.failing.borrow_mut().insert(key.to_string());
    }

    /// Undo [`Self::fail_writes_to`] for `key`
    pub fn restore_writes(&self, key: &str) {
        self.failing.borrow_mut().remove(key);
    }

    /// Number of stored keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, SubstrateError> {
        Ok(self.raw(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SubstrateError> {
        if self.failing.borrow().contains(key) {
            return Err(SubstrateError::Unavailable(format!(
                "writes to '{key}' are disabled"
            )));
        }

        if let Some(quota) = self.quota {
            let bytes = key.len() + value.len();
            if self.used_bytes_without(key) + bytes > quota {
                return Err(SubstrateError::QuotaExceeded {
                    key: key.to_string(),
                    bytes,
                });
            }
        }

        self.insert_raw(key, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read() {
        let store = MemoryStore::new();
        store.write("rental_vendors", "[]").unwrap();
        assert_eq!(store.read("rental_vendors").unwrap().as_deref(), Some("[]"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn absent_key_reads_none() {
        let store = MemoryStore::new();
        assert!(store.read("missing").unwrap().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn failing_key_rejects_writes_and_keeps_old_value() {
        let store = MemoryStore::new();
        store.write("k", "old").unwrap();
        store.fail_writes_to("k");

        let err = store.write("k", "new").unwrap_err();
        assert!(matches!(err, SubstrateError::Unavailable(_)));
        assert_eq!(store.raw("k").as_deref(), Some("old"));

        store.restore_writes("k");
        store.write("k", "new").unwrap();
        assert_eq!(store.raw("k").as_deref(), Some("new"));
    }

    #[test]
    fn quota_counts_replacement_not_addition() {
        let store = MemoryStore::new().with_quota(10);
        store.write("k", "12345").unwrap();
        // Replacing the same key only needs room for the new value.
        store.write("k", "1234567").unwrap();

        let err = store.write("other", "123").unwrap_err();
        assert!(matches!(err, SubstrateError::QuotaExceeded { bytes: 8, .. }));
    }
}
