//! In-memory storage backend.
//!
//! `MemoryBackend` is a faithful stand-in for a browser's `localStorage`:
//! a flat string-to-string mapping with positional key access and the same
//! index behavior — overwriting a key keeps its position, a new key is
//! appended after all current keys, and removing a key shifts every later
//! index down by one.
//!
//! # Thread Safety
//!
//! The key list lives behind a `parking_lot::RwLock`, so a single backend
//! can be shared as `Arc<MemoryBackend>` across any number of stores and
//! threads. Individual backend calls are atomic; sequences of calls are
//! not, which matches the contract every store is written against.
//!
//! # Quota
//!
//! [`MemoryBackend::with_quota`] bounds the total bytes held (keys plus
//! values). A write that would cross the bound fails with
//! [`BackendError::QuotaExceeded`] and leaves the previous state unchanged,
//! simulating a full or disabled platform store.

use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use webstorage_core::error::{BackendError, BackendResult};
use webstorage_core::StorageBackend;

/// An in-memory backend with `localStorage` index semantics.
pub struct MemoryBackend {
    /// Entries in index order. Linear scans are fine at `localStorage`
    /// scale, and index-order access must be exact.
    entries: RwLock<Vec<(String, String)>>,
    /// Maximum total bytes (keys + values); `None` means unbounded.
    quota: Option<usize>,
}

impl MemoryBackend {
    /// Create an unbounded backend.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            quota: None,
        }
    }

    /// Create a backend that holds at most `max_bytes` of keys and values.
    pub fn with_quota(max_bytes: usize) -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            quota: Some(max_bytes),
        }
    }

    /// Total bytes currently held (keys + values).
    pub fn used_bytes(&self) -> usize {
        self.entries
            .read()
            .iter()
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> BackendResult<Option<String>> {
        let entries = self.entries.read();
        Ok(entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone()))
    }

    fn set(&self, key: &str, value: &str) -> BackendResult<()> {
        let mut entries = self.entries.write();

        if let Some(limit) = self.quota {
            let used: usize = entries.iter().map(|(k, v)| k.len() + v.len()).sum();
            let replaced = entries
                .iter()
                .find(|(k, _)| k == key)
                .map(|(k, v)| k.len() + v.len())
                .unwrap_or(0);
            let attempted = used - replaced + key.len() + value.len();
            if attempted > limit {
                return Err(BackendError::QuotaExceeded { attempted, limit });
            }
        }

        match entries.iter_mut().find(|(k, _)| k == key) {
            // Overwrite in place: the key keeps its index position.
            Some(entry) => entry.1 = value.to_owned(),
            None => entries.push((key.to_owned(), value.to_owned())),
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> BackendResult<()> {
        let mut entries = self.entries.write();
        if let Some(index) = entries.iter().position(|(k, _)| k == key) {
            // Vec::remove shifts later entries down, exactly the index
            // behavior the backend contract requires.
            entries.remove(index);
        }
        Ok(())
    }

    fn len(&self) -> BackendResult<usize> {
        Ok(self.entries.read().len())
    }

    fn key_at(&self, index: usize) -> BackendResult<Option<String>> {
        let entries = self.entries.read();
        Ok(entries.get(index).map(|(k, _)| k.clone()))
    }
}

/// The process-wide shared backend.
///
/// This is the "platform-provided" default: every store built without an
/// explicit backend lands in this one flat namespace, so stores constructed
/// anywhere in the process see each other's physical keys exactly as
/// multiple scripts sharing `localStorage` would.
pub fn shared() -> Arc<MemoryBackend> {
    static SHARED: Lazy<Arc<MemoryBackend>> = Lazy::new(|| Arc::new(MemoryBackend::new()));
    Arc::clone(&SHARED)
}
