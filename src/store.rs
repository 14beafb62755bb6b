//! The `WebStorage` facade.
//!
//! A `WebStorage` is a stateless view over a shared backend: it holds only
//! the backend handle, its validated options, and the key prefix derived
//! from them once at construction. All data lives in the backend; any
//! number of stores (same or different names) may share one backend, and
//! unrelated code may mutate the backend between or during a store's
//! operations. The descending walk in `webstorage-storage` is what keeps
//! self-mutating enumeration (`clear`) correct under that model.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use webstorage_core::error::{StoreError, StoreResult};
use webstorage_core::{codec, key, StorageBackend, StoreOptions};
use webstorage_storage::for_each_prefixed;

/// Key written and removed by [`WebStorage::is_available`].
const PROBE_KEY: &str = "web-storage/__availability-probe__";

/// A namespaced, JSON-typed store over a shared string backend.
///
/// Construct via [`WebStorage::builder`] (or [`WebStorage::new`] for all
/// defaults). Construction validates the options and derives the key
/// prefix; both are immutable for the store's lifetime. The store holds no
/// other state and no resources, so there is no close or teardown step.
///
/// # Example
///
/// ```ignore
/// let backend: Arc<dyn StorageBackend> = Arc::new(MemoryBackend::new());
/// let todos = WebStorage::builder()
///     .name("todos")
///     .backend(backend.clone())
///     .build()?;
/// let notes = WebStorage::builder()
///     .name("notes")
///     .backend(backend)
///     .build()?;
///
/// // Same backend, fully disjoint namespaces.
/// todos.set("a", json!({"done": false}));
/// assert_eq!(notes.keys(), Some(vec![]));
/// ```
#[derive(Clone)]
pub struct WebStorage {
    backend: Arc<dyn StorageBackend>,
    options: StoreOptions,
    prefix: String,
}

impl WebStorage {
    /// Create a store with default options on the process-wide shared
    /// backend.
    pub fn new() -> StoreResult<Self> {
        Self::builder().build()
    }

    /// Create a builder for store configuration.
    pub fn builder() -> WebStorageBuilder {
        WebStorageBuilder::new()
    }

    /// The store's name.
    pub fn name(&self) -> &str {
        &self.options.name
    }

    /// The separator between the store name and logical keys.
    pub fn key_separator(&self) -> &str {
        &self.options.key_separator
    }

    /// The derived key prefix owning this store's namespace.
    pub fn key_prefix(&self) -> &str {
        &self.prefix
    }

    /// The backend this store operates on.
    pub fn backend(&self) -> &Arc<dyn StorageBackend> {
        &self.backend
    }

    /// Check whether `backend` is present and writable.
    ///
    /// Writes a fixed probe key and removes it again; returns `true` only
    /// if both succeed. Detects a backend that exists but is disabled
    /// (e.g. platform privacy mode) or full.
    pub fn is_available(backend: &dyn StorageBackend) -> bool {
        backend
            .set(PROBE_KEY, "probe")
            .and_then(|_| backend.remove(PROBE_KEY))
            .is_ok()
    }

    // =========================================================================
    // Result tier — explicit errors
    // =========================================================================

    /// Read and decode the value stored under `key`.
    ///
    /// Yields `Value::Null` if the key is absent: absence and a stored
    /// JSON `null` are indistinguishable here. Use [`try_exists`] to tell
    /// them apart.
    ///
    /// [`try_exists`]: WebStorage::try_exists
    pub fn try_get(&self, key: &str) -> StoreResult<Value> {
        let physical = key::join(&self.prefix, key);
        match self.backend.get(&physical)? {
            Some(text) => codec::decode(&text),
            None => Ok(Value::Null),
        }
    }

    /// Encode `value` and write it under `key`.
    ///
    /// On failure (e.g. quota exceeded) the write is not retried and the
    /// prior state is unchanged.
    pub fn try_set(&self, key: &str, value: impl Into<Value>) -> StoreResult<()> {
        let physical = key::join(&self.prefix, key);
        let text = codec::encode(&value.into())?;
        self.backend.set(&physical, &text)?;
        Ok(())
    }

    /// Remove the value stored under `key`.
    ///
    /// Removing an absent key is not an error.
    pub fn try_remove(&self, key: &str) -> StoreResult<()> {
        let physical = key::join(&self.prefix, key);
        self.backend.remove(&physical)?;
        Ok(())
    }

    /// Check whether `key` is physically present, without decoding.
    ///
    /// This is the one operation that can distinguish an absent key from a
    /// stored JSON `null`.
    pub fn try_exists(&self, key: &str) -> StoreResult<bool> {
        let physical = key::join(&self.prefix, key);
        Ok(self.backend.get(&physical)?.is_some())
    }

    /// Remove every key belonging to this store, and no others.
    ///
    /// Best-effort: keys removed before a failure stay removed.
    pub fn try_clear(&self) -> StoreResult<()> {
        let mut removed = 0usize;
        for_each_prefixed::<StoreError, _>(self.backend.as_ref(), &self.prefix, |physical, _| {
            self.backend.remove(physical)?;
            removed += 1;
            Ok(())
        })?;
        debug!(store = %self.options.name, removed, "store cleared");
        Ok(())
    }

    /// Collect the logical key of every entry belonging to this store.
    ///
    /// Order is implementation-defined (currently the walk's descending
    /// backend-index order); callers must not assume insertion order.
    pub fn try_keys(&self) -> StoreResult<Vec<String>> {
        let mut keys = Vec::new();
        for_each_prefixed::<StoreError, _>(self.backend.as_ref(), &self.prefix, |physical, _| {
            keys.push(key::strip(physical, &self.prefix).to_owned());
            Ok(())
        })?;
        Ok(keys)
    }

    /// The number of entries belonging to this store.
    pub fn try_len(&self) -> StoreResult<usize> {
        Ok(self.try_keys()?.len())
    }

    /// Decode each entry belonging to this store and pass
    /// `(value, logical_key)` to `visitor`.
    ///
    /// A decode or backend failure aborts the remaining walk; entries
    /// already visited are not revisited.
    pub fn try_iterate<F>(&self, mut visitor: F) -> StoreResult<()>
    where
        F: FnMut(Value, &str),
    {
        for_each_prefixed::<StoreError, _>(self.backend.as_ref(), &self.prefix, |physical, raw| {
            let value = codec::decode(raw)?;
            visitor(value, key::strip(physical, &self.prefix));
            Ok(())
        })
    }

    // =========================================================================
    // Callback tier — failures delivered to `on_error`
    // =========================================================================

    /// [`try_get`] with containment: failures go to `on_error` and the
    /// call yields `Value::Null`.
    ///
    /// [`try_get`]: WebStorage::try_get
    pub fn get_with(&self, key: &str, mut on_error: impl FnMut(StoreError)) -> Value {
        self.try_get(key).unwrap_or_else(|e| {
            on_error(e);
            Value::Null
        })
    }

    /// [`try_set`] with containment.
    ///
    /// [`try_set`]: WebStorage::try_set
    pub fn set_with(
        &self,
        key: &str,
        value: impl Into<Value>,
        mut on_error: impl FnMut(StoreError),
    ) {
        if let Err(e) = self.try_set(key, value) {
            on_error(e);
        }
    }

    /// [`try_remove`] with containment.
    ///
    /// [`try_remove`]: WebStorage::try_remove
    pub fn remove_with(&self, key: &str, mut on_error: impl FnMut(StoreError)) {
        if let Err(e) = self.try_remove(key) {
            on_error(e);
        }
    }

    /// [`try_exists`] with containment: failures yield `false`.
    ///
    /// [`try_exists`]: WebStorage::try_exists
    pub fn exists_with(&self, key: &str, mut on_error: impl FnMut(StoreError)) -> bool {
        self.try_exists(key).unwrap_or_else(|e| {
            on_error(e);
            false
        })
    }

    /// [`try_clear`] with containment.
    ///
    /// [`try_clear`]: WebStorage::try_clear
    pub fn clear_with(&self, mut on_error: impl FnMut(StoreError)) {
        if let Err(e) = self.try_clear() {
            on_error(e);
        }
    }

    /// [`try_keys`] with containment: failures yield `None`.
    ///
    /// `None` means the walk failed; an empty store yields `Some(vec![])`.
    ///
    /// [`try_keys`]: WebStorage::try_keys
    pub fn keys_with(&self, mut on_error: impl FnMut(StoreError)) -> Option<Vec<String>> {
        match self.try_keys() {
            Ok(keys) => Some(keys),
            Err(e) => {
                on_error(e);
                None
            }
        }
    }

    /// [`try_len`] with containment: failures yield `None`.
    ///
    /// [`try_len`]: WebStorage::try_len
    pub fn len_with(&self, mut on_error: impl FnMut(StoreError)) -> Option<usize> {
        match self.try_len() {
            Ok(len) => Some(len),
            Err(e) => {
                on_error(e);
                None
            }
        }
    }

    /// [`try_iterate`] with containment.
    ///
    /// [`try_iterate`]: WebStorage::try_iterate
    pub fn iterate_with<F>(&self, visitor: F, mut on_error: impl FnMut(StoreError))
    where
        F: FnMut(Value, &str),
    {
        if let Err(e) = self.try_iterate(visitor) {
            on_error(e);
        }
    }

    // =========================================================================
    // Silent tier — containment with a warn log
    // =========================================================================

    /// Read the value stored under `key`; `Value::Null` on absence or any
    /// contained failure.
    pub fn get(&self, key: &str) -> Value {
        self.get_with(key, |e| self.contain("get", e))
    }

    /// Write `value` under `key`; failures are contained.
    pub fn set(&self, key: &str, value: impl Into<Value>) {
        self.set_with(key, value, |e| self.contain("set", e));
    }

    /// Remove `key`; failures are contained.
    pub fn remove(&self, key: &str) {
        self.remove_with(key, |e| self.contain("remove", e));
    }

    /// Whether `key` is physically present; `false` on contained failure.
    pub fn exists(&self, key: &str) -> bool {
        self.exists_with(key, |e| self.contain("exists", e))
    }

    /// Remove every key belonging to this store; failures are contained.
    pub fn clear(&self) {
        self.clear_with(|e| self.contain("clear", e));
    }

    /// This store's logical keys, or `None` if the walk failed.
    pub fn keys(&self) -> Option<Vec<String>> {
        self.keys_with(|e| self.contain("keys", e))
    }

    /// The number of entries in this store, or `None` if the walk failed.
    pub fn len(&self) -> Option<usize> {
        self.len_with(|e| self.contain("len", e))
    }

    /// Whether this store holds no entries, or `None` if the walk failed.
    pub fn is_empty(&self) -> Option<bool> {
        self.len().map(|len| len == 0)
    }

    /// Visit `(value, logical_key)` for each entry; failures are
    /// contained.
    pub fn iterate<F>(&self, visitor: F)
    where
        F: FnMut(Value, &str),
    {
        self.iterate_with(visitor, |e| self.contain("iterate", e));
    }

    fn contain(&self, op: &'static str, err: StoreError) {
        warn!(store = %self.options.name, op, error = %err, "operation failed; error contained");
    }
}

impl std::fmt::Debug for WebStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebStorage")
            .field("name", &self.options.name)
            .field("key_separator", &self.options.key_separator)
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

/// Builder for store configuration.
///
/// Defaults: name `"web-storage"`, key separator `"/"`, and the
/// process-wide shared in-memory backend.
///
/// # Example
///
/// ```ignore
/// let store = WebStorage::builder()
///     .name("session")
///     .key_separator("::")
///     .backend(backend)
///     .build()?;
/// ```
pub struct WebStorageBuilder {
    backend: Option<Arc<dyn StorageBackend>>,
    options: StoreOptions,
}

impl WebStorageBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self {
            backend: None,
            options: StoreOptions::default(),
        }
    }

    /// Set the store name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.options.name = name.into();
        self
    }

    /// Set the separator between the store name and logical keys.
    pub fn key_separator(mut self, key_separator: impl Into<String>) -> Self {
        self.options.key_separator = key_separator.into();
        self
    }

    /// Use a specific backend instead of the process-wide shared one.
    pub fn backend(mut self, backend: Arc<dyn StorageBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Replace the whole options struct.
    pub fn options(mut self, options: StoreOptions) -> Self {
        self.options = options;
        self
    }

    /// Validate the options and construct the store.
    ///
    /// Validation runs before the key prefix is derived; a store never
    /// exists in a partially-valid state.
    pub fn build(self) -> StoreResult<WebStorage> {
        self.options.validate()?;
        let prefix = key::prefix_for(&self.options.name, &self.options.key_separator);
        let backend = self
            .backend
            .unwrap_or_else(|| webstorage_storage::shared() as Arc<dyn StorageBackend>);
        debug!(
            store = %self.options.name,
            separator = %self.options.key_separator,
            "store constructed"
        );
        Ok(WebStorage {
            backend,
            options: self.options,
            prefix,
        })
    }
}

impl Default for WebStorageBuilder {
    fn default() -> Self {
        Self::new()
    }
}
