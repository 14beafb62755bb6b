//! # webstorage
//!
//! Namespaced, JSON-typed key-value stores over a shared string storage
//! backend.
//!
//! A backend (the shape of a browser's `localStorage`) is one flat, global
//! mapping from string keys to string values, shared by every consumer.
//! `webstorage` lets any number of independent logical stores coexist in
//! that namespace: each store owns the keys under its prefix, sees only
//! those keys, and reads and writes JSON values instead of raw strings.
//!
//! ## Quick Start
//!
//! ```
//! use webstorage::prelude::*;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), webstorage::StoreError> {
//! let store = WebStorage::builder().name("todos").build()?;
//!
//! store.set("a", json!({"done": false}));
//! store.set("b", json!({"done": true}));
//!
//! assert_eq!(store.get("a"), json!({"done": false}));
//! assert_eq!(store.len(), Some(2));
//!
//! store.clear();
//! assert_eq!(store.keys(), Some(vec![]));
//! # Ok(())
//! # }
//! ```
//!
//! ## Progressive Disclosure
//!
//! Every operation comes in three tiers:
//!
//! 1. **Silent** — `store.get("k")`: failures are contained and logged at
//!    `warn`; the operation yields its fallback value.
//! 2. **Callback** — `store.get_with("k", |e| ...)`: failures are contained
//!    and delivered to the callback.
//! 3. **Result** — `store.try_get("k")`: full control, explicit
//!    `Result<_, StoreError>`.
//!
//! Construction-time validation failures are the exception: they are caller
//! bugs and always surface as `Err` from [`WebStorage::builder`]'s
//! `build()`, never through a callback.
//!
//! ## Sharing a backend
//!
//! Stores built without an explicit backend share one process-wide
//! in-memory backend, mirroring scripts sharing `localStorage`. Pass
//! `Arc<dyn StorageBackend>` to [`WebStorageBuilder::backend`] to wire a
//! different one.

#![warn(missing_docs)]

mod store;

pub mod prelude;

pub use store::{WebStorage, WebStorageBuilder};

// Re-export the core surface so callers depend on one crate.
pub use webstorage_core::{
    BackendError, BackendResult, StorageBackend, StoreError, StoreOptions, StoreResult, Value,
};
pub use webstorage_storage::MemoryBackend;
