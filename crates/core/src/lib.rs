//! Core types for webstorage
//!
//! This crate is the leaf of the workspace. It defines:
//! - The canonical error types ([`StoreError`], [`BackendError`])
//! - The [`StorageBackend`] trait implemented by storage crates
//! - The key-prefix codec that gives each store its namespace
//! - Store options and their construction-time validation
//! - The JSON text codec used to persist typed values
//!
//! Backend implementations live in `webstorage-storage`; the user-facing
//! `WebStorage` facade lives in the root `webstorage` crate.

#![warn(missing_docs)]

pub mod backend;
pub mod codec;
pub mod error;
pub mod key;
pub mod options;

pub use backend::StorageBackend;
pub use error::{BackendError, BackendResult, StoreError, StoreResult};
pub use options::StoreOptions;

/// The value type stored by every store.
///
/// Values are persisted as their JSON text encoding, so anything
/// representable as JSON round-trips through a store.
pub use serde_json::Value;
