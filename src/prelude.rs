//! Convenience re-exports for common usage.
//!
//! ```
//! use webstorage::prelude::*;
//! ```

pub use crate::{
    BackendError, MemoryBackend, StorageBackend, StoreError, StoreOptions, StoreResult, Value,
    WebStorage, WebStorageBuilder,
};
