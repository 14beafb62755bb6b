//! Unified error types for webstorage.
//!
//! Two layers of failure exist:
//!
//! - [`BackendError`] — the storage backend itself failed: it is absent or
//!   disabled, rejected a write for space, or failed an access. These are
//!   environmental conditions, not bugs.
//! - [`StoreError`] — everything a store operation can report: a backend
//!   failure, malformed stored text, or invalid options at construction.
//!
//! Construction-time validation failures are programmer errors and surface
//! synchronously as `Err` from the builder. Everything else is operational
//! and is contained at the facade boundary.

use thiserror::Error;

/// Failures originating in the storage backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BackendError {
    /// The backend is absent or refuses all access (e.g. disabled by
    /// platform privacy settings).
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),

    /// A write would exceed the backend's storage quota.
    #[error("storage quota exceeded: write of {attempted} bytes over limit of {limit} bytes")]
    QuotaExceeded {
        /// Total bytes the backend would have held after the write.
        attempted: usize,
        /// The backend's configured byte limit.
        limit: usize,
    },

    /// Any other backend access failure.
    #[error("storage backend error: {0}")]
    Io(String),
}

/// All webstorage errors.
///
/// This is the canonical error type for store operations. The contained
/// operation tiers route these to an error callback instead of returning
/// them; the `try_*` tier returns them directly.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Store options failed validation at construction.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The storage backend failed.
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// Stored text was not valid JSON, or a value failed to encode.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl StoreError {
    /// Check if this error is a construction-time configuration failure.
    ///
    /// Configuration failures indicate a caller bug and are never routed
    /// through error callbacks.
    pub fn is_configuration(&self) -> bool {
        matches!(self, StoreError::InvalidConfiguration(_))
    }

    /// Check if this error originated in the storage backend.
    pub fn is_backend(&self) -> bool {
        matches!(self, StoreError::Backend(_))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialization(e.to_string())
    }
}

/// Result type for backend operations.
pub type BackendResult<T> = std::result::Result<T, BackendError>;

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
