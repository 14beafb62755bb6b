//! Store options and construction-time validation.

use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// Configuration for a store.
///
/// Immutable once a store is constructed: there is no rename or rescope
/// operation, and the derived key prefix is fixed for the store's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreOptions {
    /// The store's name; the namespace it owns in the shared backend.
    pub name: String,
    /// Separator between the store name and logical keys in physical keys.
    pub key_separator: String,
}

impl StoreOptions {
    /// Options with the given name and the default separator.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Validate all option fields.
    ///
    /// A store must never exist in a partially-valid state, so this runs
    /// before the key prefix is derived. Violations are caller bugs and
    /// surface synchronously, never through an error callback.
    pub fn validate(&self) -> StoreResult<()> {
        if self.name.is_empty() {
            return Err(StoreError::InvalidConfiguration(
                "store name must be a non-empty string".into(),
            ));
        }
        if self.key_separator.is_empty() {
            return Err(StoreError::InvalidConfiguration(
                "key separator must be a non-empty string".into(),
            ));
        }
        // A separator inside the name makes this store's prefix fall inside
        // another store's namespace: with name "a/b" and separator "/",
        // clearing store "a" would also delete every key of store "a/b".
        if self.name.contains(&self.key_separator) {
            return Err(StoreError::InvalidConfiguration(format!(
                "store name {:?} must not contain the key separator {:?}",
                self.name, self.key_separator
            )));
        }
        Ok(())
    }
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            name: "web-storage".into(),
            key_separator: "/".into(),
        }
    }
}
