//! Prefix-filtered enumeration of a shared backend.
//!
//! The backend's key set can shrink while it is being enumerated — most
//! importantly as a side effect of the visitor itself, which is exactly
//! what clearing a store does. An ascending index walk breaks under such
//! removals: deleting the key at the cursor shifts every later key down one
//! index, so the key that moves into the cursor's slot is never visited.
//!
//! The walk here goes **descending**, from the last index down to zero,
//! re-reading the backend's current length and re-clamping the cursor
//! before every access. A removal at or before the cursor then only shifts
//! keys the walk has already handled, never pending ones, so a visitor may
//! remove the very key it was handed.
//!
//! This does not defend against *other threads* mutating the backend
//! mid-walk; the model is single-threaded execution per backend access,
//! and concurrent external mutation simply lands in whatever part of the
//! index space the cursor has not reached yet.

use webstorage_core::error::BackendError;
use webstorage_core::{key, StorageBackend};

/// Visit every `(physical_key, raw_value)` pair whose key starts with
/// `prefix`, in descending backend-index order.
///
/// Keys outside `prefix` are skipped with no effect. A key that vanishes
/// between the index probe and the value read is skipped, not an error.
/// The first backend or visitor error aborts the remaining walk and
/// propagates; containment is the caller's responsibility.
///
/// The error type is generic over `E: From<BackendError>` so callers can
/// thread their own error type through the visitor (a store threads its
/// facade error to carry decode failures out of the walk).
pub fn for_each_prefixed<E, F>(
    backend: &dyn StorageBackend,
    prefix: &str,
    mut visit: F,
) -> Result<(), E>
where
    E: From<BackendError>,
    F: FnMut(&str, &str) -> Result<(), E>,
{
    let mut cursor = backend.len().map_err(E::from)?;

    while cursor > 0 {
        // Re-read and clamp before each access: the key set may have
        // shrunk since the last step.
        let len = backend.len().map_err(E::from)?;
        if cursor > len {
            cursor = len;
            continue;
        }
        cursor -= 1;

        let physical = match backend.key_at(cursor).map_err(E::from)? {
            Some(physical) => physical,
            None => continue,
        };
        if !key::owns(&physical, prefix) {
            continue;
        }
        let value = match backend.get(&physical).map_err(E::from)? {
            Some(value) => value,
            // Vanished between the index probe and the read.
            None => continue,
        };
        visit(&physical, &value)?;
    }

    Ok(())
}
