//! JSON text codec.
//!
//! Values persist in the backend as JSON text. This module is the one
//! conversion seam between stored text and typed values; decode failures
//! become [`StoreError::Serialization`] and are contained at the facade
//! boundary like any other operational failure.
//!
//! Note that `decode` runs on whatever text the backend returns under a
//! store's key — including text written by foreign code that happens to
//! share the physical key. No distinction is made between "never stored"
//! and "stored but malformed"; both are reported the same way upstream.

use serde_json::Value;

use crate::error::StoreResult;

/// Encode a value to its JSON text form.
pub fn encode(value: &Value) -> StoreResult<String> {
    Ok(serde_json::to_string(value)?)
}

/// Decode JSON text into a value. Fails on malformed input.
pub fn decode(text: &str) -> StoreResult<Value> {
    Ok(serde_json::from_str(text)?)
}
