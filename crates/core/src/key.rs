//! Key-prefix codec.
//!
//! Every store owns the slice of the shared backend namespace whose keys
//! start with its prefix, `name + separator`. The prefix is derived once at
//! construction and every physical key the store touches goes through
//! [`join`]; every key it exposes goes through [`strip`]. Keeping both
//! directions here makes the namespacing a single audited code path.

/// Derive the key prefix for a store.
pub fn prefix_for(name: &str, key_separator: &str) -> String {
    let mut prefix = String::with_capacity(name.len() + key_separator.len());
    prefix.push_str(name);
    prefix.push_str(key_separator);
    prefix
}

/// Build the physical (namespaced) key for a logical key.
pub fn join(prefix: &str, logical: &str) -> String {
    let mut key = String::with_capacity(prefix.len() + logical.len());
    key.push_str(prefix);
    key.push_str(logical);
    key
}

/// Strip one leading occurrence of `prefix` from a physical key.
///
/// Best-effort: if `prefix` is not a leading substring the input is
/// returned unchanged. This is a string transform, not a validated parse.
pub fn strip<'a>(namespaced: &'a str, prefix: &str) -> &'a str {
    namespaced.strip_prefix(prefix).unwrap_or(namespaced)
}

/// Whether a physical key belongs to the store owning `prefix`.
pub fn owns(namespaced: &str, prefix: &str) -> bool {
    namespaced.starts_with(prefix)
}
