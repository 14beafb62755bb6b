//! Failure containment: quota, corrupt data, vanishing backends.

use std::sync::Arc;

use serde_json::json;

use crate::common::*;
use webstorage::prelude::*;

#[test]
fn quota_failure_routes_to_callback_and_preserves_state() {
    let backend = Arc::new(MemoryBackend::with_quota(32));
    let store = store_on(&backend, "todos");

    store.set("small", json!(1));

    let mut seen = None;
    store.set_with("big", json!("x".repeat(64)), |e| seen = Some(e));

    match seen {
        Some(StoreError::Backend(BackendError::QuotaExceeded { limit: 32, .. })) => {}
        other => panic!("expected quota error, got {other:?}"),
    }
    // The failed write changed nothing.
    assert_eq!(store.get("small"), json!(1));
    assert_eq!(store.len(), Some(1));
}

#[test]
fn corrupt_foreign_data_is_an_operational_failure() {
    let backend = fresh_backend();
    let store = store_on(&backend, "todos");

    backend.set("todos/poison", "{not json").unwrap();
    store.set("good", json!(1));

    // get: contained to Null.
    assert_eq!(store.get("poison"), Value::Null);

    // try_get: surfaced as a serialization error.
    assert!(matches!(
        store.try_get("poison"),
        Err(StoreError::Serialization(_))
    ));

    // keys/len do not decode, so the poison entry still counts.
    assert_eq!(
        sorted(store.keys().unwrap()),
        vec!["good".to_string(), "poison".to_string()]
    );
    assert_eq!(store.len(), Some(2));
}

#[test]
fn iterate_aborts_on_first_decode_failure() {
    let backend = fresh_backend();
    let store = store_on(&backend, "todos");

    // Poison sits at the highest index, so the descending walk hits it
    // first and the abort leaves the rest unvisited.
    store.set("ok", json!(1));
    backend.set("todos/poison", "{not json").unwrap();

    let mut visited = Vec::new();
    let mut seen = None;
    store.iterate_with(|_, key| visited.push(key.to_owned()), |e| seen = Some(e));

    assert!(visited.is_empty());
    assert!(matches!(seen, Some(StoreError::Serialization(_))));
}

#[test]
fn iterate_keeps_entries_visited_before_a_failure() {
    let backend = fresh_backend();
    let store = store_on(&backend, "todos");

    // Poison at the lowest index: the walk visits the later entries
    // before aborting on it.
    backend.set("todos/poison", "{not json").unwrap();
    store.set("a", json!(1));
    store.set("b", json!(2));

    let mut visited = Vec::new();
    store.iterate_with(|_, key| visited.push(key.to_owned()), |_| {});

    assert_eq!(visited, vec!["b".to_string(), "a".to_string()]);
}

#[test]
fn keys_is_none_on_failure_not_empty() {
    let inner = fresh_backend();
    let store = store_on(&inner, "todos");
    store.set("a", json!(1));
    store.set("b", json!(2));

    // Budget covers the initial len read and the first step of the walk,
    // then the backend goes away.
    let flaky = Arc::new(FailAfter::new(inner, 3));
    let store = WebStorage::builder()
        .name("todos")
        .backend(flaky as Arc<dyn StorageBackend>)
        .build()
        .unwrap();

    assert_eq!(store.keys(), None);
    assert_eq!(store.len(), None);
}

#[test]
fn clear_keeps_partial_progress_on_failure() {
    let inner = fresh_backend();
    let seed = store_on(&inner, "todos");
    for i in 0..4 {
        seed.set(&format!("k{i}"), json!(i));
    }

    // Enough budget to remove some keys, not all. Each walk step spends
    // three calls (len, key_at, get) plus one remove.
    let flaky = Arc::new(FailAfter::new(inner.clone(), 9));
    let store = WebStorage::builder()
        .name("todos")
        .backend(flaky as Arc<dyn StorageBackend>)
        .build()
        .unwrap();

    let mut seen = None;
    store.clear_with(|e| seen = Some(e));

    assert!(seen.is_some(), "clear should have failed partway");
    let survivors = seed.len().unwrap();
    assert!(
        survivors > 0 && survivors < 4,
        "expected partial progress, {survivors} keys survive"
    );
}

#[test]
fn availability_probe_against_readonly_backend() {
    assert!(!WebStorage::is_available(&ReadOnlyBackend::new()));
    assert!(WebStorage::is_available(&MemoryBackend::new()));
}

#[test]
fn readonly_backend_still_serves_reads() {
    // A store can read through a backend that rejects writes; only the
    // mutating operations degrade.
    let store = WebStorage::builder()
        .name("todos")
        .backend(Arc::new(ReadOnlyBackend::new()))
        .build()
        .unwrap();

    assert_eq!(store.get("a"), Value::Null);
    assert_eq!(store.keys(), Some(vec![]));

    let mut errors = 0;
    store.set_with("a", json!(1), |_| errors += 1);
    store.remove_with("a", |_| errors += 1);
    assert_eq!(errors, 2);
}
