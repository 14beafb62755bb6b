//! Property tests over generated JSON values and store names.

use proptest::prelude::*;
use serde_json::json;

use crate::common::*;
use webstorage::prelude::*;

/// Bounded-depth strategy over arbitrary JSON values.
///
/// Floats are kept finite; JSON has no encoding for NaN or infinities.
fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        (-1.0e9f64..1.0e9).prop_map(|f| json!(f)),
        ".{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map(".{0,8}", inner, 0..6)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn set_get_round_trips(key in ".{0,16}", value in json_value()) {
        let backend = fresh_backend();
        let store = store_on(&backend, "props");

        store.try_set(&key, value.clone()).unwrap();

        prop_assert_eq!(store.try_get(&key).unwrap(), value);
        prop_assert!(store.try_exists(&key).unwrap());
        prop_assert_eq!(store.try_keys().unwrap(), vec![key.clone()]);
    }

    #[test]
    fn distinct_stores_never_leak(
        name_a in "[a-z]{1,6}",
        name_b in "[a-z]{1,6}",
        key in "[a-z]{0,8}",
    ) {
        prop_assume!(name_a != name_b);

        let backend = fresh_backend();
        let a = store_on(&backend, &name_a);
        let b = store_on(&backend, &name_b);

        a.try_set(&key, json!("from a")).unwrap();
        b.try_set(&key, json!("from b")).unwrap();

        prop_assert_eq!(a.try_get(&key).unwrap(), json!("from a"));
        prop_assert_eq!(b.try_get(&key).unwrap(), json!("from b"));

        a.try_clear().unwrap();

        prop_assert_eq!(a.try_len().unwrap(), 0);
        prop_assert_eq!(b.try_get(&key).unwrap(), json!("from b"));
    }
}
