//! Strategies shared by the property tests.

#![allow(dead_code)]

use nestkit::{Key, Value};
use proptest::prelude::*;

/// Keys from a small alphabet, so generated paths often hit existing entries.
pub fn key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        "[a-d]{1,2}".prop_map(Key::Str),
        (0i64..3).prop_map(Key::Int),
    ]
}

/// Non-mapping values, including opaque lists.
pub fn leaf_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-100i64..100).prop_map(Value::Int),
        (-1.0e6f64..1.0e6).prop_map(Value::Float),
        "[a-z]{0,4}".prop_map(Value::String),
        prop::collection::vec((0i64..10).prop_map(Value::Int), 0..3).prop_map(Value::List),
    ]
}

fn entries_of(inner: impl Strategy<Value = Value>) -> impl Strategy<Value = Value> {
    prop::collection::vec((key_strategy(), inner), 0..4)
        .prop_map(|entries| entries.into_iter().collect::<Value>())
}

/// Any value, with mappings nested at most three levels deep.
pub fn value_strategy() -> impl Strategy<Value = Value> {
    leaf_strategy().prop_recursive(3, 48, 4, |inner| entries_of(inner))
}

/// A mapping whose entries are arbitrary values.
pub fn mapping_strategy() -> impl Strategy<Value = Value> {
    entries_of(value_strategy())
}

/// A non-empty key sequence of up to three keys.
pub fn path_strategy() -> impl Strategy<Value = Vec<Key>> {
    prop::collection::vec(key_strategy(), 1..4)
}

/// Every key sequence leading to an entry of `value`, in depth-first order.
pub fn existing_paths(value: &Value) -> Vec<Vec<Key>> {
    let mut paths = Vec::new();
    collect_paths(value, &mut Vec::new(), &mut paths);
    paths
}

fn collect_paths(value: &Value, prefix: &mut Vec<Key>, paths: &mut Vec<Vec<Key>>) {
    if let Some(entries) = value.as_map() {
        for (key, child) in entries {
            prefix.push(key.clone());
            paths.push(prefix.clone());
            collect_paths(child, prefix, paths);
            prefix.pop();
        }
    }
}
