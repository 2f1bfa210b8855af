//! Recursive merging of nested mappings.

use super::node::Value;
use std::sync::Arc;

/// Merges `second` onto `first`.
///
/// Entries of `second` are visited in order. When both trees hold a mapping
/// under the same key, the two mappings are merged recursively; in every
/// other case the entry from `second` wins. Entries only present in `first`
/// keep their value and position, new entries are appended.
///
/// Lists are never merged element-wise. If either argument is not a mapping,
/// the result is `second`.
///
/// # Example
///
/// ```
/// use nestkit::document::merge::merge;
/// use nestkit::document::node::Value;
///
/// let first: Value = serde_yaml::from_str("a: {b: 1, c: 2}\ntags: [x, y]").unwrap();
/// let second: Value = serde_yaml::from_str("a: {b: 9}\ntags: [z]").unwrap();
/// let expected: Value = serde_yaml::from_str("a: {b: 9, c: 2}\ntags: [z]").unwrap();
///
/// assert_eq!(merge(&first, &second), expected);
/// ```
pub fn merge(first: &Value, second: &Value) -> Value {
    let (base, incoming) = match (first, second) {
        (Value::Map(base), Value::Map(incoming)) => (base, incoming),
        _ => return second.clone(),
    };

    if incoming.is_empty() {
        return first.clone();
    }

    let mut merged = Arc::clone(base);
    let entries = Arc::make_mut(&mut merged);

    for (key, value) in incoming.iter() {
        match entries.get_mut(key) {
            Some(existing) if existing.is_map() && value.is_map() => {
                let combined = merge(existing, value);
                *existing = combined;
            }
            _ => {
                entries.insert(key.clone(), value.clone());
            }
        }
    }

    Value::Map(merged)
}

/// Merges a series of layers from left to right, starting from an empty
/// mapping. Later layers win.
///
/// # Example
///
/// ```
/// use nestkit::document::merge::merge_all;
/// use nestkit::document::node::Value;
///
/// let defaults: Value = serde_yaml::from_str("port: 80\nhost: localhost").unwrap();
/// let file: Value = serde_yaml::from_str("port: 8080").unwrap();
/// let env: Value = serde_yaml::from_str("host: example.org").unwrap();
///
/// let merged = merge_all([&defaults, &file, &env]);
/// let expected: Value = serde_yaml::from_str("port: 8080\nhost: example.org").unwrap();
/// assert_eq!(merged, expected);
/// ```
pub fn merge_all<'a, I>(layers: I) -> Value
where
    I: IntoIterator<Item = &'a Value>,
{
    layers
        .into_iter()
        .fold(Value::map(), |merged, layer| merge(&merged, layer))
}
