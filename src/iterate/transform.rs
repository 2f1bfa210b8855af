//! Key-reshaping transformations.

use crate::document::node::{Key, Map, Value};
use indexmap::IndexMap;
use std::hash::Hash;

/// Builds a new map out of the pairs `indexer` produces for each entry.
///
/// When several pairs share a key, the last one wins if `overwrite` is set,
/// and the first one otherwise.
///
/// # Example
///
/// ```
/// use indexmap::IndexMap;
/// use nestkit::iterate::combine;
///
/// let users: IndexMap<u32, (&str, &str)> =
///     [(1, ("alice", "admin")), (2, ("bob", "dev")), (3, ("alice", "dev"))].into_iter().collect();
///
/// let roles = combine(&users, |(name, role), _| [(*name, *role)], true);
/// assert_eq!(roles["alice"], "dev");
///
/// let roles = combine(&users, |(name, role), _| [(*name, *role)], false);
/// assert_eq!(roles["alice"], "admin");
/// ```
pub fn combine<K, V, K2, V2, I, F>(data: &IndexMap<K, V>, mut indexer: F, overwrite: bool) -> IndexMap<K2, V2>
where
    K2: Hash + Eq,
    I: IntoIterator<Item = (K2, V2)>,
    F: FnMut(&V, &K) -> I,
{
    let mut combined = IndexMap::new();

    for (key, value) in data {
        for (k, v) in indexer(value, key) {
            if overwrite || !combined.contains_key(&k) {
                combined.insert(k, v);
            }
        }
    }

    combined
}

/// Renames keys through `mapping`.
///
/// Keys found in `mapping` are replaced by their new name. Other keys are
/// kept as they are if `keep_unmapped` is set, and dropped otherwise. Order
/// is preserved; if a renamed key collides with an existing one, the later
/// entry wins.
///
/// # Example
///
/// ```
/// use indexmap::IndexMap;
/// use nestkit::iterate::reindex;
///
/// let row: IndexMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
/// let mapping: IndexMap<&str, &str> = [("a", "x")].into_iter().collect();
///
/// let renamed = reindex(&row, &mapping, true);
/// assert_eq!(renamed.into_iter().collect::<Vec<_>>(), vec![("x", 1), ("b", 2)]);
///
/// let renamed = reindex(&row, &mapping, false);
/// assert_eq!(renamed.into_iter().collect::<Vec<_>>(), vec![("x", 1)]);
/// ```
pub fn reindex<K, V>(data: &IndexMap<K, V>, mapping: &IndexMap<K, K>, keep_unmapped: bool) -> IndexMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    data.iter()
        .filter_map(|(key, value)| match mapping.get(key) {
            Some(renamed) => Some((renamed.clone(), value.clone())),
            None if keep_unmapped => Some((key.clone(), value.clone())),
            None => None,
        })
        .collect()
}

/// Turns list-style entries into keyed entries.
///
/// An entry stored under an integer key whose value is a string becomes an
/// entry keyed by that string, holding `default`. All other entries are
/// copied unchanged. This lets a mapping mix bare names and named settings:
///
/// ```
/// use nestkit::document::node::{Key, Value};
/// use nestkit::iterate::normalize;
///
/// let options: Value = serde_yaml::from_str("{0: verbose, color: never}").unwrap();
/// let normalized = normalize(options.as_map().unwrap(), &Value::Bool(true));
///
/// assert_eq!(normalized[&Key::from("verbose")], Value::Bool(true));
/// assert_eq!(normalized[&Key::from("color")], Value::from("never"));
/// ```
pub fn normalize(data: &Map, default: &Value) -> Map {
    data.iter()
        .map(|(key, value)| match (key, value) {
            (Key::Int(_), Value::String(name)) => (Key::from(name), default.clone()),
            _ => (key.clone(), value.clone()),
        })
        .collect()
}
