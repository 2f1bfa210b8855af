//! Traversal functions: iteration, mapping, filtering, reduction and search.

use indexmap::IndexMap;
use std::hash::Hash;

/// Calls `f` on every entry.
pub fn each<K, V, F>(data: &IndexMap<K, V>, mut f: F)
where
    F: FnMut(&V, &K),
{
    for (key, value) in data {
        f(value, key);
    }
}

/// Replaces every value by the result of `f`, keeping keys and order.
pub fn map<K, V, R, F>(data: &IndexMap<K, V>, mut f: F) -> IndexMap<K, R>
where
    K: Hash + Eq + Clone,
    F: FnMut(&V, &K) -> R,
{
    data.iter()
        .map(|(key, value)| (key.clone(), f(value, key)))
        .collect()
}

/// Replaces every key by the result of `f`.
///
/// When two entries map to the same key, the later one wins but keeps the
/// position of the first.
pub fn map_keys<K, V, K2, F>(data: &IndexMap<K, V>, mut f: F) -> IndexMap<K2, V>
where
    K2: Hash + Eq,
    V: Clone,
    F: FnMut(&V, &K) -> K2,
{
    data.iter()
        .map(|(key, value)| (f(value, key), value.clone()))
        .collect()
}

/// Keeps the entries passing `predicate`, under their original keys.
pub fn filter<K, V, P>(data: &IndexMap<K, V>, mut predicate: P) -> IndexMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
    P: FnMut(&V, &K) -> bool,
{
    data.iter()
        .filter(|&(key, value)| predicate(value, key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Keeps the entries passing `predicate`.
///
/// With `preserve_keys`, this is [`filter`]. Without, the kept values are
/// renumbered from zero in their original order.
///
/// # Example
///
/// ```
/// use indexmap::IndexMap;
/// use nestkit::document::node::Key;
/// use nestkit::iterate::filter_with;
///
/// let data: IndexMap<Key, i32> = [(Key::Int(0), 1), (Key::Int(1), 2), (Key::Int(2), 3)]
///     .into_iter()
///     .collect();
///
/// let kept = filter_with(&data, |v, _| *v > 1, true);
/// assert_eq!(kept.keys().cloned().collect::<Vec<_>>(), vec![Key::Int(1), Key::Int(2)]);
///
/// let renumbered = filter_with(&data, |v, _| *v > 1, false);
/// assert_eq!(renumbered.keys().cloned().collect::<Vec<_>>(), vec![Key::Int(0), Key::Int(1)]);
/// ```
pub fn filter_with<K, V, P>(data: &IndexMap<K, V>, predicate: P, preserve_keys: bool) -> IndexMap<K, V>
where
    K: Hash + Eq + Clone + From<usize>,
    V: Clone,
    P: FnMut(&V, &K) -> bool,
{
    let kept = filter(data, predicate);
    if preserve_keys {
        kept
    } else {
        renumber(kept)
    }
}

/// Drops the entries passing `predicate`, keeping the others under their
/// original keys.
pub fn reject<K, V, P>(data: &IndexMap<K, V>, mut predicate: P) -> IndexMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
    P: FnMut(&V, &K) -> bool,
{
    filter(data, |value, key| !predicate(value, key))
}

/// Drops the entries passing `predicate`, renumbering the others unless
/// `preserve_keys` is set.
pub fn reject_with<K, V, P>(data: &IndexMap<K, V>, mut predicate: P, preserve_keys: bool) -> IndexMap<K, V>
where
    K: Hash + Eq + Clone + From<usize>,
    V: Clone,
    P: FnMut(&V, &K) -> bool,
{
    filter_with(data, |value, key| !predicate(value, key), preserve_keys)
}

/// Splits the entries into those passing `predicate` and those failing it.
pub fn passing<K, V, P>(data: &IndexMap<K, V>, mut predicate: P) -> (IndexMap<K, V>, IndexMap<K, V>)
where
    K: Hash + Eq + Clone,
    V: Clone,
    P: FnMut(&V, &K) -> bool,
{
    let mut passed = IndexMap::new();
    let mut failed = IndexMap::new();

    for (key, value) in data {
        if predicate(value, key) {
            passed.insert(key.clone(), value.clone());
        } else {
            failed.insert(key.clone(), value.clone());
        }
    }

    (passed, failed)
}

fn renumber<K, V>(data: IndexMap<K, V>) -> IndexMap<K, V>
where
    K: Hash + Eq + From<usize>,
{
    data.into_values()
        .enumerate()
        .map(|(i, value)| (K::from(i), value))
        .collect()
}

/// Folds every entry into `memo`.
pub fn reduce<K, V, M, F>(data: &IndexMap<K, V>, mut f: F, memo: M) -> M
where
    F: FnMut(M, &V, &K) -> M,
{
    data.iter().fold(memo, |memo, (key, value)| f(memo, value, key))
}

/// Maps every entry with `mapper`, then folds the results into `memo` with
/// `reducer`.
///
/// # Example
///
/// ```
/// use indexmap::IndexMap;
/// use nestkit::iterate::map_reduce;
///
/// let words: IndexMap<&str, &str> = [("a", "one"), ("b", "three")].into_iter().collect();
/// let letters = map_reduce(&words, |w, _| w.len(), |sum, len, _| sum + len, 0usize);
/// assert_eq!(letters, 8);
/// ```
pub fn map_reduce<K, V, R, M, F, G>(data: &IndexMap<K, V>, mut mapper: F, mut reducer: G, memo: M) -> M
where
    F: FnMut(&V, &K) -> R,
    G: FnMut(M, R, &K) -> M,
{
    data.iter()
        .fold(memo, |memo, (key, value)| reducer(memo, mapper(value, key), key))
}

/// Tells whether every entry passes `predicate`. Stops at the first failure.
pub fn every<K, V, P>(data: &IndexMap<K, V>, mut predicate: P) -> bool
where
    P: FnMut(&V, &K) -> bool,
{
    data.iter().all(|(key, value)| predicate(value, key))
}

/// Tells whether any entry passes `predicate`. Stops at the first success.
pub fn some<K, V, P>(data: &IndexMap<K, V>, mut predicate: P) -> bool
where
    P: FnMut(&V, &K) -> bool,
{
    data.iter().any(|(key, value)| predicate(value, key))
}

/// Conjunction of `initial` and every predicate result. When `initial` is
/// false the predicate is never called.
///
/// # Example
///
/// ```
/// use indexmap::IndexMap;
/// use nestkit::iterate::every_from;
///
/// let checks: IndexMap<&str, bool> = [("disk", true), ("net", true)].into_iter().collect();
/// assert!(every_from(&checks, |ok, _| *ok, true));
/// assert!(!every_from(&checks, |ok, _| *ok, false));
/// ```
pub fn every_from<K, V, P>(data: &IndexMap<K, V>, predicate: P, initial: bool) -> bool
where
    P: FnMut(&V, &K) -> bool,
{
    initial && every(data, predicate)
}

/// Disjunction of `initial` and every predicate result. When `initial` is
/// true the predicate is never called.
pub fn some_from<K, V, P>(data: &IndexMap<K, V>, predicate: P, initial: bool) -> bool
where
    P: FnMut(&V, &K) -> bool,
{
    initial || some(data, predicate)
}

/// Returns the first successful result of `f`, without calling it on the
/// remaining entries.
pub fn first_ok<K, V, R, F>(data: &IndexMap<K, V>, mut f: F) -> Option<R>
where
    F: FnMut(&V, &K) -> Option<R>,
{
    data.iter().find_map(|(key, value)| f(value, key))
}

/// Returns the first failure of `f`, without calling it on the remaining
/// entries.
///
/// # Example
///
/// ```
/// use indexmap::IndexMap;
/// use nestkit::iterate::first_not_ok;
///
/// let ports: IndexMap<&str, i64> = [("http", 80), ("admin", -1), ("ssh", -22)].into_iter().collect();
/// let check = first_not_ok(&ports, |port, name| {
///     if *port > 0 { Ok(()) } else { Err(format!("{} has no valid port", name)) }
/// });
/// assert_eq!(check, Err("admin has no valid port".to_string()));
/// ```
pub fn first_not_ok<K, V, E, F>(data: &IndexMap<K, V>, mut f: F) -> Result<(), E>
where
    F: FnMut(&V, &K) -> Result<(), E>,
{
    data.iter().try_for_each(|(key, value)| f(value, key))
}

/// Returns the first value passing `predicate`.
pub fn find<'a, K, V, P>(data: &'a IndexMap<K, V>, mut predicate: P) -> Option<&'a V>
where
    P: FnMut(&V, &K) -> bool,
{
    data.iter()
        .find(|&(key, value)| predicate(value, key))
        .map(|(_, value)| value)
}

/// Returns the key of the first value passing `predicate`.
pub fn find_key<'a, K, V, P>(data: &'a IndexMap<K, V>, mut predicate: P) -> Option<&'a K>
where
    P: FnMut(&V, &K) -> bool,
{
    data.iter()
        .find(|&(key, value)| predicate(value, key))
        .map(|(key, _)| key)
}
