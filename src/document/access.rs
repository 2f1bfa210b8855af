//! Path-addressed access to nested mappings.
//!
//! This module resolves a [`Path`] into a key sequence and walks it through a
//! tree of `Value`s. Each segment selects an entry of the current mapping;
//! scalars and lists end the walk, since only mappings can be descended into.
//!
//! Reads (`has`, `get`, `get_ref`) never modify anything. Writes (`set`,
//! `update`) leave the caller's root untouched and return a new root in which
//! only the mappings along the written path have been rebuilt.
//!
//! # Example
//!
//! ```
//! use nestkit::document::access::{get, has, set};
//! use nestkit::document::node::Value;
//!
//! let root = Value::map();
//! let root = set(&root, "user.name", Value::from("Alice")).unwrap();
//!
//! assert!(has(&root, "user.name").unwrap());
//! assert!(!has(&root, "user.email").unwrap());
//! assert_eq!(get(&root, "user.email", Value::from("n/a")).unwrap(), Value::from("n/a"));
//! ```

use super::node::{Key, Map, Value};
use crate::path::{resolve, Path, PathError};

/// Follows `keys` from `root`, returning the value at the end of the walk.
///
/// Returns `None` if a key is missing or a non-mapping value is reached
/// before the keys run out.
fn walk<'a>(root: &'a Value, keys: &[Key]) -> Option<&'a Value> {
    let mut current = root;

    for key in keys {
        current = current.as_map()?.get(key)?;
    }

    Some(current)
}

/// Follows `keys` from `node` for writing, returning the mapping that holds
/// the final entry.
///
/// Every mapping on the way is made unique to `node` before it is handed
/// out. With `vivify`, missing keys are filled with empty mappings. Returns
/// `None` if a key is missing (without `vivify`) or holds a non-mapping value.
fn walk_mut<'a>(node: &'a mut Value, keys: &[Key], vivify: bool) -> Option<&'a mut Map> {
    let mut current = node.as_map_mut()?;

    for key in keys {
        let child = if vivify {
            current.entry(key.clone()).or_insert_with(Value::map)
        } else {
            current.get_mut(key)?
        };
        current = child.as_map_mut()?;
    }

    Some(current)
}

/// Tells whether `path` leads to a value in `root`.
///
/// # Errors
///
/// Returns [`PathError::InvalidPath`] if the path does not resolve.
pub fn has(root: &Value, path: impl Into<Path>) -> Result<bool, PathError> {
    Ok(get_ref(root, path)?.is_some())
}

/// Borrows the value `path` leads to, if any.
///
/// # Example
///
/// ```
/// use nestkit::document::access::get_ref;
/// use nestkit::document::node::Value;
///
/// let root: Value = serde_yaml::from_str("a: {b: [1, 2]}").unwrap();
/// assert!(get_ref(&root, "a.b").unwrap().is_some());
/// // lists are opaque, so their elements are not addressable
/// assert!(get_ref(&root, "a.b.0").unwrap().is_none());
/// ```
pub fn get_ref<'a>(root: &'a Value, path: impl Into<Path>) -> Result<Option<&'a Value>, PathError> {
    let keys = resolve(path)?;
    Ok(walk(root, keys.as_slice()))
}

/// Returns the value `path` leads to, or `default` if any segment is missing.
///
/// # Example
///
/// ```
/// use nestkit::document::access::get;
/// use nestkit::document::node::Value;
///
/// let root: Value = serde_yaml::from_str("a: 1\nb: {c: 2, d: {e: 3}}").unwrap();
/// assert_eq!(get(&root, "b.d.e", Value::Null).unwrap(), Value::from(3));
/// assert_eq!(get(&root, "a.b.c", Value::from("z")).unwrap(), Value::from("z"));
/// ```
pub fn get(root: &Value, path: impl Into<Path>, default: Value) -> Result<Value, PathError> {
    Ok(get_ref(root, path)?.cloned().unwrap_or(default))
}

/// Returns a copy of `root` with `value` stored at `path`.
///
/// Missing intermediate segments are created as empty mappings. If an
/// intermediate segment holds a value that is not a mapping, or `root`
/// itself is not a mapping, nothing is written and `root` is returned as is.
///
/// # Example
///
/// ```
/// use nestkit::document::access::{get, set};
/// use nestkit::document::node::Value;
///
/// let root: Value = serde_yaml::from_str("a: 1").unwrap();
///
/// let written = set(&root, "b.c", Value::from(2)).unwrap();
/// assert_eq!(get(&written, "b.c", Value::Null).unwrap(), Value::from(2));
///
/// // `a` is a scalar, so `a.x` cannot be created
/// let blocked = set(&root, "a.x", Value::from(2)).unwrap();
/// assert_eq!(blocked, root);
/// ```
pub fn set(root: &Value, path: impl Into<Path>, value: Value) -> Result<Value, PathError> {
    let keys = resolve(path)?;
    let (last, parents) = keys.split_last();

    let mut updated = root.clone();
    let written = match walk_mut(&mut updated, parents, true) {
        Some(entries) => {
            entries.insert(last.clone(), value);
            true
        }
        None => false,
    };

    Ok(if written { updated } else { root.clone() })
}

/// Returns a copy of `root` where the value at `path` is replaced by
/// `transform` applied to it.
///
/// Nothing is created: if any segment is missing, `transform` is not called
/// and `root` is returned as is.
///
/// # Example
///
/// ```
/// use nestkit::document::access::{get, update};
/// use nestkit::document::node::Value;
///
/// let root: Value = serde_yaml::from_str("counter: {hits: 1}").unwrap();
/// let bump = |v: Value| Value::from(v.as_i64().unwrap_or(0) + 1);
///
/// let bumped = update(&root, "counter.hits", bump).unwrap();
/// assert_eq!(get(&bumped, "counter.hits", Value::Null).unwrap(), Value::from(2));
///
/// let untouched = update(&root, "counter.misses", bump).unwrap();
/// assert_eq!(untouched, root);
/// ```
pub fn update<F>(root: &Value, path: impl Into<Path>, transform: F) -> Result<Value, PathError>
where
    F: FnOnce(Value) -> Value,
{
    let keys = resolve(path)?;
    if walk(root, keys.as_slice()).is_none() {
        return Ok(root.clone());
    }

    let (last, parents) = keys.split_last();
    let mut updated = root.clone();
    if let Some(slot) = walk_mut(&mut updated, parents, false).and_then(|entries| entries.get_mut(last)) {
        let current = std::mem::take(slot);
        *slot = transform(current);
    }

    Ok(updated)
}

impl Value {
    /// Method form of [`has`].
    pub fn has_path(&self, path: impl Into<Path>) -> Result<bool, PathError> {
        has(self, path)
    }

    /// Method form of [`get`].
    pub fn get_path(&self, path: impl Into<Path>, default: Value) -> Result<Value, PathError> {
        get(self, path, default)
    }

    /// Method form of [`set`].
    pub fn set_path(&self, path: impl Into<Path>, value: Value) -> Result<Value, PathError> {
        set(self, path, value)
    }

    /// Method form of [`update`].
    pub fn update_path<F>(&self, path: impl Into<Path>, transform: F) -> Result<Value, PathError>
    where
        F: FnOnce(Value) -> Value,
    {
        update(self, path, transform)
    }
}
