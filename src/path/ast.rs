//! Path and key sequence types.

use super::error::PathError;
use crate::document::node::{Key, Value};
use std::fmt;

/// Separator between segments of a delimited path string.
pub const DELIMITER: char = '.';

/// A location descriptor as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Path {
    /// An explicit, already split sequence of keys
    Segments(Vec<Key>),
    /// A single string with segments separated by [`DELIMITER`]
    Delimited(String),
}

impl Path {
    /// Resolves this path into a validated key sequence.
    pub fn resolve(&self) -> Result<KeySeq, PathError> {
        super::resolver::resolve(self.clone())
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Path::Delimited(s.to_string())
    }
}

impl From<String> for Path {
    fn from(s: String) -> Self {
        Path::Delimited(s)
    }
}

impl From<&String> for Path {
    fn from(s: &String) -> Self {
        Path::Delimited(s.clone())
    }
}

impl<K: Into<Key>> From<Vec<K>> for Path {
    fn from(keys: Vec<K>) -> Self {
        Path::Segments(keys.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<Key>, const N: usize> From<[K; N]> for Path {
    fn from(keys: [K; N]) -> Self {
        Path::Segments(keys.into_iter().map(Into::into).collect())
    }
}

impl From<&[Key]> for Path {
    fn from(keys: &[Key]) -> Self {
        Path::Segments(keys.to_vec())
    }
}

impl From<KeySeq> for Path {
    fn from(keys: KeySeq) -> Self {
        Path::Segments(keys.0)
    }
}

impl From<&KeySeq> for Path {
    fn from(keys: &KeySeq) -> Self {
        Path::Segments(keys.0.clone())
    }
}

/// Builds a path out of a loosely typed value, such as one read from a
/// document: strings are delimited paths, lists of integers and strings are
/// key sequences. Every other shape is rejected.
impl TryFrom<&Value> for Path {
    type Error = PathError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(Path::Delimited(s.clone())),
            Value::List(items) => items
                .iter()
                .map(|item| match item {
                    Value::Int(i) => Ok(Key::Int(*i)),
                    Value::String(s) => Ok(Key::Str(s.clone())),
                    other => Err(PathError::invalid(format!(
                        "a {} cannot be used as a path segment",
                        other.type_name()
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Path::Segments),
            other => Err(PathError::invalid(format!(
                "expected a string or a list of keys, found a {}",
                other.type_name()
            ))),
        }
    }
}

/// A resolved, non-empty sequence of keys.
///
/// Only [`resolve`](super::resolve) creates key sequences, so holding one
/// guarantees there is at least one segment to walk.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeySeq(Vec<Key>);

impl KeySeq {
    pub(crate) fn new(keys: Vec<Key>) -> Self {
        debug_assert!(!keys.is_empty());
        Self(keys)
    }

    pub fn as_slice(&self) -> &[Key] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a resolved sequence.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Key> {
        self.0.iter()
    }

    /// Splits the sequence into its final key and the keys leading to it.
    pub fn split_last(&self) -> (&Key, &[Key]) {
        let (last, parents) = self
            .0
            .split_last()
            .expect("key sequences are never empty");
        (last, parents)
    }

    pub fn into_vec(self) -> Vec<Key> {
        self.0
    }
}

impl fmt::Display for KeySeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", DELIMITER)?;
            }
            write!(f, "{}", key)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a KeySeq {
    type Item = &'a Key;
    type IntoIter = std::slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
