//! nestkit - functional-style operations over ordered nested mappings.
//!
//! The crate is organized around a nested mapping model (`document::node`)
//! and the operations on it:
//!
//! - `path`: resolves `"a.b.c"` strings or key sequences into validated paths
//! - `document::access`: `has`, `get`, `set` and `update` along a path, with
//!   copy-on-write updates that never modify the caller's tree
//! - `document::merge`: recursive merging of two trees
//! - `iterate`: map, filter, reduce, combine, range and friends over any
//!   `IndexMap`
//! - `functor`: ready-made comparison and arithmetic callbacks
//!
//! The `config` and `file` modules back the `nestkit` command-line tool.
//!
//! # Example
//!
//! ```
//! use nestkit::{get, set, Value};
//!
//! let root: Value = serde_yaml::from_str("a: 1\nb: {c: 2, d: {e: 3}}").unwrap();
//!
//! let root = set(&root, "a", Value::from("a")).unwrap();
//! let root = set(&root, "b.d.e", Value::from("e")).unwrap();
//! let root = set(&root, "b.f.g", Value::from("g")).unwrap();
//!
//! let expected: Value =
//!     serde_yaml::from_str("a: a\nb: {c: 2, d: {e: e}, f: {g: g}}").unwrap();
//! assert_eq!(root, expected);
//! assert_eq!(get(&root, "b.f.g", Value::Null).unwrap(), Value::from("g"));
//! ```

pub mod config;
pub mod document;
pub mod file;
pub mod functor;
pub mod iterate;
pub mod path;

pub use document::access::{get, get_ref, has, set, update};
pub use document::merge::{merge, merge_all};
pub use document::node::{Key, Map, Value};
pub use path::{resolve, KeySeq, Path, PathError};
