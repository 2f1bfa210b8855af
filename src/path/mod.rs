//! Path resolution for nested mapping access.
//!
//! A path names a location inside a nested mapping. Callers may hand one over
//! in either of two forms:
//!
//! - a pre-split sequence of keys: `vec![Key::from("a"), Key::Int(0)]`
//! - a single delimited string: `"a.b.c"`
//!
//! Both forms are normalized by [`resolve`] into a [`KeySeq`], the validated,
//! non-empty key sequence every accessor walks.
//!
//! # Examples
//!
//! ```
//! use nestkit::path::{resolve, Key};
//!
//! let keys = resolve("a..b.c.").unwrap();
//! assert_eq!(keys.as_slice(), &[Key::from("a"), Key::from("b"), Key::from("c")]);
//!
//! assert!(resolve("").is_err());
//! assert!(resolve(Vec::<Key>::new()).is_err());
//! ```

pub mod ast;
pub mod error;
pub mod resolver;

pub use crate::document::node::Key;
pub use ast::{KeySeq, Path, DELIMITER};
pub use error::PathError;
pub use resolver::resolve;
