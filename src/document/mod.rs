//! Nested mapping documents.
//!
//! This module provides the nested mapping model and the operations that work
//! on whole trees:
//!
//! - `node`: the `Key` and `Value` types
//! - `access`: path-addressed `has`, `get`, `set` and `update`
//! - `merge`: recursive merging of two trees
//!
//! Every write returns a new root. The input tree is never modified, and the
//! parts of it a write did not touch are shared with the result.
//!
//! # Example
//!
//! ```
//! use nestkit::document::{access, merge, node::Value};
//!
//! let base: Value = serde_yaml::from_str("server: {host: localhost, port: 80}").unwrap();
//! let overrides: Value = serde_yaml::from_str("server: {port: 8080}").unwrap();
//!
//! let merged = merge::merge(&base, &overrides);
//! assert_eq!(access::get(&merged, "server.port", Value::Null).unwrap(), Value::from(8080));
//! assert_eq!(access::get(&merged, "server.host", Value::Null).unwrap(), Value::from("localhost"));
//! ```

pub mod access;
pub mod merge;
pub mod node;

pub use node::{Key, Map, Value};
