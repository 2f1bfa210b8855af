//! Single-pass traversal utilities over ordered maps.
//!
//! Every function here walks an `IndexMap` once, in insertion order, and
//! hands each entry to a callback as `(value, key)`. Functions producing a
//! map keep the order of the entries they keep.
//!
//! # Modules
//!
//! - `traverse`: each, map, filter, reduce, find and the boolean reductions
//! - `transform`: combine, reindex and normalize
//! - `range`: lazy integer ranges
//!
//! # Example
//!
//! ```
//! use indexmap::IndexMap;
//! use nestkit::iterate::{filter, map, reduce};
//!
//! let prices: IndexMap<&str, u32> = [("apple", 3), ("pear", 5), ("plum", 1)].into_iter().collect();
//!
//! let doubled = map(&prices, |price, _| price * 2);
//! assert_eq!(doubled["pear"], 10);
//!
//! let cheap = filter(&prices, |price, _| *price < 4);
//! assert_eq!(cheap.keys().copied().collect::<Vec<_>>(), vec!["apple", "plum"]);
//!
//! let total = reduce(&prices, |sum, price, _| sum + *price, 0u32);
//! assert_eq!(total, 9);
//! ```

pub mod range;
pub mod transform;
pub mod traverse;

pub use range::{range, range_by, Range, RangeIter};
pub use transform::{combine, normalize, reindex};
pub use traverse::{
    each, every, every_from, filter, filter_with, find, find_key, first_not_ok, first_ok, map,
    map_keys, map_reduce, passing, reduce, reject, reject_with, some, some_from,
};

/// Alias of [`each`].
pub use traverse::each as invoke;
