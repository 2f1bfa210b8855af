//! Ready-made callbacks.
//!
//! Small functions returning closures, meant to be passed to the traversal
//! utilities in [`crate::iterate`] instead of spelling out one-line lambdas.
//!
//! # Example
//!
//! ```
//! use indexmap::IndexMap;
//! use nestkit::functor::{add, equal_to};
//! use nestkit::iterate::{filter, reduce};
//!
//! let scores: IndexMap<&str, i64> = [("ann", 3), ("bob", 5), ("cid", 3)].into_iter().collect();
//!
//! let threes = filter(&scores, equal_to(3));
//! assert_eq!(threes.len(), 2);
//!
//! let sum = add();
//! assert_eq!(reduce(&scores, |total, score, _| sum(total, *score), 0), 11);
//! ```

pub mod comparison;
pub mod operation;

pub use comparison::{
    at_least, at_most, equal, equal_to, greater, greater_or_equal, greater_than, identical,
    lower, lower_or_equal, lower_than, not_equal, not_equal_to, not_identical,
};
pub use operation::{
    add, always, conjunct, disjunct, divide, identity, multiply, numeric_add, numeric_divide,
    numeric_multiply, numeric_subtract, subtract,
};
