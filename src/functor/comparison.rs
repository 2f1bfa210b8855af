//! Comparison callbacks.
//!
//! Binary comparisons (`equal`, `lower`, ...) take both operands. The
//! partially applied forms (`equal_to`, `lower_than`, ...) capture the right
//! operand and have the `(value, key)` shape the traversal utilities expect,
//! ignoring the key.

use crate::document::node::Value;

pub fn equal<T: PartialEq + ?Sized>() -> impl Fn(&T, &T) -> bool {
    |first: &T, second: &T| first == second
}

pub fn not_equal<T: PartialEq + ?Sized>() -> impl Fn(&T, &T) -> bool {
    |first: &T, second: &T| first != second
}

/// Strict comparison of values: same types and, for mappings, same order.
///
/// See [`Value::identical`].
pub fn identical() -> impl Fn(&Value, &Value) -> bool {
    |first: &Value, second: &Value| first.identical(second)
}

pub fn not_identical() -> impl Fn(&Value, &Value) -> bool {
    |first: &Value, second: &Value| !first.identical(second)
}

pub fn lower<T: PartialOrd + ?Sized>() -> impl Fn(&T, &T) -> bool {
    |first: &T, second: &T| first < second
}

pub fn greater<T: PartialOrd + ?Sized>() -> impl Fn(&T, &T) -> bool {
    |first: &T, second: &T| first > second
}

pub fn lower_or_equal<T: PartialOrd + ?Sized>() -> impl Fn(&T, &T) -> bool {
    |first: &T, second: &T| first <= second
}

pub fn greater_or_equal<T: PartialOrd + ?Sized>() -> impl Fn(&T, &T) -> bool {
    |first: &T, second: &T| first >= second
}

/// Passes values equal to `expected`.
pub fn equal_to<T: PartialEq, K: ?Sized>(expected: T) -> impl Fn(&T, &K) -> bool {
    move |value: &T, _: &K| *value == expected
}

pub fn not_equal_to<T: PartialEq, K: ?Sized>(expected: T) -> impl Fn(&T, &K) -> bool {
    move |value: &T, _: &K| *value != expected
}

/// Passes values strictly lower than `bound`.
pub fn lower_than<T: PartialOrd, K: ?Sized>(bound: T) -> impl Fn(&T, &K) -> bool {
    move |value: &T, _: &K| *value < bound
}

/// Passes values strictly greater than `bound`.
pub fn greater_than<T: PartialOrd, K: ?Sized>(bound: T) -> impl Fn(&T, &K) -> bool {
    move |value: &T, _: &K| *value > bound
}

pub fn at_most<T: PartialOrd, K: ?Sized>(bound: T) -> impl Fn(&T, &K) -> bool {
    move |value: &T, _: &K| *value <= bound
}

pub fn at_least<T: PartialOrd, K: ?Sized>(bound: T) -> impl Fn(&T, &K) -> bool {
    move |value: &T, _: &K| *value >= bound
}
