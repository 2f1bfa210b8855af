//! Arithmetic and boolean callbacks.

use crate::document::node::Value;
use std::ops::{Add, Div, Mul, Sub};

pub fn add<T: Add<Output = T>>() -> impl Fn(T, T) -> T {
    |first: T, second: T| first + second
}

pub fn subtract<T: Sub<Output = T>>() -> impl Fn(T, T) -> T {
    |first: T, second: T| first - second
}

pub fn multiply<T: Mul<Output = T>>() -> impl Fn(T, T) -> T {
    |first: T, second: T| first * second
}

/// Integer division panics on a zero divisor, as `/` does; prefer
/// [`numeric_divide`] for untrusted operands.
pub fn divide<T: Div<Output = T>>() -> impl Fn(T, T) -> T {
    |first: T, second: T| first / second
}

pub fn conjunct() -> impl Fn(bool, bool) -> bool {
    |first: bool, second: bool| first && second
}

pub fn disjunct() -> impl Fn(bool, bool) -> bool {
    |first: bool, second: bool| first || second
}

pub fn identity<T>() -> impl Fn(T) -> T {
    |value: T| value
}

/// Ignores its input and returns a clone of `value`.
pub fn always<T: Clone, I>(value: T) -> impl Fn(I) -> T {
    move |_: I| value.clone()
}

/// Applies an integer operation, falling back to floats when either operand
/// is a float or the integer result overflows.
fn numeric(
    first: &Value,
    second: &Value,
    on_ints: fn(i64, i64) -> Option<i64>,
    on_floats: fn(f64, f64) -> f64,
) -> Option<Value> {
    match (first, second) {
        (Value::Int(a), Value::Int(b)) => Some(
            on_ints(*a, *b)
                .map(Value::Int)
                .unwrap_or_else(|| Value::Float(on_floats(*a as f64, *b as f64))),
        ),
        _ => Some(Value::Float(on_floats(first.as_f64()?, second.as_f64()?))),
    }
}

/// Adds two numeric values. Returns `None` if either one is not a number.
pub fn numeric_add() -> impl Fn(&Value, &Value) -> Option<Value> {
    |first: &Value, second: &Value| numeric(first, second, i64::checked_add, |a, b| a + b)
}

pub fn numeric_subtract() -> impl Fn(&Value, &Value) -> Option<Value> {
    |first: &Value, second: &Value| numeric(first, second, i64::checked_sub, |a, b| a - b)
}

pub fn numeric_multiply() -> impl Fn(&Value, &Value) -> Option<Value> {
    |first: &Value, second: &Value| numeric(first, second, i64::checked_mul, |a, b| a * b)
}

/// Divides two numeric values.
///
/// Integers dividing exactly give an integer, anything else a float.
/// Returns `None` for non-numeric operands and for a zero divisor.
pub fn numeric_divide() -> impl Fn(&Value, &Value) -> Option<Value> {
    |first: &Value, second: &Value| {
        if second.as_f64()? == 0.0 {
            return None;
        }
        numeric(
            first,
            second,
            |a, b| match a.checked_rem(b) {
                Some(0) => a.checked_div(b),
                _ => None,
            },
            |a, b| a / b,
        )
    }
}
