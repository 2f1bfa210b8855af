//! Lazy integer ranges.
//!
//! A [`Range`] describes the integers from a start value up to, but not
//! including, an end value, moving by a fixed step. Nothing is computed up
//! front beyond the number of elements; each value is derived from the start,
//! the step and its position. A `Range` is a plain description, so it can be
//! iterated any number of times, always from the beginning.
//!
//! # Examples
//!
//! ```
//! use nestkit::iterate::{range, range_by};
//!
//! assert_eq!(range(0, 5).iter().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
//! assert_eq!(range_by(10, 5, -2).iter().collect::<Vec<_>>(), vec![10, 8, 6]);
//! assert!(range(10, 2).is_empty());
//!
//! let evens = range_by(0, 10, 2);
//! let first: Vec<_> = evens.iter().collect();
//! let second: Vec<_> = evens.iter().collect();
//! assert_eq!(first, second);
//! ```

use std::iter::FusedIterator;

/// A finite, restartable arithmetic sequence of integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    from: i64,
    step: i64,
    len: usize,
}

/// The integers from `from` up to `to`, excluded, in steps of one.
///
/// Yields nothing when `to <= from`.
pub fn range(from: i64, to: i64) -> Range {
    range_by(from, to, 1)
}

/// The integers from `from` towards `to`, excluded, in steps of `step`.
///
/// A negative step walks downwards. When the step points away from `to`, or
/// is zero, the range is empty.
pub fn range_by(from: i64, to: i64, step: i64) -> Range {
    Range {
        from,
        step,
        len: element_count(from, to, step),
    }
}

/// Number of elements: `max(ceil((to - from) / step), 0)`.
fn element_count(from: i64, to: i64, step: i64) -> usize {
    if step == 0 {
        return 0;
    }

    let span = i128::from(to) - i128::from(from);
    let step = i128::from(step);
    let quotient = span / step;
    let remainder = span % step;

    // Integer division truncates towards zero; round up when the exact
    // quotient is positive and has a fractional part.
    let count = if remainder != 0 && (remainder > 0) == (step > 0) {
        quotient + 1
    } else {
        quotient
    };

    usize::try_from(count.max(0)).unwrap_or(usize::MAX)
}

impl Range {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn start(&self) -> i64 {
        self.from
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    /// Returns the element at `index`, if the range has that many elements.
    pub fn get(&self, index: usize) -> Option<i64> {
        if index >= self.len {
            return None;
        }
        let value = i128::from(self.from) + i128::from(self.step) * index as i128;
        i64::try_from(value).ok()
    }

    /// Returns an iterator starting at the first element.
    pub fn iter(&self) -> RangeIter {
        RangeIter {
            range: *self,
            front: 0,
            back: self.len,
        }
    }
}

impl IntoIterator for Range {
    type Item = i64;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl IntoIterator for &Range {
    type Item = i64;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

/// Iterator over the elements of a [`Range`].
#[derive(Debug, Clone)]
pub struct RangeIter {
    range: Range,
    front: usize,
    back: usize,
}

impl Iterator for RangeIter {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.front >= self.back {
            return None;
        }
        let value = self.range.get(self.front);
        self.front += 1;
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back.saturating_sub(self.front);
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<i64> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl DoubleEndedIterator for RangeIter {
    fn next_back(&mut self) -> Option<i64> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.range.get(self.back)
    }
}

impl ExactSizeIterator for RangeIter {}

impl FusedIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_count_rounds_up() {
        assert_eq!(element_count(0, 5, 2), 3);
        assert_eq!(element_count(0, 4, 2), 2);
        assert_eq!(element_count(10, 5, -2), 3);
    }

    #[test]
    fn test_element_count_inconsistent_direction() {
        assert_eq!(element_count(10, 2, 1), 0);
        assert_eq!(element_count(0, 5, -1), 0);
        assert_eq!(element_count(0, 5, 0), 0);
    }

    #[test]
    fn test_extreme_bounds_do_not_overflow() {
        let r = range_by(i64::MIN, i64::MAX, i64::MAX);
        assert_eq!(r.len(), 3);
        assert_eq!(r.iter().last(), Some(i64::MAX - 1));
    }

    #[test]
    fn test_nth_past_end() {
        let mut it = range(0, 3).iter();
        assert_eq!(it.nth(5), None);
        assert_eq!(it.next(), None);
    }
}
