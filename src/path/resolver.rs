//! Normalization of paths into key sequences.

use super::ast::{KeySeq, Path, DELIMITER};
use super::error::PathError;
use crate::document::node::Key;

/// Resolves a path into a non-empty key sequence.
///
/// Key sequences are taken as given. Delimited strings are split on
/// [`DELIMITER`], with empty segments discarded, so leading, trailing and
/// repeated delimiters collapse away. Every segment of a delimited string
/// becomes a string key, including numeric-looking ones.
///
/// # Errors
///
/// Returns [`PathError::InvalidPath`] if the sequence is empty, or if the
/// string is empty or made only of delimiters.
///
/// # Examples
///
/// ```
/// use nestkit::path::{resolve, Key};
///
/// let keys = resolve("a.b.c").unwrap();
/// assert_eq!(keys.to_string(), "a.b.c");
///
/// let keys = resolve(vec![Key::from("a"), Key::Int(0)]).unwrap();
/// assert_eq!(keys.len(), 2);
///
/// assert!(resolve("...").is_err());
/// ```
pub fn resolve(path: impl Into<Path>) -> Result<KeySeq, PathError> {
    match path.into() {
        Path::Segments(keys) => {
            if keys.is_empty() {
                return Err(PathError::invalid("key sequence is empty"));
            }
            Ok(KeySeq::new(keys))
        }
        Path::Delimited(s) => {
            let keys = split_delimited(&s);
            if keys.is_empty() {
                return Err(PathError::invalid(format!(
                    "'{}' has no segments between delimiters",
                    s
                )));
            }
            Ok(KeySeq::new(keys))
        }
    }
}

fn split_delimited(input: &str) -> Vec<Key> {
    input
        .split(DELIMITER)
        .filter(|segment| !segment.is_empty())
        .map(Key::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_discards_empty_segments() {
        assert_eq!(
            split_delimited(".a..b."),
            vec![Key::from("a"), Key::from("b")]
        );
    }

    #[test]
    fn test_numeric_segments_stay_strings() {
        assert_eq!(split_delimited("items.0"), vec![Key::from("items"), Key::from("0")]);
    }

    #[test]
    fn test_whitespace_is_part_of_the_segment() {
        assert_eq!(split_delimited(" a . b"), vec![Key::from(" a "), Key::from(" b")]);
    }

    #[test]
    fn test_empty_string_is_invalid() {
        assert!(matches!(resolve(""), Err(PathError::InvalidPath { .. })));
        assert!(matches!(resolve("."), Err(PathError::InvalidPath { .. })));
    }

    #[test]
    fn test_error_message_names_input() {
        let err = resolve("..").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid path: '..' has no segments between delimiters"
        );
    }
}
