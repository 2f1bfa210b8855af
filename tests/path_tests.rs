mod common;

use common::path_strategy;
use nestkit::path::{resolve, Key, Path, PathError};
use nestkit::Value;
use proptest::prelude::*;

fn keys(path: impl Into<Path>) -> Vec<Key> {
    resolve(path).unwrap().into_vec()
}

#[test]
fn test_resolve_delimited_string() {
    assert_eq!(keys("a.b.c"), vec![Key::from("a"), Key::from("b"), Key::from("c")]);
}

#[test]
fn test_resolve_single_segment() {
    assert_eq!(keys("name"), vec![Key::from("name")]);
}

#[test]
fn test_resolve_collapses_empty_segments() {
    assert_eq!(keys(".a..b."), vec![Key::from("a"), Key::from("b")]);
}

#[test]
fn test_resolve_empty_string_fails() {
    assert!(matches!(resolve(""), Err(PathError::InvalidPath { .. })));
    assert!(matches!(resolve("...."), Err(PathError::InvalidPath { .. })));
}

#[test]
fn test_resolve_empty_sequence_fails() {
    assert!(matches!(
        resolve(Vec::<Key>::new()),
        Err(PathError::InvalidPath { .. })
    ));
}

#[test]
fn test_resolve_sequence_is_taken_verbatim() {
    // Segments are not split again, and empty strings are allowed as keys
    let resolved = keys(vec![Key::from("a.b"), Key::from(""), Key::Int(3)]);
    assert_eq!(resolved, vec![Key::from("a.b"), Key::from(""), Key::Int(3)]);
}

#[test]
fn test_key_sequence_display() {
    let resolved = resolve(vec![Key::from("items"), Key::Int(2)]).unwrap();
    assert_eq!(resolved.to_string(), "items.2");
    assert_eq!(resolved.len(), 2);
}

#[test]
fn test_split_last() {
    let resolved = resolve("a.b.c").unwrap();
    let (last, parents) = resolved.split_last();
    assert_eq!(last, &Key::from("c"));
    assert_eq!(parents, &[Key::from("a"), Key::from("b")]);
}

#[test]
fn test_path_method_resolve() {
    let path = Path::from("x.y");
    assert_eq!(path.resolve().unwrap().into_vec(), vec![Key::from("x"), Key::from("y")]);
}

#[test]
fn test_path_from_value_string() {
    let path = Path::try_from(&Value::from("a.b")).unwrap();
    assert_eq!(path, Path::Delimited("a.b".to_string()));
}

#[test]
fn test_path_from_value_list() {
    let value: Value = serde_yaml::from_str("[users, 0, name]").unwrap();
    let path = Path::try_from(&value).unwrap();
    assert_eq!(
        path,
        Path::Segments(vec![Key::from("users"), Key::Int(0), Key::from("name")])
    );
}

#[test]
fn test_path_from_value_rejects_other_types() {
    for value in [Value::from(42), Value::Null, Value::Bool(true), Value::map()] {
        assert!(matches!(
            Path::try_from(&value),
            Err(PathError::InvalidPath { .. })
        ));
    }
}

#[test]
fn test_path_from_value_rejects_nested_segments() {
    let value: Value = serde_yaml::from_str("[a, [b]]").unwrap();
    let err = Path::try_from(&value).unwrap_err();
    assert_eq!(err.to_string(), "Invalid path: a list cannot be used as a path segment");
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_joined_segments_resolve_back(segments in prop::collection::vec("[a-z0-9_]{1,5}", 1..5)) {
        let joined = segments.join(".");
        let expected: Vec<Key> = segments.iter().map(|s| Key::from(s.as_str())).collect();
        prop_assert_eq!(keys(joined.as_str()), expected);
    }

    #[test]
    fn prop_segment_sequences_resolve_verbatim(path in path_strategy()) {
        prop_assert_eq!(keys(path.clone()), path);
    }
}
