use indexmap::IndexMap;
use nestkit::functor::{add, equal_to, greater_than};
use nestkit::iterate::*;
use nestkit::{Key, Value};

fn ab() -> IndexMap<&'static str, i32> {
    [("a", 1), ("b", 2)].into_iter().collect()
}

fn listed(values: &[i32]) -> IndexMap<Key, i32> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| (Key::from(i), *v))
        .collect()
}

// ============================================================================
// each / invoke
// ============================================================================

#[test]
fn test_each_visits_entries_in_order() {
    let mut calls = Vec::new();
    each(&ab(), |value, key| calls.push((*key, *value)));
    assert_eq!(calls, vec![("a", 1), ("b", 2)]);
}

#[test]
fn test_invoke_passes_value_then_key() {
    let data: IndexMap<&str, &str> = [("a", "b")].into_iter().collect();
    let mut calls = Vec::new();
    invoke(&data, |value, key| calls.push((*value, *key)));
    assert_eq!(calls, vec![("b", "a")]);
}

// ============================================================================
// map / map_keys
// ============================================================================

#[test]
fn test_map_values() {
    let mapped = map(&ab(), |value, _| value * 2);
    assert_eq!(mapped, [("a", 2), ("b", 4)].into_iter().collect::<IndexMap<_, _>>());
}

#[test]
fn test_map_can_use_key() {
    let mapped = map(&ab(), |value, key| format!("{}={}", key, value));
    assert_eq!(mapped.values().cloned().collect::<Vec<_>>(), vec!["a=1", "b=2"]);
}

#[test]
fn test_map_keys() {
    let mapped = map_keys(&ab(), |_, key| if *key == "a" { "c" } else { "d" });
    assert_eq!(mapped.into_iter().collect::<Vec<_>>(), vec![("c", 1), ("d", 2)]);
}

#[test]
fn test_map_keys_collision_keeps_last_value() {
    let data: IndexMap<&str, i32> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
    let mapped = map_keys(&data, |value, _| value % 2);
    assert_eq!(mapped.into_iter().collect::<Vec<_>>(), vec![(1, 3), (0, 2)]);
}

// ============================================================================
// filter / reject / passing
// ============================================================================

#[test]
fn test_filter_keeps_keys() {
    let filtered = filter(&ab(), |value, _| *value == 2);
    assert_eq!(filtered.into_iter().collect::<Vec<_>>(), vec![("b", 2)]);
}

#[test]
fn test_filter_can_use_key() {
    let filtered = filter(&ab(), |_, key| *key == "a");
    assert_eq!(filtered.into_iter().collect::<Vec<_>>(), vec![("a", 1)]);
}

#[test]
fn test_filter_with_preserved_keys() {
    let filtered = filter_with(&listed(&[1, 2]), equal_to(2), true);
    assert_eq!(filtered.into_iter().collect::<Vec<_>>(), vec![(Key::Int(1), 2)]);
}

#[test]
fn test_filter_with_renumbered_keys() {
    let filtered = filter_with(&listed(&[1, 2]), equal_to(2), false);
    assert_eq!(filtered.into_iter().collect::<Vec<_>>(), vec![(Key::Int(0), 2)]);
}

#[test]
fn test_filter_with_renumbers_string_keys_too() {
    let data: IndexMap<Key, i32> = [(Key::from("x"), 5), (Key::from("y"), 6)].into_iter().collect();
    let filtered = filter_with(&data, |_, _| true, false);
    assert_eq!(filtered.keys().cloned().collect::<Vec<_>>(), vec![Key::Int(0), Key::Int(1)]);
}

#[test]
fn test_reject() {
    let rejected = reject(&ab(), |value, _| *value == 2);
    assert_eq!(rejected.into_iter().collect::<Vec<_>>(), vec![("a", 1)]);
}

#[test]
fn test_reject_with_renumbered_keys() {
    let rejected = reject_with(&listed(&[1, 2, 3]), equal_to(2), false);
    assert_eq!(
        rejected.into_iter().collect::<Vec<_>>(),
        vec![(Key::Int(0), 1), (Key::Int(1), 3)]
    );

    let rejected = reject_with(&listed(&[1, 2, 3]), equal_to(2), true);
    assert_eq!(
        rejected.into_iter().collect::<Vec<_>>(),
        vec![(Key::Int(0), 1), (Key::Int(2), 3)]
    );
}

#[test]
fn test_passing_partitions_entries() {
    let data: IndexMap<&str, i32> = [("a", 1), ("b", 5), ("c", 2), ("d", 8)].into_iter().collect();
    let (big, small) = passing(&data, greater_than(3));

    assert_eq!(big.keys().copied().collect::<Vec<_>>(), vec!["b", "d"]);
    assert_eq!(small.keys().copied().collect::<Vec<_>>(), vec!["a", "c"]);
}

// ============================================================================
// reduce / map_reduce
// ============================================================================

#[test]
fn test_reduce_passes_memo_value_and_key() {
    let mut calls = Vec::new();
    let reduced = reduce(
        &listed(&[1, 2]),
        |memo, value, key| {
            calls.push((memo, *value, key.clone()));
            memo + *value
        },
        0,
    );

    assert_eq!(reduced, 3);
    assert_eq!(calls, vec![(0, 1, Key::Int(0)), (1, 2, Key::Int(1))]);
}

#[test]
fn test_reduce_empty_returns_memo() {
    let empty: IndexMap<&str, i32> = IndexMap::new();
    assert_eq!(reduce(&empty, |memo, value, _| memo + *value, 42), 42);
}

#[test]
fn test_reduce_with_functor() {
    let sum = add();
    assert_eq!(reduce(&ab(), |memo, value, _| sum(memo, *value), 10), 13);
}

#[test]
fn test_map_reduce() {
    let words: IndexMap<&str, &str> = [("x", "ab"), ("y", "cde")].into_iter().collect();
    let joined = map_reduce(
        &words,
        |word, _| word.to_uppercase(),
        |mut memo: String, word, key| {
            memo.push_str(&format!("{}:{};", key, word));
            memo
        },
        String::new(),
    );
    assert_eq!(joined, "x:AB;y:CDE;");
}

// ============================================================================
// every / some / first_ok / first_not_ok
// ============================================================================

#[test]
fn test_some() {
    let data = listed(&[1, 2]);
    assert!(!some(&data, |_, _| false));
    assert!(some(&data, equal_to(2)));
}

#[test]
fn test_some_stops_at_first_success() {
    let mut visited = 0;
    assert!(some(&listed(&[1, 2, 3]), |value, _| {
        visited += 1;
        *value == 1
    }));
    assert_eq!(visited, 1);
}

#[test]
fn test_every() {
    let data = listed(&[1, 2]);
    assert!(!every(&data, equal_to(1)));
    assert!(every(&data, |value, _| *value > 0));
}

#[test]
fn test_every_stops_at_first_failure() {
    let mut visited = 0;
    assert!(!every(&listed(&[1, 2, 3]), |_, _| {
        visited += 1;
        false
    }));
    assert_eq!(visited, 1);
}

#[test]
fn test_every_and_some_on_empty() {
    let empty: IndexMap<&str, i32> = IndexMap::new();
    assert!(every(&empty, |_, _| false));
    assert!(!some(&empty, |_, _| true));
}

#[test]
fn test_every_from_seeds_the_conjunction() {
    let data = listed(&[1, 2]);
    assert!(every_from(&data, |value, _| *value > 0, true));
    assert!(!every_from(&data, |value, _| *value > 1, true));

    let mut called = false;
    assert!(!every_from(
        &data,
        |_, _| {
            called = true;
            true
        },
        false
    ));
    assert!(!called);
}

#[test]
fn test_some_from_seeds_the_disjunction() {
    let data = listed(&[1, 2]);
    assert!(some_from(&data, equal_to(2), false));
    assert!(!some_from(&data, equal_to(3), false));

    let mut called = false;
    assert!(some_from(
        &data,
        |_, _| {
            called = true;
            false
        },
        true
    ));
    assert!(!called);

    let empty: IndexMap<Key, i32> = IndexMap::new();
    assert!(some_from(&empty, |_, _| false, true));
    assert!(!every_from(&empty, |_, _| true, false));
}

#[test]
fn test_first_ok() {
    let data: IndexMap<&str, &str> = [("a", "x"), ("b", "12"), ("c", "7")].into_iter().collect();
    let parsed = first_ok(&data, |text, key| text.parse::<i32>().ok().map(|n| (*key, n)));
    assert_eq!(parsed, Some(("b", 12)));

    let none = first_ok(&data, |text, _| text.parse::<bool>().ok());
    assert_eq!(none, None);
}

#[test]
fn test_first_not_ok() {
    let mut visited = Vec::new();
    let result = first_not_ok(&ab(), |value, key| {
        visited.push(*key);
        if *value < 2 {
            Ok(())
        } else {
            Err(format!("{} is too big", key))
        }
    });

    assert_eq!(result, Err("b is too big".to_string()));
    assert_eq!(visited, vec!["a", "b"]);
    assert_eq!(first_not_ok(&ab(), |_, _| Ok::<(), ()>(())), Ok(()));
}

// ============================================================================
// find / find_key
// ============================================================================

#[test]
fn test_find() {
    assert_eq!(find(&listed(&[1, 2]), equal_to(2)), Some(&2));
}

#[test]
fn test_find_missing() {
    let empty: IndexMap<Key, i32> = IndexMap::new();
    assert_eq!(find(&empty, |_, _| true), None);
    assert_eq!(find(&empty, |_, _| true).copied().unwrap_or(-1), -1);
}

#[test]
fn test_find_key() {
    assert_eq!(find_key(&listed(&[1, 2]), equal_to(2)), Some(&Key::Int(1)));
    assert_eq!(find_key(&ab(), |value, _| *value > 5), None);
}

// ============================================================================
// combine / reindex / normalize
// ============================================================================

struct User {
    id: i32,
    name: &'static str,
}

fn users() -> IndexMap<Key, User> {
    [
        User { id: 1, name: "a" },
        User { id: 2, name: "b" },
        User { id: 3, name: "b" },
    ]
    .into_iter()
    .enumerate()
    .map(|(i, user)| (Key::from(i), user))
    .collect()
}

#[test]
fn test_combine_overwriting() {
    let indexed = combine(&users(), |user, _| [(user.name, user.id)], true);
    assert_eq!(indexed.into_iter().collect::<Vec<_>>(), vec![("a", 1), ("b", 3)]);
}

#[test]
fn test_combine_keeping_first() {
    let indexed = combine(&users(), |user, _| [(user.name, user.id)], false);
    assert_eq!(indexed.into_iter().collect::<Vec<_>>(), vec![("a", 1), ("b", 2)]);
}

#[test]
fn test_combine_may_skip_entries() {
    let indexed = combine(&users(), |user, _| (user.id % 2 == 1).then_some((user.id, user.name)), true);
    assert_eq!(indexed.into_iter().collect::<Vec<_>>(), vec![(1, "a"), (3, "b")]);
}

#[test]
fn test_reindex() {
    let row: IndexMap<Key, Value> = [("first", Value::from("Ada")), ("born", Value::from(1815))]
        .into_iter()
        .map(|(k, v)| (Key::from(k), v))
        .collect();
    let mapping: IndexMap<Key, Key> = [(Key::from("first"), Key::from("name"))].into_iter().collect();

    let renamed = reindex(&row, &mapping, true);
    assert_eq!(
        renamed.keys().cloned().collect::<Vec<_>>(),
        vec![Key::from("name"), Key::from("born")]
    );

    let only_mapped = reindex(&row, &mapping, false);
    assert_eq!(only_mapped.len(), 1);
    assert_eq!(only_mapped[&Key::from("name")], Value::from("Ada"));
}

#[test]
fn test_normalize_mixed_entries() {
    let options: Value = serde_yaml::from_str("{0: a, b: 2, 1: c, 2: 5}").unwrap();
    let normalized = normalize(options.as_map().unwrap(), &Value::Null);

    let expected: Value = serde_yaml::from_str("{a: ~, b: 2, c: ~, 2: 5}").unwrap();
    assert!(Value::from(normalized).identical(&expected));
}
