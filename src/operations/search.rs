//! Eager queries: membership, counting, searching and walking.
//!
//! Every function here consumes (part of) its sequence before returning.
//! The searching functions stop at the first decisive pair.

use crate::key::Key;
use crate::sequence::KnownLength;
use crate::value::{Comparison, Fields, LooseEq, Value};

/// Returns `true` if some value of `sequence` equals `needle`.
///
/// Stops at the first match.
///
/// # Examples
///
/// ```rust
/// use iterables::operations::contains;
/// use iterables::sequence::list;
///
/// assert!(contains(&2, list(vec![1, 2, 3])));
/// assert!(!contains(&4, list(vec![1, 2, 3])));
/// ```
pub fn contains<I, K, V>(needle: &V, sequence: I) -> bool
where
    I: IntoIterator<Item = (K, V)>,
    V: PartialEq,
{
    sequence.into_iter().any(|(_, value)| value == *needle)
}

/// [`contains`] with a selectable comparison.
///
/// # Examples
///
/// ```rust
/// use iterables::operations::contains_with;
/// use iterables::sequence::list;
/// use iterables::value::{Comparison, Value};
///
/// let values = vec![Value::from(1), Value::from("2")];
/// assert!(!contains_with(&Value::from(2), list(values.clone()), Comparison::Strict));
/// assert!(contains_with(&Value::from(2), list(values), Comparison::Loose));
/// ```
pub fn contains_with<I, K, V>(needle: &V, sequence: I, comparison: Comparison) -> bool
where
    I: IntoIterator<Item = (K, V)>,
    V: PartialEq + LooseEq,
{
    match comparison {
        Comparison::Strict => contains(needle, sequence),
        Comparison::Loose => sequence.into_iter().any(|(_, value)| value.loose_eq(needle)),
    }
}

/// Returns the value of the first pair, or `None` for an empty sequence.
///
/// Pulls at most one pair.
#[inline]
pub fn first_value<I, K, V>(sequence: I) -> Option<V>
where
    I: IntoIterator<Item = (K, V)>,
{
    sequence.into_iter().next().map(|(_, value)| value)
}

/// Returns the number of items `sequence` yields.
///
/// When the iterator reports an exact size (equal lower and upper bounds)
/// that size is returned without pulling anything. Otherwise the iterator
/// is drained.
///
/// # Examples
///
/// ```rust
/// use iterables::operations::{count, filter};
/// use iterables::sequence::list;
///
/// assert_eq!(count(list(vec![1, 2, 3])), 3);
/// assert_eq!(count(filter(list(vec![0, 1, 2]))), 2);
/// ```
pub fn count<I: IntoIterator>(sequence: I) -> usize {
    let iterator = sequence.into_iter();
    match iterator.size_hint() {
        (lower, Some(upper)) if lower == upper => lower,
        _ => iterator.count(),
    }
}

/// Returns the length a sequence reports through [`KnownLength`].
///
/// # Examples
///
/// ```rust
/// use iterables::operations::length;
/// use iterables::sequence::{list, CacheableSequence};
///
/// assert_eq!(length(&vec![1, 2]), 2);
/// assert_eq!(length(&CacheableSequence::new(list(vec!['a']))), 1);
/// ```
#[inline]
pub fn length<S: KnownLength + ?Sized>(sequence: &S) -> usize {
    sequence.known_length()
}

/// Returns the first value for which `predicate(value, key)` holds.
///
/// # Examples
///
/// ```rust
/// use iterables::operations::find;
///
/// assert_eq!(find([("key1", 5), ("key2", 10)], |value, _| *value > 5), Some(10));
/// assert_eq!(find([("key1", 5), ("key2", 10)], |_, key| *key == "key3"), None);
/// ```
pub fn find<I, K, V, P>(sequence: I, mut predicate: P) -> Option<V>
where
    I: IntoIterator<Item = (K, V)>,
    P: FnMut(&V, &K) -> bool,
{
    sequence
        .into_iter()
        .find(|(key, value)| predicate(value, key))
        .map(|(_, value)| value)
}

/// Returns the key of the first pair for which `predicate(value, key)` holds.
pub fn find_key<I, K, V, P>(sequence: I, mut predicate: P) -> Option<K>
where
    I: IntoIterator<Item = (K, V)>,
    P: FnMut(&V, &K) -> bool,
{
    sequence
        .into_iter()
        .find(|(key, value)| predicate(value, key))
        .map(|(key, _)| key)
}

/// Returns `true` if `predicate(value, key)` holds for some pair.
///
/// `false` for an empty sequence.
pub fn any<I, K, V, P>(sequence: I, mut predicate: P) -> bool
where
    I: IntoIterator<Item = (K, V)>,
    P: FnMut(&V, &K) -> bool,
{
    sequence.into_iter().any(|(key, value)| predicate(&value, &key))
}

/// Returns `true` if `predicate(value, key)` holds for every pair.
///
/// `true` for an empty sequence.
///
/// # Examples
///
/// ```rust
/// use iterables::operations::all;
/// use iterables::sequence::list;
///
/// assert!(all(list(vec![2, 4]), |value, _| value % 2 == 0));
/// assert!(all(list(Vec::<i32>::new()), |_, _| false));
/// ```
pub fn all<I, K, V, P>(sequence: I, mut predicate: P) -> bool
where
    I: IntoIterator<Item = (K, V)>,
    P: FnMut(&V, &K) -> bool,
{
    sequence.into_iter().all(|(key, value)| predicate(&value, &key))
}

/// Calls `callback(value, key, extra)` for every pair, in order.
///
/// Always returns `true` once the whole sequence has been visited. Pass
/// `None` as `extra` when the callback needs no extra argument.
///
/// # Examples
///
/// ```rust
/// use iterables::operations::walk;
///
/// let mut seen = Vec::new();
/// let completed = walk(
///     [("a", 1), ("b", 2)],
///     |value, key, prefix: Option<&str>| seen.push(format!("{}{key}={value}", prefix.unwrap_or(""))),
///     Some("#"),
/// );
/// assert!(completed);
/// assert_eq!(seen, vec!["#a=1", "#b=2"]);
/// ```
pub fn walk<I, K, V, A, F>(sequence: I, mut callback: F, extra: Option<&A>) -> bool
where
    I: IntoIterator<Item = (K, V)>,
    A: ?Sized,
    F: FnMut(V, K, Option<&A>),
{
    for (key, value) in sequence {
        callback(value, key, extra);
    }
    true
}

/// [`walk`] over the named fields of a record.
///
/// The record is never modified; the callback receives owned copies.
///
/// # Examples
///
/// ```rust
/// use iterables::key::Key;
/// use iterables::operations::walk_record;
/// use iterables::value::Value;
///
/// let record = Value::map([("id", Value::from(7)), ("name", Value::from("seven"))]);
/// let mut names = Vec::new();
/// walk_record(&record, |_, key, _: Option<&()>| names.push(key), None);
/// assert_eq!(names, vec![Key::from("id"), Key::from("name")]);
/// ```
pub fn walk_record<R, A, F>(record: &R, callback: F, extra: Option<&A>) -> bool
where
    R: Fields + ?Sized,
    A: ?Sized,
    F: FnMut(Value, Key, Option<&A>),
{
    walk(record.fields(), callback, extra)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::filter_values;
    use crate::sequence::list;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_contains_stops_at_first_match() {
        let pulls = Cell::new(0);
        let source = list(vec![1, 2, 3, 4]).inspect(|_| pulls.set(pulls.get() + 1));
        assert!(contains(&2, source));
        assert_eq!(pulls.get(), 2);
    }

    #[rstest]
    #[case(Comparison::Strict, false)]
    #[case(Comparison::Loose, true)]
    fn test_contains_with_numeric_text(#[case] comparison: Comparison, #[case] expected: bool) {
        let values = list(vec![Value::from("10"), Value::from("x")]);
        assert_eq!(contains_with(&Value::from(10), values, comparison), expected);
    }

    #[rstest]
    fn test_first_value_pulls_once() {
        let pulls = Cell::new(0);
        let source = list(vec!['a', 'b']).inspect(|_| pulls.set(pulls.get() + 1));
        assert_eq!(first_value(source), Some('a'));
        assert_eq!(pulls.get(), 1);
        assert_eq!(first_value(Vec::<(usize, char)>::new()), None);
    }

    #[rstest]
    fn test_count_uses_exact_size_without_pulling() {
        let pulls = Cell::new(0);
        let source = list(vec![1, 2, 3]).map(|pair| {
            pulls.set(pulls.get() + 1);
            pair
        });
        assert_eq!(count(source), 3);
        assert_eq!(pulls.get(), 0);
    }

    #[rstest]
    fn test_count_drains_inexact_iterators() {
        assert_eq!(count(filter_values(list(vec![1, 2, 3]), |value| *value != 2)), 2);
    }

    #[rstest]
    fn test_find_key_returns_key() {
        let found = find_key(vec![("key1", 5), ("key2", 10)], |value, _| *value == 10);
        assert_eq!(found, Some("key2"));
    }

    #[rstest]
    #[case(vec![], false, true)]
    #[case(vec![1, 3], false, false)]
    #[case(vec![2, 3], true, false)]
    #[case(vec![2, 4], true, true)]
    fn test_any_all(#[case] values: Vec<i32>, #[case] any_even: bool, #[case] all_even: bool) {
        assert_eq!(any(list(values.clone()), |value, _| value % 2 == 0), any_even);
        assert_eq!(all(list(values), |value, _| value % 2 == 0), all_even);
    }

    #[rstest]
    fn test_walk_visits_in_order_with_none_extra() {
        let mut visited = Vec::new();
        let completed = walk(
            list(vec!["x", "y"]),
            |value, key, extra: Option<&i32>| visited.push((key, value, extra.copied())),
            None,
        );
        assert!(completed);
        assert_eq!(visited, vec![(0, "x", None), (1, "y", None)]);
    }

    #[rstest]
    fn test_walk_record_leaves_record_unchanged() {
        let record = Value::map([("a", Value::from(1))]);
        let before = record.clone();
        let mut total = 0;
        walk_record(
            &record,
            |value, _, step: Option<&i64>| {
                if let Value::Int(number) = value {
                    total += number * step.copied().unwrap_or(1);
                }
            },
            Some(&3),
        );
        assert_eq!(total, 3);
        assert_eq!(record, before);
    }
}
