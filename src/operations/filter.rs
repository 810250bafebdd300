//! Predicate-driven selection of pairs.

use std::iter::FusedIterator;

use crate::value::Truthy;

/// Selects what the default predicate of [`filter_by_mode`] inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterMode {
    /// Keep pairs whose value is truthy.
    #[default]
    Value,
    /// Keep pairs whose key is truthy.
    Key,
    /// Keep pairs whose value is truthy; the key plays no part.
    Both,
}

/// Iterator returned by the filter family.
///
/// Pairs are forwarded unchanged, keys included.
#[derive(Clone)]
pub struct Filter<I, P> {
    inner: I,
    predicate: P,
}

impl<I, K, V, P> Iterator for Filter<I, P>
where
    I: Iterator<Item = (K, V)>,
    P: FnMut(&K, &V) -> bool,
{
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let predicate = &mut self.predicate;
        self.inner.find(|(key, value)| predicate(key, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<I, K, V, P> FusedIterator for Filter<I, P>
where
    I: FusedIterator<Item = (K, V)>,
    P: FnMut(&K, &V) -> bool,
{
}

fn filtered<I, K, V, P>(sequence: I, predicate: P) -> Filter<I::IntoIter, P>
where
    I: IntoIterator<Item = (K, V)>,
    P: FnMut(&K, &V) -> bool,
{
    Filter {
        inner: sequence.into_iter(),
        predicate,
    }
}

/// Keeps the pairs whose value is truthy.
///
/// # Examples
///
/// ```rust
/// use iterables::operations::filter;
///
/// let kept: Vec<_> = filter([("a", 0), ("b", 1), ("c", 2)]).collect();
/// assert_eq!(kept, vec![("b", 1), ("c", 2)]);
/// ```
pub fn filter<I, K, V>(sequence: I) -> Filter<I::IntoIter, impl FnMut(&K, &V) -> bool>
where
    I: IntoIterator<Item = (K, V)>,
    V: Truthy,
{
    filtered(sequence, |_: &K, value: &V| value.is_truthy())
}

/// Keeps the pairs whose value satisfies `predicate`.
///
/// # Examples
///
/// ```rust
/// use iterables::operations::filter_values;
///
/// let kept: Vec<_> = filter_values([("key1", 5), ("key2", 10)], |value| *value > 5).collect();
/// assert_eq!(kept, vec![("key2", 10)]);
/// ```
pub fn filter_values<I, K, V, P>(
    sequence: I,
    mut predicate: P,
) -> Filter<I::IntoIter, impl FnMut(&K, &V) -> bool>
where
    I: IntoIterator<Item = (K, V)>,
    P: FnMut(&V) -> bool,
{
    filtered(sequence, move |_: &K, value: &V| predicate(value))
}

/// Keeps the pairs whose key satisfies `predicate`.
pub fn filter_keys<I, K, V, P>(
    sequence: I,
    mut predicate: P,
) -> Filter<I::IntoIter, impl FnMut(&K, &V) -> bool>
where
    I: IntoIterator<Item = (K, V)>,
    P: FnMut(&K) -> bool,
{
    filtered(sequence, move |key: &K, _: &V| predicate(key))
}

/// Keeps the pairs for which `predicate(value, key)` holds.
///
/// # Examples
///
/// ```rust
/// use iterables::operations::filter_pairs;
///
/// let kept: Vec<_> = filter_pairs([("key1", 5), ("key2", 10)], |value, key| {
///     *key == "key1" || *value > 5
/// })
/// .collect();
/// assert_eq!(kept.len(), 2);
/// ```
pub fn filter_pairs<I, K, V, P>(
    sequence: I,
    mut predicate: P,
) -> Filter<I::IntoIter, impl FnMut(&K, &V) -> bool>
where
    I: IntoIterator<Item = (K, V)>,
    P: FnMut(&V, &K) -> bool,
{
    filtered(sequence, move |key: &K, value: &V| predicate(value, key))
}

/// Keeps pairs by truthiness of the part selected by `mode`.
///
/// # Examples
///
/// ```rust
/// use iterables::operations::{filter_by_mode, FilterMode};
///
/// let kept: Vec<_> = filter_by_mode([(0, "zero key"), (1, "")], FilterMode::Key).collect();
/// assert_eq!(kept, vec![(1, "")]);
/// ```
pub fn filter_by_mode<I, K, V>(
    sequence: I,
    mode: FilterMode,
) -> Filter<I::IntoIter, impl FnMut(&K, &V) -> bool>
where
    I: IntoIterator<Item = (K, V)>,
    K: Truthy,
    V: Truthy,
{
    filtered(sequence, move |key: &K, value: &V| match mode {
        FilterMode::Value | FilterMode::Both => value.is_truthy(),
        FilterMode::Key => key.is_truthy(),
    })
}
