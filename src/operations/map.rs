//! Value transformation, alone or over sequences advanced in lockstep.

use std::iter::{Fuse, FusedIterator};

use smallvec::{SmallVec, smallvec};

/// Number of zipped values kept inline before [`ZipArguments`] spills to
/// the heap.
pub const INLINE_ZIP_ARGUMENTS: usize = 4;

/// The values handed to a [`map_zip`] transform: the primary value first,
/// then one entry per trailing sequence, `None` once that sequence is
/// exhausted.
pub type ZipArguments<V> = SmallVec<[Option<V>; INLINE_ZIP_ARGUMENTS]>;

/// Transforms every value, keeping keys.
///
/// `map(sequence, std::convert::identity)` passes pairs through unchanged.
///
/// # Examples
///
/// ```rust
/// use iterables::operations::map;
///
/// let squared: Vec<_> = map([("key1", 5), ("key2", 10)], |value| value * value).collect();
/// assert_eq!(squared, vec![("key1", 25), ("key2", 100)]);
/// ```
#[inline]
pub fn map<I, K, V, U, F>(sequence: I, transform: F) -> Map<I::IntoIter, F>
where
    I: IntoIterator<Item = (K, V)>,
    F: FnMut(V) -> U,
{
    Map {
        inner: sequence.into_iter(),
        transform,
    }
}

/// Iterator returned by [`map`].
#[derive(Clone)]
pub struct Map<I, F> {
    inner: I,
    transform: F,
}

impl<I, K, V, U, F> Iterator for Map<I, F>
where
    I: Iterator<Item = (K, V)>,
    F: FnMut(V) -> U,
{
    type Item = (K, U);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.inner.next()?;
        Some((key, (self.transform)(value)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I, K, V, U, F> ExactSizeIterator for Map<I, F>
where
    I: ExactSizeIterator<Item = (K, V)>,
    F: FnMut(V) -> U,
{
}

impl<I, K, V, U, F> FusedIterator for Map<I, F>
where
    I: FusedIterator<Item = (K, V)>,
    F: FnMut(V) -> U,
{
}

/// Advances `sequence` and every sequence of `others` in lockstep and
/// transforms the zipped values.
///
/// Iteration stops when `sequence` ends. Trailing sequences are read only
/// that far and contribute `None` once they run out. Keys are a fresh
/// zero-based counter. The trailing sequences are opened on the first pull.
///
/// # Examples
///
/// ```rust
/// use iterables::operations::map_zip;
/// use iterables::sequence::list;
///
/// let sums: Vec<_> = map_zip(
///     list(vec![1, 2, 3]),
///     vec![list(vec![4, 5, 6]), list(vec![7, 8])],
///     |arguments| arguments.into_iter().flatten().sum::<i32>(),
/// )
/// .collect();
/// assert_eq!(sums, vec![(0, 12), (1, 15), (2, 3)]);
/// ```
pub fn map_zip<I, O, J, K, L, V, U, F>(
    sequence: I,
    others: O,
    transform: F,
) -> MapZip<I::IntoIter, O::IntoIter, J::IntoIter, F>
where
    I: IntoIterator<Item = (K, V)>,
    O: IntoIterator<Item = J>,
    J: IntoIterator<Item = (L, V)>,
    F: FnMut(ZipArguments<V>) -> U,
{
    MapZip {
        primary: sequence.into_iter(),
        pending: Some(others.into_iter()),
        others: Vec::new(),
        next_key: 0,
        transform,
    }
}

/// [`map_zip`] without a transform: yields the zipped values themselves.
///
/// # Examples
///
/// ```rust
/// use iterables::operations::zip_values;
/// use iterables::sequence::list;
///
/// let zipped: Vec<_> = zip_values(list(vec![1]), vec![list(vec![2]), list(vec![3])])
///     .map(|(key, arguments)| (key, arguments.into_vec()))
///     .collect();
/// assert_eq!(zipped, vec![(0, vec![Some(1), Some(2), Some(3)])]);
/// ```
#[allow(clippy::type_complexity)]
pub fn zip_values<I, O, J, K, L, V>(
    sequence: I,
    others: O,
) -> MapZip<I::IntoIter, O::IntoIter, J::IntoIter, fn(ZipArguments<V>) -> ZipArguments<V>>
where
    I: IntoIterator<Item = (K, V)>,
    O: IntoIterator<Item = J>,
    J: IntoIterator<Item = (L, V)>,
{
    let collect_arguments: fn(ZipArguments<V>) -> ZipArguments<V> = std::convert::identity;
    map_zip(sequence, others, collect_arguments)
}

/// Iterator returned by [`map_zip`] and [`zip_values`].
pub struct MapZip<I, O, T, F> {
    primary: I,
    pending: Option<O>,
    others: Vec<Fuse<T>>,
    next_key: usize,
    transform: F,
}

impl<I, O, J, T, K, L, V, U, F> Iterator for MapZip<I, O, T, F>
where
    I: Iterator<Item = (K, V)>,
    O: Iterator<Item = J>,
    J: IntoIterator<Item = (L, V), IntoIter = T>,
    T: Iterator<Item = (L, V)>,
    F: FnMut(ZipArguments<V>) -> U,
{
    type Item = (usize, U);

    fn next(&mut self) -> Option<Self::Item> {
        let (_, value) = self.primary.next()?;
        if let Some(pending) = self.pending.take() {
            self.others = pending.map(|other| other.into_iter().fuse()).collect();
        }

        let mut arguments: ZipArguments<V> = smallvec![Some(value)];
        for other in &mut self.others {
            arguments.push(other.next().map(|(_, value)| value));
        }

        let key = self.next_key;
        self.next_key += 1;
        Some((key, (self.transform)(arguments)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.primary.size_hint()
    }
}

impl<I, O, J, T, K, L, V, U, F> FusedIterator for MapZip<I, O, T, F>
where
    I: FusedIterator<Item = (K, V)>,
    O: Iterator<Item = J>,
    J: IntoIterator<Item = (L, V), IntoIter = T>,
    T: Iterator<Item = (L, V)>,
    F: FnMut(ZipArguments<V>) -> U,
{
}

/// Typed two-sequence form of [`map_zip`].
///
/// The trailing sequence may have a different value type. It contributes
/// `None` once exhausted. Keys are a fresh zero-based counter.
///
/// # Examples
///
/// ```rust
/// use iterables::operations::zip_with;
/// use iterables::sequence::list;
///
/// let labelled: Vec<_> = zip_with(list(vec![1, 2]), list(vec!["one"]), |number, label| {
///     format!("{number}:{}", label.unwrap_or("?"))
/// })
/// .collect();
/// assert_eq!(labelled, vec![(0, "1:one".to_string()), (1, "2:?".to_string())]);
/// ```
pub fn zip_with<I, J, K, L, V, W, U, F>(
    sequence: I,
    other: J,
    transform: F,
) -> ZipWith<I::IntoIter, J, J::IntoIter, F>
where
    I: IntoIterator<Item = (K, V)>,
    J: IntoIterator<Item = (L, W)>,
    F: FnMut(V, Option<W>) -> U,
{
    ZipWith {
        primary: sequence.into_iter(),
        pending: Some(other),
        other: None,
        next_key: 0,
        transform,
    }
}

/// Iterator returned by [`zip_with`].
pub struct ZipWith<I, J, T, F> {
    primary: I,
    pending: Option<J>,
    other: Option<Fuse<T>>,
    next_key: usize,
    transform: F,
}

impl<I, J, T, K, L, V, W, U, F> Iterator for ZipWith<I, J, T, F>
where
    I: Iterator<Item = (K, V)>,
    J: IntoIterator<Item = (L, W), IntoIter = T>,
    T: Iterator<Item = (L, W)>,
    F: FnMut(V, Option<W>) -> U,
{
    type Item = (usize, U);

    fn next(&mut self) -> Option<Self::Item> {
        let (_, value) = self.primary.next()?;
        if let Some(pending) = self.pending.take() {
            self.other = Some(pending.into_iter().fuse());
        }
        let trailing = self
            .other
            .as_mut()
            .and_then(Iterator::next)
            .map(|(_, value)| value);

        let key = self.next_key;
        self.next_key += 1;
        Some((key, (self.transform)(value, trailing)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.primary.size_hint()
    }
}

impl<I, J, T, K, L, V, W, U, F> FusedIterator for ZipWith<I, J, T, F>
where
    I: FusedIterator<Item = (K, V)>,
    J: IntoIterator<Item = (L, W), IntoIter = T>,
    T: Iterator<Item = (L, W)>,
    F: FnMut(V, Option<W>) -> U,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::list;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_map_identity_passes_through() {
        let pairs: Vec<_> = map(vec![("a", 1), ("b", 2)], std::convert::identity).collect();
        assert_eq!(pairs, vec![("a", 1), ("b", 2)]);
    }

    #[rstest]
    fn test_map_zip_renumbers_keys() {
        let pairs: Vec<_> = map_zip(
            vec![("key1", 5), ("key2", 10)],
            vec![vec![("key3", 5), ("key4", 10)]],
            |arguments| arguments[0].map(|value| value * value),
        )
        .collect();
        assert_eq!(pairs, vec![(0, Some(25)), (1, Some(100))]);
    }

    #[rstest]
    fn test_map_zip_stops_with_primary() {
        let pulled = Cell::new(0);
        let trailing = list(vec![1, 2, 3, 4]).inspect(|_| pulled.set(pulled.get() + 1));
        let pairs: Vec<_> = zip_values(list(vec![9, 8]), vec![trailing]).collect();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pulled.get(), 2);
    }

    #[rstest]
    fn test_map_zip_opens_trailing_sequences_lazily() {
        let opened = Cell::new(false);
        let others = std::iter::once_with(|| {
            opened.set(true);
            list(vec![1])
        });
        let mut zipped = zip_values(list(vec![0]), others);
        assert!(!opened.get());
        assert!(zipped.next().is_some());
        assert!(opened.get());
    }

    #[rstest]
    fn test_zip_values_without_others_wraps_single_value() {
        let others: Vec<Vec<(usize, i32)>> = Vec::new();
        let pairs: Vec<_> = zip_values(list(vec![7]), others)
            .map(|(key, arguments)| (key, arguments.into_vec()))
            .collect();
        assert_eq!(pairs, vec![(0, vec![Some(7)])]);
    }

    fn assert_fused<T: FusedIterator>(_: &T) {}

    #[rstest]
    fn test_zip_adapters_are_fused_over_fused_sources() {
        let zipped = zip_values(list(vec![1]), vec![list(vec![2])]);
        let paired = zip_with(list(vec![1]), list(vec!['a']), |number, letter| (number, letter));
        assert_fused(&zipped);
        assert_fused(&paired);

        let mut exhausted = zipped;
        assert!(exhausted.next().is_some());
        assert_eq!(exhausted.next(), None);
        assert_eq!(exhausted.next(), None);
    }

    #[rstest]
    fn test_zip_with_pads_with_none() {
        let pairs: Vec<_> = zip_with(list(vec!['a', 'b', 'c']), list(vec![1]), |letter, number| {
            (letter, number)
        })
        .collect();
        assert_eq!(
            pairs,
            vec![(0, ('a', Some(1))), (1, ('b', None)), (2, ('c', None))]
        );
    }
}
