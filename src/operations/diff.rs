//! Exclusion of values present in other sequences.

use std::iter::FusedIterator;

/// Keeps the pairs of `sequence` whose value appears in none of `others`.
///
/// Values are compared with `PartialEq`; keys of `others` are ignored.
/// Nothing is read from `others` until the first pair of `sequence` is
/// pulled. At that point every value of `others` is read into an exclusion
/// list. With no others, pairs pass through unchanged.
///
/// # Examples
///
/// ```rust
/// use iterables::operations::diff;
/// use iterables::sequence::list;
///
/// let kept: Vec<_> = diff(
///     [("key1", 5), ("key2", 10), ("key3", 15)],
///     vec![list(vec![10, 20]), list(vec![5])],
/// )
/// .collect();
/// assert_eq!(kept, vec![("key3", 15)]);
/// ```
pub fn diff<I, O, J, K, L, V>(sequence: I, others: O) -> Diff<I::IntoIter, O::IntoIter, V>
where
    I: IntoIterator<Item = (K, V)>,
    O: IntoIterator<Item = J>,
    J: IntoIterator<Item = (L, V)>,
    V: PartialEq,
{
    Diff {
        inner: sequence.into_iter(),
        pending: Some(others.into_iter()),
        excluded: Vec::new(),
    }
}

/// Iterator returned by [`diff`].
pub struct Diff<I, O, V> {
    inner: I,
    pending: Option<O>,
    excluded: Vec<V>,
}

impl<I, O, J, K, L, V> Iterator for Diff<I, O, V>
where
    I: Iterator<Item = (K, V)>,
    O: Iterator<Item = J>,
    J: IntoIterator<Item = (L, V)>,
    V: PartialEq,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (key, value) = self.inner.next()?;
            if let Some(others) = self.pending.take() {
                self.excluded = others
                    .flat_map(|other| other.into_iter().map(|(_, value)| value))
                    .collect();
                tracing::trace!(excluded = self.excluded.len(), "diff exclusion list built");
            }
            if !self.excluded.contains(&value) {
                return Some((key, value));
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<I, O, J, K, L, V> FusedIterator for Diff<I, O, V>
where
    I: FusedIterator<Item = (K, V)>,
    O: Iterator<Item = J>,
    J: IntoIterator<Item = (L, V)>,
    V: PartialEq,
{
}
