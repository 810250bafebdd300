//! Reversal of a sequence.

use std::iter::FusedIterator;

use crate::key::ListPosition;

/// Yields the pairs of `sequence` in reverse order.
///
/// The whole sequence is read on the first pull. When the sequence is
/// list-like (keys `0, 1, 2, ...`) and `preserve_keys` is `false`, values
/// are reversed but keys stay `0, 1, 2, ...`. Otherwise every pair keeps its
/// key.
///
/// # Examples
///
/// ```rust
/// use iterables::operations::reverse;
/// use iterables::sequence::list;
///
/// let renumbered: Vec<_> = reverse(list(vec!['a', 'b', 'c']), false).collect();
/// assert_eq!(renumbered, vec![(0, 'c'), (1, 'b'), (2, 'a')]);
///
/// let preserved: Vec<_> = reverse(list(vec!['a', 'b', 'c']), true).collect();
/// assert_eq!(preserved, vec![(2, 'c'), (1, 'b'), (0, 'a')]);
///
/// let named: Vec<_> = reverse([("x", 1), ("y", 2)], false).collect();
/// assert_eq!(named, vec![("y", 2), ("x", 1)]);
/// ```
pub fn reverse<I, K, V>(sequence: I, preserve_keys: bool) -> Reverse<I::IntoIter, K, V>
where
    I: IntoIterator<Item = (K, V)>,
    K: ListPosition,
{
    Reverse {
        pending: Some(sequence.into_iter()),
        preserve_keys,
        reversed: Vec::new().into_iter(),
    }
}

/// Iterator returned by [`reverse`].
pub struct Reverse<I, K, V> {
    pending: Option<I>,
    preserve_keys: bool,
    reversed: std::vec::IntoIter<(K, V)>,
}

fn is_list_like<K: ListPosition>(keys: &[K]) -> bool {
    keys.iter()
        .enumerate()
        .all(|(position, key)| key.list_position() == Some(position))
}

impl<I, K, V> Iterator for Reverse<I, K, V>
where
    I: Iterator<Item = (K, V)>,
    K: ListPosition,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(source) = self.pending.take() {
            let (keys, mut values): (Vec<K>, Vec<V>) = source.unzip();
            values.reverse();
            let pairs: Vec<(K, V)> = if !self.preserve_keys && is_list_like(&keys) {
                keys.into_iter().zip(values).collect()
            } else {
                keys.into_iter().rev().zip(values).collect()
            };
            tracing::trace!(len = pairs.len(), "reverse buffered");
            self.reversed = pairs.into_iter();
        }
        self.reversed.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.pending {
            Some(source) => source.size_hint(),
            None => self.reversed.size_hint(),
        }
    }
}

impl<I, K, V> FusedIterator for Reverse<I, K, V>
where
    I: Iterator<Item = (K, V)>,
    K: ListPosition,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Key;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(false, vec![(0, 'c'), (1, 'b'), (2, 'a')])]
    #[case(true, vec![(2, 'c'), (1, 'b'), (0, 'a')])]
    fn test_list_like_reversal(#[case] preserve_keys: bool, #[case] expected: Vec<(usize, char)>) {
        let reversed: Vec<_> =
            reverse(vec![(0_usize, 'a'), (1, 'b'), (2, 'c')], preserve_keys).collect();
        assert_eq!(reversed, expected);
    }

    #[rstest]
    fn test_gapped_integer_keys_are_kept() {
        let reversed: Vec<_> = reverse(vec![(0, 'a'), (2, 'b')], false).collect();
        assert_eq!(reversed, vec![(2, 'b'), (0, 'a')]);
    }

    #[rstest]
    fn test_mixed_keys_are_kept() {
        let reversed: Vec<_> = reverse(
            vec![(Key::Index(0), 1), (Key::from("name"), 2)],
            false,
        )
        .collect();
        assert_eq!(
            reversed,
            vec![(Key::from("name"), 2), (Key::Index(0), 1)]
        );
    }

    #[rstest]
    fn test_reads_nothing_until_first_pull() {
        let pulls = Cell::new(0);
        let source = vec![(0, 1), (1, 2)]
            .into_iter()
            .inspect(|_| pulls.set(pulls.get() + 1));
        let mut reversed = reverse(source, false);
        assert_eq!(pulls.get(), 0);
        assert_eq!(reversed.next(), Some((0, 2)));
        assert_eq!(pulls.get(), 2);
    }

    #[rstest]
    fn test_empty_sequence() {
        assert_eq!(reverse(Vec::<(usize, i32)>::new(), false).next(), None);
    }
}
