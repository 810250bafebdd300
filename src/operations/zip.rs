//! Concatenation of sequences.

use std::iter::FusedIterator;

/// Yields every pair of every sequence in `sequences`, in order.
///
/// Keys are kept as-is, so the result may repeat keys. Each sequence is
/// opened only after the previous one is exhausted.
///
/// # Examples
///
/// ```rust
/// use iterables::operations::zip;
/// use iterables::sequence::list;
///
/// let joined: Vec<_> = zip(vec![list(vec!['a', 'b']), list(vec!['c'])]).collect();
/// assert_eq!(joined, vec![(0, 'a'), (1, 'b'), (0, 'c')]);
/// ```
pub fn zip<O, J, K, V>(sequences: O) -> Zip<O::IntoIter, J::IntoIter>
where
    O: IntoIterator<Item = J>,
    J: IntoIterator<Item = (K, V)>,
{
    Zip {
        sequences: sequences.into_iter(),
        current: None,
    }
}

/// Iterator returned by [`zip`].
#[derive(Debug, Clone)]
pub struct Zip<O, T> {
    sequences: O,
    current: Option<T>,
}

impl<O, J, T, K, V> Iterator for Zip<O, T>
where
    O: Iterator<Item = J>,
    J: IntoIterator<Item = (K, V), IntoIter = T>,
    T: Iterator<Item = (K, V)>,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(pair) = self.current.as_mut().and_then(Iterator::next) {
                return Some(pair);
            }
            let Some(sequence) = self.sequences.next() else {
                self.current = None;
                return None;
            };
            self.current = Some(sequence.into_iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, _) = self
            .current
            .as_ref()
            .map_or((0, None), Iterator::size_hint);
        (lower, None)
    }
}

impl<O, J, T, K, V> FusedIterator for Zip<O, T>
where
    O: FusedIterator<Item = J>,
    J: IntoIterator<Item = (K, V), IntoIter = T>,
    T: Iterator<Item = (K, V)>,
{
}
