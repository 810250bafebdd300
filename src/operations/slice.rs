//! Windows over a sequence by position.

use std::iter::FusedIterator;

use crate::sequence::{Renumbered, renumber};

/// Returns the window of `sequence` starting at `offset` and spanning
/// `length` pairs, keyed by a fresh counter.
///
/// Positions follow array slicing rules:
///
/// - a non-negative `offset` counts from the start, a negative one from the
///   end;
/// - `None` takes everything after the offset, a non-negative `length`
///   takes at most that many pairs, a negative one stops that many pairs
///   before the end.
///
/// With a non-negative offset and a non-negative or absent length the
/// window is read lazily and iteration stops as soon as `length` pairs have
/// been produced. A negative offset or length needs the total size, so the
/// whole sequence is read on the first pull.
///
/// # Examples
///
/// ```rust
/// use iterables::operations::slice;
/// use iterables::sequence::list;
///
/// let window: Vec<_> = slice(list(vec![1, 2, 3, 4, 5]), 1, Some(2)).collect();
/// assert_eq!(window, vec![(0, 2), (1, 3)]);
///
/// let tail: Vec<_> = slice(list(vec![1, 2, 3, 4, 5]), -2, None).collect();
/// assert_eq!(tail, vec![(0, 4), (1, 5)]);
/// ```
pub fn slice<I, K, V>(
    sequence: I,
    offset: isize,
    length: Option<isize>,
) -> Renumbered<Slice<I::IntoIter, K, V>>
where
    I: IntoIterator<Item = (K, V)>,
{
    renumber(slice_preserving_keys(sequence, offset, length))
}

/// [`slice`] keeping the original keys.
///
/// # Examples
///
/// ```rust
/// use iterables::operations::slice_preserving_keys;
/// use iterables::sequence::list;
///
/// let window: Vec<_> = slice_preserving_keys(list(vec![1, 2, 3, 4, 5]), 1, Some(-2)).collect();
/// assert_eq!(window, vec![(1, 2), (2, 3)]);
/// ```
pub fn slice_preserving_keys<I, K, V>(
    sequence: I,
    offset: isize,
    length: Option<isize>,
) -> Slice<I::IntoIter, K, V>
where
    I: IntoIterator<Item = (K, V)>,
{
    let inner = sequence.into_iter();
    let state = match (offset, length) {
        (0.., None) => SliceState::Streaming {
            inner,
            skip: offset.unsigned_abs(),
            remaining: None,
        },
        (0.., Some(length @ 0..)) => SliceState::Streaming {
            inner,
            skip: offset.unsigned_abs(),
            remaining: Some(length.unsigned_abs()),
        },
        _ => SliceState::Pending {
            inner,
            offset,
            length,
        },
    };
    Slice { state }
}

enum SliceState<I, K, V> {
    Streaming {
        inner: I,
        skip: usize,
        remaining: Option<usize>,
    },
    Pending {
        inner: I,
        offset: isize,
        length: Option<isize>,
    },
    Buffered(std::vec::IntoIter<(K, V)>),
    Finished,
}

/// Iterator returned by [`slice_preserving_keys`].
pub struct Slice<I, K, V> {
    state: SliceState<I, K, V>,
}

/// Resolves `offset` and `length` against `total` into a `start..end`
/// range.
fn window(total: usize, offset: isize, length: Option<isize>) -> (usize, usize) {
    let start = if offset < 0 {
        total.saturating_sub(offset.unsigned_abs())
    } else {
        offset.unsigned_abs().min(total)
    };
    let end = match length {
        None => total,
        Some(length) if length < 0 => total.saturating_sub(length.unsigned_abs()),
        Some(length) => start.saturating_add(length.unsigned_abs()).min(total),
    };
    (start, end.max(start))
}

impl<I, K, V> Iterator for Slice<I, K, V>
where
    I: Iterator<Item = (K, V)>,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match &mut self.state {
                SliceState::Streaming {
                    inner,
                    skip,
                    remaining,
                } => {
                    if *remaining == Some(0) {
                        self.state = SliceState::Finished;
                        return None;
                    }
                    while *skip > 0 {
                        if inner.next().is_none() {
                            self.state = SliceState::Finished;
                            return None;
                        }
                        *skip -= 1;
                    }
                    let Some(pair) = inner.next() else {
                        self.state = SliceState::Finished;
                        return None;
                    };
                    if let Some(remaining) = remaining {
                        *remaining -= 1;
                    }
                    return Some(pair);
                }
                SliceState::Pending { .. } => {
                    let SliceState::Pending {
                        inner,
                        offset,
                        length,
                    } = std::mem::replace(&mut self.state, SliceState::Finished)
                    else {
                        return None;
                    };
                    let mut pairs: Vec<(K, V)> = inner.collect();
                    let (start, end) = window(pairs.len(), offset, length);
                    tracing::trace!(total = pairs.len(), start, end, "slice buffered");
                    pairs.truncate(end);
                    pairs.drain(..start);
                    self.state = SliceState::Buffered(pairs.into_iter());
                }
                SliceState::Buffered(pairs) => return pairs.next(),
                SliceState::Finished => return None,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            SliceState::Streaming {
                inner,
                skip,
                remaining,
            } => {
                let (lower, upper) = inner.size_hint();
                let lower = lower.saturating_sub(*skip);
                let upper = upper.map(|upper| upper.saturating_sub(*skip));
                match remaining {
                    Some(remaining) => (
                        lower.min(*remaining),
                        Some(upper.map_or(*remaining, |upper| upper.min(*remaining))),
                    ),
                    None => (lower, upper),
                }
            }
            SliceState::Pending { inner, .. } => (0, inner.size_hint().1),
            SliceState::Buffered(pairs) => pairs.size_hint(),
            SliceState::Finished => (0, Some(0)),
        }
    }
}

impl<I, K, V> FusedIterator for Slice<I, K, V> where I: Iterator<Item = (K, V)> {}
