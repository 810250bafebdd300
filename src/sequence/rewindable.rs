//! Repeatable wrapper over a producer factory.

use std::fmt;

use super::KnownLength;

/// A sequence rebuilt from a factory for every traversal.
///
/// Each call to [`iter`](Self::iter), each `(&sequence).into_iter()` and
/// each [`count`](Self::count) invokes the factory exactly once and consumes
/// the fresh producer it returns. Nothing is shared between traversals
/// except the factory; side effects of re-running it are the factory's own.
///
/// # Examples
///
/// ```rust
/// use iterables::sequence::{list, RewindableSequence};
/// use std::cell::Cell;
///
/// let calls = Cell::new(0);
/// let sequence = RewindableSequence::new(|| {
///     calls.set(calls.get() + 1);
///     list(vec![1, 2, 3])
/// });
///
/// assert_eq!(sequence.iter().count(), 3);
/// assert_eq!(sequence.count(), 3);
/// assert_eq!(calls.get(), 2);
/// ```
#[derive(Clone)]
pub struct RewindableSequence<F> {
    factory: F,
}

impl<F, I> RewindableSequence<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    /// Wraps `factory`. The factory is not called until a traversal starts.
    #[inline]
    pub const fn new(factory: F) -> Self {
        Self { factory }
    }

    /// Starts a traversal over a fresh producer.
    pub fn iter(&self) -> I::IntoIter {
        tracing::trace!("invoking rewindable sequence factory");
        (self.factory)().into_iter()
    }

    /// Counts the items of one fresh traversal.
    pub fn count(&self) -> usize {
        self.iter().count()
    }
}

impl<F> fmt::Debug for RewindableSequence<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RewindableSequence")
            .finish_non_exhaustive()
    }
}

impl<F, I> KnownLength for RewindableSequence<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    fn known_length(&self) -> usize {
        self.count()
    }
}

impl<'a, F, I> IntoIterator for &'a RewindableSequence<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    type Item = I::Item;
    type IntoIter = I::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::list;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_factory_not_called_on_construction() {
        let calls = Cell::new(0);
        let _sequence = RewindableSequence::new(|| {
            calls.set(calls.get() + 1);
            list(vec![1])
        });
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_each_traversal_starts_over() {
        let sequence = RewindableSequence::new(|| list(vec!['a', 'b']));
        let partial: Vec<_> = sequence.iter().take(1).collect();
        let full: Vec<_> = (&sequence).into_iter().collect();
        assert_eq!(partial, vec![(0, 'a')]);
        assert_eq!(full, vec![(0, 'a'), (1, 'b')]);
    }

    #[rstest]
    fn test_count_invokes_factory_each_time() {
        let calls = Cell::new(0);
        let sequence = RewindableSequence::new(|| {
            calls.set(calls.get() + 1);
            list(vec![1, 2, 3])
        });
        assert_eq!(sequence.count(), 3);
        assert_eq!(sequence.known_length(), 3);
        assert_eq!(calls.get(), 2);
    }
}
