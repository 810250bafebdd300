//! The lazy sequence abstraction.
//!
//! A *sequence* is anything implementing `IntoIterator<Item = (K, V)>`:
//! a producer of key-value pairs, advanced one `next()` at a time.
//!
//! - A plain [`Iterator`] is **single-pass**: once consumed it yields
//!   nothing more.
//! - A type whose shared reference implements `IntoIterator` is
//!   **repeatable**: each `(&sequence).into_iter()` starts over.
//!
//! This module provides the building blocks around that abstraction:
//!
//! - [`list`]: views a list of values as pairs keyed `0, 1, 2, ...`
//! - [`renumber`]: replaces keys with a fresh zero-based counter
//! - [`KnownLength`]: the capability of reporting a length without iterating
//! - [`CacheableSequence`]: makes a single-pass producer replayable by
//!   recording what it produced
//! - [`RewindableSequence`]: makes a producer factory repeatable by calling
//!   it for each traversal
//!
//! # Examples
//!
//! ```rust
//! use iterables::sequence::{list, CacheableSequence};
//!
//! let cached = CacheableSequence::new(list(vec!["a", "b"]));
//!
//! let first: Vec<_> = cached.iter().collect();
//! let second: Vec<_> = cached.iter().collect();
//! assert_eq!(first, vec![(0, "a"), (1, "b")]);
//! assert_eq!(first, second);
//! ```

mod cacheable;
mod rewindable;

pub use cacheable::{CacheableIter, CacheableSequence};
pub use rewindable::RewindableSequence;

use std::iter::{Enumerate, FusedIterator};

/// Reports the length of a sequence without the caller iterating it.
///
/// Containers answer in constant time. Adapters may do work to answer:
/// [`CacheableSequence`] drains its producer, [`RewindableSequence`] runs one
/// fresh traversal.
pub trait KnownLength {
    /// Returns the number of pairs the sequence produces.
    fn known_length(&self) -> usize;
}

impl<T> KnownLength for [T] {
    #[inline]
    fn known_length(&self) -> usize {
        self.len()
    }
}

impl<T> KnownLength for Vec<T> {
    #[inline]
    fn known_length(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> KnownLength for std::collections::HashMap<K, V, S> {
    #[inline]
    fn known_length(&self) -> usize {
        self.len()
    }
}

impl<K, V> KnownLength for std::collections::BTreeMap<K, V> {
    #[inline]
    fn known_length(&self) -> usize {
        self.len()
    }
}

#[cfg(feature = "indexmap")]
impl<K, V, S> KnownLength for indexmap::IndexMap<K, V, S> {
    #[inline]
    fn known_length(&self) -> usize {
        self.len()
    }
}

impl<T: KnownLength + ?Sized> KnownLength for &T {
    #[inline]
    fn known_length(&self) -> usize {
        (**self).known_length()
    }
}

/// Views a list of values as a sequence keyed `0, 1, 2, ...`.
///
/// # Examples
///
/// ```rust
/// use iterables::sequence::list;
///
/// let pairs: Vec<_> = list(["x", "y"]).collect();
/// assert_eq!(pairs, vec![(0, "x"), (1, "y")]);
/// ```
#[inline]
pub fn list<I: IntoIterator>(values: I) -> Enumerate<I::IntoIter> {
    values.into_iter().enumerate()
}

/// Replaces the keys of `sequence` with a fresh zero-based counter.
///
/// # Examples
///
/// ```rust
/// use iterables::sequence::renumber;
///
/// let pairs: Vec<_> = renumber([("a", 1), ("b", 2)]).collect();
/// assert_eq!(pairs, vec![(0, 1), (1, 2)]);
/// ```
#[inline]
pub fn renumber<I, K, V>(sequence: I) -> Renumbered<I::IntoIter>
where
    I: IntoIterator<Item = (K, V)>,
{
    Renumbered {
        inner: sequence.into_iter(),
        next_key: 0,
    }
}

/// Iterator returned by [`renumber`].
#[derive(Debug, Clone)]
pub struct Renumbered<I> {
    inner: I,
    next_key: usize,
}

impl<I, K, V> Iterator for Renumbered<I>
where
    I: Iterator<Item = (K, V)>,
{
    type Item = (usize, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (_, value) = self.inner.next()?;
        let key = self.next_key;
        self.next_key += 1;
        Some((key, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I, K, V> ExactSizeIterator for Renumbered<I> where I: ExactSizeIterator<Item = (K, V)> {}

impl<I, K, V> FusedIterator for Renumbered<I> where I: FusedIterator<Item = (K, V)> {}
