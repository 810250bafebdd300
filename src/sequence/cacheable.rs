//! Replayable wrapper over a single-pass producer.
//!
//! [`CacheableSequence`] pulls from a single-pass producer at most once per
//! item. Every pulled pair is recorded in a cache before it is handed to the
//! consumer. After the producer reports completion, the producer is never
//! touched again and every new traversal replays the cache.
//!
//! # State Transitions
//!
//! ```text
//!                 producer returns None
//!     Live ───────────────────────────────► Exhausted
//!      │ ▲                                     │
//!      └─┘ consumer stops early                └─ iterations replay the cache
//!          (next traversal keeps pulling)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use iterables::sequence::{list, CacheableSequence};
//! use std::cell::Cell;
//!
//! let pulls = Cell::new(0);
//! let producer = list(vec![1, 2, 3]).inspect(|_| pulls.set(pulls.get() + 1));
//! let cached = CacheableSequence::new(producer);
//!
//! assert_eq!(cached.iter().map(|(_, value)| value).sum::<i32>(), 6);
//! assert_eq!(cached.iter().map(|(_, value)| value).sum::<i32>(), 6);
//! assert_eq!(pulls.get(), 3);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::iter::FusedIterator;

use crate::collection::{ArbitraryKeyMap, CacheBackend};
#[cfg(feature = "indexmap")]
use crate::collection::HashedCache;

use super::KnownLength;

struct CacheState<I, C> {
    source: I,
    cache: C,
    produced: usize,
    exhausted: bool,
}

/// A single-pass producer made replayable by caching.
///
/// # Type Parameters
///
/// * `I` - The wrapped producer
/// * `C` - The cache backend ([`ArbitraryKeyMap`] when built with `new`)
///
/// # Thread Safety
///
/// This type is NOT thread-safe: it holds its producer and cache in a
/// `RefCell`. Pulling from a nested traversal while the producer itself is
/// running panics with a borrow error.
pub struct CacheableSequence<I, C> {
    state: RefCell<CacheState<I, C>>,
}

static_assertions::assert_not_impl_any!(
    CacheableSequence<std::vec::IntoIter<(i32, i32)>, ArbitraryKeyMap<i32, i32>>: Sync
);

impl<I, K, V> CacheableSequence<I, ArbitraryKeyMap<K, V>>
where
    I: Iterator<Item = (K, V)>,
    K: PartialEq,
{
    /// Wraps `source`, caching into an [`ArbitraryKeyMap`].
    ///
    /// Works for any key type with `PartialEq`.
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self::with_backend(source, ArbitraryKeyMap::new())
    }
}

#[cfg(feature = "indexmap")]
impl<I, K, V> CacheableSequence<I, HashedCache<K, V>>
where
    I: Iterator<Item = (K, V)>,
    K: std::hash::Hash + Eq,
{
    /// Wraps `source`, caching into a [`HashedCache`].
    ///
    /// The fast path for `Hash + Eq` keys.
    pub fn hashed<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self::with_backend(source, HashedCache::default())
    }
}

impl<I, K, V, C> CacheableSequence<I, C>
where
    I: Iterator<Item = (K, V)>,
    C: CacheBackend<K, V>,
{
    /// Wraps `source`, caching into `backend`.
    pub fn with_backend<S>(source: S, backend: C) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            state: RefCell::new(CacheState {
                source: source.into_iter(),
                cache: backend,
                produced: 0,
                exhausted: false,
            }),
        }
    }

    /// Returns `true` once the producer has reported completion.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.state.borrow().exhausted
    }

    /// Returns the number of entries cached so far.
    #[inline]
    pub fn cached_len(&self) -> usize {
        self.state.borrow().cache.entry_count()
    }
}

impl<I, K, V, C> CacheableSequence<I, C>
where
    I: Iterator<Item = (K, V)>,
    C: CacheBackend<K, V>,
    K: Clone,
    V: Clone,
{
    /// Starts a traversal.
    ///
    /// Before exhaustion the traversal pulls from the shared producer, so a
    /// traversal started after an abandoned one continues where the producer
    /// stands. After exhaustion it replays the cache from the start.
    pub fn iter(&self) -> CacheableIter<'_, I, C> {
        let replay = if self.state.borrow().exhausted {
            tracing::trace!("replaying cached sequence");
            Some(0)
        } else {
            None
        };
        CacheableIter {
            owner: self,
            replay,
        }
    }

    /// Returns the number of items the producer yields.
    ///
    /// Drains the producer first if it is not exhausted yet. If the producer
    /// repeated a key, this counts every produced item while the cache holds
    /// one entry per distinct key.
    pub fn count(&self) -> usize {
        while self.pull().is_some() {}
        self.state.borrow().produced
    }

    fn pull(&self) -> Option<(K, V)> {
        let mut state = self.state.borrow_mut();
        if state.exhausted {
            return None;
        }
        if let Some((key, value)) = state.source.next() {
            state.produced += 1;
            state.cache.record(key.clone(), value.clone());
            Some((key, value))
        } else {
            state.exhausted = true;
            tracing::trace!(produced = state.produced, "cacheable source exhausted");
            None
        }
    }

    fn replayed(&self, index: usize) -> Option<(K, V)> {
        let state = self.state.borrow();
        state
            .cache
            .entry_at(index)
            .map(|(key, value)| (key.clone(), value.clone()))
    }
}

impl<I, C> fmt::Debug for CacheableSequence<I, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state.try_borrow() {
            Ok(state) => formatter
                .debug_struct("CacheableSequence")
                .field("produced", &state.produced)
                .field("exhausted", &state.exhausted)
                .finish_non_exhaustive(),
            Err(_) => formatter.write_str("CacheableSequence(<in use>)"),
        }
    }
}

impl<I, K, V, C> KnownLength for CacheableSequence<I, C>
where
    I: Iterator<Item = (K, V)>,
    C: CacheBackend<K, V>,
    K: Clone,
    V: Clone,
{
    fn known_length(&self) -> usize {
        self.count()
    }
}

impl<'a, I, K, V, C> IntoIterator for &'a CacheableSequence<I, C>
where
    I: Iterator<Item = (K, V)>,
    C: CacheBackend<K, V>,
    K: Clone,
    V: Clone,
{
    type Item = (K, V);
    type IntoIter = CacheableIter<'a, I, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Traversal of a [`CacheableSequence`].
pub struct CacheableIter<'a, I, C> {
    owner: &'a CacheableSequence<I, C>,
    replay: Option<usize>,
}

impl<I, K, V, C> Iterator for CacheableIter<'_, I, C>
where
    I: Iterator<Item = (K, V)>,
    C: CacheBackend<K, V>,
    K: Clone,
    V: Clone,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.replay {
            Some(index) => {
                let pair = self.owner.replayed(*index)?;
                *index += 1;
                Some(pair)
            }
            None => self.owner.pull(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let state = self.owner.state.borrow();
        match self.replay {
            Some(index) => {
                let remaining = state.cache.entry_count().saturating_sub(index);
                (remaining, Some(remaining))
            }
            None if state.exhausted => (0, Some(0)),
            None => (0, None),
        }
    }
}

impl<I, K, V, C> FusedIterator for CacheableIter<'_, I, C>
where
    I: Iterator<Item = (K, V)>,
    C: CacheBackend<K, V>,
    K: Clone,
    V: Clone,
{
}
