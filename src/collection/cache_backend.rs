//! Storage used by [`CacheableSequence`](crate::sequence::CacheableSequence).
//!
//! A cache backend records produced pairs with map semantics and hands them
//! back by position, in recording order.

use super::ArbitraryKeyMap;

/// Positional storage of recorded key-value pairs.
///
/// Recording a key that is already present overwrites its value and keeps
/// its original position.
pub trait CacheBackend<K, V> {
    /// Records a produced pair.
    fn record(&mut self, key: K, value: V);

    /// Returns the pair at recording position `index`.
    fn entry_at(&self, index: usize) -> Option<(&K, &V)>;

    /// Returns the number of recorded entries.
    fn entry_count(&self) -> usize;
}

impl<K: PartialEq, V> CacheBackend<K, V> for ArbitraryKeyMap<K, V> {
    #[inline]
    fn record(&mut self, key: K, value: V) {
        self.set(key, value);
    }

    #[inline]
    fn entry_at(&self, index: usize) -> Option<(&K, &V)> {
        self.get_index(index)
    }

    #[inline]
    fn entry_count(&self) -> usize {
        self.len()
    }
}

/// Hash-based cache backend for `Hash + Eq` keys.
///
/// Keeps insertion order like [`ArbitraryKeyMap`] with O(1) recording.
#[cfg(feature = "indexmap")]
pub type HashedCache<K, V> = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;

#[cfg(feature = "indexmap")]
impl<K, V, S> CacheBackend<K, V> for indexmap::IndexMap<K, V, S>
where
    K: std::hash::Hash + Eq,
    S: std::hash::BuildHasher,
{
    #[inline]
    fn record(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    #[inline]
    fn entry_at(&self, index: usize) -> Option<(&K, &V)> {
        self.get_index(index)
    }

    #[inline]
    fn entry_count(&self) -> usize {
        self.len()
    }
}
