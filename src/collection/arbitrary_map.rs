//! Insertion-ordered map for keys that only support equality.
//!
//! This module provides [`ArbitraryKeyMap`], an association list that keeps
//! keys and values in two index-aligned vectors. Keys need neither `Hash`
//! nor `Ord`: every keyed operation is a linear scan using `PartialEq`.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `contains_key` | O(n)       |
//! | `get` / `find` | O(n)       |
//! | `set`          | O(n)       |
//! | `remove`       | O(n)       |
//! | `len`          | O(1)       |
//! | `get_index`    | O(1)       |
//! | `iter`         | O(1) + O(n)|
//!
//! The linear cost is the price of accepting any key type. When keys are
//! `Hash + Eq`, [`HashedCache`](crate::collection::HashedCache) is the fast
//! path for caching.
//!
//! # Examples
//!
//! ```rust
//! use iterables::collection::ArbitraryKeyMap;
//!
//! let mut map = ArbitraryKeyMap::new();
//! map.set("hello", "world");
//! map.set("answer", "42");
//! map.set("hello", "again");
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get(&"hello"), Ok(&"again"));
//!
//! let keys: Vec<_> = map.keys().copied().collect();
//! assert_eq!(keys, vec!["hello", "answer"]);
//! ```

use std::fmt;
use std::iter::FusedIterator;

use crate::error::IterablesError;
use crate::key::RenderKey;
use crate::sequence::KnownLength;

/// An insertion-ordered map whose keys are compared with `PartialEq`.
///
/// Invariants:
///
/// - `keys[i]` is paired with `values[i]` for every valid `i`
/// - a key appears at most once
/// - removal shifts later entries down, keeping their relative order
#[derive(Clone)]
pub struct ArbitraryKeyMap<K, V> {
    keys: Vec<K>,
    values: Vec<V>,
}

impl<K, V> ArbitraryKeyMap<K, V> {
    /// Creates an empty map.
    #[inline]
    pub const fn new() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Creates an empty map with room for `capacity` entries.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the map holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the entry at insertion position `index`.
    #[inline]
    pub fn get_index(&self, index: usize) -> Option<(&K, &V)> {
        Some((self.keys.get(index)?, self.values.get(index)?))
    }

    /// Iterates over entries in insertion order.
    #[inline]
    pub fn iter(&self) -> ArbitraryKeyMapIter<'_, K, V> {
        ArbitraryKeyMapIter {
            keys: self.keys.iter(),
            values: self.values.iter(),
        }
    }

    /// Iterates over keys in insertion order.
    #[inline]
    pub fn keys(&self) -> std::slice::Iter<'_, K> {
        self.keys.iter()
    }

    /// Iterates over values in insertion order.
    #[inline]
    pub fn values(&self) -> std::slice::Iter<'_, V> {
        self.values.iter()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
    }
}

impl<K: PartialEq, V> ArbitraryKeyMap<K, V> {
    fn position(&self, key: &K) -> Option<usize> {
        self.keys.iter().position(|candidate| candidate == key)
    }

    /// Returns `true` if `key` is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterables::collection::ArbitraryKeyMap;
    ///
    /// let map: ArbitraryKeyMap<_, _> = [("a", 1)].into_iter().collect();
    /// assert!(map.contains_key(&"a"));
    /// assert!(!map.contains_key(&"b"));
    /// ```
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    /// Returns the value for `key`, or `None` if absent.
    #[inline]
    pub fn find(&self, key: &K) -> Option<&V> {
        self.position(key).map(|index| &self.values[index])
    }

    /// Returns a mutable reference to the value for `key`, or `None` if absent.
    #[inline]
    pub fn find_mut(&mut self, key: &K) -> Option<&mut V> {
        self.position(key).map(|index| &mut self.values[index])
    }

    /// Returns the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`IterablesError::KeyNotFound`] if `key` is absent. The error
    /// carries the key's textual rendering when [`RenderKey`] provides one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterables::collection::ArbitraryKeyMap;
    /// use iterables::error::IterablesError;
    ///
    /// let map: ArbitraryKeyMap<i32, &str> = ArbitraryKeyMap::new();
    /// assert_eq!(
    ///     map.get(&7),
    ///     Err(IterablesError::KeyNotFound { key: Some("7".to_string()) })
    /// );
    /// ```
    pub fn get(&self, key: &K) -> Result<&V, IterablesError>
    where
        K: RenderKey,
    {
        self.find(key)
            .ok_or_else(|| IterablesError::key_not_found(key))
    }

    /// Inserts or overwrites the value for `key`.
    ///
    /// An existing key keeps its position and the previous value is
    /// returned. A new key is appended.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        match self.position(&key) {
            Some(index) => Some(std::mem::replace(&mut self.values[index], value)),
            None => {
                self.keys.push(key);
                self.values.push(value);
                None
            }
        }
    }

    /// Removes `key` and returns its value. Absent keys are a no-op.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.position(key)?;
        self.keys.remove(index);
        Some(self.values.remove(index))
    }
}

impl<K, V> Default for ArbitraryKeyMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for ArbitraryKeyMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys && self.values == other.values
    }
}

impl<K: Eq, V: Eq> Eq for ArbitraryKeyMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ArbitraryKeyMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for ArbitraryKeyMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

impl<K: PartialEq, V> FromIterator<(K, V)> for ArbitraryKeyMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iterable: I) -> Self {
        let mut map = Self::new();
        map.extend(iterable);
        map
    }
}

impl<K: PartialEq, V> Extend<(K, V)> for ArbitraryKeyMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iterable: I) {
        for (key, value) in iterable {
            self.set(key, value);
        }
    }
}

impl<K, V> KnownLength for ArbitraryKeyMap<K, V> {
    #[inline]
    fn known_length(&self) -> usize {
        self.len()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over an [`ArbitraryKeyMap`].
pub struct ArbitraryKeyMapIter<'a, K, V> {
    keys: std::slice::Iter<'a, K>,
    values: std::slice::Iter<'a, V>,
}

impl<'a, K, V> Iterator for ArbitraryKeyMapIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        Some((self.keys.next()?, self.values.next()?))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for ArbitraryKeyMapIter<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        Some((self.keys.next_back()?, self.values.next_back()?))
    }
}

impl<K, V> ExactSizeIterator for ArbitraryKeyMapIter<'_, K, V> {}

impl<K, V> FusedIterator for ArbitraryKeyMapIter<'_, K, V> {}

/// Owning iterator over an [`ArbitraryKeyMap`].
pub struct ArbitraryKeyMapIntoIter<K, V> {
    keys: std::vec::IntoIter<K>,
    values: std::vec::IntoIter<V>,
}

impl<K, V> Iterator for ArbitraryKeyMapIntoIter<K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        Some((self.keys.next()?, self.values.next()?))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for ArbitraryKeyMapIntoIter<K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        Some((self.keys.next_back()?, self.values.next_back()?))
    }
}

impl<K, V> ExactSizeIterator for ArbitraryKeyMapIntoIter<K, V> {}

impl<K, V> FusedIterator for ArbitraryKeyMapIntoIter<K, V> {}

impl<K, V> IntoIterator for ArbitraryKeyMap<K, V> {
    type Item = (K, V);
    type IntoIter = ArbitraryKeyMapIntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        ArbitraryKeyMapIntoIter {
            keys: self.keys.into_iter(),
            values: self.values.into_iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a ArbitraryKeyMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = ArbitraryKeyMapIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for ArbitraryKeyMap<K, V>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct ArbitraryKeyMapVisitor<K, V> {
    marker: std::marker::PhantomData<(K, V)>,
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for ArbitraryKeyMapVisitor<K, V>
where
    K: serde::Deserialize<'de> + PartialEq,
    V: serde::Deserialize<'de>,
{
    type Value = ArbitraryKeyMap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut map = ArbitraryKeyMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry()? {
            map.set(key, value);
        }
        Ok(map)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for ArbitraryKeyMap<K, V>
where
    K: serde::Deserialize<'de> + PartialEq,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(ArbitraryKeyMapVisitor {
            marker: std::marker::PhantomData,
        })
    }
}
