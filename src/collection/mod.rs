//! Ordered key-value containers.
//!
//! - [`ArbitraryKeyMap`]: insertion-ordered map over keys that only
//!   implement `PartialEq`
//! - [`CacheBackend`]: the storage contract of the cacheable adapter
//! - [`HashedCache`]: hash-based backend for `Hash + Eq` keys
//!   (feature `indexmap`)

mod arbitrary_map;
mod cache_backend;

pub use arbitrary_map::{ArbitraryKeyMap, ArbitraryKeyMapIntoIter, ArbitraryKeyMapIter};
#[cfg(feature = "indexmap")]
pub use cache_backend::HashedCache;
pub use cache_backend::CacheBackend;
