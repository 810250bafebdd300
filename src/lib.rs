//! # iterables
//!
//! Lazy operations over key-value sequences.
//!
//! ## Overview
//!
//! A sequence is anything that iterates `(key, value)` pairs. Keys may be of
//! any type and may repeat. This library provides:
//!
//! - **Operations**: map, filter, diff, slice, combine, zip, column, reverse
//!   and friends, all lazy, plus eager queries such as `contains`, `find`
//!   and `count`
//! - **Sequence adapters**: [`CacheableSequence`](sequence::CacheableSequence)
//!   makes a single-pass producer replayable,
//!   [`RewindableSequence`](sequence::RewindableSequence) makes a producer
//!   factory repeatable
//! - **Containers**: [`ArbitraryKeyMap`](collection::ArbitraryKeyMap), an
//!   insertion-ordered map accepting any key with equality
//! - **Dynamic values**: [`Key`](key::Key) and [`Value`](value::Value) for
//!   heterogeneous data
//!
//! ## Feature Flags
//!
//! - `indexmap` (default): hashed cache backend for `CacheableSequence`
//! - `serde`: `Serialize`/`Deserialize` for `Key`, `Value` and
//!   `ArbitraryKeyMap`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use iterables::prelude::*;
//!
//! let producer = list(vec![3, 1, 4, 1, 5]);
//! let cached = CacheableSequence::new(producer);
//!
//! let large: Vec<_> = filter_values(&cached, |value| *value > 2).collect();
//! assert_eq!(large, vec![(0, 3), (2, 4), (4, 5)]);
//! assert_eq!(count(&cached), 5);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every operation together with the sequence adapters, key and
/// value types and capability traits.
///
/// # Usage
///
/// ```rust
/// use iterables::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::{ArbitraryKeyMap, CacheBackend};
    pub use crate::error::{Exhausted, IterablesError};
    pub use crate::key::{Case, ChangeCase, Key, ListPosition, RenderKey};
    pub use crate::operations::*;
    pub use crate::sequence::{
        CacheableSequence, KnownLength, RewindableSequence, list, renumber,
    };
    pub use crate::value::{Comparison, Fields, LooseEq, Truthy, Value};
}

pub mod collection;
pub mod error;
pub mod key;
pub mod operations;
pub mod sequence;
pub mod value;

pub use error::IterablesError;
pub use operations::*;
