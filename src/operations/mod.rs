//! Operations over key-value sequences.
//!
//! Each operation accepts any `IntoIterator<Item = (K, V)>`. Adapters return
//! a lazy iterator that does no work until the first `next()`; queries
//! consume the sequence and return a result.
//!
//! # Adapters
//!
//! | Operation | Keys of the result |
//! |-----------|--------------------|
//! | [`map`] | preserved |
//! | [`map_zip`], [`zip_values`], [`zip_with`] | fresh counter |
//! | [`filter`], [`filter_values`], [`filter_keys`], [`filter_pairs`], [`filter_by_mode`] | preserved |
//! | [`diff`] | preserved |
//! | [`slice`] | fresh counter |
//! | [`slice_preserving_keys`] | preserved |
//! | [`combine`] | values of the key sequence |
//! | [`zip`] | preserved, may repeat |
//! | [`column`] | derived from each record |
//! | [`reverse`] | preserved, or renumbered for lists |
//! | [`change_key_case`] | case-converted |
//!
//! [`reverse`] and [`slice`] with a negative offset or length read the
//! whole source on the first pull.
//!
//! # Queries
//!
//! [`contains`], [`contains_with`], [`first_value`], [`count`], [`length`],
//! [`find`], [`find_key`], [`any`], [`all`], [`walk`] and [`walk_record`].
//!
//! # Examples
//!
//! ```rust
//! use iterables::operations::{filter_values, map, slice};
//! use iterables::sequence::list;
//!
//! let evens_squared = map(filter_values(list(1..=10), |value| value % 2 == 0), |value| value * value);
//! let window: Vec<_> = slice(evens_squared, 1, Some(2)).collect();
//! assert_eq!(window, vec![(0, 16), (1, 36)]);
//! ```

mod column;
mod combine;
mod diff;
mod filter;
mod key_case;
mod map;
mod reverse;
mod search;
mod slice;
mod zip;

pub use column::{Column, column};
pub use combine::{Combine, combine};
pub use diff::{Diff, diff};
pub use filter::{
    Filter, FilterMode, filter, filter_by_mode, filter_keys, filter_pairs, filter_values,
};
pub use key_case::{ChangeKeyCase, change_key_case};
pub use map::{
    INLINE_ZIP_ARGUMENTS, Map, MapZip, ZipArguments, ZipWith, map, map_zip, zip_values, zip_with,
};
pub use reverse::{Reverse, reverse};
pub use search::{
    all, any, contains, contains_with, count, find, find_key, first_value, length, walk,
    walk_record,
};
pub use slice::{Slice, slice, slice_preserving_keys};
pub use zip::{Zip, zip};
