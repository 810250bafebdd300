//! Error types for sequence operations and containers.
//!
//! Two failures are part of the public contract:
//!
//! - [`IterablesError::KeyNotFound`] from [`ArbitraryKeyMap::get`](crate::collection::ArbitraryKeyMap::get)
//! - [`IterablesError::LengthMismatch`] from [`combine`](crate::operations::combine)
//!
//! Neither is recovered from internally. Both are handed back to the caller
//! exactly as produced.

use std::fmt;

/// Message used when a missing key has no textual rendering.
pub const UNRENDERABLE_KEY: &str = "value omitted because it cannot be rendered as text";

/// Which side of a [`combine`](crate::operations::combine) ran out first.
///
/// # Examples
///
/// ```rust
/// use iterables::error::Exhausted;
///
/// assert_eq!(format!("{}", Exhausted::Values), "values");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exhausted {
    /// The key sequence ended while values were still available.
    Keys,
    /// The value sequence ended while keys were still being produced.
    Values,
}

impl fmt::Display for Exhausted {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keys => formatter.write_str("keys"),
            Self::Values => formatter.write_str("values"),
        }
    }
}

/// Represents errors raised by this crate.
///
/// # Examples
///
/// ```rust
/// use iterables::error::{Exhausted, IterablesError};
///
/// let error = IterablesError::KeyNotFound { key: Some("hello".to_string()) };
/// assert_eq!(format!("{error}"), "key not found: hello");
///
/// let error = IterablesError::LengthMismatch { exhausted: Exhausted::Keys };
/// assert_eq!(
///     format!("{error}"),
///     "keys and values must have the same length (keys exhausted first)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IterablesError {
    /// A keyed lookup did not find its key.
    ///
    /// `key` holds the textual rendering of the key, or `None` when the key
    /// type has none.
    #[error("key not found: {}", describe_key(.key))]
    KeyNotFound {
        /// Rendering of the missing key.
        key: Option<String>,
    },
    /// Keys and values passed to `combine` differ in length.
    #[error("keys and values must have the same length ({exhausted} exhausted first)")]
    LengthMismatch {
        /// The side that ran out first.
        exhausted: Exhausted,
    },
}

#[allow(clippy::ref_option)]
fn describe_key(key: &Option<String>) -> &str {
    key.as_deref().unwrap_or(UNRENDERABLE_KEY)
}

impl IterablesError {
    /// Builds a [`IterablesError::KeyNotFound`] for `key`.
    pub fn key_not_found<K: crate::key::RenderKey + ?Sized>(key: &K) -> Self {
        Self::KeyNotFound {
            key: key.render_key(),
        }
    }
}
