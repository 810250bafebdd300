//! Keys of key-value sequences.
//!
//! Most operations are generic over the key type and only need
//! [`PartialEq`]. A few need more knowledge about keys, expressed as
//! capability traits:
//!
//! - [`RenderKey`]: textual rendering for error messages
//! - [`ListPosition`]: whether a key is a zero-based list index
//! - [`ChangeCase`]: case conversion of textual keys
//!
//! [`Key`] is the integer-or-text key used where keys are manufactured
//! from data, for example by [`column`](crate::operations::column).

use std::borrow::Cow;
use std::fmt;

/// An integer-or-text key.
///
/// # Examples
///
/// ```rust
/// use iterables::key::Key;
///
/// assert_eq!(Key::from(3), Key::Index(3));
/// assert_eq!(Key::from("name"), Key::Name("name".to_string()));
/// assert_eq!(Key::normalized("42"), Key::Index(42));
/// assert_eq!(Key::normalized("042"), Key::Name("042".to_string()));
/// ```
///
/// With the `serde` feature a key serializes as a bare integer or string.
/// Deserialization accepts both and passes strings through
/// [`Key::normalized`], so integer keys written as JSON object keys come
/// back as [`Key::Index`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Key {
    /// An integer key.
    Index(i64),
    /// A textual key.
    Name(String),
}

impl Key {
    /// Creates a key from text, turning canonical decimal integers into
    /// [`Key::Index`].
    ///
    /// Text is canonical when it has no leading `+`, no leading zeros
    /// (except `"0"` itself), no `"-0"`, and fits in an `i64`.
    pub fn normalized(text: impl Into<String>) -> Self {
        let text = text.into();
        canonical_integer(&text).map_or(Self::Name(text), Self::Index)
    }

    /// Returns the integer if this is an index key.
    #[inline]
    pub const fn as_index(&self) -> Option<i64> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Name(_) => None,
        }
    }

    /// Returns the text if this is a named key.
    #[inline]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Index(_) => None,
            Self::Name(name) => Some(name),
        }
    }
}

fn canonical_integer(text: &str) -> Option<i64> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    let is_canonical = !digits.is_empty()
        && digits.bytes().all(|byte| byte.is_ascii_digit())
        && (digits == "0" || !digits.starts_with('0'))
        && text != "-0";
    if is_canonical { text.parse().ok() } else { None }
}

impl fmt::Display for Key {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(formatter, "{index}"),
            Self::Name(name) => formatter.write_str(name),
        }
    }
}

macro_rules! impl_key_from_integer {
    ($($integer:ty),*) => {
        $(
            impl From<$integer> for Key {
                #[inline]
                fn from(index: $integer) -> Self {
                    Self::Index(i64::from(index))
                }
            }
        )*
    };
}

impl_key_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<usize> for Key {
    #[allow(clippy::cast_possible_wrap)]
    #[inline]
    fn from(index: usize) -> Self {
        Self::Index(index as i64)
    }
}

impl From<&str> for Key {
    #[inline]
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for Key {
    #[inline]
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

#[cfg(feature = "serde")]
struct KeyVisitor;

#[cfg(feature = "serde")]
impl serde::de::Visitor<'_> for KeyVisitor {
    type Value = Key;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer or a string")
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Key::Index(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        i64::try_from(value).map(Key::Index).map_err(|_| {
            E::invalid_value(serde::de::Unexpected::Unsigned(value), &"an integer key within i64")
        })
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Key::normalized(value))
    }

    fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Key::normalized(value))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Key {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(KeyVisitor)
    }
}

// =============================================================================
// RenderKey
// =============================================================================

/// Textual rendering of a key, used in [`KeyNotFound`](crate::error::IterablesError::KeyNotFound).
///
/// The default body reports that the key cannot be rendered, so an opaque
/// key type only needs an empty `impl`.
///
/// # Examples
///
/// ```rust
/// use iterables::key::RenderKey;
///
/// struct Handle;
/// impl RenderKey for Handle {}
///
/// assert_eq!(Handle.render_key(), None);
/// assert_eq!(12_i32.render_key(), Some("12".to_string()));
/// assert_eq!("abc".render_key(), Some("abc".to_string()));
/// ```
pub trait RenderKey {
    /// Returns the key as text, or `None` if it has no textual form.
    fn render_key(&self) -> Option<String> {
        None
    }
}

macro_rules! impl_render_key_with_display {
    ($($type:ty),*) => {
        $(
            impl RenderKey for $type {
                #[inline]
                fn render_key(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

impl_render_key_with_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String, Key
);

impl RenderKey for Cow<'_, str> {
    fn render_key(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl<T: RenderKey + ?Sized> RenderKey for &T {
    #[inline]
    fn render_key(&self) -> Option<String> {
        (**self).render_key()
    }
}

impl<T: RenderKey + ?Sized> RenderKey for Box<T> {
    #[inline]
    fn render_key(&self) -> Option<String> {
        (**self).render_key()
    }
}

// =============================================================================
// ListPosition
// =============================================================================

/// Interprets a key as a position in a zero-based list.
///
/// A sequence is *list-like* when the key at position `i` reports
/// `Some(i)` for every `i`.
pub trait ListPosition {
    /// Returns the list position this key denotes, if any.
    fn list_position(&self) -> Option<usize>;
}

macro_rules! impl_list_position_for_integer {
    ($($integer:ty),*) => {
        $(
            impl ListPosition for $integer {
                #[inline]
                fn list_position(&self) -> Option<usize> {
                    usize::try_from(*self).ok()
                }
            }
        )*
    };
}

impl_list_position_for_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl ListPosition for Key {
    #[inline]
    fn list_position(&self) -> Option<usize> {
        self.as_index().and_then(|index| usize::try_from(index).ok())
    }
}

impl ListPosition for String {
    #[inline]
    fn list_position(&self) -> Option<usize> {
        None
    }
}

impl ListPosition for str {
    #[inline]
    fn list_position(&self) -> Option<usize> {
        None
    }
}

impl<T: ListPosition + ?Sized> ListPosition for &T {
    #[inline]
    fn list_position(&self) -> Option<usize> {
        (**self).list_position()
    }
}

// =============================================================================
// ChangeCase
// =============================================================================

/// Target case for [`change_key_case`](crate::operations::change_key_case).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Case {
    /// Lowercase, the default.
    #[default]
    Lower,
    /// Uppercase.
    Upper,
}

impl Case {
    fn apply(self, text: &str) -> String {
        match self {
            Self::Lower => text.to_ascii_lowercase(),
            Self::Upper => text.to_ascii_uppercase(),
        }
    }
}

/// Case conversion of keys. Only textual keys change.
///
/// # Examples
///
/// ```rust
/// use iterables::key::{Case, ChangeCase, Key};
///
/// assert_eq!(String::from("Name").change_case(Case::Upper), "NAME");
/// assert_eq!(Key::Index(1).change_case(Case::Upper), Key::Index(1));
/// assert_eq!(7_i32.change_case(Case::Lower), 7);
/// ```
pub trait ChangeCase: Sized {
    /// Returns the key converted to `case`.
    #[must_use]
    fn change_case(self, case: Case) -> Self;
}

impl ChangeCase for String {
    fn change_case(self, case: Case) -> Self {
        case.apply(&self)
    }
}

impl ChangeCase for Cow<'_, str> {
    fn change_case(self, case: Case) -> Self {
        Cow::Owned(case.apply(&self))
    }
}

impl ChangeCase for Key {
    fn change_case(self, case: Case) -> Self {
        match self {
            Self::Name(name) => Self::Name(case.apply(&name)),
            index @ Self::Index(_) => index,
        }
    }
}

macro_rules! impl_change_case_identity {
    ($($type:ty),*) => {
        $(
            impl ChangeCase for $type {
                #[inline]
                fn change_case(self, _case: Case) -> Self {
                    self
                }
            }
        )*
    };
}

impl_change_case_identity!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, bool);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0", Key::Index(0))]
    #[case("17", Key::Index(17))]
    #[case("-4", Key::Index(-4))]
    #[case("-0", Key::Name("-0".to_string()))]
    #[case("007", Key::Name("007".to_string()))]
    #[case("+5", Key::Name("+5".to_string()))]
    #[case("5.0", Key::Name("5.0".to_string()))]
    #[case("", Key::Name(String::new()))]
    #[case("99999999999999999999", Key::Name("99999999999999999999".to_string()))]
    fn test_normalized(#[case] text: &str, #[case] expected: Key) {
        assert_eq!(Key::normalized(text), expected);
    }

    #[rstest]
    fn test_display() {
        assert_eq!(Key::Index(-2).to_string(), "-2");
        assert_eq!(Key::from("abc").to_string(), "abc");
    }

    #[rstest]
    fn test_list_position() {
        assert_eq!(3_usize.list_position(), Some(3));
        assert_eq!((-1_i64).list_position(), None);
        assert_eq!(Key::Index(2).list_position(), Some(2));
        assert_eq!(Key::from("2").list_position(), None);
        assert_eq!("a".list_position(), None);
    }

    #[rstest]
    fn test_change_case_key_name_only() {
        assert_eq!(
            Key::from("MiXeD").change_case(Case::Lower),
            Key::from("mixed")
        );
        assert_eq!(Key::Index(5).change_case(Case::Upper), Key::Index(5));
    }

    #[rstest]
    fn test_change_case_is_ascii_only() {
        assert_eq!(String::from("Straße").change_case(Case::Upper), "STRAßE");
    }

    #[rstest]
    fn test_render_key_through_references() {
        let key = Key::Index(9);
        assert_eq!((&key).render_key(), Some("9".to_string()));
        assert_eq!(Box::new("x").render_key(), Some("x".to_string()));
    }
}
