//! Dynamic values and value capabilities.
//!
//! Operations are generic over the value type. Some behaviour depends on
//! capabilities of that type:
//!
//! - [`Truthy`]: the default predicate of [`filter`](crate::operations::filter)
//! - [`LooseEq`]: loose comparison in [`contains_with`](crate::operations::contains_with)
//! - [`Fields`]: a key-value view of a record, used by
//!   [`column`](crate::operations::column) and
//!   [`walk_record`](crate::operations::walk_record)
//!
//! [`Value`] is a dynamically typed value implementing all three, for
//! sequences whose values are heterogeneous.

use std::fmt;

use crate::collection::ArbitraryKeyMap;
use crate::key::Key;

/// A dynamically typed value.
///
/// Strict equality (`==`) requires the same variant and the same content:
/// `Value::Int(1) != Value::Float(1.0)` and maps compare in order.
///
/// # Examples
///
/// ```rust
/// use iterables::value::Value;
///
/// assert_eq!(Value::from(1), Value::Int(1));
/// assert_ne!(Value::from(1), Value::from("1"));
/// assert_eq!(Value::from(vec![1, 2]), Value::List(vec![Value::Int(1), Value::Int(2)]));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// The absent value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// Text.
    String(String),
    /// An ordered list, keyed by position.
    List(Vec<Value>),
    /// An ordered map.
    Map(ArbitraryKeyMap<Key, Value>),
}

impl Value {
    /// Creates a [`Value::Map`] from key-value pairs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterables::value::Value;
    ///
    /// let record = Value::map([("name", Value::from("test")), ("age", Value::from(22))]);
    /// assert!(matches!(record, Value::Map(ref map) if map.len() == 2));
    /// ```
    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, Self)>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    /// Returns `true` for [`Value::Null`].
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Converts this value to a key, the way an array index is derived from
    /// a value.
    ///
    /// Integers, booleans and integral parts of finite floats become
    /// [`Key::Index`], text is [normalized](Key::normalized), `Null` is the
    /// empty name. Lists and maps have no key form.
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_key(&self) -> Option<Key> {
        match self {
            Self::Null => Some(Key::Name(String::new())),
            Self::Bool(flag) => Some(Key::Index(i64::from(*flag))),
            Self::Int(number) => Some(Key::Index(*number)),
            Self::Float(number) if number.is_finite() => Some(Key::Index(number.trunc() as i64)),
            Self::Float(_) | Self::List(_) | Self::Map(_) => None,
            Self::String(text) => Some(Key::normalized(text.clone())),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn as_number(&self) -> Option<f64> {
        match self {
            Self::Int(number) => Some(*number as f64),
            Self::Float(number) => Some(*number),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(true) => formatter.write_str("1"),
            Self::Bool(false) => Ok(()),
            Self::Int(number) => write!(formatter, "{number}"),
            Self::Float(number) => write!(formatter, "{number}"),
            Self::String(text) => formatter.write_str(text),
            Self::List(items) => {
                write!(formatter, "[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{item}")?;
                }
                write!(formatter, "]")
            }
            Self::Map(map) => write!(formatter, "{map}"),
        }
    }
}

impl crate::key::RenderKey for Value {
    fn render_key(&self) -> Option<String> {
        match self {
            Self::List(_) | Self::Map(_) => None,
            scalar => Some(scalar.to_string()),
        }
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

macro_rules! impl_value_from_integer {
    ($($integer:ty),*) => {
        $(
            impl From<$integer> for Value {
                #[inline]
                fn from(number: $integer) -> Self {
                    Self::Int(i64::from(number))
                }
            }
        )*
    };
}

impl_value_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Float(number)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::Index(index) => Self::Int(index),
            Key::Name(name) => Self::String(name),
        }
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

// =============================================================================
// Truthy
// =============================================================================

/// Truthiness of a value.
///
/// Falsy values are: `false`, zero (including `-0.0`), the empty string, the
/// string `"0"`, `None`/`Null` and empty collections. Everything else is
/// truthy.
///
/// # Examples
///
/// ```rust
/// use iterables::value::{Truthy, Value};
///
/// assert!(!0_i32.is_truthy());
/// assert!(!"0".is_truthy());
/// assert!("00".is_truthy());
/// assert!(!Value::List(vec![]).is_truthy());
/// ```
pub trait Truthy {
    /// Returns `true` if the value counts as true.
    fn is_truthy(&self) -> bool;
}

macro_rules! impl_truthy_for_integer {
    ($($integer:ty),*) => {
        $(
            impl Truthy for $integer {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for f64 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty() && self != "0"
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_str().is_truthy()
    }
}

impl Truthy for Key {
    fn is_truthy(&self) -> bool {
        match self {
            Self::Index(index) => index.is_truthy(),
            Self::Name(name) => name.is_truthy(),
        }
    }
}

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T> Truthy for [T] {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V> Truthy for ArbitraryKeyMap<K, V> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Int(number) => number.is_truthy(),
            Self::Float(number) => number.is_truthy(),
            Self::String(text) => text.is_truthy(),
            Self::List(items) => !items.is_empty(),
            Self::Map(map) => !map.is_empty(),
        }
    }
}

// =============================================================================
// Loose equality
// =============================================================================

/// How [`contains_with`](crate::operations::contains_with) compares values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Comparison {
    /// Same type and same value (`PartialEq`).
    #[default]
    Strict,
    /// Equality after type juggling ([`LooseEq`]).
    Loose,
}

/// Equality with type juggling.
///
/// For [`Value`] the rules are:
///
/// - `Null` and `Bool` compare as booleans against anything, except that
///   `Null` against text compares with the empty string
/// - numbers compare numerically
/// - a number against numeric text compares numerically, otherwise the
///   number's text is compared
/// - two numeric texts compare numerically, other texts byte-wise
/// - lists and maps are equal when they hold the same keys with loosely
///   equal values, regardless of order
/// - lists and maps are never equal to scalars other than `Null`/`Bool`
///
/// For primitive types loose equality is plain equality, except for text,
/// where numeric strings compare numerically.
///
/// # Examples
///
/// ```rust
/// use iterables::value::{LooseEq, Value};
///
/// assert!(Value::from("1").loose_eq(&Value::from(1)));
/// assert!(Value::from("1e1").loose_eq(&Value::from("10")));
/// assert!(Value::Null.loose_eq(&Value::from(false)));
/// assert!(!Value::from("abc").loose_eq(&Value::from(0)));
/// ```
pub trait LooseEq {
    /// Returns `true` if the values are loosely equal.
    fn loose_eq(&self, other: &Self) -> bool;
}

macro_rules! impl_loose_eq_as_partial_eq {
    ($($type:ty),*) => {
        $(
            impl LooseEq for $type {
                #[inline]
                fn loose_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_loose_eq_as_partial_eq!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char
);

impl LooseEq for str {
    fn loose_eq(&self, other: &Self) -> bool {
        match (numeric_text(self), numeric_text(other)) {
            (Some(left), Some(right)) => left == right,
            _ => self == other,
        }
    }
}

impl LooseEq for String {
    #[inline]
    fn loose_eq(&self, other: &Self) -> bool {
        self.as_str().loose_eq(other.as_str())
    }
}

impl LooseEq for Key {
    fn loose_eq(&self, other: &Self) -> bool {
        Value::from(self.clone()).loose_eq(&Value::from(other.clone()))
    }
}

impl<T: LooseEq + ?Sized> LooseEq for &T {
    #[inline]
    fn loose_eq(&self, other: &Self) -> bool {
        (**self).loose_eq(*other)
    }
}

impl<T: LooseEq> LooseEq for Option<T> {
    fn loose_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(left), Some(right)) => left.loose_eq(right),
            (None, None) => true,
            _ => false,
        }
    }
}

impl LooseEq for Value {
    fn loose_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Null, Self::String(text)) | (Self::String(text), Self::Null) => text.is_empty(),
            (Self::Null | Self::Bool(_), _) | (_, Self::Null | Self::Bool(_)) => {
                self.is_truthy() == other.is_truthy()
            }
            (Self::Int(left), Self::Int(right)) => left == right,
            (Self::Int(_) | Self::Float(_), Self::Int(_) | Self::Float(_)) => {
                self.as_number() == other.as_number()
            }
            (Self::Int(_) | Self::Float(_), Self::String(text))
            | (Self::String(text), Self::Int(_) | Self::Float(_)) => {
                let number = self.as_number().or_else(|| other.as_number());
                match numeric_text(text) {
                    Some(parsed) => number == Some(parsed),
                    None => {
                        let rendered = if matches!(self, Self::String(_)) { other } else { self };
                        rendered.to_string() == *text
                    }
                }
            }
            (Self::String(left), Self::String(right)) => left.loose_eq(right),
            (Self::List(_) | Self::Map(_), Self::List(_) | Self::Map(_)) => {
                let left = collection_entries(self);
                let right = collection_entries(other);
                left.len() == right.len()
                    && left.iter().all(|(key, value)| {
                        right
                            .iter()
                            .find(|(candidate, _)| candidate == key)
                            .is_some_and(|(_, candidate)| value.loose_eq(candidate))
                    })
            }
            _ => false,
        }
    }
}

fn collection_entries(value: &Value) -> Vec<(Key, &Value)> {
    match value {
        Value::List(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| (Key::from(index), item))
            .collect(),
        Value::Map(map) => map.iter().map(|(key, item)| (key.clone(), item)).collect(),
        _ => Vec::new(),
    }
}

/// Parses text that reads as a decimal number, allowing surrounding
/// whitespace.
fn numeric_text(text: &str) -> Option<f64> {
    let trimmed = text.trim_matches(|character: char| " \t\n\r\x0b\x0c".contains(character));
    let body = trimmed
        .strip_prefix(['+', '-'])
        .unwrap_or(trimmed);
    let is_decimal = !body.is_empty()
        && body.starts_with(|character: char| character.is_ascii_digit() || character == '.')
        && body
            .chars()
            .all(|character| character.is_ascii_digit() || matches!(character, '.' | 'e' | 'E' | '+' | '-'));
    if is_decimal { trimmed.parse().ok() } else { None }
}

// =============================================================================
// Fields
// =============================================================================

/// A key-value view of a record.
///
/// Implement this for structured records to pass them to
/// [`column`](crate::operations::column) or
/// [`walk_record`](crate::operations::walk_record).
///
/// # Examples
///
/// ```rust
/// use iterables::key::Key;
/// use iterables::value::{Fields, Value};
///
/// struct Person {
///     name: String,
///     age: Option<i64>,
/// }
///
/// impl Fields for Person {
///     fn fields(&self) -> Vec<(Key, Value)> {
///         let mut fields = vec![(Key::from("name"), Value::from(self.name.clone()))];
///         if let Some(age) = self.age {
///             fields.push((Key::from("age"), Value::from(age)));
///         }
///         fields
///     }
/// }
///
/// let person = Person { name: "test".to_string(), age: None };
/// assert_eq!(person.field(&Key::from("name")), Some(Value::from("test")));
/// assert_eq!(person.field(&Key::from("age")), None);
/// ```
pub trait Fields {
    /// Returns every field in declaration order.
    fn fields(&self) -> Vec<(Key, Value)>;

    /// Returns the field named `key`, if present.
    fn field(&self, key: &Key) -> Option<Value> {
        self.fields()
            .into_iter()
            .find_map(|(name, value)| (name == *key).then_some(value))
    }

    /// Returns the whole record as a value.
    fn to_value(&self) -> Value {
        Value::Map(self.fields().into_iter().collect())
    }
}

impl Fields for ArbitraryKeyMap<Key, Value> {
    fn fields(&self) -> Vec<(Key, Value)> {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    fn field(&self, key: &Key) -> Option<Value> {
        self.find(key).cloned()
    }

    fn to_value(&self) -> Value {
        Value::Map(self.clone())
    }
}

impl Fields for Vec<Value> {
    fn fields(&self) -> Vec<(Key, Value)> {
        self.iter()
            .enumerate()
            .map(|(index, value)| (Key::from(index), value.clone()))
            .collect()
    }

    fn field(&self, key: &Key) -> Option<Value> {
        let index = usize::try_from(key.as_index()?).ok()?;
        self.get(index).cloned()
    }

    fn to_value(&self) -> Value {
        Value::List(self.clone())
    }
}

/// Scalars have no fields. Lists and maps expose their entries.
impl Fields for Value {
    fn fields(&self) -> Vec<(Key, Value)> {
        match self {
            Self::List(items) => items.fields(),
            Self::Map(map) => map.fields(),
            _ => Vec::new(),
        }
    }

    fn field(&self, key: &Key) -> Option<Value> {
        match self {
            Self::List(items) => items.field(key),
            Self::Map(map) => map.field(key),
            _ => None,
        }
    }

    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl<T: Fields + ?Sized> Fields for &T {
    fn fields(&self) -> Vec<(Key, Value)> {
        (**self).fields()
    }

    fn field(&self, key: &Key) -> Option<Value> {
        (**self).field(key)
    }

    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}
