//! Projection of one field out of a sequence of records.

use std::iter::FusedIterator;

use crate::key::Key;
use crate::value::{Fields, Value};

/// Projects a column out of a sequence of records.
///
/// For every record:
///
/// - the yielded value is the field named `column_key`, or the whole record
///   when `column_key` is `None`; records lacking the field are skipped;
/// - the yielded key is the record's `index_key` field converted with
///   [`Value::to_key`], or the next automatic index when `index_key` is
///   `None`, the field is missing, or it has no key form.
///
/// Automatic indices start at zero and always move past the largest integer
/// key yielded so far. Records are read lazily.
///
/// # Examples
///
/// ```rust
/// use iterables::key::Key;
/// use iterables::operations::column;
/// use iterables::sequence::list;
/// use iterables::value::Value;
///
/// let people = list(vec![
///     Value::map([("id", Value::from(3)), ("name", Value::from("Ann"))]),
///     Value::map([("id", Value::from(5)), ("name", Value::from("Bob"))]),
/// ]);
/// let names: Vec<_> = column(people, Some(Key::from("name")), Some(Key::from("id"))).collect();
/// assert_eq!(
///     names,
///     vec![(Key::Index(3), Value::from("Ann")), (Key::Index(5), Value::from("Bob"))]
/// );
/// ```
pub fn column<I, L, E>(
    sequence: I,
    column_key: Option<Key>,
    index_key: Option<Key>,
) -> Column<I::IntoIter>
where
    I: IntoIterator<Item = (L, E)>,
    E: Fields,
{
    Column {
        inner: sequence.into_iter(),
        column_key,
        index_key,
        highest_index: None,
    }
}

/// Iterator returned by [`column`].
#[derive(Debug, Clone)]
pub struct Column<I> {
    inner: I,
    column_key: Option<Key>,
    index_key: Option<Key>,
    highest_index: Option<i64>,
}

impl<I> Column<I> {
    /// Auto keys continue one past the highest integer key issued so far,
    /// starting at 0.
    fn key_for(&mut self, explicit: Option<Key>) -> Key {
        let index = match explicit {
            Some(Key::Index(index)) => index,
            Some(name) => return name,
            None => self
                .highest_index
                .map_or(0, |highest| highest.saturating_add(1)),
        };
        self.highest_index = Some(self.highest_index.map_or(index, |highest| highest.max(index)));
        Key::Index(index)
    }
}

impl<I, L, E> Iterator for Column<I>
where
    I: Iterator<Item = (L, E)>,
    E: Fields,
{
    type Item = (Key, Value);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (_, record) = self.inner.next()?;
            let value = match &self.column_key {
                Some(column_key) => match record.field(column_key) {
                    Some(value) => value,
                    None => continue,
                },
                None => record.to_value(),
            };
            let explicit = self
                .index_key
                .as_ref()
                .and_then(|index_key| record.field(index_key))
                .and_then(|index| index.to_key());
            let key = self.key_for(explicit);
            return Some((key, value));
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let upper = self.inner.size_hint().1;
        if self.column_key.is_none() {
            (self.inner.size_hint().0, upper)
        } else {
            (0, upper)
        }
    }
}

impl<I, L, E> FusedIterator for Column<I>
where
    I: FusedIterator<Item = (L, E)>,
    E: Fields,
{
}
