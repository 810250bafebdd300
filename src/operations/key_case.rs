//! Case conversion of keys.

use std::iter::FusedIterator;

use crate::key::{Case, ChangeCase};

/// Converts every textual key of `sequence` to `case`, keeping values.
///
/// Integer keys pass through unchanged. Keys that collide after conversion
/// are all yielded.
///
/// # Examples
///
/// ```rust
/// use iterables::key::{Case, Key};
/// use iterables::operations::change_key_case;
///
/// let pairs = vec![(Key::from("Name"), 1), (Key::Index(7), 2)];
/// let lowered: Vec<_> = change_key_case(pairs, Case::Lower).collect();
/// assert_eq!(lowered, vec![(Key::from("name"), 1), (Key::Index(7), 2)]);
/// ```
#[inline]
pub fn change_key_case<I, K, V>(sequence: I, case: Case) -> ChangeKeyCase<I::IntoIter>
where
    I: IntoIterator<Item = (K, V)>,
    K: ChangeCase,
{
    ChangeKeyCase {
        inner: sequence.into_iter(),
        case,
    }
}

/// Iterator returned by [`change_key_case`].
#[derive(Debug, Clone)]
pub struct ChangeKeyCase<I> {
    inner: I,
    case: Case,
}

impl<I, K, V> Iterator for ChangeKeyCase<I>
where
    I: Iterator<Item = (K, V)>,
    K: ChangeCase,
{
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.inner.next()?;
        Some((key.change_case(self.case), value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I, K, V> ExactSizeIterator for ChangeKeyCase<I>
where
    I: ExactSizeIterator<Item = (K, V)>,
    K: ChangeCase,
{
}

impl<I, K, V> FusedIterator for ChangeKeyCase<I>
where
    I: FusedIterator<Item = (K, V)>,
    K: ChangeCase,
{
}
