//! Pairing the values of one sequence with the values of another.

use std::iter::FusedIterator;

use crate::error::{Exhausted, IterablesError};

/// Builds pairs whose keys are the values of `keys` and whose values are
/// the values of `values`.
///
/// Both sequences are advanced together. When one runs out before the
/// other, the iterator yields a single [`IterablesError::LengthMismatch`]
/// naming the side that ran out first and then ends. Pairs yielded before
/// the mismatch remain valid.
///
/// # Examples
///
/// ```rust
/// use iterables::error::{Exhausted, IterablesError};
/// use iterables::operations::combine;
/// use iterables::sequence::list;
///
/// let pairs: Result<Vec<_>, _> = combine(list(vec!["a", "b"]), list(vec![1, 2])).collect();
/// assert_eq!(pairs, Ok(vec![("a", 1), ("b", 2)]));
///
/// let short: Result<Vec<_>, _> = combine(list(vec!["a", "b"]), list(vec![1])).collect();
/// assert_eq!(
///     short,
///     Err(IterablesError::LengthMismatch { exhausted: Exhausted::Values })
/// );
/// ```
pub fn combine<KS, VS, A, K, B, V>(keys: KS, values: VS) -> Combine<KS::IntoIter, VS::IntoIter>
where
    KS: IntoIterator<Item = (A, K)>,
    VS: IntoIterator<Item = (B, V)>,
{
    Combine {
        keys: keys.into_iter(),
        values: values.into_iter(),
        finished: false,
    }
}

/// Iterator returned by [`combine`].
#[derive(Debug, Clone)]
pub struct Combine<KI, VI> {
    keys: KI,
    values: VI,
    finished: bool,
}

impl<KI, VI> Combine<KI, VI> {
    fn mismatch<T>(&mut self, exhausted: Exhausted) -> Option<Result<T, IterablesError>> {
        self.finished = true;
        tracing::debug!(%exhausted, "combine length mismatch");
        Some(Err(IterablesError::LengthMismatch { exhausted }))
    }
}

impl<KI, VI, A, K, B, V> Iterator for Combine<KI, VI>
where
    KI: Iterator<Item = (A, K)>,
    VI: Iterator<Item = (B, V)>,
{
    type Item = Result<(K, V), IterablesError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match (self.keys.next(), self.values.next()) {
            (Some((_, key)), Some((_, value))) => Some(Ok((key, value))),
            (Some(_), None) => self.mismatch(Exhausted::Values),
            (None, Some(_)) => self.mismatch(Exhausted::Keys),
            (None, None) => {
                self.finished = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        let (keys_lower, keys_upper) = self.keys.size_hint();
        let (values_lower, values_upper) = self.values.size_hint();
        let upper = match (keys_upper, values_upper) {
            (Some(keys), Some(values)) => Some(keys.max(values)),
            _ => None,
        };
        (keys_lower.min(values_lower), upper)
    }
}

impl<KI, VI, A, K, B, V> FusedIterator for Combine<KI, VI>
where
    KI: Iterator<Item = (A, K)>,
    VI: Iterator<Item = (B, V)>,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::list;
    use rstest::rstest;

    #[rstest]
    fn test_combine_uses_values_as_keys() {
        let pairs: Vec<_> = combine(
            vec![("ignored", "key1"), ("ignored", "key2")],
            list(vec![5, 10]),
        )
        .collect();
        assert_eq!(pairs, vec![Ok(("key1", 5)), Ok(("key2", 10))]);
    }

    #[rstest]
    #[case(vec!["a"], vec![1, 2], Exhausted::Keys)]
    #[case(vec!["a", "b"], vec![1], Exhausted::Values)]
    fn test_mismatch_is_reported_once_after_valid_pairs(
        #[case] keys: Vec<&str>,
        #[case] values: Vec<i32>,
        #[case] exhausted: Exhausted,
    ) {
        let mut combined = combine(list(keys), list(values));
        assert_eq!(combined.next(), Some(Ok(("a", 1))));
        assert_eq!(
            combined.next(),
            Some(Err(IterablesError::LengthMismatch { exhausted }))
        );
        assert_eq!(combined.next(), None);
        assert_eq!(combined.next(), None);
    }

    #[rstest]
    fn test_empty_inputs_combine_to_nothing() {
        let empty: Vec<(usize, i32)> = Vec::new();
        assert_eq!(combine(empty.clone(), empty).count(), 0);
    }

    #[rstest]
    fn test_mismatch_message() {
        let error = combine(list(vec![1]), list(Vec::<i32>::new()))
            .find_map(Result::err)
            .unwrap();
        assert_eq!(
            error.to_string(),
            "keys and values must have the same length (values exhausted first)"
        );
    }
}
