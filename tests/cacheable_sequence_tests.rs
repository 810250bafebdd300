//! Integration tests for `CacheableSequence`.
//!
//! The producer's completion side effect must run exactly once, however many
//! times the sequence is traversed afterwards.

use std::cell::Cell;

use iterables::operations::{count, filter_values, map, reverse, slice};
use iterables::sequence::{CacheableSequence, list};
use rstest::rstest;

/// A producer of `1, 2, 3` that bumps `completed` when it runs out.
fn counting_producer(completed: &Cell<usize>) -> impl Iterator<Item = (usize, i32)> + '_ {
    list(vec![1, 2, 3]).chain(std::iter::from_fn(move || {
        completed.set(completed.get() + 1);
        None
    }))
}

#[rstest]
fn test_completion_side_effect_runs_once() {
    let completed = Cell::new(0);
    let cached = CacheableSequence::new(counting_producer(&completed));
    assert_eq!(completed.get(), 0);

    let first: Vec<_> = cached.iter().collect();
    assert_eq!(completed.get(), 1);

    let second: Vec<_> = cached.iter().collect();
    assert_eq!(completed.get(), 1);
    assert_eq!(first, second);
    assert_eq!(first, vec![(0, 1), (1, 2), (2, 3)]);
}

#[rstest]
fn test_count_then_traverse_reuses_cache() {
    let completed = Cell::new(0);
    let cached = CacheableSequence::new(counting_producer(&completed));
    assert_eq!(cached.count(), 3);
    assert_eq!(count(&cached), 3);
    assert_eq!(cached.iter().count(), 3);
    assert_eq!(completed.get(), 1);
}

#[rstest]
fn test_feeds_several_operations() {
    let completed = Cell::new(0);
    let cached = CacheableSequence::new(counting_producer(&completed));

    let doubled: Vec<_> = map(&cached, |value| value * 2).collect();
    let odd: Vec<_> = filter_values(&cached, |value| value % 2 == 1).collect();
    let reversed: Vec<_> = reverse(&cached, false).collect();
    let tail: Vec<_> = slice(&cached, -1, None).collect();

    assert_eq!(doubled, vec![(0, 2), (1, 4), (2, 6)]);
    assert_eq!(odd, vec![(0, 1), (2, 3)]);
    assert_eq!(reversed, vec![(0, 3), (1, 2), (2, 1)]);
    assert_eq!(tail, vec![(0, 3)]);
    assert_eq!(completed.get(), 1);
}

#[rstest]
fn test_partial_traversals_share_the_producer() {
    let pulls = Cell::new(0);
    let cached = CacheableSequence::new(list(vec!['a', 'b', 'c']).inspect(|_| pulls.set(pulls.get() + 1)));

    assert_eq!(cached.iter().next(), Some((0, 'a')));
    assert_eq!(cached.iter().next(), Some((1, 'b')));
    assert_eq!(pulls.get(), 2);

    let rest: Vec<_> = cached.iter().collect();
    assert_eq!(rest, vec![(2, 'c')]);
    let all: Vec<_> = cached.iter().collect();
    assert_eq!(all, vec![(0, 'a'), (1, 'b'), (2, 'c')]);
    assert_eq!(pulls.get(), 3);
}

#[cfg(feature = "indexmap")]
#[rstest]
fn test_hashed_cache_side_effect_runs_once() {
    let completed = Cell::new(0);
    let cached = CacheableSequence::hashed(counting_producer(&completed));
    let first: Vec<_> = cached.iter().collect();
    let second: Vec<_> = cached.iter().collect();
    assert_eq!(first, second);
    assert_eq!(completed.get(), 1);
}
