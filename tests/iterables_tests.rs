//! Integration tests for the sequence operations.
//!
//! Cases mirror array-function behaviour: each operation is checked against
//! the result the equivalent eager array operation produces.

use iterables::prelude::*;
use rstest::rstest;

fn values<K, V>(sequence: impl IntoIterator<Item = (K, V)>) -> Vec<V> {
    sequence.into_iter().map(|(_, value)| value).collect()
}

// =============================================================================
// map
// =============================================================================

#[rstest]
fn test_map_without_transform_passes_through() {
    let pairs: Vec<_> = map(list(vec![1]), std::convert::identity).collect();
    assert_eq!(pairs, vec![(0, 1)]);
}

#[rstest]
fn test_map_without_transform_zips_into_lists() {
    let zipped: Vec<_> = zip_values(list(vec![1]), vec![list(vec![2]), list(vec![3])])
        .map(|(key, arguments)| (key, arguments.into_iter().flatten().collect::<Vec<_>>()))
        .collect();
    assert_eq!(zipped, vec![(0, vec![1, 2, 3])]);
}

#[rstest]
#[case(vec![1], vec![2])]
#[case(vec![1, 2, 3], vec![2, 4, 6])]
fn test_map_doubles(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
    assert_eq!(values(map(list(input), |number| number * 2)), expected);
}

#[rstest]
fn test_map_sums_three_sequences() {
    let sums = map_zip(
        list(vec![1, 2, 3]),
        vec![list(vec![4, 5, 6]), list(vec![7, 8, 9])],
        |arguments| arguments.into_iter().flatten().sum::<i32>(),
    );
    assert_eq!(values(sums), vec![12, 15, 18]);
}

#[rstest]
fn test_map_zips_different_value_types() {
    let pairs: Vec<_> = zip_with(
        list(vec![1, 2, 3]),
        list(vec!["one", "two", "three"]),
        |number, name| (number, name),
    )
    .collect();
    assert_eq!(
        pairs,
        vec![
            (0, (1, Some("one"))),
            (1, (2, Some("two"))),
            (2, (3, Some("three"))),
        ]
    );
}

#[rstest]
fn test_map_keeps_named_keys() {
    let squared: Vec<_> = map([("key1", 5), ("key2", 10)], |value| value * value).collect();
    assert_eq!(squared, vec![("key1", 25), ("key2", 100)]);
}

#[rstest]
#[case(vec![("key3", 5), ("key4", 10)])]
#[case(vec![("key1", 5), ("key2", 10)])]
fn test_map_with_extra_sequence_renumbers(#[case] other: Vec<(&str, i32)>) {
    let squared: Vec<_> = map_zip([("key1", 5), ("key2", 10)], vec![other], |arguments| {
        arguments[0].map_or(0, |value| value * value)
    })
    .collect();
    assert_eq!(squared, vec![(0, 25), (1, 100)]);
}

#[rstest]
fn test_map_truncates_to_primary_length() {
    let zipped: Vec<_> = zip_values(
        list(vec![1, 2]),
        vec![list(vec![10, 20, 30]), list(vec![100])],
    )
    .map(|(key, arguments)| (key, arguments.into_vec()))
    .collect();
    assert_eq!(
        zipped,
        vec![
            (0, vec![Some(1), Some(10), Some(100)]),
            (1, vec![Some(2), Some(20), None]),
        ]
    );
}

// =============================================================================
// filter
// =============================================================================

#[rstest]
fn test_filter_default_drops_zero() {
    assert_eq!(filter(list(vec![0, 1, 2])).collect::<Vec<_>>(), vec![(1, 1), (2, 2)]);
}

#[rstest]
fn test_filter_default_drops_every_falsy_value() {
    let falsy = vec![
        Value::from(0),
        Value::from(""),
        Value::from(false),
        Value::Float(0.0),
        Value::Float(-0.0),
        Value::from("0"),
        Value::Null,
        Value::List(Vec::new()),
    ];
    assert_eq!(filter(list(falsy)).count(), 0);
}

#[rstest]
#[case(FilterMode::Key)]
#[case(FilterMode::Both)]
fn test_filter_mode_with_default_predicate(#[case] mode: FilterMode) {
    let kept: Vec<_> = filter_by_mode(list(vec![0, 1, 2]), mode).collect();
    assert_eq!(kept, vec![(1, 1), (2, 2)]);
}

#[rstest]
fn test_filter_values_with_predicate() {
    let kept: Vec<_> = filter_values(list(vec![0, 1, 2]), |number| *number != 1).collect();
    assert_eq!(kept, vec![(0, 0), (2, 2)]);
}

#[rstest]
fn test_filter_keys_with_predicate() {
    let kept: Vec<_> = filter_keys(list(vec![3, 4, 5]), |key| *key != 1).collect();
    assert_eq!(kept, vec![(0, 3), (2, 5)]);
}

#[rstest]
fn test_filter_pairs_with_predicate() {
    let kept: Vec<_> = filter_pairs(list(vec![3_usize, 0, 2]), |value, key| value >= key).collect();
    assert_eq!(kept, vec![(0, 3), (2, 2)]);
}

// =============================================================================
// contains, first_value, count
// =============================================================================

#[rstest]
#[case(Value::from(1), Comparison::Strict, true)]
#[case(Value::from("1"), Comparison::Strict, false)]
#[case(Value::from("1"), Comparison::Loose, true)]
fn test_contains(#[case] needle: Value, #[case] comparison: Comparison, #[case] expected: bool) {
    let haystack = list(vec![Value::from(1), Value::from(2)]);
    assert_eq!(contains_with(&needle, haystack, comparison), expected);
}

#[rstest]
fn test_first_value() {
    assert_eq!(first_value(list(vec![1, 2, 3])), Some(1));
    assert_eq!(first_value(list(Vec::<i32>::new())), None);
}

#[rstest]
fn test_count_of_list_and_adapters() {
    assert_eq!(count(list(vec![1, 2, 3])), 3);

    let rewindable = RewindableSequence::new(|| list(vec![1, 2]));
    assert_eq!(count(&rewindable), 2);

    let cached = CacheableSequence::new(list(vec![1]));
    assert_eq!(count(&cached), 1);
}

/// Iterates nothing but claims six entries.
struct Claimed;

impl KnownLength for Claimed {
    fn known_length(&self) -> usize {
        6
    }
}

#[rstest]
fn test_length_prefers_reported_length() {
    assert_eq!(length(&Claimed), 6);
}

#[rstest]
#[case(vec![])]
#[case(vec![1])]
#[case(vec![1, 2, 3, 4])]
fn test_count_equals_materialized_length(#[case] input: Vec<i32>) {
    let expected = input.len();
    assert_eq!(count(filter_values(list(input.clone()), |_| true)), expected);
    assert_eq!(count(list(input)), expected);
}

// =============================================================================
// diff
// =============================================================================

#[rstest]
#[case(vec![1, 2, 3], vec![], vec![(0, 1), (1, 2), (2, 3)])]
#[case(vec![], vec![], vec![])]
#[case(vec![1, 2, 3], vec![vec![2]], vec![(0, 1), (2, 3)])]
#[case(vec![1, 2, 3], vec![vec![2], vec![3], vec![1, 2]], vec![])]
#[case(vec![], vec![vec![1, 2]], vec![])]
fn test_diff(
    #[case] input: Vec<i32>,
    #[case] others: Vec<Vec<i32>>,
    #[case] expected: Vec<(usize, i32)>,
) {
    let kept: Vec<_> = diff(list(input), others.into_iter().map(list)).collect();
    assert_eq!(kept, expected);
}

// =============================================================================
// find, find_key, any, all
// =============================================================================

#[rstest]
#[case(0, None, None)]
#[case(1, Some(1), Some(0))]
#[case(2, Some(2), Some(1))]
#[case(3, Some(3), Some(2))]
#[case(4, None, None)]
fn test_find_by_value(
    #[case] wanted: i32,
    #[case] value: Option<i32>,
    #[case] key: Option<usize>,
) {
    let input = vec![1, 2, 3];
    assert_eq!(find(list(input.clone()), |number, _| *number == wanted), value);
    assert_eq!(find_key(list(input.clone()), |number, _| *number == wanted), key);
    assert_eq!(any(list(input.clone()), |number, _| *number == wanted), value.is_some());
    assert!(!all(list(input), |number, _| *number == wanted));
}

#[rstest]
#[case(0, Some(1))]
#[case(3, None)]
fn test_find_by_key(#[case] wanted: usize, #[case] expected: Option<i32>) {
    assert_eq!(find(list(vec![1, 2, 3]), |_, key| *key == wanted), expected);
}

#[rstest]
fn test_find_in_adapters() {
    let rewindable = RewindableSequence::new(|| list(vec![1, 2, 3]));
    assert_eq!(find(&rewindable, |number, _| *number == 2), Some(2));
    assert_eq!(find(&rewindable, |number, _| *number == 2), Some(2));

    let cached = CacheableSequence::new(list(vec![1, 2, 3]));
    assert_eq!(find(&cached, |number, _| *number == 2), Some(2));
    assert_eq!(find_key(&cached, |number, _| *number == 3), Some(2));
}

#[rstest]
fn test_all_true_when_every_value_matches() {
    assert!(all(list(vec![1, 2, 3]), |number, _| *number < 10));
    assert!(!all(list(vec![4, 5, 6]), |number, _| *number < 5));
}

// =============================================================================
// combine
// =============================================================================

#[rstest]
fn test_combine_equal_lengths() {
    let pairs: Result<Vec<_>, _> = combine(list(vec![1, 2, 3]), list(vec![4, 5, 6])).collect();
    assert_eq!(pairs, Ok(vec![(1, 4), (2, 5), (3, 6)]));
}

#[rstest]
fn test_combine_mixed_values() {
    let pairs: Result<Vec<_>, _> = combine(
        list(vec![Value::from("1"), Value::from("2")]),
        list(vec![Value::from(4), Value::from("5")]),
    )
    .collect();
    assert_eq!(
        pairs,
        Ok(vec![
            (Value::from("1"), Value::from(4)),
            (Value::from("2"), Value::from("5")),
        ])
    );
}

#[rstest]
fn test_combine_ignores_input_keys() {
    let pairs: Result<Vec<_>, _> = combine([("a", "b")], [("b", "c")]).collect();
    assert_eq!(pairs, Ok(vec![("b", "c")]));
}

#[rstest]
#[case(vec![1, 2, 3], vec![1, 2], Exhausted::Values)]
#[case(vec![1, 2], vec![1, 2, 3], Exhausted::Keys)]
fn test_combine_different_lengths(
    #[case] keys: Vec<i32>,
    #[case] combined_values: Vec<i32>,
    #[case] exhausted: Exhausted,
) {
    let result: Result<Vec<_>, _> = combine(list(keys), list(combined_values)).collect();
    assert_eq!(result, Err(IterablesError::LengthMismatch { exhausted }));
}

// =============================================================================
// zip
// =============================================================================

#[rstest]
fn test_zip_concatenates_with_original_keys() {
    let first = vec![1, 2, 3];
    let second = vec![4, 5, 6];
    let joined: Vec<_> = zip(vec![list(first.clone()), list(second.clone())]).collect();

    for (position, (key, value)) in joined.iter().enumerate() {
        assert_eq!(*key, position % 3);
        let source = if position < 3 { &first } else { &second };
        assert_eq!(*value, source[*key]);
    }
    assert_eq!(joined.len(), 6);
}

// =============================================================================
// column
// =============================================================================

fn people() -> Vec<Value> {
    vec![
        Value::map([
            ("name", Value::from("test")),
            ("age", Value::from(22)),
            ("eyeColor", Value::from("brown")),
        ]),
        Value::map([("age", Value::from(23)), ("eyeColor", Value::from("gray"))]),
        Value::map([("name", Value::from("test")), ("eyeColor", Value::from("blue"))]),
    ]
}

fn key(text: &str) -> Option<Key> {
    Some(Key::from(text))
}

#[rstest]
#[case(key("name"), None, vec![(Key::Index(0), Value::from("test")), (Key::Index(1), Value::from("test"))])]
#[case(key("age"), None, vec![(Key::Index(0), Value::from(22)), (Key::Index(1), Value::from(23))])]
#[case(
    key("age"),
    key("name"),
    vec![(Key::from("test"), Value::from(22)), (Key::Index(0), Value::from(23))]
)]
#[case(
    key("name"),
    key("age"),
    vec![(Key::Index(22), Value::from("test")), (Key::Index(23), Value::from("test"))]
)]
#[case(
    key("eyeColor"),
    key("eyeColor"),
    vec![
        (Key::from("brown"), Value::from("brown")),
        (Key::from("gray"), Value::from("gray")),
        (Key::from("blue"), Value::from("blue")),
    ]
)]
#[case(Some(Key::Index(0)), Some(Key::Index(0)), vec![])]
fn test_column_of_records(
    #[case] column_key: Option<Key>,
    #[case] index_key: Option<Key>,
    #[case] expected: Vec<(Key, Value)>,
) {
    let projected: Vec<_> = column(list(people()), column_key, index_key).collect();
    assert_eq!(projected, expected);
}

#[rstest]
fn test_column_whole_records_indexed_by_age() {
    let projected: Vec<_> = column(list(people()), None, key("age")).collect();
    let keys: Vec<_> = projected.iter().map(|(key, _)| key.clone()).collect();
    assert_eq!(keys, vec![Key::Index(22), Key::Index(23), Key::Index(24)]);
    assert_eq!(values(projected), people());
}

fn matrix() -> Vec<Vec<Value>> {
    (0..3)
        .map(|row| (1..=3).map(|offset| Value::from(row * 3 + offset)).collect())
        .collect()
}

#[rstest]
#[case(0, vec![1, 4, 7])]
#[case(1, vec![2, 5, 8])]
#[case(2, vec![3, 6, 9])]
fn test_column_of_rows(#[case] position: i64, #[case] expected: Vec<i32>) {
    let projected = column(list(matrix()), Some(Key::Index(position)), None);
    let expected: Vec<_> = expected.into_iter().map(Value::from).collect();
    assert_eq!(values(projected), expected);
}

#[rstest]
#[case(0, 0)]
#[case(0, 2)]
#[case(1, 0)]
#[case(2, 1)]
fn test_column_of_rows_indexed(#[case] position: i64, #[case] index: i64) {
    let projected: Vec<_> =
        column(list(matrix()), Some(Key::Index(position)), Some(Key::Index(index))).collect();
    let expected: Vec<_> = matrix()
        .into_iter()
        .map(|row| {
            let at = |offset: i64| row[usize::try_from(offset).unwrap()].clone();
            (at(index).to_key().unwrap(), at(position))
        })
        .collect();
    assert_eq!(projected, expected);
}

/// A structured record exposing only the fields it has.
struct Person {
    name: Option<&'static str>,
    age: i64,
    eye_color: &'static str,
}

impl Fields for Person {
    fn fields(&self) -> Vec<(Key, Value)> {
        let mut fields = Vec::new();
        if let Some(name) = self.name {
            fields.push((Key::from("name"), Value::from(name)));
        }
        fields.push((Key::from("age"), Value::from(self.age)));
        fields.push((Key::from("eyeColor"), Value::from(self.eye_color)));
        fields
    }
}

#[rstest]
#[case("name", vec![Value::from("test")])]
#[case("age", vec![Value::from(22), Value::from(22)])]
#[case("eyeColor", vec![Value::from("brown"), Value::from("gray")])]
fn test_column_of_structured_records(#[case] field: &str, #[case] expected: Vec<Value>) {
    let records = vec![
        Person {
            name: Some("test"),
            age: 22,
            eye_color: "brown",
        },
        Person {
            name: None,
            age: 22,
            eye_color: "gray",
        },
    ];
    assert_eq!(values(column(list(records), key(field), None)), expected);
}

// =============================================================================
// reverse
// =============================================================================

#[rstest]
#[case(false, vec![(0, 3), (1, 2), (2, 1)])]
#[case(true, vec![(2, 3), (1, 2), (0, 1)])]
fn test_reverse_list(#[case] preserve_keys: bool, #[case] expected: Vec<(usize, i32)>) {
    let reversed: Vec<_> = reverse(list(vec![1, 2, 3]), preserve_keys).collect();
    assert_eq!(reversed, expected);
}

#[rstest]
#[case(false)]
#[case(true)]
fn test_reverse_named_keys_are_kept(#[case] preserve_keys: bool) {
    let reversed: Vec<_> =
        reverse([("a", "b"), ("c", "d"), ("e", "f")], preserve_keys).collect();
    assert_eq!(reversed, vec![("e", "f"), ("c", "d"), ("a", "b")]);
}

// =============================================================================
// slice, walk, change_key_case
// =============================================================================

#[rstest]
fn test_slice_window() {
    let window: Vec<_> = slice(list(vec![1, 2, 3, 4, 5]), 1, Some(2)).collect();
    assert_eq!(window, vec![(0, 2), (1, 3)]);
}

#[rstest]
fn test_slice_preserving_keys_with_negative_offset() {
    let window: Vec<_> =
        slice_preserving_keys([("a", 1), ("b", 2), ("c", 3)], -2, Some(1)).collect();
    assert_eq!(window, vec![("b", 2)]);
}

#[rstest]
fn test_walk_passes_extra_argument() {
    let mut total = 0;
    let completed = walk(
        list(vec![1, 2, 3]),
        |value, _, factor: Option<&i32>| total += value * factor.copied().unwrap_or(1),
        Some(&10),
    );
    assert!(completed);
    assert_eq!(total, 60);
}

#[rstest]
fn test_walk_record_of_structured_record() {
    let person = Person {
        name: Some("test"),
        age: 22,
        eye_color: "brown",
    };
    let mut seen = Vec::new();
    walk_record(&person, |value, key, _: Option<&()>| seen.push((key, value)), None);
    assert_eq!(seen, person.fields());
}

#[rstest]
fn test_change_key_case_of_mixed_keys() {
    let pairs = vec![
        (Key::from("Name"), 1),
        (Key::Index(0), 2),
        (Key::from("eyeColor"), 3),
    ];
    let upper: Vec<_> = change_key_case(pairs, Case::Upper).collect();
    assert_eq!(
        upper,
        vec![
            (Key::from("NAME"), 1),
            (Key::Index(0), 2),
            (Key::from("EYECOLOR"), 3),
        ]
    );
}

// =============================================================================
// Composition
// =============================================================================

#[rstest]
fn test_pipeline_is_lazy_over_infinite_source() {
    let evens = filter_values(list(0..), |number: &i64| number % 2 == 0);
    let squared = map(evens, |number| number * number);
    let window: Vec<_> = slice(squared, 1, Some(3)).collect();
    assert_eq!(window, vec![(0, 4), (1, 16), (2, 36)]);
}
