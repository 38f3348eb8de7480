//! Unit tests for the flat sequence operations.

#![cfg(feature = "sequence")]

use rstest::rstest;
use tilly::sequence::{
    chunk, compact, difference, drop_left, drop_left_while, drop_right, drop_right_while, first,
    get, intersects, join, last, remove, slice, uniques,
};

#[rstest]
fn test_chunk_splits_with_shorter_tail() {
    assert_eq!(
        chunk(&[1, 2, 3, 4, 5], 2),
        vec![vec![1, 2], vec![3, 4], vec![5]]
    );
}

#[rstest]
fn test_chunk_size_zero_yields_nothing() {
    assert_eq!(chunk(&[1, 2, 3], 0), Vec::<Vec<i32>>::new());
}

#[rstest]
fn test_chunk_of_empty_sequence() {
    assert_eq!(chunk::<i32>(&[], 3), Vec::<Vec<i32>>::new());
}

#[rstest]
fn test_compact_removes_zeroes() {
    assert_eq!(compact(&[0, 1, 0, 2, 0, 3]), vec![1, 2, 3]);
}

#[rstest]
fn test_compact_removes_empty_strings() {
    assert_eq!(compact(&["", "one", "", "two"]), vec!["one", "two"]);
}

#[rstest]
fn test_compact_removes_nones() {
    assert_eq!(compact(&[None, Some(1), None]), vec![Some(1)]);
}

#[rstest]
fn test_difference_excludes_values_from_any_other() {
    assert_eq!(difference(&[2, 1], &[[2, 3]]), vec![1]);
    assert_eq!(difference(&[1, 2, 3, 4], &[vec![2], vec![4, 5]]), vec![1, 3]);
}

#[rstest]
fn test_difference_collapses_duplicates() {
    assert_eq!(difference(&[1, 1, 2, 2], &[[2]]), vec![1]);
}

#[rstest]
fn test_drop_left_clamps_to_length() {
    assert_eq!(drop_left(&[1, 2, 3], 1), vec![2, 3]);
    assert_eq!(drop_left(&[1, 2, 3], 3), Vec::<i32>::new());
    assert_eq!(drop_left(&[1, 2, 3], 10), Vec::<i32>::new());
}

#[rstest]
fn test_drop_right_clamps_to_length() {
    assert_eq!(drop_right(&[1, 2, 3], 1), vec![1, 2]);
    assert_eq!(drop_right(&[1, 2, 3], 10), Vec::<i32>::new());
}

#[rstest]
fn test_drop_left_while_stops_at_first_failure() {
    // The trailing 1 would match again, but dropping stopped at 3.
    let result = drop_left_while(&[1, 2, 3, 4, 1], |value, _, _| *value < 3);
    assert_eq!(result, vec![3, 4, 1]);
}

#[rstest]
fn test_drop_left_while_can_drain_everything() {
    let result = drop_left_while(&[1, 2, 3], |_, _, _| true);
    assert_eq!(result, Vec::<i32>::new());
}

#[rstest]
fn test_drop_right_while_stops_at_first_failure() {
    let result = drop_right_while(&[2, 5, 1, 1], |value, _, _| *value < 5);
    assert_eq!(result, vec![2, 5]);
}

#[rstest]
fn test_first_and_last_on_populated_sequence() {
    let sequence = [1, 2, 3];
    assert_eq!(first(&sequence), Some(&1));
    assert_eq!(last(&sequence), Some(&3));
}

#[rstest]
fn test_first_and_last_absence_means_empty() {
    assert_eq!(first::<i32>(&[]), None);
    assert_eq!(last::<i32>(&[]), None);
    // A falsy element is still an element.
    assert_eq!(first(&[0]), Some(&0));
    assert_eq!(last(&[0]), Some(&0));
}

#[rstest]
fn test_get_supports_negative_indices() {
    assert_eq!(get(&[1, 2, 3], -1), Some(&3));
    assert_eq!(get(&[1, 2, 3], 5), None);
}

#[rstest]
fn test_intersects_keeps_first_sequence_order() {
    assert_eq!(intersects(&[vec![4, 2, 1], vec![1, 2], vec![2, 1, 9]]), vec![2, 1]);
}

#[rstest]
fn test_intersects_deduplicates() {
    assert_eq!(intersects(&[[2, 2, 1], [2, 1, 2]]), vec![2, 1]);
}

#[rstest]
fn test_join_orders_by_first_occurrence() {
    assert_eq!(join(&[vec![2], vec![1, 2]]), vec![2, 1]);
    assert_eq!(join(&[vec![1, 2], vec![3, 2], vec![1, 4]]), vec![1, 2, 3, 4]);
}

#[rstest]
fn test_remove_splits_by_predicate() {
    let mut sequence = vec![1, 2, 3, 4];
    let removed = remove(&mut sequence, |value, _, _| value % 2 == 0);

    assert_eq!(sequence, vec![1, 3]);
    assert_eq!(removed, vec![2, 4]);
}

#[rstest]
fn test_remove_preserves_relative_order_of_both_halves() {
    let mut sequence = vec!["b", "a", "d", "c"];
    let removed = remove(&mut sequence, |value, _, _| *value < "c");

    assert_eq!(sequence, vec!["d", "c"]);
    assert_eq!(removed, vec!["b", "a"]);
}

#[rstest]
fn test_slice_half_open_range() {
    assert_eq!(slice(&[1, 2, 3, 4], 1, Some(3)), vec![2, 3]);
}

#[rstest]
fn test_slice_open_end_runs_to_the_end() {
    assert_eq!(slice(&[1, 2, 3, 4], 2, None), vec![3, 4]);
}

#[rstest]
fn test_slice_negative_bounds_count_from_the_end() {
    assert_eq!(slice(&[1, 2, 3, 4], -3, Some(-1)), vec![2, 3]);
}

#[rstest]
fn test_slice_inverted_range_is_empty() {
    assert_eq!(slice(&[1, 2, 3, 4], 3, Some(1)), Vec::<i32>::new());
}

#[rstest]
fn test_uniques_keeps_first_occurrence() {
    assert_eq!(uniques(&[2, 1, 2, 3, 1]), vec![2, 1, 3]);
}
