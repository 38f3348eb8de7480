//! Order-preserving set operations over sequences.
//!
//! "Set" here means deduplicated by `==`, not an actual set structure:
//! every operation keeps the first occurrence of a value and preserves
//! encounter order. Equality is plain [`PartialEq`], so the operations
//! stay total over float-bearing element types; membership checks are
//! linear scans, which is the right trade at helper-library scale.
//!
//! The variadic inputs take `&[S]` with `S: AsRef<[T]>`, so arrays,
//! `Vec`s, and slices all pass through unchanged.

/// Deduplicates a sequence, keeping the first occurrence of each value.
///
/// # Examples
///
/// ```rust
/// use tilly::sequence::uniques;
///
/// assert_eq!(uniques(&[2, 1, 2, 3, 1]), vec![2, 1, 3]);
/// ```
pub fn uniques<T: Clone + PartialEq>(sequence: &[T]) -> Vec<T> {
    let mut result: Vec<T> = Vec::new();
    for value in sequence {
        if !result.contains(value) {
            result.push(value.clone());
        }
    }
    result
}

/// Returns the values of `sequence` present in none of the `exclusions`
/// sequences.
///
/// Order follows `sequence`; duplicates collapse to their first
/// occurrence, per set-difference semantics.
///
/// # Examples
///
/// ```rust
/// use tilly::sequence::difference;
///
/// assert_eq!(difference(&[2, 1], &[[2, 3]]), vec![1]);
/// assert_eq!(difference(&[1, 2, 1, 3], &[vec![3], vec![4]]), vec![1, 2]);
/// ```
pub fn difference<T, S>(sequence: &[T], exclusions: &[S]) -> Vec<T>
where
    T: Clone + PartialEq,
    S: AsRef<[T]>,
{
    let mut result: Vec<T> = Vec::new();
    for value in sequence {
        if exclusions.iter().any(|other| other.as_ref().contains(value)) {
            continue;
        }
        if !result.contains(value) {
            result.push(value.clone());
        }
    }
    result
}

/// Returns the values present in every given sequence, deduplicated, in
/// first-sequence order.
///
/// With no sequences at all the intersection is empty.
///
/// # Examples
///
/// ```rust
/// use tilly::sequence::intersects;
///
/// assert_eq!(intersects(&[[2, 1], [2, 3]]), vec![2]);
/// assert_eq!(intersects(&[vec![1, 2, 3], vec![3, 1], vec![1, 3, 5]]), vec![1, 3]);
/// ```
pub fn intersects<T, S>(sequences: &[S]) -> Vec<T>
where
    T: Clone + PartialEq,
    S: AsRef<[T]>,
{
    let Some((first_sequence, rest)) = sequences.split_first() else {
        return Vec::new();
    };

    let mut result: Vec<T> = Vec::new();
    for value in first_sequence.as_ref() {
        if result.contains(value) {
            continue;
        }
        if rest.iter().all(|other| other.as_ref().contains(value)) {
            result.push(value.clone());
        }
    }
    result
}

/// Returns the union of all given sequences, deduplicated, ordered by
/// first occurrence across the concatenation.
///
/// # Examples
///
/// ```rust
/// use tilly::sequence::join;
///
/// assert_eq!(join(&[vec![2], vec![1, 2]]), vec![2, 1]);
/// assert_eq!(join(&[vec![1, 2], vec![2, 3], vec![3, 4]]), vec![1, 2, 3, 4]);
/// ```
pub fn join<T, S>(sequences: &[S]) -> Vec<T>
where
    T: Clone + PartialEq,
    S: AsRef<[T]>,
{
    let mut result: Vec<T> = Vec::new();
    for sequence in sequences {
        for value in sequence.as_ref() {
            if !result.contains(value) {
                result.push(value.clone());
            }
        }
    }
    result
}
