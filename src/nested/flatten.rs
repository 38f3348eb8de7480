//! Flattening primitives and the flatten family of operations.

use smallvec::SmallVec;

use super::Nested;

/// Inline capacity of the flatten work stack: nesting deeper than this
/// spills to the heap.
const INLINE_DEPTH: usize = 8;

/// The default flatten method: an element can be descended into iff it
/// is a [`Nested::List`].
///
/// The empty list qualifies: descending into it simply contributes
/// nothing. A `Vec` is dense and 0-based by construction, so there is no
/// sparse or associative shape to exclude here.
///
/// # Examples
///
/// ```rust
/// use tilly::nested::{Nested, is_flattenable};
///
/// assert!(is_flattenable::<i32>(&Nested::List(vec![])));
/// assert!(!is_flattenable(&Nested::Item(1)));
/// ```
#[inline]
pub fn is_flattenable<T>(element: &Nested<T>) -> bool {
    element.is_list()
}

/// Appends every element of `source` onto the end of `target`,
/// preserving order, and returns the target.
///
/// The append is an explicit in-place operation: the `&mut` parameter is
/// the contract. Any `IntoIterator` source participates, which is how
/// strings join in as character lists:
///
/// ```rust
/// use tilly::nested::push_all;
///
/// let mut letters = vec!['a'];
/// push_all(&mut letters, "bc".chars());
/// assert_eq!(letters, vec!['a', 'b', 'c']);
/// ```
///
/// # Examples
///
/// ```rust
/// use tilly::nested::push_all;
///
/// let mut target = vec![1, 2];
/// let target = push_all(&mut target, vec![3, 4]);
/// assert_eq!(target, &vec![1, 2, 3, 4]);
/// ```
#[inline]
pub fn push_all<T, I>(target: &mut Vec<T>, source: I) -> &mut Vec<T>
where
    I: IntoIterator<Item = T>,
{
    target.extend(source);
    target
}

/// Flattens `sequence` into `accumulator`, descending at most `depth`
/// levels into elements for which `method` holds.
///
/// This is the configurable primitive behind [`flatten`] and
/// [`flatten_to`]. For each element, in order:
///
/// - if `depth > 0`, the element is a list, and `method` approves it:
///   - with more than one level remaining, its children are visited
///     depth-first, left-to-right;
///   - at the last level, its children are appended as-is (one level),
///     regardless of `strict`;
/// - otherwise the element itself is appended, unless `strict` is set,
///   in which case it is dropped silently.
///
/// A `method` that approves a leaf element has nothing to descend into;
/// such elements take the retain-or-drop branch.
///
/// The input sequence is never modified; the return value is the
/// accumulator with the flattened elements appended. A `depth` of
/// `usize::MAX` (or anything at or above the actual nesting depth)
/// flattens fully.
///
/// The walk is iterative over an explicit stack of slice iterators, so
/// input depth is bounded by available memory rather than by the call
/// stack.
///
/// # Arguments
///
/// * `sequence` - The elements to flatten.
/// * `depth` - Maximum number of levels to descend.
/// * `method` - Decides whether a list element is descended into.
/// * `strict` - Drop elements the method rejects instead of keeping them.
/// * `accumulator` - Receives the output; usually `Vec::new()`.
///
/// # Examples
///
/// Strict flattening keeps only the contents of approved lists:
///
/// ```rust
/// use tilly::nested;
/// use tilly::nested::{base_flatten, is_flattenable};
///
/// let mixed = nested![1, [2, 3], 4];
/// let strict = base_flatten(&mixed, 1, is_flattenable, true, Vec::new());
/// assert_eq!(strict, nested![2, 3]);
/// ```
///
/// A custom method limits which lists unfold:
///
/// ```rust
/// use tilly::nested;
/// use tilly::nested::{Nested, base_flatten};
///
/// // Only unfold pairs.
/// let is_pair = |element: &Nested<i32>| {
///     element.as_list().is_some_and(|elements| elements.len() == 2)
/// };
///
/// let sequence = nested![[1, 2], [3, 4, 5]];
/// let result = base_flatten(&sequence, usize::MAX, is_pair, false, Vec::new());
/// assert_eq!(result, nested![1, 2, [3, 4, 5]]);
/// ```
pub fn base_flatten<T, F>(
    sequence: &[Nested<T>],
    depth: usize,
    method: F,
    strict: bool,
    accumulator: Vec<Nested<T>>,
) -> Vec<Nested<T>>
where
    T: Clone,
    F: Fn(&Nested<T>) -> bool,
{
    let mut result = accumulator;

    // Each frame is an in-progress slice walk paired with the number of
    // levels still allowed below it.
    let mut stack: SmallVec<[(std::slice::Iter<'_, Nested<T>>, usize); INLINE_DEPTH]> =
        SmallVec::new();
    stack.push((sequence.iter(), depth));

    while let Some((elements, remaining_depth)) = stack.last_mut() {
        let remaining_depth = *remaining_depth;
        let Some(element) = elements.next() else {
            stack.pop();
            continue;
        };

        match element {
            Nested::List(children) if remaining_depth > 0 && method(element) => {
                if remaining_depth > 1 {
                    stack.push((children.iter(), remaining_depth - 1));
                } else {
                    // Last level: append the children one level deep.
                    push_all(&mut result, children.iter().cloned());
                }
            }
            _ if !strict => result.push(element.clone()),
            _ => {}
        }
    }

    result
}

/// Flattens a sequence completely.
///
/// Equivalent to [`flatten_to`] with unbounded depth: every list
/// element, however deep, is replaced by its contents.
///
/// # Examples
///
/// ```rust
/// use tilly::nested;
/// use tilly::nested::flatten;
///
/// let deep = nested![1, [2, [3, [4]], 5]];
/// assert_eq!(flatten(&deep), nested![1, 2, 3, 4, 5]);
/// ```
pub fn flatten<T: Clone>(sequence: &[Nested<T>]) -> Vec<Nested<T>> {
    base_flatten(sequence, usize::MAX, is_flattenable, false, Vec::new())
}

/// Flattens a sequence up to `depth` levels.
///
/// Elements nested deeper than `depth` are kept as-is; a `depth` of `0`
/// returns the sequence unchanged.
///
/// # Examples
///
/// ```rust
/// use tilly::nested;
/// use tilly::nested::flatten_to;
///
/// let sequence = nested![1, [2, [3]]];
/// assert_eq!(flatten_to(&sequence, 1), nested![1, 2, [3]]);
/// assert_eq!(flatten_to(&sequence, 0), sequence);
/// ```
pub fn flatten_to<T: Clone>(sequence: &[Nested<T>], depth: usize) -> Vec<Nested<T>> {
    base_flatten(sequence, depth, is_flattenable, false, Vec::new())
}

/// Concatenates `values` after `sequence`, splicing one level.
///
/// Each of `values` that is a list contributes its children; each leaf
/// is appended as a singleton. Argument order is preserved throughout.
///
/// # Examples
///
/// ```rust
/// use tilly::nested;
/// use tilly::nested::concat;
///
/// let base = nested![1];
/// let result = concat(&base, &nested![2, [3, 4], 5]);
/// assert_eq!(result, nested![1, 2, 3, 4, 5]);
/// ```
pub fn concat<T: Clone>(sequence: &[Nested<T>], values: &[Nested<T>]) -> Vec<Nested<T>> {
    let mut result = sequence.to_vec();
    for value in values {
        match value {
            Nested::List(children) => {
                push_all(&mut result, children.iter().cloned());
            }
            item => result.push(item.clone()),
        }
    }
    result
}
