//! Positional lookups. Absence is a value, never a panic.

/// Returns the first element, or `None` if the sequence is empty.
///
/// # Examples
///
/// ```rust
/// use tilly::sequence::first;
///
/// assert_eq!(first(&[1, 2, 3]), Some(&1));
/// assert_eq!(first::<i32>(&[]), None);
///
/// // Absence means *empty*: a zero first element is still present.
/// assert_eq!(first(&[0]), Some(&0));
/// ```
#[inline]
pub fn first<T>(sequence: &[T]) -> Option<&T> {
    sequence.first()
}

/// Returns the last element, or `None` if the sequence is empty.
///
/// # Examples
///
/// ```rust
/// use tilly::sequence::last;
///
/// assert_eq!(last(&[1, 2, 3]), Some(&3));
/// assert_eq!(last::<i32>(&[]), None);
/// ```
#[inline]
pub fn last<T>(sequence: &[T]) -> Option<&T> {
    sequence.last()
}

/// Returns the element at `index`, counting from the end when negative.
///
/// `-1` addresses the last element, `-2` the one before it, and so on.
/// Any index outside the sequence, in either direction, yields `None`.
///
/// # Examples
///
/// ```rust
/// use tilly::sequence::get;
///
/// let sequence = [1, 2, 3];
/// assert_eq!(get(&sequence, 0), Some(&1));
/// assert_eq!(get(&sequence, -1), Some(&3));
/// assert_eq!(get(&sequence, 5), None);
/// assert_eq!(get(&sequence, -4), None);
/// ```
pub fn get<T>(sequence: &[T], index: isize) -> Option<&T> {
    let position = match usize::try_from(index) {
        Ok(position) => position,
        Err(_) => sequence.len().checked_sub(index.unsigned_abs())?,
    };
    sequence.get(position)
}
