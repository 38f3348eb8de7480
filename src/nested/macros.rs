//! The `nested!` literal macro.

/// Builds a `Vec<Nested<T>>` literal.
///
/// Square brackets denote sub-lists and become
/// [`Nested::List`](crate::nested::Nested::List); every other element
/// becomes [`Nested::Item`](crate::nested::Nested::Item). Lists nest to
/// any depth.
///
/// Each element must be a single token tree: literals, identifiers, and
/// parenthesized expressions qualify. Anything else (negative literals,
/// method calls, arithmetic) must be wrapped in parentheses.
///
/// # Examples
///
/// ```rust
/// use tilly::nested;
/// use tilly::nested::Nested;
///
/// let flat = nested![1, 2, 3];
/// assert_eq!(flat, vec![Nested::Item(1), Nested::Item(2), Nested::Item(3)]);
///
/// let deep = nested![1, [2, [3]], 4];
/// assert_eq!(deep[1], Nested::List(nested![2, [3]]));
///
/// let empty: Vec<Nested<i32>> = nested![];
/// assert!(empty.is_empty());
///
/// // Parenthesize multi-token expressions.
/// let computed = nested![(-1), (2 + 3)];
/// assert_eq!(computed, vec![Nested::Item(-1), Nested::Item(5)]);
/// ```
#[macro_export]
macro_rules! nested {
    ($($element:tt),* $(,)?) => {
        vec![$($crate::nested_element!($element)),*]
    };
}

/// Classifies a single `nested!` element token tree.
///
/// Implementation detail of [`nested!`]; not part of the public API.
#[doc(hidden)]
#[macro_export]
macro_rules! nested_element {
    ([$($inner:tt),* $(,)?]) => {
        $crate::nested::Nested::List($crate::nested![$($inner),*])
    };
    ($value:expr) => {
        $crate::nested::Nested::Item($value)
    };
}
