//! The [`Nested`] element type.

use std::fmt;

/// An element of a nestable sequence: either a leaf value or a
/// sub-sequence of further elements.
///
/// A `Vec<Nested<T>>` is the library's rendering of a heterogeneous,
/// arbitrarily nested sequence: every position holds either an `Item`
/// (a value of type `T`) or a `List` (a sub-sequence). Because a `Vec`
/// is dense and 0-based by construction, "is this element itself a
/// sequence" is simply [`is_list`](Self::is_list); there is no sparse
/// or associative case to rule out.
///
/// The [`nested!`](crate::nested!) macro builds these literals without
/// spelling out the variants:
///
/// ```rust
/// use tilly::nested;
/// use tilly::nested::Nested;
///
/// let elements = nested![1, [2, [3]]];
/// assert_eq!(elements[0], Nested::Item(1));
/// assert_eq!(elements[1], Nested::List(nested![2, [3]]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    /// A leaf value.
    Item(T),
    /// A sub-sequence of further elements.
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Wraps a value as a leaf element.
    #[inline]
    pub const fn item(value: T) -> Self {
        Self::Item(value)
    }

    /// Wraps a sequence of elements as a list element.
    #[inline]
    pub const fn list(elements: Vec<Self>) -> Self {
        Self::List(elements)
    }

    /// Returns `true` if this element is a leaf value.
    #[inline]
    pub const fn is_item(&self) -> bool {
        matches!(self, Self::Item(_))
    }

    /// Returns `true` if this element is a sub-sequence.
    ///
    /// The empty list counts: `Nested::List(vec![])` is a list.
    #[inline]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Returns the leaf value, or `None` if this element is a list.
    #[inline]
    pub const fn as_item(&self) -> Option<&T> {
        match self {
            Self::Item(value) => Some(value),
            Self::List(_) => None,
        }
    }

    /// Returns the sub-sequence, or `None` if this element is a leaf.
    #[inline]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::Item(_) => None,
            Self::List(elements) => Some(elements),
        }
    }

    /// Consumes the element and returns the leaf value, or `None` if it
    /// is a list.
    #[inline]
    pub fn into_item(self) -> Option<T> {
        match self {
            Self::Item(value) => Some(value),
            Self::List(_) => None,
        }
    }

    /// Consumes the element and returns the sub-sequence, or `None` if
    /// it is a leaf.
    #[inline]
    pub fn into_list(self) -> Option<Vec<Self>> {
        match self {
            Self::Item(_) => None,
            Self::List(elements) => Some(elements),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Nested<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Item(value) => write!(formatter, "{value}"),
            Self::List(elements) => {
                formatter.write_str("[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{element}")?;
                }
                formatter.write_str("]")
            }
        }
    }
}
