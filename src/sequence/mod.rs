//! Flat sequence operations.
//!
//! Every operation here is a total function over an ordered slice:
//! borrow a `&[T]`, get a fresh `Vec<T>` (or an `Option<&T>` for the
//! lookups) back. Insertion order is significant throughout; the set
//! operations ([`difference`], [`intersects`], [`join`], [`uniques`])
//! additionally deduplicate by value equality.
//!
//! The one operation that writes to its input is [`remove`], and it says
//! so with `&mut`; there is no silent aliasing anywhere in this module.
//!
//! Predicates have the shape `FnMut(&T, usize, &[T]) -> bool`: the value
//! under inspection, an index, and a sequence view. Whether that view is
//! the original sequence or the shrinking remainder is documented per
//! operation.
//!
//! # Examples
//!
//! ```rust
//! use tilly::sequence::{chunk, compact, uniques};
//!
//! assert_eq!(chunk(&[1, 2, 3, 4, 5], 2), vec![vec![1, 2], vec![3, 4], vec![5]]);
//! assert_eq!(compact(&[0, 1, 0, 2]), vec![1, 2]);
//! assert_eq!(uniques(&[1, 2, 1, 3]), vec![1, 2, 3]);
//! ```

mod access;
mod filtering;
mod sets;
mod slicing;
mod truthy;

pub use access::{first, get, last};
pub use filtering::{compact, remove};
pub use sets::{difference, intersects, join, uniques};
pub use slicing::{chunk, drop_left, drop_left_while, drop_right, drop_right_while, slice};
pub use truthy::Falsy;
