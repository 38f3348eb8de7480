//! Nested sequences and depth-controlled flattening.
//!
//! This module provides [`Nested`], a sum type expressing "an element
//! that is either a value or a sub-sequence", together with the flatten
//! family of operations over sequences of such elements:
//!
//! - [`flatten`]: fully recursive flatten
//! - [`flatten_to`]: flatten up to a given depth
//! - [`concat`]: one-level splice of sequences and singletons
//! - [`base_flatten`]: the configurable primitive the others are built on
//! - [`is_flattenable`] and [`push_all`]: the shared helpers
//!
//! The [`nested!`](crate::nested!) macro builds `Vec<Nested<T>>` literals
//! with square brackets denoting sub-lists.
//!
//! # Stack Safety
//!
//! Flattening walks the element tree with an explicit work stack instead
//! of recursing, so arbitrarily deep inputs cannot overflow the call
//! stack. Emission order is depth-first, left-to-right, exactly as the
//! recursive formulation would produce.
//!
//! # Examples
//!
//! ```rust
//! use tilly::nested;
//! use tilly::nested::{flatten, flatten_to};
//!
//! let deep = nested![1, [2, [3, [4]], 5]];
//!
//! assert_eq!(flatten(&deep), nested![1, 2, 3, 4, 5]);
//! assert_eq!(flatten_to(&deep, 1), nested![1, 2, [3, [4]], 5]);
//! ```

#[macro_use]
mod macros;

mod element;
mod flatten;

pub use element::Nested;
pub use flatten::{base_flatten, concat, flatten, flatten_to, is_flattenable, push_all};
