//! # tilly
//!
//! A small utility toolkit for Rust providing sequence operations and
//! function combinators.
//!
//! ## Overview
//!
//! This library collects the everyday transformations that sit one step
//! above the standard library. It includes:
//!
//! - **Sequence Operations**: chunk, compact, difference, drop variants,
//!   first/last/get, intersects, join, remove, slice, uniques
//! - **Nested Sequences**: the [`Nested`](nested::Nested) element tree,
//!   the `nested!` literal macro, and depth-controlled flattening
//! - **Function Combinators**: delayed invocation and predicate negation
//!
//! Every operation is a pure transformation over caller-supplied data:
//! inputs are borrowed, outputs are fresh values. The two places where a
//! caller-owned structure is written to (`remove`, `push_all`) say so in
//! their signatures with `&mut`.
//!
//! ## Feature Flags
//!
//! - `sequence`: flat sequence operations and the `Falsy` trait
//! - `nested`: the `Nested` element tree and the flatten family
//! - `func`: function combinators
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use tilly::nested;
//! use tilly::prelude::*;
//!
//! let deep = nested![1, [2, [3, [4]], 5]];
//! assert_eq!(flatten(&deep), nested![1, 2, 3, 4, 5]);
//!
//! assert_eq!(chunk(&[1, 2, 3, 4, 5], 2), vec![vec![1, 2], vec![3, 4], vec![5]]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use tilly::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "nested")]
    pub use crate::nested::*;

    #[cfg(feature = "func")]
    pub use crate::func::*;
}

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "nested")]
pub mod nested;

#[cfg(feature = "func")]
pub mod func;
