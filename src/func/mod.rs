//! Function combinators.
//!
//! Two small utilities over callables: [`delay`], which blocks the
//! calling thread before invoking a function, and the [`negate`] family,
//! which inverts a predicate's result while forwarding its arguments
//! unchanged.
//!
//! # Examples
//!
//! ```rust
//! use tilly::func::negate;
//!
//! let is_even = |value: i32| value % 2 == 0;
//! let is_odd = negate(is_even);
//!
//! assert!(is_odd(3));
//! assert!(!is_odd(4));
//! ```

mod combinators;

pub use combinators::{delay, negate, negate2, negate3};
