//! Delayed invocation and predicate negation.

use std::thread;
use std::time::Duration;

/// Sleeps for `wait`, then invokes `function` and returns its result.
///
/// This is a **blocking** sleep-then-call: the calling thread is
/// suspended for the full duration, and the result is unavailable until
/// `wait` has elapsed. Nothing is scheduled or deferred. Arguments are
/// forwarded by closure capture.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use tilly::func::delay;
///
/// let (left, right) = (2, 3);
/// let sum = delay(move || left + right, Duration::from_millis(1));
/// assert_eq!(sum, 5);
/// ```
pub fn delay<F, R>(function: F, wait: Duration) -> R
where
    F: FnOnce() -> R,
{
    thread::sleep(wait);
    function()
}

/// Wraps a unary predicate so it returns the opposite result.
///
/// The argument is forwarded unchanged; only the boolean is inverted.
///
/// Rust has no variadic functions, so the combinator comes in the
/// arities this library traffics in: [`negate`], [`negate2`], and
/// [`negate3`] (the `(value, index, sequence)` predicate shape).
///
/// # Laws
///
/// - **Involution**: `negate(negate(f))(x) == f(x)`
/// - **Definition**: `negate(f)(x) == !f(x)`
///
/// # Examples
///
/// ```rust
/// use tilly::func::negate;
///
/// let is_empty = |text: &str| text.is_empty();
/// let is_populated = negate(is_empty);
///
/// assert!(is_populated("abc"));
/// assert!(!is_populated(""));
/// ```
#[inline]
pub fn negate<A, F>(predicate: F) -> impl Fn(A) -> bool
where
    F: Fn(A) -> bool,
{
    move |argument| !predicate(argument)
}

/// Binary form of [`negate`].
///
/// # Examples
///
/// ```rust
/// use tilly::func::negate2;
///
/// let divides = |divisor: i32, value: i32| value % divisor == 0;
/// let does_not_divide = negate2(divides);
///
/// assert!(does_not_divide(2, 5));
/// assert!(!does_not_divide(2, 6));
/// ```
#[inline]
pub fn negate2<A, B, F>(predicate: F) -> impl Fn(A, B) -> bool
where
    F: Fn(A, B) -> bool,
{
    move |first_argument, second_argument| !predicate(first_argument, second_argument)
}

/// Ternary form of [`negate`], matching the sequence predicate shape
/// `(value, index, sequence)`.
///
/// # Examples
///
/// ```rust
/// use tilly::func::negate3;
///
/// let sequence = [5, 6];
/// let at_head = |_value: &i32, index: usize, _all: &[i32]| index == 0;
/// let past_head = negate3(at_head);
///
/// assert!(past_head(&sequence[1], 1, &sequence));
/// assert!(!past_head(&sequence[0], 0, &sequence));
/// ```
#[inline]
pub fn negate3<A, B, C, F>(predicate: F) -> impl Fn(A, B, C) -> bool
where
    F: Fn(A, B, C) -> bool,
{
    move |first_argument, second_argument, third_argument| {
        !predicate(first_argument, second_argument, third_argument)
    }
}
