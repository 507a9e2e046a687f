//! The `pipe!` macro for left-to-right function application.
//!
//! This module provides the [`pipe!`] macro which applies functions
//! from left to right, following the data flow style of programming.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`.
///
/// The value flows through the transformations in the order they are
/// written. Each step is an arbitrary unary function; in particular the
/// closure-returning combinators of
/// [`outcome::combinator`](crate::outcome::combinator) slot in directly, so
/// a container pipeline reads as a sequence of named steps.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g)` - Returns `g(f(x))`
/// - `pipe!(x, f, g, h, ...)` - Returns `...h(g(f(x)))`
///
/// There is no bound on the number of steps; the macro expands recursively
/// and each expansion is fully typed.
///
/// # Type Requirements
///
/// Each function only needs to implement [`FnOnce`], since each function
/// is called exactly once. This allows using functions that consume their
/// captured environment.
///
/// # Examples
///
/// ## Plain values
///
/// ```
/// use yepnah::pipe;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// // pipe!(x, f, g) = g(f(x)) = add_one(double(5)) = add_one(10) = 11
/// let result = pipe!(5, double, add_one);
/// assert_eq!(result, 11);
/// ```
///
/// ## Container pipeline
///
/// ```
/// use yepnah::outcome::combinator::{flat, map, unwrap_or};
/// use yepnah::outcome::{failure, success};
/// use yepnah::pipe;
///
/// let result = pipe!(
///     success::<i32, &str>(5),
///     map(|n| n + 1),
///     flat(|n| if n == 6 { failure("six") } else { success(n) }),
///     unwrap_or(0),
/// );
/// assert_eq!(result, 0);
/// ```
///
/// ## Relationship with compose!
///
/// ```
/// use yepnah::{compose, pipe};
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
///
/// assert_eq!(pipe!(10, f, g), compose!(g, f)(10));
/// ```
#[macro_export]
macro_rules! pipe {
    // Value only: return as is
    ($value:expr) => {
        $value
    };

    // Single function: apply it
    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    // Multiple functions: apply left to right recursively
    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
