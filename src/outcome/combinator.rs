//! Pipe-oriented combinators for [`Outcome`].
//!
//! Every transform on [`Outcome`] is also exposed here as a free function
//! that returns a unary closure, so chains read left-to-right under
//! [`pipe!`](crate::pipe!):
//!
//! ```rust
//! use yepnah::outcome::combinator::{flat, map, unwrap_or};
//! use yepnah::outcome::{failure, success};
//! use yepnah::pipe;
//!
//! let result = pipe!(
//!     success::<i32, &str>(5),
//!     map(|n| n + 1),
//!     flat(|n| if n == 6 { failure("six") } else { success(n) }),
//!     unwrap_or(0),
//! );
//! assert_eq!(result, 0);
//! ```
//!
//! The module also holds the operations that do not fit the method form:
//! [`all`] aggregates many containers into one, and [`from`] adapts a
//! panicking function into a container-returning one.

use std::panic::{AssertUnwindSafe, catch_unwind};

use super::Outcome;

/// Lifts a total function over the success channel.
///
/// Returns a closure equivalent to [`Outcome::map`].
#[inline]
pub fn map<T, U, E, F>(function: F) -> impl FnOnce(Outcome<T, E>) -> Outcome<U, E>
where
    F: FnOnce(T) -> U,
{
    move |outcome| outcome.map(function)
}

/// Lifts a function over the failure channel.
///
/// Returns a closure equivalent to [`Outcome::map_err`].
#[inline]
pub fn map_err<T, E, F, O>(function: O) -> impl FnOnce(Outcome<T, E>) -> Outcome<T, F>
where
    O: FnOnce(E) -> F,
{
    move |outcome| outcome.map_err(function)
}

/// Lifts a fallible step over the success channel.
///
/// Returns a closure equivalent to [`Outcome::flat`]: on success the step
/// runs, on failure the original error short-circuits into the combined
/// error type.
#[inline]
pub fn flat<T, U, E, F, O>(function: O) -> impl FnOnce(Outcome<T, E>) -> Outcome<U, F>
where
    O: FnOnce(T) -> Outcome<U, F>,
    E: Into<F>,
{
    move |outcome| outcome.flat(function)
}

/// Lifts a recovery step over the failure channel.
///
/// Returns a closure equivalent to [`Outcome::or_else`].
#[inline]
pub fn or_else<T, E, F, O>(function: O) -> impl FnOnce(Outcome<T, E>) -> Outcome<T, F>
where
    O: FnOnce(E) -> Outcome<T, F>,
{
    move |outcome| outcome.or_else(function)
}

/// Terminal extraction: the success value, or `default` on failure.
///
/// Returns a closure equivalent to [`Outcome::unwrap_or`].
#[inline]
pub fn unwrap_or<T, E>(default: T) -> impl FnOnce(Outcome<T, E>) -> T {
    move |outcome| outcome.unwrap_or(default)
}

/// Observes the success value without consuming the container.
///
/// Returns a closure equivalent to [`Outcome::tap`].
#[inline]
pub fn tap<T, E, O>(function: O) -> impl FnOnce(Outcome<T, E>) -> Outcome<T, E>
where
    O: FnOnce(&T),
{
    move |outcome| outcome.tap(function)
}

/// Aggregates a sequence of containers into one container of the values.
///
/// The settled inputs are scanned in input order: the first failure found
/// wins, otherwise the success values are collected in the same order as the
/// inputs. An empty input yields `Success` of an empty `Vec`.
///
/// # Examples
///
/// ```rust
/// use yepnah::outcome::combinator::all;
/// use yepnah::outcome::{Outcome, failure, success};
///
/// let combined = all([success::<i32, String>(1), success(2)]);
/// assert_eq!(combined, Outcome::Success(vec![1, 2]));
///
/// let combined = all([
///     success::<i32, &str>(1),
///     failure("first"),
///     failure("second"),
/// ]);
/// assert_eq!(combined, Outcome::Failure("first"));
///
/// let combined = all(Vec::<Outcome<i32, String>>::new());
/// assert_eq!(combined, Outcome::Success(vec![]));
/// ```
pub fn all<T, E, I>(outcomes: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let iterator = outcomes.into_iter();
    let mut values = Vec::with_capacity(iterator.size_hint().0);
    for outcome in iterator {
        match outcome {
            Outcome::Success(value) => values.push(value),
            Outcome::Failure(error) => return Outcome::Failure(error),
        }
    }
    Outcome::Success(values)
}

/// Aggregates two containers with differing success types into one
/// container of a pair.
///
/// The tuple-shaped counterpart of [`all`] for inputs whose success types
/// differ: the first-in-order failure wins, otherwise the pair of values is
/// returned.
///
/// # Examples
///
/// ```rust
/// use yepnah::outcome::combinator::both;
/// use yepnah::outcome::{Outcome, failure, success};
///
/// let combined = both(success::<i32, String>(1), success::<&str, String>("two"));
/// assert_eq!(combined, Outcome::Success((1, "two")));
///
/// let combined = both(
///     failure::<i32, &str>("first"),
///     failure::<&str, &str>("second"),
/// );
/// assert_eq!(combined, Outcome::Failure("first"));
/// ```
pub fn both<A, B, E>(first: Outcome<A, E>, second: Outcome<B, E>) -> Outcome<(A, B), E> {
    match (first, second) {
        (Outcome::Success(first), Outcome::Success(second)) => Outcome::Success((first, second)),
        (Outcome::Failure(error), _) => Outcome::Failure(error),
        (_, Outcome::Failure(error)) => Outcome::Failure(error),
    }
}

/// Adapts a panicking function into a container-returning one.
///
/// The adapted function invokes `function` inside a panic-catching boundary:
/// a normal return is wrapped in `Success`, while a panic is swallowed and
/// replaced by `Failure` of the single `error` value configured at adaptation
/// time. The caught payload is intentionally discarded - every failure of the
/// adapted function carries the same configured error, regardless of cause.
///
/// # Examples
///
/// ```rust
/// use yepnah::outcome::Outcome;
/// use yepnah::outcome::combinator::from;
///
/// let parse = from(|raw: &str| raw.parse::<i32>().unwrap(), "bad number");
///
/// assert_eq!(parse("42"), Outcome::Success(42));
/// assert_eq!(parse("nope"), Outcome::Failure("bad number"));
/// ```
pub fn from<A, T, E, F>(function: F, error: E) -> impl Fn(A) -> Outcome<T, E>
where
    F: Fn(A) -> T,
    E: Clone,
{
    move |input| match catch_unwind(AssertUnwindSafe(|| function(input))) {
        Ok(value) => Outcome::Success(value),
        Err(_) => Outcome::Failure(error.clone()),
    }
}
