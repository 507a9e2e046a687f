//! Pipe-oriented combinators for [`AsyncOutcome`].
//!
//! The async flavor of [`outcome::combinator`](crate::outcome::combinator),
//! under the async naming: [`err`] and [`or`] are the failure-channel duals
//! of [`map`] and [`flat`], and [`unbox`] is the terminal extraction. Each
//! function returns a unary closure so chains read left-to-right under
//! [`pipe!`](crate::pipe!):
//!
//! ```rust
//! use yepnah::effect::combinator::{flat, map, unbox, yep};
//! use yepnah::effect::nah;
//! use yepnah::pipe;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let result = pipe!(
//!     yep::<i32, String>(5),
//!     map(|n| n + 1),
//!     flat(|n| if n == 6 { nah("six".to_string()) } else { yep(n) }),
//!     unbox(0),
//! )
//! .await;
//! assert_eq!(result, 0);
//! # }
//! ```

use std::panic::{AssertUnwindSafe, catch_unwind};

use futures::FutureExt;
use futures::future::{BoxFuture, join_all};

use super::AsyncOutcome;
use crate::outcome::{self, Outcome};

pub use super::async_outcome::{nah, yep};

/// Lifts a total function over the success channel.
///
/// Returns a closure equivalent to [`AsyncOutcome::map`].
#[inline]
pub fn map<T, U, E, F>(function: F) -> impl FnOnce(AsyncOutcome<T, E>) -> AsyncOutcome<U, E>
where
    F: FnOnce(T) -> U + Send + 'static,
    T: Send + 'static,
    U: Send + 'static,
    E: Send + 'static,
{
    move |container| container.map(function)
}

/// Lifts a function over the failure channel.
///
/// Returns a closure equivalent to [`AsyncOutcome::map_err`].
#[inline]
pub fn err<T, E, F, O>(function: O) -> impl FnOnce(AsyncOutcome<T, E>) -> AsyncOutcome<T, F>
where
    O: FnOnce(E) -> F + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
    F: Send + 'static,
{
    move |container| container.map_err(function)
}

/// Lifts a fallible async step over the success channel.
///
/// Returns a closure equivalent to [`AsyncOutcome::flat`].
#[inline]
pub fn flat<T, U, E, F, O>(function: O) -> impl FnOnce(AsyncOutcome<T, E>) -> AsyncOutcome<U, F>
where
    O: FnOnce(T) -> AsyncOutcome<U, F> + Send + 'static,
    E: Into<F>,
    T: Send + 'static,
    U: Send + 'static,
    E: Send + 'static,
    F: Send + 'static,
{
    move |container| container.flat(function)
}

/// Lifts a recovery step over the failure channel.
///
/// Returns a closure equivalent to [`AsyncOutcome::or_else`].
#[inline]
pub fn or<T, E, F, O>(function: O) -> impl FnOnce(AsyncOutcome<T, E>) -> AsyncOutcome<T, F>
where
    O: FnOnce(E) -> AsyncOutcome<T, F> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
    F: Send + 'static,
{
    move |container| container.or_else(function)
}

/// Terminal extraction: a future of the success value, or `default` on
/// failure.
///
/// Returns a closure equivalent to [`AsyncOutcome::unwrap_or`]; awaiting the
/// returned future hands the caller a plain value once the chain settles.
#[inline]
pub fn unbox<T, E>(default: T) -> impl FnOnce(AsyncOutcome<T, E>) -> BoxFuture<'static, T>
where
    T: Send + 'static,
    E: Send + 'static,
{
    move |container| Box::pin(async move { container.await.unwrap_or(default) })
}

/// Observes the success value once the container settles.
///
/// Returns a closure equivalent to [`AsyncOutcome::tap`].
#[inline]
pub fn tap<T, E, O>(function: O) -> impl FnOnce(AsyncOutcome<T, E>) -> AsyncOutcome<T, E>
where
    O: FnOnce(&T) + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    move |container| container.tap(function)
}

/// Aggregates a sequence of containers into one container of the values.
///
/// All inputs are awaited concurrently through a single joined future -
/// completion callbacks are registered on every input before any of them can
/// settle, so the total wait is the maximum of the inputs, not the sum. Once
/// every input has settled, the results are scanned in input order: the
/// first failure found wins - first **by input order**, never first to
/// settle - otherwise the success values are collected in the same order as
/// the inputs. An empty input settles immediately to `Success` of an empty
/// `Vec`.
///
/// # Examples
///
/// ```rust
/// use yepnah::effect::combinator::{all, yep};
/// use yepnah::outcome::Outcome;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let combined = all(vec![yep::<i32, String>(1), yep(2)]);
/// assert_eq!(combined.await, Outcome::Success(vec![1, 2]));
/// # }
/// ```
pub fn all<T, E>(containers: Vec<AsyncOutcome<T, E>>) -> AsyncOutcome<Vec<T>, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    AsyncOutcome::new(move || async move {
        let settled = join_all(containers).await;
        outcome::combinator::all(settled)
    })
}

/// Aggregates two containers with differing success types into one
/// container of a pair.
///
/// The tuple-shaped counterpart of [`all`] for inputs whose success types
/// differ. Both inputs are awaited concurrently; once both have settled the
/// first-in-order failure wins, otherwise the pair of values is returned.
///
/// # Examples
///
/// ```rust
/// use yepnah::effect::combinator::{both, yep};
/// use yepnah::outcome::Outcome;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let combined = both(yep::<i32, String>(1), yep::<&str, String>("two"));
/// assert_eq!(combined.await, Outcome::Success((1, "two")));
/// # }
/// ```
pub fn both<A, B, E>(
    first: AsyncOutcome<A, E>,
    second: AsyncOutcome<B, E>,
) -> AsyncOutcome<(A, B), E>
where
    A: Send + 'static,
    B: Send + 'static,
    E: Send + 'static,
{
    AsyncOutcome::new(move || async move {
        match tokio::join!(first, second) {
            (Outcome::Success(first), Outcome::Success(second)) => {
                Outcome::Success((first, second))
            }
            (Outcome::Failure(error), _) => Outcome::Failure(error),
            (_, Outcome::Failure(error)) => Outcome::Failure(error),
        }
    })
}

/// Adapts a panicking async function into a container-returning one.
///
/// The adapted function invokes `function` inside a panic-catching boundary
/// that covers both the synchronous call and the execution of the returned
/// future. A normal completion is wrapped in `Success`; a panic from either
/// stage is swallowed and replaced by `Failure` of the single `error` value
/// configured at adaptation time. The caught payload is intentionally
/// discarded - every failure of the adapted function carries the same
/// configured error, regardless of cause.
///
/// # Examples
///
/// ```rust
/// use yepnah::effect::combinator::from;
/// use yepnah::outcome::Outcome;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let parse = from(
///     |raw: &'static str| async move { raw.parse::<i32>().unwrap() },
///     "bad number",
/// );
///
/// assert_eq!(parse("42").await, Outcome::Success(42));
/// assert_eq!(parse("nope").await, Outcome::Failure("bad number"));
/// # }
/// ```
pub fn from<A, T, E, F, Fut>(function: F, error: E) -> impl Fn(A) -> AsyncOutcome<T, E>
where
    F: Fn(A) -> Fut + Clone + Send + 'static,
    Fut: Future<Output = T> + Send + 'static,
    A: Send + 'static,
    T: Send + 'static,
    E: Clone + Send + 'static,
{
    move |input| {
        let function = function.clone();
        let error = error.clone();
        AsyncOutcome::new(move || async move {
            // Catch panics from the synchronous invocation and from the
            // returned future separately; either one settles the container
            // as the configured failure.
            match catch_unwind(AssertUnwindSafe(|| function(input))) {
                Ok(future) => match AssertUnwindSafe(future).catch_unwind().await {
                    Ok(value) => Outcome::Success(value),
                    Err(_) => Outcome::Failure(error),
                },
                Err(_) => Outcome::Failure(error),
            }
        })
    }
}
