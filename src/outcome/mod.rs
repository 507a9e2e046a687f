//! Outcome type - a typed success/failure container.
//!
//! This module provides the `Outcome<T, E>` type, which represents the result
//! of a fallible computation as a value: either a `Success(T)` or a
//! `Failure(E)`. Fallible steps are sequenced with combinators instead of
//! panics or early returns:
//!
//! - `map` transforms the success channel
//! - `map_err` transforms the failure channel
//! - `flat` sequences another fallible step, short-circuiting on failure
//! - `or_else` recovers from a failure
//! - `unwrap_or` extracts the final value
//!
//! # Examples
//!
//! ```rust
//! use yepnah::outcome::{Outcome, failure, success};
//!
//! let parsed: Outcome<i32, String> = success::<&str, String>("42")
//!     .flat(|raw| match raw.parse::<i32>() {
//!         Ok(number) => success(number),
//!         Err(_) => failure("not a number".to_string()),
//!     })
//!     .map(|number| number * 2);
//!
//! assert_eq!(parsed, Outcome::Success(84));
//! ```

use std::fmt;

pub mod combinator;

/// The result of a fallible computation: a success value or a failure value.
///
/// `Outcome<T, E>` holds exactly one of its two variants and is never mutated
/// in place; every combinator consumes the container and produces a new one.
/// The error type `E` is an arbitrary caller-chosen payload - the library
/// imposes no schema on it.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the failure value
///
/// # Error type accumulation
///
/// When fallible steps with different error types are sequenced with
/// [`flat`](Self::flat), the call site names the combined error type and each
/// step's error embeds into it via [`Into`]. The conversion is the identity
/// when the types already agree, so the concrete error value always flows
/// through unchanged.
///
/// # Examples
///
/// ```rust
/// use yepnah::outcome::Outcome;
///
/// let success: Outcome<i32, String> = Outcome::Success(42);
/// let failure: Outcome<i32, String> = Outcome::Failure("error".to_string());
///
/// let doubled = success.map(|x| x * 2);
/// assert_eq!(doubled, Outcome::Success(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome<T, E> {
    /// The success variant, carrying the computed value.
    Success(T),
    /// The failure variant, carrying the error payload.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yepnah::outcome::Outcome;
    ///
    /// let value: Outcome<i32, String> = Outcome::Success(42);
    /// assert!(value.is_success());
    ///
    /// let value: Outcome<i32, String> = Outcome::Failure("oops".to_string());
    /// assert!(!value.is_success());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yepnah::outcome::Outcome;
    ///
    /// let value: Outcome<i32, String> = Outcome::Failure("oops".to_string());
    /// assert!(value.is_failure());
    /// ```
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Converts the `Outcome` into an `Option<T>`, consuming the container.
    ///
    /// Returns `Some(value)` if this is `Success(value)`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yepnah::outcome::Outcome;
    ///
    /// let value: Outcome<i32, String> = Outcome::Success(42);
    /// assert_eq!(value.success(), Some(42));
    ///
    /// let value: Outcome<i32, String> = Outcome::Failure("oops".to_string());
    /// assert_eq!(value.success(), None);
    /// ```
    #[inline]
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts the `Outcome` into an `Option<E>`, consuming the container.
    ///
    /// Returns `Some(error)` if this is `Failure(error)`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yepnah::outcome::Outcome;
    ///
    /// let value: Outcome<i32, String> = Outcome::Failure("oops".to_string());
    /// assert_eq!(value.failure(), Some("oops".to_string()));
    /// ```
    #[inline]
    pub fn failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Returns a reference to the success value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yepnah::outcome::Outcome;
    ///
    /// let value: Outcome<i32, String> = Outcome::Success(42);
    /// assert_eq!(value.success_ref(), Some(&42));
    /// ```
    #[inline]
    pub const fn success_ref(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the failure value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yepnah::outcome::Outcome;
    ///
    /// let value: Outcome<i32, String> = Outcome::Failure("oops".to_string());
    /// assert_eq!(value.failure_ref(), Some(&"oops".to_string()));
    /// ```
    #[inline]
    pub const fn failure_ref(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    // =========================================================================
    // Transform Combinators
    // =========================================================================

    /// Transforms the success value with a function, leaving a failure
    /// untouched.
    ///
    /// The function must be total: a panic inside `function` is not caught
    /// here. For a step that can itself fail, use [`flat`](Self::flat).
    ///
    /// # Arguments
    ///
    /// * `function` - A function applied to the success value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yepnah::outcome::Outcome;
    ///
    /// let value: Outcome<i32, String> = Outcome::Success(21);
    /// assert_eq!(value.map(|x| x * 2), Outcome::Success(42));
    ///
    /// let value: Outcome<i32, String> = Outcome::Failure("oops".to_string());
    /// assert_eq!(value.map(|x| x * 2), Outcome::Failure("oops".to_string()));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transforms the failure value with a function, leaving a success
    /// untouched.
    ///
    /// This is the dual of [`map`](Self::map) over the failure channel,
    /// typically used to translate or widen an error before further chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yepnah::outcome::Outcome;
    ///
    /// let value: Outcome<i32, String> = Outcome::Failure("oops".to_string());
    /// assert_eq!(value.map_err(|e| e.len()), Outcome::Failure(4));
    /// ```
    #[inline]
    pub fn map_err<F, O>(self, function: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(function(error)),
        }
    }

    /// Sequences another fallible step after this one.
    ///
    /// On success, invokes `function` with the value and returns its result.
    /// On failure, short-circuits: `function` is never invoked and the
    /// original error is carried into the combined error type via [`Into`].
    ///
    /// This is the composition primitive (monadic bind) for the container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yepnah::outcome::{Outcome, failure, success};
    ///
    /// fn checked_halve(n: i32) -> Outcome<i32, String> {
    ///     if n % 2 == 0 {
    ///         success(n / 2)
    ///     } else {
    ///         failure(format!("{n} is odd"))
    ///     }
    /// }
    ///
    /// assert_eq!(success::<i32, String>(10).flat(checked_halve), Outcome::Success(5));
    /// assert_eq!(success::<i32, String>(5).flat(checked_halve), Outcome::Failure("5 is odd".to_string()));
    /// ```
    #[inline]
    pub fn flat<U, F, O>(self, function: O) -> Outcome<U, F>
    where
        O: FnOnce(T) -> Outcome<U, F>,
        E: Into<F>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error.into()),
        }
    }

    /// Recovers from a failure by invoking `function` with the error.
    ///
    /// The dual of [`flat`](Self::flat): on failure the recovery step runs
    /// and its result is returned; on success the value passes through
    /// re-wrapped at the recovery step's error type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yepnah::outcome::{Outcome, failure, success};
    ///
    /// let recovered: Outcome<i32, String> = failure::<i32, &str>("oops")
    ///     .or_else(|_| success(0));
    /// assert_eq!(recovered, Outcome::Success(0));
    /// ```
    #[inline]
    pub fn or_else<F, O>(self, function: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => function(error),
        }
    }

    /// Extracts the success value, or returns `default` on failure.
    ///
    /// This is the terminal operation of a chain: the caller always receives
    /// a plain value, never a raised error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yepnah::outcome::Outcome;
    ///
    /// let value: Outcome<i32, String> = Outcome::Success(42);
    /// assert_eq!(value.unwrap_or(0), 42);
    ///
    /// let value: Outcome<i32, String> = Outcome::Failure("oops".to_string());
    /// assert_eq!(value.unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Observes the success value without consuming the container.
    ///
    /// `function` receives a reference to the success value; a failure passes
    /// through untouched and `function` is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yepnah::outcome::{Outcome, success};
    ///
    /// let mut seen = None;
    /// let value = success::<i32, String>(42).tap(|v| seen = Some(*v));
    /// assert_eq!(seen, Some(42));
    /// assert_eq!(value, Outcome::Success(42));
    /// ```
    #[inline]
    pub fn tap<O>(self, function: O) -> Self
    where
        O: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            function(value);
        }
        self
    }

    /// Collapses the container by handling both variants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yepnah::outcome::Outcome;
    ///
    /// let value: Outcome<i32, String> = Outcome::Success(42);
    /// let message = value.fold(|error| format!("failed: {error}"), |n| format!("got {n}"));
    /// assert_eq!(message, "got 42");
    /// ```
    #[inline]
    pub fn fold<R, O, S>(self, on_failure: O, on_success: S) -> R
    where
        O: FnOnce(E) -> R,
        S: FnOnce(T) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }
}

// =============================================================================
// Constructors
// =============================================================================

/// Wraps a value in the success variant.
///
/// The failure type is a free parameter fixed by the surrounding chain.
///
/// # Examples
///
/// ```rust
/// use yepnah::outcome::{Outcome, success};
///
/// let value = success::<i32, String>(42);
/// assert_eq!(value, Outcome::Success(42));
/// ```
#[inline]
pub const fn success<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Success(value)
}

/// Wraps an error in the failure variant.
///
/// The success type is a free parameter fixed by the surrounding chain.
///
/// # Examples
///
/// ```rust
/// use yepnah::outcome::{Outcome, failure};
///
/// let value = failure::<i32, String>("oops".to_string());
/// assert_eq!(value, Outcome::Failure("oops".to_string()));
/// ```
#[inline]
pub const fn failure<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Failure(error)
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// Converts a `Result` to an `Outcome`.
    ///
    /// `Ok(value)` becomes `Success(value)`, and `Err(error)` becomes
    /// `Failure(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yepnah::outcome::Outcome;
    ///
    /// let ok: Result<i32, String> = Ok(42);
    /// let outcome: Outcome<i32, String> = ok.into();
    /// assert_eq!(outcome, Outcome::Success(42));
    /// ```
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    /// Converts an `Outcome` to a `Result`.
    ///
    /// `Success(value)` becomes `Ok(value)`, and `Failure(error)` becomes
    /// `Err(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yepnah::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Success(42);
    /// let result: Result<i32, String> = outcome.into();
    /// assert_eq!(result, Ok(42));
    /// ```
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_success_construction() {
        let value: Outcome<i32, String> = success(42);
        assert!(value.is_success());
        assert!(!value.is_failure());
    }

    #[rstest]
    fn test_failure_construction() {
        let value: Outcome<i32, String> = failure("oops".to_string());
        assert!(value.is_failure());
        assert!(!value.is_success());
    }

    #[rstest]
    fn test_flat_short_circuits() {
        let value: Outcome<i32, String> = failure("oops".to_string());
        let result: Outcome<i32, String> = value.flat(|_| unreachable!("flat must not run on failure"));
        assert_eq!(result, Outcome::Failure("oops".to_string()));
    }

    #[rstest]
    fn test_result_round_trip() {
        let outcome: Outcome<i32, String> = Ok::<_, String>(42).into();
        let back: Result<i32, String> = outcome.into();
        assert_eq!(back, Ok(42));
    }
}
