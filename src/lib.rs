//! # yepnah
//!
//! A functional Result library for Rust providing typed success/failure
//! containers, composition combinators, and async effects.
//!
//! ## Overview
//!
//! The heart of the library is [`Outcome<T, E>`](outcome::Outcome), a
//! two-variant container holding either a success value or a failure value.
//! Fallible computations are expressed as chains of combinators over the
//! container instead of panics or early returns:
//!
//! - **Containers**: [`Outcome`](outcome::Outcome) for synchronous code,
//!   [`AsyncOutcome`](effect::AsyncOutcome) for future-based code
//! - **Combinators**: `map`, `map_err`, `flat`, `or_else`, `unwrap_or`,
//!   `tap` - as inherent methods and as pipe-friendly free functions
//! - **Composition**: the [`pipe!`] and [`compose!`] macros for
//!   left-to-right and right-to-left chaining
//! - **Aggregation**: `all` collapses many containers into one, keeping
//!   input order and surfacing the first failure
//! - **Adaptation**: `from` wraps a panicking function into a
//!   container-returning one
//!
//! ## Feature Flags
//!
//! - `compose`: the `pipe!`/`compose!` macros and helpers
//! - `async`: the `AsyncOutcome` container and its combinators
//!
//! ## Example
//!
//! ```rust
//! use yepnah::outcome::combinator::{flat, map, unwrap_or};
//! use yepnah::outcome::{Outcome, failure, success};
//! use yepnah::pipe;
//!
//! let result: i32 = pipe!(
//!     success::<i32, &str>(5),
//!     map(|n| n + 1),
//!     flat(|n| if n == 6 { failure("six") } else { success(n) }),
//!     unwrap_or(0),
//! );
//! assert_eq!(result, 0);
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
/// Re-exports the container types, their constructors, and the composition
/// helpers. The pipe-oriented free combinators stay in their own modules
/// (`outcome::combinator`, `effect::combinator`) because the synchronous and
/// asynchronous sets intentionally share names.
///
/// # Usage
///
/// ```rust
/// use yepnah::prelude::*;
/// ```
pub mod prelude {
    pub use crate::outcome::{Outcome, failure, success};

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "async")]
    pub use crate::effect::{AsyncOutcome, nah, yep};
}

pub mod outcome;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "async")]
pub mod effect;
