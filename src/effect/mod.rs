//! Asynchronous flavor of the container.
//!
//! [`AsyncOutcome<T, E>`] is an [`Outcome`](crate::outcome::Outcome) wrapped
//! in a deferred-completion cell: the container settles exactly once, to one
//! of the two variants, and every combinator suspends until its input has
//! settled. The wrapper implements [`Future`](std::future::Future), so a
//! finished chain is consumed with `.await`.
//!
//! The combinator set and its semantics are identical to the synchronous
//! flavor; only the scheduling differs. The async admission points carry
//! their own short names: [`yep`] (success) and [`nah`] (failure), with
//! [`combinator::unbox`] as the terminal extraction and
//! [`combinator::err`]/[`combinator::or`] as the failure-channel duals.
//!
//! # Examples
//!
//! ```rust
//! use yepnah::effect::{nah, yep};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let result = yep::<i32, String>(5)
//!     .map(|n| n + 1)
//!     .flat(|n| if n == 6 { nah("six".to_string()) } else { yep(n) })
//!     .unwrap_or(0)
//!     .await;
//! assert_eq!(result, 0);
//! # }
//! ```

mod async_outcome;

pub mod combinator;

pub use async_outcome::{AsyncOutcome, nah, yep};
