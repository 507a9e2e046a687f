//! Function composition utilities.
//!
//! This module provides the chaining entry points of the library:
//!
//! - [`pipe!`](crate::pipe!): apply functions left-to-right (data flow style)
//! - [`compose!`](crate::compose!): compose functions right-to-left
//!   (mathematical composition)
//!
//! Both macros are container-agnostic: each step is an arbitrary unary
//! function. Container pipelines arise by passing the closure-returning
//! combinators from [`outcome::combinator`](crate::outcome::combinator) (or
//! `effect::combinator` for the async flavor) as steps.
//!
//! # Helper Functions
//!
//! - [`identity`]: returns its argument unchanged
//! - [`constant`]: creates a function that always returns the same value
//!
//! # Examples
//!
//! ```
//! use yepnah::outcome::combinator::{map, unwrap_or};
//! use yepnah::outcome::success;
//! use yepnah::pipe;
//!
//! let result = pipe!(
//!     success::<i32, String>(5),
//!     map(|n| n * 2),
//!     unwrap_or(0),
//! );
//! assert_eq!(result, 10);
//! ```

mod compose_macro;
mod pipe_macro;
mod utils;

pub use utils::{constant, identity};

// Macro re-exports so `use yepnah::compose::*` brings the macros in scope.
pub use crate::compose;
pub use crate::pipe;
