//! Helper functions (combinators) for function composition.
//!
//! - [`identity`]: the identity function (I combinator)
//! - [`constant`]: creates a function that always returns the same value
//!   (K combinator)

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// `compose!(identity, f)` and `compose!(f, identity)` are both equivalent
/// to `f`. It is also the reference point of the functor identity law:
/// mapping `identity` over a container returns an equal container.
///
/// # Examples
///
/// ```
/// use yepnah::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// # Examples
///
/// ```
/// use yepnah::compose::constant;
///
/// let always_five = constant::<_, i32>(5);
/// assert_eq!(always_five(100), 5);
///
/// let values: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(values, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}
