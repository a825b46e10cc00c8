//! The identity combinator.
//!
//! [`identity`] is the neutral element of every composition in this crate and
//! the seed of the folding pipes.

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// - `compose(identity, f)` behaves exactly like `f`
/// - `compose(f, identity)` behaves exactly like `f`
///
/// In combinatory logic, this is known as the I combinator.
///
/// # Examples
///
/// ```
/// use pipekit::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
///
/// # Use with function composition
///
/// ```
/// use pipekit::compose::{compose, identity};
///
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let composed = compose(identity, double);
/// assert_eq!(composed(5), double(5));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}
