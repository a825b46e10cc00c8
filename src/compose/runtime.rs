//! Pipes over sequences of functions known only at runtime.
//!
//! A runtime sequence has to be homogeneous, so every stage maps `T` to `T`
//! and the stages are boxed. The two constructors mirror the two macro forms:
//!
//! - [`pipe_fold`] reduces the sequence with [`compose`](super::compose),
//!   seeded with [`identity`](super::identity)
//! - [`pipe_iterative`] takes the first function and composes the rest onto it
//!   in a loop
//!
//! Both return the identity function for an empty sequence.

use super::{compose, identity};

/// A boxed single-input function.
pub type BoxedFn<A, B> = Box<dyn Fn(A) -> B>;

/// Composes a runtime sequence of functions left to right by folding.
///
/// The first function in the sequence is applied first.
///
/// # Examples
///
/// ```
/// use pipekit::compose::{BoxedFn, pipe_fold};
///
/// let stages: Vec<BoxedFn<i32, i32>> = vec![
///     Box::new(|x: i32| x + 1),
///     Box::new(|x: i32| x * 10),
/// ];
///
/// let piped = pipe_fold(stages);
/// assert_eq!(piped(2), 30);
/// ```
///
/// An empty sequence is the identity function:
///
/// ```
/// use pipekit::compose::{BoxedFn, pipe_fold};
///
/// let piped = pipe_fold(Vec::<BoxedFn<String, String>>::new());
/// assert_eq!(piped("kept".to_string()), "kept");
/// ```
pub fn pipe_fold<T, I>(functions: I) -> BoxedFn<T, T>
where
    T: 'static,
    I: IntoIterator,
    I::Item: Fn(T) -> T + 'static,
{
    functions
        .into_iter()
        .fold(
            Box::new(identity::<T>) as BoxedFn<T, T>,
            |composed, function| -> BoxedFn<T, T> { Box::new(compose(composed, function)) },
        )
}

/// Composes a runtime sequence of functions left to right with a loop.
///
/// Starts from the first function instead of the identity function; the result
/// behaves exactly like [`pipe_fold`] on the same sequence.
///
/// # Examples
///
/// ```
/// use pipekit::compose::pipe_iterative;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let piped = pipe_iterative([add_one, double, add_one]);
/// assert_eq!(piped(3), 9);
/// ```
pub fn pipe_iterative<T, I>(functions: I) -> BoxedFn<T, T>
where
    T: 'static,
    I: IntoIterator,
    I::Item: Fn(T) -> T + 'static,
{
    let mut remaining = functions.into_iter();
    let Some(first) = remaining.next() else {
        return Box::new(identity::<T>);
    };

    let mut composed: BoxedFn<T, T> = Box::new(first);
    for function in remaining {
        composed = Box::new(compose(composed, function));
    }
    composed
}
