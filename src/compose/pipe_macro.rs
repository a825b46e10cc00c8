//! The `pipe!` and `pipe_iterative!` macros for left-to-right composition.
//!
//! Both macros turn a list of functions into one function. They differ only in
//! how the composition is built:
//!
//! - [`pipe!`] folds [`compose`](crate::compose::compose) over the list, seeded
//!   with [`identity`](crate::compose::identity)
//! - [`pipe_iterative!`] starts from the first function and composes each of
//!   the remaining ones onto it
//!
//! The functions may change type from stage to stage, which is why these are
//! macros: a heterogeneous sequence has no runtime representation. For
//! homogeneous sequences built at runtime see
//! [`pipe_fold`](crate::compose::pipe_fold) and
//! [`pipe_iterative`](crate::compose::pipe_iterative).

/// Composes functions from left to right, folding from the identity function.
///
/// `pipe!(f, g, h)(x)` is equivalent to `h(g(f(x)))`, built as
/// `compose(compose(compose(identity, f), g), h)`.
///
/// # Syntax
///
/// - `pipe!()` - The identity function
/// - `pipe!(f)` - Behaves like `f`
/// - `pipe!(f, g)` - Returns `|x| g(f(x))`
/// - `pipe!(f, g, h, ...)` - Composes any number of functions
///
/// # Examples
///
/// ## Basic pipeline
///
/// ```
/// use pipekit::pipe;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// // pipe!(f, g)(x) = g(f(x)) = double(add_one(5)) = 12
/// let piped = pipe!(add_one, double);
/// assert_eq!(piped(5), 12);
/// ```
///
/// ## Type conversion through pipeline
///
/// ```
/// use pipekit::pipe;
///
/// fn to_text(x: i32) -> String { x.to_string() }
/// fn text_len(text: String) -> usize { text.len() }
///
/// let digits = pipe!(to_text, text_len);
/// assert_eq!(digits(12345), 5);
/// ```
///
/// ## Empty pipeline
///
/// ```
/// use pipekit::pipe;
///
/// let unchanged = pipe!();
/// assert_eq!(unchanged("same"), "same");
/// ```
#[macro_export]
macro_rules! pipe {
    () => {
        $crate::compose::identity
    };

    ($($function:expr),+ $(,)?) => {
        $crate::__pipe_fold!($crate::compose::identity; $($function),+)
    };
}

/// Composes functions from left to right, starting from the first function.
///
/// Observably identical to [`pipe!`](crate::pipe!); the composition is seeded
/// with the first function instead of [`identity`](crate::compose::identity).
/// `pipe_iterative!()` is still the identity function.
///
/// # Examples
///
/// ```
/// use pipekit::{pipe, pipe_iterative};
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn to_text(x: i32) -> String { x.to_string() }
/// fn text_len(text: String) -> usize { text.len() }
///
/// let iterative = pipe_iterative!(add_one, to_text, text_len);
/// let folded = pipe!(add_one, to_text, text_len);
/// assert_eq!(iterative(99), folded(99));
/// assert_eq!(iterative(99), 3);
/// ```
#[macro_export]
macro_rules! pipe_iterative {
    () => {
        $crate::compose::identity
    };

    ($first:expr $(, $function:expr)* $(,)?) => {
        $crate::__pipe_fold!($first; $($function),*)
    };
}

/// Left fold of `compose` over a list of functions.
#[doc(hidden)]
#[macro_export]
macro_rules! __pipe_fold {
    ($accumulated:expr; ) => {
        $accumulated
    };

    ($accumulated:expr; $function:expr $(, $remaining_functions:expr)*) => {
        $crate::__pipe_fold!(
            $crate::compose::compose($accumulated, $function);
            $($remaining_functions),*
        )
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_pipe_empty_is_identity() {
        let piped = pipe!();
        assert_eq!(piped(42), 42);
    }

    #[test]
    fn test_pipe_single() {
        let double = |x: i32| x * 2;
        let piped = pipe!(double);
        assert_eq!(piped(5), 10);
    }

    #[test]
    fn test_pipe_runs_left_to_right() {
        let add_one = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        let square = |x: i32| x * x;
        // square(double(add_one(2))) = square(6) = 36
        assert_eq!(pipe!(add_one, double, square)(2), 36);
    }

    #[test]
    fn test_pipe_iterative_single_is_the_function() {
        let double = |x: i32| x * 2;
        let piped = pipe_iterative!(double);
        assert_eq!(piped(5), 10);
    }

    #[test]
    fn test_pipe_iterative_empty_is_identity() {
        let piped = pipe_iterative!();
        assert_eq!(piped("value"), "value");
    }

    #[test]
    fn test_pipe_trailing_comma() {
        let add_one = |x: i32| x + 1;
        assert_eq!(pipe!(add_one, add_one,)(0), 2);
        assert_eq!(pipe_iterative!(add_one, add_one,)(0), 2);
    }
}
