//! The binary composition primitive.
//!
//! [`Callable`] abstracts over "something that turns one input into one
//! output". Every `Fn(A) -> B` is a `Callable<A>`, and so is [`Composed`], the
//! nameable composition of two callables. Wrappers that must spell out the type
//! of the function they carry (`LazyPipeline`, `Composable`) build on
//! [`Composed`]; plain code uses [`compose`], which returns an ordinary closure.

/// A function of one input, possibly a composition of other functions.
///
/// The input is a single parameter-list value. Functions of several arguments
/// take a tuple (see [`tupled`](super::tupled)); named arguments are passed as
/// a struct.
///
/// This trait is blanket-implemented for every `Fn(Input) -> Output`, so plain
/// functions and closures can be used wherever a `Callable` is expected.
///
/// # Examples
///
/// ```
/// use pipekit::compose::Callable;
///
/// fn add_one(value: i32) -> i32 { value + 1 }
///
/// assert_eq!(add_one.apply(2), 3);
/// ```
pub trait Callable<Input> {
    /// The type produced by applying the callable.
    type Output;

    /// Applies the callable to `input`.
    fn apply(&self, input: Input) -> Self::Output;
}

impl<F, Input, Output> Callable<Input> for F
where
    F: Fn(Input) -> Output,
{
    type Output = Output;

    #[inline]
    fn apply(&self, input: Input) -> Output {
        self(input)
    }
}

/// Two callables joined first-then-second.
///
/// `Composed::new(first, second).apply(x)` is `second(first(x))`. The whole
/// input goes to `first`; `second` receives exactly one value, the output of
/// `first`.
///
/// No compatibility check happens when the value is built. A mismatch between
/// the output of `first` and the input of `second` is reported by the compiler
/// where the composition is applied.
///
/// # Examples
///
/// ```
/// use pipekit::compose::{Callable, Composed};
///
/// fn add_one(value: i32) -> i32 { value + 1 }
/// fn to_text(value: i32) -> String { value.to_string() }
///
/// let composed = Composed::new(add_one, to_text);
/// assert_eq!(composed.apply(2), "3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Composed<F, G> {
    first: F,
    second: G,
}

impl<F, G> Composed<F, G> {
    /// Joins `first` and `second`; `first` runs first.
    #[inline]
    pub const fn new(first: F, second: G) -> Self {
        Self { first, second }
    }

    /// Splits the composition back into its two halves.
    #[inline]
    pub fn into_parts(self) -> (F, G) {
        (self.first, self.second)
    }
}

impl<F, G, Input> Callable<Input> for Composed<F, G>
where
    F: Callable<Input>,
    G: Callable<F::Output>,
{
    type Output = G::Output;

    #[inline]
    fn apply(&self, input: Input) -> Self::Output {
        self.second.apply(self.first.apply(input))
    }
}

/// Composes two functions left to right.
///
/// `compose(f, g)(x)` is `g(f(x))`: `f` receives the full input and `g`
/// receives the single value `f` returns.
///
/// # Laws
///
/// - **Associativity**: `compose(compose(f, g), h) == compose(f, compose(g, h))`
/// - **Left Identity**: `compose(identity, f) == f`
/// - **Right Identity**: `compose(f, identity) == f`
///
/// # Examples
///
/// ```
/// use pipekit::compose::compose;
///
/// fn add_one(value: i32) -> i32 { value + 1 }
/// fn to_text(value: i32) -> String { value.to_string() }
///
/// let composed = compose(add_one, to_text);
/// assert_eq!(composed(2), "3");
/// ```
///
/// ## Forwarding several arguments to the first function
///
/// ```
/// use pipekit::compose::{compose, tupled};
///
/// fn add(left: i32, right: i32) -> i32 { left + right }
/// fn double(value: i32) -> i32 { value * 2 }
///
/// let composed = compose(tupled(add), double);
/// assert_eq!(composed((3, 4)), 14);
/// ```
#[inline]
pub fn compose<A, B, C>(first: impl Fn(A) -> B, second: impl Fn(B) -> C) -> impl Fn(A) -> C {
    let composed = Composed::new(first, second);
    move |input: A| composed.apply(input)
}
