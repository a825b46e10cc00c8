//! A function wrapper that composes with the `>>` operator.
//!
//! [`Composable`] wraps a single function. `composable >> other` joins it with
//! `other`, which may be a plain function or another `Composable`, and yields a
//! new `Composable` running the left side first. [`Composable::then`] is the
//! same operation under a name.
//!
//! With the `derive` feature, the [`composable`] attribute turns a plain
//! function definition into a `Composable` of the same name.
//!
//! # Examples
//!
//! ```rust
//! use pipekit::composable::Composable;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn to_text(x: i32) -> String { x.to_string() }
//! fn text_len(text: String) -> usize { text.len() }
//!
//! let composed = Composable::new(add_one) >> to_text >> text_len;
//! assert_eq!(composed.call(2), 1);
//!
//! // Both sides wrapped explicitly behave the same
//! let explicit = Composable::new(add_one) >> Composable::new(to_text) >> Composable::new(text_len);
//! assert_eq!(explicit.call(2), 1);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ops::Shr;

use crate::compose::{Callable, Composed};

#[cfg(feature = "derive")]
pub use pipekit_derive::composable;

/// A wrapped function of `A` that can be chained with `>>`.
///
/// # Type Parameters
///
/// * `F` - The wrapped (possibly composed) function
/// * `A` - The input of the wrapped function
///
/// # Examples
///
/// ```rust
/// use pipekit::composable::Composable;
///
/// let shout = Composable::new(|text: &str| text.to_uppercase()) >> |text: String| text + "!";
/// assert_eq!(shout.call("hey"), "HEY!");
/// ```
pub struct Composable<F, A> {
    function: F,
    input: PhantomData<fn(A)>,
}

impl<F, A> Composable<F, A>
where
    F: Callable<A>,
{
    /// Wraps `function`.
    ///
    /// This is a `const fn`, so a `Composable` of a function pointer can be
    /// stored in a `const` item.
    ///
    /// ```rust
    /// use pipekit::composable::Composable;
    ///
    /// fn double(x: i32) -> i32 { x * 2 }
    ///
    /// const DOUBLE: Composable<fn(i32) -> i32, i32> = Composable::new(double);
    /// assert_eq!((DOUBLE >> DOUBLE).call(3), 12);
    /// ```
    #[inline]
    pub const fn new(function: F) -> Self {
        Self {
            function,
            input: PhantomData,
        }
    }

    /// Joins this function with `other`; this function runs first.
    ///
    /// `other` is wrapped first if it is a plain function. Equivalent to
    /// `self >> other`.
    #[inline]
    pub fn then<G>(self, other: G) -> Composable<Composed<F, G::Function>, A>
    where
        G: IntoComposable<F::Output>,
    {
        let other = other.into_composable();
        Composable::new(Composed::new(self.function, other.function))
    }

    /// Applies the wrapped function to `input`.
    #[inline]
    pub fn call(&self, input: A) -> F::Output {
        self.function.apply(input)
    }

    /// Converts the wrapper into a plain closure.
    #[inline]
    pub fn into_fn(self) -> impl Fn(A) -> F::Output {
        move |input: A| self.function.apply(input)
    }

    /// Consumes the wrapper and returns the wrapped function.
    #[inline]
    pub fn into_inner(self) -> F {
        self.function
    }
}

/// Values that can stand on the right-hand side of `>>`.
///
/// Plain functions are wrapped on the way in; a [`Composable`] is passed
/// through as it is.
pub trait IntoComposable<Input> {
    /// The function the resulting `Composable` wraps.
    type Function: Callable<Input>;

    /// Wraps `self` unless it is already wrapped.
    fn into_composable(self) -> Composable<Self::Function, Input>;
}

impl<F, Input, Output> IntoComposable<Input> for F
where
    F: Fn(Input) -> Output,
{
    type Function = F;

    #[inline]
    fn into_composable(self) -> Composable<F, Input> {
        Composable::new(self)
    }
}

impl<F, Input> IntoComposable<Input> for Composable<F, Input>
where
    F: Callable<Input>,
{
    type Function = F;

    #[inline]
    fn into_composable(self) -> Self {
        self
    }
}

impl<F, A, G> Shr<G> for Composable<F, A>
where
    F: Callable<A>,
    G: IntoComposable<F::Output>,
{
    type Output = Composable<Composed<F, G::Function>, A>;

    #[inline]
    fn shr(self, other: G) -> Self::Output {
        self.then(other)
    }
}

impl<F: Clone, A> Clone for Composable<F, A> {
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
            input: PhantomData,
        }
    }
}

impl<F: Copy, A> Copy for Composable<F, A> {}

impl<F, A> fmt::Debug for Composable<F, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Composable(<function>)")
    }
}

static_assertions::assert_impl_all!(Composable<fn(i32) -> i32, i32>: Copy, Send, Sync);
