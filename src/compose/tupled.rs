//! Forwarding a whole parameter list to the first stage of a pipeline.
//!
//! Every stage of a composition takes exactly one value. To start a pipeline
//! with a function of several arguments, the arguments travel together as a
//! tuple and are spread back out when the function is called.

/// Functions that can be called with their arguments packed in a tuple.
///
/// Implemented for every `Fn` of arity 0 through 6. The unary case takes a
/// one-element tuple `(A,)`.
pub trait Tupled<Arguments> {
    /// The return type of the function.
    type Output;

    /// Calls the function with the arguments spread out of `arguments`.
    fn call_tupled(&self, arguments: Arguments) -> Self::Output;
}

macro_rules! impl_tupled {
    ($($argument_type:ident $argument:ident),*) => {
        impl<Function, Output, $($argument_type),*> Tupled<($($argument_type,)*)> for Function
        where
            Function: Fn($($argument_type),*) -> Output,
        {
            type Output = Output;

            #[inline]
            #[allow(clippy::unused_unit)]
            fn call_tupled(&self, arguments: ($($argument_type,)*)) -> Output {
                let ($($argument,)*) = arguments;
                self($($argument),*)
            }
        }
    };
}

impl_tupled!();
impl_tupled!(A0 a0);
impl_tupled!(A0 a0, A1 a1);
impl_tupled!(A0 a0, A1 a1, A2 a2);
impl_tupled!(A0 a0, A1 a1, A2 a2, A3 a3);
impl_tupled!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4);
impl_tupled!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5);

/// Adapts a function of several arguments into a function of one tuple.
///
/// The result can be the first stage of any pipeline in this crate; the tuple
/// is forwarded opaquely and only unpacked when the function is called.
///
/// # Examples
///
/// ```
/// use pipekit::compose::{compose, tupled};
///
/// fn describe(name: &str, age: u32) -> String { format!("{name} ({age})") }
/// fn shout(text: String) -> String { text.to_uppercase() }
///
/// let greeting = compose(tupled(describe), shout);
/// assert_eq!(greeting(("ada", 36)), "ADA (36)");
/// ```
///
/// Zero-argument functions take the unit value:
///
/// ```
/// use pipekit::compose::tupled;
///
/// let answer = tupled(|| 42);
/// assert_eq!(answer(()), 42);
/// ```
#[inline]
pub fn tupled<Arguments, F>(function: F) -> impl Fn(Arguments) -> F::Output
where
    F: Tupled<Arguments>,
{
    move |arguments: Arguments| function.call_tupled(arguments)
}
