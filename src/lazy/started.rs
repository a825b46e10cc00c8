//! Lazy pipeline whose first function is supplied up front.
//!
//! The empty pipeline and the started pipeline are separate types. The empty
//! one, [`PipelineStart`], can only be extended; calling it does not compile.
//! The started one, [`LazyPipeline`], carries its chain in its type as nested
//! [`Composed`] values, so no boxing happens and nothing runs until
//! [`call`](LazyPipeline::call).

use std::fmt;
use std::marker::PhantomData;

use crate::compose::{Callable, Composed};

/// The empty lazy pipeline.
///
/// Its only operation is [`then`](PipelineStart::then), which supplies the
/// first function and produces a [`LazyPipeline`].
///
/// An empty pipeline cannot be invoked:
///
/// ```compile_fail
/// use pipekit::lazy::PipelineStart;
///
/// let _ = PipelineStart.call(2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PipelineStart;

impl PipelineStart {
    /// Supplies the first function of the pipeline.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pipekit::lazy::PipelineStart;
    ///
    /// let pipeline = PipelineStart.then(|x: i32| x + 1);
    /// assert_eq!(pipeline.call(1), 2);
    /// ```
    #[inline]
    pub const fn then<F, A>(self, function: F) -> LazyPipeline<F, A>
    where
        F: Callable<A>,
    {
        LazyPipeline::new(function)
    }
}

/// A lazily composed chain of functions taking `A`.
///
/// `then` returns a new pipeline holding the composition of the current chain
/// with the next function. Invoking [`call`](LazyPipeline::call) runs the
/// whole chain; a pipeline can be called any number of times.
///
/// # Type Parameters
///
/// * `F` - The function composed so far
/// * `A` - The input the first function receives
///
/// # Examples
///
/// ```rust
/// use pipekit::lazy::LazyPipeline;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn to_text(x: i32) -> String { x.to_string() }
/// fn text_len(text: String) -> usize { text.len() }
///
/// let pipeline = LazyPipeline::new(add_one).then(to_text).then(text_len);
/// assert_eq!(pipeline.call(2), 1);
/// assert_eq!(pipeline.call(99), 3);
/// ```
///
/// A multi-argument first stage receives its arguments as one tuple:
///
/// ```rust
/// use pipekit::compose::tupled;
/// use pipekit::lazy::LazyPipeline;
///
/// fn add(left: i32, right: i32) -> i32 { left + right }
///
/// let pipeline = LazyPipeline::new(tupled(add)).then(|sum: i32| sum * 2);
/// assert_eq!(pipeline.call((3, 4)), 14);
/// ```
pub struct LazyPipeline<F, A> {
    function: F,
    input: PhantomData<fn(A)>,
}

impl<F, A> LazyPipeline<F, A>
where
    F: Callable<A>,
{
    /// Starts a pipeline with `function` as its first stage.
    #[inline]
    pub const fn new(function: F) -> Self {
        Self {
            function,
            input: PhantomData,
        }
    }

    /// Returns a new pipeline that runs the current chain and then `function`.
    #[inline]
    pub fn then<G, C>(self, function: G) -> LazyPipeline<Composed<F, G>, A>
    where
        G: Fn(F::Output) -> C,
    {
        LazyPipeline::new(Composed::new(self.function, function))
    }

    /// Runs the chain on `input`.
    #[inline]
    pub fn call(&self, input: A) -> F::Output {
        self.function.apply(input)
    }

    /// Converts the pipeline into a plain closure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pipekit::lazy::LazyPipeline;
    ///
    /// let pipeline = LazyPipeline::new(|x: i32| x * 3).then(|x: i32| x - 1);
    /// let values: Vec<i32> = (1..=3).map(pipeline.into_fn()).collect();
    /// assert_eq!(values, vec![2, 5, 8]);
    /// ```
    #[inline]
    pub fn into_fn(self) -> impl Fn(A) -> F::Output {
        move |input: A| self.function.apply(input)
    }

    /// Consumes the pipeline and returns the composed function.
    #[inline]
    pub fn into_inner(self) -> F {
        self.function
    }
}

impl<F: Clone, A> Clone for LazyPipeline<F, A> {
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
            input: PhantomData,
        }
    }
}

impl<F, A> fmt::Debug for LazyPipeline<F, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("LazyPipeline(<function>)")
    }
}
