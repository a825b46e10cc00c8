//! Lazy pipeline with an explicit start step.
//!
//! [`LazyPipe`] models the unstarted state as a variant of its own. Every
//! operation returns a new pipe; stored functions are shared between a pipe
//! and the pipes derived from it through `Rc`, so deriving never copies a
//! chain and never disturbs the receiver.

use std::fmt;
use std::rc::Rc;

use crate::compose::compose;
use crate::error::PipelineError;

/// A lazily composed function from `A` to `B` that must be started first.
///
/// # State Transitions
///
/// ```text
/// NotStarted --start(f)--> Started(f)
/// Started(f) --start(g)--> Started(g)
/// Started(f) --then(g)---> Started(f ; g)
/// NotStarted --then(g)---> Err(NotStarted { operation: "then" })
/// NotStarted --call(x)---> Err(NotStarted { operation: "call" })
/// ```
///
/// A started pipe can be invoked any number of times and keeps accepting
/// `then`.
///
/// # Thread Safety
///
/// This type is NOT thread-safe: the stored function is shared through `Rc`.
///
/// # Examples
///
/// ```rust
/// use pipekit::lazy::LazyPipe;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn to_text(x: i32) -> String { x.to_string() }
/// fn text_len(text: String) -> usize { text.len() }
///
/// let pipeline = LazyPipe::new()
///     .start(add_one)
///     .then(to_text)
///     .and_then(|pipe| pipe.then(text_len))
///     .unwrap();
///
/// assert_eq!(pipeline.call(2).unwrap(), 1);
/// assert_eq!(pipeline.call(99).unwrap(), 3);
/// ```
///
/// Using a pipe before `start` is a usage error:
///
/// ```rust
/// use pipekit::error::PipelineError;
/// use pipekit::lazy::LazyPipe;
///
/// let empty: LazyPipe<i32, i32> = LazyPipe::new();
/// assert_eq!(empty.call(1), Err(PipelineError::NotStarted { operation: "call" }));
/// ```
pub enum LazyPipe<A, B> {
    /// No function has been supplied yet.
    NotStarted,
    /// The pipe holds the function composed so far.
    Started(Rc<dyn Fn(A) -> B>),
}

impl<A, B> LazyPipe<A, B> {
    /// Creates a pipe in the `NotStarted` state.
    #[inline]
    pub const fn new() -> Self {
        Self::NotStarted
    }

    /// Returns a new started pipe holding `function`.
    ///
    /// Valid from either state. The receiver is not modified, and any chain it
    /// held is not carried over.
    pub fn start<F>(&self, function: F) -> Self
    where
        F: Fn(A) -> B + 'static,
    {
        #[cfg(feature = "tracing")]
        tracing::trace!(restarted = self.is_started(), "lazy pipeline started");

        Self::Started(Rc::new(function))
    }

    /// Returns a new pipe that runs the current chain and then `function`.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::NotStarted`] if the pipe has not been started.
    pub fn then<C, G>(&self, function: G) -> Result<LazyPipe<A, C>, PipelineError>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        G: Fn(B) -> C + 'static,
    {
        match self {
            Self::Started(current) => {
                let current = Rc::clone(current);
                Ok(LazyPipe::Started(Rc::new(compose(
                    move |input| current(input),
                    function,
                ))))
            }
            Self::NotStarted => Err(not_started("then")),
        }
    }

    /// Runs the composed chain on `input`.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::NotStarted`] if the pipe has not been started.
    pub fn call(&self, input: A) -> Result<B, PipelineError> {
        match self {
            Self::Started(function) => Ok(function(input)),
            Self::NotStarted => Err(not_started("call")),
        }
    }

    /// Returns `true` if a function has been supplied with `start`.
    #[inline]
    pub const fn is_started(&self) -> bool {
        matches!(self, Self::Started(_))
    }
}

fn not_started(operation: &'static str) -> PipelineError {
    #[cfg(feature = "tracing")]
    tracing::warn!(operation, "lazy pipeline used before start");

    PipelineError::NotStarted { operation }
}

impl<A, B> Default for LazyPipe<A, B> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<A, B> Clone for LazyPipe<A, B> {
    fn clone(&self) -> Self {
        match self {
            Self::NotStarted => Self::NotStarted,
            Self::Started(function) => Self::Started(Rc::clone(function)),
        }
    }
}

impl<A, B> fmt::Debug for LazyPipe<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => formatter.write_str("LazyPipe::NotStarted"),
            Self::Started(_) => formatter.write_str("LazyPipe::Started(<function>)"),
        }
    }
}

static_assertions::assert_not_impl_any!(LazyPipe<i32, i32>: Send, Sync);
