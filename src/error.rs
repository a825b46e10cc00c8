//! Error types for pipeline misuse.
//!
//! Composition itself never fails: errors raised by user functions travel
//! through a pipeline untouched. The only error this crate produces is a usage
//! error, raised when a lazy pipeline is extended or invoked before it has
//! been started.

/// Represents errors produced by the pipeline wrappers themselves.
///
/// # Examples
///
/// ```rust
/// use pipekit::error::PipelineError;
///
/// let error = PipelineError::NotStarted { operation: "call" };
/// assert_eq!(
///     format!("{error}"),
///     "LazyPipe::call: pipeline not started. Call `start` first."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// A lazy pipeline was used before any function was supplied with `start`.
    NotStarted {
        /// The name of the rejected operation (`"then"` or `"call"`).
        operation: &'static str,
    },
}

impl PipelineError {
    /// Returns the name of the operation that was rejected.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::NotStarted { operation } => *operation,
        }
    }
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotStarted { operation } => write!(
                formatter,
                "LazyPipe::{operation}: pipeline not started. Call `start` first."
            ),
        }
    }
}

impl std::error::Error for PipelineError {}
