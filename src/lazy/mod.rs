//! Lazy, function-carrying pipelines.
//!
//! A lazy pipeline accumulates a composed function and runs nothing until it
//! is invoked. The crate offers two shapes for the "not started yet" state:
//!
//! - [`LazyPipe`]: one sum type with `NotStarted` and `Started` variants.
//!   Extending or invoking a `NotStarted` pipe is a runtime usage error
//!   ([`PipelineError::NotStarted`](crate::error::PipelineError::NotStarted)).
//! - [`PipelineStart`] and [`LazyPipeline`]: two distinct types. The empty
//!   pipeline has no way to be invoked at all, so the misuse cannot compile.
//!
//! # Examples
//!
//! ```rust
//! use pipekit::lazy::{LazyPipe, LazyPipeline, PipelineStart};
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn to_text(x: i32) -> String { x.to_string() }
//!
//! let deferred = LazyPipe::new().start(add_one).then(to_text).unwrap();
//! assert_eq!(deferred.call(2).unwrap(), "3");
//!
//! let started = PipelineStart.then(add_one).then(to_text);
//! assert_eq!(started.call(2), "3");
//!
//! let direct = LazyPipeline::new(add_one).then(to_text);
//! assert_eq!(direct.call(2), "3");
//! ```

mod deferred;
mod started;

pub use deferred::LazyPipe;
pub use started::{LazyPipeline, PipelineStart};
