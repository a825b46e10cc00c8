//! # pipekit
//!
//! Several equivalent ways to chain functions together.
//!
//! ## Overview
//!
//! Every module in this crate expresses the same idea, feeding the output of
//! one function into the next, in a different shape:
//!
//! - **Function Composition**: [`compose`](crate::compose::compose), the
//!   `pipe!` and `pipe_iterative!` macros, and runtime pipes over boxed functions
//! - **Eager Pipelines**: value-carrying wrappers that apply each step immediately,
//!   either in place ([`PipeMut`](crate::eager::PipeMut)) or into a new
//!   wrapper ([`Pipe`](crate::eager::Pipe))
//! - **Lazy Pipelines**: function-carrying wrappers that run the whole chain only
//!   when invoked ([`LazyPipe`](crate::lazy::LazyPipe),
//!   [`LazyPipeline`](crate::lazy::LazyPipeline))
//! - **Composable**: a wrapper joined with `>>`, usable as an attribute on plain
//!   functions
//!
//! ## Feature Flags
//!
//! - `compose`: Binary composition, identity, `pipe!`, runtime pipes
//! - `eager`: Eager pipelines
//! - `lazy`: Lazy pipelines
//! - `composable`: The `>>` wrapper
//! - `derive`: The `#[composable]` attribute
//! - `serde`: Serialization of eager pipelines
//! - `tracing`: Diagnostic events on pipeline misuse
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use pipekit::prelude::*;
//!
//! fn add_one(value: i32) -> i32 { value + 1 }
//! fn to_text(value: i32) -> String { value.to_string() }
//!
//! let composed = pipekit::pipe!(add_one, to_text);
//! assert_eq!(composed(2), "3");
//!
//! let eager = Pipe::new(2).then(add_one).then(to_text);
//! assert_eq!(eager.get(), "3");
//!
//! let lazy = LazyPipeline::new(add_one).then(to_text);
//! assert_eq!(lazy.call(2), "3");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use pipekit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "eager")]
    pub use crate::eager::*;

    #[cfg(feature = "lazy")]
    pub use crate::lazy::*;

    #[cfg(feature = "composable")]
    pub use crate::composable::*;
}

pub mod error;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "eager")]
pub mod eager;

#[cfg(feature = "lazy")]
pub mod lazy;

#[cfg(feature = "composable")]
pub mod composable;
