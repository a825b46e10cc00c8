//! Eager, value-carrying pipelines.
//!
//! An eager pipeline wraps a value and applies each step the moment it is
//! added. Two variants exist because their aliasing behaviour differs:
//!
//! - [`Pipe`]: every step returns a new wrapper and leaves the receiver as it
//!   was, so one prefix can be extended in several directions
//! - [`PipeMut`]: every step overwrites the value held by the receiver and
//!   hands the same wrapper back
//!
//! # Examples
//!
//! ```rust
//! use pipekit::eager::{Pipe, PipeMut};
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//!
//! let original = Pipe::new(2);
//! let extended = original.then(add_one);
//! assert_eq!(*original.get(), 2); // Original unchanged
//! assert_eq!(*extended.get(), 3); // New version
//!
//! let mut in_place = PipeMut::new(2);
//! in_place.then(add_one);
//! assert_eq!(*in_place.get(), 3); // Same wrapper, new value
//! ```

mod pipe;
mod pipe_mut;

pub use pipe::Pipe;
pub use pipe_mut::PipeMut;
