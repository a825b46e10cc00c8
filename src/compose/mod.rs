//! Function composition utilities.
//!
//! This module provides the composition primitive every other module in the
//! crate is built on, and the variadic pipes derived from it.
//!
//! # Overview
//!
//! - [`compose`]: Join two functions, first-then-second
//! - [`Composed`]: The same join as a nameable value
//! - [`Callable`]: The trait both plain functions and [`Composed`] implement
//! - [`pipe!`]: Compose any number of functions left to right, folding from [`identity`]
//! - [`pipe_iterative!`]: The same, starting from the first function
//! - [`pipe_fold`] / [`pipe_iterative`]: Runtime counterparts over boxed functions
//! - [`tupled`]: Forward several arguments to the first stage as one tuple
//!
//! # Examples
//!
//! ## Binary composition
//!
//! ```
//! use pipekit::compose::compose;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // compose(f, g)(x) = g(f(x))
//! let composed = compose(add_one, double);
//! assert_eq!(composed(5), 12);
//! ```
//!
//! ## Variadic pipe
//!
//! ```
//! use pipekit::pipe;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn to_text(x: i32) -> String { x.to_string() }
//! fn text_len(text: String) -> usize { text.len() }
//!
//! let piped = pipe!(add_one, to_text, text_len);
//! assert_eq!(piped(99), 3);
//! ```
//!
//! # Mathematical Background
//!
//! Composition here reads in data-flow order. Given `f: A -> B` and
//! `g: B -> C`, the composition `f ; g : A -> C` is defined as:
//!
//! ```text
//! (f ; g)(x) = g(f(x))
//! ```
//!
//! A pipe of `n` functions is the left fold of `;` over them, starting from
//! the identity function:
//!
//! ```text
//! pipe(f1, ..., fn) = ((identity ; f1) ; f2) ... ; fn
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose(compose(f, g), h) == compose(f, compose(g, h))`
//! - **Left Identity**: `compose(identity, f) == f`
//! - **Right Identity**: `compose(f, identity) == f`
//! - **Empty Pipe**: `pipe!() == identity`

mod callable;
mod pipe_macro;
mod runtime;
mod tupled;
mod utils;

pub use callable::{Callable, Composed, compose};
pub use runtime::{BoxedFn, pipe_fold, pipe_iterative};
pub use tupled::{Tupled, tupled};
pub use utils::identity;

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::pipe;
pub use crate::pipe_iterative;
