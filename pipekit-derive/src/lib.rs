//! Procedural macros for pipekit.
//!
//! # Available Attribute Macros
//!
//! - [`macro@composable`]: Turns a plain function into a `Composable` of the same name
//!
//! # Example
//!
//! ```rust,ignore
//! use pipekit::composable::composable;
//!
//! #[composable]
//! fn add_one(x: i32) -> i32 {
//!     x + 1
//! }
//!
//! fn to_text(x: i32) -> String {
//!     x.to_string()
//! }
//!
//! let composed = add_one >> to_text;
//! assert_eq!(composed.call(2), "3");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod composable;

use proc_macro::TokenStream;

/// Replaces a function definition with a `Composable` constant of the same name.
///
/// The function body is kept as written; the name now refers to a
/// `pipekit::composable::Composable` wrapping it, so it can be chained with
/// `>>` and invoked with `.call(...)`.
///
/// # Input Shape
///
/// - **One parameter** `fn f(x: T) -> R`: the `Composable` takes `T`
/// - **No parameters** `fn f() -> R`: the `Composable` takes `()`
/// - **Several parameters** `fn f(a: T1, b: T2) -> R`: the `Composable` takes `(T1, T2)`
///
/// # Requirements
///
/// The function must be expressible as a function pointer. Generic, `async`,
/// `unsafe`, `extern` and variadic functions, methods with a `self` receiver,
/// and `impl Trait` parameter or return types are rejected.
///
/// # Generated Code
///
/// For `fn add_one(x: i32) -> i32 { x + 1 }`:
///
/// ```rust,ignore
/// #[allow(non_upper_case_globals)]
/// const add_one: ::pipekit::composable::Composable<fn(i32) -> i32, i32> = {
///     fn add_one(x: i32) -> i32 { x + 1 }
///     ::pipekit::composable::Composable::new(add_one as fn(i32) -> i32)
/// };
/// ```
///
/// # Example
///
/// ```rust,ignore
/// use pipekit::composable::{Composable, composable};
///
/// #[composable]
/// fn add(left: i32, right: i32) -> i32 {
///     left + right
/// }
///
/// let doubled_sum = add >> |sum: i32| sum * 2;
/// assert_eq!(doubled_sum.call((3, 4)), 14);
/// ```
#[proc_macro_attribute]
pub fn composable(attribute: TokenStream, item: TokenStream) -> TokenStream {
    composable::composable_impl(attribute.into(), item.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
