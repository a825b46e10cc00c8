//! Implementation of the `#[composable]` attribute macro.
//!
//! # Generated Code Structure
//!
//! The original function moves into the initializer block of a `const` with
//! the same name and visibility. Inside the block the function name still
//! refers to the function itself, so recursive calls keep working.
//!
//! ## Single Parameter
//!
//! ```text
//! #[allow(non_upper_case_globals)]
//! const name: Composable<fn(T) -> R, T> = {
//!     fn name(x: T) -> R { body }
//!     Composable::new(name as fn(T) -> R)
//! };
//! ```
//!
//! ## Zero or Several Parameters
//!
//! The parameters are packed into one tuple by a non-capturing closure that
//! coerces to a function pointer:
//!
//! ```text
//! #[allow(non_upper_case_globals)]
//! const name: Composable<fn((T1, T2)) -> R, (T1, T2)> = {
//!     fn name(a: T1, b: T2) -> R { body }
//!     let __pipekit_function: fn((T1, T2)) -> R =
//!         |(__pipekit_argument_0, __pipekit_argument_1)| name(__pipekit_argument_0, __pipekit_argument_1);
//!     Composable::new(__pipekit_function)
//! };
//! ```

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::spanned::Spanned;
use syn::{Attribute, FnArg, ItemFn, ReturnType, Signature, Type};

pub fn composable_impl(attribute: TokenStream2, item: TokenStream2) -> syn::Result<TokenStream2> {
    if !attribute.is_empty() {
        return Err(syn::Error::new(
            attribute.span(),
            "#[composable] does not take arguments",
        ));
    }

    let function: ItemFn = syn::parse2(item)?;
    validate_signature(&function.sig)?;

    let parameter_types = parameter_types(&function.sig)?;
    let output_type = match &function.sig.output {
        ReturnType::Default => quote! { () },
        ReturnType::Type(_, output_type) => quote! { #output_type },
    };

    let input_type = match parameter_types.as_slice() {
        [single] => quote! { #single },
        types => quote! { (#(#types,)*) },
    };

    let name = &function.sig.ident;
    let visibility = &function.vis;
    let (documentation, attributes): (Vec<&Attribute>, Vec<&Attribute>) = function
        .attrs
        .iter()
        .partition(|attribute| attribute.path().is_ident("doc"));
    let signature = &function.sig;
    let block = &function.block;

    let function_pointer = quote! { fn(#input_type) -> #output_type };

    let wrapped = if parameter_types.len() == 1 {
        quote! { #name as #function_pointer }
    } else {
        let arguments: Vec<_> = (0..parameter_types.len())
            .map(|index| format_ident!("__pipekit_argument_{}", index))
            .collect();
        quote! {{
            let __pipekit_function: #function_pointer =
                |(#(#arguments,)*)| #name(#(#arguments),*);
            __pipekit_function
        }}
    };

    Ok(quote! {
        #(#documentation)*
        #[allow(non_upper_case_globals)]
        #visibility const #name: ::pipekit::composable::Composable<#function_pointer, #input_type> = {
            #(#attributes)*
            #signature #block

            ::pipekit::composable::Composable::new(#wrapped)
        };
    })
}

fn validate_signature(signature: &Signature) -> syn::Result<()> {
    let rejection = if !signature.generics.params.is_empty() || signature.generics.where_clause.is_some() {
        Some((signature.generics.span(), "#[composable] does not support generic functions"))
    } else if let Some(asyncness) = &signature.asyncness {
        Some((asyncness.span(), "#[composable] does not support async functions"))
    } else if let Some(unsafety) = &signature.unsafety {
        Some((unsafety.span(), "#[composable] does not support unsafe functions"))
    } else if let Some(abi) = &signature.abi {
        Some((abi.span(), "#[composable] does not support extern functions"))
    } else if let Some(variadic) = &signature.variadic {
        Some((variadic.span(), "#[composable] does not support variadic functions"))
    } else if let ReturnType::Type(_, output_type) = &signature.output
        && matches!(**output_type, Type::ImplTrait(_))
    {
        Some((output_type.span(), "#[composable] does not support `impl Trait` return types"))
    } else {
        None
    };

    match rejection {
        Some((span, message)) => Err(syn::Error::new(span, message)),
        None => Ok(()),
    }
}

fn parameter_types(signature: &Signature) -> syn::Result<Vec<&Type>> {
    signature
        .inputs
        .iter()
        .map(|input| match input {
            FnArg::Receiver(receiver) => Err(syn::Error::new(
                receiver.span(),
                "#[composable] does not support methods with a `self` receiver",
            )),
            FnArg::Typed(pattern) => match &*pattern.ty {
                Type::ImplTrait(_) => Err(syn::Error::new(
                    pattern.ty.span(),
                    "#[composable] does not support `impl Trait` parameters",
                )),
                parameter_type => Ok(parameter_type),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn expand(item: TokenStream2) -> syn::Result<String> {
        composable_impl(TokenStream2::new(), item).map(|tokens| tokens.to_string())
    }

    #[rstest]
    fn test_single_parameter_casts_to_function_pointer() {
        let expanded = expand(quote! {
            fn add_one(x: i32) -> i32 { x + 1 }
        })
        .unwrap();

        assert!(expanded.contains("const add_one"));
        assert!(expanded.contains("add_one as fn (i32) -> i32"));
        assert!(!expanded.contains("__pipekit_argument_0"));
    }

    #[rstest]
    fn test_several_parameters_take_a_tuple() {
        let expanded = expand(quote! {
            pub fn add(left: i32, right: i32) -> i32 { left + right }
        })
        .unwrap();

        assert!(expanded.contains("pub const add"));
        assert!(expanded.contains("fn ((i32 , i32 ,)) -> i32"));
        assert!(expanded.contains("__pipekit_argument_1"));
    }

    #[rstest]
    fn test_no_parameters_take_unit() {
        let expanded = expand(quote! {
            fn answer() -> u8 { 42 }
        })
        .unwrap();

        assert!(expanded.contains("fn (()) -> u8"));
    }

    #[rstest]
    fn test_missing_return_type_is_unit() {
        let expanded = expand(quote! {
            fn ignore(_value: i32) {}
        })
        .unwrap();

        assert!(expanded.contains("fn (i32) -> ()"));
    }

    #[rstest]
    fn test_doc_comments_move_to_the_constant() {
        let expanded = expand(quote! {
            /// Adds one.
            #[inline]
            fn add_one(x: i32) -> i32 { x + 1 }
        })
        .unwrap();

        let documentation = expanded.find("doc").unwrap();
        let constant = expanded.find("const add_one").unwrap();
        let inline = expanded.find("inline").unwrap();
        assert!(documentation < constant);
        assert!(constant < inline);
    }

    #[rstest]
    #[case::generic(quote! { fn convert<T>(value: T) -> T { value } }, "generic")]
    #[case::asynchronous(quote! { async fn fetch(value: i32) -> i32 { value } }, "async")]
    #[case::unsafe_function(quote! { unsafe fn raw(value: i32) -> i32 { value } }, "unsafe")]
    #[case::external(quote! { extern "C" fn external(value: i32) -> i32 { value } }, "extern")]
    #[case::receiver(quote! { fn method(&self) -> i32 { 1 } }, "self")]
    #[case::impl_parameter(quote! { fn show(value: impl Copy) {} }, "impl Trait")]
    #[case::impl_return(quote! { fn make() -> impl Copy { 1 } }, "impl Trait")]
    fn test_unsupported_signatures_are_rejected(#[case] item: TokenStream2, #[case] fragment: &str) {
        let error = expand(item).unwrap_err();
        assert!(error.to_string().contains(fragment), "{error}");
    }

    #[rstest]
    fn test_arguments_are_rejected() {
        let error = composable_impl(quote! { eager }, quote! { fn f(x: i32) -> i32 { x } }).unwrap_err();
        assert!(error.to_string().contains("does not take arguments"));
    }
}
