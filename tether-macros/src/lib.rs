//! Proc-Macros for the tether dependency injection container
//!

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod di;

/// Derives the `Injectable` trait from the fields marked with `#[inject]`
///
/// Each marked field is assigned through `FromContainer` during the field pass,
/// so its type decides how a missing dependency is treated:
/// `Option<Arc<T>>` becomes `None`, while `Arc<T>` fails the injection.
///
/// If the type also has an [`macro@inject_methods`] block, its marked methods run
/// during the method pass. Without one the method pass does nothing.
///
/// # Example
/// ```ignore
/// use std::sync::Arc;
/// use tether::Injectable;
///
/// #[derive(Default, Injectable)]
/// struct Widget {
///     #[inject]
///     logger: Option<Arc<Logger>>,
///     #[inject]
///     settings: Option<Arc<Settings>>,
///     title: String,
/// }
/// ```
///
/// # Errors
/// This macro will fail to compile if:
/// - The input is not a struct
/// - `#[inject]` carries arguments
#[proc_macro_derive(Injectable, attributes(inject))]
pub fn derive_injectable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    di::expand_injectable(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Attribute macro for an inherent `impl` block that turns the methods
/// marked with `#[inject]` into injection methods.
///
/// Every parameter of a marked method is resolved through `FromContainer`.
/// Methods are called in the order they appear in the block and may return
/// either `()` or `Result<(), tether::error::Error>`.
///
/// A derived `Injectable` on the same type picks the table up on its own.
/// Hand-written `Injectable` impls call `MethodInjection::invoke_injection_methods`
/// from their `inject_methods`.
///
/// # Example
/// ```ignore
/// use std::sync::Arc;
/// use tether::{Injectable, inject_methods};
///
/// #[derive(Default, Injectable)]
/// struct Widget {
///     logger: Option<Arc<Logger>>,
/// }
///
/// #[inject_methods]
/// impl Widget {
///     #[inject]
///     fn set_logger(&mut self, logger: Option<Arc<Logger>>) {
///         self.logger = logger;
///     }
/// }
/// ```
///
/// # Errors
/// This macro will fail to compile if:
/// - The block implements a trait
/// - A marked method has no `&self`/`&mut self` receiver
/// - A marked method is `async` or generic over types
#[proc_macro_attribute]
pub fn inject_methods(attr: TokenStream, item: TokenStream) -> TokenStream {
    parse_macro_input!(attr as syn::parse::Nothing);
    let mut input = parse_macro_input!(item as syn::ItemImpl);
    di::expand_inject_methods(&mut input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
