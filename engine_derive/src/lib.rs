//! Derive macros for the engine's reflection layer

mod attributes;
mod enum_generator;
mod inspectable_generator;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derive macro for the `Inspectable` trait
///
/// Builds the per-type property table at compile time. Field attributes:
/// `#[inspect(group = "..", order = N, hidden_if = "path", transient, read_only,
/// skip, flatten, revision)]`; struct attributes: `#[inspect(name = "..",
/// actions(method, ..))]`.
#[proc_macro_derive(Inspectable, attributes(inspect))]
pub fn derive_inspectable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    inspectable_generator::generate_inspectable_impl(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derive macro for fixed enumerations edited through a combo box
#[proc_macro_derive(InspectEnum, attributes(inspect))]
pub fn derive_inspect_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    enum_generator::generate_enum_impl(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
