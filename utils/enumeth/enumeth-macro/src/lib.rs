#![doc = include_str!("../README.md")]

use crate::enumeration::enumeration2;

mod enumeration;
mod rename;

/// Registers the variants of a fieldless enum as a closed, ordered enumeration.
///
/// See the `enumeth` crate documentations for details.
#[proc_macro_attribute]
pub fn enumeration(
    attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    enumeration2(attr.into(), item.into()).into()
}

fn tokens_to_string(tokens: &proc_macro2::TokenStream) -> String {
    match syn::parse2::<syn::File>(tokens.clone()) {
        Ok(file) => prettyplease::unparse(&file),
        Err(_) => tokens.to_string(),
    }
}
