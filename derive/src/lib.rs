use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod from_compact;

#[proc_macro_derive(FromCompact, attributes(position))]
pub fn derive_from_compact(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match from_compact::expand_from_compact(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error().into(),
    }
}
