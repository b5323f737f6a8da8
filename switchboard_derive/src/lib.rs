extern crate proc_macro;

mod generate;
mod load;
mod model;

use crate::model::DeriveParser;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

/// Derive a switch based command line parser from a struct.
///
/// Generates the associated functions `switchboard_parser`, `switchboard_parse` and `switchboard_parse_tokens`.
/// See the `switchboard::derive` module documentation for details.
#[proc_macro_derive(SwitchboardParser, attributes(switchboard))]
pub fn switchboard_parser(input: TokenStream) -> TokenStream {
    // https://doc.rust-lang.org/book/ch19-06-macros.html
    let ast = syn::parse_macro_input!(input as syn::DeriveInput);

    match DeriveParser::try_from(ast) {
        Ok(parser) => TokenStream2::from(parser).into(),
        Err(error) => error.to_compile_error().into(),
    }
}
