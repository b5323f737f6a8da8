use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::model::{DeriveParser, DeriveValue};

impl From<DeriveParser> for TokenStream2 {
    fn from(value: DeriveParser) -> Self {
        let DeriveParser {
            struct_name,
            program,
            standalone,
            label,
            switches,
            standalones,
        } = value;
        let DeriveValue { tokens: program } = program;
        let standalone = match (standalone, label) {
            (None, None) => quote! {},
            (standalone, label) => {
                let bound = standalone.map_or_else(
                    || quote! { ::switchboard::Bound::default() },
                    |DeriveValue { tokens }| tokens,
                );
                let label = label.map_or_else(|| quote! { "" }, |DeriveValue { tokens }| tokens);
                quote! { .standalone(#bound, #label) }
            }
        };
        let switches = switches.iter().map(TokenStream2::from).collect::<Vec<_>>();
        let assign_standalones = match standalones {
            Some(field_name) => quote! { target.#field_name = standalones; },
            None => quote! { let _ = standalones; },
        };

        quote! {
            impl #struct_name {
                pub fn switchboard_parser<'a>(target: &'a mut Self) -> ::switchboard::CommandLineParser<'a> {
                    ::switchboard::CommandLineParser::new(#program)
                        #standalone
                        #( .add(#switches) )*
                }

                pub fn switchboard_parse() -> Self {
                    let mut target = Self::default();
                    let standalones = Self::switchboard_parser(&mut target).build().parse();
                    #assign_standalones
                    target
                }

                pub fn switchboard_parse_tokens(tokens: &[&str]) -> Result<Self, ::switchboard::Error> {
                    let mut target = Self::default();
                    let standalones = Self::switchboard_parser(&mut target)
                        .build_parser()?
                        .parse_tokens(tokens)?;
                    #assign_standalones
                    Ok(target)
                }
            }
        }
    }
}
