use crate::load::{check_known, last_value, load_attributes};
use crate::model::{DeriveField, DeriveParser, DeriveValue};
use quote::quote;

const SINGLETONS: &[&str] = &[];
const PAIRS: &[&str] = &["program", "standalone", "label"];

impl TryFrom<syn::DeriveInput> for DeriveParser {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let attributes = load_attributes(&value.attrs)?;
        check_known(value.ident.span(), &attributes, SINGLETONS, PAIRS)?;
        let program = last_value(&attributes, "program").unwrap_or_else(|| DeriveValue {
            tokens: quote! { env!("CARGO_CRATE_NAME") },
        });
        let parser_name = &value.ident;

        let fields = match &value.data {
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Named(fields),
                ..
            }) => fields
                .named
                .iter()
                .map(DeriveField::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Unit,
                ..
            }) => Vec::default(),
            _ => {
                return Err(syn::Error::new(
                    parser_name.span(),
                    "Invalid - SwitchboardParser requires a struct with named fields.",
                ));
            }
        };

        let mut switches = Vec::default();
        let mut standalones: Option<syn::Ident> = None;

        for field in fields {
            match field {
                DeriveField::Switch(switch) => switches.push(switch),
                DeriveField::Standalones(field_name) => {
                    if let Some(previous) = standalones.replace(field_name) {
                        return Err(syn::Error::new(
                            previous.span(),
                            "Invalid - parser cannot have multiple `#[switchboard(standalones)]` fields.",
                        ));
                    }
                }
            }
        }

        Ok(DeriveParser {
            struct_name: parser_name.clone(),
            program,
            standalone: last_value(&attributes, "standalone"),
            label: last_value(&attributes, "label"),
            switches,
            standalones,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DeriveSwitch, SwitchType};
    use proc_macro2::{Literal, Span};
    use quote::ToTokens;

    #[test]
    fn construct_derive_parser_empty() {
        // Setup
        let input: syn::DeriveInput = syn::parse_str(
            r#"
                #[derive(Default, SwitchboardParser)]
                struct Parameters { }
            "#,
        )
        .unwrap();

        // Execute
        let derive_parser = DeriveParser::try_from(input).unwrap();

        // Verify
        assert_eq!(
            derive_parser,
            DeriveParser {
                struct_name: ident("Parameters"),
                program: DeriveValue {
                    tokens: quote! { env!("CARGO_CRATE_NAME") }
                },
                standalone: None,
                label: None,
                switches: Vec::default(),
                standalones: None,
            }
        );
    }

    #[test]
    fn construct_derive_parser() {
        // Setup
        let input: syn::DeriveInput = syn::parse_str(
            r#"
                #[derive(Default, SwitchboardParser)]
                #[switchboard(program = "abc", standalone = Bound::Lower(1), label = "[FILES...]")]
                struct Parameters {
                    #[switchboard(mandatory)]
                    mode: String,
                    #[switchboard(standalones)]
                    files: Vec<String>,
                    verbose: bool,
                }
            "#,
        )
        .unwrap();

        // Execute
        let derive_parser = DeriveParser::try_from(input).unwrap();

        // Verify
        assert_eq!(
            derive_parser,
            DeriveParser {
                struct_name: ident("Parameters"),
                program: DeriveValue {
                    tokens: Literal::string("abc").into_token_stream()
                },
                standalone: Some(DeriveValue {
                    tokens: quote! { Bound::Lower(1) }
                }),
                label: Some(DeriveValue {
                    tokens: Literal::string("[FILES...]").into_token_stream()
                }),
                switches: vec![
                    DeriveSwitch {
                        field_name: ident("mode"),
                        switch_type: SwitchType::Scalar,
                        short: None,
                        argname: None,
                        converter: None,
                        default: None,
                        mandatory: true,
                        help: None,
                    },
                    DeriveSwitch {
                        field_name: ident("verbose"),
                        switch_type: SwitchType::Flag,
                        short: None,
                        argname: None,
                        converter: None,
                        default: None,
                        mandatory: false,
                        help: None,
                    },
                ],
                standalones: Some(ident("files")),
            }
        );
    }

    #[test]
    fn construct_derive_parser_multiple_standalones() {
        // Setup
        let input: syn::DeriveInput = syn::parse_str(
            r#"
                #[derive(Default, SwitchboardParser)]
                struct Parameters {
                    #[switchboard(standalones)]
                    apple: Vec<String>,
                    #[switchboard(standalones)]
                    banana: Vec<String>,
                }
            "#,
        )
        .unwrap();

        // Execute
        let error = DeriveParser::try_from(input).unwrap_err();

        // Verify
        assert_eq!(
            error.to_string(),
            "Invalid - parser cannot have multiple `#[switchboard(standalones)]` fields."
        );
    }

    #[test]
    fn construct_derive_parser_unknown_attribute() {
        let input: syn::DeriveInput = syn::parse_str(
            r#"
                #[derive(Default, SwitchboardParser)]
                #[switchboard(about = "abc")]
                struct Parameters { }
            "#,
        )
        .unwrap();

        let error = DeriveParser::try_from(input).unwrap_err();

        assert_eq!(
            error.to_string(),
            "Invalid - unknown attribute `#[switchboard(about = ..)]`."
        );
    }

    #[test]
    fn construct_derive_parser_not_named() {
        let input: syn::DeriveInput = syn::parse_str(
            r#"
                #[derive(Default, SwitchboardParser)]
                struct Parameters(usize);
            "#,
        )
        .unwrap();

        let error = DeriveParser::try_from(input).unwrap_err();

        assert_eq!(
            error.to_string(),
            "Invalid - SwitchboardParser requires a struct with named fields."
        );
    }

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }
}
