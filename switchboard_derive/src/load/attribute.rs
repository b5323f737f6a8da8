use crate::model::{DeriveValue, IntermediateAttributes};
use quote::ToTokens;
use std::collections::{HashMap, HashSet};

impl TryFrom<&syn::Attribute> for IntermediateAttributes {
    type Error = syn::Error;

    fn try_from(value: &syn::Attribute) -> Result<Self, Self::Error> {
        let attributes_parser =
            syn::punctuated::Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated;
        let expressions = value.parse_args_with(attributes_parser)?;
        let mut singletons = HashSet::default();
        let mut pairs: HashMap<String, Vec<DeriveValue>> = HashMap::default();

        for expression in &expressions {
            match expression {
                syn::Expr::Assign(assignment) => {
                    let left = assignment.left.to_token_stream();
                    let values = pairs.entry(left.to_string()).or_default();
                    values.push(DeriveValue {
                        tokens: assignment.right.to_token_stream(),
                    });
                }
                syn::Expr::Path(path) if path.path.get_ident().is_some() => {
                    singletons.insert(path.path.to_token_stream().to_string());
                }
                _ => {
                    let tts = expression.to_token_stream();
                    return Err(syn::Error::new_spanned(
                        expression,
                        format!("Invalid - unparseable attribute `{tts}`."),
                    ));
                }
            };
        }

        Ok(Self { singletons, pairs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::Literal;
    use quote::quote;
    use syn::parse_quote;

    #[test]
    fn construct_attributes_empty() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[switchboard()]
        };

        // Execute
        let attributes = IntermediateAttributes::try_from(&attribute).unwrap();

        // Verify
        assert_eq!(
            attributes,
            IntermediateAttributes {
                singletons: HashSet::default(),
                pairs: HashMap::default()
            }
        );
    }

    #[test]
    fn construct_attributes() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[switchboard(mandatory, help = "123", standalone = Bound::Lower(1))]
        };

        // Execute
        let attributes = IntermediateAttributes::try_from(&attribute).unwrap();

        // Verify
        assert_eq!(
            attributes,
            IntermediateAttributes {
                singletons: HashSet::from(["mandatory".to_string()]),
                pairs: HashMap::from([
                    (
                        "help".to_string(),
                        vec![DeriveValue {
                            tokens: Literal::string("123").into_token_stream(),
                        }]
                    ),
                    (
                        "standalone".to_string(),
                        vec![DeriveValue {
                            tokens: quote! { Bound::Lower(1) },
                        }]
                    ),
                ])
            }
        );
    }

    #[test]
    fn construct_attributes_multiple() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[switchboard(short = 'a', short = 'b')]
        };

        // Execute
        let attributes = IntermediateAttributes::try_from(&attribute).unwrap();

        // Verify
        assert_eq!(
            attributes.pairs.get("short").unwrap(),
            &vec![
                DeriveValue {
                    tokens: Literal::character('a').into_token_stream(),
                },
                DeriveValue {
                    tokens: Literal::character('b').into_token_stream(),
                }
            ]
        );
    }

    #[test]
    fn construct_attributes_invalid() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[switchboard]
        };

        // Execute & verify
        IntermediateAttributes::try_from(&attribute).unwrap_err();
    }

    #[test]
    fn construct_attributes_invalid_expression() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[switchboard(1 + 2)]
        };

        // Execute
        let error = IntermediateAttributes::try_from(&attribute).unwrap_err();

        // Verify
        assert_eq!(error.to_string(), "Invalid - unparseable attribute `1 + 2`.");
    }
}
