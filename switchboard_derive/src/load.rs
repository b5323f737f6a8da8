mod attribute;
mod parser;
mod switch;

use crate::model::{DeriveValue, IntermediateAttributes};

fn incompatible_error(
    field_name: &syn::Ident,
    left: impl Into<String>,
    right: impl Into<String>,
) -> syn::Error {
    syn::Error::new(
        field_name.span(),
        format!(
            "Invalid - field cannot be both `{}` and `{}`.",
            left.into(),
            right.into(),
        ),
    )
}

/// The attributes named `switchboard`, merged in order of appearance.
fn load_attributes(attrs: &[syn::Attribute]) -> Result<IntermediateAttributes, syn::Error> {
    let mut attributes = IntermediateAttributes::default();

    for attribute in attrs {
        if attribute.path().is_ident("switchboard") {
            let IntermediateAttributes { singletons, pairs } =
                IntermediateAttributes::try_from(attribute)?;
            attributes.singletons.extend(singletons);

            for (key, values) in pairs {
                attributes.pairs.entry(key).or_default().extend(values);
            }
        }
    }

    Ok(attributes)
}

/// The value of the pair `key`, where repeats are won by the final value.
fn last_value(attributes: &IntermediateAttributes, key: &str) -> Option<DeriveValue> {
    attributes
        .pairs
        .get(key)
        .and_then(|values| values.last())
        .cloned()
}

fn check_known(
    span: proc_macro2::Span,
    attributes: &IntermediateAttributes,
    singletons: &[&str],
    pairs: &[&str],
) -> Result<(), syn::Error> {
    for singleton in &attributes.singletons {
        if !singletons.contains(&singleton.as_str()) {
            return Err(syn::Error::new(
                span,
                format!("Invalid - unknown attribute `#[switchboard({singleton})]`."),
            ));
        }
    }

    for key in attributes.pairs.keys() {
        if !pairs.contains(&key.as_str()) {
            return Err(syn::Error::new(
                span,
                format!("Invalid - unknown attribute `#[switchboard({key} = ..)]`."),
            ));
        }
    }

    Ok(())
}
