use crate::load::{check_known, incompatible_error, last_value, load_attributes};
use crate::model::{DeriveField, DeriveSwitch, SwitchType};
use quote::ToTokens;

const SINGLETONS: &[&str] = &["mandatory", "standalones"];
const PAIRS: &[&str] = &["short", "argname", "converter", "default", "help"];

impl TryFrom<&syn::Field> for DeriveField {
    type Error = syn::Error;

    fn try_from(value: &syn::Field) -> Result<Self, Self::Error> {
        let field_name = match &value.ident {
            Some(ident) => ident.clone(),
            None => {
                return Err(syn::Error::new_spanned(
                    value,
                    "Invalid - switchboard fields must be named.",
                ))
            }
        };
        let attributes = load_attributes(&value.attrs)?;
        check_known(field_name.span(), &attributes, SINGLETONS, PAIRS)?;
        let type_name = last_segment(&value.ty)?;

        if attributes.singletons.contains("standalones") {
            if let Some(key) = attributes.pairs.keys().next() {
                return Err(incompatible_error(
                    &field_name,
                    "#[switchboard(standalones)]",
                    format!("#[switchboard({key} = ..)]"),
                ));
            }

            if attributes.singletons.contains("mandatory") {
                return Err(incompatible_error(
                    &field_name,
                    "#[switchboard(standalones)]",
                    "#[switchboard(mandatory)]",
                ));
            }

            if type_name != "Vec" {
                return Err(syn::Error::new(
                    field_name.span(),
                    "Invalid - `#[switchboard(standalones)]` field must be a `Vec<String>`.",
                ));
            }

            return Ok(DeriveField::Standalones(field_name));
        }

        let mandatory = attributes.singletons.contains("mandatory");
        let argname = last_value(&attributes, "argname");
        let converter = last_value(&attributes, "converter");
        let switch_type = if type_name == "bool" {
            if mandatory {
                return Err(incompatible_error(&field_name, "bool", "#[switchboard(mandatory)]"));
            }

            if argname.is_some() {
                return Err(incompatible_error(
                    &field_name,
                    "bool",
                    "#[switchboard(argname = ..)]",
                ));
            }

            if converter.is_some() {
                return Err(incompatible_error(
                    &field_name,
                    "bool",
                    "#[switchboard(converter = ..)]",
                ));
            }

            SwitchType::Flag
        } else {
            SwitchType::Scalar
        };

        Ok(DeriveField::Switch(DeriveSwitch {
            field_name,
            switch_type,
            short: last_value(&attributes, "short"),
            argname,
            converter,
            default: last_value(&attributes, "default"),
            mandatory,
            help: last_value(&attributes, "help"),
        }))
    }
}

fn last_segment(ty: &syn::Type) -> Result<String, syn::Error> {
    match ty {
        syn::Type::Path(path) => match path.path.segments.last() {
            Some(segment) => Ok(segment.ident.to_string()),
            None => Err(syn::Error::new_spanned(ty, "Invalid - empty field type.")),
        },
        _ => {
            let tts = ty.to_token_stream();
            Err(syn::Error::new_spanned(
                ty,
                format!("Invalid - unsupported field type `{tts}`."),
            ))
        }
    }
}
