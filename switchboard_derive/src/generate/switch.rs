use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;

use crate::model::{DeriveSwitch, DeriveValue, SwitchType};

impl From<&DeriveSwitch> for TokenStream2 {
    fn from(value: &DeriveSwitch) -> Self {
        let DeriveSwitch {
            field_name,
            switch_type,
            short,
            argname,
            converter,
            default,
            mandatory,
            help,
        } = value;
        let name = field_name.unraw().to_string();
        let short = flatten(short);

        let field = match (switch_type, converter) {
            (SwitchType::Flag, _) => quote! {
                ::switchboard::Flag::new(&mut target.#field_name)
            },
            (SwitchType::Scalar, None) => quote! {
                ::switchboard::Scalar::new(&mut target.#field_name)
            },
            (SwitchType::Scalar, Some(DeriveValue { tokens })) => quote! {
                ::switchboard::Scalar::with_converter(&mut target.#field_name, #tokens)
            },
        };
        let field = match default {
            Some(DeriveValue { tokens }) => quote! { #field.default(#tokens) },
            None => field,
        };

        let mut switch = quote! {
            ::switchboard::Switch::new(#field, #name, #short)
        };

        if let Some(DeriveValue { tokens }) = argname {
            switch = quote! { #switch.argname(#tokens) };
        }

        if *mandatory {
            switch = quote! { #switch.mandatory() };
        }

        if let Some(DeriveValue { tokens }) = help {
            switch = quote! { #switch.help(#tokens) };
        }

        switch
    }
}

fn flatten(value: &Option<DeriveValue>) -> TokenStream2 {
    value.as_ref().map_or_else(
        || quote! { None },
        |DeriveValue { tokens }| quote! { Some(#tokens) },
    )
}
