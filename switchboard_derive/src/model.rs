use proc_macro2::TokenStream as TokenStream2;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub struct DeriveValue {
    pub tokens: TokenStream2,
}

impl PartialEq for DeriveValue {
    fn eq(&self, other: &Self) -> bool {
        let st = &self.tokens.to_string();
        let ot = &other.tokens.to_string();
        st == ot
    }
}

impl Eq for DeriveValue {}

/// The `#[switchboard(..)]` attribute, before it is interpreted.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct IntermediateAttributes {
    pub singletons: HashSet<String>,
    pub pairs: HashMap<String, Vec<DeriveValue>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchType {
    Flag,
    Scalar,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveSwitch {
    pub field_name: syn::Ident,
    pub switch_type: SwitchType,
    pub short: Option<DeriveValue>,
    pub argname: Option<DeriveValue>,
    pub converter: Option<DeriveValue>,
    pub default: Option<DeriveValue>,
    pub mandatory: bool,
    pub help: Option<DeriveValue>,
}

/// A struct field is either a switch, or the destination of the standalone parameters.
#[derive(Debug, PartialEq, Eq)]
pub enum DeriveField {
    Switch(DeriveSwitch),
    Standalones(syn::Ident),
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveParser {
    pub struct_name: syn::Ident,
    pub program: DeriveValue,
    pub standalone: Option<DeriveValue>,
    pub label: Option<DeriveValue>,
    pub switches: Vec<DeriveSwitch>,
    pub standalones: Option<syn::Ident>,
}
