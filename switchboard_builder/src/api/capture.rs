use thiserror::Error;

/// Behaviour to capture an explicit generic type T from an input `&str`.
///
/// We use this at the bottom of the command line parser object graph so the compiler can maintain each destination's type.
#[doc(hidden)]
pub trait GenericCapturable<'a, T> {
    /// Declare that the switch has been matched.
    fn matched(&mut self);

    /// Capture a value into the generic type T for this switch.
    fn capture(&mut self, token: &str) -> Result<(), InvalidConversion>;

    /// Whether this switch takes an argument.
    fn takes_argument(&self) -> bool;
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Value \"{token}\" is invalid for this switch.")]
#[doc(hidden)]
pub struct InvalidConversion {
    pub(crate) token: String,
}
