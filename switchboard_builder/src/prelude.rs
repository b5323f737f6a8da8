//! Traits which, typically, may be imported without concern: `use switchboard::prelude::*`.

/// Behaviour to convert a raw command line token into a value of this type.
///
/// This is the built-in conversion table used by [`Scalar::new`](crate::Scalar::new).
// Needs to be imported in order to implement a custom `Value`.
pub trait Value: Sized {
    /// Convert the `token`, or `None` if it is not a valid representation of this type.
    fn from_token(token: &str) -> Option<Self>;
}

/// Behaviour to convert a raw command line token into a destination `T`.
///
/// Returning `false` rejects the token.
/// The destination may already have been (partially) written when a token is rejected.
// Needs to be imported in order to implement a custom `Converter`.
pub trait Converter<T> {
    fn convert(&self, token: &str, target: &mut T) -> bool;
}

impl<T, F> Converter<T> for F
where
    F: Fn(&str, &mut T) -> bool,
{
    fn convert(&self, token: &str, target: &mut T) -> bool {
        self(token, target)
    }
}
