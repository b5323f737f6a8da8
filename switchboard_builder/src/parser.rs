mod base;
mod interface;
mod printer;

pub use self::base::{ConfigError, Error, ParseError};
pub(crate) use self::base::{AnonymousCapturable, Parser};
pub(crate) use self::interface::*;
pub(crate) use self::printer::*;
