mod capture;
mod convert;
mod core;
mod field;
mod switch;

pub use self::capture::*;
pub use self::convert::*;
pub use self::core::*;
pub use self::field::*;
pub use self::switch::*;
