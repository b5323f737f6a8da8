use std::path::PathBuf;
use std::str::FromStr;

use crate::prelude::{Converter, Value};

// The C locale `isspace` set, vertical tab included.
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

fn trim_spaces(token: &str) -> &str {
    token.trim_matches(is_space)
}

fn signed(token: &str) -> Option<i64> {
    i64::from_str(trim_spaces(token)).ok()
}

fn unsigned(token: &str) -> Option<u64> {
    let trimmed = trim_spaces(token);

    // A leading minus must never wrap around into a large unsigned magnitude.
    if trimmed.starts_with('-') {
        return None;
    }

    u64::from_str(trimmed).ok()
}

impl Value for i64 {
    fn from_token(token: &str) -> Option<Self> {
        signed(token)
    }
}

impl Value for u64 {
    fn from_token(token: &str) -> Option<Self> {
        unsigned(token)
    }
}

macro_rules! narrowing_value {
    ($narrow:ty, $wide:ty, $parse:ident) => {
        impl Value for $narrow {
            fn from_token(token: &str) -> Option<Self> {
                let wide: $wide = $parse(token)?;
                let narrow = wide as $narrow;

                // The narrowed value must round-trip back into the wide value.
                if narrow as $wide == wide {
                    Some(narrow)
                } else {
                    None
                }
            }
        }
    };
}

narrowing_value!(i8, i64, signed);
narrowing_value!(i16, i64, signed);
narrowing_value!(i32, i64, signed);
narrowing_value!(isize, i64, signed);
narrowing_value!(u8, u64, unsigned);
narrowing_value!(u16, u64, unsigned);
narrowing_value!(u32, u64, unsigned);
narrowing_value!(usize, u64, unsigned);

impl Value for f64 {
    fn from_token(token: &str) -> Option<Self> {
        // The entire token (less any leading whitespace) must be consumed.
        f64::from_str(token.trim_start_matches(is_space)).ok()
    }
}

impl Value for f32 {
    fn from_token(token: &str) -> Option<Self> {
        let wide = f64::from_token(token)?;

        if wide <= f32::MIN as f64 || wide >= f32::MAX as f64 {
            None
        } else {
            Some(wide as f32)
        }
    }
}

impl Value for char {
    fn from_token(token: &str) -> Option<Self> {
        let mut chars = token.chars();

        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

impl Value for String {
    fn from_token(token: &str) -> Option<Self> {
        Some(token.to_string())
    }
}

impl Value for PathBuf {
    fn from_token(token: &str) -> Option<Self> {
        Some(PathBuf::from(token))
    }
}

/// The built-in converter: writes [`Value::from_token`] into the destination.
#[derive(Debug, Default, Clone, Copy)]
pub struct Standard;

impl<T: Value> Converter<T> for Standard {
    fn convert(&self, token: &str, target: &mut T) -> bool {
        match T::from_token(token) {
            Some(value) => {
                *target = value;
                true
            }
            None => false,
        }
    }
}

/// A converter which accepts values between `min` and `max` (inclusive).
///
/// ### Example
/// ```
/// # use switchboard_builder as switchboard;
/// use switchboard::{CommandLineParser, Scalar, Switch, Within};
///
/// let mut volume: i32 = 0;
/// let mut clp = CommandLineParser::new("program");
/// clp.register(Switch::new(
///     Scalar::with_converter(&mut volume, Within::new(-100, 100)),
///     "volume",
///     Some('V'),
/// ))
/// .unwrap();
///
/// assert!(clp.parse_tokens(&["-V", "101"]).is_err());
/// clp.parse_tokens(&["-V", "-7"]).unwrap();
/// drop(clp);
/// assert_eq!(volume, -7);
/// ```
#[derive(Debug, Clone)]
pub struct Within<T> {
    min: T,
    max: T,
}

impl<T> Within<T> {
    /// Create a range converter.
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T> Converter<T> for Within<T>
where
    T: Value + PartialOrd,
{
    fn convert(&self, token: &str, target: &mut T) -> bool {
        Standard.convert(token, target) && self.min <= *target && *target <= self.max
    }
}

/// A converter which accepts a single character amongst the candidates.
#[derive(Debug, Clone)]
pub struct OneOf {
    candidates: String,
}

impl OneOf {
    /// Create a character choice converter.
    pub fn new(candidates: impl Into<String>) -> Self {
        Self {
            candidates: candidates.into(),
        }
    }
}

impl Converter<char> for OneOf {
    fn convert(&self, token: &str, target: &mut char) -> bool {
        Standard.convert(token, target) && self.candidates.contains(*target)
    }
}
