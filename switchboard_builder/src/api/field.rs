use crate::api::capture::*;
use crate::api::convert::Standard;
use crate::prelude::{Converter, Value};

/// A switch destination that takes a single argument.
///
/// The argument is converted with the built-in [`Value`] table, or with a custom [`Converter`].
pub struct Scalar<'a, T> {
    variable: &'a mut T,
    converter: Box<dyn Converter<T> + 'a>,
}

impl<'a, T: Value> Scalar<'a, T> {
    /// Create a scalar destination, converted via [`Value`].
    pub fn new(variable: &'a mut T) -> Self {
        Self::with_converter(variable, Standard)
    }
}

impl<'a, T> Scalar<'a, T> {
    /// Create a scalar destination, converted via the custom `converter`.
    ///
    /// ### Example
    /// ```
    /// # use switchboard_builder as switchboard;
    /// use switchboard::{CommandLineParser, Scalar, Switch};
    ///
    /// let mut name: String = String::default();
    /// let mut clp = CommandLineParser::new("program");
    /// clp.register(Switch::new(
    ///     Scalar::with_converter(&mut name, |token: &str, target: &mut String| {
    ///         *target = token.to_uppercase();
    ///         !token.is_empty()
    ///     }),
    ///     "name",
    ///     None,
    /// ))
    /// .unwrap();
    ///
    /// clp.parse_tokens(&["--name=abc"]).unwrap();
    /// drop(clp);
    /// assert_eq!(&name, "ABC");
    /// ```
    pub fn with_converter(variable: &'a mut T, converter: impl Converter<T> + 'a) -> Self {
        Self {
            variable,
            converter: Box::new(converter),
        }
    }

    /// Pre-populate the destination with a default value.
    pub fn default(self, value: T) -> Self {
        let Scalar {
            variable,
            converter,
        } = self;
        *variable = value;
        Self {
            variable,
            converter,
        }
    }
}

impl<'a, T> GenericCapturable<'a, T> for Scalar<'a, T> {
    fn matched(&mut self) {
        // Do nothing.
    }

    fn capture(&mut self, token: &str) -> Result<(), InvalidConversion> {
        if self.converter.convert(token, self.variable) {
            Ok(())
        } else {
            Err(InvalidConversion {
                token: token.to_string(),
            })
        }
    }

    fn takes_argument(&self) -> bool {
        true
    }
}

/// A switch destination that takes no argument; set to `true` when the switch is specified.
pub struct Flag<'a> {
    variable: &'a mut bool,
}

impl<'a> Flag<'a> {
    /// Create a flag destination.
    pub fn new(variable: &'a mut bool) -> Self {
        Self { variable }
    }

    /// Pre-populate the destination with a default value.
    pub fn default(self, value: bool) -> Self {
        *self.variable = value;
        self
    }
}

impl<'a> GenericCapturable<'a, bool> for Flag<'a> {
    fn matched(&mut self) {
        *self.variable = true;
    }

    fn capture(&mut self, _token: &str) -> Result<(), InvalidConversion> {
        unreachable!("internal error - must not capture on a Flag");
    }

    fn takes_argument(&self) -> bool {
        false
    }
}
