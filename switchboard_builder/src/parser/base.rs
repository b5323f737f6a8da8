use thiserror::Error;

use crate::api::InvalidConversion;
use crate::matcher::*;
use crate::model::Bound;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// An invalid command line parser configuration (ex: a repeated switch name).
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

impl From<NameError> for ConfigError {
    fn from(error: NameError) -> Self {
        ConfigError(error.to_string())
    }
}

impl From<IndexError> for ConfigError {
    fn from(error: IndexError) -> Self {
        ConfigError(error.to_string())
    }
}

/// Every problem found while parsing the command line, in the order encountered.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{}", numbered(.0))]
pub struct ParseError(pub(crate) Vec<String>);

impl ParseError {
    /// The individual error messages.
    pub fn messages(&self) -> &[String] {
        &self.0
    }
}

fn numbered(messages: &[String]) -> String {
    match messages {
        [message] => format!("An error found when parsing the command line: {message}"),
        _ => {
            let total = messages.len();
            let mut out = format!("{total} errors found when parsing the command line:");

            for (i, message) in messages.iter().enumerate() {
                out.push_str(&format!("\n({}/{total}) {message}", i + 1));
            }

            out
        }
    }
}

/// Either failure of configuring then parsing a command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The command line parser was incorrectly configured.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The command line did not satisfy the configuration.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Behaviour to capture an implicit generic type T from an input `&str`.
///
/// We use this at the middle/top of the command line parser object graph so that different types may all be 'captured' in a single parser.
pub(crate) trait AnonymousCapturable {
    /// Declare that the switch has been matched.
    fn matched(&mut self);

    /// Capture a value anonymously for this switch.
    fn capture(&mut self, value: &str) -> Result<(), InvalidConversion>;
}

#[cfg(test)]
pub mod test {
    use crate::api::InvalidConversion;
    use crate::parser::AnonymousCapturable;

    pub(crate) struct BlackHole {}

    impl Default for BlackHole {
        fn default() -> Self {
            Self {}
        }
    }

    impl AnonymousCapturable for BlackHole {
        fn matched(&mut self) {
            // Do nothing
        }

        fn capture(&mut self, _value: &str) -> Result<(), InvalidConversion> {
            // Do nothing
            Ok(())
        }
    }
}

/// The switch registry, and the orchestration of parsing against it.
pub(crate) struct Parser<'ap> {
    index: SwitchIndex,
    // We need a (dyn .. [ignoring T] ..) here in order to put all the destinations of varying types T under one collection.
    // In other words, we want the bottom of the object graph to include the types T, but up here we want to work across all T.
    captures: Vec<Box<dyn AnonymousCapturable + 'ap>>,
    mandatory: Vec<usize>,
    standalone: Bound,
}

impl<'ap> std::fmt::Debug for Parser<'ap> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("index", &self.index)
            .field("mandatory", &self.mandatory)
            .field("standalone", &self.standalone)
            .finish()
    }
}

impl<'ap> Default for Parser<'ap> {
    fn default() -> Self {
        Self {
            index: SwitchIndex::default(),
            captures: Vec::default(),
            mandatory: Vec::default(),
            standalone: Bound::default(),
        }
    }
}

impl<'ap> Parser<'ap> {
    /// Register a switch.
    /// On error, the registry is left untouched.
    pub(crate) fn register(
        &mut self,
        config: SwitchConfig,
        mandatory: bool,
        capture: Box<dyn AnonymousCapturable + 'ap>,
    ) -> Result<usize, ConfigError> {
        if mandatory && !config.takes_argument() {
            return Err(ConfigError(format!(
                "Switch \"{}\": switch without an argument cannot be mandatory.",
                config.display()
            )));
        }

        let position = self.index.insert(config)?;
        self.captures.push(capture);

        if mandatory {
            self.mandatory.push(position);
        }

        Ok(position)
    }

    pub(crate) fn set_standalone(&mut self, bound: Bound) -> Result<(), ConfigError> {
        if !bound.is_valid() {
            return Err(ConfigError(format!(
                "Range of acceptable standalone parameters is invalid: {bound}."
            )));
        }

        self.standalone = bound;
        Ok(())
    }

    /// Clear the switches (and mandatory tracking), keeping the standalone bound.
    pub(crate) fn reset(&mut self) {
        self.index.clear();
        self.captures.clear();
        self.mandatory.clear();
    }

    /// Parse the `tokens`, writing the switch values and returning the standalone parameters.
    ///
    /// Parsing happens in two phases:
    /// 1. Scanning aligns the tokens to switches and standalone parameters.
    /// A structurally ambiguous token (ex: an undefined switch) stops the scan, and skips phase #2.
    /// 2. Validation converts each switch value and checks the standalone & mandatory constraints.
    ///
    /// All errors from both phases are reported together.
    pub(crate) fn consume(&mut self, tokens: &[&str]) -> Result<Vec<String>, ParseError> {
        let scan = self.scan(tokens);
        let Scan {
            values,
            flags,
            standalones,
            mut errors,
            complete,
        } = scan;

        for position in flags {
            self.captures[position].matched();
        }

        if complete {
            if !self.standalone.contains(standalones.len()) {
                errors.push(self.standalone.violation(standalones.len()));
            }

            for (position, value) in &values {
                let capture = &mut self.captures[*position];
                capture.matched();

                if let Err(error) = capture.capture(value) {
                    errors.push(format!(
                        "Switch \"{}\": {error}",
                        self.index.get(*position).display()
                    ));
                }
            }

            for position in &self.mandatory {
                if !values.iter().any(|(p, _)| p == position) {
                    errors.push(format!(
                        "Switch \"{}\" is mandatory but not specified.",
                        self.index.get(*position).display()
                    ));
                }
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Parsed {} tokens: complete={complete}, errors={}.",
                tokens.len(),
                errors.len()
            );
        }

        if errors.is_empty() {
            Ok(standalones)
        } else {
            Err(ParseError(errors))
        }
    }

    fn scan(&self, tokens: &[&str]) -> Scan {
        let mut scanner = TokenScanner::new(&self.index);

        for token in tokens {
            if let Err(abort) = scanner.feed(token) {
                return scanner.abort(abort);
            }
        }

        scanner.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{AnonymousCapture, Flag, Scalar};
    use crate::parser::base::test::BlackHole;
    use rstest::rstest;

    fn config(name: &str, short: Option<char>, takes_argument: bool) -> SwitchConfig {
        SwitchConfig::new(name, short, takes_argument).unwrap()
    }

    #[test]
    fn parser_empty() {
        // Setup
        let mut parser = Parser::default();

        // Execute
        let result = parser.consume(&[]).unwrap();

        // Verify
        assert_eq!(result, Vec::<String>::default());
    }

    #[rstest]
    #[case(vec!["--count=5"])]
    #[case(vec!["--count", "5"])]
    #[case(vec!["-c5"])]
    #[case(vec!["-c", "5"])]
    #[case(vec!["-c", " 5 "])]
    fn parser_value(#[case] tokens: Vec<&str>) {
        // Setup
        let mut count: i32 = 0;
        let mut parser = Parser::default();
        parser
            .register(
                config("count", Some('c'), true),
                false,
                Box::new(AnonymousCapture::bind(Scalar::new(&mut count))),
            )
            .unwrap();

        // Execute
        let result = parser.consume(tokens.as_slice()).unwrap();

        // Verify
        assert!(result.is_empty());
        drop(parser);
        assert_eq!(count, 5);
    }

    #[rstest]
    #[case(vec![], false)]
    #[case(vec!["--verbose"], true)]
    #[case(vec!["-v"], true)]
    fn parser_flag(#[case] tokens: Vec<&str>, #[case] expected: bool) {
        // Setup
        let mut verbose = false;
        let mut parser = Parser::default();
        parser
            .register(
                config("verbose", Some('v'), false),
                false,
                Box::new(AnonymousCapture::bind(Flag::new(&mut verbose))),
            )
            .unwrap();

        // Execute
        parser.consume(tokens.as_slice()).unwrap();

        // Verify
        drop(parser);
        assert_eq!(verbose, expected);
    }

    #[test]
    fn parser_mandatory_flag() {
        let mut parser = Parser::default();
        let result = parser.register(
            config("verbose", None, false),
            true,
            Box::new(BlackHole::default()),
        );
        assert_matches!(result, Err(ConfigError(message)) => {
            assert_eq!(message, "Switch \"--verbose\": switch without an argument cannot be mandatory.");
        });

        // Nothing partially applied.
        parser
            .register(
                config("verbose", None, false),
                false,
                Box::new(BlackHole::default()),
            )
            .unwrap();
    }

    #[test]
    fn parser_duplicate() {
        let mut parser = Parser::default();
        parser
            .register(
                config("flag", Some('f'), false),
                false,
                Box::new(BlackHole::default()),
            )
            .unwrap();

        let result = parser.register(
            config("flag", None, true),
            false,
            Box::new(BlackHole::default()),
        );
        assert_matches!(result, Err(ConfigError(message)) => {
            assert_eq!(message, "Switch \"--flag\" is specified twice.");
        });

        let result = parser.register(
            config("other", Some('f'), true),
            true,
            Box::new(BlackHole::default()),
        );
        assert_matches!(result, Err(ConfigError(message)) => {
            assert_eq!(message, "Switch \"-f\" is specified twice.");
        });

        // Neither the failed switches nor their mandatory tracking were applied.
        let error = parser.consume(&["--other", "x"]).unwrap_err();
        assert_eq!(
            error.messages(),
            &["Switch \"--other\" is not defined.".to_string()]
        );
        parser.consume(&[]).unwrap();
    }

    #[rstest]
    #[case(Bound::Range(0, 0))]
    #[case(Bound::Range(1, 1))]
    #[case(Bound::Range(1, 3))]
    #[case(Bound::Lower(0))]
    #[case(Bound::Lower(3))]
    fn parser_standalone(#[case] bound: Bound) {
        let mut parser = Parser::default();
        parser.set_standalone(bound).unwrap();
        assert_eq!(parser.standalone, bound);
    }

    #[test]
    fn parser_standalone_invalid() {
        let mut parser = Parser::default();
        let result = parser.set_standalone(Bound::Range(3, 1));
        assert_matches!(result, Err(ConfigError(message)) => {
            assert_eq!(message, "Range of acceptable standalone parameters is invalid: [3, 1].");
        });
        assert_eq!(parser.standalone, Bound::default());
    }

    #[rstest]
    #[case(vec![], Err("Number of standalone parameters must be between 1 and 3 (specified 0)."))]
    #[case(vec!["a"], Ok(vec!["a"]))]
    #[case(vec!["a", "b", "c"], Ok(vec!["a", "b", "c"]))]
    #[case(vec!["a", "b", "c", "d"], Err("Number of standalone parameters must be between 1 and 3 (specified 4)."))]
    fn parser_standalone_bounds(
        #[case] tokens: Vec<&str>,
        #[case] expected: Result<Vec<&str>, &str>,
    ) {
        let mut parser = Parser::default();
        parser.set_standalone(Bound::Range(1, 3)).unwrap();

        let result = parser.consume(tokens.as_slice());

        match expected {
            Ok(standalones) => assert_eq!(result.unwrap(), standalones),
            Err(message) => assert_eq!(result.unwrap_err().messages(), &[message.to_string()]),
        }
    }

    #[test]
    fn parser_reset() {
        let mut parser = Parser::default();
        parser.set_standalone(Bound::Lower(1)).unwrap();
        parser
            .register(
                config("mode", None, true),
                true,
                Box::new(BlackHole::default()),
            )
            .unwrap();

        parser.reset();

        // The switches and mandatory tracking are cleared.
        assert_eq!(
            parser.consume(&["--mode", "x", "a"]).unwrap_err().messages(),
            &["Switch \"--mode\" is not defined.".to_string()]
        );
        // The standalone bound survives the reset.
        assert_eq!(parser.standalone, Bound::Lower(1));
        assert_eq!(
            parser.consume(&[]).unwrap_err().messages(),
            &["At least 1 standalone parameter is required (specified 0).".to_string()]
        );
        // The names may be registered again.
        parser
            .register(
                config("mode", None, true),
                false,
                Box::new(BlackHole::default()),
            )
            .unwrap();
    }

    #[test]
    fn parser_aggregate() {
        // Setup
        let mut mode: String = String::default();
        let mut size: u16 = 0;
        let mut verbose = false;
        let mut parser = Parser::default();
        parser
            .register(
                config("mode", None, true),
                true,
                Box::new(AnonymousCapture::bind(Scalar::new(&mut mode))),
            )
            .unwrap();
        parser
            .register(
                config("size", Some('s'), true),
                false,
                Box::new(AnonymousCapture::bind(Scalar::new(&mut size))),
            )
            .unwrap();
        parser
            .register(
                config("verbose", Some('v'), false),
                false,
                Box::new(AnonymousCapture::bind(Flag::new(&mut verbose))),
            )
            .unwrap();

        // Execute
        let error = parser
            .consume(&["-v=1", "-s", "100000", "-s", "70000", "extra"])
            .unwrap_err();

        // Verify
        assert_eq!(
            error.messages(),
            &[
                "Switch \"--verbose\" cannot receive a parameter but specified.".to_string(),
                "Switch \"--size\" is specified twice or more.".to_string(),
                "Standalone parameters cannot be accepted (specified 1).".to_string(),
                "Switch \"--size\": Value \"70000\" is invalid for this switch.".to_string(),
                "Switch \"--mode\" is mandatory but not specified.".to_string(),
            ]
        );
        drop(parser);
        assert!(verbose);
        assert_eq!(size, 0);
    }

    #[test]
    fn parser_abort_skips_validation() {
        // Setup
        let mut size: u16 = 0;
        let mut verbose = false;
        let mut parser = Parser::default();
        parser
            .register(
                config("size", None, true),
                true,
                Box::new(AnonymousCapture::bind(Scalar::new(&mut size))),
            )
            .unwrap();
        parser
            .register(
                config("verbose", Some('v'), false),
                false,
                Box::new(AnonymousCapture::bind(Flag::new(&mut verbose))),
            )
            .unwrap();

        // Execute
        let error = parser
            .consume(&["-v", "--size=abc", "extra", "-x", "--verbose"])
            .unwrap_err();

        // Verify
        // No conversion, standalone, or mandatory errors: only the abort.
        assert_eq!(
            error.messages(),
            &["Switch \"-x\" is not defined.".to_string()]
        );
        drop(parser);
        assert!(verbose);
        assert_eq!(size, 0);
    }

    #[test]
    fn parse_error_display() {
        let error = ParseError(vec!["abc".to_string()]);
        assert_eq!(
            error.to_string(),
            "An error found when parsing the command line: abc"
        );

        let error = ParseError(vec!["abc".to_string(), "def".to_string()]);
        assert_eq!(
            error.to_string(),
            "2 errors found when parsing the command line:\n(1/2) abc\n(2/2) def"
        );
    }

    #[test]
    fn config_error_display() {
        let error = ConfigError::from(IndexError::DuplicateShort('f'));
        assert_eq!(
            error.to_string(),
            "Config error: Switch \"-f\" is specified twice."
        );

        let error = Error::from(ConfigError::from(NameError::Empty));
        assert_eq!(error.to_string(), "Config error: Empty switch is not allowed.");
    }
}
