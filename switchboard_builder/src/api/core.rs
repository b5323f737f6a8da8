use std::env;

use crate::api::Switch;
use crate::constant::DEFAULT_TAB_WIDTH;
use crate::model::Bound;
use crate::parser::{ConfigError, ConsoleInterface, ParseError, Parser, Printer, UserInterface};

/// The command line parser.
///
/// ### Example
/// ```
/// # use switchboard_builder as switchboard;
/// use switchboard::{Bound, CommandLineParser, Flag, Scalar, Switch};
///
/// let mut mode: String = String::default();
/// let mut verbose: bool = false;
/// let mut clp = CommandLineParser::new("program")
///     .add(Switch::new(Scalar::new(&mut mode), "mode", None).mandatory())
///     .add(Switch::new(Flag::new(&mut verbose), "verbose", Some('v')))
///     .standalone(Bound::Lower(1), "FILE [...]")
///     .build();
///
/// let files = clp.parse_tokens(&["--mode=fast", "-v", "file1.txt"]).unwrap();
/// drop(clp);
///
/// assert_eq!(&mode, "fast");
/// assert!(verbose);
/// assert_eq!(files, vec!["file1.txt"]);
/// ```
pub struct CommandLineParser<'a> {
    parser: Parser<'a>,
    printer: Printer,
    user_interface: Box<dyn UserInterface>,
    deferred_error: Option<ConfigError>,
}

impl<'a> std::fmt::Debug for CommandLineParser<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandLineParser")
            .field("program", &self.printer.program())
            .field("parser", &self.parser)
            .field("deferred_error", &self.deferred_error)
            .finish()
    }
}

impl<'a> CommandLineParser<'a> {
    /// Create a command line parser, with no switches and no standalone parameters accepted.
    ///
    /// ### Example
    /// ```
    /// # use switchboard_builder as switchboard;
    /// use switchboard::CommandLineParser;
    ///
    /// let mut clp = CommandLineParser::new("program")
    ///     .build();
    ///
    /// clp.parse_tokens(vec![].as_slice()).unwrap();
    /// ```
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            parser: Parser::default(),
            printer: Printer::new(program),
            user_interface: Box::new(ConsoleInterface::default()),
            deferred_error: None,
        }
    }

    /// Register a switch, reporting a configuration error immediately.
    /// On error, nothing about the switch is registered.
    ///
    /// ### Example
    /// ```
    /// # use switchboard_builder as switchboard;
    /// use switchboard::{CommandLineParser, Scalar, Switch};
    ///
    /// let mut a: u32 = 0;
    /// let mut b: u32 = 0;
    /// let mut clp = CommandLineParser::new("program");
    /// clp.register(Switch::new(Scalar::new(&mut a), "count", None)).unwrap();
    /// clp.register(Switch::new(Scalar::new(&mut b), "count", None)).unwrap_err();
    /// ```
    pub fn register<T>(&mut self, switch: Switch<'a, T>) -> Result<(), ConfigError> {
        let config = switch.config()?;
        let parameter = switch.parameter(&config);
        let mandatory = switch.is_mandatory();
        self.parser
            .register(config, mandatory, Box::new(switch.consume()))?;
        self.printer.push(parameter);
        Ok(())
    }

    /// Add a switch to the command line parser.
    ///
    /// The first configuration error is deferred until [`CommandLineParser::build_parser`] (or [`CommandLineParser::build`]).
    /// The order of the switches decides their order in the usage.
    ///
    /// ### Example
    /// ```
    /// # use switchboard_builder as switchboard;
    /// use switchboard::{CommandLineParser, Scalar, Switch};
    ///
    /// let mut a: u32 = 0;
    /// let mut b: u32 = 0;
    /// let mut clp = CommandLineParser::new("program")
    ///     .add(Switch::new(Scalar::new(&mut a), "a", None))
    ///     .add(Switch::new(Scalar::new(&mut b), "b", None))
    ///     .build();
    ///
    /// clp.parse_tokens(vec!["-a", "1", "-b2"].as_slice()).unwrap();
    /// drop(clp);
    ///
    /// assert_eq!(a, 1);
    /// assert_eq!(b, 2);
    /// ```
    pub fn add<T>(mut self, switch: Switch<'a, T>) -> Self {
        if let Err(error) = self.register(switch) {
            self.defer(error);
        }

        self
    }

    /// Set the range of acceptable standalone parameters, along with their label in the usage.
    pub fn set_standalone(
        &mut self,
        bound: Bound,
        label: impl Into<String>,
    ) -> Result<(), ConfigError> {
        self.parser.set_standalone(bound)?;
        self.printer.set_label(label);
        Ok(())
    }

    /// Declare the range of acceptable standalone parameters, along with their label in the usage.
    /// If repeated, only the final range will apply.
    ///
    /// The configuration error of an invalid range is deferred until [`CommandLineParser::build_parser`] (or [`CommandLineParser::build`]).
    ///
    /// ### Example
    /// ```
    /// # use switchboard_builder as switchboard;
    /// use switchboard::{Bound, CommandLineParser};
    ///
    /// let mut clp = CommandLineParser::new("program")
    ///     .standalone(Bound::Range(1, 3), "FILE [...]")
    ///     .build();
    ///
    /// let standalones = clp.parse_tokens(vec!["a", "b"].as_slice()).unwrap();
    /// assert_eq!(standalones, vec!["a", "b"]);
    /// clp.parse_tokens(vec![].as_slice()).unwrap_err();
    /// ```
    pub fn standalone(mut self, bound: Bound, label: impl Into<String>) -> Self {
        if let Err(error) = self.set_standalone(bound, label) {
            self.defer(error);
        }

        self
    }

    fn defer(&mut self, error: ConfigError) {
        if self.deferred_error.is_none() {
            self.deferred_error.replace(error);
        }
    }

    /// Remove every switch (and any deferred configuration error).
    /// The standalone range and label are kept.
    pub fn reset(&mut self) {
        self.parser.reset();
        self.printer.clear();
        self.deferred_error = None;
    }

    /// Build the command line parser as a Result.
    /// This finalizes the configuration and reports the first deferred error (ex: a repeated switch name).
    pub fn build_parser(mut self) -> Result<Self, ConfigError> {
        match self.deferred_error.take() {
            Some(error) => Err(error),
            None => Ok(self),
        }
    }

    /// Build the command line parser.
    /// This finalizes the configuration and reports the first deferred error (ex: a repeated switch name).
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> Self {
        match self.build_parser() {
            Ok(clp) => clp,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }

    /// Render the usage text, wrapping switch descriptions to `display_width` columns with an indent of `tab_width`.
    /// Errors when `display_width` does not exceed `tab_width`.
    ///
    /// ### Example
    /// ```
    /// # use switchboard_builder as switchboard;
    /// use switchboard::{CommandLineParser, Flag, Switch};
    ///
    /// let mut verbose: bool = false;
    /// let clp = CommandLineParser::new("program")
    ///     .add(Switch::new(Flag::new(&mut verbose), "verbose", Some('v')).help("Display detailed processes"))
    ///     .build();
    ///
    /// assert_eq!(
    ///     clp.usage(70, 20).unwrap(),
    ///     "Usage: program [OPTIONS]\n[OPTIONS] are:\n-v, --verbose:      Display detailed processes\n"
    /// );
    /// clp.usage(20, 20).unwrap_err();
    /// ```
    pub fn usage(&self, display_width: usize, tab_width: usize) -> Result<String, ConfigError> {
        self.printer.render(display_width, tab_width)
    }

    /// Print the usage text to stdout, sized to the terminal.
    pub fn print_usage(&self) {
        if let Ok(usage) = self.terminal_usage() {
            self.user_interface.print(usage);
        }
    }

    fn terminal_usage(&self) -> Result<String, ConfigError> {
        self.usage(Printer::terminal_width(), DEFAULT_TAB_WIDTH)
    }

    /// Parse the `tokens` (not including the program name), returning the standalone parameters.
    ///
    /// Each switch value is written to its destination.
    /// All problems found are reported together as a single [`ParseError`].
    ///
    /// ### Example
    /// ```
    /// # use switchboard_builder as switchboard;
    /// use switchboard::{CommandLineParser, Scalar, Switch};
    ///
    /// let mut trials: u32 = 0;
    /// let mut clp = CommandLineParser::new("program")
    ///     .add(Switch::new(Scalar::new(&mut trials), "trials", Some('T')))
    ///     .build();
    ///
    /// let error = clp.parse_tokens(&["-T", "-5"]).unwrap_err();
    /// assert_eq!(
    ///     error.to_string(),
    ///     "An error found when parsing the command line: Switch \"--trials\": Value \"-5\" is invalid for this switch."
    /// );
    /// ```
    pub fn parse_tokens(&mut self, tokens: &[&str]) -> Result<Vec<String>, ParseError> {
        self.parser.consume(tokens)
    }

    fn parse_or_report(&mut self, tokens: &[&str]) -> Result<Vec<String>, i32> {
        match self.parse_tokens(tokens) {
            Ok(standalones) => Ok(standalones),
            Err(error) => {
                self.user_interface.print_error(error);

                if let Ok(usage) = self.terminal_usage() {
                    self.user_interface.print_usage(usage);
                }

                Err(1)
            }
        }
    }

    /// Parse the command line arguments of this process, returning the standalone parameters.
    ///
    /// If the command line fails to parse, prints the errors and the usage to stderr, then exits with error code `1` (via [`std::process::exit`]).
    pub fn parse(&mut self) -> Vec<String> {
        let command_input: Vec<String> = env::args().skip(1).collect();

        match self.parse_or_report(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(standalones) => standalones,
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        }
    }

    #[cfg(test)]
    fn with_interface(mut self, user_interface: Box<dyn UserInterface>) -> Self {
        self.user_interface = user_interface;
        self
    }
}
