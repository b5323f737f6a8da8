use crate::api::{GenericCapturable, InvalidConversion};
use crate::matcher::{NameError, SwitchConfig};
use crate::parser::{AnonymousCapturable, SwitchParameter};

pub(crate) struct AnonymousCapture<'a, T: 'a> {
    field: Box<dyn GenericCapturable<'a, T> + 'a>,
}

impl<'a, T> AnonymousCapture<'a, T> {
    pub(crate) fn bind(field: impl GenericCapturable<'a, T> + 'a) -> Self {
        Self {
            field: Box::new(field),
        }
    }
}

impl<'a, T> AnonymousCapturable for AnonymousCapture<'a, T> {
    fn matched(&mut self) {
        self.field.matched();
    }

    fn capture(&mut self, value: &str) -> Result<(), InvalidConversion> {
        self.field.capture(value)
    }
}

/// A switch for the command line parser.
/// Used with [`CommandLineParser::add`](./struct.CommandLineParser.html#method.add) and [`CommandLineParser::register`](./struct.CommandLineParser.html#method.register).
///
/// The `name` decides how the switch is typed on the command line:
/// * A single character name is a short switch, `-c`.
/// * Otherwise it is a long switch, `--name`, with any underscores `'_'` typed as hyphens `'-'`.
///
/// A long switch may additionally be given a `short` alias.
pub struct Switch<'a, T> {
    field: AnonymousCapture<'a, T>,
    takes_argument: bool,
    name: String,
    short: Option<char>,
    mandatory: bool,
    argname: Option<String>,
    help: Option<String>,
}

impl<'a, T> Switch<'a, T> {
    /// Create a switch writing into the `field` destination.
    ///
    /// ### Example
    /// ```
    /// # use switchboard_builder as switchboard;
    /// use switchboard::{Flag, Scalar, Switch};
    ///
    /// let mut verbose: bool = false;
    /// let mut trials: u32 = 0;
    /// Switch::new(Flag::new(&mut verbose), "verbose", Some('v'));
    /// Switch::new(Scalar::new(&mut trials), "T", None);
    /// ```
    pub fn new(
        field: impl GenericCapturable<'a, T> + 'a,
        name: impl Into<String>,
        short: Option<char>,
    ) -> Self {
        let takes_argument = field.takes_argument();
        Self {
            field: AnonymousCapture::bind(field),
            takes_argument,
            name: name.into(),
            short,
            mandatory: false,
            argname: None,
            help: None,
        }
    }

    /// Require the switch be specified on the command line.
    /// Only a switch that takes an argument may be mandatory.
    pub fn mandatory(mut self) -> Self {
        self.mandatory = true;
        self
    }

    /// Document the label of the switch's argument, shown in the usage.
    /// If repeated, only the final label will apply.
    ///
    /// Defaults to the name of the destination type (ex: `u32`).
    ///
    /// ### Example
    /// ```
    /// # use switchboard_builder as switchboard;
    /// use switchboard::{Scalar, Switch};
    ///
    /// let mut mode: String = String::default();
    /// Switch::new(Scalar::new(&mut mode), "mode", None)
    ///     .argname("MODE");
    /// ```
    pub fn argname(mut self, label: impl Into<String>) -> Self {
        self.argname.replace(label.into());
        self
    }

    /// Document the help message for this switch.
    /// If repeated, only the final message will apply.
    ///
    /// Line breaks `'\n'` start a new line in the usage; otherwise the message is wrapped to fit.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help.replace(description.into());
        self
    }

    pub(super) fn config(&self) -> Result<SwitchConfig, NameError> {
        SwitchConfig::new(&self.name, self.short, self.takes_argument)
    }

    pub(super) fn parameter(&self, config: &SwitchConfig) -> SwitchParameter {
        let type_label = if self.takes_argument {
            Some(match &self.argname {
                Some(argname) => argname.clone(),
                None => type_label::<T>(),
            })
        } else {
            None
        };

        SwitchParameter::new(
            config.long().map(str::to_string),
            config.short(),
            type_label,
            self.help.clone(),
        )
    }

    pub(super) fn is_mandatory(&self) -> bool {
        self.mandatory
    }

    pub(super) fn consume(self) -> AnonymousCapture<'a, T> {
        self.field
    }
}

impl<'a, T> std::fmt::Debug for Switch<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let short = match &self.short {
            Some(s) => format!(" -{s},"),
            None => "".to_string(),
        };
        let mandatory = if self.mandatory { " mandatory," } else { "" };
        let help = if let Some(d) = &self.help {
            format!(", {d}")
        } else {
            "".to_string()
        };

        write!(
            f,
            "Switch[{t}, {name},{short}{mandatory} {takes}{help}]",
            t = std::any::type_name::<T>(),
            name = self.name,
            takes = if self.takes_argument { "arg" } else { "flag" },
        )
    }
}

/// The last path segment of the type name (ex: `PathBuf`).
fn type_label<T>() -> String {
    let full = std::any::type_name::<T>();
    let base = match full.find('<') {
        Some(generics) => &full[..generics],
        None => full,
    };

    match base.rfind("::") {
        Some(position) => full[position + 2..].to_string(),
        None => full.to_string(),
    }
}
