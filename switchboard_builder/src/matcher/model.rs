use thiserror::Error;

use crate::constant::*;

/// The names under which a switch is looked up, and whether it takes an argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SwitchConfig {
    long: Option<String>,
    short: Option<char>,
    takes_argument: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum NameError {
    #[error("Empty switch is not allowed.")]
    Empty,

    #[error("Switch \"{0}\": multiple short switch is not allowed (a one-character switch is already its own short switch).")]
    MultipleShort(String),
}

impl SwitchConfig {
    /// Derive the switch names from the declared `name` and optional `short`.
    ///
    /// A one-character `name` is the short switch (and may not have an explicit `short`).
    /// Otherwise, `name` is the long switch, with underscores normalized to hyphens.
    pub(crate) fn new(
        name: &str,
        short: Option<char>,
        takes_argument: bool,
    ) -> Result<Self, NameError> {
        let mut chars = name.chars();

        match (chars.next(), chars.next()) {
            (None, _) => Err(NameError::Empty),
            (Some(single), None) => match short {
                Some(_) => Err(NameError::MultipleShort(name.to_string())),
                None => Ok(Self {
                    long: None,
                    short: Some(single),
                    takes_argument,
                }),
            },
            (Some(_), Some(_)) => Ok(Self {
                long: Some(name.replace('_', "-")),
                short,
                takes_argument,
            }),
        }
    }

    pub(crate) fn long(&self) -> Option<&str> {
        self.long.as_deref()
    }

    pub(crate) fn short(&self) -> Option<char> {
        self.short
    }

    pub(crate) fn takes_argument(&self) -> bool {
        self.takes_argument
    }

    /// The switch as typed on the command line, preferring the long form.
    pub(crate) fn display(&self) -> String {
        match (&self.long, &self.short) {
            (Some(long), _) => format!("{LONG_PREFIX}{long}"),
            (None, Some(short)) => format!("{SHORT_PREFIX}{short}"),
            (None, None) => unreachable!("internal error - switch must have a long or short name"),
        }
    }
}

/// The classification of a single raw command line token.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Token<'t> {
    Standalone(&'t str),
    Terminator,
    Long {
        name: &'t str,
        inline: Option<&'t str>,
    },
    Short {
        name: char,
        inline: Option<&'t str>,
    },
}

impl<'t> Token<'t> {
    /// Classify `token`, ignoring whether the switch-ended terminator has been seen.
    pub(crate) fn classify(token: &'t str) -> Self {
        if let Some(body) = token.strip_prefix(LONG_PREFIX) {
            if body.is_empty() {
                return Token::Terminator;
            }

            match body.split_once(INLINE_SEPARATOR) {
                // An empty name (ex: `--=5`) also ends the switches; the inline value is dropped.
                Some(("", _)) => Token::Terminator,
                Some((name, inline)) => Token::Long {
                    name,
                    inline: Some(inline),
                },
                None => Token::Long {
                    name: body,
                    inline: None,
                },
            }
        } else if let Some(body) = token.strip_prefix(SHORT_PREFIX) {
            let mut chars = body.chars();

            match chars.next() {
                // A lone '-' is not a switch.
                None => Token::Standalone(token),
                Some(name) => {
                    let rest = chars.as_str();
                    Token::Short {
                        name,
                        inline: if rest.is_empty() { None } else { Some(rest) },
                    }
                }
            }
        } else {
            Token::Standalone(token)
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum IndexError {
    #[error("Switch \"--{0}\" is specified twice.")]
    DuplicateLong(String),

    #[error("Switch \"-{0}\" is specified twice.")]
    DuplicateShort(char),
}

/// The structural problems which stop a scan immediately.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ScanAbort {
    #[error("Switch \"{0}\": long switch must have two or more characters.")]
    ShortLongSwitch(String),

    #[error("Switch \"{0}\" is not defined.")]
    Undefined(String),

    #[error("Switch \"{0}\" requires a parameter but not specified.")]
    MissingParameter(String),
}
