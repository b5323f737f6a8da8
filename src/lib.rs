//! `switchboard` is a declarative, switch based command line parser for Rust.
//!
//! A program declares the switches it accepts, each bound to a typed destination variable.
//! Parsing the command line then writes the converted values directly into those destinations, and returns the remaining *standalone* parameters.
//! `switchboard` attempts to prioritize the following design concerns:
//! * *Report everything at once*:
//! A failed parse describes every problem found on the command line, numbered, rather than stopping at the first one.
//! * *Type safe switches*:
//! The user should not call any `&str -> T` conversion functions directly.
//! Each destination's type decides how its value is converted, with custom converters available for domain restrictions (ex: a numeric range).
//! * *Switches and standalones*:
//! Every parameter with a name is an optional switch (unless declared mandatory).
//! Everything else on the command line is a standalone parameter, constrained only by how many are acceptable.
//!
//! # Usage
//! This page includes a few demos on using `switchboard`.
//!
//! via [derive Api](./derive/index.html):
//! ```no_run
#![doc = include_str!("../demos/demo_files_d.rs")]
//! ```
//! or equivalently via builder Api (this page):
//! ```no_run
#![doc = include_str!("../demos/demo_files.rs")]
//! ```
//!
//! Both of these generate the same Cli program:
//! ```console
//! $ files --mode=fast a.txt b.txt
//! Mode: fast
//! Trials: 1000
//! File[1/2]: a.txt
//! File[2/2]: b.txt
//!
//! $ files --trials -5
//! 3 errors found when parsing the command line:
//! (1/3) At least 1 standalone parameter is required (specified 0).
//! (2/3) Switch "--trials": Value "-5" is invalid for this switch.
//! (3/3) Switch "--mode" is mandatory but not specified.
//! Usage: files [OPTIONS] [FILES...]
//! [OPTIONS] are:
//! --mode=[MODE]:      Mode of the program
//! --trials=[UINT]:    Number of trials
//!
//! $ files --mode fast --unknown a.txt
//! An error found when parsing the command line: Switch "--unknown" is not defined.
//! Usage: files [OPTIONS] [FILES...]
//! <truncated>
//! ```
//!
//! Notice, the second invocation stops at the undefined switch, so neither the standalone parameters nor `--mode` are checked.
//! See [Cli Semantics](#cli-semantics) for details.
//!
//! # Builder Api
//! Configure `switchboard` by starting with a [`CommandLineParser`] and `add`ing [`Switch`]es.
//!
//! Each switch takes a *field* which decides the switch's destination and whether it takes an argument:
//! * [`Scalar`]: a switch taking one argument, converted into the destination type `T`.
//! `T` is converted via the built-in [Value](./prelude/trait.Value.html) table, or via a custom [Converter](./prelude/trait.Converter.html) using [`Scalar::with_converter`].
//! * [`Flag`]: a switch taking no argument, which sets a `bool` destination to `true` when specified.
//!
//! The other aspects of switch configuration relate to the Cli usage:
//! * [`Switch::mandatory`]: the switch must be specified (only applicable to `Scalar` switches).
//! * [`Switch::argname`]: the label of the argument in the usage (defaults to the type name).
//! * [`Switch::help`]: the description of the switch in the usage.
//!
//! The acceptable number of standalone parameters is configured with [`CommandLineParser::standalone`].
//! By default, no standalone parameters are accepted.
//!
//! ### Converters
//! The built-in conversions are strict:
//! * Integers allow surrounding whitespace, but nothing else.
//! Unsigned integers reject any negative value (ex: `-5` is never wrapped into `u32`).
//! Values outside the range of the destination type are rejected (ex: `100000` into `u16`).
//! * Floats must consume the whole value.
//! * `char` accepts precisely one character.
//!
//! `switchboard` provides the converters [`Within`] (an inclusive range) and [`OneOf`] (a character choice).
//! Additionally, any closure `Fn(&str, &mut T) -> bool` is a converter.
//!
//! ```no_run
#![doc = include_str!("../demos/demo_converters.rs")]
//! ```
//!
//! ### Defaults
//! The default of a switch comes from its destination's initial value.
//! [`Scalar::default`] and [`Flag::default`] are shorthand for setting this initial value at configuration time.
//!
//! ```
//! # use switchboard::{CommandLineParser, Scalar, Switch};
//! let mut trials: usize = 0;
//! let mut clp = CommandLineParser::new("program")
//!     .add(Switch::new(Scalar::new(&mut trials).default(1000), "trials", None))
//!     .build();
//!
//! clp.parse_tokens(&[]).unwrap();
//! drop(clp);
//! assert_eq!(trials, 1000);
//! ```
//!
//! # Cli Semantics
//! `switchboard` parses the Cli tokens according to the following rules.
//!
//! * A switch is declared by its name.
//! A single character name (ex: `i`) is specified as a short switch `-i`.
//! Any other name (ex: `dry_run`) is specified as a long switch `--dry-run`, and may also have a short alias.
//! * An argument-taking switch receives its value inline or as the next token.
//! For example, `--key=123` and `--key 123` are equivalent, as are `-k123` and `-k 123`.
//! * The token after an argument-taking switch is always its value, even if it looks like a switch.
//! For example, `--mode -v` assigns `-v` to `--mode`.
//! * The token `--` ends switch processing; every later token is a standalone parameter.
//! * Any other token (including `-` alone) is a standalone parameter.
//! Standalone parameters and switches may be interleaved.
//!
//! Parsing then validates the command line in this order:
//! 1. Scanning problems: a flag given a value, or an argument-taking switch specified more than once (the final value is kept).
//! 2. The number of standalone parameters.
//! 3. The conversion of each switch value, in the order the switches were first specified.
//! 4. The mandatory switches, in the order they were declared.
//!
//! Three problems make the rest of the command line ambiguous, and so stop parsing immediately (skipping validation steps 2-4):
//! an undefined switch, a one character long switch (ex: `--v`), or an argument-taking switch missing its value at the end of the command line.
//! Flags specified before the stop still take effect.
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events for the switch registration and command line scanning.
pub mod derive;
pub use switchboard_builder::*;
