//! Derive Api for `switchboard` configuration.
//!
//! ### Getting Started
//! Use the derive Api by starting with a parameter struct `S` instrumented with `#[derive(Default, SwitchboardParser)]`.
//! This will generate a function `S::switchboard_parse() -> S` which parses the Cli switches into the fields of `S`.
//! Each named field of `S` becomes a switch of the same name, where the field's initial value (from `S::default()`) is the switch default.
//!
//! ```no_run
#![doc = include_str!("../demos/demo_files_d.rs")]
//! ```
//!
//! This generates the following Cli program:
//! ```console
//! $ files --mode
//! An error found when parsing the command line: Switch "--mode" requires a parameter but not specified.
//! Usage: files [OPTIONS] [FILES...]
//! [OPTIONS] are:
//! --mode=[MODE]:      Mode of the program
//! --trials=[UINT]:    Number of trials
//! ```
//!
//! ### Generated Functions
//! `SwitchboardParser` generates three associated functions on `S`:
//! * `S::switchboard_parser(target: &mut S) -> CommandLineParser`: the builder configuration of `S`, bound to the fields of `target`.
//! * `S::switchboard_parse() -> S`: parse the program's command line, exiting the program (after printing the errors and usage) when the command line is invalid.
//! * `S::switchboard_parse_tokens(tokens: &[&str]) -> Result<S, Error>`: parse the `tokens`, returning the [configuration](../struct.ConfigError.html) or [parse](../struct.ParseError.html) errors.
//!
//! ### Parser Configuration
//! The following struct attributes configure the [`CommandLineParser`](../struct.CommandLineParser.html):
//! * `#[switchboard(program = P)]` sets the program name in the usage.
//! When omitted, the program name is the crate name.
//! * `#[switchboard(standalone = B)]` sets the acceptable number of standalone parameters, where `B` is the [Bound](../enum.Bound.html) variant.
//! When omitted, no standalone parameters are accepted.
//! * `#[switchboard(label = L)]` sets the label describing the standalone parameters in the usage (ex: `"[FILES...]"`).
//!
//! ### Switch Configuration
//! The field type decides the kind of switch:
//! ```console
//! Type        | Switch
//! -----------------------------------
//! bool        | Switch::new(Flag::new(..), ..)
//! T           | Switch::new(Scalar::new(..), ..)
//! ```
//!
//! The following field attributes configure the switch, and may be combined as necessary.
//! * `#[switchboard(short = C)]` sets the short alias of the switch.
//! `C` must be a char value (ex: `'c'`).
//! * `#[switchboard(mandatory)]` marks the switch as mandatory.
//! Not applicable to `bool` fields.
//! * `#[switchboard(argname = A)]` sets the label of the switch argument in the usage.
//! Not applicable to `bool` fields.
//! * `#[switchboard(converter = F)]` converts the switch value using `F`, via [`Scalar::with_converter`](../struct.Scalar.html#method.with_converter).
//! `F` must be a [Converter](../prelude/trait.Converter.html) (ex: `Within::new(1, 10)`).
//! Not applicable to `bool` fields.
//! * `#[switchboard(default = V)]` sets the initial value of the field when the parser is configured, overriding `S::default()`.
//! * `#[switchboard(help = H)]` sets the description of the switch in the usage.
//!
//! Lastly, `#[switchboard(standalones)]` marks the (at most one) `Vec<String>` field which receives the standalone parameters.
//! This field is not a switch, so it cannot be combined with the other field attributes.
//!
//! A partial example of these rules is provided as follows:
//! ```ignore
//! #[derive(Default, SwitchboardParser)]
//! #[switchboard(standalone = Bound::Range(1, 3), label = "FILE")]
//! struct Parameters {
//!     quick: usize,
//!     // the above generates:
//!     //  .add(Switch::new(Scalar::new(&mut target.quick), "quick", None))
//!
//!     #[switchboard(short = 'b', help = "be brown")]
//!     brown: bool,
//!     // the above generates:
//!     //  .add(Switch::new(Flag::new(&mut target.brown), "brown", Some('b'))
//!     //      .help("be brown"))
//!
//!     #[switchboard(mandatory, argname = "1 to 10", converter = Within::new(1, 10))]
//!     fox: u8,
//!     // the above generates:
//!     //  .add(Switch::new(Scalar::with_converter(&mut target.fox, Within::new(1, 10)), "fox", None)
//!     //      .argname("1 to 10")
//!     //      .mandatory())
//!
//!     #[switchboard(default = 2.5)]
//!     jumps: f32,
//!     // the above generates:
//!     //  .add(Switch::new(Scalar::new(&mut target.jumps).default(2.5), "jumps", None))
//!
//!     #[switchboard(standalones)]
//!     files: Vec<String>,
//!     // the above generates:
//!     //  target.files = standalones;
//! }
//! ```
pub use switchboard_derive::*;
