/*!
GNU-style command line options (`-x`, `--xxx`, `--xxx=value`) written directly
into typed variables that the caller owns.

A program declares its options as a list of [`CommandGroup`]s. Each
[`CommandOption`] carries [`Tags`] (its long and/or short spelling),
[`Flags`] (argument arity and repeatability), help text, and a [`Value`]
that knows how to write into one destination variable. The [`types`] module
has constructors for the common cases; anything else plugs in by
implementing [`Binding`].

```
use gnuflag::{CommandGroup, CommandOption, Flags, StoreFlag, Tags};

let mut verbose = false;
let mut jobs = 1u32;

let argv = ["prog", "-v", "--jobs=4", "build", "--release"];

let next = {
    let mut groups = [CommandGroup::new(
        "Options",
        vec![
            CommandOption::new(
                Tags::LongShort { long: "verbose", short: 'v' },
                Flags::NO_ARGUMENT,
                gnuflag::bool_type(&mut verbose, StoreFlag::True, None),
                "Print more.",
            ),
            CommandOption::new(
                Tags::LongShort { long: "jobs", short: 'j' },
                Flags::REQUIRED_ARGUMENT,
                gnuflag::int_type(&mut jobs, Some(1)),
                "Number of parallel jobs.",
            ),
        ],
    )];

    gnuflag::parse_cli(&argv, &mut groups)?
};

assert!(verbose);
assert_eq!(jobs, 4);
assert_eq!(argv[next], "build");
# Ok::<(), gnuflag::ConfigError>(())
```

Scanning stops at the first operand; whatever follows (a subcommand and its
own arguments, say) is left to the caller. Problems on the command line never
abort the parse: they're collected as [`Diagnostic`]s and printed to stderr,
and everything that could be applied is applied. Problems in the option table
itself are [`ConfigError`]s, returned before anything is scanned.
*/

use core::fmt;

pub mod errors;
pub mod help;
pub mod option;
pub mod parser;
mod table;
pub mod types;
pub mod value;

pub use errors::{ConfigError, Diagnostic, ValueError};
pub use help::{HelpFormat, render_help, write_help};
pub use option::{Arity, CommandGroup, CommandOption, Flags};
pub use parser::{ParseOutcome, parse_cli, parse_cli_with_diagnostics, write_diagnostics};
pub use types::{
    StoreFlag, bool_type, int_type, parsed_type, string_container_type, string_type,
};
pub use value::{Binding, Value};

/// The set of tags that identify a particular option (`-short`, `--long`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tags<'a> {
    /// This option uses only a long tag
    Long { long: &'a str },

    /// This option uses only a short tag
    Short { short: char },

    /// This option uses both a long and short tag
    LongShort { long: &'a str, short: char },
}

impl<'a> Tags<'a> {
    /// Get the long tag, if any
    #[inline]
    #[must_use]
    pub const fn long(&self) -> Option<&'a str> {
        match self {
            Tags::Long { long } | Tags::LongShort { long, .. } => Some(long),
            Tags::Short { .. } => None,
        }
    }

    /// Get the short tag, if any
    #[inline]
    #[must_use]
    pub const fn short(&self) -> Option<char> {
        match self {
            Tags::Short { short } | Tags::LongShort { short, .. } => Some(*short),
            Tags::Long { .. } => None,
        }
    }
}

/// Name the option the way diagnostics do: `--long` when there is a long
/// tag, `-s` otherwise.
impl fmt::Display for Tags<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Tags::Long { long } | Tags::LongShort { long, .. } => write!(f, "--{long}"),
            Tags::Short { short } => write!(f, "-{short}"),
        }
    }
}
