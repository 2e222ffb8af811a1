/*!
The parsing loop: flatten the groups, build the lookup tables, scan the
command line, and hand each recognized option to its [`Value`][crate::Value].
*/

use core::fmt::Display;
use std::io;

use gnuflag_scanner::{ArgAccess, Scanner, Visitor};
use lazy_format::lazy_format;

use crate::table::{LongMatch, OptionTable};
use crate::{Arity, CommandGroup, CommandOption, ConfigError, Diagnostic};

/// The result of a parse that got as far as scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Index in `argv` of the first token that wasn't consumed: the first
    /// operand, or `argv.len()` if there are none.
    pub next: usize,

    /// Every recoverable problem, in command line order
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutcome {
    /// True if every option on the command line was recognized and applied
    #[inline]
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/**
Parse `argv` (whose first element is the program name) against `groups`,
writing option values into their destinations. Returns the index of the
first token that wasn't consumed.

Problems on the command line are printed to stderr, one line each, and
don't stop the parse; see [`parse_cli_with_diagnostics`] to get them as
values instead. A malformed option table is an error, returned before
anything is scanned.
*/
pub fn parse_cli<A>(argv: &[A], groups: &mut [CommandGroup<'_>]) -> Result<usize, ConfigError>
where
    A: AsRef<str>,
{
    let outcome = parse_cli_with_diagnostics(argv, groups)?;

    if let Err(error) = write_diagnostics(&mut io::stderr().lock(), &outcome.diagnostics) {
        log::warn!("failed to write command line diagnostics: {error}");
    }

    Ok(outcome.next)
}

/// Same as [`parse_cli`], but the diagnostics are returned rather than
/// printed.
pub fn parse_cli_with_diagnostics<A>(
    argv: &[A],
    groups: &mut [CommandGroup<'_>],
) -> Result<ParseOutcome, ConfigError>
where
    A: AsRef<str>,
{
    let mut options: Vec<&mut CommandOption<'_>> = groups
        .iter_mut()
        .flat_map(|group| group.options.iter_mut())
        .collect();

    let table = OptionTable::build(options.iter().map(|option| &**option))?;

    let args = argv.get(1..).unwrap_or_default();
    let mut scanner = Scanner::new(args);
    let mut diagnostics = Vec::new();

    while let Some(event) = scanner.next_arg(Lookup { table: &table }) {
        match event {
            Event::Found { index, argument } => {
                // An empty attached argument counts as no argument at all
                let argument = argument.filter(|argument| !argument.is_empty());
                let option = &mut *options[index];

                log::trace!("{} with argument {argument:?}", option.tags);

                if let Err(error) = option.set(argument) {
                    diagnostics.push(Diagnostic::Rejected {
                        option: option.tags.to_string(),
                        error,
                    });
                }
            }
            Event::Problem(diagnostic) => diagnostics.push(diagnostic),
        }
    }

    // `args` starts after the program name
    let next = match argv.is_empty() {
        true => 0,
        false => scanner.position() + 1,
    };

    log::debug!(
        "parsed options up to index {next} with {} diagnostics",
        diagnostics.len()
    );

    Ok(ParseOutcome { next, diagnostics })
}

/// Write each diagnostic on its own line
pub fn write_diagnostics(out: &mut impl io::Write, diagnostics: &[Diagnostic]) -> io::Result<()> {
    diagnostics
        .iter()
        .try_for_each(|diagnostic| writeln!(out, "{diagnostic}"))
}

enum Event<'arg> {
    Found {
        index: usize,
        argument: Option<&'arg str>,
    },
    Problem(Diagnostic),
}

/// Resolve each option the scanner finds against the table, pulling an
/// argument from the scanner according to the option's arity.
#[derive(Clone, Copy)]
struct Lookup<'t, 'a> {
    table: &'t OptionTable<'a>,
}

impl<'arg> Visitor<'arg> for Lookup<'_, '_> {
    type Value = Event<'arg>;

    fn visit_long_option(self, option: &'arg str, argument: &'arg str) -> Self::Value {
        match self.table.long(option) {
            LongMatch::Found {
                arity: Arity::Flag, ..
            } => Event::Problem(Diagnostic::UnexpectedArgument {
                token: format!("--{option}"),
            }),
            LongMatch::Found { index, .. } => Event::Found {
                index,
                argument: Some(argument),
            },
            LongMatch::Ambiguous(candidates) => ambiguous(option, candidates),
            LongMatch::Unknown => Event::Problem(Diagnostic::UnknownOption {
                token: format!("--{option}={argument}"),
            }),
        }
    }

    fn visit_long(self, option: &'arg str, argument: impl ArgAccess<'arg>) -> Self::Value {
        match self.table.long(option) {
            LongMatch::Found { index, arity } => {
                found(index, arity, argument, lazy_format!("--{option}"))
            }
            LongMatch::Ambiguous(candidates) => ambiguous(option, candidates),
            LongMatch::Unknown => Event::Problem(Diagnostic::UnknownOption {
                token: format!("--{option}"),
            }),
        }
    }

    fn visit_short(self, option: char, argument: impl ArgAccess<'arg>) -> Self::Value {
        match self.table.short(option) {
            Some((index, arity)) => found(index, arity, argument, lazy_format!("-{option}")),
            None => Event::Problem(Diagnostic::UnknownOption {
                token: format!("-{option}"),
            }),
        }
    }
}

fn found<'arg>(
    index: usize,
    arity: Arity,
    argument: impl ArgAccess<'arg>,
    token: impl Display,
) -> Event<'arg> {
    let argument = match arity {
        Arity::Flag => None,
        Arity::Optional => argument.take_attached(),
        Arity::Required => match argument.take() {
            Some(argument) => Some(argument),
            None => {
                return Event::Problem(Diagnostic::MissingArgument {
                    token: token.to_string(),
                });
            }
        },
    };

    Event::Found { index, argument }
}

fn ambiguous(option: &str, candidates: Vec<&str>) -> Event<'static> {
    Event::Problem(Diagnostic::AmbiguousOption {
        token: format!("--{option}"),
        candidates: candidates
            .into_iter()
            .map(|candidate| format!("--{candidate}"))
            .collect(),
    })
}
