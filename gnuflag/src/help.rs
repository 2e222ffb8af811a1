/*!
Help text for a set of option groups.

```text
Default:

  -i, --int <NUMBER>  Set the Int value. Default: 10
  -b, --bool          Enable the bool switch. Default: false

```

Each group gets a header and a blank line, then one entry per option: the
tags, the argument hint (`<HINT>` for a required argument, `[=HINT]` for an
optional one), and the help text in an aligned column, wrapped to the
[`HelpFormat`] width, with the default value appended when there is one.
*/

use core::fmt::Display;
use std::io;

use indent_write::io::IndentWriter;
use lazy_format::lazy_format;
use textwrap::WrapAlgorithm;

use crate::{CommandGroup, CommandOption, Flags, Tags};

/// Layout settings for the help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpFormat {
    /// Total line width that help text is wrapped to
    pub width: usize,
}

impl Default for HelpFormat {
    fn default() -> Self {
        Self { width: 80 }
    }
}

/// Indentation of option entries under their group header
const INDENT: &str = "  ";

/// Help text narrower than this is never produced, no matter how wide the
/// tags column gets
const MIN_TEXT_WIDTH: usize = 20;

/// Print the help for `groups` to stdout
pub fn render_help(groups: &[CommandGroup<'_>]) -> io::Result<()> {
    write_help(&mut io::stdout().lock(), groups, &HelpFormat::default())
}

/// Write the help for `groups` to `out`
pub fn write_help(
    out: &mut impl io::Write,
    groups: &[CommandGroup<'_>],
    format: &HelpFormat,
) -> io::Result<()> {
    groups
        .iter()
        .try_for_each(|group| write_group(out, group, format))
}

fn write_group(
    out: &mut impl io::Write,
    group: &CommandGroup<'_>,
    format: &HelpFormat,
) -> io::Result<()> {
    writeln!(out, "{}:\n", group.name)?;

    let synopses: Vec<String> = group
        .options
        .iter()
        .map(|option| option_synopsis(option).to_string())
        .collect();

    // Two spaces between the widest synopsis and the help column
    let column = synopses
        .iter()
        .map(|synopsis| synopsis.chars().count())
        .max()
        .unwrap_or(0)
        + 2;

    let text_width = format
        .width
        .saturating_sub(INDENT.len() + column)
        .max(MIN_TEXT_WIDTH);

    {
        let mut out = IndentWriter::new(INDENT, &mut *out);

        group
            .options
            .iter()
            .zip(&synopses)
            .try_for_each(|(option, synopsis)| {
                write_entry(&mut out, synopsis, column, &description(option), text_width)
            })?;
    }

    writeln!(out)
}

fn write_entry(
    out: &mut impl io::Write,
    synopsis: &str,
    column: usize,
    description: &str,
    text_width: usize,
) -> io::Result<()> {
    if description.is_empty() {
        return writeln!(out, "{synopsis}");
    }

    let options = textwrap::Options::new(text_width).wrap_algorithm(WrapAlgorithm::FirstFit);
    let mut lines = textwrap::wrap(description, options).into_iter();

    if let Some(first) = lines.next() {
        writeln!(out, "{synopsis:<column$}{first}")?;
    }

    lines.try_for_each(|line| writeln!(out, "{:column$}{line}", ""))
}

/// `-s, --long <HINT>`, lined up so options without a short tag still have
/// their long tags in the same column
fn option_synopsis<'o>(option: &'o CommandOption<'_>) -> impl Display + 'o {
    let tags = lazy_format!(match (option.tags) {
        Tags::Short { short } => "-{short}",
        Tags::Long { long } => "    --{long}",
        Tags::LongShort { short, long } => "-{short}, --{long}",
    });

    let hint = option.value.arg_hint();

    let argument = lazy_format!(match ((argument_style(option.flags), hint)) {
        (_, "") | (ArgumentStyle::None, _) => "",
        (ArgumentStyle::Optional, hint) => "[={hint}]",
        (ArgumentStyle::Required, hint) => " <{hint}>",
    });

    lazy_format!("{tags}{argument}")
}

fn description(option: &CommandOption<'_>) -> String {
    match (option.help, option.value.default_value()) {
        (help, None) => help.to_owned(),
        ("", Some(default)) => format!("Default: {default}"),
        (help, Some(default)) => format!("{help} Default: {default}"),
    }
}

#[derive(Debug, Clone, Copy)]
enum ArgumentStyle {
    None,
    Required,
    Optional,
}

/// The help output checks the optional bit first, so even flags with
/// conflicting bits render as something.
fn argument_style(flags: Flags) -> ArgumentStyle {
    if flags.contains(Flags::OPTIONAL_ARGUMENT) {
        ArgumentStyle::Optional
    } else if flags.contains(Flags::REQUIRED_ARGUMENT) {
        ArgumentStyle::Required
    } else {
        ArgumentStyle::None
    }
}
