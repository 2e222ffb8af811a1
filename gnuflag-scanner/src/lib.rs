#![no_std]

/*!
Low-level scanning of GNU-style command line options. Takes care of the
distinctions between long options, short options, short option clusters and
operands. No type handling happens here, and the scanner doesn't know which
options exist; usually this is too low level to use directly.

Scanning is non-permuting: it stops at the first operand (or after a `--`)
and reports that position, so the caller can hand the rest of the command
line to something else.
*/

#[cfg(test)]
extern crate std;

/**
The [`Scanner`] type operates by passing the options it finds into a
[`Visitor`], to be handled.
*/
pub trait Visitor<'arg> {
    type Value;

    /// A long option that definitely has an argument, because it was given
    /// as `--option=argument`
    fn visit_long_option(self, option: &'arg str, argument: &'arg str) -> Self::Value;

    /// A long option or flag, such as `--option`
    fn visit_long(self, option: &'arg str, argument: impl ArgAccess<'arg>) -> Self::Value;

    /// A short option or flag, such as `-o`. Clusters like `-abc` produce one
    /// `visit_short` per character.
    fn visit_short(self, option: char, argument: impl ArgAccess<'arg>) -> Self::Value;
}

/**
[`ArgAccess`] allows a visitor to decide if a given option needs an argument,
based on the identity of the option.

Consider `-ab foo`. This could be `-a -b foo` or `-a b, foo` or three
separate things; the [`Scanner`] can't independently classify it. Instead the
visitor requests an argument only for options that need one, and the scanner
takes care of working out where that argument comes from. Options that take
no argument should simply drop the access, so that the rest of the cluster
and the next token are scanned normally.
*/
pub trait ArgAccess<'arg>: Sized {
    /**
    Get a required argument: the remainder of the short cluster
    (`-ovalue`), or else the next command line token (`-o value`,
    `--option value`), whatever it looks like.

    Returns [`None`] if the command line is exhausted.
    */
    fn take(self) -> Option<&'arg str>;

    /**
    Get an optional argument. Only text attached to a short option
    (`-ovalue`) counts; the next token is never consumed. Long options
    carry their optional argument as `--option=value`, which arrives through
    [`Visitor::visit_long_option`] instead.
    */
    fn take_attached(self) -> Option<&'arg str>;
}

#[derive(Debug, Clone, Copy)]
enum State<'arg> {
    Ready,
    Finished,
    /// The unscanned tail of a short cluster. Never empty.
    ShortInProgress(&'arg str),
}

/**
A `Scanner` is the main entry point into `gnuflag_scanner`. It scans one
option per call to [`next_arg`][Scanner::next_arg], sending it to the given
[`Visitor`], until it reaches an operand.

The scanner borrows the command line for its whole lifetime; the `'arg`
lifetime refers to this borrowed data. Each scanner starts at the first token
it's given, so separate scans never share a cursor.
*/
#[derive(Debug, Clone)]
pub struct Scanner<'arg, A> {
    state: State<'arg>,
    args: &'arg [A],
    position: usize,
}

impl<'arg, A> Scanner<'arg, A>
where
    A: AsRef<str>,
{
    /**
    Create a new [`Scanner`] over a list of command line tokens. This list
    should *exclude* the name of the program, which is commonly passed as the
    first argument.
    */
    #[inline]
    #[must_use]
    pub fn new(args: &'arg [A]) -> Self {
        Self {
            state: State::Ready,
            args,
            position: 0,
        }
    }

    /// Index (in the slice given to [`Scanner::new`]) of the first token that
    /// hasn't been consumed. Once scanning has finished, this is the first
    /// operand, or the length of the slice if there are none.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// True once an operand or `--` has been reached.
    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.state, State::Finished)
    }

    fn advance(&mut self) -> Option<&'arg str> {
        let args = self.args;
        let arg = args.get(self.position)?.as_ref();
        self.position += 1;
        Some(arg)
    }

    /// Put `self` into a `Ready` state, then return a StandardArgAccess
    #[inline]
    fn standard_arg(&mut self) -> StandardArgAccess<'_, 'arg, A> {
        self.state = State::Ready;
        StandardArgAccess { parent: self }
    }

    /// Put `self` into a `ShortInProgress` state, then return a
    /// ShortArgAccess. `rest` must be non-empty.
    #[inline]
    fn short_arg(&mut self, rest: &'arg str) -> ShortArgAccess<'_, 'arg> {
        debug_assert!(!rest.is_empty());

        self.state = State::ShortInProgress(rest);
        ShortArgAccess {
            rest,
            state: &mut self.state,
        }
    }

    /// Handle a single short option. If there is remaining content in the
    /// cluster, it's a candidate for the argument; otherwise, the next token
    /// is.
    #[inline]
    fn handle_short<V>(&mut self, option: char, rest: &'arg str, visitor: V) -> V::Value
    where
        V: Visitor<'arg>,
    {
        match rest.is_empty() {
            true => visitor.visit_short(option, self.standard_arg()),
            false => visitor.visit_short(option, self.short_arg(rest)),
        }
    }

    /// Scan the next option and hand it to `visitor`. Returns [`None`] once
    /// scanning has finished, either because the command line is exhausted
    /// or because an operand or `--` was found.
    pub fn next_arg<V>(&mut self, visitor: V) -> Option<V::Value>
    where
        V: Visitor<'arg>,
    {
        match self.state {
            State::Finished => None,
            State::ShortInProgress(short) => match split_first_char(short) {
                Some((option, rest)) => Some(self.handle_short(option, rest, visitor)),
                None => {
                    self.state = State::Ready;
                    self.next_arg(visitor)
                }
            },
            State::Ready => {
                let args = self.args;
                let token = args.get(self.position)?.as_ref();

                if token == "--" {
                    self.position += 1;
                    self.state = State::Finished;
                    return None;
                }

                if let Some(option) = token.strip_prefix("--") {
                    self.position += 1;
                    return Some(match split_once(option, b'=') {
                        Some((option, argument)) => visitor.visit_long_option(option, argument),
                        None => visitor.visit_long(option, self.standard_arg()),
                    });
                }

                match token.strip_prefix('-').and_then(split_first_char) {
                    Some((option, rest)) => {
                        self.position += 1;
                        Some(self.handle_short(option, rest, visitor))
                    }
                    // An operand, including a lone `-`. It stays unconsumed.
                    None => {
                        self.state = State::Finished;
                        None
                    }
                }
            }
        }
    }
}

/// ArgAccess implementation that gets the next token from the list.
struct StandardArgAccess<'a, 'arg, A> {
    parent: &'a mut Scanner<'arg, A>,
}

impl<'arg, A> ArgAccess<'arg> for StandardArgAccess<'_, 'arg, A>
where
    A: AsRef<str>,
{
    fn take(self) -> Option<&'arg str> {
        self.parent.advance()
    }

    fn take_attached(self) -> Option<&'arg str> {
        None
    }
}

/// ArgAccess implementation that gets the remainder of a short cluster.
/// Handles things like `-ovalue`, which is equivalent to `-o value`.
struct ShortArgAccess<'a, 'arg> {
    rest: &'arg str,
    state: &'a mut State<'arg>,
}

impl<'arg> ShortArgAccess<'_, 'arg> {
    fn consume(self) -> Option<&'arg str> {
        debug_assert!(matches!(*self.state, State::ShortInProgress(rest) if rest == self.rest));

        *self.state = State::Ready;
        Some(self.rest)
    }
}

impl<'arg> ArgAccess<'arg> for ShortArgAccess<'_, 'arg> {
    fn take(self) -> Option<&'arg str> {
        self.consume()
    }

    fn take_attached(self) -> Option<&'arg str> {
        self.consume()
    }
}

fn split_first_char(input: &str) -> Option<(char, &str)> {
    let mut chars = input.chars();
    chars.next().map(|c| (c, chars.as_str()))
}

fn split_once(input: &str, delimiter: u8) -> Option<(&str, &str)> {
    // `delimiter` is ASCII, so both halves stay on char boundaries
    memchr::memchr(delimiter, input.as_bytes()).map(|i| (&input[..i], &input[i + 1..]))
}
