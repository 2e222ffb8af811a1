use core::fmt;
use core::ops::{BitOr, BitOrAssign};

use joinery::JoinableIterator;

use crate::{Tags, Value, ValueError};

/**
Behavior bits for a [`CommandOption`]. Exactly one of [`NO_ARGUMENT`],
[`REQUIRED_ARGUMENT`] and [`OPTIONAL_ARGUMENT`] describes the argument;
[`REPEATABLE`] is independent and can be combined with any of them.

```
use gnuflag::Flags;

let flags = Flags::REQUIRED_ARGUMENT | Flags::REPEATABLE;
assert!(flags.is_repeatable());
```

[`NO_ARGUMENT`]: Flags::NO_ARGUMENT
[`REQUIRED_ARGUMENT`]: Flags::REQUIRED_ARGUMENT
[`OPTIONAL_ARGUMENT`]: Flags::OPTIONAL_ARGUMENT
[`REPEATABLE`]: Flags::REPEATABLE
*/
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags(u8);

impl Flags {
    pub const NO_ARGUMENT: Self = Self(0);
    pub const REQUIRED_ARGUMENT: Self = Self(0x01);
    pub const OPTIONAL_ARGUMENT: Self = Self(0x02);
    pub const ARGUMENT_TYPE_MASK: Self = Self(0x0F);

    /// The option may appear more than once
    pub const REPEATABLE: Self = Self(0x10);

    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// True if every bit of `other` is set in `self`
    #[inline]
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    #[must_use]
    pub const fn is_repeatable(self) -> bool {
        self.contains(Self::REPEATABLE)
    }

    /// True if any argument bit is set; that is, unless this is a
    /// [`NO_ARGUMENT`][Self::NO_ARGUMENT] option.
    #[inline]
    #[must_use]
    pub const fn takes_argument(self) -> bool {
        self.0 & Self::ARGUMENT_TYPE_MASK.0 != 0
    }

    /// The argument arity these flags describe, or [`None`] if both
    /// [`REQUIRED_ARGUMENT`][Self::REQUIRED_ARGUMENT] and
    /// [`OPTIONAL_ARGUMENT`][Self::OPTIONAL_ARGUMENT] are set.
    #[must_use]
    pub const fn arity(self) -> Option<Arity> {
        match (
            self.contains(Self::REQUIRED_ARGUMENT),
            self.contains(Self::OPTIONAL_ARGUMENT),
        ) {
            (true, true) => None,
            (true, false) => Some(Arity::Required),
            (false, true) => Some(Arity::Optional),
            (false, false) => Some(Arity::Flag),
        }
    }
}

impl BitOr for Flags {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (Self::REQUIRED_ARGUMENT, "REQUIRED_ARGUMENT"),
            (Self::OPTIONAL_ARGUMENT, "OPTIONAL_ARGUMENT"),
            (Self::REPEATABLE, "REPEATABLE"),
        ];

        let mut set = names
            .iter()
            .filter(|&&(flag, _)| self.contains(flag))
            .map(|&(_, name)| name)
            .peekable();

        match set.peek() {
            None => f.write_str("NO_ARGUMENT"),
            Some(_) => write!(f, "{}", set.join_with(" | ")),
        }
    }
}

/// How many arguments an option takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// `--verbose`
    Flag,

    /// `--output out.txt`, `--output=out.txt`, `-o out.txt`, `-oout.txt`
    Required,

    /// `--color`, `--color=always`, `-c`, `-calways`
    Optional,
}

/**
A single option: how it's spelled, how it takes arguments, where its value
goes, and what the help says about it.

The [`Value`] holds a mutable borrow of the destination for `'a`, so the
destination is available again once the option (usually its whole
[`CommandGroup`] list) is dropped.
*/
#[derive(Debug)]
pub struct CommandOption<'a> {
    pub tags: Tags<'a>,
    pub flags: Flags,
    pub value: Value<'a>,
    pub help: &'a str,
}

impl<'a> CommandOption<'a> {
    pub fn new(tags: Tags<'a>, flags: Flags, value: Value<'a>, help: &'a str) -> Self {
        Self {
            tags,
            flags,
            value,
            help,
        }
    }

    #[inline]
    #[must_use]
    pub fn long(&self) -> Option<&'a str> {
        self.tags.long()
    }

    #[inline]
    #[must_use]
    pub fn short(&self) -> Option<char> {
        self.tags.short()
    }

    /// Apply one occurrence of this option. See [`Value::set`].
    pub fn set(&mut self, argument: Option<&str>) -> Result<(), ValueError> {
        self.value.set(self.flags, argument)
    }
}

/// A named list of options. Groups only affect the help output; parsing
/// treats all groups as one list.
#[derive(Debug)]
pub struct CommandGroup<'a> {
    pub name: &'a str,
    pub options: Vec<CommandOption<'a>>,
}

impl<'a> CommandGroup<'a> {
    pub fn new(name: &'a str, options: Vec<CommandOption<'a>>) -> Self {
        Self { name, options }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_from_flags() {
        assert_eq!(Flags::NO_ARGUMENT.arity(), Some(Arity::Flag));
        assert_eq!(
            (Flags::REQUIRED_ARGUMENT | Flags::REPEATABLE).arity(),
            Some(Arity::Required)
        );
        assert_eq!(Flags::OPTIONAL_ARGUMENT.arity(), Some(Arity::Optional));
        assert_eq!(
            (Flags::REQUIRED_ARGUMENT | Flags::OPTIONAL_ARGUMENT).arity(),
            None
        );
    }

    #[test]
    fn repeatable_is_independent() {
        let mut flags = Flags::OPTIONAL_ARGUMENT;
        assert!(!flags.is_repeatable());
        assert!(flags.takes_argument());

        flags |= Flags::REPEATABLE;
        assert!(flags.is_repeatable());
        assert!(flags.contains(Flags::OPTIONAL_ARGUMENT));
        assert!(!Flags::REPEATABLE.takes_argument());
    }

    #[test]
    fn debug_lists_set_bits() {
        assert_eq!(format!("{:?}", Flags::NO_ARGUMENT), "NO_ARGUMENT");
        assert_eq!(
            format!("{:?}", Flags::REQUIRED_ARGUMENT | Flags::REPEATABLE),
            "REQUIRED_ARGUMENT | REPEATABLE"
        );
    }
}
