/*!
The [`Value`] type, which sits between the parser and a destination
variable.

The parser only ever talks to a [`Value`], and a [`Value`] only ever talks
to its [`Binding`]. New kinds of options plug in by providing a new
[`Binding`] (or a pair of closures, via [`Value::from_fns`]); the parser
doesn't change.
*/

use core::fmt;

use crate::{Flags, ValueError};

/**
A binding from command line text to one destination.

A binding holds a mutable borrow of the destination for as long as it
lives. Implementations should leave the destination untouched when they
return an error.
*/
pub trait Binding {
    /**
    Write an argument into the destination.

    `argument` is [`None`] for options that take no argument. Bindings that
    need text should return [`ValueError::MissingArgument`] if it's absent.
    */
    fn assign(&mut self, argument: Option<&str>) -> Result<(), ValueError>;

    /**
    The default value, rendered as a string. It shows up in the help
    output, and it's what an optional-argument option receives when it
    appears without an argument.
    */
    fn default_value(&self) -> Option<String>;
}

/**
Generic container for an option's [`Binding`] and its argument hint, which
also tracks whether the option was seen.

This type should only be built directly when implementing a new option
type; the functions in [`types`][crate::types] cover the usual ones.
*/
pub struct Value<'a> {
    was_set: bool,
    binding: Box<dyn Binding + 'a>,
    hint: &'a str,
}

impl<'a> Value<'a> {
    /// `hint` indicates what kind of data the option accepts, like
    /// `"NUMBER"`. It's only used in the help output and may be empty.
    pub fn new(binding: impl Binding + 'a, hint: &'a str) -> Self {
        Self {
            was_set: false,
            binding: Box::new(binding),
            hint,
        }
    }

    /**
    Build a value out of a default-value producer and a setter.

    ```
    use gnuflag::{Flags, Value, ValueError};

    let mut count = 0;
    let mut value = Value::from_fns(
        || None,
        |_| {
            count += 1;
            Ok::<(), ValueError>(())
        },
        "",
    );

    value.set(Flags::REPEATABLE, None).unwrap();
    value.set(Flags::REPEATABLE, None).unwrap();
    drop(value);

    assert_eq!(count, 2);
    ```
    */
    pub fn from_fns<D, S>(default: D, setter: S, hint: &'a str) -> Self
    where
        D: Fn() -> Option<String> + 'a,
        S: FnMut(Option<&str>) -> Result<(), ValueError> + 'a,
    {
        Self::new(FnBinding { default, setter }, hint)
    }

    /// Replace the argument hint shown in the help output
    #[must_use]
    pub fn with_hint(self, hint: &'a str) -> Self {
        Self { hint, ..self }
    }

    /**
    Apply one occurrence of the option described by `flags`, given the
    argument from the command line (if any).

    - A second occurrence is refused with [`ValueError::AlreadySet`] unless
      the option is [`REPEATABLE`][Flags::REPEATABLE].
    - An optional argument that's absent is replaced with the
      [default][Binding::default_value]; with no default, this fails.
    - Options that take no argument pass [`None`] to the binding.
    - A required argument that's absent fails.

    The option counts as seen from the moment it gets past the repetition
    check, even if the binding then refuses the argument. A non-repeatable
    option that failed once can't be retried later on the same command line.
    */
    pub fn set(&mut self, flags: Flags, argument: Option<&str>) -> Result<(), ValueError> {
        if self.was_set && !flags.is_repeatable() {
            return Err(ValueError::AlreadySet);
        }

        self.was_set = true;

        match argument {
            Some(argument) => self.binding.assign(Some(argument)),
            None if flags.contains(Flags::OPTIONAL_ARGUMENT) => {
                let default = self
                    .binding
                    .default_value()
                    .ok_or(ValueError::MissingArgument)?;

                self.binding.assign(Some(&default))
            }
            None if !flags.takes_argument() => self.binding.assign(None),
            None => Err(ValueError::MissingArgument),
        }
    }

    #[inline]
    #[must_use]
    pub fn default_value(&self) -> Option<String> {
        self.binding.default_value()
    }

    #[inline]
    #[must_use]
    pub fn arg_hint(&self) -> &'a str {
        self.hint
    }

    /// True once [`set`][Self::set] has been entered past the repetition
    /// check
    #[inline]
    #[must_use]
    pub fn was_set(&self) -> bool {
        self.was_set
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("was_set", &self.was_set)
            .field("hint", &self.hint)
            .field("default", &self.default_value())
            .finish_non_exhaustive()
    }
}

struct FnBinding<D, S> {
    default: D,
    setter: S,
}

impl<D, S> Binding for FnBinding<D, S>
where
    D: Fn() -> Option<String>,
    S: FnMut(Option<&str>) -> Result<(), ValueError>,
{
    fn assign(&mut self, argument: Option<&str>) -> Result<(), ValueError> {
        (self.setter)(argument)
    }

    fn default_value(&self) -> Option<String> {
        (self.default)()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    /// A value that records every argument its binding receives
    fn recording<'a>(
        log: &'a RefCell<Vec<Option<String>>>,
        default: Option<&'static str>,
    ) -> Value<'a> {
        Value::from_fns(
            move || default.map(str::to_owned),
            move |argument| {
                log.borrow_mut().push(argument.map(str::to_owned));
                Ok(())
            },
            "THING",
        )
    }

    #[test]
    fn second_use_is_refused() {
        let log = RefCell::new(Vec::new());
        let mut value = recording(&log, None);

        assert_eq!(value.set(Flags::REQUIRED_ARGUMENT, Some("a")), Ok(()));
        assert_eq!(
            value.set(Flags::REQUIRED_ARGUMENT, Some("b")),
            Err(ValueError::AlreadySet)
        );
        assert_eq!(*log.borrow(), [Some("a".to_owned())]);
    }

    #[test]
    fn repeatable_accepts_every_use() {
        let log = RefCell::new(Vec::new());
        let mut value = recording(&log, None);
        let flags = Flags::REQUIRED_ARGUMENT | Flags::REPEATABLE;

        for argument in ["a", "b", "c"] {
            assert_eq!(value.set(flags, Some(argument)), Ok(()));
        }

        assert_eq!(
            *log.borrow(),
            [
                Some("a".to_owned()),
                Some("b".to_owned()),
                Some("c".to_owned())
            ]
        );
    }

    #[test]
    fn absent_optional_argument_uses_default() {
        let log = RefCell::new(Vec::new());
        let mut value = recording(&log, Some("fallback"));

        assert_eq!(value.set(Flags::OPTIONAL_ARGUMENT, None), Ok(()));
        assert_eq!(*log.borrow(), [Some("fallback".to_owned())]);
    }

    #[test]
    fn absent_optional_argument_without_default_fails() {
        let log = RefCell::new(Vec::new());
        let mut value = recording(&log, None);

        assert_eq!(
            value.set(Flags::OPTIONAL_ARGUMENT, None),
            Err(ValueError::MissingArgument)
        );
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn flag_passes_nothing() {
        let log = RefCell::new(Vec::new());
        let mut value = recording(&log, Some("ignored"));

        assert_eq!(value.set(Flags::NO_ARGUMENT, None), Ok(()));
        assert_eq!(*log.borrow(), [None]);
    }

    #[test]
    fn absent_required_argument_fails() {
        let log = RefCell::new(Vec::new());
        let mut value = recording(&log, Some("ignored"));

        assert_eq!(
            value.set(Flags::REQUIRED_ARGUMENT, None),
            Err(ValueError::MissingArgument)
        );
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn failed_use_still_counts_as_seen() {
        let mut value = Value::from_fns(|| None, |_| Err(ValueError::custom("nope")), "");

        assert_eq!(
            value.set(Flags::REQUIRED_ARGUMENT, Some("x")),
            Err(ValueError::Custom("nope".to_owned()))
        );
        assert!(value.was_set());
        assert_eq!(
            value.set(Flags::REQUIRED_ARGUMENT, Some("x")),
            Err(ValueError::AlreadySet)
        );
    }

    #[test]
    fn hint_can_be_replaced() {
        let value = Value::from_fns(|| Some("1".to_owned()), |_| Ok(()), "OLD").with_hint("NEW");

        assert_eq!(value.arg_hint(), "NEW");
        assert_eq!(value.default_value().as_deref(), Some("1"));
        assert!(!value.was_set());
    }
}
