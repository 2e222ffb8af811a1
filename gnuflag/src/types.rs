/*!
Constructors for the common kinds of [`Value`]: strings, integers, boolean
switches, string lists, and anything with a [`FromStr`] implementation.

Each one borrows its destination mutably and hands back a [`Value`] ready
to be put in a [`CommandOption`][crate::CommandOption].
*/

use core::fmt::Display;
use core::iter;
use core::num::{IntErrorKind, ParseIntError};
use core::str::FromStr;

use crate::{Binding, Value, ValueError};

/// Which constant a [`bool_type`] option writes when it appears
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreFlag {
    False,
    #[default]
    True,
}

struct StringBinding<'a> {
    target: &'a mut String,
    default: Option<String>,
}

impl Binding for StringBinding<'_> {
    fn assign(&mut self, argument: Option<&str>) -> Result<(), ValueError> {
        let argument = argument.ok_or(ValueError::MissingArgument)?;
        argument.clone_into(self.target);
        Ok(())
    }

    fn default_value(&self) -> Option<String> {
        self.default.clone()
    }
}

/// An option that stores its argument verbatim. The hint is `STRING`.
pub fn string_type<'a>(target: &'a mut String, default: Option<&str>) -> Value<'a> {
    Value::new(
        StringBinding {
            target,
            default: default.map(str::to_owned),
        },
        "STRING",
    )
}

struct IntBinding<'a, T> {
    target: &'a mut T,
    default: Option<T>,
}

impl<T> Binding for IntBinding<'_, T>
where
    T: FromStr<Err = ParseIntError> + Display,
{
    fn assign(&mut self, argument: Option<&str>) -> Result<(), ValueError> {
        let argument = argument.ok_or(ValueError::MissingArgument)?;

        *self.target = argument.parse().map_err(|error: ParseIntError| {
            let argument = argument.to_owned();

            match error.kind() {
                IntErrorKind::Empty | IntErrorKind::InvalidDigit => {
                    ValueError::InvalidNumber { argument }
                }
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    ValueError::OutOfRange { argument }
                }
                _ => ValueError::Parse {
                    argument,
                    message: error.to_string(),
                },
            }
        })?;

        Ok(())
    }

    fn default_value(&self) -> Option<String> {
        self.default.as_ref().map(ToString::to_string)
    }
}

/**
An option that parses its argument as a base-10 integer of any primitive
integer type. A malformed number and one that doesn't fit in `T` are
reported differently; either way the destination is left alone. The hint is
`NUMBER`.
*/
pub fn int_type<'a, T>(target: &'a mut T, default: Option<T>) -> Value<'a>
where
    T: FromStr<Err = ParseIntError> + Display + 'a,
{
    Value::new(IntBinding { target, default }, "NUMBER")
}

struct BoolBinding<'a> {
    target: &'a mut bool,
    store: StoreFlag,
    default: Option<bool>,
}

impl Binding for BoolBinding<'_> {
    fn assign(&mut self, _argument: Option<&str>) -> Result<(), ValueError> {
        *self.target = self.store == StoreFlag::True;
        Ok(())
    }

    fn default_value(&self) -> Option<String> {
        self.default.map(|default| default.to_string())
    }
}

/**
A switch that writes `true` (for [`StoreFlag::True`]) or `false` (for
[`StoreFlag::False`]) when it appears, whatever argument it might have.
`default` is only used for the help output. There's no hint, since the
switch takes no value.
*/
pub fn bool_type<'a>(target: &'a mut bool, store: StoreFlag, default: Option<bool>) -> Value<'a> {
    Value::new(
        BoolBinding {
            target,
            store,
            default,
        },
        "",
    )
}

struct ContainerBinding<'a, C> {
    target: &'a mut C,
}

impl<C> Binding for ContainerBinding<'_, C>
where
    C: Extend<String>,
{
    fn assign(&mut self, argument: Option<&str>) -> Result<(), ValueError> {
        let argument = argument.ok_or(ValueError::MissingArgument)?;
        self.target.extend(iter::once(argument.to_owned()));
        Ok(())
    }

    fn default_value(&self) -> Option<String> {
        None
    }
}

/**
An option that appends each argument to a collection of strings, such as a
[`Vec`] or a [`VecDeque`][std::collections::VecDeque]. It never has a
default. This is meant to be combined with
[`REPEATABLE`][crate::Flags::REPEATABLE]. The hint is `STRING`.
*/
pub fn string_container_type<'a, C>(target: &'a mut C) -> Value<'a>
where
    C: Extend<String> + 'a,
{
    Value::new(ContainerBinding { target }, "STRING")
}

struct ParsedBinding<'a, T> {
    target: &'a mut T,
    default: Option<T>,
}

impl<T> Binding for ParsedBinding<'_, T>
where
    T: FromStr + Display,
    T::Err: Display,
{
    fn assign(&mut self, argument: Option<&str>) -> Result<(), ValueError> {
        let argument = argument.ok_or(ValueError::MissingArgument)?;

        *self.target = argument
            .parse()
            .map_err(|error| ValueError::parse_error(argument, error))?;

        Ok(())
    }

    fn default_value(&self) -> Option<String> {
        self.default.as_ref().map(ToString::to_string)
    }
}

/// An option for any type with a [`FromStr`] implementation: floats, IP
/// addresses, and so on. Parse failures carry the type's own error message.
/// The hint is `VALUE`.
pub fn parsed_type<'a, T>(target: &'a mut T, default: Option<T>) -> Value<'a>
where
    T: FromStr + Display + 'a,
    T::Err: Display,
{
    Value::new(ParsedBinding { target, default }, "VALUE")
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::net::Ipv4Addr;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Flags;

    const REQUIRED: Flags = Flags::REQUIRED_ARGUMENT;

    #[test]
    fn string_stores_verbatim() {
        let mut target = "before".to_owned();
        let mut value = string_type(&mut target, Some("fallback"));

        assert_eq!(value.arg_hint(), "STRING");
        assert_eq!(value.default_value().as_deref(), Some("fallback"));
        assert_eq!(value.set(REQUIRED, Some("  spaced  ")), Ok(()));
        drop(value);

        assert_eq!(target, "  spaced  ");
    }

    #[test]
    fn string_without_argument_fails() {
        let mut target = "before".to_owned();
        let mut value = string_type(&mut target, None);

        assert_eq!(value.default_value(), None);
        assert_eq!(
            value.set(Flags::NO_ARGUMENT, None),
            Err(ValueError::MissingArgument)
        );
        drop(value);

        assert_eq!(target, "before");
    }

    #[test]
    fn int_parses_base_ten() {
        let mut target = 0i32;
        let mut value = int_type(&mut target, Some(-3));

        assert_eq!(value.arg_hint(), "NUMBER");
        assert_eq!(value.default_value().as_deref(), Some("-3"));
        assert_eq!(value.set(REQUIRED, Some("-0042")), Ok(()));
        drop(value);

        assert_eq!(target, -42);
    }

    #[test]
    fn int_errors_are_distinguished() {
        let mut target = 7u8;

        let cases = [
            (
                "abc",
                ValueError::InvalidNumber {
                    argument: "abc".to_owned(),
                },
            ),
            (
                "12x",
                ValueError::InvalidNumber {
                    argument: "12x".to_owned(),
                },
            ),
            (
                "300",
                ValueError::OutOfRange {
                    argument: "300".to_owned(),
                },
            ),
            (
                "-1",
                ValueError::InvalidNumber {
                    argument: "-1".to_owned(),
                },
            ),
        ];

        for (argument, expected) in cases {
            let mut value = int_type(&mut target, None);
            assert_eq!(
                value.set(REQUIRED | Flags::REPEATABLE, Some(argument)),
                Err(expected)
            );
        }

        assert_eq!(target, 7);
    }

    #[test]
    fn int_negative_overflow() {
        let mut target = 0i8;
        let mut value = int_type(&mut target, None);

        assert_eq!(
            value.set(REQUIRED, Some("-129")),
            Err(ValueError::OutOfRange {
                argument: "-129".to_owned()
            })
        );
    }

    #[test]
    fn bool_ignores_argument() {
        let mut on = false;
        let mut off = true;

        let mut store_true = bool_type(&mut on, StoreFlag::True, Some(false));
        let mut store_false = bool_type(&mut off, StoreFlag::False, None);

        assert_eq!(store_true.arg_hint(), "");
        assert_eq!(store_true.default_value().as_deref(), Some("false"));
        assert_eq!(store_false.default_value(), None);

        assert_eq!(store_true.set(Flags::NO_ARGUMENT, Some("false")), Ok(()));
        assert_eq!(store_false.set(Flags::NO_ARGUMENT, None), Ok(()));
        drop((store_true, store_false));

        assert!(on);
        assert!(!off);
    }

    #[test]
    fn container_appends_in_order() {
        let mut target = VecDeque::from(["existing".to_owned()]);
        let mut value = string_container_type(&mut target);
        let flags = REQUIRED | Flags::REPEATABLE;

        assert_eq!(value.default_value(), None);
        assert_eq!(value.set(flags, Some("a")), Ok(()));
        assert_eq!(value.set(flags, Some("b")), Ok(()));
        assert_eq!(value.set(flags, None), Err(ValueError::MissingArgument));
        drop(value);

        assert_eq!(target, ["existing", "a", "b"]);
    }

    #[test]
    fn parsed_uses_from_str() {
        let mut address = Ipv4Addr::LOCALHOST;
        let mut value = parsed_type(&mut address, Some(Ipv4Addr::LOCALHOST));

        assert_eq!(value.arg_hint(), "VALUE");
        assert_eq!(value.default_value().as_deref(), Some("127.0.0.1"));
        assert_eq!(value.set(REQUIRED, Some("10.0.0.1")), Ok(()));
        drop(value);

        assert_eq!(address, Ipv4Addr::new(10, 0, 0, 1));
    }

    #[test]
    fn parsed_reports_type_error() {
        let mut ratio = 0.5f64;
        let mut value = parsed_type(&mut ratio, None);

        let error = value.set(REQUIRED, Some("half")).unwrap_err();
        assert!(matches!(error, ValueError::Parse { ref argument, .. } if argument == "half"));
        drop(value);

        assert_eq!(ratio, 0.5);
    }
}
