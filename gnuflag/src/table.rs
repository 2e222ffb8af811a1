//! Lookup tables from long names and short characters to positions in the
//! flattened option list. Built fresh for each parse.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::{Arity, CommandOption, ConfigError, Tags};

/// The result of looking up a (possibly abbreviated) long option
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LongMatch<'a> {
    Found { index: usize, arity: Arity },
    Ambiguous(Vec<&'a str>),
    Unknown,
}

#[derive(Debug)]
pub(crate) struct OptionTable<'a> {
    /// Tags and arity of every option, in declaration order
    entries: Vec<(Tags<'a>, Arity)>,
    long: HashMap<&'a str, usize>,
    short: HashMap<char, usize>,
}

impl<'a> OptionTable<'a> {
    /// Validate every option and index it by its long and short tags.
    /// Position `i` in the table is the `i`th option yielded by `options`.
    pub fn build<'o>(
        options: impl IntoIterator<Item = &'o CommandOption<'a>>,
    ) -> Result<Self, ConfigError>
    where
        'a: 'o,
    {
        let mut table = Self {
            entries: Vec::new(),
            long: HashMap::new(),
            short: HashMap::new(),
        };

        for option in options {
            let index = table.entries.len();

            let arity = option
                .flags
                .arity()
                .ok_or_else(|| ConfigError::ConflictingArgumentArity {
                    option: option.tags.to_string(),
                })?;

            if let Some(long) = option.long() {
                match table.long.entry(long) {
                    Entry::Occupied(_) => {
                        return Err(ConfigError::DuplicateLongOption {
                            name: long.to_owned(),
                        });
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(index);
                    }
                }
            }

            if let Some(short) = option.short() {
                match table.short.entry(short) {
                    Entry::Occupied(_) => return Err(ConfigError::DuplicateShortOption { short }),
                    Entry::Vacant(slot) => {
                        slot.insert(index);
                    }
                }
            }

            table.entries.push((option.tags, arity));
        }

        log::debug!(
            "option table: {} options, {} long, {} short",
            table.entries.len(),
            table.long.len(),
            table.short.len()
        );

        Ok(table)
    }

    pub fn short(&self, short: char) -> Option<(usize, Arity)> {
        let &index = self.short.get(&short)?;
        Some((index, self.entries[index].1))
    }

    /// Look up a long option. An exact match always wins; otherwise `name`
    /// may be any prefix that only one long option starts with.
    pub fn long(&self, name: &str) -> LongMatch<'a> {
        if name.is_empty() {
            return LongMatch::Unknown;
        }

        if let Some(&index) = self.long.get(name) {
            return LongMatch::Found {
                index,
                arity: self.entries[index].1,
            };
        }

        let mut candidates = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(index, &(tags, arity))| {
                tags.long()
                    .filter(|long| long.starts_with(name))
                    .map(|long| (index, long, arity))
            });

        match (candidates.next(), candidates.next()) {
            (None, _) => LongMatch::Unknown,
            (Some((index, _, arity)), None) => LongMatch::Found { index, arity },
            (Some((_, first, _)), Some((_, second, _))) => LongMatch::Ambiguous(
                [first, second]
                    .into_iter()
                    .chain(candidates.map(|(_, long, _)| long))
                    .collect(),
            ),
        }
    }
}
