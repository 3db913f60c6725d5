//! Prefix tokenizer for command arguments.
//!
//! # Invariants
//! - A prefix only starts a value when preceded by a single space, so `st/`
//!   never matches the `t/` prefix.
//! - Only prefixes requested by the caller are recognised; other `x/` text
//!   stays inside the surrounding value.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// Argument marker such as `n/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(marker: &'static str) -> Self {
        Self(marker)
    }

    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_TELEGRAM: Prefix = Prefix::new("t/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_TAG: Prefix = Prefix::new("tag/");
pub const PREFIX_CLASS_INDEX: Prefix = Prefix::new("c/");
pub const PREFIX_LESSON_INDEX: Prefix = Prefix::new("l/");
pub const PREFIX_STUDENT_INDEX: Prefix = Prefix::new("s/");
pub const PREFIX_WEEK: Prefix = Prefix::new("w/");
pub const PREFIX_PARTICIPATION_SCORE: Prefix = Prefix::new("p/");
pub const PREFIX_START_TIME: Prefix = Prefix::new("st/");
pub const PREFIX_END_TIME: Prefix = Prefix::new("et/");
pub const PREFIX_DAY: Prefix = Prefix::new("d/");
pub const PREFIX_NUMBER_OF_OCCURRENCES: Prefix = Prefix::new("o/");
pub const PREFIX_VENUE: Prefix = Prefix::new("v/");

/// Values of every prefix in one argument string, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Text before the first prefix, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    pub fn contains_all(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|prefix| self.contains(*prefix))
    }
}

/// Splits `arguments` into a preamble and per-prefix values.
///
/// `arguments` is expected to keep the whitespace that separated it from the
/// command word, e.g. `" n/Amy t/amy_b"`.
pub fn tokenize(arguments: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|prefix| {
            let needle = format!(" {}", prefix.as_str());
            arguments
                .match_indices(needle.as_str())
                .map(|(start, _)| (start, *prefix))
                .collect::<Vec<_>>()
        })
        .collect();
    positions.sort_by_key(|(start, _)| *start);

    let preamble_end = positions
        .first()
        .map(|(start, _)| *start)
        .unwrap_or(arguments.len());
    let mut multimap = ArgumentMultimap {
        preamble: arguments[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (position, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + 1 + prefix.as_str().len();
        let value_end = positions
            .get(position + 1)
            .map(|(next, _)| *next)
            .unwrap_or(arguments.len());
        let value = arguments[value_start..value_end].trim().to_string();
        multimap.values.entry(*prefix).or_default().push(value);
    }

    multimap
}

#[cfg(test)]
mod tests {
    use super::{
        tokenize, PREFIX_END_TIME, PREFIX_NAME, PREFIX_START_TIME, PREFIX_TAG, PREFIX_TELEGRAM,
    };

    #[test]
    fn splits_preamble_and_values() {
        let map = tokenize(
            " 1 n/Amy Bee t/Amy_B tag/friends tag/tutee",
            &[PREFIX_NAME, PREFIX_TELEGRAM, PREFIX_TAG],
        );
        assert_eq!(map.preamble(), "1");
        assert_eq!(map.value(PREFIX_NAME), Some("Amy Bee"));
        assert_eq!(map.value(PREFIX_TELEGRAM), Some("Amy_B"));
        assert_eq!(map.all_values(PREFIX_TAG), ["friends", "tutee"]);
    }

    #[test]
    fn longer_prefixes_do_not_collide_with_shorter_ones() {
        let map = tokenize(
            " st/14:00 et/16:00",
            &[PREFIX_TELEGRAM, PREFIX_START_TIME, PREFIX_END_TIME],
        );
        assert!(!map.contains(PREFIX_TELEGRAM));
        assert_eq!(map.value(PREFIX_START_TIME), Some("14:00"));
        assert_eq!(map.value(PREFIX_END_TIME), Some("16:00"));
    }

    #[test]
    fn repeated_prefix_keeps_last_value_and_unrequested_prefixes_stay_in_values() {
        let map = tokenize(" n/First n/Second t/x", &[PREFIX_NAME]);
        assert_eq!(map.value(PREFIX_NAME), Some("Second t/x"));
    }
}
