//! Parsers for single argument values.

use crate::command::Index;
use crate::model::attendance::{Attendance, Week};
use crate::model::student::Tag;
use crate::parser::{ParseError, ParseResult};
use std::collections::BTreeSet;

/// Parses a one-based positive index such as `3`.
pub fn parse_index(value: &str) -> ParseResult<Index> {
    parse_positive(value)
        .and_then(Index::from_one_based)
        .ok_or_else(|| ParseError::InvalidIndex(value.trim().to_string()))
}

/// Parses a one-based week number such as `5`.
pub fn parse_week(value: &str) -> ParseResult<Week> {
    parse_positive(value)
        .and_then(Week::from_one_based)
        .ok_or_else(|| ParseError::InvalidWeek(value.trim().to_string()))
}

pub fn parse_participation_score(value: &str) -> ParseResult<Attendance> {
    Ok(Attendance::parse(value)?)
}

/// Parses every `tag/` value into a set.
///
/// A single empty value means "no tags", which edit commands use to clear.
pub fn parse_tags(values: &[String]) -> ParseResult<BTreeSet<Tag>> {
    if values.len() == 1 && values[0].is_empty() {
        return Ok(BTreeSet::new());
    }
    values
        .iter()
        .map(|value| Tag::parse(value).map_err(ParseError::from))
        .collect()
}

/// Splits free text into search keywords; `None` when there are none.
pub fn parse_keywords(value: &str) -> Option<Vec<String>> {
    let keywords: Vec<String> = value.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        None
    } else {
        Some(keywords)
    }
}

fn parse_positive(value: &str) -> Option<usize> {
    let trimmed = value.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<usize>().ok().filter(|number| *number > 0)
}
