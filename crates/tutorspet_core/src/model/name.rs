//! Display name shared by students and module classes.

use crate::model::error::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Display, Formatter};

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{N}]+( [\p{L}\p{N}]+)*$").expect("valid name regex"));

/// Validated name: alphanumeric words separated by single spaces.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(String);

impl Name {
    /// Parses a name, trimming outer whitespace first.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        if !Self::is_valid(trimmed) {
            return Err(ValidationError::InvalidName(value.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn is_valid(value: &str) -> bool {
        NAME_RE.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
