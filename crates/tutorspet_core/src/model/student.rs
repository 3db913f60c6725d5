//! Student domain model.
//!
//! # Responsibility
//! - Define the student record and its validated contact fields.
//! - Provide functional update helpers for edit commands.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another student.
//! - Two students are duplicates when name, telegram and email all match,
//!   regardless of uuid or tags.

use crate::model::error::ValidationError;
use crate::model::name::Name;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

static TELEGRAM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]{5,32}$").expect("valid telegram regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]+([+_.\-][A-Za-z0-9]+)*@[A-Za-z0-9]+(-[A-Za-z0-9]+)*(\.[A-Za-z0-9]+(-[A-Za-z0-9]+)*)*$",
    )
    .expect("valid email regex")
});
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid tag regex"));

/// Stable identifier of a student.
pub type StudentId = Uuid;

/// Telegram handle without the leading `@`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Telegram(String);

impl Telegram {
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        if !TELEGRAM_RE.is_match(trimmed) {
            return Err(ValidationError::InvalidTelegram(value.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Telegram {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        if !EMAIL_RE.is_match(trimmed) {
            return Err(ValidationError::InvalidEmail(value.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Email {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-form alphanumeric label attached to a student.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(String);

impl Tag {
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        if !TAG_RE.is_match(trimmed) {
            return Err(ValidationError::InvalidTag(value.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

/// Immutable student record.
///
/// Fields are private so every instance passes through a validating
/// constructor; edits produce a new value through the `with_*` helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    uuid: StudentId,
    name: Name,
    telegram: Telegram,
    email: Email,
    tags: BTreeSet<Tag>,
}

impl Student {
    /// Creates a student with a generated stable ID.
    pub fn new(name: Name, telegram: Telegram, email: Email, tags: BTreeSet<Tag>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name,
            telegram,
            email,
            tags,
        }
    }

    /// Creates a student with a caller-provided stable ID.
    ///
    /// Used by the storage layer where identity already exists on disk.
    pub fn with_id(
        uuid: StudentId,
        name: Name,
        telegram: Telegram,
        email: Email,
        tags: BTreeSet<Tag>,
    ) -> Result<Self, ValidationError> {
        if uuid.is_nil() {
            return Err(ValidationError::NilUuid);
        }
        Ok(Self {
            uuid,
            name,
            telegram,
            email,
            tags,
        })
    }

    pub fn uuid(&self) -> StudentId {
        self.uuid
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn telegram(&self) -> &Telegram {
        &self.telegram
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Returns whether `other` describes the same person.
    pub fn is_same_student(&self, other: &Student) -> bool {
        self.name == other.name && self.telegram == other.telegram && self.email == other.email
    }

    pub fn with_name(&self, name: Name) -> Self {
        Self {
            name,
            ..self.clone()
        }
    }

    pub fn with_telegram(&self, telegram: Telegram) -> Self {
        Self {
            telegram,
            ..self.clone()
        }
    }

    pub fn with_email(&self, email: Email) -> Self {
        Self {
            email,
            ..self.clone()
        }
    }

    pub fn with_tags(&self, tags: BTreeSet<Tag>) -> Self {
        Self {
            tags,
            ..self.clone()
        }
    }
}

impl Display for Student {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} Telegram: {} Email: {} Tags: ",
            self.name, self.telegram, self.email
        )?;
        for tag in &self.tags {
            write!(f, "{tag}")?;
        }
        Ok(())
    }
}
