//! Field-level validation errors shared by all entity value types.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation failure for a single entity field or a cross-field rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Names are alphanumeric words separated by single spaces.
    InvalidName(String),
    /// Telegram handles are 5-32 characters of letters, digits, underscore.
    InvalidTelegram(String),
    InvalidEmail(String),
    InvalidTag(String),
    InvalidVenue(String),
    InvalidDay(String),
    InvalidTime(String),
    /// Lesson start must be strictly before its end.
    InvalidTimeRange { start: String, end: String },
    InvalidNumberOfOccurrences(String),
    InvalidParticipationScore(String),
    /// Attendance list length must equal the lesson's occurrence count.
    AttendanceListLength { expected: usize, actual: usize },
    NilUuid,
}

impl ValidationError {
    /// Stable machine-readable code used in diagnostics logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidName(_) => "invalid_name",
            Self::InvalidTelegram(_) => "invalid_telegram",
            Self::InvalidEmail(_) => "invalid_email",
            Self::InvalidTag(_) => "invalid_tag",
            Self::InvalidVenue(_) => "invalid_venue",
            Self::InvalidDay(_) => "invalid_day",
            Self::InvalidTime(_) => "invalid_time",
            Self::InvalidTimeRange { .. } => "invalid_time_range",
            Self::InvalidNumberOfOccurrences(_) => "invalid_number_of_occurrences",
            Self::InvalidParticipationScore(_) => "invalid_participation_score",
            Self::AttendanceListLength { .. } => "attendance_list_length",
            Self::NilUuid => "nil_uuid",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(value) => write!(
                f,
                "invalid name `{value}`: names should only contain alphanumeric characters and spaces, and should not be blank"
            ),
            Self::InvalidTelegram(value) => write!(
                f,
                "invalid telegram handle `{value}`: handles should be 5 to 32 characters of letters, digits or underscores"
            ),
            Self::InvalidEmail(value) => write!(
                f,
                "invalid email `{value}`: emails should be of the format local-part@domain"
            ),
            Self::InvalidTag(value) => {
                write!(f, "invalid tag `{value}`: tags names should be alphanumeric")
            }
            Self::InvalidVenue(value) => write!(
                f,
                "invalid venue `{value}`: venues should start with an alphanumeric character and should not be blank"
            ),
            Self::InvalidDay(value) => write!(
                f,
                "invalid day `{value}`: days should be one of MONDAY, TUESDAY, WEDNESDAY, THURSDAY, FRIDAY, SATURDAY, SUNDAY"
            ),
            Self::InvalidTime(value) => {
                write!(f, "invalid time `{value}`: times should be in the format HH:MM")
            }
            Self::InvalidTimeRange { start, end } => write!(
                f,
                "invalid lesson time: start time ({start}) must be before end time ({end})"
            ),
            Self::InvalidNumberOfOccurrences(value) => write!(
                f,
                "invalid number of occurrences `{value}`: it should be an integer between 1 and 52"
            ),
            Self::InvalidParticipationScore(value) => write!(
                f,
                "invalid participation score `{value}`: it should be an integer between 0 and 100"
            ),
            Self::AttendanceListLength { expected, actual } => write!(
                f,
                "attendance record list has {actual} weeks but the lesson has {expected} occurrences"
            ),
            Self::NilUuid => write!(f, "uuid must not be nil"),
        }
    }
}

impl Error for ValidationError {}
