//! Lesson domain model.
//!
//! # Responsibility
//! - Define a recurring weekly lesson slot and its attendance records.
//!
//! # Invariants
//! - `start_time < end_time`.
//! - `attendance_record_list.len() == number_of_occurrences`.
//! - Two lessons are the same slot when day, start, end and venue match.

use crate::model::attendance::AttendanceRecordList;
use crate::model::error::ValidationError;
use crate::model::student::StudentId;
use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Display, Formatter};

const TIME_FORMAT: &str = "%H:%M";
pub const MAX_OCCURRENCES: usize = 52;

static VENUE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ,#/\-]*$").expect("valid venue regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// Parses a full day name, case-insensitively.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value.trim().to_ascii_uppercase().as_str() {
            "MONDAY" => Ok(Self::Monday),
            "TUESDAY" => Ok(Self::Tuesday),
            "WEDNESDAY" => Ok(Self::Wednesday),
            "THURSDAY" => Ok(Self::Thursday),
            "FRIDAY" => Ok(Self::Friday),
            "SATURDAY" => Ok(Self::Saturday),
            "SUNDAY" => Ok(Self::Sunday),
            _ => Err(ValidationError::InvalidDay(value.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "MONDAY",
            Self::Tuesday => "TUESDAY",
            Self::Wednesday => "WEDNESDAY",
            Self::Thursday => "THURSDAY",
            Self::Friday => "FRIDAY",
            Self::Saturday => "SATURDAY",
            Self::Sunday => "SUNDAY",
        }
    }
}

impl Display for Day {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses an `HH:MM` 24-hour time.
pub fn parse_time(value: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT)
        .map_err(|_| ValidationError::InvalidTime(value.to_string()))
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberOfOccurrences(usize);

impl NumberOfOccurrences {
    pub fn new(value: usize) -> Result<Self, ValidationError> {
        if value == 0 || value > MAX_OCCURRENCES {
            return Err(ValidationError::InvalidNumberOfOccurrences(value.to_string()));
        }
        Ok(Self(value))
    }

    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let count = value
            .trim()
            .parse::<usize>()
            .map_err(|_| ValidationError::InvalidNumberOfOccurrences(value.to_string()))?;
        Self::new(count)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Display for NumberOfOccurrences {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Venue(String);

impl Venue {
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        if !VENUE_RE.is_match(trimmed) {
            return Err(ValidationError::InvalidVenue(value.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Venue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable weekly lesson slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    start_time: NaiveTime,
    end_time: NaiveTime,
    day: Day,
    number_of_occurrences: NumberOfOccurrences,
    venue: Venue,
    attendance_record_list: AttendanceRecordList,
}

impl Lesson {
    /// Creates a lesson with one empty attendance record per occurrence.
    pub fn new(
        start_time: NaiveTime,
        end_time: NaiveTime,
        day: Day,
        number_of_occurrences: NumberOfOccurrences,
        venue: Venue,
    ) -> Result<Self, ValidationError> {
        let attendance_record_list = AttendanceRecordList::empty(number_of_occurrences.get());
        Self::with_attendance(
            start_time,
            end_time,
            day,
            number_of_occurrences,
            venue,
            attendance_record_list,
        )
    }

    /// Creates a lesson with existing attendance records.
    ///
    /// # Errors
    /// - `InvalidTimeRange` when `start_time >= end_time`.
    /// - `AttendanceListLength` when the list does not have one record per
    ///   occurrence.
    pub fn with_attendance(
        start_time: NaiveTime,
        end_time: NaiveTime,
        day: Day,
        number_of_occurrences: NumberOfOccurrences,
        venue: Venue,
        attendance_record_list: AttendanceRecordList,
    ) -> Result<Self, ValidationError> {
        if start_time >= end_time {
            return Err(ValidationError::InvalidTimeRange {
                start: format_time(start_time),
                end: format_time(end_time),
            });
        }
        if attendance_record_list.len() != number_of_occurrences.get() {
            return Err(ValidationError::AttendanceListLength {
                expected: number_of_occurrences.get(),
                actual: attendance_record_list.len(),
            });
        }
        Ok(Self {
            start_time,
            end_time,
            day,
            number_of_occurrences,
            venue,
            attendance_record_list,
        })
    }

    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    pub fn end_time(&self) -> NaiveTime {
        self.end_time
    }

    pub fn day(&self) -> Day {
        self.day
    }

    pub fn number_of_occurrences(&self) -> NumberOfOccurrences {
        self.number_of_occurrences
    }

    pub fn venue(&self) -> &Venue {
        &self.venue
    }

    pub fn attendance_record_list(&self) -> &AttendanceRecordList {
        &self.attendance_record_list
    }

    /// Returns whether both lessons occupy the same slot and venue.
    pub fn is_same_lesson(&self, other: &Lesson) -> bool {
        self.day == other.day
            && self.start_time == other.start_time
            && self.end_time == other.end_time
            && self.venue == other.venue
    }

    /// Returns a copy with the attendance list substituted.
    pub fn with_attendance_record_list(
        &self,
        attendance_record_list: AttendanceRecordList,
    ) -> Result<Self, ValidationError> {
        Self::with_attendance(
            self.start_time,
            self.end_time,
            self.day,
            self.number_of_occurrences,
            self.venue.clone(),
            attendance_record_list,
        )
    }

    /// Returns a copy with every attendance entry of `student` removed.
    pub fn without_student(&self, student: StudentId) -> Self {
        Self {
            attendance_record_list: self.attendance_record_list.without_student(student),
            ..self.clone()
        }
    }
}

impl Display for Lesson {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}-{} Venue: {} Occurrences: {}",
            self.day,
            format_time(self.start_time),
            format_time(self.end_time),
            self.venue,
            self.number_of_occurrences
        )
    }
}
