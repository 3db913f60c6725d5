//! Attendance domain model.
//!
//! # Responsibility
//! - Represent per-week participation scores of a lesson.
//! - Offer copy-on-write updates so lessons stay immutable values.
//!
//! # Invariants
//! - A `Week` is a zero-based index; it is valid for a record list iff it is
//!   below the list length.
//! - Each `AttendanceRecord` holds at most one entry per student uuid.

use crate::model::error::ValidationError;
use crate::model::student::StudentId;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

pub const MAX_PARTICIPATION_SCORE: u8 = 100;

/// Participation score of one student in one week, in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Attendance(u8);

impl Attendance {
    pub fn new(participation_score: u32) -> Result<Self, ValidationError> {
        match u8::try_from(participation_score) {
            Ok(score) if score <= MAX_PARTICIPATION_SCORE => Ok(Self(score)),
            _ => Err(ValidationError::InvalidParticipationScore(
                participation_score.to_string(),
            )),
        }
    }

    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        let score = trimmed
            .parse::<u32>()
            .map_err(|_| ValidationError::InvalidParticipationScore(value.to_string()))?;
        Self::new(score)
    }

    pub fn participation_score(self) -> u8 {
        self.0
    }
}

impl Display for Attendance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Zero-based week index within a lesson's occurrences.
///
/// Displays one-based, matching what users type in commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Week(usize);

impl Week {
    pub fn from_zero_based(index: usize) -> Self {
        Self(index)
    }

    /// Returns `None` for `0`, which has no zero-based counterpart.
    pub fn from_one_based(number: usize) -> Option<Self> {
        number.checked_sub(1).map(Self)
    }

    pub fn zero_based(self) -> usize {
        self.0
    }

    pub fn one_based(self) -> usize {
        self.0 + 1
    }
}

impl Display for Week {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

/// Scores recorded for a single week.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceRecord {
    entries: BTreeMap<StudentId, Attendance>,
}

impl AttendanceRecord {
    pub fn new(entries: BTreeMap<StudentId, Attendance>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &BTreeMap<StudentId, Attendance> {
        &self.entries
    }

    pub fn get(&self, student: StudentId) -> Option<Attendance> {
        self.entries.get(&student).copied()
    }

    pub fn contains(&self, student: StudentId) -> bool {
        self.entries.contains_key(&student)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a copy with `student` mapped to `attendance`, replacing any
    /// previous entry.
    pub fn with_entry(&self, student: StudentId, attendance: Attendance) -> Self {
        let mut entries = self.entries.clone();
        entries.insert(student, attendance);
        Self { entries }
    }

    pub fn without_entry(&self, student: StudentId) -> Self {
        let mut entries = self.entries.clone();
        entries.remove(&student);
        Self { entries }
    }
}

/// One `AttendanceRecord` per lesson occurrence, in week order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceRecordList {
    records: Vec<AttendanceRecord>,
}

impl AttendanceRecordList {
    /// Creates a list of `weeks` empty records.
    pub fn empty(weeks: usize) -> Self {
        Self {
            records: vec![AttendanceRecord::default(); weeks],
        }
    }

    pub fn from_records(records: Vec<AttendanceRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains_week(&self, week: Week) -> bool {
        week.zero_based() < self.records.len()
    }

    pub fn record(&self, week: Week) -> Option<&AttendanceRecord> {
        self.records.get(week.zero_based())
    }

    pub fn attendance(&self, student: StudentId, week: Week) -> Option<Attendance> {
        self.record(week).and_then(|record| record.get(student))
    }

    pub fn has_attendance(&self, student: StudentId, week: Week) -> bool {
        self.attendance(student, week).is_some()
    }

    /// Returns a copy with `week`'s record replaced.
    ///
    /// Out-of-range weeks return `None`; callers validate weeks first.
    pub fn with_record(&self, week: Week, record: AttendanceRecord) -> Option<Self> {
        if !self.contains_week(week) {
            return None;
        }
        let mut records = self.records.clone();
        records[week.zero_based()] = record;
        Some(Self { records })
    }

    /// Returns a copy with every entry of `student` removed.
    pub fn without_student(&self, student: StudentId) -> Self {
        Self {
            records: self
                .records
                .iter()
                .map(|record| record.without_entry(student))
                .collect(),
        }
    }

    /// Returns a copy truncated or padded with empty weeks to `weeks` records.
    pub fn resized(&self, weeks: usize) -> Self {
        let mut records = self.records.clone();
        records.resize(weeks, AttendanceRecord::default());
        Self { records }
    }

    /// Iterates `(week, score)` pairs recorded for `student`.
    pub fn student_attendances(
        &self,
        student: StudentId,
    ) -> impl Iterator<Item = (Week, Attendance)> + '_ {
        self.records
            .iter()
            .enumerate()
            .filter_map(move |(index, record)| {
                record
                    .get(student)
                    .map(|attendance| (Week::from_zero_based(index), attendance))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::{Attendance, AttendanceRecord, AttendanceRecordList, Week};
    use uuid::Uuid;

    #[test]
    fn participation_score_bounds() {
        assert!(Attendance::new(0).is_ok());
        assert!(Attendance::new(100).is_ok());
        assert!(Attendance::new(101).is_err());
        assert!(Attendance::parse("-1").is_err());
        assert_eq!(Attendance::parse(" 80 ").unwrap().participation_score(), 80);
    }

    #[test]
    fn week_conversions() {
        assert_eq!(Week::from_one_based(1), Some(Week::from_zero_based(0)));
        assert_eq!(Week::from_one_based(0), None);
        assert_eq!(Week::from_zero_based(4).to_string(), "5");
    }

    #[test]
    fn with_record_rejects_out_of_range_week() {
        let list = AttendanceRecordList::empty(3);
        assert!(list
            .with_record(Week::from_zero_based(3), AttendanceRecord::default())
            .is_none());
    }

    #[test]
    fn resized_keeps_existing_weeks() {
        let student = Uuid::new_v4();
        let score = Attendance::new(42).unwrap();
        let list = AttendanceRecordList::empty(3);
        let record = list
            .record(Week::from_zero_based(1))
            .unwrap()
            .with_entry(student, score);
        let list = list.with_record(Week::from_zero_based(1), record).unwrap();

        let grown = list.resized(5);
        assert_eq!(grown.len(), 5);
        assert_eq!(grown.attendance(student, Week::from_zero_based(1)), Some(score));

        let shrunk = list.resized(1);
        assert_eq!(shrunk.len(), 1);
        assert!(!shrunk.has_attendance(student, Week::from_zero_based(1)));
    }
}
