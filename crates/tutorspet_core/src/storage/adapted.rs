//! Serde-facing mirrors of the model.
//!
//! Every scalar field is optional on read so a missing key can be reported by
//! name instead of as a generic deserialization error.

use crate::model::attendance::{Attendance, AttendanceRecord, AttendanceRecordList};
use crate::model::lesson::{format_time, parse_time, Day, Lesson, NumberOfOccurrences, Venue};
use crate::model::module_class::ModuleClass;
use crate::model::name::Name;
use crate::model::student::{Email, Student, StudentId, Tag, Telegram};
use crate::model::tutors_pet::TutorsPet;
use crate::storage::{StorageError, StorageResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use uuid::Uuid;

const STUDENT: &str = "Student";
const MODULE_CLASS: &str = "ModuleClass";
const LESSON: &str = "Lesson";

fn missing(entity: &str, field: &str) -> StorageError {
    StorageError::IllegalValue(format!("{entity}'s {field} field is missing!"))
}

fn illegal(err: impl ToString) -> StorageError {
    StorageError::IllegalValue(err.to_string())
}

fn parse_uuid(entity: &str, value: &str) -> StorageResult<StudentId> {
    Uuid::parse_str(value).map_err(|_| {
        StorageError::IllegalValue(format!("{entity}'s UUID `{value}` is not a valid UUID!"))
    })
}

/// Root document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonSerializableTutorsPet {
    #[serde(default)]
    students: Vec<JsonAdaptedStudent>,
    #[serde(default)]
    module_classes: Vec<JsonAdaptedModuleClass>,
}

impl JsonSerializableTutorsPet {
    /// Captures `data` in its on-disk shape.
    pub fn from_model(data: &TutorsPet) -> Self {
        Self {
            students: data
                .students()
                .iter()
                .map(JsonAdaptedStudent::from_model)
                .collect(),
            module_classes: data
                .module_classes()
                .iter()
                .map(JsonAdaptedModuleClass::from_model)
                .collect(),
        }
    }

    /// Validates every field and every cross reference.
    ///
    /// # Errors
    /// - `IllegalValue` naming the first offending field or rule.
    pub fn to_model(&self) -> StorageResult<TutorsPet> {
        let students = self
            .students
            .iter()
            .map(JsonAdaptedStudent::to_model)
            .collect::<StorageResult<Vec<_>>>()?;
        let module_classes = self
            .module_classes
            .iter()
            .map(JsonAdaptedModuleClass::to_model)
            .collect::<StorageResult<Vec<_>>>()?;
        TutorsPet::from_parts(students, module_classes).map_err(illegal)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct JsonAdaptedStudent {
    uuid: Option<String>,
    name: Option<String>,
    telegram: Option<String>,
    email: Option<String>,
    #[serde(default)]
    tagged: Vec<String>,
}

impl JsonAdaptedStudent {
    fn from_model(student: &Student) -> Self {
        Self {
            uuid: Some(student.uuid().to_string()),
            name: Some(student.name().to_string()),
            telegram: Some(student.telegram().to_string()),
            email: Some(student.email().to_string()),
            tagged: student
                .tags()
                .iter()
                .map(|tag| tag.as_str().to_string())
                .collect(),
        }
    }

    fn to_model(&self) -> StorageResult<Student> {
        let tags = self
            .tagged
            .iter()
            .map(|tag| Tag::parse(tag).map_err(illegal))
            .collect::<StorageResult<BTreeSet<_>>>()?;

        let uuid = self.uuid.as_deref().ok_or_else(|| missing(STUDENT, "UUID"))?;
        let uuid = parse_uuid(STUDENT, uuid)?;
        let name = self.name.as_deref().ok_or_else(|| missing(STUDENT, "Name"))?;
        let telegram = self
            .telegram
            .as_deref()
            .ok_or_else(|| missing(STUDENT, "Telegram"))?;
        let email = self
            .email
            .as_deref()
            .ok_or_else(|| missing(STUDENT, "Email"))?;

        Student::with_id(
            uuid,
            Name::parse(name).map_err(illegal)?,
            Telegram::parse(telegram).map_err(illegal)?,
            Email::parse(email).map_err(illegal)?,
            tags,
        )
        .map_err(illegal)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonAdaptedModuleClass {
    name: Option<String>,
    #[serde(default)]
    student_uuids: Vec<String>,
    #[serde(default)]
    lessons: Vec<JsonAdaptedLesson>,
}

impl JsonAdaptedModuleClass {
    fn from_model(module_class: &ModuleClass) -> Self {
        Self {
            name: Some(module_class.name().to_string()),
            student_uuids: module_class
                .student_uuids()
                .iter()
                .map(Uuid::to_string)
                .collect(),
            lessons: module_class
                .lessons()
                .iter()
                .map(JsonAdaptedLesson::from_model)
                .collect(),
        }
    }

    fn to_model(&self) -> StorageResult<ModuleClass> {
        let name = self
            .name
            .as_deref()
            .ok_or_else(|| missing(MODULE_CLASS, "Name"))?;
        let student_uuids = self
            .student_uuids
            .iter()
            .map(|uuid| parse_uuid(MODULE_CLASS, uuid))
            .collect::<StorageResult<BTreeSet<_>>>()?;
        let lessons = self
            .lessons
            .iter()
            .map(JsonAdaptedLesson::to_model)
            .collect::<StorageResult<Vec<_>>>()?;
        Ok(ModuleClass::new(
            Name::parse(name).map_err(illegal)?,
            student_uuids,
            lessons,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonAdaptedLesson {
    start_time: Option<String>,
    end_time: Option<String>,
    day: Option<String>,
    number_of_occurrences: Option<usize>,
    venue: Option<String>,
    attendance_record_list: Option<Vec<JsonAdaptedAttendanceRecord>>,
}

impl JsonAdaptedLesson {
    fn from_model(lesson: &Lesson) -> Self {
        Self {
            start_time: Some(format_time(lesson.start_time())),
            end_time: Some(format_time(lesson.end_time())),
            day: Some(lesson.day().as_str().to_string()),
            number_of_occurrences: Some(lesson.number_of_occurrences().get()),
            venue: Some(lesson.venue().to_string()),
            attendance_record_list: Some(
                lesson
                    .attendance_record_list()
                    .records()
                    .iter()
                    .map(JsonAdaptedAttendanceRecord::from_model)
                    .collect(),
            ),
        }
    }

    fn to_model(&self) -> StorageResult<Lesson> {
        let start_time = self
            .start_time
            .as_deref()
            .ok_or_else(|| missing(LESSON, "StartTime"))?;
        let end_time = self
            .end_time
            .as_deref()
            .ok_or_else(|| missing(LESSON, "EndTime"))?;
        let day = self.day.as_deref().ok_or_else(|| missing(LESSON, "Day"))?;
        let number_of_occurrences = self
            .number_of_occurrences
            .ok_or_else(|| missing(LESSON, "NumberOfOccurrences"))?;
        let venue = self
            .venue
            .as_deref()
            .ok_or_else(|| missing(LESSON, "Venue"))?;
        let records = self
            .attendance_record_list
            .as_ref()
            .ok_or_else(|| missing(LESSON, "AttendanceRecordList"))?
            .iter()
            .map(JsonAdaptedAttendanceRecord::to_model)
            .collect::<StorageResult<Vec<_>>>()?;

        Lesson::with_attendance(
            parse_time(start_time).map_err(illegal)?,
            parse_time(end_time).map_err(illegal)?,
            Day::parse(day).map_err(illegal)?,
            NumberOfOccurrences::new(number_of_occurrences).map_err(illegal)?,
            Venue::parse(venue).map_err(illegal)?,
            AttendanceRecordList::from_records(records),
        )
        .map_err(illegal)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonAdaptedAttendanceRecord {
    #[serde(default)]
    attendance_record: BTreeMap<String, u32>,
}

impl JsonAdaptedAttendanceRecord {
    fn from_model(record: &AttendanceRecord) -> Self {
        Self {
            attendance_record: record
                .entries()
                .iter()
                .map(|(uuid, attendance)| {
                    (
                        uuid.to_string(),
                        u32::from(attendance.participation_score()),
                    )
                })
                .collect(),
        }
    }

    fn to_model(&self) -> StorageResult<AttendanceRecord> {
        let entries = self
            .attendance_record
            .iter()
            .map(|(uuid, score)| {
                let uuid = parse_uuid("AttendanceRecord", uuid)?;
                let attendance = Attendance::new(*score).map_err(illegal)?;
                Ok((uuid, attendance))
            })
            .collect::<StorageResult<BTreeMap<_, _>>>()?;
        Ok(AttendanceRecord::new(entries))
    }
}
