//! Attendance commands.
//!
//! # Responsibility
//! - Locate one (class, lesson, student, week) attendance cell.
//! - Rebuild record, record list, lesson and class as new values on change.
//!
//! # Invariants
//! - Cell lookup checks, in order: student index, class index, membership,
//!   lesson index, week range. The first failure short-circuits.
//! - The store is only touched after every check has passed.

use crate::command::lesson::replace_lesson;
use crate::command::{
    resolve_module_class, resolve_student, CommandError, CommandOutput, CommandResult, Index,
    ListView,
};
use crate::model::attendance::{Attendance, AttendanceRecordList, Week};
use crate::model::lesson::Lesson;
use crate::model::module_class::ModuleClass;
use crate::model::student::Student;
use crate::store::ModelStore;

pub const ADD_ATTENDANCE_WORD: &str = "add-attendance";
pub const EDIT_ATTENDANCE_WORD: &str = "edit-attendance";
pub const DELETE_ATTENDANCE_WORD: &str = "delete-attendance";
pub const FIND_ATTENDANCE_WORD: &str = "find-attendance";
pub const STATS_WORD: &str = "stats";

/// Address of one attendance cell, as typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceTarget {
    pub module_class: Index,
    pub lesson: Index,
    pub student: Index,
    pub week: Week,
}

/// Attendance cell address resolved against the current store.
#[derive(Debug, Clone)]
pub struct ResolvedCell {
    pub student: Student,
    pub module_class: ModuleClass,
    pub lesson_position: usize,
    pub lesson: Lesson,
    pub week: Week,
}

impl ResolvedCell {
    /// Score currently stored in the cell, if any.
    pub fn attendance(&self) -> Option<Attendance> {
        self.lesson
            .attendance_record_list()
            .attendance(self.student.uuid(), self.week)
    }
}

impl AttendanceTarget {
    /// Runs the lookup chain without mutating anything.
    pub fn resolve(&self, store: &ModelStore) -> CommandResult<ResolvedCell> {
        let (student, module_class) = resolve_member(store, self.student, self.module_class)?;

        let lesson_position = self.lesson.zero_based();
        let lesson = module_class
            .lesson(lesson_position)
            .cloned()
            .ok_or(CommandError::InvalidLessonIndex)?;

        if !lesson.attendance_record_list().contains_week(self.week) {
            return Err(CommandError::InvalidWeek);
        }

        Ok(ResolvedCell {
            student,
            module_class,
            lesson_position,
            lesson,
            week: self.week,
        })
    }
}

/// Steps shared by every attendance command: student index, class index,
/// then membership.
fn resolve_member(
    store: &ModelStore,
    student_index: Index,
    module_class_index: Index,
) -> CommandResult<(Student, ModuleClass)> {
    let student = resolve_student(store, student_index)?;
    let module_class = resolve_module_class(store, module_class_index)?;
    if !module_class.has_student(student.uuid()) {
        return Err(CommandError::StudentNotInClass);
    }
    Ok((student, module_class))
}

/// Writes `updated` for the cell's week into a new lesson and class, then
/// commits with `message`.
fn store_week(
    store: &mut ModelStore,
    cell: &ResolvedCell,
    updated: AttendanceRecordList,
    message: String,
) -> CommandResult<CommandOutput> {
    let lesson = cell.lesson.with_attendance_record_list(updated)?;
    let module_class = replace_lesson(&cell.module_class, cell.lesson_position, lesson)?;
    store.set_module_class(&cell.module_class, module_class)?;
    store.commit(message.clone());
    Ok(CommandOutput::with_view(message, ListView::ModuleClasses))
}

fn week_with_entry(
    cell: &ResolvedCell,
    attendance: Option<Attendance>,
) -> CommandResult<AttendanceRecordList> {
    let list = cell.lesson.attendance_record_list();
    let record = list.record(cell.week).ok_or(CommandError::InvalidWeek)?;
    let record = match attendance {
        Some(attendance) => record.with_entry(cell.student.uuid(), attendance),
        None => record.without_entry(cell.student.uuid()),
    };
    list.with_record(cell.week, record)
        .ok_or(CommandError::InvalidWeek)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddAttendanceCommand {
    pub target: AttendanceTarget,
    pub attendance: Attendance,
}

impl AddAttendanceCommand {
    pub fn new(target: AttendanceTarget, attendance: Attendance) -> Self {
        Self { target, attendance }
    }

    /// Records the score in an empty attendance cell.
    pub fn execute(&self, store: &mut ModelStore) -> CommandResult<CommandOutput> {
        let cell = self.target.resolve(store)?;
        if cell.attendance().is_some() {
            return Err(CommandError::DuplicateAttendance);
        }

        let updated = week_with_entry(&cell, Some(self.attendance))?;
        let message = format!(
            "New attendance added: {} attended week {} lesson with participation score of {}",
            cell.student.name(),
            cell.week,
            self.attendance
        );
        store_week(store, &cell, updated, message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditAttendanceCommand {
    pub target: AttendanceTarget,
    pub attendance: Attendance,
}

impl EditAttendanceCommand {
    pub fn new(target: AttendanceTarget, attendance: Attendance) -> Self {
        Self { target, attendance }
    }

    /// Replaces the score in an occupied attendance cell.
    pub fn execute(&self, store: &mut ModelStore) -> CommandResult<CommandOutput> {
        let cell = self.target.resolve(store)?;
        if cell.attendance().is_none() {
            return Err(CommandError::AttendanceNotFound);
        }

        let updated = week_with_entry(&cell, Some(self.attendance))?;
        let message = format!(
            "Edited attendance: {} now has a participation score of {} for week {}",
            cell.student.name(),
            self.attendance,
            cell.week
        );
        store_week(store, &cell, updated, message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteAttendanceCommand {
    pub target: AttendanceTarget,
}

impl DeleteAttendanceCommand {
    pub fn new(target: AttendanceTarget) -> Self {
        Self { target }
    }

    /// Clears an occupied attendance cell.
    pub fn execute(&self, store: &mut ModelStore) -> CommandResult<CommandOutput> {
        let cell = self.target.resolve(store)?;
        if cell.attendance().is_none() {
            return Err(CommandError::AttendanceNotFound);
        }

        let updated = week_with_entry(&cell, None)?;
        let message = format!(
            "Deleted attendance: {} for week {}",
            cell.student.name(),
            cell.week
        );
        store_week(store, &cell, updated, message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindAttendanceCommand {
    pub target: AttendanceTarget,
}

impl FindAttendanceCommand {
    pub fn new(target: AttendanceTarget) -> Self {
        Self { target }
    }

    /// Reports the score held by an occupied attendance cell.
    pub fn execute(&self, store: &mut ModelStore) -> CommandResult<CommandOutput> {
        let cell = self.target.resolve(store)?;
        let attendance = cell.attendance().ok_or(CommandError::AttendanceNotFound)?;
        Ok(CommandOutput::message(format!(
            "{} attended week {} lesson with participation score of {}",
            cell.student.name(),
            cell.week,
            attendance
        )))
    }
}

/// Summarizes one member's attendance across every lesson of a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsCommand {
    pub module_class: Index,
    pub student: Index,
}

impl StatsCommand {
    pub fn new(module_class: Index, student: Index) -> Self {
        Self {
            module_class,
            student,
        }
    }

    /// Summarizes one member's attendance in every lesson of the class.
    pub fn execute(&self, store: &mut ModelStore) -> CommandResult<CommandOutput> {
        let (student, module_class) = resolve_member(store, self.student, self.module_class)?;

        let mut report = format!(
            "Attendance of {} in {}:",
            student.name(),
            module_class.name()
        );
        if module_class.lessons().is_empty() {
            report.push_str("\nThe class has no lessons.");
        }
        for (position, lesson) in module_class.lessons().iter().enumerate() {
            let scores: Vec<u32> = lesson
                .attendance_record_list()
                .student_attendances(student.uuid())
                .map(|(_, attendance)| u32::from(attendance.participation_score()))
                .collect();
            report.push_str(&format!(
                "\nLesson {}: {}\n  attended {}/{} weeks",
                position + 1,
                lesson,
                scores.len(),
                lesson.number_of_occurrences()
            ));
            if !scores.is_empty() {
                let total: u32 = scores.iter().sum();
                let average = f64::from(total) / scores.len() as f64;
                report.push_str(&format!(", average participation score {average:.2}"));
            }
        }
        Ok(CommandOutput::message(report))
    }
}
