//! Executable user commands.
//!
//! # Responsibility
//! - Model every user action as a small command struct.
//! - Dispatch through the `Command` enum's single `execute` entry point.
//!
//! # Invariants
//! - Commands validate fully before the first mutation, so a failed command
//!   leaves the store untouched.
//! - Every successful mutating command commits exactly once.

pub mod attendance;
pub mod general;
pub mod index;
pub mod lesson;
pub mod module_class;
pub mod student;

use crate::history::HistoryError;
use crate::model::error::ValidationError;
use crate::model::module_class::ModuleClass;
use crate::model::student::Student;
use crate::model::tutors_pet::DataSetError;
use crate::store::ModelStore;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use attendance::{
    AddAttendanceCommand, AttendanceTarget, DeleteAttendanceCommand, EditAttendanceCommand,
    FindAttendanceCommand, ResolvedCell, StatsCommand,
};
pub use general::{
    ClearCommand, ExitCommand, HelpCommand, RedoCommand, UndoCommand, COMMAND_FORMATS,
};
pub use index::Index;
pub use lesson::{AddLessonCommand, DeleteLessonCommand, EditLessonCommand, EditLessonDescriptor};
pub use module_class::{
    AddModuleClassCommand, DeleteModuleClassCommand, EditModuleClassCommand,
    EditModuleClassDescriptor, FindModuleClassCommand, LinkStudentCommand, ListModuleClassCommand,
    UnlinkStudentCommand,
};
pub use student::{
    AddStudentCommand, DeleteStudentCommand, EditStudentCommand, EditStudentDescriptor,
    FindStudentCommand, ListStudentCommand,
};

pub type CommandResult<T> = Result<T, CommandError>;

/// User-facing command failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    InvalidStudentIndex,
    InvalidModuleClassIndex,
    InvalidLessonIndex,
    StudentNotInClass,
    StudentAlreadyInClass,
    InvalidWeek,
    DuplicateStudent,
    DuplicateModuleClass,
    DuplicateLesson,
    DuplicateAttendance,
    AttendanceNotFound,
    Validation(ValidationError),
    DataSet(DataSetError),
    History(HistoryError),
}

impl CommandError {
    /// Stable machine-readable code used in diagnostics logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidStudentIndex => "invalid_student_index",
            Self::InvalidModuleClassIndex => "invalid_module_class_index",
            Self::InvalidLessonIndex => "invalid_lesson_index",
            Self::StudentNotInClass => "student_not_in_class",
            Self::StudentAlreadyInClass => "student_already_in_class",
            Self::InvalidWeek => "invalid_week",
            Self::DuplicateStudent => "duplicate_student",
            Self::DuplicateModuleClass => "duplicate_module_class",
            Self::DuplicateLesson => "duplicate_lesson",
            Self::DuplicateAttendance => "duplicate_attendance",
            Self::AttendanceNotFound => "attendance_not_found",
            Self::Validation(err) => err.code(),
            Self::DataSet(_) => "data_set",
            Self::History(HistoryError::NoUndoableState) => "no_undoable_state",
            Self::History(HistoryError::NoRedoableState) => "no_redoable_state",
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStudentIndex => write!(f, "The student index provided is invalid"),
            Self::InvalidModuleClassIndex => write!(f, "The class index provided is invalid"),
            Self::InvalidLessonIndex => write!(f, "The lesson index provided is invalid"),
            Self::StudentNotInClass => write!(f, "The student is not in the class"),
            Self::StudentAlreadyInClass => write!(f, "The student is already in the class"),
            Self::InvalidWeek => write!(f, "The week provided is not within the lesson's occurrences"),
            Self::DuplicateStudent => write!(f, "This student already exists in Tutor's Pet"),
            Self::DuplicateModuleClass => write!(f, "This class already exists in Tutor's Pet"),
            Self::DuplicateLesson => write!(f, "This lesson already exists in the class"),
            Self::DuplicateAttendance => write!(f, "Attendance has been recorded previously"),
            Self::AttendanceNotFound => {
                write!(f, "No attendance has been recorded for this student in that week")
            }
            Self::Validation(err) => write!(f, "{err}"),
            Self::DataSet(err) => write!(f, "{err}"),
            Self::History(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DataSet(err) => Some(err),
            Self::History(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for CommandError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DataSetError> for CommandError {
    fn from(value: DataSetError) -> Self {
        match value {
            DataSetError::DuplicateStudent => Self::DuplicateStudent,
            DataSetError::DuplicateModuleClass => Self::DuplicateModuleClass,
            DataSetError::DuplicateLesson { .. } => Self::DuplicateLesson,
            other => Self::DataSet(other),
        }
    }
}

impl From<HistoryError> for CommandError {
    fn from(value: HistoryError) -> Self {
        Self::History(value)
    }
}

/// Which filtered list a front end should redisplay after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView {
    Students,
    ModuleClasses,
    Both,
}

/// Successful command result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Message shown to the user.
    pub feedback: String,
    pub view: Option<ListView>,
    pub show_help: bool,
    pub exit: bool,
}

impl CommandOutput {
    /// Output with feedback only.
    pub fn message(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            view: None,
            show_help: false,
            exit: false,
        }
    }

    /// Output that also asks the front end to redisplay `view`.
    pub fn with_view(feedback: impl Into<String>, view: ListView) -> Self {
        Self {
            view: Some(view),
            ..Self::message(feedback)
        }
    }
}

/// Every command the text language can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddStudent(AddStudentCommand),
    EditStudent(EditStudentCommand),
    DeleteStudent(DeleteStudentCommand),
    FindStudent(FindStudentCommand),
    ListStudent(ListStudentCommand),
    AddModuleClass(AddModuleClassCommand),
    EditModuleClass(EditModuleClassCommand),
    DeleteModuleClass(DeleteModuleClassCommand),
    FindModuleClass(FindModuleClassCommand),
    ListModuleClass(ListModuleClassCommand),
    LinkStudent(LinkStudentCommand),
    UnlinkStudent(UnlinkStudentCommand),
    AddLesson(AddLessonCommand),
    EditLesson(EditLessonCommand),
    DeleteLesson(DeleteLessonCommand),
    AddAttendance(AddAttendanceCommand),
    EditAttendance(EditAttendanceCommand),
    DeleteAttendance(DeleteAttendanceCommand),
    FindAttendance(FindAttendanceCommand),
    Stats(StatsCommand),
    Undo(UndoCommand),
    Redo(RedoCommand),
    Clear(ClearCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
}

impl Command {
    /// Runs the command against the store.
    pub fn execute(&self, store: &mut ModelStore) -> CommandResult<CommandOutput> {
        match self {
            Self::AddStudent(command) => command.execute(store),
            Self::EditStudent(command) => command.execute(store),
            Self::DeleteStudent(command) => command.execute(store),
            Self::FindStudent(command) => command.execute(store),
            Self::ListStudent(command) => command.execute(store),
            Self::AddModuleClass(command) => command.execute(store),
            Self::EditModuleClass(command) => command.execute(store),
            Self::DeleteModuleClass(command) => command.execute(store),
            Self::FindModuleClass(command) => command.execute(store),
            Self::ListModuleClass(command) => command.execute(store),
            Self::LinkStudent(command) => command.execute(store),
            Self::UnlinkStudent(command) => command.execute(store),
            Self::AddLesson(command) => command.execute(store),
            Self::EditLesson(command) => command.execute(store),
            Self::DeleteLesson(command) => command.execute(store),
            Self::AddAttendance(command) => command.execute(store),
            Self::EditAttendance(command) => command.execute(store),
            Self::DeleteAttendance(command) => command.execute(store),
            Self::FindAttendance(command) => command.execute(store),
            Self::Stats(command) => command.execute(store),
            Self::Undo(command) => command.execute(store),
            Self::Redo(command) => command.execute(store),
            Self::Clear(command) => command.execute(store),
            Self::Help(command) => command.execute(store),
            Self::Exit(command) => command.execute(store),
        }
    }

    /// Command word as typed by the user.
    pub fn word(&self) -> &'static str {
        match self {
            Self::AddStudent(_) => student::ADD_STUDENT_WORD,
            Self::EditStudent(_) => student::EDIT_STUDENT_WORD,
            Self::DeleteStudent(_) => student::DELETE_STUDENT_WORD,
            Self::FindStudent(_) => student::FIND_STUDENT_WORD,
            Self::ListStudent(_) => student::LIST_STUDENT_WORD,
            Self::AddModuleClass(_) => module_class::ADD_CLASS_WORD,
            Self::EditModuleClass(_) => module_class::EDIT_CLASS_WORD,
            Self::DeleteModuleClass(_) => module_class::DELETE_CLASS_WORD,
            Self::FindModuleClass(_) => module_class::FIND_CLASS_WORD,
            Self::ListModuleClass(_) => module_class::LIST_CLASS_WORD,
            Self::LinkStudent(_) => module_class::LINK_WORD,
            Self::UnlinkStudent(_) => module_class::UNLINK_WORD,
            Self::AddLesson(_) => lesson::ADD_LESSON_WORD,
            Self::EditLesson(_) => lesson::EDIT_LESSON_WORD,
            Self::DeleteLesson(_) => lesson::DELETE_LESSON_WORD,
            Self::AddAttendance(_) => attendance::ADD_ATTENDANCE_WORD,
            Self::EditAttendance(_) => attendance::EDIT_ATTENDANCE_WORD,
            Self::DeleteAttendance(_) => attendance::DELETE_ATTENDANCE_WORD,
            Self::FindAttendance(_) => attendance::FIND_ATTENDANCE_WORD,
            Self::Stats(_) => attendance::STATS_WORD,
            Self::Undo(_) => general::UNDO_WORD,
            Self::Redo(_) => general::REDO_WORD,
            Self::Clear(_) => general::CLEAR_WORD,
            Self::Help(_) => general::HELP_WORD,
            Self::Exit(_) => general::EXIT_WORD,
        }
    }
}

/// Resolves a filtered student, cloning it out of the store borrow.
pub(crate) fn resolve_student(store: &ModelStore, index: Index) -> CommandResult<Student> {
    store
        .filtered_student(index.zero_based())
        .cloned()
        .ok_or(CommandError::InvalidStudentIndex)
}

/// Resolves a filtered class, cloning it out of the store borrow.
pub(crate) fn resolve_module_class(
    store: &ModelStore,
    index: Index,
) -> CommandResult<ModuleClass> {
    store
        .filtered_module_class(index.zero_based())
        .cloned()
        .ok_or(CommandError::InvalidModuleClassIndex)
}
