//! Core domain logic for Tutor's Pet.
//! This crate owns every record invariant; front ends only feed it text.

pub mod command;
pub mod config;
pub mod history;
pub mod logging;
pub mod model;
pub mod parser;
pub mod service;
pub mod storage;
pub mod store;

pub use command::{
    Command, CommandError, CommandOutput, CommandResult, Index, ListView, COMMAND_FORMATS,
};
pub use config::{AppConfig, ConfigError, ConfigOverrides, UserPrefs};
pub use history::{History, HistoryError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::attendance::{Attendance, AttendanceRecord, AttendanceRecordList, Week};
pub use model::error::ValidationError;
pub use model::lesson::{Day, Lesson, NumberOfOccurrences, Venue};
pub use model::module_class::ModuleClass;
pub use model::name::Name;
pub use model::student::{Email, Student, StudentId, Tag, Telegram};
pub use model::tutors_pet::{DataSetError, TutorsPet};
pub use parser::{parse_command, ParseError, ParseResult};
pub use service::{LogicError, LogicManager, LogicResult};
pub use storage::{JsonTutorsPetStorage, StorageError, StorageResult, TutorsPetStorage};
pub use store::ModelStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
