//! Text command language.
//!
//! # Responsibility
//! - Split a line into command word and arguments.
//! - Build a typed `Command` from prefixed arguments.
//!
//! # Invariants
//! - Parsing never touches the model; index range checks happen at execution.
//! - Malformed input maps to `ParseError`, never a panic.

mod commands;
pub mod fields;
pub mod tokenizer;

use crate::command::Command;
use crate::model::error::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ParseResult<T> = Result<T, ParseError>;

static COMMAND_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<word>\S+)(?P<arguments>.*)$").expect("valid command format regex")
});

/// Text input that cannot be turned into a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Structure did not match the command's usage line.
    InvalidCommandFormat { usage: &'static str },
    UnknownCommand(String),
    InvalidIndex(String),
    InvalidWeek(String),
    NoFieldEdited,
    Validation(ValidationError),
}

impl ParseError {
    /// Stable machine-readable code used in diagnostics logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidCommandFormat { .. } => "invalid_command_format",
            Self::UnknownCommand(_) => "unknown_command",
            Self::InvalidIndex(_) => "invalid_index",
            Self::InvalidWeek(_) => "invalid_week",
            Self::NoFieldEdited => "no_field_edited",
            Self::Validation(err) => err.code(),
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCommandFormat { usage } => {
                write!(f, "Invalid command format!\n{usage}")
            }
            Self::UnknownCommand(word) => write!(f, "Unknown command: {word}"),
            Self::InvalidIndex(value) => {
                write!(f, "Index `{value}` is not a non-zero unsigned integer.")
            }
            Self::InvalidWeek(value) => {
                write!(f, "Week `{value}` is not a non-zero unsigned integer.")
            }
            Self::NoFieldEdited => write!(f, "At least one field to edit must be provided."),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for ParseError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Parses one line of user input into a command.
///
/// # Errors
/// - `InvalidCommandFormat` with the help overview for blank input.
/// - `UnknownCommand` for an unrecognised command word.
/// - Any argument error raised by the word's parser.
pub fn parse_command(input: &str) -> ParseResult<Command> {
    let captures = COMMAND_FORMAT
        .captures(input.trim())
        .ok_or(ParseError::InvalidCommandFormat {
            usage: commands::HELP_USAGE,
        })?;
    let word = &captures["word"];
    let arguments = &captures["arguments"];
    commands::parse_arguments(word, arguments)
}
