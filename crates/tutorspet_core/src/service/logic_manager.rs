//! Command dispatch boundary: parse, execute, persist.

use crate::command::{CommandError, CommandOutput};
use crate::model::tutors_pet::TutorsPet;
use crate::parser::{parse_command, ParseError};
use crate::storage::{StorageError, TutorsPetStorage};
use crate::store::ModelStore;
use log::{debug, error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type LogicResult<T> = Result<T, LogicError>;

#[derive(Debug)]
pub enum LogicError {
    Parse(ParseError),
    Command(CommandError),
    Storage(StorageError),
}

impl LogicError {
    /// Stable machine-readable code used in diagnostics logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Parse(err) => err.code(),
            Self::Command(err) => err.code(),
            Self::Storage(err) => err.code(),
        }
    }
}

impl Display for LogicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Command(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "Could not save data to file: {err}"),
        }
    }
}

impl Error for LogicError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Command(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<ParseError> for LogicError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<CommandError> for LogicError {
    fn from(value: CommandError) -> Self {
        Self::Command(value)
    }
}

impl From<StorageError> for LogicError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Owns the model store and its storage; the single entry point for input.
pub struct LogicManager<S: TutorsPetStorage> {
    store: ModelStore,
    storage: S,
}

impl<S: TutorsPetStorage> LogicManager<S> {
    /// Builds a manager over `storage` starting from `initial`.
    pub fn new(storage: S, initial: TutorsPet) -> Self {
        Self {
            store: ModelStore::new(initial),
            storage,
        }
    }

    /// Loads persisted data, starting empty when nothing is stored yet.
    ///
    /// # Errors
    /// - Any `StorageError` from reading; corrupt data is never overwritten.
    pub fn start(storage: S) -> Result<Self, StorageError> {
        let initial = match storage.read()? {
            Some(data) => data,
            None => {
                warn!("event=startup module=service status=ok data=missing action=start_empty");
                TutorsPet::new()
            }
        };
        Ok(Self::new(storage, initial))
    }

    /// Read access for front ends that render the lists.
    pub fn store(&self) -> &ModelStore {
        &self.store
    }

    /// Backing storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Parses and runs one line of input.
    ///
    /// The data set is saved only when the command changed it.
    ///
    /// # Side effects
    /// - Emits `command_execute` logging events with word, status, duration.
    pub fn execute(&mut self, input: &str) -> LogicResult<CommandOutput> {
        let started_at = Instant::now();
        let command = match parse_command(input) {
            Ok(command) => command,
            Err(err) => {
                debug!(
                    "event=command_parse module=service status=error error_code={}",
                    err.code()
                );
                return Err(err.into());
            }
        };
        let word = command.word();
        let revision = self.store.revision();

        let result = command
            .execute(&mut self.store)
            .map_err(LogicError::from)
            .and_then(|output| {
                if self.store.revision() != revision {
                    self.storage.save(self.store.tutors_pet())?;
                }
                Ok(output)
            });

        match &result {
            Ok(_) => info!(
                "event=command_execute module=service status=ok command={} duration_ms={}",
                word,
                started_at.elapsed().as_millis()
            ),
            Err(LogicError::Storage(err)) => error!(
                "event=command_execute module=service status=error command={} duration_ms={} error_code={}",
                word,
                started_at.elapsed().as_millis(),
                err.code()
            ),
            Err(err) => info!(
                "event=command_execute module=service status=rejected command={} duration_ms={} error_code={}",
                word,
                started_at.elapsed().as_millis(),
                err.code()
            ),
        }
        result
    }
}
