//! Persistence of the `TutorsPet` data set.
//!
//! # Responsibility
//! - Define the storage boundary used by the service layer.
//! - Provide the JSON file implementation and its serde adapters.
//!
//! # Invariants
//! - A load either yields a fully validated data set or fails as a whole.
//! - A missing data file is "no data", not an error.
//! - Saves never leave a half-written data file behind.

mod adapted;
mod json_storage;

use crate::model::tutors_pet::TutorsPet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use adapted::JsonSerializableTutorsPet;
pub use json_storage::JsonTutorsPetStorage;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Json(serde_json::Error),
    /// Document parsed but a value violates a model constraint.
    IllegalValue(String),
}

impl StorageError {
    /// Stable machine-readable code used in diagnostics logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "storage_io",
            Self::Json(_) => "storage_json",
            Self::IllegalValue(_) => "storage_illegal_value",
        }
    }
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "data file I/O failed: {err}"),
            Self::Json(err) => write!(f, "data file is not valid JSON: {err}"),
            Self::IllegalValue(message) => write!(f, "{message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::IllegalValue(_) => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Storage boundary for the whole data set.
pub trait TutorsPetStorage {
    /// Loads the persisted data set; `Ok(None)` when nothing is stored yet.
    fn read(&self) -> StorageResult<Option<TutorsPet>>;

    /// Replaces the persisted data set with `data`.
    fn save(&self, data: &TutorsPet) -> StorageResult<()>;
}
