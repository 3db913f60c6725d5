//! JSON file implementation of `TutorsPetStorage`.

use crate::model::tutors_pet::TutorsPet;
use crate::storage::{JsonSerializableTutorsPet, StorageError, StorageResult, TutorsPetStorage};
use log::{error, info};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Reads and writes one JSON data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonTutorsPetStorage {
    path: PathBuf,
}

impl JsonTutorsPetStorage {
    /// Storage backed by the JSON file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the data file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut file_name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        file_name.push(".tmp");
        self.path.with_file_name(file_name)
    }

    fn read_document(&self) -> StorageResult<Option<TutorsPet>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let document: JsonSerializableTutorsPet = serde_json::from_str(&content)?;
        document.to_model().map(Some)
    }

    fn write_document(&self, data: &TutorsPet) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&JsonSerializableTutorsPet::from_model(data))?;
        let temp_path = self.temp_path();
        fs::write(&temp_path, content)?;
        if let Err(err) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(err.into());
        }
        Ok(())
    }
}

impl TutorsPetStorage for JsonTutorsPetStorage {
    /// # Side effects
    /// - Emits `storage_load` logging events with duration and status.
    fn read(&self) -> StorageResult<Option<TutorsPet>> {
        let started_at = Instant::now();
        info!("event=storage_load module=storage status=start");
        match self.read_document() {
            Ok(loaded) => {
                info!(
                    "event=storage_load module=storage status=ok found={} duration_ms={}",
                    loaded.is_some(),
                    started_at.elapsed().as_millis()
                );
                Ok(loaded)
            }
            Err(err) => {
                log_failure("storage_load", started_at, &err);
                Err(err)
            }
        }
    }

    /// # Side effects
    /// - Writes a `.tmp` sibling file, then renames it over the data file.
    /// - Emits `storage_save` logging events with duration and status.
    fn save(&self, data: &TutorsPet) -> StorageResult<()> {
        let started_at = Instant::now();
        match self.write_document(data) {
            Ok(()) => {
                info!(
                    "event=storage_save module=storage status=ok students={} classes={} duration_ms={}",
                    data.students().len(),
                    data.module_classes().len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                log_failure("storage_save", started_at, &err);
                Err(err)
            }
        }
    }
}

fn log_failure(event: &str, started_at: Instant, err: &StorageError) {
    error!(
        "event={event} module=storage status=error duration_ms={} error_code={}",
        started_at.elapsed().as_millis(),
        err.code()
    );
}
