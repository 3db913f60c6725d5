//! User preferences and resolved application configuration.
//!
//! # Invariants
//! - A missing preferences file yields defaults; a malformed one is an error.
//! - Explicit overrides always win over preferences.
//! - The resolved log directory is absolute.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::logging::default_log_level;

pub const DEFAULT_PREFS_FILE: &str = "preferences.json";
pub const DEFAULT_DATA_FILE: &str = "data/tutorspet.json";
const LOG_DIR_NAME: &str = "logs";

#[derive(Debug)]
pub enum ConfigError {
    Read { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read preferences `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "malformed preferences `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

/// Persisted user preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPrefs {
    pub data_file_path: PathBuf,
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            data_file_path: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl UserPrefs {
    /// Reads preferences from `path`, falling back to defaults when absent.
    ///
    /// # Errors
    /// - `Read` on I/O failure other than not-found.
    /// - `Parse` when the file is not a valid preferences document.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Values supplied explicitly by the caller (CLI flags or environment).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub data_file: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_dir: Option<PathBuf>,
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_file: PathBuf,
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Resolves overrides > preferences > defaults.
    ///
    /// Relative paths are anchored at `working_dir`. The log directory
    /// defaults to `logs/` next to the data file.
    pub fn resolve(overrides: ConfigOverrides, prefs: &UserPrefs, working_dir: &Path) -> Self {
        let data_file = working_dir.join(
            overrides
                .data_file
                .unwrap_or_else(|| prefs.data_file_path.clone()),
        );
        let log_dir = match overrides.log_dir {
            Some(dir) => working_dir.join(dir),
            None => data_file
                .parent()
                .unwrap_or(working_dir)
                .join(LOG_DIR_NAME),
        };
        Self {
            data_file,
            log_level: overrides
                .log_level
                .unwrap_or_else(|| default_log_level().to_string()),
            log_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigError, ConfigOverrides, UserPrefs, DEFAULT_DATA_FILE};
    use crate::logging::default_log_level;
    use std::path::{Path, PathBuf};

    #[test]
    fn missing_prefs_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = UserPrefs::load(&dir.path().join("preferences.json")).unwrap();
        assert_eq!(prefs.data_file_path, PathBuf::from(DEFAULT_DATA_FILE));
    }

    #[test]
    fn prefs_are_read_and_malformed_prefs_fail() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");

        std::fs::write(&path, r#"{"dataFilePath": "records/pet.json"}"#).unwrap();
        assert_eq!(
            UserPrefs::load(&path).unwrap().data_file_path,
            PathBuf::from("records/pet.json")
        );

        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            UserPrefs::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn defaults_anchor_logs_next_to_data_file() {
        let config = AppConfig::resolve(
            ConfigOverrides::default(),
            &UserPrefs::default(),
            Path::new("/home/tutor"),
        );
        assert_eq!(config.data_file, Path::new("/home/tutor/data/tutorspet.json"));
        assert_eq!(config.log_dir, Path::new("/home/tutor/data/logs"));
        assert_eq!(config.log_level, default_log_level());
    }

    #[test]
    fn overrides_win_over_prefs() {
        let prefs = UserPrefs {
            data_file_path: PathBuf::from("prefs.json"),
        };
        let overrides = ConfigOverrides {
            data_file: Some(PathBuf::from("/srv/pet.json")),
            log_level: Some("warn".to_string()),
            log_dir: Some(PathBuf::from("var/log")),
        };
        let config = AppConfig::resolve(overrides, &prefs, Path::new("/home/tutor"));
        assert_eq!(config.data_file, Path::new("/srv/pet.json"));
        assert_eq!(config.log_dir, Path::new("/home/tutor/var/log"));
        assert_eq!(config.log_level, "warn");
    }
}
