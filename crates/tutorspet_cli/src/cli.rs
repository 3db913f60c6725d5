//! Command-line arguments for the Tutor's Pet shell.

use std::path::PathBuf;

use clap::Parser;
use tutorspet_core::config::DEFAULT_PREFS_FILE;
use tutorspet_core::ConfigOverrides;

#[derive(Debug, Parser)]
#[command(
    name = "tutorspet",
    version,
    about = "Tutor's Pet - manage students, classes, lessons and attendance",
    long_about = "Interactive shell for tutors.\n\n\
                  Type `help` at the prompt for the full command list.\n\
                  Every change is saved to the JSON data file immediately."
)]
pub struct Cli {
    /// JSON data file (default: dataFilePath from the preferences file).
    #[arg(long = "data-file", value_name = "PATH", env = "TUTORSPET_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Preferences file.
    #[arg(
        long = "prefs",
        value_name = "PATH",
        env = "TUTORSPET_PREFS",
        default_value = DEFAULT_PREFS_FILE
    )]
    pub prefs: PathBuf,

    /// Log level: trace, debug, info, warn or error.
    #[arg(long = "log-level", value_name = "LEVEL", env = "TUTORSPET_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Directory for rotating log files (default: <data file dir>/logs).
    #[arg(long = "log-dir", value_name = "DIR", env = "TUTORSPET_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            data_file: self.data_file.clone(),
            log_level: self.log_level.clone(),
            log_dir: self.log_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn flags_map_to_overrides() {
        let cli = Cli::try_parse_from([
            "tutorspet",
            "--data-file",
            "pet.json",
            "--log-level",
            "warn",
        ])
        .unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.data_file, Some(PathBuf::from("pet.json")));
        assert_eq!(overrides.log_level.as_deref(), Some("warn"));
    }
}
