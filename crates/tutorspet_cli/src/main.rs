//! Interactive shell entry point.
//!
//! # Responsibility
//! - Resolve configuration, start logging, load the data file.
//! - Feed stdin lines to the core `LogicManager` and print results.

mod cli;
mod render;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use tutorspet_core::{
    init_logging, AppConfig, JsonTutorsPetStorage, ListView, LogicManager, UserPrefs,
};

use crate::cli::Cli;
use crate::render::{print_help, print_view};

const PROMPT: &str = "> ";

fn main() -> Result<()> {
    let cli = Cli::parse();
    let working_dir = std::env::current_dir().context("failed to read the working directory")?;
    let prefs_path = working_dir.join(&cli.prefs);
    let prefs = UserPrefs::load(&prefs_path).context("failed to load user preferences")?;
    let config = AppConfig::resolve(cli.overrides(), &prefs, &working_dir);

    init_logging(&config.log_level, &config.log_dir).with_context(|| {
        format!(
            "failed to initialize logging in `{}`",
            config.log_dir.display()
        )
    })?;

    let storage = JsonTutorsPetStorage::new(&config.data_file);
    let mut logic = LogicManager::start(storage).with_context(|| {
        format!(
            "failed to load data file `{}`; fix or remove it to start over",
            config.data_file.display()
        )
    })?;

    println!("Welcome to Tutor's Pet! Type `help` to see every command.");
    print_view(logic.store(), ListView::Both);
    run_shell(&mut logic)?;
    info!("event=app_exit module=cli status=ok");
    Ok(())
}

fn run_shell(logic: &mut LogicManager<JsonTutorsPetStorage>) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{PROMPT}");
        io::stdout().flush().context("failed to flush stdout")?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line.context("failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        match logic.execute(&line) {
            Ok(output) => {
                println!("{}", output.feedback);
                if output.show_help {
                    print_help();
                }
                if let Some(view) = output.view {
                    print_view(logic.store(), view);
                }
                if output.exit {
                    return Ok(());
                }
            }
            Err(err) => println!("{err}"),
        }
    }
}
