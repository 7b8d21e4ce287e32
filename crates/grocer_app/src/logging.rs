//! Logger initialization for the grocer binary.
//!
//! File output goes to `./grocer.log` in the current working directory.

use std::fs::File;
use std::path::PathBuf;

use grocer_logging::parse_level;
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

use crate::cli::LogTarget;

const LOG_FILE: &str = "./grocer.log";
const LEVEL_ENV: &str = "GROCER_LOG_LEVEL";

/// Destination for log output.
pub enum LogDestination {
    File,
    Terminal,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::File => LogDestination::File,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

/// Debug when `verbose`, else `GROCER_LOG_LEVEL`, else info.
pub fn level(verbose: bool) -> LevelFilter {
    if verbose {
        return LevelFilter::Debug;
    }
    std::env::var(LEVEL_ENV)
        .ok()
        .and_then(|raw| parse_level(&raw))
        .unwrap_or(LevelFilter::Info)
}

/// Initialize the global logger. Failures to open the log file are reported
/// on stderr and fall back to whatever loggers could be created.
pub fn initialize(destination: LogDestination, level: LevelFilter) {
    let config = build_config();

    let loggers: Vec<Box<dyn SharedLogger>> = match destination {
        LogDestination::File => match create_file_logger(level, config) {
            Some(file_logger) => vec![file_logger],
            None => return,
        },
        LogDestination::Terminal => vec![terminal_logger(level, config)],
        LogDestination::Both => {
            let mut loggers = vec![terminal_logger(level, config.clone())];
            if let Some(file_logger) = create_file_logger(level, config) {
                loggers.push(file_logger);
            }
            loggers
        }
    };

    let _ = CombinedLogger::init(loggers);
}

fn terminal_logger(level: LevelFilter, config: Config) -> Box<dyn SharedLogger> {
    // Logs go to stderr so stdout carries only the grocery list.
    TermLogger::new(level, config, TerminalMode::Stderr, ColorChoice::Auto)
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(level: LevelFilter, config: Config) -> Option<Box<WriteLogger<File>>> {
    let log_path = PathBuf::from(LOG_FILE);
    match File::create(&log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
            None
        }
    }
}
