#![deny(missing_docs)]
//! Logging front end for grocer.
//!
//! `grocer_engine` reports pipeline stages, skipped write-backs and organizer
//! fallbacks through the `grocer_*` macros; `grocer_core` stays silent. The
//! `grocer` binary owns the global logger: it reads `GROCER_LOG_LEVEL` through
//! [`parse_level`] and installs terminal and/or `./grocer.log` output.
//! Integration tests install [`initialize_for_tests`] once per test binary.

use log::LevelFilter;

/// Trace-level message; used for per-request detail.
#[macro_export]
macro_rules! grocer_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Info-level message; pipeline stages and run summaries.
#[macro_export]
macro_rules! grocer_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Debug-level message.
#[macro_export]
macro_rules! grocer_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Warn-level message; data-quality problems and recoverable service failures.
#[macro_export]
macro_rules! grocer_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Error-level message.
#[macro_export]
macro_rules! grocer_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Parses a level name such as `"info"` or `"DEBUG"`.
///
/// Returns `None` for anything `log` does not recognize.
pub fn parse_level(raw: &str) -> Option<LevelFilter> {
    raw.trim().parse::<LevelFilter>().ok()
}

/// Installs a stderr logger for tests at the `GROCER_LOG_LEVEL` level, or
/// debug when unset.
///
/// Later calls are no-ops once a global logger exists.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

    let level = std::env::var("GROCER_LOG_LEVEL")
        .ok()
        .and_then(|raw| parse_level(&raw))
        .unwrap_or(LevelFilter::Debug);
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Never);
}
