#![deny(missing_docs)]

//! Defines the output format of traces, events, and spans produced
//! by the `apollo` CLI and the libraries it consumes.

mod formatter;

use clap::ValueEnum;

pub use tracing_core::Level;

/// possible log levels
pub const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// The `--log` values accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// only errors
    Error,
    /// errors and warnings
    Warn,
    /// high level progress
    Info,
    /// resolved configuration, file lists and requests
    Debug,
    /// everything, including request and response bodies
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

/// Initializes a global tracing subscriber that writes to stderr.
///
/// By default nothing is printed. The more verbose the level, the more
/// context (targets, thread ids) each line carries.
pub fn init(level: Option<LogLevel>) {
    let Some(level) = level else {
        return;
    };
    let level = Level::from(level);
    formatter::install(level, formatter::Detail::for_level(level));
}
