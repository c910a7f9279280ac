use std::env;
use std::io;

use tracing_subscriber::fmt;

use crate::Level;

/// How much context each log line carries besides its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Detail {
    /// message and level only
    Message,
    /// adds the emitting module and source location
    Location,
    /// adds thread ids, for following concurrent document set resolution
    Threads,
}

impl Detail {
    pub(crate) fn for_level(level: Level) -> Detail {
        if level >= Level::TRACE {
            Detail::Threads
        } else if level >= Level::DEBUG {
            Detail::Location
        } else {
            Detail::Message
        }
    }
}

// stderr is shared with the step log, so ansi codes follow the same opt-outs
fn use_ansi() -> bool {
    ["NO_COLOR", "APOLLO_NO_COLOR"]
        .iter()
        .all(|key| env::var_os(key).is_none_or(|value| value.is_empty()))
}

pub(crate) fn install(level: Level, detail: Detail) {
    let builder = fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_ansi(use_ansi())
        .without_time();

    match detail {
        Detail::Message => builder.with_target(false).compact().init(),
        Detail::Location => builder
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .init(),
        Detail::Threads => builder
            .with_file(true)
            .with_line_number(true)
            .with_thread_ids(true)
            .init(),
    }
}
