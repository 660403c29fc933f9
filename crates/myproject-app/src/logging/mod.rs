//! Logger construction.
//!
//! The logger is an owned [`FanoutLogger`] handed to whoever needs it; it is
//! never installed as the global `log` logger. Records are written to stdout
//! through `env_logger`, and additionally to the debugger output on Windows
//! debug builds.

#[cfg(windows)]
mod debug_console;
mod fanout;

use std::fmt;

use log::{Level, LevelFilter, Log, Record};

use crate::console::ConsoleSetup;

#[cfg(windows)]
pub use self::debug_console::DebugConsoleSink;
pub use self::fanout::FanoutLogger;

/// Target attached to every record emitted by this crate.
pub const LOG_TARGET: &str = "myproject";

/// Severity and destination settings derived from the build mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSettings {
    /// Minimum severity written by every sink (before `RUST_LOG` refinement).
    pub level: LevelFilter,
    /// Records at or above this severity are flushed immediately.
    pub flush_on: Option<Level>,
    /// Also write to the platform debugger output.
    pub debug_console: bool,
}

impl LogSettings {
    /// Debug builds log at `debug` and flush every record; release builds log
    /// at `info` and leave flushing to the end of the run.
    #[must_use]
    pub fn new(debug_build: bool, console: ConsoleSetup) -> Self {
        let (level, flush_on) = if debug_build {
            (LevelFilter::Debug, Some(Level::Debug))
        } else {
            (LevelFilter::Info, None)
        };
        Self {
            level,
            flush_on,
            debug_console: console.is_attach_or_create(),
        }
    }

    /// Settings for the build mode of this binary.
    #[must_use]
    pub fn for_build(console: ConsoleSetup) -> Self {
        Self::new(cfg!(debug_assertions), console)
    }
}

/// Builds the process logger described by `settings`.
#[must_use]
pub fn build_logger(settings: &LogSettings) -> FanoutLogger {
    let mut sinks: Vec<Box<dyn Log>> = Vec::with_capacity(2);

    #[cfg(windows)]
    {
        if settings.debug_console {
            sinks.push(Box::new(DebugConsoleSink::new(settings.level)));
        }
    }

    sinks.push(Box::new(stdout_sink(settings.level)));

    FanoutLogger::new(sinks, settings.flush_on)
}

/// Colored stdout sink. `RUST_LOG` and `RUST_LOG_STYLE` refine the defaults.
fn stdout_sink(level: LevelFilter) -> env_logger::Logger {
    env_logger::Builder::new()
        .target(env_logger::Target::Stdout)
        .write_style(env_logger::WriteStyle::Auto)
        .format_timestamp(None)
        .filter_level(level)
        .parse_env(env_logger::Env::default())
        .build()
}

/// Sends one record with this crate's target to `logger`.
pub fn emit(logger: &dyn Log, level: Level, args: fmt::Arguments<'_>) {
    logger.log(
        &Record::builder()
            .level(level)
            .target(LOG_TARGET)
            .args(args)
            .build(),
    );
}
