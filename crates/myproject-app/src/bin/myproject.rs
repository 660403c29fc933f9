//! `myproject` entry point.
//!
//! Prepares a console on Windows debug builds, logs the version banner and
//! prints the greeting. Command-line arguments are accepted and ignored.

use std::{io, process::ExitCode};

use log::{Level, Log as _};
use myproject_app::{
    app,
    console::ConsoleSetup,
    logging::{self, LogSettings},
};

fn main() -> ExitCode {
    better_panic::install();

    let console = ConsoleSetup::detect();
    // Best effort: on failure output goes wherever stdout is already bound.
    let _ = console.apply();

    let logger = logging::build_logger(&LogSettings::for_build(console));

    let status = match app::run(&logger, &mut io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            logging::emit(
                &logger,
                Level::Error,
                format_args!("failed to write greeting: {err}"),
            );
            ExitCode::FAILURE
        }
    };

    logger.flush();
    status
}
