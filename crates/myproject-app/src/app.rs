//! The greeting routine run by the `myproject` binary.

use std::io::{self, Write};

use log::{Level, Log};

use crate::{logging, version};

/// Text written to stdout on every run.
pub const GREETING: &str = "Hello, World!";

/// Logs the version banner at info severity, then writes [`GREETING`] and a
/// newline to `out`.
///
/// # Errors
///
/// Returns any error raised while writing to or flushing `out`.
pub fn run<W: Write>(logger: &dyn Log, out: &mut W) -> io::Result<()> {
    logging::emit(
        logger,
        Level::Info,
        format_args!("{}", version::banner(version::VERSION)),
    );
    writeln!(out, "{GREETING}")?;
    out.flush()
}
