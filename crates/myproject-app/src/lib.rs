//! Startup pieces for the `myproject` binary: console preparation, logger
//! construction, build version, and the greeting routine.

pub mod app;
pub mod console;
pub mod logging;
pub mod version;
