//! Console availability for debug builds on Windows.
//!
//! A process started from an IDE or debugger may have no console bound to its
//! standard streams. In debug builds on Windows the entry point attaches to
//! the parent console, or creates a new one and points stdout/stderr at it.
//! Everywhere else the streams are left as they are. Platform calls live in
//! the `windows` submodule to keep `#[cfg]` usage centralized.

#[cfg(windows)]
mod windows;

/// How the process should make a console available before writing output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ConsoleSetup {
    /// Keep whatever standard streams the process was started with.
    Inherit,
    /// Attach to the parent console, or allocate one and redirect stdout/stderr.
    AttachOrCreate,
}

/// What [`ConsoleSetup::apply`] actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ConsoleOutcome {
    /// Nothing was attempted.
    #[display("skipped")]
    Skipped,
    /// The process already owned a console.
    #[display("already attached")]
    AlreadyAttached,
    /// Attached to the parent process console.
    #[display("attached to parent console")]
    Attached,
    /// No parent console existed, so a new one was allocated.
    #[display("created new console")]
    Created,
}

/// Errors raised while preparing the console. None of them are fatal.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ConsoleError {
    /// Attaching was requested on a platform without Win32 consoles.
    #[display("console attachment is not supported on this platform")]
    Unsupported,
    /// `AllocConsole` failed.
    #[display("failed to allocate a console (os error {code})")]
    Allocate {
        /// Win32 error code.
        code: u32,
    },
    /// `CONOUT$` could not be opened.
    #[display("failed to open console output: {source}")]
    OpenConsoleOutput {
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// `SetStdHandle` failed.
    #[display("failed to redirect standard handle (os error {code})")]
    Redirect {
        /// Win32 error code.
        code: u32,
    },
}

impl ConsoleOutcome {
    /// Whether stdout/stderr must be pointed at the console afterwards.
    ///
    /// Only a freshly allocated console needs it; an attached process keeps
    /// the standard handles it was started with, including pipes.
    #[must_use]
    pub const fn redirects_std_streams(self) -> bool {
        matches!(self, Self::Created)
    }
}

impl ConsoleSetup {
    /// Chooses the strategy for a target platform and build mode.
    #[must_use]
    pub const fn select(windows: bool, debug_build: bool) -> Self {
        if windows && debug_build {
            Self::AttachOrCreate
        } else {
            Self::Inherit
        }
    }

    /// Chooses the strategy for the platform and build mode of this binary.
    #[must_use]
    pub const fn detect() -> Self {
        Self::select(cfg!(windows), cfg!(debug_assertions))
    }

    /// Applies the strategy.
    ///
    /// Failures leave the standard streams untouched; callers are expected to
    /// carry on and write wherever stdout is currently bound.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError`] when attaching or redirecting fails, or when
    /// attaching is requested off Windows.
    pub fn apply(self) -> Result<ConsoleOutcome, ConsoleError> {
        match self {
            Self::Inherit => Ok(ConsoleOutcome::Skipped),
            Self::AttachOrCreate => attach_or_create(),
        }
    }
}

#[cfg(windows)]
fn attach_or_create() -> Result<ConsoleOutcome, ConsoleError> {
    windows::attach_or_create()
}

#[cfg(not(windows))]
fn attach_or_create() -> Result<ConsoleOutcome, ConsoleError> {
    Err(ConsoleError::Unsupported)
}
