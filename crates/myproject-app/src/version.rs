//! Build-time version information.

/// Product name used in the startup banner.
pub const PROJECT_NAME: &str = "MyProject";

/// Version reported when the build does not supply `MYPROJECT_VERSION`.
pub const DEFAULT_VERSION: &str = "0.0.0-dev";

/// Version string injected at compile time through `MYPROJECT_VERSION`.
///
/// Building with `MYPROJECT_VERSION=1.2.3` makes the banner read
/// `MyProject v1.2.3`; cargo rebuilds the crate when the variable changes.
pub const VERSION: &str = resolve_version(option_env!("MYPROJECT_VERSION"));

/// Picks the supplied version, or [`DEFAULT_VERSION`] when none was given.
#[must_use]
pub const fn resolve_version(supplied: Option<&'static str>) -> &'static str {
    match supplied {
        Some(version) => version,
        None => DEFAULT_VERSION,
    }
}

/// Formats the startup banner, e.g. `MyProject v1.2.3`.
#[must_use]
pub fn banner(version: &str) -> String {
    format!("{PROJECT_NAME} v{version}")
}
