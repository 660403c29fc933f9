//! End-to-end checks against the `myproject` binary.

use assert_cmd::Command;
use myproject_app::version::{DEFAULT_VERSION, VERSION};
use predicates::prelude::*;

fn myproject() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_myproject"));
    cmd.env_remove("RUST_LOG").env_remove("RUST_LOG_STYLE");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn prints_greeting_and_exits_zero() {
    myproject()
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello, World!\n"));
}

#[test]
fn greeting_is_printed_exactly_once() {
    let stdout = stdout_of(&mut myproject());
    let greetings = stdout.lines().filter(|line| *line == "Hello, World!").count();
    assert_eq!(greetings, 1, "unexpected stdout: {stdout:?}");
}

#[test]
fn logs_version_banner() {
    myproject()
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("MyProject v{VERSION}")));
}

#[test]
fn banner_is_the_only_log_record() {
    let stdout = stdout_of(&mut myproject());
    let log_lines: Vec<_> = stdout.lines().filter(|line| line.starts_with('[')).collect();

    assert_eq!(log_lines.len(), 1, "unexpected stdout: {stdout:?}");
    assert!(log_lines[0].contains("INFO"));
    assert!(log_lines[0].ends_with(&format!("MyProject v{VERSION}")));
}

#[test]
fn banner_reports_build_supplied_version() {
    let expected = option_env!("MYPROJECT_VERSION").unwrap_or(DEFAULT_VERSION);
    myproject()
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("MyProject v{expected}\n")));
}

#[test]
fn arguments_are_ignored() {
    myproject()
        .args(["--verbose", "extra", "-x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello, World!\n"));
}

#[test]
fn repeated_runs_are_identical() {
    let first = stdout_of(&mut myproject());
    let second = stdout_of(&mut myproject());
    assert_eq!(first, second);
}

#[test]
fn log_filter_can_silence_banner() {
    myproject()
        .env("RUST_LOG", "off")
        .assert()
        .success()
        .stdout(predicate::str::diff("Hello, World!\n"));
}
