//! Command line behavior of the `wirecube` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn wirecube() -> Command {
    Command::cargo_bin("wirecube").unwrap()
}

#[test]
fn help_lists_flags_and_exits_zero() {
    wirecube()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--fps"))
        .stdout(predicate::str::contains("--frames"))
        .stdout(predicate::str::contains("11111"));
}

#[test]
fn short_help_exits_zero() {
    wirecube()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_exits_zero() {
    wirecube()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn non_numeric_frame_time_is_rejected() {
    wirecube()
        .args(["--fps", "fast"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn unknown_option_is_ignored_before_help() {
    wirecube()
        .args(["--bogus", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--fps"));
}

#[test]
fn missing_terminal_answer_is_an_error() {
    // stdin is closed, so the cursor position report never arrives
    wirecube()
        .args(["--frames", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to read the terminal size"));
}
