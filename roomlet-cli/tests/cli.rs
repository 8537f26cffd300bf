//! Integration tests for the roomlet CLI.
//!
//! These tests verify that the CLI binary behaves correctly, including
//! argument parsing, help text, and version output.

use assert_cmd::Command;
use predicates::prelude::*;

/// Test that the binary runs without arguments and displays help/error.
#[test]
fn test_cli_no_arguments() {
    let mut cmd = Command::cargo_bin("roomlet").expect("Failed to find roomlet binary");

    // With clap subcommands required, no arguments should fail and show usage
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

/// Test that the --version flag displays version information.
#[test]
fn test_cli_version_flag() {
    let mut cmd = Command::cargo_bin("roomlet").expect("Failed to find roomlet binary");

    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("roomlet"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that the --help flag displays help text.
#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::cargo_bin("roomlet").expect("Failed to find roomlet binary");

    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains(
            "Manage student-housing room reservations",
        ));
}

/// Test that an invalid subcommand produces an error.
#[test]
fn test_cli_invalid_subcommand() {
    let mut cmd = Command::cargo_bin("roomlet").expect("Failed to find roomlet binary");

    cmd.arg("invalid-command");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

/// Test that an invalid flag produces an error.
#[test]
fn test_cli_invalid_flag() {
    let mut cmd = Command::cargo_bin("roomlet").expect("Failed to find roomlet binary");

    cmd.arg("--invalid-flag");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

/// Test that show-data-dir honors the global --data-dir flag.
#[test]
fn test_show_data_dir_override() {
    let mut cmd = Command::cargo_bin("roomlet").expect("Failed to find roomlet binary");

    cmd.args(["--data-dir", "/tmp/roomlet-override", "show-data-dir"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("/tmp/roomlet-override"));
}
