//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including test
//! environment setup with temporary directories and command builders.

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    #[allow(dead_code)]
    pub temp_path: PathBuf,
    /// Path to the roomlet data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory path is not created yet - roomlet will create it.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("roomlet-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    pub fn command_bare(&self) -> Command {
        Command::cargo_bin("roomlet").expect("Failed to find roomlet binary")
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Add a house and return its id, parsed from --quiet output.
    pub fn add_house(&self, landlord: &str, room_type: &str) -> String {
        let output = self
            .command()
            .args([
                "--quiet",
                "add-house",
                "--landlord",
                landlord,
                "--title",
                "Test room",
                "--address",
                "1 Test Street",
                "--room-type",
                room_type,
            ])
            .output()
            .expect("Failed to run add-house");
        assert!(output.status.success(), "add-house should succeed");
        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8")
            .trim()
            .to_string()
    }

    /// Reserve a house for a student and return the reservation id.
    pub fn reserve(&self, student: &str, house_id: &str) -> String {
        let output = self
            .command()
            .args([
                "--quiet",
                "reserve",
                "--student",
                student,
                "--house",
                house_id,
            ])
            .output()
            .expect("Failed to run reserve");
        assert!(output.status.success(), "reserve should succeed");
        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8")
            .trim()
            .to_string()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
