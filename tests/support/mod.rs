//! Test support utilities for decoy integration tests.
//!
//! Provides a helper for running the compiled binary and inspecting its
//! output.

#![allow(dead_code)]

use assert_cmd::Command;
use std::process::Output;

/// Create a decoy command.
///
/// NO_COLOR is set so assertions see plain text regardless of the
/// environment the tests run in.
pub fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("decoy").expect("failed to find decoy binary");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Run `decoy generate` and return the raw output.
pub fn generate() -> Output {
    cmd()
        .arg("generate")
        .output()
        .expect("failed to run decoy generate")
}

/// Run `decoy generate --seed N` and return the raw output.
pub fn generate_seeded(seed: u64) -> Output {
    cmd()
        .args(["generate", "--seed", &seed.to_string()])
        .output()
        .expect("failed to run decoy generate")
}

/// Assert that a command output was successful.
pub fn assert_success(output: &Output) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("Command failed:\n{}", stderr);
    }
}

/// Get stdout as String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Get stderr as String.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Extract the first match of `pattern` in `text`.
pub fn extract(pattern: &str, text: &str) -> Option<String> {
    regex::Regex::new(pattern)
        .expect("invalid test pattern")
        .find(text)
        .map(|m| m.as_str().to_string())
}
