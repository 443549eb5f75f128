//! # CLI Tests
//!
//! Tests the eansign binary surface: plain scriptable output on stdout,
//! errors on stderr with a non-zero exit code.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use assert_cmd::Command;
use predicates::prelude::*;

/// Creates an eansign command.
fn eansign_cmd() -> Command {
    Command::cargo_bin("eansign").unwrap()
}

// =============================================================================
// Encoding Output
// =============================================================================

#[test]
fn test_encode_prints_code_and_newline_only() {
    eansign_cmd()
        .args(["test", "45"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^0045245903365\n$").unwrap())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_encode_zero_pads_number_field() {
    eansign_cmd()
        .args(["test", "0"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^0000149399942\n$").unwrap());
}

#[test]
fn test_encode_output_is_salt_dependent() {
    eansign_cmd()
        .args(["other", "45"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^0045253796973\n$").unwrap());
}

// =============================================================================
// Error Handling
// =============================================================================

#[test]
fn test_oversized_number_fails() {
    eansign_cmd()
        .args(["test", "10000"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("10000"));
}

#[test]
fn test_non_numeric_argument_fails() {
    eansign_cmd().args(["test", "abc"]).assert().failure();
}

#[test]
fn test_missing_arguments_fail() {
    eansign_cmd().assert().failure();
    eansign_cmd().arg("test").assert().failure();
}
