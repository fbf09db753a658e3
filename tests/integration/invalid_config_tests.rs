//! These tests are for testing some invalid config-file-specific options.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::Sandbox;

#[test]
fn test_toml_mismatch_type() {
    Sandbox::new()
        .command("./tests/invalid_configs/toml_mismatch_type.toml")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid type"));
}

#[test]
fn test_unknown_key() {
    Sandbox::new()
        .command("./tests/invalid_configs/unknown_key.toml")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown field"));
}

#[test]
fn test_negative_rate() {
    Sandbox::new()
        .command("./tests/invalid_configs/negative_rate.toml")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("'rate' must be a non-negative"));
}

#[test]
fn test_zero_top_count() {
    Sandbox::new()
        .command("./tests/invalid_configs/zero_top_count.toml")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("'top_count' must be at least 1"));
}

#[test]
fn test_invalid_profile() {
    Sandbox::new()
        .command("./tests/invalid_configs/invalid_profile.toml")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown variant"));
}

#[test]
fn test_empty_snapshot_program() {
    Sandbox::new()
        .command("./tests/invalid_configs/empty_snapshot_program.toml")
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "'snapshot.program' was set with an invalid value",
        ));
}

#[test]
fn test_spaced_check_name() {
    Sandbox::new()
        .command("./tests/invalid_configs/spaced_check_name.toml")
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "'check_name' was set with an invalid value",
        ));
}
