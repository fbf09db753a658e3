//! Full runs of the check against the real machine. The rates are picked so the
//! outcome doesn't depend on how busy the machine is.

use std::fs;

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{loadcheck_command, Sandbox};

const SHELL_SNAPSHOT: &str = "./tests/valid_configs/shell_snapshot.toml";
const STATUS_LINE: &str = r"^[01] CPU_Load - (OK|WARNING) - .*, Load: \d+\.\d{2}\n$";

#[test]
fn test_high_rate_is_ok() {
    let sandbox = Sandbox::new();

    sandbox
        .command(SHELL_SNAPSHOT)
        .arg("--rate")
        .arg("1000")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0 CPU_Load - OK - "))
        .stdout(predicate::str::is_match(STATUS_LINE).unwrap());

    assert!(!sandbox.lock_path().exists());
    assert!(sandbox.log_contents().is_empty());
}

#[test]
fn test_zero_rate() {
    let sandbox = Sandbox::new();

    let output = sandbox
        .command(SHELL_SNAPSHOT)
        .arg("--rate")
        .arg("0")
        .assert()
        .success()
        .stdout(predicate::str::is_match(STATUS_LINE).unwrap())
        .get_output()
        .stdout
        .clone();

    // A fully idle machine can still report a load of 0.00, which isn't above 0.
    let stdout = String::from_utf8(output).unwrap();
    if stdout.starts_with("1 CPU_Load - WARNING") {
        let log = sandbox.log_contents();
        assert!(log.contains("exceeds limit of 0.00, or 0 per CPU for"));
        assert!(log.contains("snapshot\n"));
    } else {
        assert!(stdout.starts_with("0 CPU_Load - OK"));
    }

    assert!(!sandbox.lock_path().exists());
}

#[test]
fn test_verbose() {
    Sandbox::new()
        .command(SHELL_SNAPSHOT)
        .arg("-v")
        .arg("--rate")
        .arg("1000")
        .assert()
        .success()
        .stdout(predicate::str::contains("[DEBUG]"))
        .stdout(predicate::str::contains("0 CPU_Load - OK - "));
}

#[test]
fn test_quiet_by_default() {
    Sandbox::new()
        .command(SHELL_SNAPSHOT)
        .arg("--rate")
        .arg("1000")
        .assert()
        .success()
        .stdout(predicate::str::contains("[DEBUG]").not());
}

#[test]
fn test_existing_lock() {
    let sandbox = Sandbox::new();
    fs::write(sandbox.lock_path(), "12345").unwrap();

    sandbox
        .command(SHELL_SNAPSHOT)
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with(
            "3 CPU_Load - UNKNOWN - lock file",
        ))
        .stdout(predicate::str::contains("possible hang"))
        .stdout(predicate::str::ends_with("Load: n/a\n"));

    // Someone else's lock is left alone.
    assert_eq!(fs::read_to_string(sandbox.lock_path()).unwrap(), "12345");
    assert!(sandbox.log_contents().contains(" - Aborted, lock file"));
}

#[test]
fn test_lock_in_missing_directory() {
    let sandbox = Sandbox::new();
    let lock = sandbox.path().join("missing").join("loadcheck.lock");

    loadcheck_command(&["-C", SHELL_SNAPSHOT])
        .arg("--lock_file")
        .arg(&lock)
        .arg("--log_file")
        .arg(sandbox.log_path())
        .assert()
        .code(3)
        .stdout(predicate::str::starts_with(
            "3 CPU_Load - UNKNOWN - unable to use lock file",
        ))
        .stdout(predicate::str::contains(lock.display().to_string()));

    assert!(!lock.exists());
}

#[test]
fn test_missing_utility() {
    let sandbox = Sandbox::new();

    sandbox
        .command("./tests/valid_configs/missing_utility.toml")
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "required utility 'definitely-not-a-real-loadcheck-utility' was not found",
        ));

    assert!(!sandbox.lock_path().exists());
    assert!(sandbox.log_contents().contains(" - Aborted, required utility"));
}

#[test]
fn test_sequential_runs() {
    let sandbox = Sandbox::new();

    for _ in 0..2 {
        sandbox
            .command(SHELL_SNAPSHOT)
            .arg("--rate")
            .arg("1000")
            .assert()
            .success();

        assert!(!sandbox.lock_path().exists());
    }
}
