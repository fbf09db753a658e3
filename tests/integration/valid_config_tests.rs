//! These tests are mostly here just to ensure that valid config files are
//! accepted and actually applied.

use std::{fs, path::PathBuf};

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{loadcheck_command, on_path, Sandbox};

#[test]
fn test_empty_config() {
    // An empty config falls back to `top` for snapshots.
    let expected = if on_path("top") { 0 } else { 2 };

    Sandbox::new()
        .no_cfg_command()
        .arg("--profile")
        .arg("proc")
        .arg("--rate")
        .arg("1000")
        .assert()
        .code(expected)
        .stdout(predicate::str::contains(" CPU_Load - "));
}

#[test]
fn test_all_options() {
    let sandbox = Sandbox::new();

    let output = sandbox
        .command("./tests/valid_configs/all_options.toml")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0 Load_Average - OK - "))
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let summary = stdout
        .trim_start_matches("0 Load_Average - OK - ")
        .rsplit_once(", Load: ")
        .map(|(summary, _)| summary)
        .unwrap();

    assert!(summary.split_whitespace().count() <= 3);
    assert!(summary
        .split_whitespace()
        .all(|entry| entry.contains('=')));
}

/// Writes a config into the sandbox whose lock and log paths differ from the ones
/// passed as arguments, with its lock already taken.
fn write_config_with_paths(sandbox: &Sandbox) -> (String, PathBuf, PathBuf) {
    let config_lock = sandbox.path().join("config.lock");
    let config_log = sandbox.path().join("config.log");
    fs::write(&config_lock, "12345").unwrap();

    let config = sandbox.path().join("paths.toml");
    fs::write(
        &config,
        format!(
            "rate = 1000.0\nlock_file = '{}'\nlog_file = '{}'\n\n[snapshot]\nprogram = \"sh\"\nargs = [\"-c\", \"echo snapshot\"]\n",
            config_lock.display(),
            config_log.display()
        ),
    )
    .unwrap();

    (config.to_string_lossy().into_owned(), config_lock, config_log)
}

#[test]
fn test_arguments_override_config_paths() {
    let sandbox = Sandbox::new();
    let (config, config_lock, config_log) = write_config_with_paths(&sandbox);

    // The config's lock is taken, so this only succeeds if the argument's lock is used.
    sandbox
        .command(&config)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0 CPU_Load - OK - "));

    assert_eq!(fs::read_to_string(&config_lock).unwrap(), "12345");
    assert!(!config_log.exists());
    assert!(!sandbox.lock_path().exists());
}

#[test]
fn test_config_paths_are_used() {
    let sandbox = Sandbox::new();
    let (config, config_lock, config_log) = write_config_with_paths(&sandbox);

    loadcheck_command(&["-C", &config])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(config_lock.display().to_string()));

    assert!(fs::read_to_string(&config_log)
        .unwrap()
        .contains(" - Aborted, lock file"));
    assert!(!sandbox.log_path().exists());
}
