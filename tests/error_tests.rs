//! Error scenario integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn perf_notifier_bin(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("perf-notifier").expect("binary should build");
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path());
    cmd
}

#[test]
fn config_get_unknown_key() {
    let home = TempDir::new().unwrap();
    perf_notifier_bin(&home)
        .args(["config", "get", "unknown_key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn config_set_unknown_key() {
    let home = TempDir::new().unwrap();
    perf_notifier_bin(&home)
        .args(["config", "set", "unknown_key", "value"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Valid keys"));
}

#[test]
fn config_set_invalid_backend() {
    let home = TempDir::new().unwrap();
    perf_notifier_bin(&home)
        .args(["config", "set", "backend", "carrier-pigeon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid backend"));
}

#[test]
fn config_set_invalid_auto_cancel() {
    let home = TempDir::new().unwrap();
    perf_notifier_bin(&home)
        .args(["config", "set", "auto_cancel", "maybe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'true' or 'false'"));
}

#[test]
fn config_init_twice_fails() {
    let home = TempDir::new().unwrap();
    perf_notifier_bin(&home)
        .args(["config", "init"])
        .assert()
        .success();

    perf_notifier_bin(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn run_requires_a_command() {
    let home = TempDir::new().unwrap();
    perf_notifier_bin(&home)
        .args(["run", "-b", "memory"])
        .assert()
        .failure()
        .code(2);
}
