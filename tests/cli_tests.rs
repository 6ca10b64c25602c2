//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary with its config directory pointed at an empty temp dir
fn perf_notifier_bin(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("perf-notifier").expect("binary should build");
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_output() {
    let home = TempDir::new().unwrap();
    perf_notifier_bin(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("--backend"))
        .stdout(predicate::str::contains("--title"));
}

#[test]
fn version_output() {
    let home = TempDir::new().unwrap();
    perf_notifier_bin(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("perf-notifier"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_subcommand_is_usage_error() {
    let home = TempDir::new().unwrap();
    perf_notifier_bin(&home).assert().failure().code(2);
}

#[test]
fn show_with_memory_backend() {
    let home = TempDir::new().unwrap();
    perf_notifier_bin(&home)
        .args(["show", "Benchmark finished", "--backend", "memory"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Memory backend"));
}

#[test]
fn show_with_dismiss_after_withdraws() {
    let home = TempDir::new().unwrap();
    perf_notifier_bin(&home)
        .args(["show", "x", "-b", "memory", "--dismiss-after", "0"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Notification withdrawn"));
}

#[test]
fn show_rejects_unknown_icon() {
    let home = TempDir::new().unwrap();
    perf_notifier_bin(&home)
        .args(["show", "x", "-b", "memory", "--icon", "sparkles"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[cfg(unix)]
#[test]
fn run_propagates_child_exit_code() {
    let home = TempDir::new().unwrap();
    perf_notifier_bin(&home)
        .args(["run", "-b", "memory", "-n", "--", "sh", "-c", "exit 4"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("exited with code 4"));
}

#[cfg(unix)]
#[test]
fn run_success_reports_label() {
    let home = TempDir::new().unwrap();
    perf_notifier_bin(&home)
        .args(["run", "-b", "memory", "--label", "bench", "--", "true"])
        .assert()
        .success()
        .stderr(predicate::str::contains("bench finished"));
}

#[test]
fn run_unknown_program_fails() {
    let home = TempDir::new().unwrap();
    perf_notifier_bin(&home)
        .args(["run", "-b", "memory", "--", "perf-notifier-no-such-program"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("perf-notifier-no-such-program"));
}

#[test]
fn config_round_trip() {
    let home = TempDir::new().unwrap();
    perf_notifier_bin(&home)
        .args(["config", "set", "title", "Nightly bench"])
        .assert()
        .success();

    perf_notifier_bin(&home)
        .args(["config", "get", "title"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nightly bench"));
}

#[test]
fn config_help() {
    let home = TempDir::new().unwrap();
    perf_notifier_bin(&home)
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("path"));
}
