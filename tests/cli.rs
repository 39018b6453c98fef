// Drives the compiled binary through its one-shot subcommands against a
// throwaway data directory.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const HISTORY: &str = r#"[
  {"section": "Reading", "duration": 60000, "timestamp": "2024-01-01T10:00:00Z"},
  {"section": "Writing", "duration": 125000, "timestamp": "2024-01-02T10:00:00Z"},
  {"section": "Reading", "time": 30000, "timestamp": "2024-01-03T10:00:00Z"}
]"#;

fn practimer(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("practimer").unwrap();
    cmd.env_remove("PRACTIMER_HOME")
        .env_remove("PRACTIMER_LOG")
        .arg("--home")
        .arg(home);
    cmd
}

fn seeded_home() -> TempDir {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("history.json"), HISTORY).unwrap();
    home
}

#[test]
fn test_empty_stats_show_no_data() {
    let home = TempDir::new().unwrap();

    practimer(home.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("--:--"));
}

#[test]
fn test_empty_history() {
    let home = TempDir::new().unwrap();

    practimer(home.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No sessions yet"));
}

#[test]
fn test_history_json_is_newest_first() {
    let home = seeded_home();

    let output = practimer(home.path())
        .args(["history", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["count"], 3);
    assert_eq!(value["items"][0]["duration"], "00:30");
    assert_eq!(value["items"][1]["section"], "Writing");
    assert_eq!(value["items"][2]["duration"], "01:00");
}

#[test]
fn test_stats_json() {
    let home = seeded_home();

    let output = practimer(home.path())
        .args(["stats", "--by-section", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["count"], 3);
    assert_eq!(value["total_ms"], 215_000);
    assert_eq!(value["best"], "00:30");
    assert_eq!(value["by_section"][0]["section"], "Writing");
}

#[test]
fn test_delete_by_listed_position() {
    let home = seeded_home();

    practimer(home.path())
        .args(["delete", "2", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Writing"));

    let saved = fs::read_to_string(home.path().join("history.json")).unwrap();
    assert!(!saved.contains("Writing"));
    assert_eq!(saved.matches("Reading").count(), 2);
}

#[test]
fn test_delete_declined_keeps_history() {
    let home = seeded_home();

    practimer(home.path())
        .args(["delete", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Canceled"));

    practimer(home.path())
        .args(["stats", "-o", "json"])
        .assert()
        .stdout(predicate::str::contains("\"count\": 3"));
}

#[test]
fn test_delete_invalid_position_fails() {
    let home = seeded_home();

    practimer(home.path())
        .args(["delete", "9", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No history record at position 9"));
}

#[test]
fn test_corrupt_history_reads_as_empty() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("history.json"), "{not json").unwrap();

    practimer(home.path())
        .args(["stats", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 0"));
}

#[test]
fn test_config_init_and_path() {
    let home = TempDir::new().unwrap();

    practimer(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.yaml"));

    practimer(home.path())
        .args(["config", "init"])
        .assert()
        .success();
    assert!(home.path().join("config.yaml").exists());

    practimer(home.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_invalid_config_is_reported() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("config.yaml"),
        "timer:\n  tick_interval_ms: 5000\n",
    )
    .unwrap();

    practimer(home.path())
        .arg("history")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_sqlite_backend() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("config.yaml"), "storage:\n  backend: sqlite\n").unwrap();

    practimer(home.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 sessions"));
    assert!(home.path().join("practimer.db").exists());
}

#[test]
fn test_completions() {
    let home = TempDir::new().unwrap();

    practimer(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("practimer"));
}
