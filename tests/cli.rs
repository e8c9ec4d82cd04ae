use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn worktimer(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("worktimer").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("RUST_LOG")
        .current_dir(home.path());
    cmd
}

fn elapsed_seconds(home: &TempDir) -> f64 {
    let contents = std::fs::read_to_string(home.path().join("timer_data.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    value["elapsed_seconds"].as_f64().unwrap()
}

#[test]
fn status_on_missing_record_is_zero() {
    let home = TempDir::new().unwrap();

    worktimer(&home)
        .args(["status", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"display\": \"00:00:00\""));

    assert!(!home.path().join("timer_data.json").exists());
}

#[test]
fn add_then_sub_round_trips() {
    let home = TempDir::new().unwrap();

    worktimer(&home)
        .args(["add", "90", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("01:30:00"));
    assert!((elapsed_seconds(&home) - 5400.0).abs() < f64::EPSILON);

    worktimer(&home)
        .args(["sub", "30", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("01:00:00"));
    assert!((elapsed_seconds(&home) - 3600.0).abs() < f64::EPSILON);
}

#[test]
fn sub_clamps_at_zero() {
    let home = TempDir::new().unwrap();

    worktimer(&home).args(["sub", "5"]).assert().success();

    assert!(elapsed_seconds(&home).abs() < f64::EPSILON);
}

#[test]
fn invalid_minutes_leave_record_untouched() {
    let home = TempDir::new().unwrap();

    worktimer(&home).args(["add", "0"]).assert().success();
    worktimer(&home).args(["sub", "-5"]).assert().success();

    assert!(!home.path().join("timer_data.json").exists());
}

#[test]
fn reset_zeroes_record() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("timer_data.json"),
        r#"{"elapsed_seconds": 3600}"#,
    )
    .unwrap();

    worktimer(&home)
        .args(["reset", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("00:00:00"));

    assert!(elapsed_seconds(&home).abs() < f64::EPSILON);
}

#[test]
fn corrupt_record_reads_as_zero() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("timer_data.json"), "garbage").unwrap();

    worktimer(&home)
        .args(["status", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("00:00:00"))
        .stdout(predicate::str::contains("warning"));
}

#[test]
fn data_file_flag_overrides_default() {
    let home = TempDir::new().unwrap();
    let custom = home.path().join("hours.json");

    worktimer(&home)
        .args(["add", "1", "--data-file"])
        .arg(&custom)
        .assert()
        .success();

    assert!(custom.exists());
    assert!(!home.path().join("timer_data.json").exists());
}

#[test]
fn config_data_file_is_used() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("config.yaml");
    std::fs::write(&config, "timer:\n  data_file: configured.json\n").unwrap();

    worktimer(&home)
        .args(["add", "2", "--config"])
        .arg(&config)
        .assert()
        .success();

    assert!(home.path().join("configured.json").exists());
}

#[test]
fn invalid_config_fails() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("config.yaml");
    std::fs::write(&config, "timer: 42").unwrap();

    worktimer(&home)
        .args(["status", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}
