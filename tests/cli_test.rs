use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn payroll_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_payroll-visitor"))
}

fn write_temp_roster(name: &str, content: &str) -> PathBuf {
    let file_name = format!("payroll-visitor-{}-{}.yaml", name, std::process::id());
    let path = std::env::temp_dir().join(file_name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_no_arguments_prints_standard_total() {
    payroll_cmd()
        .assert()
        .success()
        .stdout(predicate::eq("1951200\n"));
}

#[test]
fn test_json_output_includes_breakdown() {
    payroll_cmd()
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\": \"1951200\""))
        .stdout(predicate::str::contains("\"headcount\": 31"))
        .stdout(predicate::str::contains("\"truck_driver\""));
}

#[test]
fn test_roster_file_is_used() {
    let path = write_temp_roster("two-engineers", "roster:\n  - variant: engineer\n    count: 2\n");

    payroll_cmd()
        .arg("--roster")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::eq("158000\n"));

    fs::remove_file(path).ok();
}

#[test]
fn test_shipped_roster_matches_default() {
    payroll_cmd()
        .arg("--roster")
        .arg("config/roster.yaml")
        .assert()
        .success()
        .stdout(predicate::eq("1951200\n"));
}

#[test]
fn test_missing_roster_file_fails() {
    payroll_cmd()
        .arg("--roster")
        .arg("/nonexistent/roster.yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Roster file not found"));
}

#[test]
fn test_unknown_variant_fails() {
    let path = write_temp_roster("unknown", "roster:\n  - variant: manager\n    count: 1\n");

    payroll_cmd()
        .arg("--roster")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse roster file"));

    fs::remove_file(path).ok();
}

#[test]
fn test_zero_count_fails() {
    let path = write_temp_roster("zero", "roster:\n  - variant: executive\n    count: 0\n");

    payroll_cmd()
        .arg("--roster")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid roster"));

    fs::remove_file(path).ok();
}

#[test]
fn test_oversized_roster_fails_without_panicking() {
    let path = write_temp_roster(
        "oversized",
        concat!(
            "roster:\n",
            "  - variant: engineer\n",
            "    count: 18446744073709551615\n",
            "  - variant: executive\n",
            "    count: 1\n",
        ),
    );

    payroll_cmd()
        .arg("--roster")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid roster"))
        .stderr(predicate::str::contains("panicked").not());

    fs::remove_file(path).ok();
}

#[test]
fn test_failure_is_reported_once() {
    payroll_cmd()
        .arg("--roster")
        .arg("/nonexistent/roster.yaml")
        .assert()
        .code(1)
        .stderr(predicate::function(|stderr: &str| {
            stderr.matches("Roster file not found").count() == 1
        }));
}
