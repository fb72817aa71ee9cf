//! Integration tests for the candyrun CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn write_route(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Test CLI binary exists and responds to --help
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("candyrun").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("candy route"));
}

/// Test CLI responds to --version
#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("candyrun").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("candyrun"));
}

#[test]
fn test_solves_a_route_file() {
    let temp_dir = TempDir::new().unwrap();
    let route = write_route(&temp_dir, "route.txt", "5\n10\n3 1 4 1 5\n");

    let mut cmd = Command::cargo_bin("candyrun").unwrap();
    cmd.arg(&route).assert().success().stdout(
        predicate::str::contains("Start at home 3 and go to home 5 getting 10 pieces of candy"),
    );
}

#[test]
fn test_default_input_path_in_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    write_route(&temp_dir, "input.txt", "4\n2\n1 1 1 1\n");

    let mut cmd = Command::cargo_bin("candyrun").unwrap();
    cmd.current_dir(temp_dir.path()).assert().success().stdout(
        predicate::str::contains("Start at home 1 and go to home 2 getting 2 pieces of candy"),
    );
}

#[test]
fn test_empty_street_prints_no_run_sentence() {
    let temp_dir = TempDir::new().unwrap();
    let route = write_route(&temp_dir, "route.txt", "0 10\n");

    let mut cmd = Command::cargo_bin("candyrun").unwrap();
    cmd.arg(&route)
        .assert()
        .success()
        .stdout(predicate::str::contains("Don't go here"));
}

#[test]
fn test_all_zero_street_prints_no_run_sentence() {
    let temp_dir = TempDir::new().unwrap();
    let route = write_route(&temp_dir, "route.txt", "3 10 0 0 0\n");

    let mut cmd = Command::cargo_bin("candyrun").unwrap();
    cmd.arg(&route)
        .assert()
        .success()
        .stdout(predicate::str::contains("Don't go here"));
}

#[test]
fn test_missing_file_fails_with_context() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("candyrun").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("no-such-route.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));
}

#[test]
fn test_short_weight_list_fails() {
    let temp_dir = TempDir::new().unwrap();
    let route = write_route(&temp_dir, "route.txt", "4 10 1 2\n");

    let mut cmd = Command::cargo_bin("candyrun").unwrap();
    cmd.arg(&route)
        .assert()
        .failure()
        .stderr(predicate::str::contains("found only 2"));
}

#[test]
fn test_extra_positional_argument_is_a_usage_error() {
    let mut cmd = Command::cargo_bin("candyrun").unwrap();
    cmd.arg("one.txt")
        .arg("two.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_modes_agree_on_the_same_route() {
    let temp_dir = TempDir::new().unwrap();
    let route = write_route(&temp_dir, "route.txt", "5\n3\n5 1 1 1 1\n");

    let sequential = Command::cargo_bin("candyrun")
        .unwrap()
        .arg(&route)
        .args(["--mode", "sequential"])
        .output()
        .unwrap();
    let parallel = Command::cargo_bin("candyrun")
        .unwrap()
        .arg(&route)
        .args(["--mode", "parallel", "--threads", "3"])
        .output()
        .unwrap();

    assert!(sequential.status.success());
    assert!(parallel.status.success());
    assert_eq!(sequential.stdout, parallel.stdout);
}

#[test]
fn test_json_format_shape() {
    let temp_dir = TempDir::new().unwrap();
    let route = write_route(&temp_dir, "route.txt", "5\n3\n5 1 1 1 1\n");

    let mut cmd = Command::cargo_bin("candyrun").unwrap();
    cmd.arg(&route)
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"start_home\": 2"))
        .stdout(predicate::str::contains("\"end_home\": 4"))
        .stdout(predicate::str::contains("\"pieces\": 3"))
        .stdout(predicate::str::contains("\"strategy\""));
}

#[test]
fn test_json_format_reports_null_run() {
    let temp_dir = TempDir::new().unwrap();
    let route = write_route(&temp_dir, "route.txt", "2 5 9 8\n");

    let mut cmd = Command::cargo_bin("candyrun").unwrap();
    cmd.arg(&route)
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"run\": null"));
}

#[test]
fn test_stats_flag_prints_statistics() {
    let temp_dir = TempDir::new().unwrap();
    let route = write_route(&temp_dir, "route.txt", "3 10 1 2 3\n");

    let mut cmd = Command::cargo_bin("candyrun").unwrap();
    cmd.arg(&route)
        .arg("--stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Solve statistics"))
        .stdout(predicate::str::contains("Strategy:"));
}

#[test]
fn test_quiet_mode_still_prints_the_result_line() {
    let temp_dir = TempDir::new().unwrap();
    let route = write_route(&temp_dir, "route.txt", "3 10 1 2 3\n");

    let mut cmd = Command::cargo_bin("candyrun").unwrap();
    cmd.arg(&route)
        .args(["--quiet", "--stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("getting 6 pieces of candy"))
        .stdout(predicate::str::contains("Solve statistics").not())
        .stderr(predicate::str::is_empty());
}
