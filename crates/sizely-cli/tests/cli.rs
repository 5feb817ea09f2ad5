use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn sizely(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("sizely").expect("binary built");
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

#[test]
fn estimate_inline_json_prints_breakdown() {
    let dir = tempdir().expect("temp dir");
    sizely(dir.path())
        .args(["estimate", "--json", r#"{"xs":3,"s":2,"m":1,"l":1}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sprint Capacity Calculation"))
        .stdout(predicate::str::contains("Total:        7 tasks =  24 points"));
}

#[test]
fn estimate_reads_yaml_file() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("tasks.yaml");
    fs::write(&path, "xs: 1\nm: 2\n").expect("write tasks");
    let output = sizely(dir.path())
        .args(["estimate", "--input"])
        .arg(&path)
        .args(["--format", "json"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(value["total_points"], 11);
    assert_eq!(value["total_tasks"], 3);
}

#[test]
fn malformed_payload_fails_without_output() {
    let dir = tempdir().expect("temp dir");
    sizely(dir.path())
        .args(["estimate", "--json", "{not json"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("parsing JSON"));
}

#[test]
fn estimate_requires_a_payload() {
    let dir = tempdir().expect("temp dir");
    sizely(dir.path()).arg("estimate").assert().failure();
}

#[test]
fn breakdown_lists_combinations_and_json() {
    let dir = tempdir().expect("temp dir");
    sizely(dir.path())
        .args(["breakdown", "33", "--max", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Finding combinations for 33 points (max 10 tasks)",
        ))
        .stdout(predicate::str::contains(" 1. L×3 + S×1 = 33 points (4 tasks)"))
        .stdout(predicate::str::contains("Recommendations:"))
        .stdout(predicate::str::contains("\"max_tasks\": 10"));
}

#[test]
fn breakdown_without_matches_is_success() {
    let dir = tempdir().expect("temp dir");
    sizely(dir.path())
        .args(["breakdown", "2", "--max", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No combinations found for 2 points with max 1 tasks",
        ));
}

#[test]
fn breakdown_rejects_non_positive_points() {
    let dir = tempdir().expect("temp dir");
    for points in ["0", "-5"] {
        sizely(dir.path())
            .args(["breakdown", points])
            .assert()
            .failure()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("points: must be positive"));
    }
}

#[test]
fn breakdown_rejects_non_numeric_points() {
    let dir = tempdir().expect("temp dir");
    sizely(dir.path())
        .args(["breakdown", "lots"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn config_file_in_working_directory_sets_defaults() {
    let dir = tempdir().expect("temp dir");
    fs::write(
        dir.path().join("sizely.yaml"),
        "breakdown:\n  max_tasks: 3\noutput:\n  format: yaml\n",
    )
    .expect("write config");
    sizely(dir.path())
        .args(["breakdown", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("max_tasks: 3"))
        .stdout(predicate::str::contains("total_found: 1"));
}

#[test]
fn invalid_config_is_reported() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("custom.yaml");
    fs::write(&path, "breakdown:\n  max_tasks: 0\n").expect("write config");
    sizely(dir.path())
        .arg("--config")
        .arg(&path)
        .args(["breakdown", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("breakdown.max_tasks"));
}

#[test]
fn help_lists_tier_points() {
    let dir = tempdir().expect("temp dir");
    sizely(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("L:  10 points"));
}
