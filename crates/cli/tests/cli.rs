use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn catalog_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../configs/builders")
}

fn assemble_cmd() -> Command {
    let mut cmd = Command::cargo_bin("assemble").expect("assemble binary");
    cmd.env_remove("RUST_LOG")
        .env_remove("ROCKET_LOG_FORMAT")
        .arg("--catalog")
        .arg(catalog_dir());
    cmd
}

#[test]
fn freight_summary_lists_both_stages() {
    assemble_cmd()
        .args(["--builder", "freight", "--weight", "1500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Freight Rocket ==="))
        .stdout(predicate::str::contains("Stages         : 2"))
        .stdout(predicate::str::contains("fuel = 50.0%"));
}

#[test]
fn default_builder_is_first_catalog_entry() {
    assemble_cmd()
        .args(["--weight", "80", "--payload", "probe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Sounding Rocket ==="))
        .stdout(predicate::str::contains("fuel = n/a"));
}

#[test]
fn negative_weight_fails() {
    assemble_cmd()
        .args(["--builder", "freight", "--weight", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-negative"));
}

#[test]
fn unknown_builder_fails() {
    assemble_cmd()
        .args(["--builder", "atlas", "--weight", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found in catalog"));
}

#[test]
fn exports_json_and_csv() {
    let dir = tempfile::tempdir().expect("tempdir");
    let json = dir.path().join("out/report.json");
    let csv = dir.path().join("out/stages.csv");

    assemble_cmd()
        .args(["--builder", "Heavy", "--weight", "9000"])
        .arg("--json")
        .arg(&json)
        .arg("--csv")
        .arg(&csv)
        .assert()
        .success();

    let report = std::fs::read_to_string(&json).expect("json written");
    assert!(report.contains("\"rocket\": \"Heavy\""));
    let table = std::fs::read_to_string(&csv).expect("csv written");
    assert_eq!(table.lines().count(), 4);
}

#[test]
fn default_logging_reports_assembly_and_exports_on_stderr() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv = dir.path().join("stages.csv");

    assemble_cmd()
        .args(["--builder", "freight", "--weight", "800"])
        .arg("--csv")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("rocket assembled").not())
        .stderr(predicate::str::contains("rocket assembled"))
        .stderr(predicate::str::contains("wrote CSV stage table"));
}

#[test]
fn json_log_format_emits_structured_events() {
    assemble_cmd()
        .env("ROCKET_LOG_FORMAT", "json")
        .args(["--builder", "sounding", "--weight", "40"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"message\":\"rocket assembled\""));
}
