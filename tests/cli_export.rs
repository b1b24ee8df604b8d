//! End-to-end CLI tests for the export and preview commands

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn admetrics(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("admetrics").unwrap();
    cmd.env("ADMETRICS_DATA_DIR", config_dir.path());
    cmd
}

#[test]
fn export_csv_metrics_writes_header_and_rows() {
    let config = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let out = out_dir.path().join("metrics.csv");

    admetrics(&config)
        .args(["export", "csv", "metrics", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 4 rows"))
        .stdout(predicate::str::contains("text/csv;charset=utf-8"));

    let contents = fs::read_to_string(&out).unwrap();
    assert!(contents.starts_with("Metric,Value,Change,Exported"));
    assert_eq!(contents.lines().count(), 5);
    assert!(contents.contains("Total Revenue"));
}

#[test]
fn export_csv_revenue_uses_raw_values() {
    let config = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let out = out_dir.path().join("revenue.csv");

    admetrics(&config)
        .args(["export", "csv", "revenue", "--output"])
        .arg(&out)
        .assert()
        .success();

    let contents = fs::read_to_string(&out).unwrap();
    assert!(contents.lines().any(|l| l.starts_with("Jan,45000,12,")));
    assert!(contents.lines().any(|l| l.starts_with("Mar,48000,-8,")));
}

#[test]
fn export_pdf_full_writes_pdf_bytes() {
    let config = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let out = out_dir.path().join("report.pdf");

    admetrics(&config)
        .args(["export", "pdf", "full", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("complete analytics report PDF"))
        .stdout(predicate::str::contains("application/pdf"));

    let bytes = fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn export_from_json_snapshot() {
    let config = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    let snapshot = work.path().join("data.json");
    fs::write(
        &snapshot,
        r#"{
            "metrics": [{ "title": "Total Revenue", "value": "$89,000", "change": "+35%" }],
            "campaigns": [],
            "revenue": []
        }"#,
    )
    .unwrap();

    let out = work.path().join("metrics.csv");
    admetrics(&config)
        .args(["export", "csv", "metrics", "--input"])
        .arg(&snapshot)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 rows"));

    let contents = fs::read_to_string(&out).unwrap();
    assert!(contents.contains("Total Revenue,\"$89,000\",+35%,"));
}

#[test]
fn export_with_missing_snapshot_fails_cleanly() {
    let config = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let out = work.path().join("metrics.csv");

    admetrics(&config)
        .args(["export", "csv", "metrics", "--input", "no-such-file.json", "--output"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Data source error"));

    assert!(!out.exists());
}

#[test]
fn preview_renders_campaign_table() {
    let config = TempDir::new().unwrap();

    admetrics(&config)
        .args(["preview", "campaigns"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Campaign Performance"))
        .stdout(predicate::str::contains("Email Marketing"))
        .stdout(predicate::str::contains("12,500"));
}

#[test]
fn config_shows_defaults() {
    let config = TempDir::new().unwrap();

    admetrics(&config)
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Brand:       AdMetrics"))
        .stdout(predicate::str::contains("(current directory)"));
}
