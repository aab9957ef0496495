//! End-to-end tests for the gazetteer-index binary.

use std::io::Write;
use std::process::Command;

use tempfile::NamedTempFile;

fn gazetteer_index() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_gazetteer-index"));
    command.env_remove("GAZETTEER_INDEX_FORMAT");
    command
}

#[test]
fn test_bool_exits_successfully() {
    let output = gazetteer_index().args(["bool", "true"]).output().unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "true -> 1\n");
}

#[test]
fn test_missing_file_exits_with_error() {
    let output = gazetteer_index()
        .args(["check", "/nonexistent/places.jsonl"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: I/O error"));
    assert!(stderr.contains("/nonexistent/places.jsonl"));
}

#[test]
fn test_check_json_output() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"indexName": "Paris", "geonameID": 2988507}}"#).unwrap();
    writeln!(file, r#"{{"indexName": "Nice", "elevation": 10}}"#).unwrap();
    file.flush().unwrap();

    let output = gazetteer_index()
        .args(["-f", "json", "check"])
        .arg(file.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["documents_checked"], 2);
    assert_eq!(report["problems"][0]["line"], 2);
    assert_eq!(report["problems"][0]["violations"][0]["violation"], "unknown_key");
}
