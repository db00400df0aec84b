//! End-to-end tests for the swagger-model binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

const VALID: &str = r#"{
    "swagger": "2.0",
    "info": {"title": "Pets", "version": "1.0.0"},
    "schemes": ["https"],
    "paths": {
        "/pets": {
            "get": {
                "operationId": "listPets",
                "parameters": [{"name": "limit", "in": "query", "type": "integer", "format": "int32"}]
            }
        }
    },
    "definitions": {"Pet": {"type": "object"}}
}"#;

const INVALID: &str = r#"{
    "swagger": "2.0",
    "info": {"title": "", "version": "1.0.0"},
    "schemes": ["http", "ftp", "carrierpigeon"],
    "paths": {"/pets": {"get": {}}}
}"#;

fn write_spec(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn swagger_model() -> Command {
    Command::cargo_bin("swagger-model").unwrap()
}

#[test]
fn test_parse_lists_operations() {
    let dir = TempDir::new().unwrap();
    let spec = write_spec(&dir, "pets.json", VALID);

    swagger_model()
        .arg("parse")
        .arg(&spec)
        .assert()
        .success()
        .stdout(predicate::str::contains("Pets"))
        .stdout(predicate::str::contains("/pets"))
        .stdout(predicate::str::contains("listPets"));
}

#[test]
fn test_validate_valid_document() {
    let dir = TempDir::new().unwrap();
    let spec = write_spec(&dir, "pets.json", VALID);

    swagger_model().arg("validate").arg(&spec).assert().success();
}

#[test]
fn test_validate_reports_violations_and_fails() {
    let dir = TempDir::new().unwrap();
    let spec = write_spec(&dir, "broken.json", INVALID);

    swagger_model()
        .arg("validate")
        .arg(&spec)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Info.Title"))
        .stdout(predicate::str::contains("invalid schemes: ['ftp','carrierpigeon']"));
}

#[test]
fn test_validate_json_output() {
    let dir = TempDir::new().unwrap();
    let valid = write_spec(&dir, "pets.json", VALID);
    let invalid = write_spec(&dir, "broken.json", INVALID);

    let output = swagger_model()
        .args(["validate", "--format", "json"])
        .arg(&valid)
        .arg(&invalid)
        .output()
        .unwrap();
    assert!(!output.status.success());

    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let reports = reports.as_array().unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["valid"], serde_json::json!(true));
    assert_eq!(reports[1]["valid"], serde_json::json!(false));

    let paths: Vec<&str> = reports[1]["violations"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v["path"].as_str())
        .collect();
    assert_eq!(paths, vec!["Info.Title", "Schemes"]);
}

#[test]
fn test_validate_reports_syntax_errors() {
    let dir = TempDir::new().unwrap();
    let spec = write_spec(&dir, "truncated.json", &VALID[..40]);

    swagger_model()
        .arg("validate")
        .arg(&spec)
        .assert()
        .failure()
        .stdout(predicate::str::contains("syntax error at byte"));
}

#[test]
fn test_parse_missing_file_fails() {
    swagger_model()
        .args(["parse", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load Swagger spec"));
}
