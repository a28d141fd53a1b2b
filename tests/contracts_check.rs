mod common;

use common::*;
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

fn load_schema(name: &str) -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = fs::read_to_string(root.join("docs/contracts").join(name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn validate(schema_name: &str, data: &Value) {
    let schema = load_schema(schema_name);
    let validator = JSONSchema::compile(&schema).expect("compile schema");
    let msgs: Vec<String> = match validator.validate(data) {
        Ok(()) => return,
        Err(errors) => errors.map(|e| e.to_string()).collect(),
    };
    panic!("schema validation failed: {}", msgs.join(" | "));
}

#[test]
fn passing_check_report_matches_contract() {
    let repo = TestRepo::new();
    let out = repo.run_json(&["check"], true);
    assert_eq!(out["ok"], true);
    assert_eq!(out["data"]["status"], "passed");
    assert_eq!(out["data"]["results"].as_array().unwrap().len(), 3);
    validate("check-report.schema.json", &out["data"]);
}

#[test]
fn failing_check_report_matches_contract() {
    let repo = TestRepo::new();
    repo.write(API_DOC, "WidgetController\n");

    let out = repo.run_json(&["check"], false);
    assert_eq!(out["ok"], false);
    assert_eq!(out["data"]["status"], "failed");
    let results = out["data"]["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[1]["category"], "policies");
    assert_eq!(results[1]["missing"][0], "CanViewWidget");
    validate("check-report.schema.json", &out["data"]);
}

#[test]
fn inventory_matches_contract() {
    let repo = TestRepo::new();
    let out = repo.run_json(&["inventory"], true);
    assert_eq!(out["ok"], true);
    validate("inventory.schema.json", &out["data"]);

    let critical = out["data"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|e| e["category"] == "critical_commands")
        .count();
    assert_eq!(critical, MANUAL_COMMANDS.len());
}
