// tests/integration/output_formats.rs
use std::fs;

use assert_cmd::Command;
use serde_json::Value;

#[path = "../common/mod.rs"]
mod common;
use common::{SAMPLE_JSON, TempWorkspace};

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_describe_dataset"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn json_format_is_parseable() {
    let ws = TempWorkspace::new().with_sample_dataset();

    let output = bin()
        .arg(ws.path())
        .args(["--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(json["object_type"], "folder");
    assert_eq!(json["total_items"], 3);

    let names: Vec<_> = json["content"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["annotations", "config.yaml", "images"]);

    let images = &json["children"][2];
    assert_eq!(images["total_items"], 4);
    assert_eq!(images["children"].as_array().unwrap().len(), 3);
    assert_eq!(images["children"][0]["content"]["kind"], "image");
    assert_eq!(images["children"][0]["content"]["value"]["width"], 1920);

    let config = &json["children"][1];
    assert_eq!(config["content"]["kind"], "yaml");
    assert_eq!(config["content"]["value"]["name"], "test-dataset");

    let train = &json["children"][0]["children"][0];
    let expected: Value = serde_json::from_str(SAMPLE_JSON).unwrap();
    assert_eq!(train["content"]["kind"], "json");
    assert_eq!(train["content"]["value"], expected);
}

#[test]
fn yaml_with_sequence_keys_renders_as_json() {
    let ws = TempWorkspace::new();
    ws.create_file("k.yaml", "? [a, b]\n: c\n");

    let output = bin()
        .arg(ws.path())
        .args(["--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(json["children"][0]["content"]["value"][r#"["a","b"]"#], "c");
}

#[test]
fn output_flag_writes_file() {
    let ws = TempWorkspace::new().with_sample_dataset();
    let report = ws.path().join("report.txt");

    bin()
        .arg(ws.path().join("images"))
        .arg("--output")
        .arg(&report)
        .assert()
        .success()
        .stdout("");

    let text = fs::read_to_string(&report).unwrap();
    assert!(text.starts_with("Top level of the dataset contains:\n"));
    assert!(text.contains("file 1.jpg: image of resolution 1920x1080\n"));
    assert!(text.ends_with("... 1 more item not shown\n"));
}
