// tests/integration/end_to_end.rs
use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::TempWorkspace;

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_describe_dataset"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("describe_dataset"))
        .stdout(predicate::str::contains("--max-depth"));
}

#[test]
fn describes_sample_dataset() {
    let ws = TempWorkspace::new().with_sample_dataset();

    bin()
        .arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Top level of the dataset contains:"))
        .stdout(predicate::str::contains("folder images (4 items, showing first 3)"))
        .stdout(predicate::str::contains("folder annotations"))
        .stdout(predicate::str::contains("file config.yaml"))
        .stdout(predicate::str::contains("image of resolution 1920x1080"))
        .stdout(predicate::str::contains(r#""version": "1.0""#))
        .stdout(predicate::str::contains("name: test-dataset"))
        .stdout(predicate::str::contains("- car"));
}

#[test]
fn zero_depth_is_rejected() {
    let ws = TempWorkspace::new().with_sample_dataset();

    bin()
        .arg(ws.path())
        .args(["--max-depth", "0"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn limit_widens_window() {
    let ws = TempWorkspace::new().with_sample_dataset();

    bin()
        .arg(ws.path())
        .args(["--limit", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("folder images (4 items)\n"))
        .stdout(predicate::str::contains("file 4.jpg"))
        .stdout(predicate::str::contains("not shown").not());
}

#[test]
fn max_depth_keeps_top_level_only() {
    let ws = TempWorkspace::new().with_sample_dataset();

    bin()
        .arg(ws.path())
        .args(["--max-depth", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("folder images (4 items)\n"))
        .stdout(predicate::str::contains("name: test-dataset"))
        .stdout(predicate::str::contains("1920x1080").not());
}

#[test]
fn corrupt_file_is_silent() {
    let ws = TempWorkspace::new().with_sample_dataset();
    ws.create_file("annotations/broken.json", "{invalid json");

    bin()
        .arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("  file broken.json\n"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn missing_root_fails() {
    let ws = TempWorkspace::new();

    bin()
        .arg(ws.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Application Error"));
}

#[test]
fn file_root_fails() {
    let ws = TempWorkspace::new();
    let file = ws.create_file("config.yaml", "name: x\n");

    bin()
        .arg(file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a directory"));
}
