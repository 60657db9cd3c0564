use assert_cmd::Command;
use predicates::prelude::*;

fn schema_cmd() -> Command {
    Command::cargo_bin("dump_config_schema").expect("binary exists")
}

#[test]
fn dump_config_schema_prints_json_schema() {
    schema_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("\"drawing\""))
        .stdout(predicate::str::contains("stroke_width"))
        .stdout(predicate::str::contains("freehand-line"));
}

#[test]
fn dump_config_schema_output_parses_as_json() {
    let output = schema_cmd().output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(value.get("properties").is_some());
}
