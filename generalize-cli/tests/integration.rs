// generalize-cli/tests/integration.rs
use predicates::prelude::*;
use serde_json::{json, Value};
use std::io::Write;
use tempfile::NamedTempFile;

/// Helper: write raw content to a temp file
fn write_input(content: &str) -> NamedTempFile {
    let mut temp = NamedTempFile::new().expect("Failed to create temp file");
    temp.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    temp
}

/// Run the CLI on a file and parse its stdout as the schema
fn run_schema(content: &str, extra_args: &[&str]) -> Value {
    let temp = write_input(content);
    let mut cmd = assert_cmd::Command::cargo_bin("generalize-cli").unwrap();
    cmd.args(extra_args).arg(temp.path());
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("stdout should be a JSON schema")
}

#[test]
fn test_valid_json() {
    let temp = write_input(r#"{"name": "Alice", "age": 30}"#);

    let mut cmd = assert_cmd::Command::cargo_bin("generalize-cli").unwrap();
    cmd.arg(temp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"type\""))
        .stdout(predicate::str::contains("\"properties\""))
        .stderr(predicate::str::contains("Processed 1 JSON value(s)"));
}

#[test]
fn test_outer_array_is_stream_of_examples() {
    let schema = run_schema(r#"[100, -90, 45, 3.14159]"#, &[]);
    assert_eq!(schema, json!({"type": "number"}));
}

#[test]
fn test_no_ignore_array_keeps_single_example() {
    let schema = run_schema(r#"[100, "x"]"#, &["--no-ignore-array"]);
    assert_eq!(
        schema,
        json!({"type": "array", "items": {"type": ["number", "string"]}})
    );
}

#[test]
fn test_ndjson_objects_with_distinct_keys() {
    let input = "{\"name\": \"A\", \"age\": 5}\n{\"breed\": \"B\", \"age\": false}\n";
    let schema = run_schema(input, &["--ndjson"]);
    assert_eq!(
        schema,
        json!({
            "type": "object",
            "properties": {
                "name": {"type": "string"},
                "breed": {"type": "string"},
                "age": {"type": ["number", "boolean"]}
            }
        })
    );
}

#[test]
fn test_stdin_input() {
    let mut cmd = assert_cmd::Command::cargo_bin("generalize-cli").unwrap();
    cmd.arg("--compact").write_stdin(r#"["a", null, "b", null]"#);
    cmd.assert()
        .success()
        .stdout(predicate::str::diff("{\"type\":[\"string\",\"null\"]}\n"));
}

#[test]
fn test_empty_file_gives_empty_schema() {
    let schema = run_schema("", &[]);
    assert_eq!(schema, json!({}));
}

#[test]
fn test_debug_goes_to_stderr() {
    let temp = write_input("1\n\"x\"\n");
    let mut cmd = assert_cmd::Command::cargo_bin("generalize-cli").unwrap();
    cmd.args(["--ndjson", "--debug"]).arg(temp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("widening").not())
        .stderr(predicate::str::contains("widening"));
}

#[test]
fn test_help() {
    let mut cmd = assert_cmd::Command::cargo_bin("generalize-cli").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"));
}

#[test]
fn test_invalid_json() {
    let temp = write_input(r#"{"hello":"world}"#);

    let mut cmd = assert_cmd::Command::cargo_bin("generalize-cli").unwrap();
    cmd.arg(temp.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON input"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn test_malformed_json_variants() {
    let test_cases = vec![
        (r#"{"invalid": json}"#, "unquoted value"),
        (r#"{"incomplete":"#, "incomplete string"),
        (r#"{"trailing":,"#, "trailing comma"),
        (r#"{invalid: "json"}"#, "unquoted key"),
        (r#"{"nested": {"broken": json}}"#, "nested broken JSON"),
    ];

    for (invalid_json, description) in test_cases {
        println!("Testing: {}", description);
        let temp = write_input(invalid_json);

        let mut cmd = assert_cmd::Command::cargo_bin("generalize-cli").unwrap();
        cmd.arg(temp.path());
        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("Invalid JSON input"))
            .stderr(predicate::str::contains("panicked").not());
    }
}

#[test]
fn test_ndjson_error_reports_absolute_line() {
    let temp = write_input("{\"a\": 1}\n{\"a\": 2}\n{\"a\": }\n");
    let mut cmd = assert_cmd::Command::cargo_bin("generalize-cli").unwrap();
    cmd.arg("--ndjson").arg(temp.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("at line 3"));
}

#[test]
fn test_missing_file() {
    let mut cmd = assert_cmd::Command::cargo_bin("generalize-cli").unwrap();
    cmd.arg("definitely/not/here.json");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}
