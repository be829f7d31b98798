#![cfg(feature = "cli")]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "objcheck-cli-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("fixture should be writable");
    path
}

fn objcheck() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_objcheck"));
    cmd.env_remove("OBJCHECK_LOCALE")
        .env_remove("OBJCHECK_LOCALE_DIR")
        .arg("--log-level")
        .arg("error");
    cmd
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

const SCHEMA: &str = r#"{"name": "required", "tags.*": ["isString", {"type": "maxLength", "args": 3}]}"#;

#[test]
fn passing_document_exits_zero() {
    let dir = unique_temp_dir("pass");
    let schema = write_file(&dir, "schema.json", SCHEMA);
    let data = write_file(&dir, "data.json", r#"{"name": "ada", "tags": ["a", "bc"]}"#);

    let output = objcheck()
        .args(["--format", "json", "check"])
        .arg(&schema)
        .arg(&data)
        .output()
        .expect("check should run");

    assert_eq!(output.status.code(), Some(0));
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("report should be JSON");
    assert_eq!(report["status"], "passed");
    assert_eq!(report["violation_count"], 0);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn failing_document_exits_60_with_messages_in_order() {
    let dir = unique_temp_dir("fail");
    let schema = write_file(&dir, "schema.json", SCHEMA);
    let data = write_file(&dir, "data.json", r#"{"tags": ["a", 3, "long"]}"#);

    let output = objcheck()
        .args(["--format", "raw", "check"])
        .arg(&schema)
        .arg(&data)
        .output()
        .expect("check should run");

    assert_eq!(output.status.code(), Some(60));
    assert_eq!(
        stdout_lines(&output),
        vec![
            "Unknown is required.",
            "tags.1 is not a string.",
            "Invalid data type for tags.1.",
            "Length of tags.2 is greater than 3.",
        ]
    );

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn json_report_carries_paths_and_codes() {
    let dir = unique_temp_dir("json");
    let schema = write_file(&dir, "schema.json", SCHEMA);

    let output = objcheck()
        .args(["--format", "json", "check"])
        .arg(&schema)
        .args(["--data", r#"{"name": "x", "tags": [7]}"#])
        .output()
        .expect("check should run");

    assert_eq!(output.status.code(), Some(60));
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("report should be JSON");
    assert_eq!(report["status"], "failed");
    assert_eq!(report["violations"][0]["path"], "tags.0");
    assert_eq!(report["violations"][0]["rule"], "isString");
    assert_eq!(report["violations"][0]["code"], "error_not_a_string");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn reads_document_from_stdin() {
    let dir = unique_temp_dir("stdin");
    let schema = write_file(&dir, "schema.json", r#"{"id": "isStrictNumber"}"#);

    let mut child = objcheck()
        .args(["--format", "raw", "check"])
        .arg(&schema)
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("check should start");
    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(br#"{"id": "12"}"#)
        .expect("stdin should accept the document");
    let output = child.wait_with_output().expect("check should finish");

    assert_eq!(output.status.code(), Some(60));
    assert_eq!(stdout_lines(&output), vec!["id is not a strict number."]);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn locale_flag_selects_bundled_table() {
    let dir = unique_temp_dir("ja");
    let schema = write_file(&dir, "schema.json", r#"{"name": "required"}"#);

    let output = objcheck()
        .args(["--format", "raw", "check", "--locale", "ja"])
        .arg(&schema)
        .args(["--data", "{}"])
        .output()
        .expect("check should run");

    assert_eq!(output.status.code(), Some(60));
    assert_eq!(stdout_lines(&output), vec!["Unknownは必須です。"]);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn locale_dir_adds_custom_tables() {
    let dir = unique_temp_dir("locale-dir");
    let locales = dir.join("locales");
    std::fs::create_dir_all(&locales).expect("locale dir should be creatable");
    write_file(&locales, "fr.json", r#"{"error_required": "%name% est requis."}"#);
    let schema = write_file(
        &dir,
        "schema.json",
        r#"{"title": {"type": "required", "name": "Titre"}}"#,
    );

    let output = objcheck()
        .env("OBJCHECK_LOCALE_DIR", &locales)
        .args(["--format", "raw", "check", "--locale", "fr"])
        .arg(&schema)
        .args(["--data", "{}"])
        .output()
        .expect("check should run");

    assert_eq!(output.status.code(), Some(60));
    assert_eq!(stdout_lines(&output), vec!["Titre est requis."]);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn unknown_rule_is_a_config_error() {
    let dir = unique_temp_dir("unknown");
    let schema = write_file(&dir, "schema.json", r#"{"a": "isEmail"}"#);

    for strict in [false, true] {
        let mut cmd = objcheck();
        cmd.args(["check"]).arg(&schema).args(["--data", r#"{"a": 1}"#]);
        if strict {
            cmd.arg("--strict");
        }
        let output = cmd.output().expect("check should run");

        assert_eq!(output.status.code(), Some(78));
        assert!(String::from_utf8_lossy(&output.stderr).contains("unknown validator: isEmail"));
    }

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn invalid_document_json_is_a_usage_error() {
    let dir = unique_temp_dir("bad-json");
    let schema = write_file(&dir, "schema.json", SCHEMA);

    let output = objcheck()
        .arg("check")
        .arg(&schema)
        .args(["--data", "{not json"])
        .output()
        .expect("check should run");

    assert_eq!(output.status.code(), Some(64));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_schema_file_fails() {
    let dir = unique_temp_dir("missing");

    let output = objcheck()
        .arg("check")
        .arg(dir.join("absent.json"))
        .args(["--data", "{}"])
        .output()
        .expect("check should run");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read schema"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn rules_and_locales_list_catalogs() {
    let rules = objcheck()
        .args(["--format", "raw", "rules"])
        .output()
        .expect("rules should run");
    assert!(rules.status.success());
    let names = stdout_lines(&rules);
    assert_eq!(names.first().map(String::as_str), Some("required"));
    assert!(names.iter().any(|name| name == "isStrictNumber"));

    let locales = objcheck()
        .args(["--format", "raw", "locales"])
        .output()
        .expect("locales should run");
    assert!(locales.status.success());
    assert_eq!(stdout_lines(&locales), vec!["default", "ja"]);
}

#[test]
fn version_prints_package_version() {
    let output = objcheck()
        .arg("version")
        .output()
        .expect("version should run");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        format!("objcheck {}", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn extended_version_reports_build_provenance() {
    let output = objcheck()
        .args(["version", "--extended"])
        .output()
        .expect("version should run");
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    let target = lines
        .iter()
        .find_map(|line| line.strip_prefix("build_target: "))
        .expect("build target should be listed");
    assert!(target.contains(std::env::consts::ARCH), "target {target}");
    assert!(lines.iter().any(|line| line.starts_with("build_profile: ")));
    assert!(lines
        .iter()
        .any(|line| line.starts_with("rules: required, isNumber")));
}
