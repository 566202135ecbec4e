use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_doxydoc")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn stdout_of(args: &[&str]) -> String {
    let assert = cmd().args(args).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

// -- stdin mode --

#[test]
fn stdin_mode_function_snippet() {
    let assert = cmd()
        .write_stdin("/**\nint add(int a, int b);\n")
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(
        output,
        "\n * @brief ${1:[brief description]}\
         \n * @details ${2:[long description]}\
         \n *\
         \n * @param a ${3:[description]}\
         \n * @param b ${4:[description]}\
         \n * @return ${5:[description]}\
         \n */"
    );
}

#[test]
fn stdin_without_opener_fails() {
    cmd()
        .write_stdin("int add(int a, int b);\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no documentation comment opener found"));
}

// -- file mode --

#[test]
fn first_opener_is_file_header() {
    let output = stdout_of(&[&fixture_path("widget.h")]);
    assert_eq!(
        output,
        "\n * @file ${1:[file name]}\
         \n * @brief ${2:[brief description]}\
         \n * @details ${3:[long description]}\
         \n *\
         \n * @author ${4:[authors name]}\
         \n * @date ${5:[file date]}\
         \n * @copyright ${6:[copyright description]}\
         \n */"
    );
}

#[test]
fn templated_function_plain() {
    let output = stdout_of(&["-l", "4", "-f", "plain", &fixture_path("widget.h")]);
    assert_eq!(
        output,
        "/**\n\
         \x20* @brief [brief description]\n\
         \x20* @details [long description]\n\
         \x20*\n\
         \x20* @param value [description]\n\
         \x20* @param lo [description]\n\
         \x20* @param hi [description]\n\
         \x20* @return [description]\n\
         \x20*/\n"
    );
}

#[test]
fn class_opener() {
    let output = stdout_of(&["--line", "8", &fixture_path("widget.h")]);
    assert!(output.starts_with("\n * @class ${1:[class name]}"), "got: {output}");
}

#[test]
fn indented_constructor() {
    let output = stdout_of(&["-l", "11", "-f", "plain", &fixture_path("widget.h")]);
    assert!(output.contains(" * @param name [description]\n"), "got: {output}");
    assert!(!output.contains("@return"), "got: {output}");
}

#[test]
fn wrapped_method_json() {
    let output = stdout_of(&["-l", "14", "-f", "json", &fixture_path("widget.h")]);
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["kind"], "function");
    let labels: Vec<&str> = value["lines"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|l| l["command"] == "param")
        .map(|l| l["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["width", "height"]);
}

#[test]
fn existing_comment_continues() {
    let output = stdout_of(&["-l", "18", &fixture_path("widget.h")]);
    assert_eq!(output, "\n * ${1}");
}

#[test]
fn unclassified_line_warns() {
    cmd()
        .args(["-l", "2", &fixture_path("widget.h")])
        .assert()
        .success()
        .stdout("\n * ${1}\n */")
        .stderr(predicate::str::contains("unable to classify"));
}

#[test]
fn missing_file_fails() {
    cmd()
        .arg(fixture_path("does-not-exist.h"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn line_zero_fails() {
    cmd()
        .args(["-l", "0", &fixture_path("widget.h")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line numbers start at 1"));
}

// -- settings --

#[test]
fn style_flag() {
    let output = stdout_of(&["-s", "\\", "-l", "8", &fixture_path("widget.h")]);
    assert!(output.starts_with("\n * \\class ${1:[class name]}"), "got: {output}");
}

#[test]
fn settings_file_style() {
    let mut settings = NamedTempFile::with_suffix(".json").unwrap();
    settings.write_all(br#"{"doxydoc_javadoc": false}"#).unwrap();

    let output = stdout_of(&[
        "-c",
        settings.path().to_str().unwrap(),
        "-l",
        "8",
        &fixture_path("widget.h"),
    ]);
    assert!(output.contains("\\brief ${2:[brief description]}"), "got: {output}");
}

#[test]
fn settings_file_disables_output() {
    let mut settings = NamedTempFile::with_suffix(".json").unwrap();
    settings.write_all(br#"{"doxydoc_enabled": false}"#).unwrap();

    cmd()
        .args(["-c", settings.path().to_str().unwrap()])
        .arg(fixture_path("widget.h"))
        .assert()
        .success()
        .stdout("");
}

#[test]
fn invalid_settings_fail() {
    let mut settings = NamedTempFile::with_suffix(".json").unwrap();
    settings.write_all(b"{ not json").unwrap();

    cmd()
        .args(["-c", settings.path().to_str().unwrap()])
        .arg(fixture_path("widget.h"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid settings JSON"));
}

// -- output formats --

#[test]
fn invalid_format_fails() {
    cmd()
        .args(["-f", "xml"])
        .arg(fixture_path("widget.h"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}
