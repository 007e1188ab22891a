//! Integration tests for the eoser CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{name}")
}

fn eoser() -> Command {
    Command::cargo_bin("eoser").unwrap()
}

#[test]
fn test_process_english_text() {
    eoser()
        .args(["process", "-i", &fixture_path("english-sample.txt")])
        .assert()
        .success()
        .stdout(
            "The store opens at 9.30 today.\n\
             He bought some milk and eggs!\n\
             Did she call?\n\
             She said “Wait. Please.” and left.\n",
        );
}

#[test]
fn test_process_japanese_text() {
    eoser()
        .args(["process", "-i", &fixture_path("japanese-sample.txt"), "-l", "ja"])
        .assert()
        .success()
        .stdout(predicate::str::contains("これはテストです。\n"))
        .stdout(predicate::str::contains(
            "日本語の文章を正しく分割できるか確認しています。\n",
        ))
        .stdout(predicate::str::contains("彼は「はい。」と言った！\n"));
}

#[test]
fn test_unknown_language_falls_back_to_english() {
    eoser()
        .args(["process", "-i", &fixture_path("english-sample.txt"), "-l", "xx"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Did she call?\n"));
}

#[test]
fn test_json_output() {
    let output = eoser()
        .args([
            "process",
            "-i",
            &fixture_path("english-sample.txt"),
            "-f",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(records[2]["text"], "Did she call?");
    assert_eq!(records[2]["line"], 2);
    assert_eq!(records[2]["offset"], 60);
    assert_eq!(records[2]["char_offset"], 60);
    assert!(records[0]["file"]
        .as_str()
        .unwrap()
        .ends_with("english-sample.txt"));
}

#[test]
fn test_json_output_character_offsets() {
    let output = eoser()
        .args([
            "process",
            "-i",
            &fixture_path("japanese-sample.txt"),
            "-l",
            "ja",
            "-f",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    // "これはテストです。" is 9 characters, 27 bytes
    assert_eq!(records[1]["offset"], 27);
    assert_eq!(records[1]["char_offset"], 9);
}

#[test]
fn test_markdown_output() {
    eoser()
        .args([
            "process",
            "-i",
            &fixture_path("japanese-sample.txt"),
            "-l",
            "ja",
            "-f",
            "markdown",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1. これはテストです。"))
        .stdout(predicate::str::contains("*Total sentences: 3*"));
}

#[test]
fn test_settings_file_supplies_defaults() {
    eoser()
        .args([
            "process",
            "-i",
            &fixture_path("japanese-sample.txt"),
            "-c",
            &fixture_path("settings.toml"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("*Total sentences: 3*"));
}

#[test]
fn test_flags_override_settings_file() {
    eoser()
        .args([
            "process",
            "-i",
            &fixture_path("japanese-sample.txt"),
            "-c",
            &fixture_path("settings.toml"),
            "-f",
            "text",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total sentences").not());
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("output.txt");

    eoser()
        .args(["process", "-i", &fixture_path("english-sample.txt"), "-o"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&output_path).unwrap();
    assert_eq!(content.lines().count(), 4);
}

#[test]
fn test_multiple_files_keep_sorted_order() {
    eoser()
        .args([
            "process",
            "-q",
            "-l",
            "ja",
            "-i",
            &fixture_path("*-sample.txt"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("first part|"))
        .stdout(predicate::str::contains("これはテストです。"));
}

#[test]
fn test_parallel_matches_sequential() {
    let run = |parallel: bool| {
        let mut cmd = eoser();
        cmd.args(["process", "-q", "-f", "json", "-i", &fixture_path("*.txt")]);
        if parallel {
            cmd.arg("--parallel");
        }
        let output = cmd.output().unwrap();
        assert!(output.status.success());
        output.stdout
    };

    assert_eq!(run(true), run(false));
}

#[test]
fn test_stdin_input() {
    eoser()
        .args(["process", "-i", "-"])
        .write_stdin("One here. Two there.")
        .assert()
        .success()
        .stdout("One here.\nTwo there.\n");
}

#[test]
fn test_invalid_file() {
    eoser()
        .args(["process", "-i", "nonexistent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_invalid_pattern() {
    eoser()
        .args(["process", "-i", "[unclosed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid file pattern"));
}

#[test]
fn test_unknown_format_is_rejected() {
    eoser()
        .args(["process", "-i", &fixture_path("english-sample.txt"), "-f", "yaml"])
        .assert()
        .failure();
}

#[test]
fn test_help_output() {
    eoser()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("process"))
        .stdout(predicate::str::contains("generate-config"));
}

#[test]
fn test_version_output() {
    eoser()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_list_languages() {
    eoser()
        .args(["list", "languages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("English"))
        .stdout(predicate::str::contains("zenkaku2"));
}

#[test]
fn test_list_formats() {
    eoser()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn test_list_symbols() {
    eoser()
        .args(["list", "symbols", "-l", "ja", "--variant", "hankaku"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Symbols for ja (hankaku)"))
        .stdout(predicate::str::contains("LEFT_PARENTHESIS"));
}
