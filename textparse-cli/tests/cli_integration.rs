//! Integration tests for the textparse CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

#[test]
fn test_split_lines_stops_at_first_comment() {
    let mut cmd = Command::cargo_bin("textparse").unwrap();
    cmd.arg("split")
        .arg("-i")
        .arg(fixture_path("commands.txt"));

    cmd.assert()
        .success()
        .stdout("mov r1, 5\nadd r1 r2  \n");
}

#[test]
fn test_split_lines_with_line_numbers() {
    let mut cmd = Command::cargo_bin("textparse").unwrap();
    cmd.arg("split")
        .arg("-i")
        .arg(fixture_path("commands.txt"))
        .arg("--comments")
        .arg("line")
        .arg("-n");

    cmd.assert()
        .success()
        .stdout("1: mov r1, 5\n4: add r1 r2  \n5: print \"result is\"\n6: halt\n");
}

#[test]
fn test_split_crlf_program() {
    let mut cmd = Command::cargo_bin("textparse").unwrap();
    cmd.arg("split")
        .arg("-i")
        .arg(fixture_path("program.txt"));

    cmd.assert().success().stdout("push 10\n");
}

#[test]
fn test_split_words() {
    let mut cmd = Command::cargo_bin("textparse").unwrap();
    cmd.arg("split")
        .arg("-i")
        .arg(fixture_path("words.txt"))
        .arg("-m")
        .arg("words");

    cmd.assert()
        .success()
        .stdout("alpha\nbeta\ngamma delta\nepsilon\n");
}

#[test]
fn test_json_output() {
    let mut cmd = Command::cargo_bin("textparse").unwrap();
    cmd.arg("split")
        .arg("-i")
        .arg(fixture_path("commands.txt"))
        .arg("-f")
        .arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("["))
        .stdout(predicate::str::contains("\"text\": \"mov r1, 5\""))
        .stdout(predicate::str::contains("\"line\": 4"))
        .stdout(predicate::str::contains("\"offset\""));
}

#[test]
fn test_unmatched_quote_fails() {
    let mut cmd = Command::cargo_bin("textparse").unwrap();
    cmd.arg("split")
        .arg("-i")
        .arg(fixture_path("unmatched.txt"))
        .arg("-m")
        .arg("words");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unmatched quote at byte offset 7"));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("output.txt");

    let mut cmd = Command::cargo_bin("textparse").unwrap();
    cmd.arg("split")
        .arg("-i")
        .arg(fixture_path("words.txt"))
        .arg("-o")
        .arg(&output_file);

    cmd.assert().success();

    let content = fs::read_to_string(&output_file).unwrap();
    assert_eq!(content, "alpha beta\n\"gamma delta\" epsilon\n");
}

#[test]
fn test_glob_pattern() {
    let mut cmd = Command::cargo_bin("textparse").unwrap();
    cmd.arg("split")
        .arg("-i")
        .arg(fixture_path("[cp]*.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("mov r1, 5"))
        .stdout(predicate::str::contains("push 10"));
}

#[test]
fn test_invalid_file() {
    let mut cmd = Command::cargo_bin("textparse").unwrap();
    cmd.arg("split").arg("-i").arg("nonexistent.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No files found matching"));
}

#[test]
fn test_prompted_file_name() {
    let mut cmd = Command::cargo_bin("textparse").unwrap();
    cmd.arg("split").write_stdin(format!("{}\n", fixture_path("words.txt")));

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Enter file name: "))
        .stdout("alpha beta\n\"gamma delta\" epsilon\n");
}

#[test]
fn test_prompted_file_name_too_long() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("textparse.toml");
    fs::write(&config_path, "[prompt]\ncapacity = 8\n").unwrap();

    let mut cmd = Command::cargo_bin("textparse").unwrap();
    cmd.arg("split")
        .arg("-c")
        .arg(&config_path)
        .write_stdin("a-very-long-file-name.txt\n");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("exceeds capacity of 8 bytes"));
}

#[test]
fn test_prompt_without_input() {
    let mut cmd = Command::cargo_bin("textparse").unwrap();
    cmd.arg("split").write_stdin("");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no file name given"));
}

#[test]
fn test_config_file_sets_mode() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("textparse.toml");
    fs::write(&config_path, "[split]\nmode = \"words\"\n").unwrap();

    let mut cmd = Command::cargo_bin("textparse").unwrap();
    cmd.arg("split")
        .arg("-i")
        .arg(fixture_path("words.txt"))
        .arg("-c")
        .arg(&config_path);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("gamma delta\n"));
}

#[test]
fn test_config_command_prints_defaults() {
    let mut cmd = Command::cargo_bin("textparse").unwrap();
    cmd.arg("config");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[split]"))
        .stdout(predicate::str::contains("comments = \"buffer\""))
        .stdout(predicate::str::contains("capacity = 64"));
}

#[test]
fn test_list_modes() {
    let mut cmd = Command::cargo_bin("textparse").unwrap();
    cmd.arg("list").arg("modes");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("lines"))
        .stdout(predicate::str::contains("words"));
}

#[test]
fn test_help_flag() {
    let mut cmd = Command::cargo_bin("textparse").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Split text files into lines or words"));
}
