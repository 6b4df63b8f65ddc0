//! CLI integration tests
//!
//! These tests run the built `seqalign` binary against scratch files and check
//! its output and exit status.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn run(args: &[&str]) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_seqalign");
    Command::new(cli_bin)
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn setup_pair(dir: &TempDir) -> (String, String) {
    let base = write_file(dir, "base.txt", "one\ntwo\nthree\n");
    let target = write_file(dir, "target.txt", "one\n2\nthree\n");
    (
        base.to_str().unwrap().to_string(),
        target.to_str().unwrap().to_string(),
    )
}

#[test]
fn test_cli_diff_reports_changed_hunk() {
    // Scenario: two files differ in one line
    // When: `seqalign diff base.txt target.txt`
    // Then: a unified-style hunk is printed and the exit status is 1
    let temp_dir = TempDir::new().unwrap();
    let (base, target) = setup_pair(&temp_dir);

    let output = run(&["diff", &base, &target]);

    assert_eq!(
        output.status.code(),
        Some(1),
        "Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected = format!(
        "--- {}\n+++ {}\n@@ -1,4 +1,4 @@\n one\n-two\n+2\n three\n \n",
        base, target
    );
    assert_eq!(stdout, expected);
}

#[test]
fn test_cli_diff_identical_files_exit_zero() {
    let temp_dir = TempDir::new().unwrap();
    let base = write_file(&temp_dir, "a.txt", "same\nlines\n");
    let target = write_file(&temp_dir, "b.txt", "same\r\nlines\r\n");

    let output = run(&["diff", base.to_str().unwrap(), target.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty(), "identical files print nothing");
}

#[test]
fn test_cli_diff_context_flag() {
    let temp_dir = TempDir::new().unwrap();
    let lines: Vec<String> = (1..=10).map(|i| format!("line {i}")).collect();
    let mut changed = lines.clone();
    changed[4] = "line five".to_string();
    let base = write_file(&temp_dir, "base.txt", &lines.join("\n"));
    let target = write_file(&temp_dir, "target.txt", &changed.join("\n"));

    let output = run(&[
        "diff",
        base.to_str().unwrap(),
        target.to_str().unwrap(),
        "-U",
        "1",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("@@ -4,3 +4,3 @@\n line 4\n-line 5\n+line five\n line 6\n"),
        "unexpected output: {}",
        stdout
    );
}

#[test]
fn test_cli_diff_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let (base, target) = setup_pair(&temp_dir);

    let output = run(&["diff", &base, &target, "--format", "json"]);

    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["ratio"], serde_json::json!(0.75));
    let groups = report["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0][1]["tag"], "replace");
    assert_eq!(groups[0][1]["base_start"], 1);
}

#[test]
fn test_cli_opcodes_text_output() {
    let temp_dir = TempDir::new().unwrap();
    let (base, target) = setup_pair(&temp_dir);

    let output = run(&["opcodes", &base, &target]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "equal 0 1 0 1\nreplace 1 2 1 2\nequal 2 4 2 4\n"
    );
}

#[test]
fn test_cli_ratio_output() {
    let temp_dir = TempDir::new().unwrap();
    let (base, target) = setup_pair(&temp_dir);

    let output = run(&["ratio", &base, &target]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "ratio: 0.750000\nquick_ratio: 0.750000\nreal_quick_ratio: 1.000000\n"
    );
}

#[test]
fn test_cli_config_file_and_flag_override() {
    // Scenario: the only shared line is blank
    // When: the config file disables junk, then --junk re-enables blank lines
    // Then: the flag wins over the file
    let temp_dir = TempDir::new().unwrap();
    let base = write_file(&temp_dir, "base.txt", "x\n\ny");
    let target = write_file(&temp_dir, "target.txt", "p\n\nq");
    let config = write_file(&temp_dir, "seqalign.toml", "junk = \"none\"\n");
    let (base, target, config) = (
        base.to_str().unwrap(),
        target.to_str().unwrap(),
        config.to_str().unwrap(),
    );

    let output = run(&["ratio", base, target, "--config", config]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("ratio: 0.333333\n"));

    let output = run(&[
        "ratio",
        base,
        target,
        "--config",
        config,
        "--junk",
        "blank-lines",
    ]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("ratio: 0.000000\n"));
}

#[test]
fn test_cli_missing_file_exits_two() {
    let temp_dir = TempDir::new().unwrap();
    let (base, _target) = setup_pair(&temp_dir);
    let missing = temp_dir.path().join("missing.txt");

    let output = run(&["diff", &base, missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: [ERR_IO]"), "stderr: {}", stderr);
}

#[test]
fn test_cli_bad_config_exits_two() {
    let temp_dir = TempDir::new().unwrap();
    let (base, target) = setup_pair(&temp_dir);
    let config = write_file(&temp_dir, "bad.toml", "contxt = 4\n");

    let output = run(&["diff", &base, &target, "--config", config.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[ERR_CONFIG]"), "stderr: {}", stderr);
}

#[test]
fn test_cli_json_logs_go_to_stderr() {
    let temp_dir = TempDir::new().unwrap();
    let (base, target) = setup_pair(&temp_dir);

    let output = run(&["--log-format", "json", "opcodes", &base, &target, "--format", "json"]);

    assert!(output.status.success());
    // stdout stays parseable even with logging enabled
    let opcodes: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(opcodes.as_array().map(Vec::len), Some(3));
}
