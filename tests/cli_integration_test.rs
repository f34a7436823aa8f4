//! Integration tests for the `luadeob` binary.

use serde_json::Value;
use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn luadeob(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_luadeob"))
        .current_dir(dir.path())
        .env_remove("LUADEOB_CONFIG")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute luadeob")
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "luadeob failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

#[test]
fn test_run_example_as_json() {
    let temp = TempDir::new().unwrap();
    let json = stdout_json(&luadeob(&temp, &["run", "--example", "simple", "-f", "json"]));

    assert_eq!(json["source"], "example:simple");
    let code = json["deobfuscatedCode"].as_str().unwrap();
    assert!(!code.contains("a1b2c3"));
    assert!(code.contains("Hello"));
    assert_eq!(json["statistics"]["stringsDecoded"], 4);
    assert_eq!(json["statistics"]["complexity"], "Low");
    assert!(json["warnings"].as_array().unwrap().is_empty());
}

#[test]
fn test_run_multiple_files_keeps_order() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.lua"), "local x9f3a2b = 1").unwrap();
    fs::write(temp.path().join("b.lua"), "local var_ff = 2").unwrap();

    let json = stdout_json(&luadeob(&temp, &["run", "a.lua", "b.lua", "--format", "json"]));
    let reports = json.as_array().expect("several inputs produce an array");

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["source"], "a.lua");
    assert_eq!(reports[0]["deobfuscatedCode"], "local player = 1");
    assert_eq!(reports[1]["source"], "b.lua");
    assert_eq!(reports[1]["deobfuscatedCode"], "local player = 2");
}

#[test]
fn test_run_reads_stdin() {
    let temp = TempDir::new().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_luadeob"))
        .current_dir(temp.path())
        .env_remove("LUADEOB_CONFIG")
        .args(["run", "-f", "json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"local s = \"\\72\\105\"")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    let json = stdout_json(&output);
    assert_eq!(json["source"], "<stdin>");
    assert_eq!(json["deobfuscatedCode"], "local s = \"Hi\"");
}

#[test]
fn test_run_writes_markdown_file() {
    let temp = TempDir::new().unwrap();
    let output = luadeob(
        &temp,
        &["run", "--example", "medium", "-f", "markdown", "-o", "report.md"],
    );
    assert!(output.status.success());

    let report = fs::read_to_string(temp.path().join("report.md")).unwrap();
    assert!(report.starts_with("# Deobfuscation Report"));
    assert!(report.contains("## example:medium"));
    assert!(report.contains("```lua"));
}

#[test]
fn test_discovered_config_enables_fixed_point() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".luadeob.toml"),
        "[simplify]\nfixed_point = true\n\n[output]\ndefault_format = \"json\"\n",
    )
    .unwrap();
    fs::write(temp.path().join("nested.lua"), "local y = 5 + 0 + 0").unwrap();

    let json = stdout_json(&luadeob(&temp, &["run", "nested.lua"]));
    assert_eq!(json["deobfuscatedCode"], "local y = 5");
}

#[test]
fn test_fixed_point_flag() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("nested.lua"), "local y = 5 + 0 + 0").unwrap();

    let single = stdout_json(&luadeob(&temp, &["run", "nested.lua", "-f", "json"]));
    assert_eq!(single["deobfuscatedCode"], "local y = 5 + 0");

    let fixed = stdout_json(&luadeob(
        &temp,
        &["run", "nested.lua", "-f", "json", "--fixed-point"],
    ));
    assert_eq!(fixed["deobfuscatedCode"], "local y = 5");
}

#[test]
fn test_report_warnings_flag() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("bell.lua"), "local s = \"\\x07\"").unwrap();

    let json = stdout_json(&luadeob(
        &temp,
        &["run", "bell.lua", "-f", "json", "--report-warnings"],
    ));
    assert_eq!(json["warnings"].as_array().map(Vec::len), Some(1));
}

#[test]
fn test_missing_file_fails() {
    let temp = TempDir::new().unwrap();
    let output = luadeob(&temp, &["run", "missing.lua"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.lua"));
}

#[test]
fn test_unknown_example_fails() {
    let temp = TempDir::new().unwrap();
    let output = luadeob(&temp, &["run", "--example", "nope"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("nope"));
}

#[test]
fn test_examples_lists_samples() {
    let temp = TempDir::new().unwrap();
    let output = luadeob(&temp, &["examples"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for key in ["simple", "medium", "complex"] {
        assert!(stdout.contains(key));
    }
}

#[test]
fn test_init_creates_config_once() {
    let temp = TempDir::new().unwrap();

    assert!(luadeob(&temp, &["init"]).status.success());
    let written = fs::read_to_string(temp.path().join(".luadeob.toml")).unwrap();
    assert!(written.contains("[simplify]"));

    assert!(!luadeob(&temp, &["init"]).status.success());
    assert!(luadeob(&temp, &["init", "--force"]).status.success());
}
