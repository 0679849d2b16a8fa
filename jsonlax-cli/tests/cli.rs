//! Runs the `jsonlax` binary as a subprocess.

use std::io::Write;
use std::process::{Command, Stdio};

fn run(args: &[&str], input: &str) -> (i32, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_jsonlax"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn jsonlax");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();

    let output = child.wait_with_output().unwrap();
    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (code, stdout, stderr)
}

#[test]
fn compact_by_default() {
    let (code, stdout, _) = run(&[], "{a=1; b=>[x,,'y']}");
    assert_eq!(code, 0);
    assert_eq!(stdout, "{\"a\":1,\"b\":[\"x\",null,\"y\"]}\n");
}

#[test]
fn pretty_with_indent() {
    let (code, stdout, _) = run(&["--indent", "2"], "[1,{k:v}]");
    assert_eq!(code, 0);
    assert_eq!(stdout, "[\n  1,\n  {\n    \"k\": \"v\"\n  }\n]\n");
}

#[test]
fn check_prints_nothing() {
    let (code, stdout, _) = run(&["--check"], "[1,2]");
    assert_eq!(code, 0);
    assert!(stdout.is_empty());
}

#[test]
fn syntax_error_exits_with_one() {
    let (code, stdout, stderr) = run(&["-"], "(1,2]");
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Expected a ')'"), "{stderr}");
}

#[test]
fn duplicate_key_exits_with_one() {
    let (code, _, stderr) = run(&[], r#"{"a":1,"a":2}"#);
    assert_eq!(code, 1);
    assert!(stderr.contains("Duplicate key \"a\""), "{stderr}");
}

#[test]
fn depth_limit_flag() {
    let (code, _, stderr) = run(&["--max-depth", "2"], "[[[]]]");
    assert_eq!(code, 1);
    assert!(stderr.contains("nesting depth 3"), "{stderr}");
}

#[test]
fn missing_file_exits_with_two() {
    let (code, _, stderr) = run(&["/nonexistent/input.json"], "");
    assert_eq!(code, 2);
    assert!(stderr.starts_with("error:"), "{stderr}");
}

#[test]
fn empty_input_is_rejected() {
    let (code, _, stderr) = run(&[], "");
    assert_eq!(code, 1);
    assert!(stderr.contains("empty argument"), "{stderr}");
}
