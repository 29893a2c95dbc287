#![cfg(feature = "cli")]

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn sublev_bin() -> &'static str {
    env!("CARGO_BIN_EXE_sublev")
}

fn run(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(sublev_bin())
        .args(args)
        .env("SUBLEV_DEFAULT_OPTIONS", "")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("run sublev");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input.as_bytes())
        .expect("write input");
    child.wait_with_output().expect("wait sublev")
}

#[test]
fn prints_matching_lines_best_first() {
    let output = run(&["-k", "1", "kitten"], "a mitten\nthe kitten\ndog\n");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "the kitten\na mitten\n");
}

#[test]
fn exit_code_is_one_on_no_match() {
    let output = run(&["zzzzz"], "abc\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn whole_input_prints_the_distance() {
    let output = run(&["--whole", "-k", "2", "kitten"], "one\nxxkitxenyy\n");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1\n");
}

#[test]
fn default_options_from_environment() {
    let mut child = Command::new(sublev_bin())
        .arg("kitten")
        .env("SUBLEV_DEFAULT_OPTIONS", "--print-distance --max-distance 0")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("run sublev");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"a mitten\nthe KITTEN\n")
        .expect("write input");
    let output = child.wait_with_output().expect("wait sublev");
    assert_eq!(String::from_utf8_lossy(&output.stdout), "0\tthe KITTEN\n");
}

#[test]
fn missing_file_is_an_error() {
    let output = run(&["kitten", "/nonexistent/sublev-input"], "");
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("/nonexistent/sublev-input"));
}
