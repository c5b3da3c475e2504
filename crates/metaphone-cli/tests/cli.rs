//! Integration tests for the double-metaphone binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("double-metaphone").unwrap()
}

#[test]
fn encodes_arguments() {
    cmd()
        .args(["Smith", "Schmidt", "Raziq"])
        .assert()
        .success()
        .stdout("Smith SM0 XMT\nSchmidt XMT SMT\nRaziq RSK\n");
}

#[test]
fn encodes_stdin_lines() {
    cmd()
        .write_stdin("Copperthwaite\n\n   \nXavier\n")
        .assert()
        .success()
        .stdout("Copperthwaite KPR0 KPRT\nXavier SF SFR\n");
}

#[test]
fn json_output() {
    cmd()
        .args(["--format", "json", "Raziq"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""word":"Raziq""#))
        .stdout(predicate::str::contains(r#""primary":"RSK""#))
        .stdout(predicate::str::contains(r#""secondary":null"#));
}

#[test]
fn tsv_output() {
    cmd()
        .args(["-f", "tsv", "Smith"])
        .assert()
        .success()
        .stdout("Smith\tSM0\tXMT\n");
}

#[test]
fn compare_match() {
    cmd()
        .args(["--compare", "Wasserman", "Vasserman"])
        .assert()
        .success()
        .stdout("match\n");
}

#[test]
fn compare_no_match() {
    cmd()
        .args(["--compare", "Smith", "Jones"])
        .assert()
        .success()
        .stdout("no match\n");
}

#[test]
fn max_length_option() {
    cmd()
        .args(["--max-length", "6", "Copperthwaite"])
        .assert()
        .success()
        .stdout("Copperthwaite KPR0T KPRTT\n");
}

#[test]
fn invalid_format_fails() {
    cmd()
        .args(["--format", "xml", "Smith"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("xml"));
}

#[test]
fn trace_logging_names_rules() {
    cmd()
        .args(["-vvv", "Raziq"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("Raziq RSK\n")
        .stderr(predicate::str::contains("R@0: r"));
}

#[test]
fn quiet_suppresses_logging() {
    cmd()
        .args(["-q", "-vvv", "Raziq"])
        .env("RUST_LOG", "trace")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
