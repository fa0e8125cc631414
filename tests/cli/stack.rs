//! Tests for `strata stack ls/select`.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_stack_ls_empty() {
    let t = Test::init("app");

    let output = t.cmd().args(["stack", "ls"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "no stacks");
}

#[test]
fn test_select_marks_current() {
    let t = Test::init("app");
    assert_success(&t.text_on("prod", "replicas", "5"));

    let output = t.select("dev");
    assert_success(&output);
    assert_stdout_contains(&output, "dev");

    let output = t.cmd().args(["stack", "ls"]).output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("* dev"));
    assert!(lines[2].starts_with("  prod"));
    assert!(lines[2].trim_end().ends_with('1'));
}

#[test]
fn test_select_invalid_name_fails() {
    let t = Test::init("app");

    let output = t.select("bad name");
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid stack name");
}

#[test]
fn test_select_persists() {
    let t = Test::init("app");
    assert_success(&t.select("staging"));

    assert!(t.project_file().contains("stack = \"staging\""));
}

#[test]
fn test_selected_stack_scopes_listing() {
    let t = Test::with_values("app", &[("replicas", "1")]);
    assert_success(&t.text_on("prod", "replicas", "5"));

    t.cmd()
        .args(["stack", "select", "prod"])
        .assert()
        .success()
        .stdout(predicate::str::contains("current stack is now prod"));

    t.cmd()
        .args(["config", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5"))
        .stdout(predicate::str::contains("replicas"));

    t.cmd()
        .args(["config", "ls", "replicas", "--stack", ""])
        .assert()
        .success()
        .stdout(predicate::eq("1\n"));
}

#[test]
fn test_stack_commands_need_project() {
    let t = Test::new();

    t.cmd()
        .args(["stack", "ls"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"));
}
