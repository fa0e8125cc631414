//! Tests for `strata init` command.

use crate::support::*;

#[test]
fn test_init_creates_project_file() {
    let t = Test::new();

    let output = t.init_cmd("app");
    assert_success(&output);
    assert_stdout_contains(&output, "initialized");

    assert!(t.dir.path().join("Strata.toml").exists());
    assert!(t.project_file().contains("name = \"app\""));
}

#[test]
fn test_init_defaults_to_directory_name() {
    let t = Test::new();

    let output = t.cmd().arg("init").output().unwrap();
    assert_success(&output);

    let dir_name = t.dir.path().file_name().unwrap().to_string_lossy().to_string();
    // tempdir names only use characters valid in a namespace
    assert!(t.project_file().contains(&format!("name = \"{}\"", dir_name)));
}

#[test]
fn test_init_in_already_initialized_dir_fails() {
    let t = Test::init("app");

    let output = t.init_cmd("app");
    assert_failure(&output);
    assert_stderr_contains(&output, "already initialized");
}

#[test]
fn test_init_rejects_invalid_name() {
    let t = Test::new();

    let output = t.init_cmd("my:app");
    assert_failure(&output);
    assert!(!t.dir.path().join("Strata.toml").exists());
}

#[test]
fn test_commands_work_from_subdirectory() {
    let t = Test::with_values("app", &[("region", "us-east-1")]);
    let nested = t.dir.path().join("src").join("deep");
    std::fs::create_dir_all(&nested).unwrap();

    let output = t
        .cmd()
        .current_dir(&nested)
        .args(["config", "ls", "region"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output).trim_end(), "us-east-1");
}
