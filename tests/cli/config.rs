//! Tests for `strata config ls/rm/text/secret`.

use crate::support::*;

// Plaintext values

#[test]
fn test_text_and_get_roundtrip() {
    let t = Test::init("app");
    assert_roundtrip(&t, "foo", "bar");
}

#[test]
fn test_text_overwrites() {
    let t = Test::with_values("app", &[("foo", "first")]);

    assert_success(&t.text("foo", "second"));

    let output = t.get("foo");
    assert_success(&output);
    assert_eq!(stdout(&output).trim_end(), "second");
}

#[test]
fn test_stack_override_wins() {
    let t = Test::with_values("app", &[("foo", "bar")]);

    assert_success(&t.text_on("dev", "foo", "dev-bar"));

    let output = t.get_on("dev", "foo");
    assert_success(&output);
    assert_eq!(stdout(&output).trim_end(), "dev-bar");

    let output = t.get("foo");
    assert_success(&output);
    assert_eq!(stdout(&output).trim_end(), "bar");
}

#[test]
fn test_stack_without_overrides_sees_project_values() {
    let t = Test::with_values("app", STANDARD_VALUES);

    for (key, value) in STANDARD_VALUES {
        let output = t.get_on("prod", key);
        assert_success(&output);
        assert_eq!(stdout(&output).trim_end(), *value);
    }
}

#[test]
fn test_get_missing_key_fails() {
    let t = Test::init("app");

    let output = t.get("missing");
    assert_failure(&output);
    assert_stderr_contains(&output, "configuration key 'missing' not found");
}

#[test]
fn test_get_missing_key_names_stack() {
    let t = Test::init("app");

    let output = t.get_on("dev", "missing");
    assert_failure(&output);
    assert_stderr_contains(&output, "for stack 'dev'");
}

#[test]
fn test_rm_removes_value() {
    let t = Test::with_values("app", &[("foo", "bar")]);

    let output = t.rm("foo");
    assert_success(&output);
    assert_stdout_contains(&output, "removed");

    assert_failure(&t.get("foo"));
}

#[test]
fn test_rm_missing_key_succeeds() {
    let t = Test::with_values("app", &[("foo", "bar")]);
    let before = t.project_file();

    let output = t.rm("absent");
    assert_success(&output);
    assert_eq!(t.project_file(), before);
}

#[test]
fn test_rm_on_stack_keeps_project_value() {
    let t = Test::with_values("app", &[("foo", "bar")]);
    assert_success(&t.text_on("dev", "foo", "dev-bar"));

    let output = t
        .cmd()
        .args(["config", "rm", "foo", "--stack", "dev"])
        .output()
        .unwrap();
    assert_success(&output);

    let output = t.get_on("dev", "foo");
    assert_success(&output);
    assert_eq!(stdout(&output).trim_end(), "bar");
}

#[test]
fn test_qualified_key_from_other_namespace() {
    let t = Test::init("app");

    assert_success(&t.text("aws:config:region", "us-west-2"));

    let output = t.get("aws:config:region");
    assert_success(&output);
    assert_eq!(stdout(&output).trim_end(), "us-west-2");

    // bare "region" is app:config:region, a different key
    assert_failure(&t.get("region"));
}

// Listing

#[test]
fn test_ls_table_sorted_by_qualified_key() {
    let t = Test::init("app");
    for (key, value) in [
        ("zeta", "z"),
        ("aws:config:region", "us-west-2"),
        ("alpha", "a"),
    ] {
        assert_success(&t.text(key, value));
    }

    let output = t.ls();
    assert_success(&output);
    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("KEY"));
    assert!(lines[0].contains("VALUE"));
    assert!(lines[1].starts_with("alpha "));
    assert!(lines[2].starts_with("zeta "));
    assert!(lines[3].starts_with("aws:config:region "));
}

#[test]
fn test_ls_merges_stack_and_project() {
    let t = Test::with_values("app", &[("foo", "bar"), ("region", "us-east-1")]);
    assert_success(&t.text_on("dev", "foo", "dev-bar"));
    assert_success(&t.text_on("dev", "debug", "true"));

    let output = t
        .cmd()
        .args(["config", "ls", "--stack", "dev"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "dev-bar");
    assert_stdout_contains(&output, "us-east-1");
    assert_stdout_contains(&output, "debug");
    assert_stdout_excludes(&output, " bar");
}

#[test]
fn test_ls_json() {
    let t = Test::with_values("app", &[("foo", "bar")]);

    let output = t
        .cmd()
        .args(["config", "ls", "--json"])
        .output()
        .unwrap();
    assert_success(&output);

    let rows: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(rows[0]["key"], "app:config:foo");
    assert_eq!(rows[0]["value"], "bar");
    assert_eq!(rows[0]["secure"], false);
}

#[test]
fn test_ls_defaults_to_current_stack() {
    let t = Test::with_values("app", &[("foo", "bar")]);
    assert_success(&t.text_on("dev", "foo", "dev-bar"));
    assert_success(&t.select("dev"));

    let output = t.get("foo");
    assert_success(&output);
    assert_eq!(stdout(&output).trim_end(), "dev-bar");

    // writes still default to the project-wide scope
    assert_success(&t.text("foo", "baz"));
    let output = t.get_on("dev", "foo");
    assert_eq!(stdout(&output).trim_end(), "dev-bar");
}

#[test]
fn test_ls_empty_project_prints_nothing() {
    let t = Test::init("app");

    let output = t.ls();
    assert_success(&output);
    assert_eq!(stdout(&output), "");
}

// Secrets

#[test]
fn test_secret_blinded_by_default() {
    let t = Test::init("app");
    assert_success(&t.secret("token", SECRET_VALUE));

    let output = t.ls();
    assert_success(&output);
    assert_stdout_contains(&output, "token");
    assert_stdout_contains(&output, "********");
    assert_stdout_excludes(&output, SECRET_VALUE);
}

#[test]
fn test_secret_revealed_with_show_secrets() {
    let t = Test::with_values("app", &[("name", "demo")]);
    assert_success(&t.secret("token", SECRET_VALUE));

    let output = t.ls_revealed();
    assert_success(&output);
    assert_stdout_contains(&output, SECRET_VALUE);
    assert_stdout_contains(&output, "demo");
}

#[test]
fn test_get_secret_decrypts() {
    let t = Test::init("app");
    assert_success(&t.secret("token", SECRET_VALUE));

    let output = t.get("token");
    assert_success(&output);
    assert_eq!(stdout(&output).trim_end(), SECRET_VALUE);
}

#[test]
fn test_secret_never_stored_in_plaintext() {
    let t = Test::init("app");
    assert_success(&t.secret("token", SECRET_VALUE));

    let contents = t.project_file();
    assert!(!contents.contains(SECRET_VALUE));
    assert!(contents.contains("secure"));
    assert!(contents.contains("encryption_key"));
}

#[test]
fn test_secret_from_stdin() {
    let t = Test::init("app");

    let output = t
        .cmd()
        .args(["config", "secret", "token"])
        .write_stdin(format!("{}\n", SECRET_VALUE))
        .output()
        .unwrap();
    assert_success(&output);

    let output = t.get("token");
    assert_success(&output);
    assert_eq!(stdout(&output).trim_end(), SECRET_VALUE);
}

#[test]
fn test_secret_on_stack() {
    let t = Test::init("app");

    let output = t
        .cmd()
        .args(["config", "secret", "token", "dev-token", "--stack", "dev"])
        .output()
        .unwrap();
    assert_success(&output);

    assert_eq!(stdout(&t.get_on("dev", "token")).trim_end(), "dev-token");
    assert_failure(&t.get("token"));
}

#[test]
fn test_wrong_passphrase_fails() {
    let t = Test::init("app");
    assert_success(&t.secret("token", SECRET_VALUE));

    let output = t
        .bare_cmd()
        .env("STRATA_CONFIG_PASSPHRASE", "not the passphrase")
        .args(["config", "ls", "token"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "incorrect passphrase");
    assert_stdout_excludes(&output, SECRET_VALUE);
}

#[test]
fn test_missing_passphrase_fails_only_when_needed() {
    let t = Test::with_values("app", &[("foo", "bar")]);
    assert_success(&t.secret("token", SECRET_VALUE));

    // blinded listing and plain reads need no passphrase
    let output = t.bare_cmd().args(["config", "ls"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "********");

    let output = t.bare_cmd().args(["config", "ls", "foo"]).output().unwrap();
    assert_success(&output);

    let output = t.bare_cmd().args(["config", "ls", "token"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "no passphrase available");
    assert_stderr_contains(&output, "STRATA_CONFIG_PASSPHRASE");
}

#[test]
fn test_text_after_secret_is_plain() {
    let t = Test::init("app");
    assert_success(&t.secret("token", SECRET_VALUE));
    assert_success(&t.text("token", "now-public"));

    let output = t.ls();
    assert_success(&output);
    assert_stdout_contains(&output, "now-public");
    assert_stdout_excludes(&output, "********");
}
