//! Error reporting tests.

use predicates::prelude::*;

use crate::support::Test;

#[test]
fn malformed_reference_fails_with_hint() {
    let t = Test::new();
    t.cmd()
        .args(["render", "--secrets", "just-a-locator"])
        .write_stdin("a: b\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed secret reference"))
        .stderr(predicate::str::contains("DB_PASS"));
}

#[test]
fn invalid_output_key_fails() {
    let t = Test::new();
    t.cmd()
        .args(["render", "--secrets", "a/b:BAD-KEY"])
        .write_stdin("a: b\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid output key"));
}

#[test]
fn duplicate_output_key_fails() {
    let t = Test::new();
    t.cmd()
        .args(["render", "--secrets", "a:KEY,b:KEY"])
        .write_stdin("a: b\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate output key"));
}

#[test]
fn invalid_yaml_fails() {
    let t = Test::new();
    t.cmd()
        .env("SRC", "v")
        .args(["render", "--secrets", "SRC:K"])
        .write_stdin("foo: [unclosed\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid YAML document"));
}

#[test]
fn missing_env_var_fails_with_hint() {
    let t = Test::new();
    t.cmd()
        .args(["render", "--secrets", "INLAY_TEST_UNSET_VAR:K"])
        .write_stdin("a: ${K}\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not set"))
        .stderr(predicate::str::contains("--source env"));
}

#[test]
fn exec_source_requires_command() {
    let t = Test::new();
    // clap enforces --exec-command when --source exec is selected.
    t.cmd()
        .args(["render", "--secrets", "a:K", "--source", "exec"])
        .write_stdin("a: b\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--exec-command"));
}

#[test]
fn failing_exec_command_surfaces_stderr() {
    let t = Test::new();
    let output = t.render_exec("whatever:K", "a: ${K}\n", "false");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("secret command failed"));
}
