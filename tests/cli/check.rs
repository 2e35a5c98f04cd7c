//! Check command tests.

use predicates::prelude::*;

use crate::support::Test;

#[test]
fn check_reports_references() {
    let t = Test::new();
    let output = t.check("projects/p/secrets/s/versions/1:DB_PASS");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("DB_PASS"));
    assert!(stderr.contains("projects/p/secrets/s/versions/1"));
    assert!(stderr.contains("1 reference ok"));
}

#[test]
fn check_json_output() {
    let t = Test::new();
    let output = t.check_json("a/b:FIRST\nc/d:SECOND");
    assert!(output.status.success());
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("check --json must emit valid JSON");
    assert_eq!(report[0]["output"], "FIRST");
    assert_eq!(report[0]["locator"], "a/b");
    assert_eq!(report[1]["output"], "SECOND");
}

#[test]
fn check_empty_spec() {
    let t = Test::new();
    let output = t.check("  \n , ");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no references"));
}

#[test]
fn check_rejects_malformed_spec() {
    let t = Test::new();
    t.cmd()
        .args(["check", "--secrets", "no-output-key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed secret reference"))
        .stderr(predicate::str::contains("locator:OUTPUT_KEY"));
}
