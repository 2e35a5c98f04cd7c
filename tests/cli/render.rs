//! Render command tests.

use crate::support::Test;

#[test]
fn renders_from_stdin_to_stdout() {
    let t = Test::new();
    let output = t.render_stdin(
        "DB_PASS_SRC:DB_PASS",
        "password: ${DB_PASS}\nother: keep-me\n",
        &[("DB_PASS_SRC", "s3cr3t")],
    );
    assert!(output.status.success(), "{:?}", output);
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "password: s3cr3t\nother: keep-me\n"
    );
}

#[test]
fn renders_bare_placeholder() {
    let t = Test::new();
    let output = t.render_stdin(
        "SRC:TOKEN",
        "auth: $TOKEN\n",
        &[("SRC", "tok-123")],
    );
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "auth: tok-123\n");
}

#[test]
fn renders_multiple_references_in_order() {
    let t = Test::new();
    let output = t.render_stdin(
        "A_SRC:ALPHA, B_SRC:BETA",
        "a: ${ALPHA}\nb: ${BETA}\n",
        &[("A_SRC", "one"), ("B_SRC", "two")],
    );
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "a: one\nb: two\n");
}

#[test]
fn rewrites_file_in_place() {
    let t = Test::new();
    let doc = t.write_doc("app.yaml", "password: ${DB_PASS}\nname: svc\n");
    let output = t.render_in_place("SRC:DB_PASS", &doc, &[("SRC", "hunter2")]);
    assert!(output.status.success(), "{:?}", output);
    assert_eq!(t.read("app.yaml"), "password: hunter2\nname: svc\n");
}

#[test]
fn writes_to_out_path() {
    let t = Test::new();
    let doc = t.write_doc("in.yaml", "key: ${K}\n");
    let out = t.dir.path().join("out.yaml");
    let output = t
        .cmd()
        .env("SRC", "v")
        .args([
            "render",
            "--secrets",
            "SRC:K",
            "--file",
            doc.to_str().unwrap(),
            "--out",
            out.to_str().unwrap(),
        ])
        .output()
        .expect("failed to run inlay render --out");
    assert!(output.status.success(), "{:?}", output);
    assert_eq!(t.read("out.yaml"), "key: v\n");
    // input untouched
    assert_eq!(t.read("in.yaml"), "key: ${K}\n");
}

#[test]
fn unknown_placeholders_survive() {
    let t = Test::new();
    let output = t.render_stdin(
        "SRC:KNOWN",
        "a: ${KNOWN}\nb: ${UNKNOWN}\n",
        &[("SRC", "v")],
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("a: v"));
    assert!(stdout.contains("b: ${UNKNOWN}"));
}

#[test]
fn renders_via_exec_source() {
    let t = Test::new();
    let output = t.render_exec("hello-from-exec:GREETING", "msg: ${GREETING}\n", "echo");
    assert!(output.status.success(), "{:?}", output);
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "msg: hello-from-exec\n"
    );
}

#[test]
fn failing_fetch_writes_no_output() {
    let t = Test::new();
    let doc = t.write_doc("app.yaml", "password: ${DB_PASS}\n");
    // Missing env var: run must fail and leave the file untouched.
    let output = t.render_in_place("INLAY_TEST_UNSET_VAR:DB_PASS", &doc, &[]);
    assert!(!output.status.success());
    assert_eq!(t.read("app.yaml"), "password: ${DB_PASS}\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("INLAY_TEST_UNSET_VAR"));
}
