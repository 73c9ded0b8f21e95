//! Integration tests for `hashgen doctor`.

#![cfg(unix)]

mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn doctor_reports_missing_layout() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("doctor")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Checking virtual environment... ✗ Not found"))
        .stdout(predicate::str::contains("Checking script... ✗ Not found"))
        .stdout(predicate::str::contains("using defaults"));
}

#[test]
fn doctor_passes_with_complete_layout() {
    let ctx = TestContext::new();
    ctx.install_fake_python(0);
    ctx.write_script();
    ctx.write_file("requirements.txt", "argon2-cffi\n");
    ctx.write_file("hashgen.toml", "[launcher]\npause_on_error = true\n");

    ctx.cli()
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("Python 3.12.0"))
        .stdout(predicate::str::contains("hashgen.toml"))
        .stdout(predicate::str::contains("All checks passed!"));

    // `--version` probe is not a script invocation
    assert!(ctx.calls().is_empty());
}
