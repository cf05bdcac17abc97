//! Integration tests for the process-terminating severities.

use predicates::prelude::*;

use crate::common::fieldlog;

#[test]
fn fatal_emits_then_exits_with_status_one() {
    fieldlog()
        .args(["--color=never", "--no-stack-trace", "fatal", "boom", "code=7"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FATAL: boom"))
        .stdout(predicate::str::contains("code=7"));
}

#[test]
fn panic_emits_then_unwinds() {
    fieldlog()
        .args(["--color=never", "--no-stack-trace", "panic", "boom"])
        .assert()
        .code(101)
        .stdout(predicate::str::contains("PANIC: boom"))
        .stderr(predicate::str::contains("boom"));
}

#[test]
fn fatal_record_includes_stack_trace_by_default() {
    fieldlog()
        .args(["--color=never", "fatal", "boom"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FATAL: boom"))
        .stdout(predicate::str::contains("stacktrace:"));
}
