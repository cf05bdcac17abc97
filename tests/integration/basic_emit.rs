//! Integration tests for emitting a single record to stdout.

use predicates::prelude::*;

use crate::common::fieldlog;

#[test]
fn info_record_has_badge_message_and_fields() {
    fieldlog()
        .args(["--color=never", "--version-tag=test", "info", "hello", "n=42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("INFO: hello"))
        .stdout(predicate::str::contains("version=test n=42"));
}

#[test]
fn one_line_per_record() {
    let output = fieldlog()
        .args(["--color=never", "warn", "disk low", "free_mb=12"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.ends_with('\n'));
}

#[test]
fn timestamp_is_rfc3339() {
    let output = fieldlog()
        .args(["--color=never", "info", "tick"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let (ts, _) = stdout.split_once("  ").unwrap();
    assert!(
        ts.parse::<jiff::Timestamp>().is_ok(),
        "timestamp {ts:?} should parse as RFC 3339"
    );
}

#[test]
fn fields_keep_command_line_order() {
    let output = fieldlog()
        .args(["--color=never", "info", "ordered", "zebra=z", "alpha=a", "middle=m"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let zebra = stdout.find("zebra=").unwrap();
    let alpha = stdout.find("alpha=").unwrap();
    let middle = stdout.find("middle=").unwrap();
    assert!(zebra < alpha, "zebra should come before alpha");
    assert!(alpha < middle, "alpha should come before middle");
}

#[test]
fn duplicate_keys_are_kept() {
    fieldlog()
        .args(["--color=never", "info", "dup", "k=1", "k=2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("k=1 k=2"));
}

#[test]
fn string_values_with_spaces_are_quoted() {
    fieldlog()
        .args(["--color=never", "info", "quoted", "who=jane doe"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"who="jane doe""#));
}

#[test]
fn request_id_follows_caller_fields() {
    fieldlog()
        .args([
            "--color=never",
            "--request-id=req-42",
            "info",
            "served",
            "status=200",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("status=200 request_id=req-42"));
}

#[test]
fn custom_time_format() {
    fieldlog()
        .args(["--color=never", "--time-format=%Y", "info", "yearly"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d{4}   INFO: yearly").unwrap());
}

#[test]
fn invalid_time_format_fails_construction() {
    fieldlog()
        .args(["--time-format=%Y-%", "info", "never printed"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains(
            "fieldlog: error on building logger:",
        ));
}

#[test]
fn invalid_level_is_rejected() {
    fieldlog()
        .args(["verbose", "msg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid level"));
}

#[test]
fn malformed_field_is_rejected() {
    fieldlog()
        .args(["info", "msg", "novalue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("KEY=VALUE"));
}

#[test]
fn keys_with_spaces_are_quoted() {
    fieldlog()
        .args(["--color=never", "info", "quoted key", "a b=c=1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""a b"="c=1""#));
}
