//! Integration tests for color control: --color flag, `NO_COLOR`, `FORCE_COLOR`.

use crate::common::fieldlog;

fn stdout_of(cmd: &mut assert_cmd::Command) -> String {
    let output = cmd.output().unwrap();
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn color_defaults_to_always_even_when_piped() {
    let stdout = stdout_of(fieldlog().args(["info", "hello"]));
    assert!(
        stdout.contains("\x1b["),
        "default color mode should emit ANSI escapes on a pipe"
    );
}

#[test]
fn color_never_disables_ansi() {
    let stdout = stdout_of(fieldlog().args(["--color=never", "info", "hello"]));
    assert!(
        !stdout.contains("\x1b["),
        "Should not contain ANSI escapes with --color=never"
    );
}

#[test]
fn color_auto_on_pipe_is_plain() {
    let stdout = stdout_of(fieldlog().args(["--color=auto", "info", "hello"]));
    assert!(!stdout.contains("\x1b["));
}

#[test]
fn color_auto_respects_force_color() {
    let stdout = stdout_of(
        fieldlog()
            .env("FORCE_COLOR", "1")
            .args(["--color=auto", "info", "hello"]),
    );
    assert!(stdout.contains("\x1b["));
}

#[test]
fn color_always_overrides_no_color() {
    let stdout = stdout_of(
        fieldlog()
            .env("NO_COLOR", "1")
            .args(["--color=always", "info", "hello"]),
    );
    assert!(stdout.contains("\x1b["));
}
