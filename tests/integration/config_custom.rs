//! Integration tests for the config file and its precedence.

use predicates::prelude::*;
use std::io::Write;

use crate::common::fieldlog;

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn config_file_sets_version_and_color() {
    let file = config_file("version = \"from-file\"\ncolor = \"never\"\n");
    let output = fieldlog()
        .arg("--config")
        .arg(file.path())
        .args(["info", "hello"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("version=from-file"));
    assert!(!stdout.contains("\x1b["), "file should disable colors");
}

#[test]
fn cli_flags_override_config_file() {
    let file = config_file("version = \"from-file\"\ncolor = \"never\"\n");
    fieldlog()
        .arg("--config")
        .arg(file.path())
        .args(["--version-tag=from-cli", "info", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("version=from-cli"));
}

#[test]
fn debug_env_overrides_config_file() {
    let file = config_file("debug = true\ncolor = \"never\"\n");
    fieldlog()
        .env("DEBUG", "false")
        .arg("--config")
        .arg(file.path())
        .args(["debug", "hidden"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn config_file_debug_enables_debug() {
    let file = config_file("debug = true\ncolor = \"never\"\n");
    fieldlog()
        .arg("--config")
        .arg(file.path())
        .args(["debug", "visible"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DEBUG: visible"));
}

#[test]
fn config_file_time_format_is_validated() {
    let file = config_file("time_format = \"\"\n");
    fieldlog()
        .arg("--config")
        .arg(file.path())
        .args(["info", "msg"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error on building logger"));
}

#[test]
fn missing_explicit_config_file_is_an_error() {
    fieldlog()
        .args(["--config", "/nonexistent/fieldlog.toml", "info", "msg"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot read config file"));
}

#[test]
fn invalid_toml_is_an_error() {
    let file = config_file("debug = [broken");
    fieldlog()
        .arg("--config")
        .arg(file.path())
        .args(["info", "msg"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("config file error"));
}

#[test]
fn default_config_path_under_xdg_config_home() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("fieldlog")).unwrap();
    std::fs::write(
        dir.path().join("fieldlog").join("config.toml"),
        "version = \"xdg\"\ncolor = \"never\"\n",
    )
    .unwrap();

    fieldlog()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["info", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("version=xdg"));
}
