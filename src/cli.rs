//! Command-line argument definitions for `fieldlog`.
//!
//! Uses [`clap`] derive macros for argument parsing.

use std::io::{self, IsTerminal};

use clap::{Parser, ValueEnum};
use serde::Deserialize;

use crate::fields::Field;
use crate::level::Level;

/// Emit one structured log record to stdout.
///
/// Builds a logger from the config file, the `DEBUG` environment variable
/// and the flags below, then writes a single record.
#[derive(Debug, Parser)]
#[command(name = "fieldlog", version, about, long_about = None)]
pub struct Cli {
    /// Severity of the record.
    #[arg(value_parser = parse_level_arg)]
    pub level: Level,

    /// Message text.
    pub message: String,

    /// Extra fields as `KEY=VALUE`.
    ///
    /// Values that parse as JSON keep their type (`n=42` is a number),
    /// anything else is recorded as a string.
    #[arg(value_parser = parse_field_arg)]
    pub fields: Vec<Field>,

    /// Control color output.
    ///
    /// `auto` enables colors only when stdout is a TTY and `NO_COLOR` is unset.
    #[arg(short = 'c', long, value_enum)]
    pub color: Option<ColorMode>,

    /// Emit debug-level records.
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Value of the `version` field attached to the record.
    #[arg(long)]
    pub version_tag: Option<String>,

    /// Do not attach stack traces to error, fatal and panic records.
    #[arg(long)]
    pub no_stack_trace: bool,

    /// strftime-compatible timestamp format (default: RFC 3339 with nanoseconds).
    #[arg(short = 't', long)]
    pub time_format: Option<String>,

    /// Request identifier to correlate the record with.
    #[arg(short = 'r', long)]
    pub request_id: Option<String>,

    /// Path to configuration file.
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Enable colors only when stdout is a TTY.
    Auto,
    /// Always enable colors.
    #[default]
    Always,
    /// Never enable colors.
    Never,
}

impl ColorMode {
    /// Decide whether ANSI escapes should be written to stdout.
    pub fn resolve(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                if std::env::var_os("FORCE_COLOR").is_some_and(|v| !v.is_empty()) {
                    return true;
                }
                if !io::stdout().is_terminal() {
                    return false;
                }
                if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
                    return false;
                }
                !std::env::var("TERM").is_ok_and(|v| v == "dumb")
            }
        }
    }
}

/// Parse level argument as case-insensitive string.
fn parse_level_arg(s: &str) -> Result<Level, String> {
    Level::from_str_loose(s).ok_or_else(|| {
        format!("invalid level '{s}': expected one of debug, info, warn, error, fatal, panic")
    })
}

/// Parse a `KEY=VALUE` argument into a [`Field`].
fn parse_field_arg(s: &str) -> Result<Field, String> {
    let (key, raw) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid field '{s}': expected KEY=VALUE"))?;
    if key.is_empty() {
        return Err(format!("invalid field '{s}': key is empty"));
    }
    let value = serde_json::from_str(raw).unwrap_or_else(|_| serde_json::Value::String(raw.to_string()));
    Ok(Field::new(key, value))
}
