//! Configuration management with TOML file and environment support.
//!
//! Merges settings from four sources (highest precedence first):
//! 1. CLI flags
//! 2. `DEBUG` environment variable
//! 3. Config file (`~/.config/fieldlog/config.toml` or `$XDG_CONFIG_HOME/fieldlog/config.toml`)
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::{Cli, ColorMode};
use crate::error::LogError;

/// Environment variable that switches the threshold down to debug.
pub const DEBUG_ENV: &str = "DEBUG";

/// Settings a [`LoggerAdapter`](crate::LoggerAdapter) is built from.
///
/// Use [`LoggerConfig::from_cli`] for the binary, [`LoggerConfig::from_env`]
/// for embedders, or [`LoggerConfig::default`] in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggerConfig {
    /// Value of the constant `version` field attached to every record.
    pub version: String,
    /// Suppress stack traces on error, fatal and panic records.
    pub disable_stack_trace: bool,
    /// Emit debug-level records.
    pub debug: bool,
    /// Color output mode (auto/always/never).
    pub color: ColorMode,
    /// strftime-compatible timestamp format; `None` = RFC 3339 nanoseconds.
    pub time_format: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            version: String::new(),
            disable_stack_trace: false,
            debug: false,
            color: ColorMode::Always,
            time_format: None,
        }
    }
}

impl LoggerConfig {
    /// Defaults overridden by the `DEBUG` environment variable.
    pub fn from_env() -> Result<Self, LogError> {
        Self::from_debug_value(debug_env().as_deref())
    }

    /// Load `path`, then apply the `DEBUG` environment variable on top.
    pub fn load(path: &Path) -> Result<Self, LogError> {
        Self::load_with_debug_value(path, debug_env().as_deref())
    }

    fn from_debug_value(debug: Option<&str>) -> Result<Self, LogError> {
        let mut config = Self::default();
        config.apply_debug_env(debug)?;
        Ok(config)
    }

    fn load_with_debug_value(path: &Path, debug: Option<&str>) -> Result<Self, LogError> {
        let mut config = Self::default();
        config.apply_file_config(FileConfig::load(path)?);
        config.apply_debug_env(debug)?;
        Ok(config)
    }

    /// Build a [`LoggerConfig`] from CLI arguments, loading the config file if present.
    ///
    /// An explicit `--config` path must be readable; the default path is
    /// skipped when it does not exist.
    pub fn from_cli(cli: &Cli) -> Result<Self, LogError> {
        let mut config = Self::default();

        match cli.config {
            Some(ref path) => config.apply_file_config(FileConfig::load(path)?),
            None => {
                let path = Self::default_config_path();
                if path.exists() {
                    config.apply_file_config(FileConfig::load(&path)?);
                }
            }
        }

        config.apply_debug_env(debug_env().as_deref())?;
        config.apply_cli(cli);
        Ok(config)
    }

    /// Default config file path: `$XDG_CONFIG_HOME/fieldlog/config.toml` or `~/.config/fieldlog/config.toml`.
    fn default_config_path() -> PathBuf {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(xdg).join("fieldlog").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("fieldlog")
                .join("config.toml")
        } else {
            PathBuf::from(".config/fieldlog/config.toml")
        }
    }

    /// Apply a raw `DEBUG` value. Unset or empty leaves the setting alone.
    fn apply_debug_env(&mut self, value: Option<&str>) -> Result<(), LogError> {
        match value {
            None | Some("") => Ok(()),
            Some(raw) => {
                self.debug = parse_bool(raw).ok_or_else(|| {
                    LogError::Config(format!("invalid {DEBUG_ENV} value {raw:?}: expected a boolean"))
                })?;
                Ok(())
            }
        }
    }

    /// Apply settings from a parsed config file.
    fn apply_file_config(&mut self, file: FileConfig) {
        if let Some(version) = file.version {
            self.version = version;
        }
        if let Some(disable) = file.disable_stack_trace {
            self.disable_stack_trace = disable;
        }
        if let Some(debug) = file.debug {
            self.debug = debug;
        }
        if let Some(color) = file.color {
            self.color = color;
        }
        if file.time_format.is_some() {
            self.time_format = file.time_format;
        }
    }

    /// CLI overrides. Boolean flags can only switch a setting on.
    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(color) = cli.color {
            self.color = color;
        }
        if cli.debug {
            self.debug = true;
        }
        if cli.no_stack_trace {
            self.disable_stack_trace = true;
        }
        if let Some(ref version) = cli.version_tag {
            self.version.clone_from(version);
        }
        if cli.time_format.is_some() {
            self.time_format.clone_from(&cli.time_format);
        }
    }
}

/// Raw value of the `DEBUG` environment variable, if set.
fn debug_env() -> Option<String> {
    std::env::var(DEBUG_ENV).ok()
}

/// Parse a boolean the way environment flags are usually written.
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Config file structure (TOML deserialization).
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    version: Option<String>,
    disable_stack_trace: Option<bool>,
    debug: Option<bool>,
    color: Option<ColorMode>,
    time_format: Option<String>,
}

impl FileConfig {
    fn load(path: &Path) -> Result<Self, LogError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LogError::Config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
