//! Severity levels with parsing, display, and colorization.
//!
//! The six levels map onto the `tracing` backend as follows: `Debug`, `Info`,
//! `Warn` and `Error` map one to one, while `Fatal` and `Panic` are emitted as
//! `tracing::Level::ERROR` events carrying a `severity` field so the console
//! encoder can still print the right badge.

use std::fmt;

use owo_colors::Style;

/// Canonical severity enumeration.
///
/// Ordered by importance (ascending) so threshold checks can use [`Ord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Panic,
}

impl Level {
    /// All levels in ascending order.
    pub const ALL: [Self; 6] = [
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Fatal,
        Self::Panic,
    ];

    /// Badge printed after the timestamp, padded on the left to five columns.
    pub const fn badge(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => " INFO",
            Self::Warn => " WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
            Self::Panic => "PANIC",
        }
    }

    /// Lowercase name, as accepted by [`from_str_loose`](Self::from_str_loose).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
            Self::Panic => "panic",
        }
    }

    /// Badge style when colors are enabled. Panic is reversed bright red.
    #[allow(clippy::trivially_copy_pass_by_ref)] // by-value self clashes with OwoColorize::style
    pub const fn style(&self) -> Style {
        match self {
            Self::Debug => Style::new().blue().bold(),
            Self::Info => Style::new().green().bold(),
            Self::Warn => Style::new().yellow().bold(),
            Self::Error => Style::new().red().bold(),
            Self::Fatal => Style::new().magenta().bold(),
            Self::Panic => Style::new().bright_red().bold().reversed(),
        }
    }

    /// Whether records at this level get a stack trace attached (unless disabled).
    pub const fn captures_stack(self) -> bool {
        matches!(self, Self::Error | Self::Fatal | Self::Panic)
    }

    /// The `tracing` level an event of this severity is emitted at.
    pub const fn as_tracing(self) -> tracing::Level {
        match self {
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error | Self::Fatal | Self::Panic => tracing::Level::ERROR,
        }
    }

    /// Map a `tracing` level back to a severity.
    ///
    /// `TRACE` has no counterpart and folds into [`Debug`](Self::Debug).
    pub fn from_tracing(level: tracing::Level) -> Self {
        match level {
            tracing::Level::TRACE | tracing::Level::DEBUG => Self::Debug,
            tracing::Level::INFO => Self::Info,
            tracing::Level::WARN => Self::Warn,
            tracing::Level::ERROR => Self::Error,
        }
    }

    /// Case-insensitive parse accepting the usual short aliases.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "debug" | "dbg" => Some(Self::Debug),
            "info" | "inf" | "information" => Some(Self::Info),
            "warn" | "warning" | "wrn" => Some(Self::Warn),
            "error" | "err" => Some(Self::Error),
            "fatal" | "critical" | "crit" => Some(Self::Fatal),
            "panic" => Some(Self::Panic),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.badge())
    }
}
