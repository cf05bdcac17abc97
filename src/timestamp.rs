//! Timestamp encoding for emitted records.
//!
//! The default encoding is RFC 3339 with nanosecond precision: trailing zero
//! fraction digits are trimmed, the fraction is omitted when zero, and a UTC
//! offset is written as `Z`. A strftime-compatible format may be configured
//! instead.

use std::fmt;

/// A point in time together with the timezone it is displayed in.
#[derive(Debug, Clone, PartialEq)]
pub struct Timestamp {
    pub value: jiff::Zoned,
}

impl Timestamp {
    /// Current time in the system timezone.
    pub fn now() -> Self {
        Self {
            value: jiff::Zoned::now(),
        }
    }

    pub fn from_zoned(value: jiff::Zoned) -> Self {
        Self { value }
    }

    /// RFC 3339 with up to nine fraction digits, e.g. `2026-01-15T10:30:00.123+02:00`.
    pub fn format_rfc3339_nano(&self) -> String {
        let ts = self.value.timestamp();
        let offset = self.value.offset();
        if offset.seconds() == 0 {
            ts.to_string()
        } else {
            ts.display_with_offset(offset).to_string()
        }
    }

    /// Format using a strftime-compatible format string.
    ///
    /// # Errors
    ///
    /// Returns the backend's error when the format contains an unsupported
    /// directive or cannot be rendered for this time.
    pub fn format_with(&self, format: &str) -> Result<String, jiff::Error> {
        jiff::fmt::strtime::format(format, &self.value)
    }

    /// Render with an optional strftime override, falling back to RFC 3339
    /// nanoseconds when the override is absent or fails.
    pub fn render(&self, format: Option<&str>) -> String {
        format
            .and_then(|f| self.format_with(f).ok())
            .unwrap_or_else(|| self.format_rfc3339_nano())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_rfc3339_nano())
    }
}

/// Check that `format` is usable as a timestamp format.
///
/// Rejects empty formats and formats containing control characters (they
/// would break the one-record-per-line layout), then renders a fixed instant
/// to surface unsupported directives.
pub fn validate_format(format: &str) -> Result<(), String> {
    if format.trim().is_empty() {
        return Err("time format is empty".to_string());
    }
    if format.chars().any(char::is_control) {
        return Err("time format contains control characters".to_string());
    }
    let probe = jiff::Timestamp::UNIX_EPOCH.to_zoned(jiff::tz::TimeZone::UTC);
    jiff::fmt::strtime::format(format, &probe)
        .map(|_| ())
        .map_err(|e| format!("invalid time format {format:?}: {e}"))
}
