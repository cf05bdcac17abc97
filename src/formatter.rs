//! Colorized console encoder for log records.
//!
//! [`ConsoleFormat`] plugs into `tracing_subscriber::fmt` as the event
//! formatter. It collects an event's fields with [`EventVisitor`] and hands a
//! [`Record`] to [`format_record`], which produces one line:
//!
//! ```text
//! 2026-01-15T10:30:00.123456789+02:00  INFO: message text  version=1.2.3 key=value
//! ```
//!
//! Error-and-above records may carry a stack trace, written on the following
//! lines under a `stacktrace:` header.

use std::fmt::{self, Write};

use owo_colors::OwoColorize;
use tracing::field::{Field as TracingField, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::registry::LookupSpan;

use crate::fields::{self, Field};
use crate::level::Level;
use crate::timestamp::Timestamp;

/// Event field carrying the message text.
pub const MESSAGE_KEY: &str = "message";
/// Event field carrying the severity name, for levels `tracing` cannot express.
pub const SEVERITY_KEY: &str = "severity";
/// Event field carrying the pre-rendered caller fields.
pub const FIELDS_KEY: &str = "fields";
/// Event field carrying a captured stack trace.
pub const STACKTRACE_KEY: &str = "stacktrace";

/// A record ready to be rendered.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub timestamp: &'a str,
    pub level: Level,
    pub message: &'a str,
    /// Space-separated `key=value` pairs, already rendered.
    pub fields: &'a str,
    pub stacktrace: Option<&'a str>,
}

/// Format a [`Record`] into `out` (without the trailing newline).
pub fn format_record(record: &Record<'_>, use_color: bool, out: &mut String) {
    // Timestamp (bold when colored)
    if use_color {
        let _ = write!(out, "{}  ", record.timestamp.bold());
    } else {
        out.push_str(record.timestamp);
        out.push_str("  ");
    }

    // Level badge + colon
    let badge = record.level.badge();
    if use_color {
        let _ = write!(out, "{}:", badge.style(record.level.style()));
    } else {
        out.push_str(badge);
        out.push(':');
    }

    if !record.message.is_empty() {
        out.push(' ');
        out.push_str(record.message);
    }

    if !record.fields.is_empty() {
        out.push_str("  ");
        out.push_str(record.fields);
    }

    if let Some(stack) = record.stacktrace {
        if use_color {
            let _ = write!(out, "\n{}", "stacktrace:".dimmed());
        } else {
            out.push_str("\nstacktrace:");
        }
        for line in stack.lines() {
            out.push_str("\n  ");
            out.push_str(line);
        }
    }
}

/// Console event formatter for `tracing_subscriber::fmt`.
///
/// Holds the fields attached to every record (rendered once at build time),
/// the timestamp format, and whether to emit ANSI colors.
#[derive(Debug, Clone)]
pub struct ConsoleFormat {
    use_color: bool,
    time_format: Option<String>,
    static_fields: String,
    clock: fn() -> Timestamp,
}

impl ConsoleFormat {
    pub fn new(use_color: bool) -> Self {
        Self {
            use_color,
            time_format: None,
            static_fields: String::new(),
            clock: Timestamp::now,
        }
    }

    /// Attach `fields` to every record, ahead of per-call fields.
    #[must_use]
    pub fn with_static_fields(mut self, fields: &[Field]) -> Self {
        self.static_fields.clear();
        fields::write_fields(&mut self.static_fields, fields, self.use_color);
        self
    }

    /// Use a strftime format instead of RFC 3339 nanoseconds.
    #[must_use]
    pub fn with_time_format(mut self, format: Option<String>) -> Self {
        self.time_format = format;
        self
    }

    /// Replace the time source.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> Timestamp) -> Self {
        self.clock = clock;
        self
    }

    /// Render one event into `out`.
    pub fn render_event(&self, event: &Event<'_>, out: &mut String) {
        let mut visitor = EventVisitor::new(self.use_color, self.static_fields.clone());
        event.record(&mut visitor);

        let level = visitor
            .severity
            .unwrap_or_else(|| Level::from_tracing(*event.metadata().level()));
        let timestamp = (self.clock)().render(self.time_format.as_deref());

        format_record(
            &Record {
                timestamp: &timestamp,
                level,
                message: &visitor.message,
                fields: &visitor.fields,
                stacktrace: visitor.stacktrace.as_deref(),
            },
            self.use_color,
            out,
        );
    }
}

impl<S, N> FormatEvent<S, N> for ConsoleFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut line = String::with_capacity(256);
        self.render_event(event, &mut line);
        writeln!(writer, "{line}")
    }
}

/// Collects the fields of one `tracing` event.
///
/// The adapter's own fields (`message`, `severity`, `fields`, `stacktrace`)
/// are picked out by name; any other field is rendered as `name=value` after
/// the caller's fields.
#[derive(Debug, Default)]
pub struct EventVisitor {
    use_color: bool,
    pub message: String,
    pub severity: Option<Level>,
    pub fields: String,
    pub stacktrace: Option<String>,
}

impl EventVisitor {
    pub fn new(use_color: bool, fields: String) -> Self {
        Self {
            use_color,
            fields,
            ..Self::default()
        }
    }

    fn record_text(&mut self, field: &TracingField, text: String, native: impl FnOnce() -> String) {
        match field.name() {
            MESSAGE_KEY => self.message = text,
            SEVERITY_KEY => self.severity = Level::from_str_loose(&text),
            FIELDS_KEY if !text.is_empty() => {
                if !self.fields.is_empty() {
                    self.fields.push(' ');
                }
                self.fields.push_str(&text);
            }
            FIELDS_KEY => {}
            STACKTRACE_KEY => self.stacktrace = Some(text),
            name => fields::write_pair(&mut self.fields, name, &native(), self.use_color),
        }
    }
}

impl Visit for EventVisitor {
    fn record_str(&mut self, field: &TracingField, value: &str) {
        self.record_text(field, value.to_string(), || {
            fields::format_value(&serde_json::Value::String(value.to_string())).into_owned()
        });
    }

    fn record_debug(&mut self, field: &TracingField, value: &dyn fmt::Debug) {
        let text = format!("{value:?}");
        let native = text.clone();
        self.record_text(field, text, move || native);
    }
}
