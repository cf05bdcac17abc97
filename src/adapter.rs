//! [`LoggerAdapter`]: the [`Logger`] implementation backed by `tracing`.
//!
//! Construction builds one `tracing_subscriber::fmt` subscriber with the
//! [`ConsoleFormat`] encoder and wraps it in its own [`Dispatch`]. The
//! adapter never installs a global default; each call is forwarded through
//! its own dispatch, so several adapters with different settings can live in
//! one process.

use std::backtrace::Backtrace;
use std::fmt;
use std::sync::Arc;

use tracing::Dispatch;
use tracing::field::display;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::config::LoggerConfig;
use crate::context::{Context, ContextExtractor, RequestIdExtractor};
use crate::error::LogError;
use crate::fields::{self, Field};
use crate::formatter::ConsoleFormat;
use crate::level::Level;
use crate::logger::{self, Logger};
use crate::timestamp;

/// Target of every event the adapter emits.
pub const TARGET: &str = "fieldlog";

/// Key of the constant field carrying [`LoggerConfig::version`].
pub const VERSION_KEY: &str = "version";

/// Structured logger forwarding to a configured `tracing` subscriber.
///
/// Immutable after construction. Clones share the same backend handle.
#[derive(Clone)]
pub struct LoggerAdapter {
    dispatch: Dispatch,
    extractor: Arc<dyn ContextExtractor>,
    use_color: bool,
    capture_stack: bool,
    min_level: Level,
}

impl LoggerAdapter {
    /// Build an adapter writing to standard output.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Build`] when the encoder configuration is rejected.
    pub fn new(config: LoggerConfig) -> Result<Self, LogError> {
        Self::builder(config).build()
    }

    /// Start building an adapter with a custom sink or context extractor.
    pub fn builder(config: LoggerConfig) -> Builder {
        Builder {
            config,
            writer: BoxMakeWriter::new(std::io::stdout),
            extractor: Arc::new(RequestIdExtractor),
        }
    }

    /// Lowest severity that is emitted.
    pub fn min_level(&self) -> Level {
        self.min_level
    }

    /// Convert caller fields into the sequence forwarded to the backend.
    ///
    /// Caller fields come first, unchanged and in order; the context
    /// extractor may append correlation fields after them.
    pub fn convert(&self, ctx: &Context, fields: &[Field]) -> Vec<Field> {
        let mut out = Vec::with_capacity(fields.len() + 1);
        out.extend_from_slice(fields);
        self.extractor.extract(ctx, &mut out);
        out
    }
}

impl fmt::Debug for LoggerAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerAdapter")
            .field("use_color", &self.use_color)
            .field("capture_stack", &self.capture_stack)
            .field("min_level", &self.min_level)
            .finish_non_exhaustive()
    }
}

macro_rules! emit_at {
    ($lvl:expr, $severity:expr, $fields:expr, $stack:expr, $msg:expr) => {
        tracing::event!(
            target: TARGET,
            $lvl,
            severity = $severity,
            fields = $fields,
            stacktrace = $stack,
            "{}",
            $msg
        )
    };
}

impl Logger for LoggerAdapter {
    fn log(&self, ctx: &Context, level: Level, msg: &str, fields: &[Field]) {
        if level < self.min_level {
            return;
        }

        let converted = self.convert(ctx, fields);
        let mut rendered = String::with_capacity(converted.len() * 16);
        fields::write_fields(&mut rendered, &converted, self.use_color);

        let stack = (self.capture_stack && level.captures_stack())
            .then(|| Backtrace::force_capture().to_string());

        let severity = level.as_str();
        let rendered = display(rendered.as_str());
        let stack = stack.as_deref().map(display);

        tracing::dispatcher::with_default(&self.dispatch, || match level {
            Level::Debug => emit_at!(tracing::Level::DEBUG, severity, rendered, stack, msg),
            Level::Info => emit_at!(tracing::Level::INFO, severity, rendered, stack, msg),
            Level::Warn => emit_at!(tracing::Level::WARN, severity, rendered, stack, msg),
            Level::Error | Level::Fatal | Level::Panic => {
                emit_at!(tracing::Level::ERROR, severity, rendered, stack, msg)
            }
        });
    }

    fn sync(&self) {
        logger::flush_stdout();
    }
}

/// Builder returned by [`LoggerAdapter::builder`].
pub struct Builder {
    config: LoggerConfig,
    writer: BoxMakeWriter,
    extractor: Arc<dyn ContextExtractor>,
}

impl Builder {
    /// Write records to `writer` instead of standard output.
    #[must_use]
    pub fn writer<W>(mut self, writer: W) -> Self
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        self.writer = BoxMakeWriter::new(writer);
        self
    }

    /// Derive correlation fields from the call context with `extractor`.
    #[must_use]
    pub fn extractor(mut self, extractor: impl ContextExtractor + 'static) -> Self {
        self.extractor = Arc::new(extractor);
        self
    }

    /// Build the live backend handle.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Build`] when the timestamp format is rejected.
    pub fn build(self) -> Result<LoggerAdapter, LogError> {
        let config = self.config;
        if let Some(format) = config.time_format.as_deref() {
            timestamp::validate_format(format).map_err(LogError::Build)?;
        }

        let use_color = config.color.resolve();
        let min_level = if config.debug {
            Level::Debug
        } else {
            Level::Info
        };

        let format = ConsoleFormat::new(use_color)
            .with_time_format(config.time_format)
            .with_static_fields(&[Field::new(VERSION_KEY, config.version)]);

        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.writer)
            .with_max_level(min_level.as_tracing())
            .event_format(format)
            .finish();

        Ok(LoggerAdapter {
            dispatch: Dispatch::new(subscriber),
            extractor: self.extractor,
            use_color,
            capture_stack: !config.disable_stack_trace,
            min_level,
        })
    }
}
