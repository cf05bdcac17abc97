//! The generic logging interface.
//!
//! Application code depends on [`Logger`] and receives a concrete
//! implementation ([`LoggerAdapter`](crate::LoggerAdapter) in production,
//! [`NoopLogger`] in tests) through an `Arc<dyn Logger>` or a generic bound.

use std::io::Write;

use crate::context::Context;
use crate::fields::Field;
use crate::level::Level;

/// Exit status used by [`Logger::fatal`].
pub const FATAL_EXIT_CODE: i32 = 1;

/// Structured logging capability set.
///
/// Implementors provide [`log`](Self::log); the per-severity methods delegate
/// to it. [`fatal`](Self::fatal) and [`panic`](Self::panic) additionally
/// terminate the process or unwind after the record has been emitted, and
/// are the only methods with control-flow effects. Calling `log` with
/// [`Level::Fatal`] or [`Level::Panic`] only emits.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across threads.
pub trait Logger: Send + Sync {
    /// Emit one record at `level`.
    fn log(&self, ctx: &Context, level: Level, msg: &str, fields: &[Field]);

    /// Flush buffered output before the process goes away.
    fn sync(&self) {}

    fn debug(&self, ctx: &Context, msg: &str, fields: &[Field]) {
        self.log(ctx, Level::Debug, msg, fields);
    }

    fn info(&self, ctx: &Context, msg: &str, fields: &[Field]) {
        self.log(ctx, Level::Info, msg, fields);
    }

    fn warn(&self, ctx: &Context, msg: &str, fields: &[Field]) {
        self.log(ctx, Level::Warn, msg, fields);
    }

    fn error(&self, ctx: &Context, msg: &str, fields: &[Field]) {
        self.log(ctx, Level::Error, msg, fields);
    }

    /// Emit at fatal severity, then exit the process with [`FATAL_EXIT_CODE`].
    fn fatal(&self, ctx: &Context, msg: &str, fields: &[Field]) -> ! {
        self.log(ctx, Level::Fatal, msg, fields);
        self.sync();
        std::process::exit(FATAL_EXIT_CODE)
    }

    /// Emit at panic severity, then panic with `msg` as the payload.
    fn panic(&self, ctx: &Context, msg: &str, fields: &[Field]) -> ! {
        self.log(ctx, Level::Panic, msg, fields);
        self.sync();
        panic!("{msg}")
    }
}

/// A logger that discards all records.
///
/// `fatal` still exits and `panic` still panics.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    #[inline]
    fn log(&self, _ctx: &Context, _level: Level, _msg: &str, _fields: &[Field]) {}
}

/// Flush standard output, ignoring errors.
pub(crate) fn flush_stdout() {
    let _ = std::io::stdout().flush();
}
