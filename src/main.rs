use std::process::ExitCode;

use clap::Parser;

use fieldlog::cli::Cli;
use fieldlog::{Context, Level, Logger, LoggerAdapter, LoggerConfig};

fn main() -> ExitCode {
    // Reset SIGPIPE to default behavior so `fieldlog ... | head` ends quietly
    // instead of reporting a broken pipe.
    reset_sigpipe();

    let cli = Cli::parse();

    let logger = match LoggerConfig::from_cli(&cli).and_then(LoggerAdapter::new) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("fieldlog: {e}");
            return ExitCode::from(2);
        }
    };

    let mut ctx = Context::background();
    if let Some(ref id) = cli.request_id {
        ctx = ctx.with_request_id(id.clone());
    }

    match cli.level {
        Level::Fatal => logger.fatal(&ctx, &cli.message, &cli.fields),
        Level::Panic => logger.panic(&ctx, &cli.message, &cli.fields),
        level => logger.log(&ctx, level, &cli.message, &cli.fields),
    }

    logger.sync();
    ExitCode::SUCCESS
}

/// Reset SIGPIPE to the default (terminate) behavior.
///
/// By default, Rust ignores SIGPIPE to surface `BrokenPipe` I/O errors.
/// Restoring `SIG_DFL` lets the OS handle the signal normally.
#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}
