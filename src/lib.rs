//! `fieldlog`: structured key/value logging over `tracing`.
//!
//! This library exposes a small [`Logger`] interface (debug, info, warn,
//! error, fatal, panic, each taking a [`Context`], a message and an ordered
//! list of [`Field`]s) and implements it with [`LoggerAdapter`], which
//! forwards every call to a `tracing_subscriber` backend rendering
//! colorized, human-readable console lines.
//!
//! # Example
//!
//! ```
//! use fieldlog::{Context, Field, Logger, LoggerAdapter, LoggerConfig};
//!
//! let config = LoggerConfig {
//!     version: "1.2.3".to_string(),
//!     ..LoggerConfig::default()
//! };
//! let logger = LoggerAdapter::new(config).expect("valid config");
//!
//! logger.info(&Context::background(), "listening", &[Field::new("port", 8080)]);
//! ```

pub mod adapter;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod fields;
pub mod formatter;
pub mod level;
pub mod logger;
pub mod timestamp;


// Re-export primary API types for convenience.
pub use adapter::{Builder, LoggerAdapter};
pub use cli::ColorMode;
pub use config::LoggerConfig;
pub use context::{Context, ContextExtractor, NoContext, RequestIdExtractor};
pub use error::LogError;
pub use fields::Field;
pub use level::Level;
pub use logger::{Logger, NoopLogger};
pub use timestamp::Timestamp;
