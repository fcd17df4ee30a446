//! Logger port
//!
//! The registry hands this logger to every service through its context.
//! Implementations live in the infrastructure layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a log record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Diagnostic detail
    Debug,
    /// Normal operation
    Info,
    /// Something unexpected but recoverable
    Warn,
    /// Operation failed
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        };
        f.write_str(label)
    }
}

/// Minimal structured logger
///
/// # Example
///
/// ```
/// use svcreg_domain::ports::{LogLevel, Logger};
///
/// struct StdoutLogger;
///
/// impl Logger for StdoutLogger {
///     fn log(&self, level: LogLevel, message: &str, data: Option<&serde_json::Value>) {
///         println!("{level}: {message} {data:?}");
///     }
/// }
///
/// StdoutLogger.info("ready", None);
/// ```
pub trait Logger: Send + Sync {
    /// Emit a record
    fn log(&self, level: LogLevel, message: &str, data: Option<&serde_json::Value>);

    /// Emit a debug record
    fn debug(&self, message: &str, data: Option<&serde_json::Value>) {
        self.log(LogLevel::Debug, message, data);
    }

    /// Emit an info record
    fn info(&self, message: &str, data: Option<&serde_json::Value>) {
        self.log(LogLevel::Info, message, data);
    }

    /// Emit a warning record
    fn warn(&self, message: &str, data: Option<&serde_json::Value>) {
        self.log(LogLevel::Warn, message, data);
    }

    /// Emit an error record
    fn error(&self, message: &str, data: Option<&serde_json::Value>) {
        self.log(LogLevel::Error, message, data);
    }
}
