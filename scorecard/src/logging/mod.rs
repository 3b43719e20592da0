//! Structured logging infrastructure for Scorecard.
//!
//! This module provides a configurable logging system based on the tracing crate,
//! supporting different output formats, log levels and an optional log file.

#[cfg(feature = "http")]
pub mod middleware;

use crate::config::{LogFormat, LogLevel, LoggingConfig};
use std::path::Path;
use std::sync::OnceLock;
use tracing::Level;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};

/// Keeps the background file writer alive for the lifetime of the process.
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Error type for logging operations
#[derive(Debug)]
pub enum LogError {
    /// IO error occurred
    IoError(std::io::Error),

    /// Error parsing log level
    InvalidLogLevel(String),

    /// Error in subscriber setup
    SubscriberError(Box<dyn std::error::Error + Send + Sync>),
}

impl From<std::io::Error> for LogError {
    fn from(err: std::io::Error) -> Self {
        LogError::IoError(err)
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for LogError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        LogError::SubscriberError(err)
    }
}

/// Result type for logging operations
pub type Result<T> = std::result::Result<T, LogError>;

/// Installs a subscriber built from `$builder`, writing to the configured file
/// or stdout.
macro_rules! install_subscriber {
    ($builder:expr, $level:expr, $config:expr) => {{
        let subscriber = $builder
            .with_max_level($level)
            .with_level(true)
            .with_target(true)
            .with_line_number(true)
            .with_thread_ids(true);

        match &$config.file {
            Some(file_path) if !$config.stdout => {
                let writer = create_non_blocking_file(file_path)?;
                subscriber.with_writer(writer).try_init().map_err(LogError::from)
            }
            Some(_) => {
                let installed = subscriber.try_init().map_err(LogError::from);
                if installed.is_ok() {
                    tracing::warn!("Configured for stdout only; file logging ignored");
                }
                installed
            }
            None if $config.stdout => subscriber.try_init().map_err(LogError::from),
            None => Ok(()),
        }
    }};
}

/// Initialize the logging system with the given configuration.
///
/// Returns `Ok` when a global subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let level = log_level_to_level(&config.level);

    let result: Result<()> = match config.format {
        LogFormat::Json => install_subscriber!(tracing_subscriber::fmt().json(), level, config),
        LogFormat::Compact => {
            install_subscriber!(tracing_subscriber::fmt().compact(), level, config)
        }
        LogFormat::Pretty => install_subscriber!(tracing_subscriber::fmt().pretty(), level, config),
        LogFormat::Default => install_subscriber!(tracing_subscriber::fmt(), level, config),
    };

    if let Err(LogError::SubscriberError(ref e)) = result
        && e.to_string().contains("already")
    {
        return Ok(());
    }

    result
}

/// Create a non-blocking file writer.
fn create_non_blocking_file(path: impl AsRef<Path>) -> Result<NonBlocking> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file_appender = tracing_appender::rolling::never(
        path.parent().unwrap_or_else(|| Path::new(".")),
        path.file_name().unwrap_or_default(),
    );

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let _ = FILE_GUARD.set(guard);

    Ok(non_blocking)
}

/// Parse a log level string into a LogLevel enum.
pub fn parse_log_level(level: &str) -> Result<LogLevel> {
    level.parse().map_err(LogError::InvalidLogLevel)
}

/// Convert a LogLevel into a tracing::Level.
pub fn log_level_to_level(level: &LogLevel) -> Level {
    match level {
        LogLevel::Trace => Level::TRACE,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error => Level::ERROR,
    }
}

/// Convert a tracing::Level to a LogLevel enum.
pub fn level_to_log_level(level: Level) -> LogLevel {
    match level {
        Level::TRACE => LogLevel::Trace,
        Level::DEBUG => LogLevel::Debug,
        Level::INFO => LogLevel::Info,
        Level::WARN => LogLevel::Warn,
        Level::ERROR => LogLevel::Error,
    }
}

impl std::fmt::Display for LogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogError::IoError(e) => write!(f, "IO error: {}", e),
            LogError::SubscriberError(e) => write!(f, "Subscriber error: {}", e),
            LogError::InvalidLogLevel(s) => write!(f, "Invalid log level: {}", s),
        }
    }
}

impl std::error::Error for LogError {}
