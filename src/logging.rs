//! File logging through tracing.
//!
//! stdout carries command output, so nothing is logged to the terminal.

use std::fmt;
use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt as tracing_fmt};

const DEFAULT_LOG_NAME: &str = "serptune.log";

/// Why file logging could not be started.
#[derive(Debug)]
pub enum LoggingError {
    /// The log directory could not be created.
    Directory(io::Error),
    /// The log file could not be opened.
    Appender(InitError),
    /// A global subscriber is already installed.
    Subscriber(TryInitError),
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggingError::Directory(e) => write!(f, "Cannot create log directory: {}", e),
            LoggingError::Appender(e) => write!(f, "Cannot open log file: {}", e),
            LoggingError::Subscriber(e) => write!(f, "Cannot install log subscriber: {}", e),
        }
    }
}

impl std::error::Error for LoggingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggingError::Directory(e) => Some(e),
            LoggingError::Appender(e) => Some(e),
            LoggingError::Subscriber(e) => Some(e),
        }
    }
}

/// Start logging to `log_path` at `level` for the `serptune` target.
///
/// The returned guard flushes buffered lines when dropped, so hold it until
/// the program exits. Unknown levels fall back to `info`.
pub fn init_logging(log_path: &Path, level: &str) -> Result<WorkerGuard, LoggingError> {
    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let filename = log_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_LOG_NAME.to_string());

    std::fs::create_dir_all(directory).map_err(LoggingError::Directory)?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(filename)
        .build(directory)
        .map_err(LoggingError::Appender)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_new(format!("serptune={level}"))
        .unwrap_or_else(|_| EnvFilter::new("serptune=info"));

    let file_layer = tracing_fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    #[cfg(debug_assertions)]
    let file_layer = {
        use tracing_subscriber::fmt::format::FmtSpan;
        file_layer.with_span_events(FmtSpan::ENTER | FmtSpan::CLOSE)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .map_err(LoggingError::Subscriber)?;

    Ok(guard)
}
