//! Tracing subscriber setup.
//!
//! Verbosity follows `RUST_LOG` (default `info`). The TUI owns stdout, so in
//! TUI mode logs go to a file; one-shot mode logs to stderr.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Installs a global subscriber appending plain-text logs to `path`.
///
/// # Errors
///
/// Returns [`OrderViewError::Io`](crate::OrderViewError::Io) if the file
/// cannot be opened or a global subscriber is already installed.
pub fn init_file_logging(path: &Path) -> crate::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            crate::OrderViewError::Io(format!("failed to open log file {}: {e}", path.display()))
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| crate::OrderViewError::Io(format!("failed to install logger: {e}")))
}

/// Installs a global subscriber writing to stderr.
///
/// # Errors
///
/// Returns [`OrderViewError::Io`](crate::OrderViewError::Io) if a global
/// subscriber is already installed.
pub fn init_stderr_logging() -> crate::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| crate::OrderViewError::Io(format!("failed to install logger: {e}")))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
