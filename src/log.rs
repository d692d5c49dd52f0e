// src/log.rs
//
// Thin logging layer. The GUI writes to a debug log file next to the working
// directory, the CLI writes to stderr. Call sites use the short level macros
// below; they forward to `tracing` so filtering follows RUST_LOG.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt::time::Uptime};

use crate::config::consts::{CLI_LOG_FILTER, DEFAULT_LOG_FILTER, LOG_FILE};

pub use tracing;

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::log::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::tracing::error!($($arg)*)
    };
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to a file (GUI). Falls back to stderr if it can't be opened.
    File(PathBuf),
    Stderr,
}

impl Default for LogTarget {
    fn default() -> Self {
        LogTarget::File(PathBuf::from(LOG_FILE))
    }
}

fn filter(target: &LogTarget) -> EnvFilter {
    let fallback = match target {
        LogTarget::File(_) => DEFAULT_LOG_FILTER,
        // stderr is shared with the CLI's own output
        LogTarget::Stderr => CLI_LOG_FILTER,
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

fn open_log_file(path: &Path) -> std::io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init(target: LogTarget) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter(&target))
        .with_timer(Uptime::default())
        .with_target(false);

    let installed = match &target {
        LogTarget::File(path) => match open_log_file(path) {
            Ok(file) => builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init(),
            Err(e) => {
                eprintln!("Log file {} unavailable ({e}); logging to stderr", path.display());
                builder.with_writer(std::io::stderr).try_init()
            }
        },
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
    };

    if installed.is_ok() {
        logd!("Log: initialized ({:?})", target);
    }
}
