//! Diagnostic logging
//!
//! The TUI owns the terminal, so logs go to a file in the cache directory.
//! The filter comes from `XOTERM_LOG` (e.g. `XOTERM_LOG=debug`) and
//! defaults to `warn`.

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "XOTERM_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Path of the log file.
pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("xoterm").join("xoterm.log"))
}

/// Install the global subscriber writing to [`log_path`].
///
/// Returns the log file path on success. Safe to call once per process.
pub fn init() -> Result<PathBuf> {
    let path = log_path().context("no cache directory for the log file")?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = File::options()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))?;

    Ok(path)
}
