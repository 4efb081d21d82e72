//! Logging init: append to a run log under the XDG state dir, or stderr.
//!
//! Stdout belongs to the run report, so nothing here writes there. The log
//! file keeps the per-URL detail (argv, exit status, full stderr) that the
//! console only shows truncated.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,reelgrab_core=debug,reelgrab_cli=debug";
const LOG_FILE_NAME: &str = "reelgrab.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `~/.local/state/reelgrab/reelgrab.log`. Does not create anything.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("reelgrab")?;
    Ok(xdg_dirs.get_state_home().join("reelgrab").join(LOG_FILE_NAME))
}

/// Initialize logging to [`log_file_path`] and return that path so the run
/// summary can point at it.
///
/// Returns Err when the state dir is not writable; the caller then falls
/// back to [`init_logging_stderr`].
pub fn init_logging() -> Result<PathBuf> {
    let log_file_path = log_file_path()?;
    if let Some(dir) = log_file_path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create log dir {}", dir.display()))?;
    }

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)
        .with_context(|| format!("open log file {}", log_file_path.display()))?;

    // One sequential run: a single locked handle is enough.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::info!("reelgrab logging initialized at {}", log_file_path.display());

    Ok(log_file_path)
}

/// Initialize logging to stderr only. Used when `init_logging()` fails so the CLI still runs.
pub fn init_logging_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
