//! Logging init: append to a file under the XDG state dir, or fall back to stderr.
//!
//! Stdout carries only the progress lines, so tracing output never goes there.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,instfetch_core=debug";

/// Where tracing events are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `~/.local/state/instfetch/instfetch.log` (or `$XDG_STATE_HOME/instfetch/instfetch.log`).
pub fn default_log_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("instfetch")?;
    Ok(xdg_dirs.get_state_home().join("instfetch.log"))
}

/// Opens `path` for appending, creating missing parent directories.
fn open_append(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create log dir {}", parent.display()))?;
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))
}

/// Installs the global subscriber for `target`. Fails if one is already installed.
pub fn init(target: &LogTarget) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false);
    let installed = match target {
        LogTarget::File(path) => builder
            .with_writer(Mutex::new(open_append(path)?))
            .try_init(),
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
    };
    installed.map_err(|e| anyhow::anyhow!("tracing subscriber: {}", e))
}

/// Logs to the default file. Returns Err so the caller can fall back to stderr.
pub fn init_logging() -> Result<PathBuf> {
    let path = default_log_path()?;
    init(&LogTarget::File(path.clone()))?;
    tracing::info!("instfetch logging initialized at {}", path.display());
    Ok(path)
}

/// Stderr-only logging for when [`init_logging`] fails. Never panics.
pub fn init_logging_stderr() {
    let _ = init(&LogTarget::Stderr);
}
