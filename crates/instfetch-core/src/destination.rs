//! Destination directory preparation.

use crate::error::{FetchError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Template location consumed by the marketplace packaging step, relative to the base folder.
pub const TEMPLATE_SUBDIR: [&str; 6] = [
    "target",
    "marketplace",
    "install",
    "templates",
    "drive",
    "client",
];

/// Joins `subdir` components onto `base`.
pub fn template_dir(base: &Path, subdir: &[String]) -> PathBuf {
    subdir.iter().fold(base.to_path_buf(), |p, part| p.join(part))
}

/// Removes `dir` recursively if present, then recreates it with missing parents.
///
/// Afterwards the directory exists and is empty regardless of earlier runs.
pub fn recreate_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        tracing::debug!(path = %dir.display(), "removing previous destination");
        fs::remove_dir_all(dir).map_err(|e| FetchError::filesystem(dir, e))?;
    }
    fs::create_dir_all(dir).map_err(|e| FetchError::filesystem(dir, e))?;
    tracing::info!(path = %dir.display(), "destination ready");
    Ok(())
}
