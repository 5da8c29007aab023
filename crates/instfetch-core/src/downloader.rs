//! Single-stream artifact downloader.
//!
//! Writes the response body sequentially through a fixed-size buffer. A destination
//! that already exists is left untouched, so reruns into the same directory skip
//! the network entirely.
//!
//! A transfer that fails midway leaves the partially written file in place. Callers
//! that reuse a directory across runs must clear it first (the orchestrator does).

use crate::error::{FetchError, Result};
use crate::http::{self, HttpOptions};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// Body was fetched and written; carries the byte count.
    Downloaded(u64),
    /// Destination existed before the call; nothing was fetched.
    AlreadyPresent,
}

/// Downloads `url` to `destination` unless a file is already there.
///
/// Before fetching, a `Downloading <url> to <path>` line is written and flushed to `progress`.
pub fn download<W: Write>(
    url: &str,
    destination: &Path,
    opts: &HttpOptions,
    progress: &mut W,
) -> Result<DownloadOutcome> {
    if destination.exists() {
        tracing::debug!(path = %destination.display(), "destination exists, skipping download");
        return Ok(DownloadOutcome::AlreadyPresent);
    }

    writeln!(progress, "Downloading {} to {}", url, destination.display())
        .and_then(|()| progress.flush())
        .map_err(FetchError::Progress)?;

    let fs_err = |e: std::io::Error| FetchError::filesystem(destination, e);

    // Opened on the first chunk so a refused request leaves no empty file behind.
    let mut out: Option<BufWriter<File>> = None;
    let bytes = http::stream(url, opts, |chunk| {
        let writer = match out {
            Some(ref mut w) => w,
            None => {
                let file = File::create(destination).map_err(fs_err)?;
                out.insert(BufWriter::with_capacity(opts.chunk_size, file))
            }
        };
        writer.write_all(chunk).map_err(fs_err)
    })?;

    let mut writer = match out {
        Some(w) => w,
        None => BufWriter::new(File::create(destination).map_err(fs_err)?),
    };
    writer.flush().map_err(fs_err)?;

    tracing::info!(url, path = %destination.display(), bytes, "download complete");
    Ok(DownloadOutcome::Downloaded(bytes))
}
