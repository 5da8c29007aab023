//! `instfetch fetch-installers` – locate and download the MSI/DMG packages.

use anyhow::{Context, Result};
use instfetch_core::downloader::DownloadOutcome;
use instfetch_core::fetch::{fetch_installers, FetchRequest, FetchSettings};

pub fn run_fetch_installers(request: &FetchRequest, settings: &FetchSettings) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    let report = fetch_installers(request, settings, &mut stdout).context("fetch-installers")?;

    if report.artifacts.is_empty() {
        tracing::info!(
            destination = %report.destination.display(),
            "no package URL given, destination prepared only"
        );
    }
    for artifact in &report.artifacts {
        match artifact.outcome {
            DownloadOutcome::Downloaded(bytes) => tracing::info!(
                kind = %artifact.kind,
                path = %artifact.path.display(),
                bytes,
                "package stored"
            ),
            DownloadOutcome::AlreadyPresent => tracing::info!(
                kind = %artifact.kind,
                path = %artifact.path.display(),
                "package already present"
            ),
        }
    }
    Ok(())
}
