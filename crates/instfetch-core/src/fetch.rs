//! `fetch-installers` orchestration: prepare the destination, then locate and
//! download each requested artifact kind in order (MSI first, then DMG).
//!
//! Any failure aborts the run; a failed MSI step means the DMG step never starts.

use crate::artifact::{ArtifactKind, ArtifactPatterns};
use crate::config::FetchConfig;
use crate::destination::{self, TEMPLATE_SUBDIR};
use crate::downloader::{self, DownloadOutcome};
use crate::error::{FetchError, Result};
use crate::http::HttpOptions;
use crate::listing::{self, ResolvedArtifact};
use crate::url_model::local_filename;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Parsed `fetch-installers` arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchRequest {
    pub base_folder: Option<PathBuf>,
    /// Listing page (or artifact URL in direct mode) for the Windows installer.
    pub msi_url: Option<String>,
    /// Listing page (or artifact URL in direct mode) for the macOS image.
    pub dmg_url: Option<String>,
    /// Treat the URLs as artifact locations and skip the listing scrape.
    pub direct: bool,
}

impl FetchRequest {
    pub fn url_for(&self, kind: ArtifactKind) -> Option<&str> {
        match kind {
            ArtifactKind::Msi => self.msi_url.as_deref(),
            ArtifactKind::Dmg => self.dmg_url.as_deref(),
        }
    }
}

/// Fixed inputs of a run: where the template lives, what to match, how to talk HTTP.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub template_subdir: Vec<String>,
    pub patterns: ArtifactPatterns,
    pub http: HttpOptions,
}

impl FetchSettings {
    pub fn from_config(cfg: &FetchConfig) -> Self {
        Self {
            http: cfg.http_options(),
            ..Self::default()
        }
    }
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            template_subdir: TEMPLATE_SUBDIR.iter().map(|s| s.to_string()).collect(),
            patterns: ArtifactPatterns::builtin(),
            http: HttpOptions::default(),
        }
    }
}

/// One artifact placed (or found already present) in the destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedArtifact {
    pub kind: ArtifactKind,
    pub url: String,
    pub path: PathBuf,
    pub outcome: DownloadOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchReport {
    pub destination: PathBuf,
    pub artifacts: Vec<FetchedArtifact>,
}

/// Computes the destination directory; requires `--base-folder`.
pub fn destination_dir(request: &FetchRequest, settings: &FetchSettings) -> Result<PathBuf> {
    let base = request
        .base_folder
        .as_deref()
        .ok_or_else(|| FetchError::argument("--base-folder is required"))?;
    Ok(destination::template_dir(base, &settings.template_subdir))
}

/// Resolves, names and downloads one artifact into `dest_dir`.
pub fn fetch_artifact<W: Write>(
    kind: ArtifactKind,
    url: &str,
    direct: bool,
    dest_dir: &Path,
    settings: &FetchSettings,
    progress: &mut W,
) -> Result<FetchedArtifact> {
    let resolved = if direct {
        ResolvedArtifact::direct(url)
    } else {
        let pattern = settings.patterns.for_kind(kind);
        listing::locate(url, pattern, &settings.http, progress)?
    };

    let path = dest_dir.join(local_filename(&resolved.filename)?);
    let outcome = downloader::download(&resolved.url, &path, &settings.http, progress)?;
    tracing::info!(%kind, url = %resolved.url, path = %path.display(), ?outcome, "artifact fetched");

    Ok(FetchedArtifact {
        kind,
        url: resolved.url,
        path,
        outcome,
    })
}

/// Runs the full pipeline for `request`, writing progress lines to `progress`.
pub fn fetch_installers<W: Write>(
    request: &FetchRequest,
    settings: &FetchSettings,
    progress: &mut W,
) -> Result<FetchReport> {
    let destination = destination_dir(request, settings)?;
    destination::recreate_dir(&destination)?;

    let mut artifacts = Vec::new();
    for kind in ArtifactKind::ALL {
        let Some(url) = request.url_for(kind) else {
            tracing::debug!(%kind, "no URL given, skipping");
            continue;
        };
        artifacts.push(fetch_artifact(
            kind,
            url,
            request.direct,
            &destination,
            settings,
            progress,
        )?);
    }

    Ok(FetchReport {
        destination,
        artifacts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_base_folder_is_argument_error() {
        let req = FetchRequest {
            dmg_url: Some("http://ci.example.com/dmg/".to_string()),
            ..FetchRequest::default()
        };
        assert!(matches!(
            fetch_installers(&req, &FetchSettings::default(), &mut std::io::sink()),
            Err(FetchError::Argument { .. })
        ));
    }

    #[test]
    fn no_urls_only_prepares_destination() {
        let base = tempfile::tempdir().unwrap();
        let req = FetchRequest {
            base_folder: Some(base.path().to_path_buf()),
            ..FetchRequest::default()
        };
        let report =
            fetch_installers(&req, &FetchSettings::default(), &mut std::io::sink()).unwrap();
        assert!(report.artifacts.is_empty());
        assert!(report.destination.is_dir());
        assert!(report
            .destination
            .ends_with("target/marketplace/install/templates/drive/client"));
    }

    #[test]
    fn url_for_maps_kinds() {
        let req = FetchRequest {
            msi_url: Some("m".to_string()),
            ..FetchRequest::default()
        };
        assert_eq!(req.url_for(ArtifactKind::Msi), Some("m"));
        assert_eq!(req.url_for(ArtifactKind::Dmg), None);
    }

    #[test]
    fn settings_take_http_options_from_config() {
        let cfg = FetchConfig {
            user_agent: "custom".to_string(),
            ..FetchConfig::default()
        };
        let settings = FetchSettings::from_config(&cfg);
        assert_eq!(settings.http.user_agent, "custom");
        assert_eq!(settings.template_subdir.len(), TEMPLATE_SUBDIR.len());
    }
}
