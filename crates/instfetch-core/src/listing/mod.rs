//! Package locator: scrape a listing page and resolve one artifact URL.
//!
//! Fetches the page, extracts `href` values, keeps those whose final path segment
//! starts with a match of the artifact pattern, and resolves the lexicographically
//! smallest one against the listing URL.

mod links;
mod select;

pub use links::extract_links;
pub use select::select_candidate;

use crate::artifact::FilenamePattern;
use crate::error::{FetchError, Result};
use crate::http::{self, HttpOptions};
use crate::url_model::{join_listing_url, last_segment};
use std::io::Write;

/// Where an artifact lives and what it is called there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    /// Fully-qualified download URL.
    pub url: String,
    /// Final path segment of `url`, still percent-encoded.
    pub filename: String,
}

impl ResolvedArtifact {
    /// Treats `url` as the artifact itself, without consulting a listing.
    pub fn direct(url: &str) -> Self {
        Self {
            url: url.to_string(),
            filename: last_segment(url).to_string(),
        }
    }
}

/// Picks an artifact out of already-fetched listing HTML.
pub fn resolve_from_html(
    listing_url: &str,
    html: &str,
    pattern: &FilenamePattern,
) -> Result<ResolvedArtifact> {
    let links = extract_links(html);
    let chosen = select_candidate(&links, pattern).ok_or_else(|| FetchError::NotFound {
        pattern: pattern.as_str().to_string(),
        listing_url: listing_url.to_string(),
    })?;

    let url = join_listing_url(listing_url, chosen);
    let filename = last_segment(&url).to_string();
    tracing::info!(listing_url, link = chosen, url = %url, "selected package");
    Ok(ResolvedArtifact { url, filename })
}

/// Fetches the listing at `listing_url` and resolves the artifact matching `pattern`.
///
/// A `Finding latest package at: <url>` line is written and flushed to `progress` first.
pub fn locate<W: Write>(
    listing_url: &str,
    pattern: &FilenamePattern,
    opts: &HttpOptions,
    progress: &mut W,
) -> Result<ResolvedArtifact> {
    writeln!(progress, "Finding latest package at: {listing_url}")
        .and_then(|()| progress.flush())
        .map_err(FetchError::Progress)?;

    let html = http::get_text(listing_url, opts)?;
    resolve_from_html(listing_url, &html, pattern)
}
