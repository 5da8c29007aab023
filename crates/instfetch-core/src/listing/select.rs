//! Candidate filtering and deterministic selection.

use crate::artifact::FilenamePattern;
use crate::url_model::last_segment;

/// Keeps links whose final segment matches `pattern` and returns the lexicographically
/// smallest raw link string, or `None` if nothing matches.
///
/// Ordering is byte-wise on the whole link, not on the filename and not by version:
/// `nuxeo-drive-1.10.msi` sorts before `nuxeo-drive-1.9.msi`.
pub fn select_candidate<'a>(links: &[&'a str], pattern: &FilenamePattern) -> Option<&'a str> {
    let mut candidates: Vec<&'a str> = links
        .iter()
        .copied()
        .filter(|link| pattern.matches_prefix(last_segment(link)))
        .collect();
    tracing::debug!(
        pattern = pattern.as_str(),
        total = links.len(),
        matched = candidates.len(),
        "filtered listing links"
    );
    candidates.sort_unstable();
    candidates.first().copied()
}
