//! Link extraction from raw listing HTML.

use regex::Regex;
use std::sync::LazyLock;

/// Double-quoted `href` attributes only; single-quoted or unquoted ones are skipped.
static HREF_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bhref="([^"]+)""#).expect("href regex is valid") // Static pattern, safe to panic
});

/// Returns every `href="..."` value in document order, duplicates included.
///
/// This is a text scan, not an HTML parse: it tolerates broken markup and will also
/// pick up hrefs inside comments or `<link>` tags.
pub fn extract_links(html: &str) -> Vec<&str> {
    HREF_PATTERN
        .captures_iter(html)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .collect()
}
