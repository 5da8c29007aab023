//! String-level URL path helpers.

/// Returns the substring after the last `/`, or the whole input when there is none.
///
/// Query strings and fragments are kept: `a/b.msi?x=1` yields `b.msi?x=1`.
pub fn last_segment(link: &str) -> &str {
    match link.rfind('/') {
        Some(idx) => &link[idx + 1..],
        None => link,
    }
}

/// True if `link` should be used verbatim rather than joined onto the listing URL.
pub fn is_absolute(link: &str) -> bool {
    link.starts_with("http")
}

/// Resolves `link` against the listing page URL.
///
/// Absolute links (anything starting with `http`) are returned unchanged. Relative
/// links are appended to the listing URL with exactly one separating `/` added when
/// the listing URL lacks a trailing one. No `..` or root-relative normalization is done.
pub fn join_listing_url(listing_url: &str, link: &str) -> String {
    if is_absolute(link) {
        return link.to_string();
    }
    if listing_url.ends_with('/') {
        format!("{listing_url}{link}")
    } else {
        format!("{listing_url}/{link}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_segment_with_and_without_slash() {
        assert_eq!(last_segment("artifact/dist/nuxeo-drive-1.3.msi"), "nuxeo-drive-1.3.msi");
        assert_eq!(last_segment("nuxeo-drive-1.3.msi"), "nuxeo-drive-1.3.msi");
        assert_eq!(last_segment("http://ci.example.com/dir/"), "");
    }

    #[test]
    fn join_adds_missing_slash() {
        assert_eq!(
            join_listing_url("http://ci.example.com/artifact", "x.msi"),
            "http://ci.example.com/artifact/x.msi"
        );
    }

    #[test]
    fn join_keeps_existing_slash() {
        assert_eq!(
            join_listing_url("http://ci.example.com/artifact/", "x.msi"),
            "http://ci.example.com/artifact/x.msi"
        );
    }

    #[test]
    fn absolute_link_is_verbatim() {
        assert_eq!(
            join_listing_url("http://ci.example.com/artifact/", "https://mirror.example.org/x.msi"),
            "https://mirror.example.org/x.msi"
        );
    }
}
