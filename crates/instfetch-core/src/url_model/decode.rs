//! Percent-decoding of the final URL segment into a destination filename.

use crate::error::{FetchError, Result};

/// Percent-decodes `segment` for use as a file name inside the destination directory.
///
/// Fails if decoding yields invalid UTF-8, or a name that would escape or alias the
/// directory (empty, `.`, `..`, or containing `/`, `\` or NUL).
pub fn local_filename(segment: &str) -> Result<String> {
    let decoded = urlencoding::decode(segment).map_err(|e| {
        FetchError::argument(format!("filename {segment:?} is not valid UTF-8 once decoded: {e}"))
    })?;

    let unusable = decoded.is_empty()
        || decoded == "."
        || decoded == ".."
        || decoded.contains(['/', '\\', '\0']);
    if unusable {
        return Err(FetchError::argument(format!(
            "cannot derive a local filename from {segment:?}"
        )));
    }
    Ok(decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_percent_escapes() {
        assert_eq!(local_filename("Nuxeo%20Drive.dmg").unwrap(), "Nuxeo Drive.dmg");
    }

    #[test]
    fn plain_name_unchanged() {
        assert_eq!(
            local_filename("nuxeo-drive-2.0.0412.msi").unwrap(),
            "nuxeo-drive-2.0.0412.msi"
        );
    }

    #[test]
    fn rejects_empty_and_dot_names() {
        assert!(local_filename("").is_err());
        assert!(local_filename(".").is_err());
        assert!(local_filename("%2E%2E").is_err());
    }

    #[test]
    fn rejects_encoded_separators() {
        assert!(matches!(
            local_filename("..%2Fescape.dmg"),
            Err(FetchError::Argument { .. })
        ));
        assert!(local_filename("a%00b.msi").is_err());
    }
}
