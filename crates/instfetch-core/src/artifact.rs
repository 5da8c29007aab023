//! Artifact kinds and their filename patterns.

use crate::error::{FetchError, Result};
use regex::Regex;
use std::fmt;

/// Filename pattern for the Windows installer produced by the MSI job.
pub const MSI_PATTERN: &str = r"nuxeo-drive-.*\.msi";

/// Filename pattern for the macOS disk image. The listing links it percent-encoded.
pub const DMG_PATTERN: &str = r"Nuxeo%20Drive\.dmg";

/// One of the two installer types handled by a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Windows installer package.
    Msi,
    /// macOS disk image.
    Dmg,
}

impl ArtifactKind {
    /// Processing order within a run.
    pub const ALL: [ArtifactKind; 2] = [ArtifactKind::Msi, ArtifactKind::Dmg];

    pub fn default_pattern(self) -> &'static str {
        match self {
            ArtifactKind::Msi => MSI_PATTERN,
            ArtifactKind::Dmg => DMG_PATTERN,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Msi => f.write_str("msi"),
            ArtifactKind::Dmg => f.write_str("dmg"),
        }
    }
}

/// A filename regex matched at the start of the candidate (prefix semantics).
///
/// `nuxeo-drive-.*\.msi` accepts `nuxeo-drive-1.0.msi.sha256` as well, since only
/// a prefix of the name has to match.
#[derive(Debug, Clone)]
pub struct FilenamePattern {
    source: String,
    anchored: Regex,
}

impl FilenamePattern {
    pub fn new(source: &str) -> Result<Self> {
        let anchored = Regex::new(&format!("^(?:{source})")).map_err(|e| {
            FetchError::argument(format!("invalid filename pattern {source:?}: {e}"))
        })?;
        Ok(Self {
            source: source.to_string(),
            anchored,
        })
    }

    /// The pattern as written, without the added anchor.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches_prefix(&self, filename: &str) -> bool {
        self.anchored.is_match(filename)
    }
}

/// Compiled patterns for both artifact kinds.
#[derive(Debug, Clone)]
pub struct ArtifactPatterns {
    pub msi: FilenamePattern,
    pub dmg: FilenamePattern,
}

impl ArtifactPatterns {
    pub fn builtin() -> Self {
        let compile = |kind: ArtifactKind| {
            FilenamePattern::new(kind.default_pattern()).expect("builtin pattern is valid") // Static pattern, safe to panic
        };
        Self {
            msi: compile(ArtifactKind::Msi),
            dmg: compile(ArtifactKind::Dmg),
        }
    }

    pub fn for_kind(&self, kind: ArtifactKind) -> &FilenamePattern {
        match kind {
            ArtifactKind::Msi => &self.msi,
            ArtifactKind::Dmg => &self.dmg,
        }
    }
}

impl Default for ArtifactPatterns {
    fn default() -> Self {
        Self::builtin()
    }
}
