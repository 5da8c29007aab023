//! Error taxonomy for the fetch pipeline.
//!
//! Every failure propagates to the process boundary; nothing here is retried.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Missing or malformed input (CLI flags, URLs, derived filenames).
    #[error("invalid argument: {message}")]
    Argument { message: String },

    /// Transport-level failure reported by libcurl (unreachable host, timeout, TLS).
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    HttpStatus { url: String, code: u32 },

    /// No link on the listing page matched the artifact pattern.
    #[error("could not find packages with pattern {pattern:?} on {listing_url}")]
    NotFound {
        pattern: String,
        listing_url: String,
    },

    /// Writing a progress line to the output stream failed.
    #[error("cannot write progress output: {0}")]
    Progress(#[source] std::io::Error),

    #[error("filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    pub fn argument<S: Into<String>>(message: S) -> Self {
        FetchError::Argument {
            message: message.into(),
        }
    }

    pub fn network(url: &str, source: curl::Error) -> Self {
        FetchError::Network {
            url: url.to_string(),
            source,
        }
    }

    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FetchError::Filesystem {
            path: path.into(),
            source,
        }
    }
}
