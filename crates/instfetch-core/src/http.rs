//! Blocking HTTP GET helpers on top of the curl crate (libcurl easy interface).
//!
//! Every request follows redirects, sends the configured user-agent and fails on
//! any non-2xx final status before body bytes reach the caller.

use crate::config::FetchConfig;
use crate::error::{FetchError, Result};
use std::cell::Cell;
use std::time::Duration;

/// Per-request settings derived from [`FetchConfig`].
#[derive(Debug, Clone)]
pub struct HttpOptions {
    pub user_agent: String,
    pub connect_timeout: Duration,
    /// Whole-transfer cap; None leaves the transfer unbounded.
    pub timeout: Option<Duration>,
    pub max_redirections: u32,
    /// Bytes buffered before each write when streaming to disk.
    pub chunk_size: usize,
}

impl Default for HttpOptions {
    fn default() -> Self {
        FetchConfig::default().http_options()
    }
}

/// Rejects anything libcurl would misinterpret (relative paths, bare hostnames, other schemes).
fn validate_url(url: &str) -> Result<()> {
    let parsed = url::Url::parse(url)
        .map_err(|e| FetchError::argument(format!("malformed URL {url:?}: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(FetchError::argument(format!(
            "unsupported URL scheme {other:?} in {url}"
        ))),
    }
}

fn build_easy(url: &str, opts: &HttpOptions) -> Result<curl::easy::Easy> {
    validate_url(url)?;
    let net = |e: curl::Error| FetchError::network(url, e);

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(net)?;
    easy.get(true).map_err(net)?;
    easy.useragent(&opts.user_agent).map_err(net)?;
    easy.follow_location(true).map_err(net)?;
    easy.max_redirections(opts.max_redirections).map_err(net)?;
    easy.fail_on_error(true).map_err(net)?;
    easy.connect_timeout(opts.connect_timeout).map_err(net)?;
    if let Some(timeout) = opts.timeout {
        easy.timeout(timeout).map_err(net)?;
    }
    Ok(easy)
}

/// Status code from an `HTTP/x.y NNN reason` line; None for any other header line.
fn parse_status_line(line: &str) -> Option<u32> {
    let rest = line.strip_prefix("HTTP/")?;
    let code = rest.split_whitespace().nth(1)?;
    code.parse().ok()
}

/// Maps a failed `perform()` to either an HTTP status error or a transport error.
fn perform_error(easy: &mut curl::easy::Easy, url: &str, err: curl::Error) -> FetchError {
    if err.is_http_returned_error() {
        if let Ok(code) = easy.response_code() {
            return FetchError::HttpStatus {
                url: url.to_string(),
                code,
            };
        }
    }
    FetchError::network(url, err)
}

fn check_status(easy: &mut curl::easy::Easy, url: &str) -> Result<()> {
    let code = easy
        .response_code()
        .map_err(|e| FetchError::network(url, e))?;
    if !(200..300).contains(&code) {
        return Err(FetchError::HttpStatus {
            url: url.to_string(),
            code,
        });
    }
    Ok(())
}

/// GETs `url` and hands each received chunk to `sink` as it arrives.
///
/// Returns the number of bytes delivered. The sink only ever sees the body of a 2xx
/// response: any other final status aborts the transfer before the first chunk.
/// A sink error aborts the transfer and is returned as-is, taking precedence over
/// the resulting curl write error.
pub fn stream<F>(url: &str, opts: &HttpOptions, mut sink: F) -> Result<u64>
where
    F: FnMut(&[u8]) -> Result<()>,
{
    let mut easy = build_easy(url, opts)?;
    let mut received: u64 = 0;
    let status: Cell<Option<u32>> = Cell::new(None);
    let mut refused: Option<u32> = None;
    let mut sink_err: Option<FetchError> = None;

    let performed = {
        let mut transfer = easy.transfer();
        // Each response in a redirect chain (and any 1xx) starts with a new status line,
        // so the last one seen before body data belongs to the final response.
        transfer
            .header_function(|data| {
                if let Some(code) = std::str::from_utf8(data).ok().and_then(parse_status_line) {
                    status.set(Some(code));
                }
                true
            })
            .map_err(|e| FetchError::network(url, e))?;
        transfer
            .write_function(|data| {
                if let Some(code) = status.get().filter(|c| !(200..300).contains(c)) {
                    refused = Some(code);
                    return Ok(0); // abort transfer
                }
                match sink(data) {
                    Ok(()) => {
                        received += data.len() as u64;
                        Ok(data.len())
                    }
                    Err(e) => {
                        sink_err = Some(e);
                        Ok(0) // abort transfer
                    }
                }
            })
            .map_err(|e| FetchError::network(url, e))?;
        transfer.perform()
    };

    if let Some(code) = refused {
        return Err(FetchError::HttpStatus {
            url: url.to_string(),
            code,
        });
    }
    if let Some(e) = sink_err {
        return Err(e);
    }
    if let Err(e) = performed {
        return Err(perform_error(&mut easy, url, e));
    }
    check_status(&mut easy, url)?;

    tracing::debug!(url, bytes = received, "GET complete");
    Ok(received)
}

/// GETs `url` and returns the body decoded as UTF-8 (invalid sequences replaced).
pub fn get_text(url: &str, opts: &HttpOptions) -> Result<String> {
    let mut body = Vec::new();
    stream(url, opts, |chunk| {
        body.extend_from_slice(chunk);
        Ok(())
    })?;
    Ok(String::from_utf8_lossy(&body).into_owned())
}
