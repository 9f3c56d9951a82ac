//! Blocking HTTP download support for release artefact retrieval.
//!
//! Provides a trait-based abstraction over the two fetch shapes the tools
//! need (body-as-text and body-to-file), enabling dependency injection for
//! testing without network access.

use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

/// Network timeout applied to every HTTP call.
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Trait for fetching release artefacts over HTTP.
///
/// Abstractions allow tests to mock HTTP behaviour without network access.
#[cfg_attr(test, mockall::automock)]
pub trait Fetcher {
    /// Fetch a URL and return the response body as text.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be read.
    fn fetch_text(&self, url: &str) -> Result<String, DownloadError>;

    /// Fetch a URL and write the response body to `dest`, creating parent
    /// directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or the file write fails.
    fn fetch_to_file(&self, url: &str, dest: &Path) -> Result<(), DownloadError>;
}

/// Errors arising from HTTP download operations.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// HTTP request failed.
    #[error("download failed for {url}: {reason}")]
    HttpError {
        /// The URL that was requested.
        url: String,
        /// A human-readable description of the failure.
        reason: String,
    },

    /// The requested resource was not found (HTTP 404).
    #[error("not found: {url}")]
    NotFound {
        /// The URL that returned 404.
        url: String,
    },

    /// I/O error writing the downloaded file.
    #[error("I/O error writing download: {0}")]
    Io(#[from] std::io::Error),
}

/// HTTP-based fetcher using `ureq`.
pub struct HttpFetcher;

impl Fetcher for HttpFetcher {
    fn fetch_text(&self, url: &str) -> Result<String, DownloadError> {
        log::debug!("GET {url}");
        let response = http_agent()
            .get(url)
            .call()
            .map_err(|e| map_ureq_error(url, &e))?;
        response
            .into_body()
            .read_to_string()
            .map_err(|e| DownloadError::HttpError {
                url: url.to_owned(),
                reason: e.to_string(),
            })
    }

    fn fetch_to_file(&self, url: &str, dest: &Path) -> Result<(), DownloadError> {
        log::debug!("GET {url} -> {}", dest.display());
        let response = http_agent()
            .get(url)
            .call()
            .map_err(|e| map_ureq_error(url, &e))?;
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = std::fs::File::create(dest)?;
        std::io::copy(&mut response.into_body().as_reader(), &mut file)
            .map_err(DownloadError::Io)?;
        Ok(())
    }
}

/// Shared `ureq` agent with request timeout configuration.
fn http_agent() -> &'static ureq::Agent {
    static AGENT: OnceLock<ureq::Agent> = OnceLock::new();
    AGENT.get_or_init(|| {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(DOWNLOAD_TIMEOUT))
            .build();
        ureq::Agent::new_with_config(config)
    })
}

/// Map a ureq error to a [`DownloadError`].
fn map_ureq_error(url: &str, err: &ureq::Error) -> DownloadError {
    match err {
        ureq::Error::StatusCode(404) => DownloadError::NotFound {
            url: url.to_owned(),
        },
        other => DownloadError::HttpError {
            url: url.to_owned(),
            reason: other.to_string(),
        },
    }
}
