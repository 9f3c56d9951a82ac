//! Published release checksum resolution.
//!
//! WordPress publishes the SHA-1 of each release archive as a small text
//! file next to the archive itself. The body may carry trailing whitespace
//! or an appended filename; only the first token is used.

use crate::download::Fetcher;
use crate::endpoints::checksum_url;
use crate::error::Result;
use crate::sha1_digest::Sha1Digest;

/// Fetch the published SHA-1 checksum for a WordPress release archive.
///
/// # Errors
///
/// Propagates download failures, and returns
/// [`crate::error::ReleaseToolError::InvalidSha1`] if the response body
/// does not begin with a well-formed SHA-1 digest.
pub fn published_sha1(fetcher: &dyn Fetcher, version: &str) -> Result<Sha1Digest> {
    let body = fetcher.fetch_text(&checksum_url(version))?;
    Sha1Digest::parse_lenient(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::{DownloadError, MockFetcher};
    use crate::error::ReleaseToolError;

    #[test]
    fn returns_first_token_of_body() {
        let digest_hex = "c".repeat(40);
        let body = format!("{digest_hex}  wordpress-6.4.2.tar.gz\n");
        let mut fetcher = MockFetcher::new();
        fetcher
            .expect_fetch_text()
            .withf(|url| url.ends_with("wordpress-6.4.2.tar.gz.sha1"))
            .return_once(move |_| Ok(body));

        let digest = published_sha1(&fetcher, "6.4.2").expect("mocked fetch");
        assert_eq!(digest.as_str(), digest_hex);
    }

    #[test]
    fn errors_on_garbage_body() {
        let mut fetcher = MockFetcher::new();
        fetcher
            .expect_fetch_text()
            .return_once(|_| Ok("<html>503 Service Unavailable</html>".to_owned()));

        let result = published_sha1(&fetcher, "6.4.2");
        assert!(matches!(result, Err(ReleaseToolError::InvalidSha1 { .. })));
    }

    #[test]
    fn propagates_download_failure() {
        let mut fetcher = MockFetcher::new();
        fetcher.expect_fetch_text().return_once(|url| {
            Err(DownloadError::NotFound {
                url: url.to_owned(),
            })
        });

        let result = published_sha1(&fetcher, "0.0.0");
        assert!(matches!(
            result,
            Err(ReleaseToolError::Download(DownloadError::NotFound { .. }))
        ));
    }
}
