//! Latest-version resolution from the WordPress version-check API.
//!
//! The version-check endpoint returns a JSON document whose `offers` array
//! lists available releases, newest first. The latest version is the
//! `current` field of the first offer.

use crate::download::Fetcher;
use crate::endpoints::VERSION_CHECK_URL;
use crate::error::{ReleaseToolError, Result};
use serde::Deserialize;

/// Response document from the version-check API.
///
/// Only the fields the resolver needs are modelled; the endpoint returns
/// considerably more.
#[derive(Debug, Deserialize)]
pub struct VersionCheck {
    /// Available release offers, newest first.
    #[serde(default)]
    pub offers: Vec<Offer>,
}

/// A single release offer from the version-check API.
#[derive(Debug, Deserialize)]
pub struct Offer {
    /// The release version this offer describes.
    pub current: Option<String>,
}

/// Extract the latest version from a version-check response body.
///
/// # Errors
///
/// Returns [`ReleaseToolError::InvalidVersionCheck`] if the body is not
/// valid JSON, [`ReleaseToolError::NoOffers`] if the offer list is empty,
/// and [`ReleaseToolError::MissingCurrent`] if the first offer has no
/// usable `current` field.
///
/// # Examples
///
/// ```
/// use wp_release_tools::version::latest_version;
///
/// let body = r#"{"offers": [{"current": "6.4.2"}, {"current": "6.3.1"}]}"#;
/// assert_eq!(latest_version(body).unwrap(), "6.4.2");
/// ```
pub fn latest_version(body: &str) -> Result<String> {
    let check: VersionCheck =
        serde_json::from_str(body).map_err(|e| ReleaseToolError::InvalidVersionCheck {
            reason: e.to_string(),
        })?;
    let first = check.offers.first().ok_or(ReleaseToolError::NoOffers)?;
    match first.current.as_deref() {
        Some(version) if !version.is_empty() => Ok(version.to_owned()),
        _ => Err(ReleaseToolError::MissingCurrent),
    }
}

/// Fetch the version-check endpoint and resolve the latest version.
///
/// # Errors
///
/// Propagates download failures and any parse error from
/// [`latest_version`].
pub fn fetch_latest_version(fetcher: &dyn Fetcher) -> Result<String> {
    let body = fetcher.fetch_text(VERSION_CHECK_URL)?;
    latest_version(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::MockFetcher;

    #[test]
    fn returns_current_of_first_offer() {
        let body = r#"{"offers": [{"current": "6.4.2"}, {"current": "6.3.1"}]}"#;
        assert_eq!(latest_version(body).expect("valid body"), "6.4.2");
    }

    #[test]
    fn errors_on_empty_offers() {
        let body = r#"{"offers": []}"#;
        let result = latest_version(body);
        assert!(matches!(result, Err(ReleaseToolError::NoOffers)));
    }

    #[test]
    fn errors_when_offers_field_is_absent() {
        let body = r#"{"translations": []}"#;
        let result = latest_version(body);
        assert!(matches!(result, Err(ReleaseToolError::NoOffers)));
    }

    #[test]
    fn errors_when_current_is_missing() {
        let body = r#"{"offers": [{"response": "upgrade"}]}"#;
        let result = latest_version(body);
        assert!(matches!(result, Err(ReleaseToolError::MissingCurrent)));
    }

    #[test]
    fn errors_when_current_is_empty() {
        let body = r#"{"offers": [{"current": ""}]}"#;
        let result = latest_version(body);
        assert!(matches!(result, Err(ReleaseToolError::MissingCurrent)));
    }

    #[test]
    fn errors_on_malformed_json() {
        let result = latest_version("not json");
        assert!(matches!(
            result,
            Err(ReleaseToolError::InvalidVersionCheck { .. })
        ));
    }

    #[test]
    fn fetch_latest_version_queries_the_version_check_endpoint() {
        let mut fetcher = MockFetcher::new();
        fetcher
            .expect_fetch_text()
            .withf(|url| url == VERSION_CHECK_URL)
            .return_once(|_| Ok(r#"{"offers": [{"current": "6.4.2"}]}"#.to_owned()));

        let version = fetch_latest_version(&fetcher).expect("mocked fetch");
        assert_eq!(version, "6.4.2");
    }
}
