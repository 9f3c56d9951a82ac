//! Error types for the release pipeline tools.
//!
//! Every failure in these tools is immediately fatal: the binaries print the
//! error and exit non-zero, and the CI orchestrator re-runs the step. The
//! variants here carry enough context to make the message actionable without
//! consulting logs.

use crate::download::DownloadError;
use crate::extraction::ExtractionError;
use crate::inspect::InspectError;
use thiserror::Error;

/// Errors that can occur across the release pipeline tools.
#[derive(Debug, Error)]
pub enum ReleaseToolError {
    /// An HTTP download failed.
    #[error(transparent)]
    Download(#[from] DownloadError),

    /// Archive extraction failed.
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// Base image inspection failed.
    #[error(transparent)]
    Inspect(#[from] InspectError),

    /// The downloaded archive hash did not match the expected checksum.
    #[error("WordPress archive SHA-1 mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch {
        /// The checksum the pipeline supplied.
        expected: String,
        /// The checksum computed from the downloaded archive.
        actual: String,
    },

    /// A SHA-1 checksum value was malformed.
    #[error("invalid SHA-1 checksum: {reason}")]
    InvalidSha1 {
        /// Description of the validation failure.
        reason: String,
    },

    /// An image digest value was malformed.
    #[error("invalid image digest: {reason}")]
    InvalidImageDigest {
        /// Description of the validation failure.
        reason: String,
    },

    /// The version-check API response could not be parsed.
    #[error("invalid version-check response: {reason}")]
    InvalidVersionCheck {
        /// Description of the parse failure.
        reason: String,
    },

    /// The version-check API returned an empty offer list.
    #[error("no offers returned from the WordPress version-check API")]
    NoOffers,

    /// The first offer in the version-check response lacked a version.
    #[error("missing 'current' version in the first version-check offer")]
    MissingCurrent,

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using [`ReleaseToolError`].
pub type Result<T> = std::result::Result<T, ReleaseToolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_mismatch_reports_both_digests() {
        let err = ReleaseToolError::ChecksumMismatch {
            expected: "a".repeat(40),
            actual: "b".repeat(40),
        };
        let msg = err.to_string();
        assert!(msg.contains(&"a".repeat(40)));
        assert!(msg.contains(&"b".repeat(40)));
    }

    #[test]
    fn no_offers_message_names_the_api() {
        let msg = ReleaseToolError::NoOffers.to_string();
        assert!(msg.contains("version-check"));
    }

    #[test]
    fn download_errors_pass_through_transparently() {
        let err = ReleaseToolError::from(DownloadError::NotFound {
            url: "https://example.test/archive".to_owned(),
        });
        assert_eq!(err.to_string(), "not found: https://example.test/archive");
    }
}
