//! SHA-1 digest newtype and file hashing for archive verification.
//!
//! WordPress publishes SHA-1 checksums alongside its release archives.
//! [`Sha1Digest`] validates that a value is a 40-character lowercase
//! hexadecimal string, and [`compute_sha1`] produces one from a file on
//! disk.

use crate::error::{ReleaseToolError, Result};
use sha1::{Digest, Sha1};
use std::fmt;
use std::io::Read;
use std::path::Path;

/// Expected length of a hex-encoded SHA-1 digest.
const DIGEST_HEX_LEN: usize = 40;

/// Read buffer size for file hashing.
const HASH_BUFFER_LEN: usize = 8192;

/// A validated hex-encoded SHA-1 digest string.
///
/// # Examples
///
/// ```
/// use wp_release_tools::sha1_digest::Sha1Digest;
///
/// let hex = "a".repeat(40);
/// let digest: Sha1Digest = hex.as_str().try_into().unwrap();
/// assert_eq!(digest.as_str().len(), 40);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sha1Digest(String);

impl Sha1Digest {
    /// Return the digest as a hex string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse a digest from possibly padded input, using only the first
    /// whitespace-delimited token.
    ///
    /// Published checksum files and pipeline-forwarded values may carry
    /// trailing newlines or an appended filename; both are tolerated.
    ///
    /// # Errors
    ///
    /// Returns [`ReleaseToolError::InvalidSha1`] if the input is empty or
    /// the first token is not a well-formed SHA-1 digest.
    ///
    /// # Examples
    ///
    /// ```
    /// use wp_release_tools::sha1_digest::Sha1Digest;
    ///
    /// let body = format!("{}  wordpress-6.4.2.tar.gz\n", "b".repeat(40));
    /// let digest = Sha1Digest::parse_lenient(&body).unwrap();
    /// assert_eq!(digest.as_str(), "b".repeat(40));
    /// ```
    pub fn parse_lenient(value: &str) -> Result<Self> {
        let token = value
            .split_whitespace()
            .next()
            .ok_or_else(|| ReleaseToolError::InvalidSha1 {
                reason: "empty checksum value".to_owned(),
            })?;
        Self::try_from(token)
    }

    /// Parse an optional checksum flag value.
    ///
    /// Pipelines forward the checksum through shell variables that may be
    /// set but empty; an absent, empty, or whitespace-only value means
    /// verification is skipped, not that the digest is malformed.
    ///
    /// # Errors
    ///
    /// Returns [`ReleaseToolError::InvalidSha1`] only when a non-blank
    /// value fails [`Sha1Digest::parse_lenient`].
    pub fn parse_flag(value: Option<&str>) -> Result<Option<Self>> {
        match value {
            Some(value) if !value.trim().is_empty() => Self::parse_lenient(value).map(Some),
            _ => Ok(None),
        }
    }

    /// Construct from hex already known to be valid (module-internal,
    /// used by the hasher which always emits lowercase hex).
    fn from_valid(hex: String) -> Self {
        Self(hex)
    }
}

impl TryFrom<&str> for Sha1Digest {
    type Error = ReleaseToolError;

    fn try_from(value: &str) -> Result<Self> {
        validate_sha1(value)?;
        Ok(Self(value.to_owned()))
    }
}

impl TryFrom<String> for Sha1Digest {
    type Error = ReleaseToolError;

    fn try_from(value: String) -> Result<Self> {
        validate_sha1(&value)?;
        Ok(Self(value))
    }
}

impl AsRef<str> for Sha1Digest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sha1Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validate that `value` is a well-formed hex-encoded SHA-1 digest.
fn validate_sha1(value: &str) -> Result<()> {
    if value.len() != DIGEST_HEX_LEN {
        return Err(ReleaseToolError::InvalidSha1 {
            reason: format!(
                "expected {DIGEST_HEX_LEN} hex characters, got {}",
                value.len()
            ),
        });
    }
    if let Some(bad) = value.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ReleaseToolError::InvalidSha1 {
            reason: format!("non-hex character '{bad}'"),
        });
    }
    if value.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(ReleaseToolError::InvalidSha1 {
            reason: "digest must be lowercase".to_owned(),
        });
    }
    Ok(())
}

/// Compute the SHA-1 digest of the file at `path`.
///
/// Streams the file through the hasher in fixed-size chunks so archive
/// size does not affect memory use.
///
/// # Errors
///
/// Returns [`ReleaseToolError::Io`] if the file cannot be read.
pub fn compute_sha1(path: &Path) -> Result<Sha1Digest> {
    let mut file = std::fs::File::open(path)?;
    let mut hasher = Sha1::new();
    let mut buffer = [0u8; HASH_BUFFER_LEN];
    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }
    // sha1 always produces 40-char lowercase hex.
    Ok(Sha1Digest::from_valid(format!("{:x}", hasher.finalize())))
}
