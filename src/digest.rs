//! Algorithm-prefixed image digest newtype.
//!
//! Container registries identify image manifests by an algorithm-prefixed
//! content hash such as `sha256:<64 hex>`. [`ImageDigest`] validates that
//! shape on construction so downstream consumers can trust the format.

use crate::error::{ReleaseToolError, Result};
use std::fmt;

/// Digest algorithm prefix accepted by the tools.
const SHA256_PREFIX: &str = "sha256:";

/// Expected length of the hex portion of a sha256 digest.
const SHA256_HEX_LEN: usize = 64;

/// A validated algorithm-prefixed image digest (`sha256:` + 64 lowercase hex).
///
/// # Examples
///
/// ```
/// use wp_release_tools::digest::ImageDigest;
///
/// let raw = format!("sha256:{}", "0".repeat(64));
/// let digest: ImageDigest = raw.as_str().try_into().unwrap();
/// assert!(digest.as_str().starts_with("sha256:"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageDigest(String);

impl ImageDigest {
    /// Return the full digest string, including the algorithm prefix.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for ImageDigest {
    type Error = ReleaseToolError;

    fn try_from(value: &str) -> Result<Self> {
        validate_image_digest(value)?;
        Ok(Self(value.to_owned()))
    }
}

impl TryFrom<String> for ImageDigest {
    type Error = ReleaseToolError;

    fn try_from(value: String) -> Result<Self> {
        validate_image_digest(&value)?;
        Ok(Self(value))
    }
}

impl AsRef<str> for ImageDigest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validate that `value` is `sha256:` followed by 64 lowercase hex characters.
fn validate_image_digest(value: &str) -> Result<()> {
    let Some(hex) = value.strip_prefix(SHA256_PREFIX) else {
        return Err(ReleaseToolError::InvalidImageDigest {
            reason: format!("missing '{SHA256_PREFIX}' prefix"),
        });
    };
    if hex.len() != SHA256_HEX_LEN {
        return Err(ReleaseToolError::InvalidImageDigest {
            reason: format!("expected {SHA256_HEX_LEN} hex characters, got {}", hex.len()),
        });
    }
    if let Some(bad) = hex
        .chars()
        .find(|c| !c.is_ascii_hexdigit() || c.is_ascii_uppercase())
    {
        return Err(ReleaseToolError::InvalidImageDigest {
            reason: format!("invalid digest character '{bad}'"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn valid_digest() -> String {
        format!("sha256:{}", "ab12".repeat(16))
    }

    #[test]
    fn accepts_valid_sha256_digest() {
        let digest = ImageDigest::try_from(valid_digest().as_str());
        assert!(digest.is_ok());
    }

    #[rstest]
    #[case::no_prefix(&"a".repeat(64))]
    #[case::wrong_prefix("sha512:abc")]
    #[case::short_hex("sha256:abcdef")]
    #[case::uppercase("sha256:ABCDEF")]
    fn rejects_malformed_digests(#[case] value: &str) {
        let result = ImageDigest::try_from(value);
        assert!(
            matches!(result, Err(ReleaseToolError::InvalidImageDigest { .. })),
            "expected InvalidImageDigest for {value}"
        );
    }

    #[test]
    fn rejects_non_hex_in_hash() {
        let bad = format!("sha256:{}", "g".repeat(64));
        assert!(ImageDigest::try_from(bad.as_str()).is_err());
    }

    #[test]
    fn display_round_trips() {
        let raw = valid_digest();
        let digest = ImageDigest::try_from(raw.as_str()).expect("known good");
        assert_eq!(format!("{digest}"), raw);
    }
}
