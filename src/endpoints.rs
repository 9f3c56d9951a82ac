//! Upstream URL construction for WordPress and WP-CLI release artefacts.
//!
//! All network endpoints used by the tools are defined here so that the
//! download and resolver modules never assemble URLs inline.

/// The WordPress core version-check API endpoint.
pub const VERSION_CHECK_URL: &str = "https://api.wordpress.org/core/version-check/1.7/";

/// Base URL for WordPress release downloads.
const WORDPRESS_DOWNLOAD_BASE: &str = "https://wordpress.org";

/// Base URL for WP-CLI release downloads.
const WP_CLI_RELEASE_BASE: &str = "https://github.com/wp-cli/wp-cli/releases/download";

/// Construct the download URL for a WordPress release archive.
///
/// # Examples
///
/// ```
/// use wp_release_tools::endpoints::archive_url;
///
/// let url = archive_url("6.4.2");
/// assert_eq!(url, "https://wordpress.org/wordpress-6.4.2.tar.gz");
/// ```
#[must_use]
pub fn archive_url(version: &str) -> String {
    format!("{WORDPRESS_DOWNLOAD_BASE}/wordpress-{version}.tar.gz")
}

/// Construct the URL of the published SHA-1 checksum for a release archive.
///
/// # Examples
///
/// ```
/// use wp_release_tools::endpoints::checksum_url;
///
/// let url = checksum_url("6.4.2");
/// assert!(url.ends_with("wordpress-6.4.2.tar.gz.sha1"));
/// ```
#[must_use]
pub fn checksum_url(version: &str) -> String {
    format!("{WORDPRESS_DOWNLOAD_BASE}/wordpress-{version}.tar.gz.sha1")
}

/// Construct the download URL for a WP-CLI phar release.
///
/// # Examples
///
/// ```
/// use wp_release_tools::endpoints::wp_cli_url;
///
/// let url = wp_cli_url("2.10.0");
/// assert!(url.contains("/v2.10.0/"));
/// assert!(url.ends_with("wp-cli-2.10.0.phar"));
/// ```
#[must_use]
pub fn wp_cli_url(version: &str) -> String {
    format!("{WP_CLI_RELEASE_BASE}/v{version}/wp-cli-{version}.phar")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_url_embeds_version() {
        let url = archive_url("6.4.2");
        assert_eq!(url, "https://wordpress.org/wordpress-6.4.2.tar.gz");
    }

    #[test]
    fn checksum_url_is_archive_url_with_sha1_suffix() {
        let version = "6.4.2";
        assert_eq!(checksum_url(version), format!("{}.sha1", archive_url(version)));
    }

    #[test]
    fn wp_cli_url_uses_tag_and_phar_name() {
        let url = wp_cli_url("2.10.0");
        assert_eq!(
            url,
            "https://github.com/wp-cli/wp-cli/releases/download/v2.10.0/wp-cli-2.10.0.phar"
        );
    }
}
