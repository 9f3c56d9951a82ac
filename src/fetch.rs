//! Asset fetch, verify, and extract orchestration.
//!
//! Drives the full asset preparation flow for an image build: download the
//! WordPress release archive, verify it against the expected checksum when
//! one is supplied, extract it with the top-level prefix stripped, and
//! download the WP-CLI phar. Verification always happens before extraction
//! so a corrupt archive never reaches the build context.

use crate::download::Fetcher;
use crate::endpoints::{archive_url, wp_cli_url};
use crate::error::{ReleaseToolError, Result};
use crate::extraction::extract_with_prefix;
use crate::output::write_line;
use crate::sha1_digest::{Sha1Digest, compute_sha1};
use camino::Utf8PathBuf;
use std::io::Write;

/// Filename the downloaded release archive is stored under.
const ARCHIVE_FILE_NAME: &str = "wordpress.tar.gz";

/// Top-level directory prefix inside the WordPress release archive.
const ARCHIVE_PREFIX: &str = "wordpress";

/// Subdirectory the archive contents are extracted into.
const WORDPRESS_DIR: &str = "wordpress";

/// Subdirectory the WP-CLI phar is placed in.
const WP_CLI_DIR: &str = "wp-cli";

/// Filename the WP-CLI phar is stored under.
const WP_CLI_FILE_NAME: &str = "wp-cli.phar";

/// Configuration for one asset fetch run.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// WordPress release version to download.
    pub wordpress_version: String,
    /// Expected archive SHA-1; verification is skipped when absent.
    pub expected_sha1: Option<Sha1Digest>,
    /// WP-CLI release version to download.
    pub wp_cli_version: String,
    /// Directory the assets are placed under, created if absent.
    pub out_dir: Utf8PathBuf,
}

/// Fetch, verify, and extract the build assets described by `config`.
///
/// On success the output directory contains `wordpress.tar.gz`, an extracted
/// `wordpress/` tree, and `wp-cli/wp-cli.phar`. Progress lines go to
/// `stderr`; nothing is printed to stdout.
///
/// # Errors
///
/// Returns [`ReleaseToolError::ChecksumMismatch`] when the downloaded
/// archive does not match `expected_sha1`; extraction is not attempted in
/// that case. Download, extraction, and I/O failures propagate unmodified.
pub fn fetch_assets(
    fetcher: &dyn Fetcher,
    config: &FetchConfig,
    stderr: &mut dyn Write,
) -> Result<()> {
    std::fs::create_dir_all(config.out_dir.as_std_path())?;

    let archive_path = config.out_dir.join(ARCHIVE_FILE_NAME);
    write_line(
        stderr,
        format!("Downloading WordPress {}...", config.wordpress_version),
    );
    fetcher.fetch_to_file(
        &archive_url(&config.wordpress_version),
        archive_path.as_std_path(),
    )?;

    if let Some(expected) = &config.expected_sha1 {
        verify_archive(archive_path.as_std_path(), expected)?;
    }

    let wordpress_dir = config.out_dir.join(WORDPRESS_DIR);
    write_line(stderr, format!("Extracting to {wordpress_dir}..."));
    extract_with_prefix(
        archive_path.as_std_path(),
        wordpress_dir.as_std_path(),
        ARCHIVE_PREFIX,
    )?;

    let phar_path = config.out_dir.join(WP_CLI_DIR).join(WP_CLI_FILE_NAME);
    write_line(
        stderr,
        format!("Downloading WP-CLI {}...", config.wp_cli_version),
    );
    fetcher.fetch_to_file(&wp_cli_url(&config.wp_cli_version), phar_path.as_std_path())?;

    Ok(())
}

/// Verify the downloaded archive against the expected checksum.
fn verify_archive(archive_path: &std::path::Path, expected: &Sha1Digest) -> Result<()> {
    let actual = compute_sha1(archive_path)?;
    if &actual != expected {
        return Err(ReleaseToolError::ChecksumMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        });
    }
    log::debug!("archive checksum verified: {actual}");
    Ok(())
}

#[cfg(test)]
#[path = "fetch_tests.rs"]
mod tests;
