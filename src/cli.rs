//! CLI argument definitions for the release pipeline tools.
//!
//! Each binary has its own argument struct, defined here rather than in the
//! entrypoints so the parsers can be unit tested and the binaries stay
//! focused on orchestration.

use crate::tags::Distro;
use camino::Utf8PathBuf;
use clap::Parser;

/// Resolve the latest WordPress release version.
#[derive(Parser, Debug)]
#[command(name = "wp-latest-version")]
#[command(version, about)]
#[command(long_about = concat!(
    "Resolve the latest WordPress release version.\n\n",
    "Queries the WordPress core version-check API and prints the version of ",
    "the newest offer to stdout. The pipeline feeds this value to the other ",
    "tools.",
))]
pub struct LatestVersionArgs {}

/// Resolve the published SHA-1 checksum of a WordPress release archive.
#[derive(Parser, Debug)]
#[command(name = "wp-release-sha1")]
#[command(about, disable_version_flag = true)]
#[command(long_about = concat!(
    "Resolve the published SHA-1 checksum of a WordPress release archive.\n\n",
    "Fetches the checksum file published next to the release archive and ",
    "prints the digest to stdout. Extra tokens and whitespace in the ",
    "published file are tolerated.",
))]
pub struct ReleaseSha1Args {
    /// WordPress release version to look up.
    #[arg(long, value_name = "VERSION")]
    pub version: String,
}

/// Download and verify the assets for a WordPress image build.
#[derive(Parser, Debug)]
#[command(name = "wp-fetch-assets")]
#[command(version, about)]
#[command(long_about = concat!(
    "Download and verify the assets for a WordPress image build.\n\n",
    "Downloads the WordPress release archive and the WP-CLI phar into the ",
    "output directory, verifies the archive against the expected SHA-1 when ",
    "one is given, and extracts the archive with its top-level 'wordpress/' ",
    "prefix stripped. A checksum mismatch aborts the run before extraction.",
))]
pub struct FetchAssetsArgs {
    /// WordPress release version to download.
    #[arg(long, value_name = "VERSION")]
    pub wordpress_version: String,

    /// Expected SHA-1 of the release archive (verification skipped if absent).
    #[arg(long, value_name = "HEX")]
    pub wordpress_sha1: Option<String>,

    /// WP-CLI release version to download.
    #[arg(long, value_name = "VERSION")]
    pub wp_cli_version: String,

    /// Output directory for the downloaded assets (created if absent).
    #[arg(long, value_name = "DIR")]
    pub out_dir: Utf8PathBuf,
}

/// Compute the ordered list of image tags for a build.
#[derive(Parser, Debug)]
#[command(name = "wp-compute-tags")]
#[command(version, about)]
#[command(long_about = concat!(
    "Compute the ordered list of image tags for a build.\n\n",
    "Prints one fully-qualified tag per line: rolling tags first, then the ",
    "version-distro tag, the bare version tag for debian builds, and finally ",
    "the digest-pinned tag. The pipeline pushes tags in this order.",
))]
pub struct ComputeTagsArgs {
    /// Image name, including registry and namespace.
    #[arg(long, value_name = "NAME")]
    pub image: String,

    /// WordPress version the image was built from.
    #[arg(long, value_name = "VERSION")]
    pub wp_version: String,

    /// Packaging base of the image.
    #[arg(long, value_enum, value_name = "DISTRO")]
    pub distro: Distro,

    /// Short digest of the base image the build was pinned to.
    #[arg(long, value_name = "HEX")]
    pub base_digest_short: String,

    /// Comma-separated rolling tags to emit first (e.g. "latest,6").
    #[arg(long, value_name = "TAGS")]
    pub rolling: Option<String>,
}

/// Resolve the registry manifest digest of a base image.
#[derive(Parser, Debug)]
#[command(name = "wp-base-digest")]
#[command(version, about)]
#[command(long_about = concat!(
    "Resolve the registry manifest digest of a base image.\n\n",
    "Runs 'docker buildx imagetools inspect' against the image reference and ",
    "prints the algorithm-prefixed digest to stdout. Builds pin their base ",
    "image to this digest so rebuilds are reproducible.",
))]
pub struct BaseDigestArgs {
    /// Image reference to inspect (e.g. "php:8.3-apache").
    #[arg(long, value_name = "REF")]
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_assets_args_parse_all_flags() {
        let args = FetchAssetsArgs::parse_from([
            "wp-fetch-assets",
            "--wordpress-version",
            "6.4.2",
            "--wordpress-sha1",
            "deadbeef",
            "--wp-cli-version",
            "2.10.0",
            "--out-dir",
            "/tmp/assets",
        ]);
        assert_eq!(args.wordpress_version, "6.4.2");
        assert_eq!(args.wordpress_sha1.as_deref(), Some("deadbeef"));
        assert_eq!(args.wp_cli_version, "2.10.0");
        assert_eq!(args.out_dir, Utf8PathBuf::from("/tmp/assets"));
    }

    #[test]
    fn fetch_assets_sha1_is_optional() {
        let args = FetchAssetsArgs::parse_from([
            "wp-fetch-assets",
            "--wordpress-version",
            "6.4.2",
            "--wp-cli-version",
            "2.10.0",
            "--out-dir",
            "out",
        ]);
        assert!(args.wordpress_sha1.is_none());
    }

    #[test]
    fn fetch_assets_requires_wordpress_version() {
        let result = FetchAssetsArgs::try_parse_from([
            "wp-fetch-assets",
            "--wp-cli-version",
            "2.10.0",
            "--out-dir",
            "out",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn compute_tags_args_parse_distro_values() {
        let args = ComputeTagsArgs::parse_from([
            "wp-compute-tags",
            "--image",
            "x",
            "--wp-version",
            "6.4",
            "--distro",
            "alpine",
            "--base-digest-short",
            "abc123",
        ]);
        assert_eq!(args.distro, Distro::Alpine);
        assert!(args.rolling.is_none());
    }

    #[test]
    fn compute_tags_rejects_unknown_distro() {
        let result = ComputeTagsArgs::try_parse_from([
            "wp-compute-tags",
            "--image",
            "x",
            "--wp-version",
            "6.4",
            "--distro",
            "gentoo",
            "--base-digest-short",
            "abc123",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn release_sha1_args_require_version() {
        assert!(ReleaseSha1Args::try_parse_from(["wp-release-sha1"]).is_err());
        let args = ReleaseSha1Args::parse_from(["wp-release-sha1", "--version", "6.4.2"]);
        assert_eq!(args.version, "6.4.2");
    }

    #[test]
    fn base_digest_args_require_image() {
        assert!(BaseDigestArgs::try_parse_from(["wp-base-digest"]).is_err());
        let args = BaseDigestArgs::parse_from(["wp-base-digest", "--image", "php:8.3-apache"]);
        assert_eq!(args.image, "php:8.3-apache");
    }

    #[test]
    fn latest_version_takes_no_flags() {
        assert!(LatestVersionArgs::try_parse_from(["wp-latest-version"]).is_ok());
        assert!(LatestVersionArgs::try_parse_from(["wp-latest-version", "--bogus"]).is_err());
    }
}
