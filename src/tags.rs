//! Image tag derivation for published WordPress images.
//!
//! Tags are derived from the release version, the packaging distro, and the
//! short digest of the base image. Ordering is significant: the pipeline
//! pushes tags in the order emitted here, so rolling tags come first,
//! followed by the version tags, with the digest-pinned tag last.

use std::fmt;

/// Packaging base selecting how the image was built.
///
/// The debian flavour is the canonical build and additionally receives the
/// bare `image:version` tag; alpine images are only tagged with the distro
/// suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Distro {
    /// Debian-based image, the canonical flavour.
    Debian,
    /// Alpine-based image.
    Alpine,
}

impl Distro {
    /// Return the tag suffix for this distro.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Debian => "debian",
            Self::Alpine => "alpine",
        }
    }
}

impl fmt::Display for Distro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Compute the ordered list of fully-qualified image tags.
///
/// Emits, in order:
///
/// 1. each non-empty trimmed entry of the comma-separated `rolling` list as
///    `image:tag`;
/// 2. `image:{version}-{distro}`;
/// 3. `image:{version}` when `distro` is debian;
/// 4. `image:{version}-{distro}-base-{short_digest}`.
///
/// No de-duplication is performed; the caller controls the inputs.
///
/// # Examples
///
/// ```
/// use wp_release_tools::tags::{Distro, compute_tags};
///
/// let tags = compute_tags("x", "6.4", Distro::Debian, "abc123", None);
/// assert_eq!(tags, ["x:6.4-debian", "x:6.4", "x:6.4-debian-base-abc123"]);
/// ```
#[must_use]
pub fn compute_tags(
    image: &str,
    version: &str,
    distro: Distro,
    short_digest: &str,
    rolling: Option<&str>,
) -> Vec<String> {
    let mut tags = Vec::new();

    if let Some(rolling) = rolling {
        for tag in rolling.split(',') {
            let tag = tag.trim();
            if !tag.is_empty() {
                tags.push(format!("{image}:{tag}"));
            }
        }
    }

    tags.push(format!("{image}:{version}-{distro}"));
    if distro == Distro::Debian {
        tags.push(format!("{image}:{version}"));
    }
    tags.push(format!("{image}:{version}-{distro}-base-{short_digest}"));

    tags
}
