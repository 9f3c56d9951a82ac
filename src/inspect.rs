//! Base image digest resolution via `docker buildx imagetools inspect`.
//!
//! The registry-side manifest digest of the base image is obtained by
//! shelling out to docker buildx and scanning its textual output for a
//! `Digest: sha256:<hex>` line. The invocation has a timeout to prevent
//! hangs on registry issues.

use crate::digest::ImageDigest;
use std::process::{Command, Output, Stdio};
use std::time::Duration;
use wait_timeout::ChildExt;

/// Timeout for the registry inspection command.
const INSPECT_TIMEOUT: Duration = Duration::from_secs(60);

/// Errors arising from base image inspection.
#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    /// Failed to spawn or communicate with the inspect command.
    #[error("failed to run docker buildx imagetools inspect: {0}")]
    Io(#[from] std::io::Error),

    /// The inspect command did not finish within the timeout.
    #[error("docker buildx imagetools inspect timed out after {seconds} seconds")]
    Timeout {
        /// The timeout that elapsed.
        seconds: u64,
    },

    /// The inspect command exited with a non-zero status.
    #[error("docker buildx imagetools inspect failed for {image}: {detail}")]
    CommandFailed {
        /// The image reference that was inspected.
        image: String,
        /// Trimmed command output describing the failure.
        detail: String,
    },

    /// The command output contained no digest line.
    #[error("unable to parse base image digest from buildx output for {image}")]
    DigestNotFound {
        /// The image reference that was inspected.
        image: String,
    },
}

/// Resolve the manifest digest of `image` from the registry.
///
/// # Errors
///
/// Returns [`InspectError::CommandFailed`] if docker exits non-zero,
/// [`InspectError::Timeout`] if it does not finish in time, and
/// [`InspectError::DigestNotFound`] if the output carries no
/// `Digest: sha256:<hex>` line.
pub fn base_image_digest(image: &str) -> Result<ImageDigest, InspectError> {
    let output = run_inspect_with_timeout(image)?;
    let combined = combine_output(&output);

    if !output.status.success() {
        return Err(InspectError::CommandFailed {
            image: image.to_owned(),
            detail: combined.trim().to_owned(),
        });
    }

    find_digest(&combined).ok_or_else(|| InspectError::DigestNotFound {
        image: image.to_owned(),
    })
}

/// Scan command output for the first well-formed digest line.
///
/// A digest line has the form `Digest: sha256:<64 lowercase hex>`; leading
/// whitespace is tolerated, and lines whose digest fails validation are
/// skipped.
#[must_use]
pub fn find_digest(output: &str) -> Option<ImageDigest> {
    output.lines().find_map(|line| {
        let candidate = line.trim().strip_prefix("Digest:")?.trim();
        ImageDigest::try_from(candidate).ok()
    })
}

/// Concatenate stdout and stderr the way a terminal would show them.
fn combine_output(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

/// Run the inspect command with a timeout.
///
/// Returns the command output if it completes within the timeout, or an
/// error if the command times out or fails to start.
fn run_inspect_with_timeout(image: &str) -> Result<Output, InspectError> {
    log::debug!("inspecting {image}");
    let mut child = Command::new("docker")
        .args(["buildx", "imagetools", "inspect", image])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    // Pipes are drained only after the child exits, so output larger than
    // the OS pipe buffer (typically 64 KiB) would stall the child until the
    // timeout fires. Imagetools inspect emits a few KiB per manifest list.
    match child.wait_timeout(INSPECT_TIMEOUT)? {
        Some(status) => {
            let stdout = child
                .stdout
                .take()
                .map(std::io::read_to_string)
                .transpose()?
                .unwrap_or_default();
            let stderr = child
                .stderr
                .take()
                .map(std::io::read_to_string)
                .transpose()?
                .unwrap_or_default();

            Ok(Output {
                status,
                stdout: stdout.into_bytes(),
                stderr: stderr.into_bytes(),
            })
        }
        None => {
            let _ = child.kill();
            let _ = child.wait();
            Err(InspectError::Timeout {
                seconds: INSPECT_TIMEOUT.as_secs(),
            })
        }
    }
}
