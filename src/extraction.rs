//! Tar.gz archive extraction with top-level prefix stripping.
//!
//! The WordPress release archive nests everything under a single
//! `wordpress/` directory. Extraction strips that prefix so the contents
//! land directly in the destination, and validates every entry path to
//! prevent writes outside the destination directory.

use std::path::{Component, Path};

/// Errors arising from archive extraction.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    /// I/O error during extraction.
    #[error("extraction I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A path in the archive attempts to traverse outside the destination.
    #[error("path traversal detected: {path}")]
    PathTraversal {
        /// The offending path from the archive entry.
        path: String,
    },

    /// No entries under the expected prefix were extracted.
    #[error("archive contains no entries under '{prefix}/'")]
    EmptyArchive {
        /// The prefix that was expected.
        prefix: String,
    },
}

/// Extract a gzip-compressed tar archive into `dest_dir`, stripping the
/// leading `prefix` path segment from every entry.
///
/// Entries that do not live under `prefix` are skipped, as is the bare
/// prefix directory entry itself. Each stripped path is validated before
/// unpacking so no entry can escape `dest_dir`.
///
/// Returns the number of entries extracted.
///
/// # Errors
///
/// Returns [`ExtractionError::PathTraversal`] if any stripped entry path is
/// absolute or contains `..` components.
/// Returns [`ExtractionError::EmptyArchive`] if no entries under the prefix
/// are found.
/// Returns [`ExtractionError::Io`] on I/O failures.
pub fn extract_with_prefix(
    archive_path: &Path,
    dest_dir: &Path,
    prefix: &str,
) -> Result<usize, ExtractionError> {
    let file = std::fs::File::open(archive_path)?;
    let decoder = flate2::read::GzDecoder::new(file);
    let mut archive = tar::Archive::new(decoder);
    let mut extracted = 0usize;

    for entry_result in archive.entries()? {
        let mut entry = entry_result?;
        let entry_path = entry.path()?.into_owned();

        let Ok(stripped) = entry_path.strip_prefix(prefix) else {
            log::trace!("skipping entry outside prefix: {}", entry_path.display());
            continue;
        };
        if stripped.as_os_str().is_empty() {
            // The prefix directory entry itself.
            continue;
        }

        validate_entry_path(stripped)?;

        let dest_path = dest_dir.join(stripped);
        if let Some(parent) = dest_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        entry.unpack(&dest_path)?;
        extracted += 1;
    }

    if extracted == 0 {
        return Err(ExtractionError::EmptyArchive {
            prefix: prefix.to_owned(),
        });
    }

    log::debug!("extracted {extracted} entries to {}", dest_dir.display());
    Ok(extracted)
}

/// Validate that a stripped entry path does not escape the destination
/// directory via `..` components or absolute paths.
fn validate_entry_path(path: &Path) -> Result<(), ExtractionError> {
    if path.is_absolute() {
        return Err(ExtractionError::PathTraversal {
            path: path.display().to_string(),
        });
    }
    for component in path.components() {
        if matches!(component, Component::ParentDir) {
            return Err(ExtractionError::PathTraversal {
                path: path.display().to_string(),
            });
        }
    }
    Ok(())
}
