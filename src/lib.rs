//! WordPress release pipeline utilities.
//!
//! This crate provides the library behind the `wp-*` command-line tools used
//! by the container image build pipeline: resolving the latest WordPress
//! release, fetching and verifying release artefacts, deriving image tags,
//! and resolving the base image digest. Each binary is a thin shell over one
//! of these modules.
//!
//! # Modules
//!
//! - [`checksum`] - Published release checksum resolution
//! - [`cli`] - Command-line argument definitions for all tools
//! - [`digest`] - Algorithm-prefixed image digest newtype
//! - [`download`] - Blocking HTTP download with a shared agent
//! - [`endpoints`] - Upstream URL construction
//! - [`error`] - Semantic error types shared by the tools
//! - [`extraction`] - Tar.gz extraction with prefix stripping
//! - [`fetch`] - Asset fetch, verify, and extract orchestration
//! - [`inspect`] - Base image digest resolution via docker buildx
//! - [`output`] - Result and progress line writers for the binaries
//! - [`sha1_digest`] - SHA-1 digest newtype and file hashing
//! - [`tags`] - Image tag derivation
//! - [`version`] - Latest-version resolution from the version-check API

pub mod checksum;
pub mod cli;
pub mod digest;
pub mod download;
pub mod endpoints;
pub mod error;
pub mod extraction;
pub mod fetch;
pub mod inspect;
pub mod output;
pub mod sha1_digest;
pub mod tags;
pub mod version;
