//! Shared release pipeline types for brewtap.
//!
//! This crate holds the vocabulary every publishing stage speaks: the run
//! context built from configuration and build output, repository identifiers,
//! archive checksums, the error taxonomy and the [`backends::ReleaseBackend`]
//! trait.
//!
//! # Modules
//!
//! - [`config`] - `brewtap.yaml` configuration types
//! - [`context`] - per-run release context
//! - [`checksum`] - SHA-256 of built archives
//! - [`repo`] - `owner/name` repository identifiers
//! - [`backends`] - publishing stage trait and results
//! - [`error`] - error types

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod backends;
pub mod checksum;
pub mod config;
pub mod context;
pub mod error;
pub mod repo;

// Re-export main types
pub use backends::{PublishResult, PublishStatus, ReleaseBackend};
pub use config::{ArchiveConfig, BrewConfig, BuildConfig, ProjectConfig, ReleaseRepoConfig};
pub use context::{DARWIN_AMD64, ReleaseContext};
pub use error::{Error, RemoteOperation, Result};
pub use repo::RepoSlug;
