//! Release distribution backends.
//!
//! This module defines the [`ReleaseBackend`] trait that provider crates
//! implement to publish a release to a distribution channel.
//!
//! # Architecture
//!
//! The release crate provides:
//! - [`ReleaseBackend`] trait - interface for a publishing stage
//! - [`PublishResult`] - result type for publish operations
//!
//! Provider crates implement `ReleaseBackend`:
//! - `brewtap-homebrew` - Homebrew tap updates
//!
//! # Example
//!
//! ```rust,ignore
//! use brewtap_release::backends::{PublishResult, ReleaseBackend};
//! use brewtap_release::ReleaseContext;
//!
//! struct MyBackend;
//!
//! impl ReleaseBackend for MyBackend {
//!     fn name(&self) -> &'static str { "my-backend" }
//!     fn description(&self) -> &'static str { "Publishing..." }
//!
//!     fn publish<'a>(
//!         &'a self,
//!         ctx: &'a ReleaseContext,
//!     ) -> Pin<Box<dyn Future<Output = Result<PublishResult>> + Send + 'a>> {
//!         Box::pin(async move { Ok(PublishResult::skipped("my-backend", "Nothing to do")) })
//!     }
//! }
//! ```

use crate::context::ReleaseContext;
use crate::error::Result;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// What a publish operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishStatus {
    /// The backend is not configured for this project; nothing was written.
    Skipped,
    /// A new file was created.
    Created,
    /// An existing file was replaced.
    Updated,
}

impl fmt::Display for PublishStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skipped => write!(f, "skipped"),
            Self::Created => write!(f, "created"),
            Self::Updated => write!(f, "updated"),
        }
    }
}

/// Result of a backend publish operation.
#[derive(Debug, Clone)]
pub struct PublishResult {
    /// Name of the backend
    pub backend: String,
    /// What was done
    pub status: PublishStatus,
    /// URL of the published file (if any)
    pub url: Option<String>,
    /// Human-readable message
    pub message: String,
}

impl PublishResult {
    /// Creates a result for a backend that had nothing to do.
    #[must_use]
    pub fn skipped(backend: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            backend: backend.into(),
            status: PublishStatus::Skipped,
            url: None,
            message: message.into(),
        }
    }

    /// Creates a result for a successful write.
    #[must_use]
    pub fn written(
        backend: impl Into<String>,
        status: PublishStatus,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            backend: backend.into(),
            status,
            url: Some(url.into()),
            message: message.into(),
        }
    }

    /// Whether the backend wrote anything.
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        self.status == PublishStatus::Skipped
    }
}

/// Trait for release distribution backends.
///
/// Each backend is one stage of the release pipeline and publishes to a
/// single distribution channel.
pub trait ReleaseBackend: Send + Sync {
    /// Returns the name of this backend (e.g., "Homebrew").
    fn name(&self) -> &'static str;

    /// One-line description logged when the stage starts.
    fn description(&self) -> &'static str;

    /// Publishes the release described by `ctx`.
    ///
    /// A backend that is not configured for the project returns a
    /// [`PublishStatus::Skipped`] result rather than an error.
    fn publish<'a>(
        &'a self,
        ctx: &'a ReleaseContext,
    ) -> Pin<Box<dyn Future<Output = Result<PublishResult>> + Send + 'a>>;
}
