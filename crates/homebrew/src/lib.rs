//! Homebrew tap provider for brewtap.
//!
//! This crate provides the [`HomebrewBackend`] for publishing a release's
//! macOS archive to a Homebrew tap repository.
//!
//! # Features
//!
//! - Formula data derived from the release repository and the built archive
//! - Formula rendering with an optional `caveats` block
//! - Idempotent create-or-update of the formula via the GitHub contents API
//!
//! # Example
//!
//! ```rust,ignore
//! use brewtap_homebrew::{GitHubClient, HomebrewBackend};
//! use brewtap_release::ReleaseBackend;
//!
//! let client = GitHubClient::from_token(ctx.token.as_ref())?;
//! let result = HomebrewBackend::new(client).publish(&ctx).await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

mod backend;
pub mod client;
mod data;
mod formula;
mod github;
mod publish;

pub use backend::HomebrewBackend;
pub use client::{
    CommitMeta, ContentLookup, ExistingContent, RepositoryClient, RepositoryMetadata,
};
pub use data::{
    FormulaInputs, PLACEHOLDER_DESCRIPTION, derive_template_data, description_for, homepage_for,
};
pub use formula::{FORMULA_BASE_CLASS, FormulaGenerator, TemplateData, formula_name_for};
pub use github::GitHubClient;
pub use publish::{formula_path, publish_file};
