//! Remote repository client interface.
//!
//! The Homebrew stage only needs four calls from a repository host. They are
//! expressed as a trait so the publish protocol can run against GitHub or an
//! in-memory double.

use async_trait::async_trait;
use brewtap_release::RepoSlug;
use brewtap_release::error::Result;

/// Name of the identity that authors formula commits.
pub const COMMIT_AUTHOR_NAME: &str = "goreleaserbot";
/// Email of the identity that authors formula commits.
pub const COMMIT_AUTHOR_EMAIL: &str = "bot@goreleaser";

/// Repository metadata used to describe the formula.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryMetadata {
    /// Declared homepage, if any
    pub homepage: Option<String>,
    /// Declared description, if any
    pub description: Option<String>,
    /// Canonical web URL
    pub html_url: String,
}

/// An existing file in a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistingContent {
    /// Content hash the host requires to replace the file
    pub sha: String,
}

/// Outcome of probing a path. Failures are reported through `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentLookup {
    /// The path exists.
    Found(ExistingContent),
    /// The path does not exist.
    NotFound,
}

/// Commit metadata attached to a file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMeta {
    /// Commit message
    pub message: String,
    /// Committer name
    pub author_name: String,
    /// Committer email
    pub author_email: String,
}

impl CommitMeta {
    /// Commit for publishing `binary_name` at `tag`: `"<binary> version <tag>"`.
    #[must_use]
    pub fn for_release(binary_name: &str, tag: &str) -> Self {
        Self {
            message: format!("{binary_name} version {tag}"),
            author_name: COMMIT_AUTHOR_NAME.to_string(),
            author_email: COMMIT_AUTHOR_EMAIL.to_string(),
        }
    }
}

/// Client for a remote repository host.
#[async_trait]
pub trait RepositoryClient: Send + Sync {
    /// Reads homepage, description and web URL of `repo`.
    async fn repository(&self, repo: &RepoSlug) -> Result<RepositoryMetadata>;

    /// Looks up `path` in `repo`.
    async fn get_content(&self, repo: &RepoSlug, path: &str) -> Result<ContentLookup>;

    /// Creates `path` in `repo` with `content`.
    async fn create_file(
        &self,
        repo: &RepoSlug,
        path: &str,
        content: &[u8],
        commit: &CommitMeta,
    ) -> Result<()>;

    /// Replaces `path` in `repo`; `sha` must be the hash of the current content.
    async fn update_file(
        &self,
        repo: &RepoSlug,
        path: &str,
        content: &[u8],
        commit: &CommitMeta,
        sha: &str,
    ) -> Result<()>;
}
