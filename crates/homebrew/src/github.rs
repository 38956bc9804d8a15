//! GitHub implementation of [`RepositoryClient`] over the REST contents API.

use crate::client::{
    CommitMeta, ContentLookup, ExistingContent, RepositoryClient, RepositoryMetadata,
};
use async_trait::async_trait;
use brewtap_release::error::{Error, RemoteOperation, Result};
use brewtap_release::RepoSlug;
use octocrab::Octocrab;
use octocrab::models::repos::CommitAuthor;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

/// Repository client backed by the GitHub API.
pub struct GitHubClient {
    client: Octocrab,
}

impl GitHubClient {
    /// Wraps an existing Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Creates a client, authenticated when a token is given.
    ///
    /// The client is built without a retry layer, so each call sends one
    /// request.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_token(token: Option<&SecretString>) -> Result<Self> {
        let mut builder = Octocrab::builder();
        if let Some(token) = token {
            builder = builder.personal_token(token.expose_secret().to_string());
        }
        let client = builder.build().map_err(|e| {
            Error::config(
                format!("Failed to create GitHub client: {e}"),
                "Check the GitHub token and TLS configuration",
            )
        })?;
        Ok(Self::new(client))
    }
}

fn committer(commit: &CommitMeta) -> CommitAuthor {
    CommitAuthor {
        name: commit.author_name.clone(),
        email: Some(commit.author_email.clone()),
        date: None,
    }
}

#[async_trait]
impl RepositoryClient for GitHubClient {
    async fn repository(&self, repo: &RepoSlug) -> Result<RepositoryMetadata> {
        let repository = self
            .client
            .repos(&repo.owner, &repo.name)
            .get()
            .await
            .map_err(|e| Error::remote(RemoteOperation::Repository, e))?;

        Ok(RepositoryMetadata {
            homepage: repository.homepage,
            description: repository.description,
            html_url: repository
                .html_url
                .map_or_else(|| repo.html_url(), |url| url.to_string()),
        })
    }

    async fn get_content(&self, repo: &RepoSlug, path: &str) -> Result<ContentLookup> {
        let result = self
            .client
            .repos(&repo.owner, &repo.name)
            .get_content()
            .path(path)
            .send()
            .await;

        match result {
            Ok(content) => match content.items.into_iter().next() {
                Some(item) => Ok(ContentLookup::Found(ExistingContent { sha: item.sha })),
                None => Ok(ContentLookup::NotFound),
            },
            Err(octocrab::Error::GitHub { source, .. }) if source.status_code.as_u16() == 404 => {
                debug!(repo = %repo, path = %path, "Contents API returned 404");
                Ok(ContentLookup::NotFound)
            }
            Err(e) => Err(Error::remote(RemoteOperation::GetContent, e)),
        }
    }

    async fn create_file(
        &self,
        repo: &RepoSlug,
        path: &str,
        content: &[u8],
        commit: &CommitMeta,
    ) -> Result<()> {
        self.client
            .repos(&repo.owner, &repo.name)
            .create_file(path, &commit.message, content)
            .commiter(committer(commit))
            .send()
            .await
            .map_err(|e| Error::remote(RemoteOperation::CreateFile, e))?;
        Ok(())
    }

    async fn update_file(
        &self,
        repo: &RepoSlug,
        path: &str,
        content: &[u8],
        commit: &CommitMeta,
        sha: &str,
    ) -> Result<()> {
        self.client
            .repos(&repo.owner, &repo.name)
            .update_file(path, &commit.message, content, sha)
            .commiter(committer(commit))
            .send()
            .await
            .map_err(|e| Error::remote(RemoteOperation::UpdateFile, e))?;
        Ok(())
    }
}
