//! Idempotent create-or-update of a file in a repository.

use crate::client::{CommitMeta, ContentLookup, RepositoryClient};
use brewtap_release::error::Result;
use brewtap_release::{PublishStatus, RepoSlug};
use tracing::{debug, info};

/// Path of the formula inside the tap: `<folder>/<binary>.rb`.
#[must_use]
pub fn formula_path(folder: &str, binary_name: &str) -> String {
    let folder = folder.trim_matches('/');
    if folder.is_empty() {
        format!("{binary_name}.rb")
    } else {
        format!("{folder}/{binary_name}.rb")
    }
}

/// Writes `content` to `path` in `repo`, creating or updating as needed.
///
/// Looks up the path first. A missing file is created; an existing one is
/// replaced using its content hash, so a concurrent edit makes the update
/// fail instead of being overwritten. Any lookup failure aborts before a
/// write is attempted. Exactly one write is issued on success.
///
/// # Errors
///
/// Returns the client error from the lookup or the write unchanged.
pub async fn publish_file<C>(
    client: &C,
    repo: &RepoSlug,
    path: &str,
    content: &[u8],
    commit: &CommitMeta,
) -> Result<PublishStatus>
where
    C: RepositoryClient + ?Sized,
{
    debug!(
        owner = %repo.owner,
        repo = %repo.name,
        path = %path,
        "Probing for existing formula"
    );

    match client.get_content(repo, path).await? {
        ContentLookup::NotFound => {
            debug!("Creating new formula");
            client.create_file(repo, path, content, commit).await?;
            info!(repo = %repo, path = %path, "Created formula");
            Ok(PublishStatus::Created)
        }
        ContentLookup::Found(existing) => {
            debug!(sha = %existing.sha, "Updating existing formula");
            client
                .update_file(repo, path, content, commit, &existing.sha)
                .await?;
            info!(repo = %repo, path = %path, "Updated formula");
            Ok(PublishStatus::Updated)
        }
    }
}
