//! Derives formula template data from the release context.

use crate::client::{RepositoryClient, RepositoryMetadata};
use crate::formula::{TemplateData, formula_name_for};
use brewtap_release::checksum::{archive_path, sha256_file};
use brewtap_release::error::{Error, Result};
use brewtap_release::{DARWIN_AMD64, RepoSlug, ReleaseContext};
use std::path::Path;
use tracing::debug;

/// Description used when the repository does not declare one.
pub const PLACEHOLDER_DESCRIPTION: &str = "TODO";

/// The subset of the release context the deriver reads.
#[derive(Debug, Clone, Copy)]
pub struct FormulaInputs<'a> {
    /// Repository whose release triggered the run
    pub release_repo: &'a RepoSlug,
    /// Release tag
    pub tag: &'a str,
    /// Executable name
    pub binary_name: &'a str,
    /// Archive extension
    pub format: &'a str,
    /// Post-install note
    pub caveats: &'a str,
    /// Base filename of the darwin/amd64 archive, if one was built
    pub darwin_file: Option<&'a str>,
    /// Directory holding the built archives
    pub dist: &'a Path,
}

impl<'a> FormulaInputs<'a> {
    /// Borrows the deriver inputs from a run context.
    #[must_use]
    pub fn from_context(ctx: &'a ReleaseContext, release_repo: &'a RepoSlug) -> Self {
        Self {
            release_repo,
            tag: &ctx.tag,
            binary_name: &ctx.config.build.binary_name,
            format: &ctx.config.archive.format,
            caveats: &ctx.config.brew.caveats,
            darwin_file: ctx.archive(DARWIN_AMD64),
            dist: &ctx.config.dist,
        }
    }

    /// Base filename of the darwin/amd64 archive.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoDarwinBuild`] if the archive is missing or empty.
    pub fn darwin_archive(&self) -> Result<&'a str> {
        self.darwin_file
            .filter(|file| !file.is_empty())
            .ok_or(Error::NoDarwinBuild)
    }
}

/// Homepage of the formula: the declared homepage, else the repository URL.
#[must_use]
pub fn homepage_for(metadata: &RepositoryMetadata) -> String {
    match metadata.homepage.as_deref() {
        Some(homepage) if !homepage.is_empty() => homepage.to_string(),
        _ => metadata.html_url.clone(),
    }
}

/// Description of the formula: the declared description, else a placeholder.
#[must_use]
pub fn description_for(metadata: &RepositoryMetadata) -> String {
    metadata
        .description
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_DESCRIPTION.to_string())
}

/// Builds the template data for a release.
///
/// Reads the release repository's metadata, checks that a darwin/amd64
/// archive was built and hashes it from the dist directory.
///
/// # Errors
///
/// Propagates the repository lookup failure, [`Error::NoDarwinBuild`] and
/// checksum failures as they are returned.
pub async fn derive_template_data<C>(client: &C, inputs: &FormulaInputs<'_>) -> Result<TemplateData>
where
    C: RepositoryClient + ?Sized,
{
    let metadata = client.repository(inputs.release_repo).await?;

    let file = inputs.darwin_archive()?;
    let path = archive_path(inputs.dist, file, inputs.format);
    let sha256 = sha256_file(&path)?;

    debug!(
        archive = %path.display(),
        sha256 = %sha256,
        "Computed archive checksum"
    );

    Ok(TemplateData {
        name: formula_name_for(inputs.binary_name),
        desc: description_for(&metadata),
        homepage: homepage_for(&metadata),
        repo: inputs.release_repo.to_string(),
        tag: inputs.tag.to_string(),
        binary_name: inputs.binary_name.to_string(),
        caveats: inputs.caveats.to_string(),
        file: file.to_string(),
        format: inputs.format.to_string(),
        sha256,
    })
}
