//! Homebrew backend for brewtap releases.
//!
//! Generates the formula for a release and pushes it to a tap repository.

use crate::client::{CommitMeta, RepositoryClient};
use crate::data::{FormulaInputs, derive_template_data};
use crate::formula::FormulaGenerator;
use crate::publish::{formula_path, publish_file};
use brewtap_release::backends::{PublishResult, ReleaseBackend};
use brewtap_release::error::Result;
use brewtap_release::{RepoSlug, ReleaseContext};
use std::future::Future;
use std::pin::Pin;
use tracing::{debug, info};

const BACKEND_NAME: &str = "Homebrew";

/// Homebrew backend for updating tap repositories.
pub struct HomebrewBackend<C> {
    client: C,
}

impl<C: RepositoryClient> HomebrewBackend<C> {
    /// Creates a new Homebrew backend using `client` for all remote calls.
    #[must_use]
    pub const fn new(client: C) -> Self {
        Self { client }
    }

    /// The client used for remote calls.
    #[must_use]
    pub const fn client(&self) -> &C {
        &self.client
    }

    /// Derives and renders the formula without publishing it.
    ///
    /// # Errors
    ///
    /// Returns any error from deriving the template data or rendering it.
    pub async fn generate_formula(&self, ctx: &ReleaseContext) -> Result<String> {
        let release_repo = RepoSlug::parse(&ctx.config.release.repo)?;
        let inputs = FormulaInputs::from_context(ctx, &release_repo);
        let data = derive_template_data(&self.client, &inputs).await?;
        FormulaGenerator::render(&data)
    }

    async fn run(&self, ctx: &ReleaseContext) -> Result<PublishResult> {
        if !ctx.config.brew.is_enabled() {
            info!("No Homebrew tap configured, skipping");
            return Ok(PublishResult::skipped(
                BACKEND_NAME,
                "No Homebrew tap configured",
            ));
        }

        let tap = RepoSlug::parse(&ctx.config.brew.repo)?;
        let binary_name = &ctx.config.build.binary_name;
        let path = formula_path(&ctx.config.brew.folder, binary_name);

        info!(path = %path, tap = %tap, "Updating formula");

        let formula = self.generate_formula(ctx).await?;

        debug!(formula_len = formula.len(), "Generated formula");

        let commit = CommitMeta::for_release(binary_name, &ctx.tag);
        let status = publish_file(&self.client, &tap, &path, formula.as_bytes(), &commit).await?;

        let url = format!("{}/blob/HEAD/{path}", tap.html_url());
        Ok(PublishResult::written(
            BACKEND_NAME,
            status,
            format!("Formula {path} {status} in {tap}"),
            url,
        ))
    }
}

impl<C: RepositoryClient> ReleaseBackend for HomebrewBackend<C> {
    fn name(&self) -> &'static str {
        BACKEND_NAME
    }

    fn description(&self) -> &'static str {
        "Creating homebrew formulae..."
    }

    fn publish<'a>(
        &'a self,
        ctx: &'a ReleaseContext,
    ) -> Pin<Box<dyn Future<Output = Result<PublishResult>> + Send + 'a>> {
        Box::pin(async move {
            info!("{}", self.description());
            self.run(ctx).await
        })
    }
}
