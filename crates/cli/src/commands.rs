//! Command execution.

use crate::cli::{Commands, ReleaseArgs};
use brewtap_homebrew::{GitHubClient, HomebrewBackend};
use brewtap_release::{ProjectConfig, PublishResult, ReleaseBackend, ReleaseContext};
use tracing::{info, instrument};

/// Builds the run context from the configuration file and CLI arguments.
pub fn build_context(args: &ReleaseArgs) -> miette::Result<ReleaseContext> {
    let config = ProjectConfig::load(&args.config)?;
    let mut ctx = ReleaseContext::new(config, args.tag.clone());
    for (platform, file) in &args.archives {
        ctx = ctx.with_archive(platform.clone(), file.clone());
    }
    if let Some(token) = args.token.as_ref().filter(|t| !t.is_empty()) {
        ctx = ctx.with_token(token.clone());
    }
    Ok(ctx)
}

/// Output of a command, written to stdout by `main`.
#[derive(Debug)]
pub enum Output {
    /// A publish result message
    Published(PublishResult),
    /// A rendered formula
    Formula(String),
}

#[instrument(skip_all)]
pub async fn execute(command: Commands) -> miette::Result<Output> {
    match command {
        Commands::Publish(args) => {
            let ctx = build_context(&args)?;
            let backend = HomebrewBackend::new(GitHubClient::from_token(ctx.token.as_ref())?);
            let result = backend.publish(&ctx).await?;
            info!(status = %result.status, "Homebrew stage finished");
            Ok(Output::Published(result))
        }
        Commands::Render(args) => {
            let ctx = build_context(&args)?;
            let backend = HomebrewBackend::new(GitHubClient::from_token(ctx.token.as_ref())?);
            let formula = backend.generate_formula(&ctx).await?;
            Ok(Output::Formula(formula))
        }
    }
}
