use crate::tracing::{LogLevel, TracingFormat};
use brewtap_release::config::DEFAULT_CONFIG_FILE;
use brewtap_release::context::parse_archive_arg;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "brewtap")]
#[command(about = "Publish a Homebrew formula for a GitHub release")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        short = 'l',
        long,
        global = true,
        help = "Set logging level",
        default_value = "warn",
        value_enum
    )]
    pub level: LogLevel,

    #[arg(
        long,
        global = true,
        help = "Log output format",
        default_value = "compact",
        value_enum
    )]
    pub log_format: TracingFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Create or update the formula in the tap repository")]
    Publish(ReleaseArgs),
    #[command(about = "Print the formula without publishing it")]
    Render(ReleaseArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ReleaseArgs {
    #[arg(
        long,
        short = 'c',
        help = "Path to the project configuration",
        default_value = DEFAULT_CONFIG_FILE
    )]
    pub config: PathBuf,

    #[arg(long, short = 't', help = "Tag of the release being published")]
    pub tag: String,

    #[arg(
        long = "archive",
        short = 'a',
        help = "Built archive as <platform>=<file>, e.g. darwinamd64=tool_Darwin_x86_64",
        value_parser = parse_archive
    )]
    pub archives: Vec<(String, String)>,

    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, help = "GitHub token")]
    pub token: Option<String>,
}

fn parse_archive(arg: &str) -> Result<(String, String), String> {
    parse_archive_arg(arg).ok_or_else(|| format!("expected <platform>=<file>, got '{arg}'"))
}

pub fn parse() -> Cli {
    Cli::parse()
}
