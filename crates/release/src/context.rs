//! Per-run release context.
//!
//! Holds everything a publishing stage reads: the project configuration, the
//! tag being released, the archives produced by the build and the token used
//! to talk to GitHub.

use crate::config::ProjectConfig;
use secrecy::SecretString;
use std::collections::HashMap;

/// Platform key of the macOS x86_64 archive.
pub const DARWIN_AMD64: &str = "darwinamd64";

/// Context for a single pipeline run.
#[derive(Debug)]
pub struct ReleaseContext {
    /// Project configuration
    pub config: ProjectConfig,
    /// Tag of the release being published (e.g. `v1.2.0`)
    pub tag: String,
    /// Platform key (`<os><arch>`) to archive base filename
    pub archives: HashMap<String, String>,
    /// GitHub token, if any
    pub token: Option<SecretString>,
}

impl ReleaseContext {
    /// Creates a context for `tag` with no archives and no token.
    #[must_use]
    pub fn new(config: ProjectConfig, tag: impl Into<String>) -> Self {
        Self {
            config,
            tag: tag.into(),
            archives: HashMap::new(),
            token: None,
        }
    }

    /// Registers the archive built for `platform`.
    #[must_use]
    pub fn with_archive(mut self, platform: impl Into<String>, file: impl Into<String>) -> Self {
        self.archives.insert(platform.into(), file.into());
        self
    }

    /// Sets the GitHub token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(SecretString::from(token.into()));
        self
    }

    /// Archive base filename for `platform`, if one was built.
    #[must_use]
    pub fn archive(&self, platform: &str) -> Option<&str> {
        self.archives
            .get(platform)
            .map(String::as_str)
            .filter(|file| !file.is_empty())
    }
}

/// Parses a `platform=file` pair as given on the command line.
#[must_use]
pub fn parse_archive_arg(arg: &str) -> Option<(String, String)> {
    let (platform, file) = arg.split_once('=')?;
    let platform = platform.trim();
    if platform.is_empty() {
        return None;
    }
    Some((platform.to_string(), file.trim().to_string()))
}
