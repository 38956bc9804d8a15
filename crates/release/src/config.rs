//! Project configuration types.
//!
//! This module defines the Rust representation of the `brewtap.yaml` file
//! that describes how a project is built, archived and published.

use crate::error::{Error, Result};
use crate::repo::RepoSlug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "brewtap.yaml";

/// Complete project configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Build settings.
    pub build: BuildConfig,
    /// Archive settings.
    pub archive: ArchiveConfig,
    /// Release repository settings.
    pub release: ReleaseRepoConfig,
    /// Homebrew tap settings.
    pub brew: BrewConfig,
    /// Directory containing the built archives.
    pub dist: PathBuf,
}

/// Build-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Name of the executable inside the archives.
    pub binary_name: String,
}

/// Archive-related configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveConfig {
    /// Archive extension without the leading dot (e.g. `tar.gz`, `zip`).
    pub format: String,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            format: "tar.gz".to_string(),
        }
    }
}

/// Repository the release artifacts are published to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseRepoConfig {
    /// Repository in `owner/name` form.
    pub repo: String,
}

/// Homebrew tap configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrewConfig {
    /// Tap repository in `owner/name` form. Empty disables the Homebrew stage.
    pub repo: String,
    /// Folder inside the tap where the formula is written.
    pub folder: String,
    /// Text shown to the user after installation.
    pub caveats: String,
}

impl BrewConfig {
    /// Whether a tap repository is configured.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.repo.trim().is_empty()
    }
}

impl ProjectConfig {
    /// Loads and validates the configuration at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid YAML, or
    /// fails [`ProjectConfig::validate`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses configuration from YAML text without validating it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] if the text is not valid YAML for this schema.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let mut config: Self = serde_yaml::from_str(content)?;
        if config.dist.as_os_str().is_empty() {
            config.dist = PathBuf::from("dist");
        }
        Ok(config)
    }

    /// Checks the fields every run depends on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.build.binary_name.trim().is_empty() {
            return Err(Error::config(
                "build.binary_name is required",
                "Set build.binary_name to the executable name inside the archives",
            ));
        }
        if self.archive.format.trim().is_empty() {
            return Err(Error::config(
                "archive.format must not be empty",
                "Use the archive extension, e.g. 'tar.gz' or 'zip'",
            ));
        }
        RepoSlug::parse(&self.release.repo)?;
        if self.brew.is_enabled() {
            RepoSlug::parse(&self.brew.repo)?;
        }
        Ok(())
    }
}
