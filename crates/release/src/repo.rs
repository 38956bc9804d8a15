//! Repository identifiers in `owner/name` form.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A GitHub repository identified by owner and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoSlug {
    /// Repository owner (user or organisation)
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl RepoSlug {
    /// Creates a slug from its parts.
    #[must_use]
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parses `owner/name`, splitting on the first slash.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when either half is missing.
    pub fn parse(slug: &str) -> Result<Self> {
        match slug.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() => {
                Ok(Self::new(owner, name))
            }
            _ => Err(Error::config(
                format!("Invalid repository '{slug}'"),
                "Expected 'owner/repo', e.g. 'acme/homebrew-tap'",
            )),
        }
    }

    /// Web URL of the repository.
    #[must_use]
    pub fn html_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepoSlug {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let slug = RepoSlug::parse("acme/homebrew-tap").unwrap();
        assert_eq!(slug.owner, "acme");
        assert_eq!(slug.name, "homebrew-tap");
        assert_eq!(slug.to_string(), "acme/homebrew-tap");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(RepoSlug::parse("invalid").is_err());
        assert!(RepoSlug::parse("").is_err());
        assert!(RepoSlug::parse("/repo").is_err());
        assert!(RepoSlug::parse("owner/").is_err());
    }

    #[test]
    fn test_parse_multiple_slashes() {
        // Should only split on first slash
        let slug = RepoSlug::parse("owner/repo/extra").unwrap();
        assert_eq!(slug.owner, "owner");
        assert_eq!(slug.name, "repo/extra");
    }

    #[test]
    fn test_from_str() {
        let slug: RepoSlug = "my-org/tool".parse().unwrap();
        assert_eq!(slug, RepoSlug::new("my-org", "tool"));
    }

    #[test]
    fn test_html_url() {
        let slug = RepoSlug::new("acme", "tool");
        assert_eq!(slug.html_url(), "https://github.com/acme/tool");
    }
}
