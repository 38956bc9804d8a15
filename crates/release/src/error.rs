//! Error types for the release pipeline stages.

use miette::Diagnostic;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for release operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error returned by a remote repository client.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The remote call that produced an [`Error::Remote`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteOperation {
    /// Reading repository metadata (homepage, description).
    Repository,
    /// Probing for existing file content.
    GetContent,
    /// Creating a new file.
    CreateFile,
    /// Replacing an existing file.
    UpdateFile,
}

impl fmt::Display for RemoteOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Repository => write!(f, "repository lookup"),
            Self::GetContent => write!(f, "content lookup"),
            Self::CreateFile => write!(f, "file create"),
            Self::UpdateFile => write!(f, "file update"),
        }
    }
}

/// Errors that can occur while deriving, rendering or publishing a formula.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// The release has no darwin/amd64 archive.
    #[error("brew tap requires a darwin amd64 build")]
    #[diagnostic(
        code(brewtap::release::no_darwin_build),
        help("Pass the macOS x86_64 archive with --archive darwinamd64=<file>")
    )]
    NoDarwinBuild,

    /// The archive could not be read for checksumming.
    #[error("Failed to checksum {}: {source}", .path.display())]
    #[diagnostic(
        code(brewtap::release::checksum),
        help("Check that the archive exists in the dist directory and is readable")
    )]
    Checksum {
        /// The archive that was being hashed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A call to the remote repository host failed.
    #[error("GitHub {operation} failed: {source}")]
    #[diagnostic(code(brewtap::release::remote))]
    Remote {
        /// Which call failed
        operation: RemoteOperation,
        /// The error returned by the client
        #[source]
        source: BoxError,
    },

    /// Writing the rendered formula failed.
    #[error("Failed to render formula: {source}")]
    #[diagnostic(code(brewtap::release::render))]
    Render {
        /// The formatter error
        #[source]
        source: fmt::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    #[diagnostic(code(brewtap::release::config), help("{help}"))]
    Config {
        /// The error message
        message: String,
        /// Help text for the user
        help: String,
    },

    /// The configuration file could not be read.
    #[error("Failed to read configuration file {}", .path.display())]
    #[diagnostic(
        code(brewtap::release::config_read),
        help("Pass the configuration path with --config")
    )]
    ConfigRead {
        /// The configuration file path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Wrapped YAML parsing error.
    #[error("YAML parse error: {0}")]
    #[diagnostic(code(brewtap::release::yaml_parse))]
    ConfigParse(#[from] serde_yaml::Error),
}

impl Error {
    /// Create a new checksum error.
    #[must_use]
    pub fn checksum(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Checksum {
            path: path.into(),
            source,
        }
    }

    /// Create a new remote error from any client error.
    #[must_use]
    pub fn remote(operation: RemoteOperation, source: impl Into<BoxError>) -> Self {
        Self::Remote {
            operation,
            source: source.into(),
        }
    }

    /// Create a new configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            help: help.into(),
        }
    }

    /// Returns true for the missing darwin/amd64 precondition.
    #[must_use]
    pub const fn is_no_darwin_build(&self) -> bool {
        matches!(self, Self::NoDarwinBuild)
    }
}

impl From<fmt::Error> for Error {
    fn from(source: fmt::Error) -> Self {
        Self::Render { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_darwin_build_message() {
        let err = Error::NoDarwinBuild;
        assert_eq!(err.to_string(), "brew tap requires a darwin amd64 build");
        assert!(err.is_no_darwin_build());
    }

    #[test]
    fn test_checksum_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::checksum("dist/app.tar.gz", io_err);
        assert!(err.to_string().contains("dist/app.tar.gz"));
        assert!(err.to_string().contains("file not found"));
        assert!(!err.is_no_darwin_build());
    }

    #[test]
    fn test_remote_error_keeps_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset by peer");
        let err = Error::remote(RemoteOperation::UpdateFile, io_err);
        assert!(err.to_string().contains("file update"));
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("reset by peer"));
    }

    #[test]
    fn test_remote_error_from_string() {
        let err = Error::remote(RemoteOperation::GetContent, "401 Bad credentials");
        assert!(err.to_string().contains("content lookup"));
        assert!(err.to_string().contains("Bad credentials"));
    }

    #[test]
    fn test_render_error_from_fmt() {
        let err: Error = fmt::Error.into();
        assert!(err.to_string().contains("render formula"));
    }

    #[test]
    fn test_config_error() {
        let err = Error::config("bad config", "check your settings");
        assert!(err.to_string().contains("bad config"));
    }

    #[test]
    fn test_error_debug() {
        let err = Error::NoDarwinBuild;
        let debug = format!("{err:?}");
        assert!(debug.contains("NoDarwinBuild"));
    }
}
