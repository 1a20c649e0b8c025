//! Error types for configuration resolution.
//!
//! Every failure surfaced by the resolver, the merge engine and the
//! configuration loader is a [`ConfigError`]. Most variants abort the build;
//! [`ConfigError::NoContentFilesFound`] is a warning that travels alongside a
//! successful result (see [`ConfigError::is_fatal`]).

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The `content` list is empty.
    #[error("no content sources configured: `content` must list at least one path pattern")]
    EmptyContentSources,

    /// None of the content patterns matched a file.
    ///
    /// Reported as a warning: a fresh project may have no sources yet.
    #[error("no content files matched any of the configured patterns: {}", .patterns.join(", "))]
    NoContentFilesFound {
        /// The patterns that were expanded.
        patterns: Vec<String>,
    },

    /// A theme value is neither a scalar nor a mapping.
    #[error("invalid token value at '{path}': {message}")]
    InvalidTokenValue {
        /// Dotted category path of the offending value (e.g. `colors.ny-red`).
        path: String,
        /// What was found instead.
        message: String,
    },

    /// A content pattern could not be compiled.
    #[error("invalid content pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The raw pattern as declared.
        pattern: String,
        /// Error message from the glob compiler.
        message: String,
    },

    /// A configuration document could not be parsed.
    #[error("failed to parse configuration{}: {message}", location(.path))]
    Parse {
        /// Source file, when the document came from disk.
        path: Option<PathBuf>,
        /// Error message from the YAML/JSON parser.
        message: String,
    },

    /// A configuration file could not be read.
    #[error("failed to load configuration {}: {message}", .path.display())]
    Load {
        /// The file that failed to load.
        path: PathBuf,
        /// Underlying I/O error message.
        message: String,
    },

    /// No configuration file was found in the searched directory.
    #[error("no configuration file found in {}", .root.display())]
    NotFound {
        /// The directory that was searched.
        root: PathBuf,
    },
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

impl ConfigError {
    /// Returns `false` for diagnostics that must not abort a build.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ConfigError::NoContentFilesFound { .. })
    }

    pub(crate) fn invalid_token(path: &[&str], message: impl Into<String>) -> Self {
        ConfigError::InvalidTokenValue {
            path: path.join("."),
            message: message.into(),
        }
    }
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
