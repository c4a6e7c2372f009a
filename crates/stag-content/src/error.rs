//! Errors raised while loading world content.

use std::path::PathBuf;

use stag_core::error::DomainError;

/// Content loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The definition file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The definition is not valid YAML or does not fit the schema.
    #[error("failed to parse world definition: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The definition parsed but describes an inconsistent world.
    #[error("invalid world definition: {0}")]
    Invalid(String),

    /// Building the world model failed.
    #[error(transparent)]
    Domain(#[from] DomainError),
}
