use std::path::PathBuf;
use thiserror::Error;

/// Errors from report assembly and artifact storage.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Artifact names must stay flat inside the scoped directory.
    #[error("artifact name must not contain path separators: '{name}'")]
    InvalidArtifactName { name: String },

    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ReportError>;
