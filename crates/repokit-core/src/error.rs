//! Error types for repokit-core

use std::path::PathBuf;

/// Result type for repokit-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in repokit-core operations
///
/// Domain errors are raised as soon as they are detected, before any
/// directory traversal starts. Per-file read failures during a scan are
/// not errors; they are recorded on the result instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A repository or scope path is missing or not a directory
    #[error("Path does not exist or is not a directory: {path}")]
    InvalidPath { path: PathBuf },

    /// A repository type outside the catalog was requested
    #[error("Unsupported repo type: {repo_type} (expected one of: {known})")]
    InvalidRepoType { repo_type: String, known: String },

    /// No sidecar to detect the repository type from
    #[error("Missing .repokit.yml in {path}. Pass --type explicitly.")]
    MetadataMissing { path: PathBuf },

    /// The sidecar exists but does not declare a known type
    #[error("Could not detect valid repo type from {path}: {detail}")]
    TypeDetection { path: PathBuf, detail: String },

    /// Scaffold target already exists and overwriting was not requested
    #[error("Target path already exists: {path}")]
    TargetExists { path: PathBuf },

    /// A template could not be rendered
    #[error("Template {template} failed to render: {message}")]
    Template { template: String, message: String },

    /// Context file operation rejected
    #[error("{message}")]
    Context { message: String },

    /// Generic invalid user input
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Filesystem error from repokit-fs
    #[error(transparent)]
    Fs(#[from] repokit_fs::Error),

    /// Metadata error from repokit-meta
    #[error(transparent)]
    Meta(#[from] repokit_meta::Error),
}

impl Error {
    pub fn context(message: impl Into<String>) -> Self {
        Self::Context {
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}
