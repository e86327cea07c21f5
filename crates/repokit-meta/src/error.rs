//! Error types for repokit-meta

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] repokit_fs::Error),

    #[error("Unsupported repo type: {repo_type}")]
    InvalidRepoType { repo_type: String },

    #[error("Missing {} in {}", crate::METADATA_FILE, path.display())]
    MetadataNotFound { path: PathBuf },

    #[error("Invalid metadata at {}: {message}", path.display())]
    InvalidMetadata { path: PathBuf, message: String },

    #[error("Invalid context mode: {mode}")]
    InvalidContextMode { mode: String },
}
