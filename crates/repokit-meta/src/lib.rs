//! Repository types, built-in configuration, and metadata for repokit.
//!
//! This crate holds the configuration values the core consumes: the
//! catalog of known repository types, the directory skip set, the
//! context file list, the documentation layer rules, and the
//! `.repokit.yml` sidecar written into every scaffolded repository.

pub mod catalog;
pub mod config;
pub mod error;
pub mod metadata;

pub use catalog::RepoTypeCatalog;
pub use config::{
    CONTEXT_FILES, ContextMode, DEFAULT_DB_TYPE, DEFAULT_TOOLS, LAYER_RULES, LayerRule,
    SKIP_DIRS,
};
pub use error::{Error, Result};
pub use metadata::{METADATA_FILE, RepoMetadata};
