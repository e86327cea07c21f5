//! Filesystem abstraction for repokit
//!
//! Provides normalized path handling, lossy text reads, atomic writes,
//! YAML config loading, and filtered directory walks.

pub mod config;
pub mod error;
pub mod io;
pub mod path;
pub mod walk;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::{NormalizedPath, resolve_dir, validate_relative_path};
pub use walk::{FileWalker, WalkOutcome};
