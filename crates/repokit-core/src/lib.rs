//! Core operations for repokit
//!
//! This crate implements everything the `repokit` binary does, on plain
//! values and without any terminal output:
//!
//! - **Search**: relevance-ranked markdown search with best-line snippets
//! - **Sync**: drift between a repository and its type's scaffold manifest
//! - **Scaffold**: rendering the template tree into a new repository
//! - **Context**: inventory, transfer, and compression of knowledge notes
//! - **Discovery**: listing repositories and reporting layer status
//!
//! # Architecture
//!
//! ```text
//!                 repokit-cli
//!                      |
//!                repokit-core
//!                      |
//!          +-----------+-----------+
//!          |                       |
//!     repokit-meta  ---------> repokit-fs
//! ```
//!
//! Configuration (the skip set, the repository type catalog, the template
//! source) is injected through constructor values; the free functions use
//! the built-in defaults.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! fn example() -> repokit_core::Result<()> {
//!     for hit in repokit_core::search_markdown("redshift", Path::new("."), 5)? {
//!         println!("{:.2} {}:{}", hit.score, hit.path.display(), hit.line);
//!     }
//!     Ok(())
//! }
//! ```

pub mod context;
pub mod discovery;
pub mod error;
pub mod manifest;
pub mod scaffold;
pub mod search;
pub mod sync;
pub mod templates;

mod text;

pub use context::{
    CompressOptions, CompressionReport, RepoContextStatus, TransferReport, compress_context_file,
    inventory_context, transfer_context,
};
pub use discovery::{LayerEntry, LayerStatus, RepoSummary, list_repositories, repository_info};
pub use error::{Error, Result};
pub use manifest::{canonical_union, expected_files};
pub use scaffold::{ScaffoldOptions, Scaffolder, scaffold_project, slugify};
pub use search::{SearchConfig, SearchEngine, SearchHit, SearchResults, search_markdown, tokenize};
pub use sync::{SyncAnalyzer, SyncReport, analyze_sync};
pub use templates::{DirectoryTemplates, EmbeddedTemplates, TemplateFile, TemplateSource};
