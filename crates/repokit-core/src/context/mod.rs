//! Context file lifecycle: inventory, transfer between repositories, and
//! compression of long knowledge notes.
//!
//! Every operation here expects repositories created by the scaffolder,
//! recognised by their `.repokit.yml` sidecar.

mod compress;
mod inventory;
mod transfer;

use std::path::{Path, PathBuf};

use repokit_fs::{FileWalker, resolve_dir, validate_relative_path};
use repokit_meta::{METADATA_FILE, RepoMetadata, SKIP_DIRS};

use crate::{Error, Result};

pub use compress::{
    ARCHIVE_DIR, CompressOptions, CompressionReport, compress_context_file,
    compress_context_file_at,
};
pub use inventory::{RepoContextStatus, inventory_context};
pub use transfer::{TransferReport, transfer_context};

/// Resolve `path` to a repository root carrying a sidecar.
fn validate_repo(path: &Path) -> Result<PathBuf> {
    let root = resolve_dir(path).map_err(|_| {
        Error::context(format!("Repository path does not exist: {}", path.display()))
    })?;
    if !RepoMetadata::exists(&root) {
        return Err(Error::context(format!(
            "Missing {METADATA_FILE} in repository: {}",
            root.display()
        )));
    }
    Ok(root)
}

/// Validate a user-supplied context file path.
fn validate_context_path(raw: &str) -> Result<String> {
    validate_relative_path(raw)
        .map(String::from)
        .map_err(|_| Error::context(format!("Invalid context file path: {}", raw.trim())))
}

/// Find every repository root below `scope`, sorted by path.
///
/// Build and cache directories are pruned so vendored trees are not
/// mistaken for repositories.
pub(crate) fn find_repositories(scope: &Path) -> Vec<PathBuf> {
    let mut roots: Vec<PathBuf> = FileWalker::new()
        .skip_dirs(SKIP_DIRS.iter().copied())
        .file_name(METADATA_FILE)
        .walk(scope)
        .files
        .into_iter()
        .filter_map(|marker| marker.parent().map(Path::to_path_buf))
        .collect();
    roots.sort();
    roots
}

/// Declared type of the repository at `root`, or `?`.
pub(crate) fn repo_type_label(root: &Path) -> String {
    match RepoMetadata::load(root) {
        Ok(metadata) => metadata.type_label().to_string(),
        Err(e) => {
            tracing::debug!(repo = %root.display(), error = %e, "Unreadable metadata");
            "?".to_string()
        }
    }
}
