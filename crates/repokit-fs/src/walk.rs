//! Recursive file enumeration with directory pruning

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Files found by a walk plus the entries that could not be visited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkOutcome {
    /// Matching files, in traversal order.
    pub files: Vec<PathBuf>,
    /// Paths whose metadata or directory listing could not be read.
    pub errors: Vec<PathBuf>,
}

/// Configurable recursive walker.
///
/// Entries are visited sorted by file name within each directory, so two
/// walks of the same tree always return files in the same order. Directories
/// whose name is in the skip set are pruned together with their contents.
#[derive(Debug, Clone, Default)]
pub struct FileWalker {
    skip_dirs: BTreeSet<String>,
    extension: Option<String>,
    file_name: Option<String>,
}

impl FileWalker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prune any directory whose name is in `dirs`.
    pub fn skip_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skip_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    /// Only return files with this extension (without the dot).
    pub fn extension(mut self, ext: impl Into<String>) -> Self {
        self.extension = Some(ext.into());
        self
    }

    /// Only return files with exactly this name.
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    /// Walk `root` and collect matching files.
    ///
    /// A missing root yields an empty outcome. Unreadable entries are
    /// recorded in [`WalkOutcome::errors`] and the walk continues.
    pub fn walk(&self, root: &Path) -> WalkOutcome {
        let mut outcome = WalkOutcome::default();
        if !root.exists() {
            return outcome;
        }

        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                !(entry.depth() > 0
                    && entry.file_type().is_dir()
                    && self.is_skipped(entry.file_name()))
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| root.to_path_buf());
                    tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable entry");
                    outcome.errors.push(path);
                    continue;
                }
            };

            let file_type = entry.file_type();
            if !file_type.is_file() && !Self::is_file_symlink(entry.path(), file_type) {
                continue;
            }
            if self.matches(entry.path()) {
                outcome.files.push(entry.into_path());
            }
        }

        tracing::debug!(
            root = %root.display(),
            files = outcome.files.len(),
            errors = outcome.errors.len(),
            "Walk complete"
        );
        outcome
    }

    fn is_skipped(&self, name: &std::ffi::OsStr) -> bool {
        self.skip_dirs.contains(name.to_string_lossy().as_ref())
    }

    fn is_file_symlink(path: &Path, file_type: std::fs::FileType) -> bool {
        file_type.is_symlink() && path.is_file()
    }

    fn matches(&self, path: &Path) -> bool {
        if let Some(ext) = &self.extension {
            let matches_ext = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e == ext);
            if !matches_ext {
                return false;
            }
        }
        if let Some(name) = &self.file_name {
            let matches_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n == name);
            if !matches_name {
                return false;
            }
        }
        true
    }
}
