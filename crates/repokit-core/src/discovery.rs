//! Repository discovery and documentation layer status

use std::fmt;
use std::path::{Path, PathBuf};

use repokit_fs::{io, resolve_dir};
use repokit_meta::{LAYER_RULES, RepoMetadata};
use serde::Serialize;

use crate::context::find_repositories;
use crate::{Error, Result};

/// A repository found below a scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoSummary {
    pub path: PathBuf,
    #[serde(rename = "type")]
    pub repo_type: String,
    pub created_at: String,
}

/// State of one layer target inside a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerStatus {
    /// A directory exists at the target.
    Present,
    /// A file with non-blank content.
    Filled,
    /// A file holding only whitespace.
    Empty,
    Missing,
}

impl fmt::Display for LayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LayerStatus::Present => "present",
            LayerStatus::Filled => "filled",
            LayerStatus::Empty => "empty",
            LayerStatus::Missing => "missing",
        };
        f.write_str(label)
    }
}

/// One row of a repository info report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayerEntry {
    pub layer: String,
    pub target: String,
    pub status: LayerStatus,
}

/// Every repository below `scope`, sorted by path.
///
/// Sidecars that cannot be parsed still list the repository, with `?`
/// for the unknown values.
pub fn list_repositories(scope: &Path) -> Result<Vec<RepoSummary>> {
    let root = resolve_dir(scope).map_err(|_| Error::InvalidPath {
        path: scope.to_path_buf(),
    })?;

    let summaries = find_repositories(&root)
        .into_iter()
        .map(|path| {
            let metadata = RepoMetadata::load(&path).unwrap_or_else(|e| {
                tracing::warn!(repo = %path.display(), error = %e, "Unreadable metadata");
                RepoMetadata::default()
            });
            RepoSummary {
                repo_type: metadata.type_label().to_string(),
                created_at: metadata.created_label().to_string(),
                path,
            }
        })
        .collect();
    Ok(summaries)
}

/// Status of every layer target in the repository at `repo`.
pub fn repository_info(repo: &Path) -> Result<Vec<LayerEntry>> {
    let root = resolve_dir(repo).map_err(|_| Error::InvalidPath {
        path: repo.to_path_buf(),
    })?;

    let mut entries = Vec::new();
    for rule in LAYER_RULES {
        for target in rule.targets {
            entries.push(LayerEntry {
                layer: rule.layer.to_string(),
                target: target.to_string(),
                status: layer_status(&root.join(target)),
            });
        }
    }
    Ok(entries)
}

fn layer_status(path: &Path) -> LayerStatus {
    if path.is_dir() {
        return LayerStatus::Present;
    }
    if !path.exists() {
        return LayerStatus::Missing;
    }
    match io::read_text_lossy(path) {
        Ok(content) if !content.trim().is_empty() => LayerStatus::Filled,
        Ok(_) => LayerStatus::Empty,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Unreadable layer target");
            LayerStatus::Empty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_layer_status_variants() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir(root.join("epics")).unwrap();
        fs::write(root.join("README.md"), "# Hello\n").unwrap();
        fs::write(root.join("PRD.md"), "  \n\n").unwrap();

        assert_eq!(layer_status(&root.join("epics")), LayerStatus::Present);
        assert_eq!(layer_status(&root.join("README.md")), LayerStatus::Filled);
        assert_eq!(layer_status(&root.join("PRD.md")), LayerStatus::Empty);
        assert_eq!(layer_status(&root.join("AGENTS.md")), LayerStatus::Missing);
    }

    #[test]
    fn test_layer_status_display() {
        assert_eq!(LayerStatus::Filled.to_string(), "filled");
        assert_eq!(LayerStatus::Missing.to_string(), "missing");
    }
}
