//! The `.repokit.yml` metadata sidecar
//!
//! Written once by the scaffolder and read by sync, list, and the
//! context utilities to recover a repository's declared type.

use std::path::Path;

use chrono::{SecondsFormat, Utc};
use repokit_fs::ConfigStore;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// File name of the sidecar at the repository root.
pub const METADATA_FILE: &str = ".repokit.yml";

/// Placeholder shown when a sidecar value is unknown.
const UNKNOWN: &str = "?";

/// Repository metadata persisted next to the scaffolded files.
///
/// Keys are written in declaration order. Missing keys read back as
/// empty values so hand-edited sidecars still load.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RepoMetadata {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(rename = "type", default)]
    pub repo_type: String,
    #[serde(default)]
    pub db_type: String,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub created_at: String,
}

impl RepoMetadata {
    /// Build metadata for a repository created now.
    pub fn new(
        name: impl Into<String>,
        slug: impl Into<String>,
        repo_type: impl Into<String>,
        db_type: impl Into<String>,
        tools: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            repo_type: repo_type.into(),
            db_type: db_type.into(),
            tools,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }

    /// Whether `repo_root` carries a sidecar.
    pub fn exists(repo_root: &Path) -> bool {
        repo_root.join(METADATA_FILE).is_file()
    }

    /// Load the sidecar from `repo_root`.
    ///
    /// # Errors
    ///
    /// [`Error::MetadataNotFound`] when the file is absent and
    /// [`Error::InvalidMetadata`] when it cannot be parsed.
    pub fn load(repo_root: &Path) -> Result<Self> {
        let path = repo_root.join(METADATA_FILE);
        if !path.is_file() {
            return Err(Error::MetadataNotFound {
                path: repo_root.to_path_buf(),
            });
        }

        ConfigStore::new()
            .load(&path)
            .map_err(|e| Error::InvalidMetadata {
                path: path.clone(),
                message: e.to_string(),
            })
    }

    /// Write the sidecar into `repo_root`.
    pub fn save(&self, repo_root: &Path) -> Result<()> {
        let path = repo_root.join(METADATA_FILE);
        tracing::debug!(path = %path.display(), "Writing repository metadata");
        ConfigStore::new().save(&path, self)?;
        Ok(())
    }

    /// The declared type trimmed, or `?` when empty.
    pub fn type_label(&self) -> &str {
        non_empty_or_unknown(&self.repo_type)
    }

    /// The creation timestamp, or `?` when empty.
    pub fn created_label(&self) -> &str {
        non_empty_or_unknown(&self.created_at)
    }
}

fn non_empty_or_unknown(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() { UNKNOWN } else { trimmed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_new_sets_timestamp() {
        let meta = RepoMetadata::new("Agent Repo", "agent-repo", "agent", "redshift", vec![]);
        assert!(meta.created_at.ends_with('Z'));
        assert_eq!(meta.type_label(), "agent");
    }

    #[test]
    fn test_labels_fall_back_to_unknown() {
        let meta = RepoMetadata::default();
        assert_eq!(meta.type_label(), "?");
        assert_eq!(meta.created_label(), "?");
    }

    #[test]
    fn test_type_label_trims_whitespace() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(METADATA_FILE), "type: '  ml  '\n").unwrap();

        let meta = RepoMetadata::load(temp.path()).unwrap();
        assert_eq!(meta.type_label(), "ml");
    }
}
