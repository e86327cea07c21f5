use std::path::{Path, PathBuf};

use repokit_fs::resolve_dir;
use repokit_meta::CONTEXT_FILES;
use serde::Serialize;

use super::{find_repositories, repo_type_label};
use crate::{Error, Result};

/// Context files found in one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoContextStatus {
    #[serde(rename = "path")]
    pub repo_path: PathBuf,
    #[serde(rename = "type")]
    pub repo_type: String,
    #[serde(rename = "present")]
    pub files_present: Vec<String>,
    #[serde(rename = "missing")]
    pub files_missing: Vec<String>,
}

/// Report which context files each repository below `scope` carries.
///
/// Both lists follow the order of [`CONTEXT_FILES`]. Repositories are
/// sorted by path.
pub fn inventory_context(scope: &Path) -> Result<Vec<RepoContextStatus>> {
    let root = resolve_dir(scope).map_err(|_| {
        Error::context(format!("Scope path does not exist: {}", scope.display()))
    })?;

    let rows: Vec<RepoContextStatus> = find_repositories(&root)
        .into_iter()
        .map(|repo_path| {
            let (present, missing): (Vec<&str>, Vec<&str>) = CONTEXT_FILES
                .iter()
                .copied()
                .partition(|name| repo_path.join(name).exists());
            RepoContextStatus {
                repo_type: repo_type_label(&repo_path),
                files_present: present.into_iter().map(str::to_string).collect(),
                files_missing: missing.into_iter().map(str::to_string).collect(),
                repo_path,
            }
        })
        .collect();

    tracing::debug!(scope = %root.display(), repositories = rows.len(), "Context inventory");
    Ok(rows)
}
