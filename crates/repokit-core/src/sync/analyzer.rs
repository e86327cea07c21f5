//! SyncAnalyzer implementation

use std::path::Path;

use repokit_fs::resolve_dir;
use repokit_meta::{METADATA_FILE, RepoMetadata, RepoTypeCatalog};

use super::report::SyncReport;
use crate::manifest::{canonical_union, expected_files};
use crate::templates::{EmbeddedTemplates, TemplateSource};
use crate::{Error, Result};

/// Drift detector over an injected template source and type catalog.
///
/// Analysis only reads; it never writes to the repository.
#[derive(Debug, Clone)]
pub struct SyncAnalyzer<S> {
    templates: S,
    catalog: RepoTypeCatalog,
}

impl<S: TemplateSource> SyncAnalyzer<S> {
    pub fn new(templates: S, catalog: RepoTypeCatalog) -> Self {
        Self { templates, catalog }
    }

    /// Analyze `repo_path` against the manifest of its type.
    ///
    /// An explicit `repo_type` always wins over the sidecar and is checked
    /// as given, so surrounding whitespace makes it unknown. `None` or an
    /// empty string reads the type from `.repokit.yml`.
    pub fn analyze(&self, repo_path: &Path, repo_type: Option<&str>) -> Result<SyncReport> {
        let root = resolve_dir(repo_path).map_err(|_| Error::InvalidPath {
            path: repo_path.to_path_buf(),
        })?;

        let resolved_type = self.resolve_type(&root, repo_type)?;
        tracing::debug!(repo = %root.display(), repo_type = %resolved_type, "Analyzing drift");

        let expected = expected_files(&self.templates, &resolved_type)?;
        let missing: Vec<String> = expected
            .iter()
            .filter(|path| !root.join(path).exists())
            .cloned()
            .collect();

        let union = canonical_union(&self.templates, &self.catalog)?;
        let unexpected: Vec<String> = union
            .difference(&expected)
            .filter(|path| root.join(path).exists())
            .cloned()
            .collect();

        Ok(SyncReport {
            repo_type: resolved_type,
            missing,
            unexpected,
        })
    }

    fn resolve_type(&self, root: &Path, explicit: Option<&str>) -> Result<String> {
        if let Some(repo_type) = explicit.filter(|t| !t.is_empty()) {
            return self
                .catalog
                .validate(repo_type)
                .map(str::to_string)
                .map_err(|_| Error::InvalidRepoType {
                    repo_type: repo_type.to_string(),
                    known: self.catalog.to_string(),
                });
        }

        let marker = root.join(METADATA_FILE);
        let metadata = match RepoMetadata::load(root) {
            Ok(metadata) => metadata,
            Err(repokit_meta::Error::MetadataNotFound { .. }) => {
                return Err(Error::MetadataMissing {
                    path: root.to_path_buf(),
                });
            }
            Err(e) => {
                return Err(Error::TypeDetection {
                    path: marker,
                    detail: e.to_string(),
                });
            }
        };

        let detected = metadata.repo_type.trim();
        if !self.catalog.contains(detected) {
            return Err(Error::TypeDetection {
                path: marker,
                detail: format!("'{detected}' is not one of: {}", self.catalog),
            });
        }
        Ok(detected.to_string())
    }
}

impl Default for SyncAnalyzer<EmbeddedTemplates> {
    fn default() -> Self {
        Self::new(EmbeddedTemplates, RepoTypeCatalog::with_builtins())
    }
}

/// Analyze `repo_path` with the built-in templates and types.
pub fn analyze_sync(repo_path: &Path, repo_type: Option<&str>) -> Result<SyncReport> {
    SyncAnalyzer::default().analyze(repo_path, repo_type)
}
