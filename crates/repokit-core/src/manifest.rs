//! Scaffold manifests: the files each repository type should contain

use std::collections::BTreeSet;

use repokit_meta::RepoTypeCatalog;

use crate::Result;
use crate::templates::{SHARED_SCOPE, TemplateSource};

/// Repository-relative paths a scaffold of `repo_type` produces.
///
/// This is exactly the set of files the scaffolder writes for that type:
/// the shared templates plus the type's own.
pub fn expected_files<S>(source: &S, repo_type: &str) -> Result<BTreeSet<String>>
where
    S: TemplateSource + ?Sized,
{
    let mut expected = BTreeSet::new();
    for scope in [SHARED_SCOPE, repo_type] {
        for template in source.templates(scope)? {
            expected.insert(template.output_path().into());
        }
    }
    Ok(expected)
}

/// Union of the expected files of every type in `catalog`.
pub fn canonical_union<S>(source: &S, catalog: &RepoTypeCatalog) -> Result<BTreeSet<String>>
where
    S: TemplateSource + ?Sized,
{
    let mut union = BTreeSet::new();
    for repo_type in catalog.iter() {
        union.extend(expected_files(source, repo_type)?);
    }
    Ok(union)
}
