//! Template sources for scaffolding and drift detection
//!
//! Templates live in one directory per scope: `_shared` holds files every
//! repository gets, and one directory per repository type holds the rest.
//! Each template's path below its scope, minus the `.j2` suffix, is the
//! path of the file it produces.

mod render;

use std::path::{Path, PathBuf};

use include_dir::{Dir, include_dir};
use repokit_fs::{FileWalker, NormalizedPath, io};

use crate::Result;

pub use render::{TemplateContext, render};

/// Scope holding templates shared by every repository type.
pub const SHARED_SCOPE: &str = "_shared";

/// Suffix marking a template file.
pub const TEMPLATE_SUFFIX: &str = ".j2";

static BUILTIN_TEMPLATES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// One template file below a scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Path relative to the scope directory, suffix included.
    pub relative_path: NormalizedPath,
    /// Raw template text.
    pub body: String,
}

impl TemplateFile {
    /// Repository-relative path of the rendered file.
    pub fn output_path(&self) -> NormalizedPath {
        self.relative_path
            .strip_suffix(TEMPLATE_SUFFIX)
            .unwrap_or_else(|| self.relative_path.clone())
    }
}

/// Provides the templates of a scope.
pub trait TemplateSource {
    /// Every template below `scope`, sorted by relative path.
    ///
    /// A scope that does not exist has no templates.
    fn templates(&self, scope: &str) -> Result<Vec<TemplateFile>>;
}

impl<T: TemplateSource + ?Sized> TemplateSource for &T {
    fn templates(&self, scope: &str) -> Result<Vec<TemplateFile>> {
        (**self).templates(scope)
    }
}

impl<T: TemplateSource + ?Sized> TemplateSource for Box<T> {
    fn templates(&self, scope: &str) -> Result<Vec<TemplateFile>> {
        (**self).templates(scope)
    }
}

/// Templates compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    fn collect(dir: &Dir<'_>, scope_root: &Path, out: &mut Vec<TemplateFile>) {
        for file in dir.files() {
            let Some(relative) = NormalizedPath::relative_to(file.path(), scope_root) else {
                continue;
            };
            if !relative.as_str().ends_with(TEMPLATE_SUFFIX) {
                continue;
            }
            out.push(TemplateFile {
                relative_path: relative,
                body: String::from_utf8_lossy(file.contents()).into_owned(),
            });
        }
        for child in dir.dirs() {
            Self::collect(child, scope_root, out);
        }
    }
}

impl TemplateSource for EmbeddedTemplates {
    fn templates(&self, scope: &str) -> Result<Vec<TemplateFile>> {
        let mut out = Vec::new();
        if let Some(dir) = BUILTIN_TEMPLATES.get_dir(scope) {
            Self::collect(dir, Path::new(scope), &mut out);
        }
        out.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        Ok(out)
    }
}

/// Templates read from a directory at runtime.
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    root: PathBuf,
}

impl DirectoryTemplates {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TemplateSource for DirectoryTemplates {
    fn templates(&self, scope: &str) -> Result<Vec<TemplateFile>> {
        let scope_root = self.root.join(scope);
        let walk = FileWalker::new().extension("j2").walk(&scope_root);

        let mut out = Vec::with_capacity(walk.files.len());
        for path in walk.files {
            let Some(relative) = NormalizedPath::relative_to(&path, &scope_root) else {
                continue;
            };
            out.push(TemplateFile {
                relative_path: relative,
                body: io::read_text(&path)?,
            });
        }
        out.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outputs(source: &impl TemplateSource, scope: &str) -> Vec<String> {
        source
            .templates(scope)
            .unwrap()
            .iter()
            .map(|t| t.output_path().to_string())
            .collect()
    }

    #[test]
    fn test_embedded_shared_scope() {
        let shared = outputs(&EmbeddedTemplates, SHARED_SCOPE);
        for expected in [
            "AGENTS.md",
            "README.md",
            "PRD.md",
            "CHANGELOG.md",
            "PROJECT_RULES.md",
            "LEARNINGS.md",
            ".windsurf/rules/safety.md",
        ] {
            assert!(shared.contains(&expected.to_string()), "missing {expected}");
        }
    }

    #[test]
    fn test_embedded_type_scopes() {
        assert!(outputs(&EmbeddedTemplates, "agent").contains(&"DATA_CONTRACTS.md".to_string()));
        assert!(outputs(&EmbeddedTemplates, "ml").contains(&"MODEL_CARD.md".to_string()));
        assert!(!outputs(&EmbeddedTemplates, "ml").contains(&"DATA_CONTRACTS.md".to_string()));
    }

    #[test]
    fn test_embedded_unknown_scope_is_empty() {
        assert!(EmbeddedTemplates.templates("web").unwrap().is_empty());
    }

    #[test]
    fn test_embedded_templates_sorted() {
        let shared = outputs(&EmbeddedTemplates, SHARED_SCOPE);
        let mut sorted = shared.clone();
        sorted.sort();
        assert_eq!(shared, sorted);
    }

    #[test]
    fn test_output_path_without_suffix() {
        let file = TemplateFile {
            relative_path: NormalizedPath::new("notes.md"),
            body: String::new(),
        };
        assert_eq!(file.output_path().as_str(), "notes.md");
    }
}
