//! Repository scaffolding from templates

use std::path::PathBuf;

use chrono::Utc;
use repokit_fs::io;
use repokit_meta::{DEFAULT_DB_TYPE, DEFAULT_TOOLS, RepoMetadata, RepoTypeCatalog};

use crate::templates::{EmbeddedTemplates, SHARED_SCOPE, TemplateContext, TemplateSource, render};
use crate::{Error, Result};

/// Directories created empty in every new repository.
pub const SCRATCH_DIRS: &[&str] = &["epics", "temp", "notebooks"];

/// Options for creating a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOptions {
    pub project_name: String,
    pub repo_type: String,
    /// Parent directory; the repository is created at `destination_root/<slug>`.
    pub destination_root: PathBuf,
    pub db_type: String,
    pub tools: Vec<String>,
    pub author: String,
    /// Write into an existing target directory.
    pub force: bool,
}

impl ScaffoldOptions {
    pub fn new(
        project_name: impl Into<String>,
        repo_type: impl Into<String>,
        destination_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            repo_type: repo_type.into(),
            destination_root: destination_root.into(),
            db_type: DEFAULT_DB_TYPE.to_string(),
            tools: DEFAULT_TOOLS.iter().map(|t| t.to_string()).collect(),
            author: String::new(),
            force: false,
        }
    }

    pub fn with_db_type(mut self, db_type: impl Into<String>) -> Self {
        self.db_type = db_type.into();
        self
    }

    pub fn with_tools(mut self, tools: Vec<String>) -> Self {
        self.tools = tools;
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

/// Turn a project name into a directory name.
///
/// Lower-cases, treats `_` as a space, and joins whitespace runs with `-`.
pub fn slugify(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .replace('_', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Renders a template source into new repositories.
#[derive(Debug, Clone)]
pub struct Scaffolder<S> {
    templates: S,
    catalog: RepoTypeCatalog,
}

impl<S: TemplateSource> Scaffolder<S> {
    pub fn new(templates: S, catalog: RepoTypeCatalog) -> Self {
        Self { templates, catalog }
    }

    /// Create a repository and return its path.
    ///
    /// Writes the shared templates, then the type's templates, then the
    /// `.repokit.yml` sidecar, then the empty scratch directories.
    pub fn scaffold(&self, options: &ScaffoldOptions) -> Result<PathBuf> {
        if !self.catalog.contains(&options.repo_type) {
            return Err(Error::InvalidRepoType {
                repo_type: options.repo_type.clone(),
                known: self.catalog.to_string(),
            });
        }

        let slug = slugify(&options.project_name);
        if slug.is_empty() {
            return Err(Error::invalid_input("project name must not be empty"));
        }

        let target = options.destination_root.join(&slug);
        if target.exists() && !options.force {
            return Err(Error::TargetExists { path: target });
        }
        io::create_dir_all(&target)?;

        let context = self.context(options, &slug);
        for scope in [SHARED_SCOPE, options.repo_type.as_str()] {
            for template in self.templates.templates(scope)? {
                let destination = target.join(template.output_path().to_native());
                let name = format!("{scope}/{}", template.relative_path);
                let rendered = render(&name, &template.body, &context)?;
                io::write_text(&destination, &rendered)?;
                tracing::debug!(file = %destination.display(), "Rendered template");
            }
        }

        RepoMetadata::new(
            &options.project_name,
            &slug,
            &options.repo_type,
            &options.db_type,
            options.tools.clone(),
        )
        .save(&target)?;

        for dir in SCRATCH_DIRS {
            io::create_dir_all(target.join(dir))?;
        }

        tracing::info!(target = %target.display(), repo_type = %options.repo_type, "Scaffolded repository");
        Ok(target)
    }

    fn context(&self, options: &ScaffoldOptions, slug: &str) -> TemplateContext {
        let author = if options.author.trim().is_empty() {
            "unknown"
        } else {
            options.author.trim()
        };

        let mut context = TemplateContext::new();
        context
            .insert("project_name", options.project_name.as_str())
            .insert("project_slug", slug)
            .insert("repo_type", options.repo_type.as_str())
            .insert("db_type", options.db_type.as_str())
            .insert("author", author)
            .insert("date", Utc::now().date_naive().to_string())
            .insert("tools", options.tools.join(", "));
        context
    }
}

impl Default for Scaffolder<EmbeddedTemplates> {
    fn default() -> Self {
        Self::new(EmbeddedTemplates, RepoTypeCatalog::with_builtins())
    }
}

/// Scaffold with the built-in templates and types.
pub fn scaffold_project(options: &ScaffoldOptions) -> Result<PathBuf> {
    Scaffolder::default().scaffold(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("My Agent Repo", "my-agent-repo")]
    #[case("  data_pipeline  v2 ", "data-pipeline-v2")]
    #[case("ML", "ml")]
    #[case("   ", "")]
    fn test_slugify(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(slugify(input), expected);
    }

    #[test]
    fn test_options_defaults() {
        let options = ScaffoldOptions::new("Repo", "agent", "/tmp");
        assert_eq!(options.db_type, "redshift");
        assert_eq!(options.tools, vec!["claude", "windsurf", "amp", "gemini"]);
        assert!(options.author.is_empty());
        assert!(!options.force);
    }
}
