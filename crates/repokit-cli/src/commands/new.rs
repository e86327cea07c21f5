//! New command implementation
//!
//! Scaffolds a repository from the built-in or an on-disk template set.

use std::path::{Path, PathBuf};

use colored::Colorize;
use repokit_core::{
    DirectoryTemplates, EmbeddedTemplates, ScaffoldOptions, Scaffolder, TemplateSource,
};
use repokit_meta::{DEFAULT_TOOLS, RepoTypeCatalog};
use serde::Serialize;

use crate::error::{CliError, Result};
use crate::output::{self, OutputFormat, Table};

#[derive(Debug, Serialize)]
struct NewRepoData<'a> {
    path: &'a Path,
    name: &'a str,
    #[serde(rename = "type")]
    repo_type: &'a str,
}

/// Pick the template source for a command.
pub fn template_source(dir: Option<&Path>) -> Box<dyn TemplateSource> {
    match dir {
        Some(dir) => {
            tracing::debug!(templates = %dir.display(), "Using on-disk templates");
            Box::new(DirectoryTemplates::new(dir))
        }
        None => Box::new(EmbeddedTemplates),
    }
}

/// Run the new command
pub fn run_new(
    options: ScaffoldOptions,
    templates: Option<&Path>,
    format: OutputFormat,
) -> Result<PathBuf> {
    let options = if options.tools.is_empty() {
        let tools = DEFAULT_TOOLS.iter().map(|t| t.to_string()).collect();
        options.with_tools(tools)
    } else {
        options
    };

    let scaffolder = Scaffolder::new(template_source(templates), RepoTypeCatalog::with_builtins());
    let target = scaffolder
        .scaffold(&options)
        .map_err(|e| CliError::domain("scaffold_error", e))?;

    let data = NewRepoData {
        path: &target,
        name: &options.project_name,
        repo_type: &options.repo_type,
    };
    match format {
        OutputFormat::Json => output::print_json("new", &data)?,
        OutputFormat::Markdown => {
            let mut table = Table::new(["Name", "Type", "Path"]);
            table.push([
                options.project_name.clone(),
                options.repo_type.clone(),
                target.display().to_string(),
            ]);
            table.print(format);
        }
        OutputFormat::Table => {
            println!(
                "{} Created {} repository at {}",
                "OK".green().bold(),
                options.repo_type.cyan(),
                target.display().to_string().yellow()
            );
        }
    }
    Ok(target)
}
