//! List and info command implementations

use std::path::Path;

use colored::Colorize;
use repokit_core::{LayerEntry, LayerStatus, RepoSummary, list_repositories, repository_info};
use serde::Serialize;

use crate::error::{CliError, Result};
use crate::output::{self, OutputFormat, Table};

#[derive(Debug, Serialize)]
struct ListData<'a> {
    scope: &'a Path,
    repositories: &'a [RepoSummary],
}

#[derive(Debug, Serialize)]
struct InfoData<'a> {
    path: &'a Path,
    layers: &'a [LayerEntry],
}

/// Run the list command
pub fn run_list(scope: &Path, format: OutputFormat) -> Result<Vec<RepoSummary>> {
    let repos = list_repositories(scope).map_err(|e| CliError::domain("invalid_scope", e))?;
    if repos.is_empty() {
        return Err(CliError::not_found(
            "no_repositories",
            format!("No repokit repositories found in {}", scope.display()),
        ));
    }

    match format {
        OutputFormat::Json => output::print_json(
            "list",
            &ListData {
                scope,
                repositories: &repos,
            },
        )?,
        _ => {
            let mut table =
                Table::new(["Path", "Type", "Created"]).with_title("Repokit repositories");
            for repo in &repos {
                table.push([
                    repo.path.display().to_string(),
                    repo.repo_type.clone(),
                    repo.created_at.clone(),
                ]);
            }
            table.print(format);
        }
    }
    Ok(repos)
}

/// Run the info command
pub fn run_info(repo: &Path, format: OutputFormat) -> Result<Vec<LayerEntry>> {
    let layers =
        repository_info(repo).map_err(|e| CliError::domain("invalid_repository_path", e))?;

    match format {
        OutputFormat::Json => output::print_json(
            "info",
            &InfoData {
                path: repo,
                layers: &layers,
            },
        )?,
        _ => {
            let mut table = Table::new(["Layer", "Target", "Status"])
                .with_title(format!("Repository info: {}", repo.display()));
            for entry in &layers {
                let status = if format == OutputFormat::Table {
                    colored_status(entry.status)
                } else {
                    entry.status.to_string()
                };
                table.push([entry.layer.clone(), entry.target.clone(), status]);
            }
            table.print(format);
        }
    }
    Ok(layers)
}

fn colored_status(status: LayerStatus) -> String {
    let label = status.to_string();
    match status {
        LayerStatus::Present | LayerStatus::Filled => label.green().to_string(),
        LayerStatus::Empty => label.yellow().to_string(),
        LayerStatus::Missing => label.red().to_string(),
    }
}
