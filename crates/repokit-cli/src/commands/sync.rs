//! Sync command implementation
//!
//! Reports drift only; nothing in the repository is changed.

use std::path::Path;

use colored::Colorize;
use repokit_core::{SyncAnalyzer, SyncReport};
use repokit_meta::RepoTypeCatalog;
use serde::Serialize;

use super::new::template_source;
use crate::error::{CliError, Result};
use crate::output::{self, OutputFormat};

#[derive(Debug, Serialize)]
struct SyncData<'a> {
    path: &'a Path,
    #[serde(flatten)]
    report: &'a SyncReport,
    clean: bool,
}

/// Run the sync command
pub fn run_sync(
    repo: &Path,
    repo_type: Option<&str>,
    templates: Option<&Path>,
    format: OutputFormat,
) -> Result<SyncReport> {
    let analyzer = SyncAnalyzer::new(template_source(templates), RepoTypeCatalog::with_builtins());
    let report = analyzer.analyze(repo, repo_type).map_err(|e| match e {
        repokit_core::Error::InvalidPath { .. } => CliError::domain("invalid_repository_path", e),
        other => CliError::domain("sync_error", other),
    })?;

    match format {
        OutputFormat::Json => output::print_json(
            "sync",
            &SyncData {
                path: repo,
                report: &report,
                clean: report.is_clean(),
            },
        )?,
        OutputFormat::Markdown => {
            println!("## Sync report: {} ({})\n", repo.display(), report.repo_type);
            if report.is_clean() {
                println!("No drift detected.");
            }
            output::print_list(format, "Missing", &report.missing);
            output::print_list(format, "Unexpected", &report.unexpected);
        }
        OutputFormat::Table => {
            println!(
                "{} Checking {} against {} templates...",
                "=>".blue().bold(),
                repo.display(),
                report.repo_type.cyan()
            );
            if report.is_clean() {
                println!("{} No drift detected.", "OK".green().bold());
            } else {
                output::print_list(format, "Missing files:", &report.missing);
                output::print_list(format, "Unexpected files:", &report.unexpected);
            }
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use repokit_core::{ScaffoldOptions, scaffold_project};
    use tempfile::TempDir;

    #[test]
    fn test_run_sync_clean_repo() {
        let temp = TempDir::new().unwrap();
        let repo = scaffold_project(&ScaffoldOptions::new("Sync", "data", temp.path())).unwrap();

        let report = run_sync(&repo, None, None, OutputFormat::Json).unwrap();
        assert!(report.is_clean());
    }

    #[test]
    fn test_run_sync_error_codes() {
        let temp = TempDir::new().unwrap();

        let missing = run_sync(&temp.path().join("nope"), None, None, OutputFormat::Json);
        assert_eq!(missing.unwrap_err().code(), "invalid_repository_path");

        let no_sidecar = run_sync(temp.path(), None, None, OutputFormat::Json);
        assert_eq!(no_sidecar.unwrap_err().code(), "sync_error");

        let bad_type = run_sync(temp.path(), Some("web"), None, OutputFormat::Json);
        assert_eq!(bad_type.unwrap_err().code(), "invalid_repo_type");
    }
}
