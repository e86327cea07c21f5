//! Context command implementations: inventory, transfer, compress

use std::path::Path;

use colored::Colorize;
use repokit_core::{
    CompressOptions, CompressionReport, RepoContextStatus, TransferReport, compress_context_file,
    inventory_context, transfer_context,
};
use repokit_meta::ContextMode;
use serde::Serialize;

use crate::error::{CliError, Result};
use crate::output::{self, OutputFormat, Table};

const CODE: &str = "context_error";

#[derive(Debug, Serialize)]
struct InventoryData<'a> {
    scope: &'a Path,
    repositories: &'a [RepoContextStatus],
}

/// Run the context inventory command
pub fn run_inventory(scope: &Path, format: OutputFormat) -> Result<Vec<RepoContextStatus>> {
    let rows = inventory_context(scope).map_err(|e| CliError::domain(CODE, e))?;
    if rows.is_empty() {
        return Err(CliError::not_found(
            "no_repositories",
            format!("No repokit repositories found in {}", scope.display()),
        ));
    }

    match format {
        OutputFormat::Json => output::print_json(
            "context inventory",
            &InventoryData {
                scope,
                repositories: &rows,
            },
        )?,
        _ => {
            let mut table = Table::new(["Repository", "Type", "Present", "Missing"])
                .with_title("Context inventory");
            for row in &rows {
                table.push([
                    row.repo_path.display().to_string(),
                    row.repo_type.clone(),
                    join_or_dash(&row.files_present),
                    join_or_dash(&row.files_missing),
                ]);
            }
            table.print(format);
        }
    }
    Ok(rows)
}

/// Run the context transfer command
///
/// An empty `files` list transfers the default context file set.
pub fn run_transfer(
    source: &Path,
    destination: &Path,
    mode: ContextMode,
    files: &[String],
    format: OutputFormat,
) -> Result<TransferReport> {
    let selected = (!files.is_empty()).then_some(files);
    let report = transfer_context(source, destination, mode, selected)
        .map_err(|e| CliError::domain(CODE, e))?;

    match format {
        OutputFormat::Json => output::print_json("context transfer", &report)?,
        OutputFormat::Markdown => {
            let mut table = Table::new(["File", "Result"]).with_title(format!(
                "Context {mode}: {} -> {}",
                report.source.display(),
                report.destination.display()
            ));
            for (files, label) in [
                (&report.copied, "copied"),
                (&report.moved, "moved"),
                (&report.skipped, "skipped"),
            ] {
                for file in files {
                    table.push([file.as_str(), label]);
                }
            }
            table.print(format);
        }
        OutputFormat::Table => {
            println!(
                "{} Context {} from {} to {}",
                "=>".blue().bold(),
                mode.to_string().cyan(),
                report.source.display(),
                report.destination.display()
            );
            for file in report.copied.iter().chain(&report.moved) {
                println!("   {} {}", "+".green(), file);
            }
            for file in &report.skipped {
                println!("   {} {} {}", "-".yellow(), file, "(not in source)".dimmed());
            }
        }
    }
    Ok(report)
}

/// Run the context compress command
pub fn run_compress(
    repo: &Path,
    options: &CompressOptions,
    format: OutputFormat,
) -> Result<CompressionReport> {
    let report = compress_context_file(repo, options).map_err(|e| CliError::domain(CODE, e))?;

    match format {
        OutputFormat::Json => output::print_json("context compress", &report)?,
        _ => {
            let mut table = Table::new(["File", "Threshold", "Before", "After", "Archive"])
                .with_title("Context compression");
            table.push([
                report.file_path.display().to_string(),
                report.threshold.to_string(),
                report.original_lines.to_string(),
                report.final_lines.to_string(),
                report
                    .archive_path
                    .as_deref()
                    .map(|path| path.display().to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ]);
            table.print(format);
            if format == OutputFormat::Table && !report.archived {
                println!("{} Below threshold; nothing archived.", "OK".green().bold());
            }
        }
    }
    Ok(report)
}

fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}
