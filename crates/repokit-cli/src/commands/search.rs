//! Search command implementation

use std::path::Path;

use colored::Colorize;
use repokit_core::{SearchEngine, SearchHit, SearchResults};
use serde::Serialize;

use crate::error::{CliError, Result};
use crate::output::{self, OutputFormat, Table};

#[derive(Debug, Serialize)]
struct SearchData<'a> {
    query: &'a str,
    scope: &'a Path,
    hits: &'a [SearchHit],
    skipped: &'a [std::path::PathBuf],
}

/// Run the search command
///
/// No hits is reported as not-found so scripts can branch on the exit code.
pub fn run_search(
    query: &str,
    scope: &Path,
    limit: usize,
    format: OutputFormat,
) -> Result<SearchResults> {
    let results = SearchEngine::default()
        .search(query, scope, limit)
        .map_err(|e| CliError::domain("invalid_scope", e))?;

    if format != OutputFormat::Json {
        for path in &results.skipped {
            eprintln!("{} skipped unreadable {}", "warning:".yellow().bold(), path.display());
        }
    }

    if results.is_empty() {
        return Err(CliError::not_found(
            "no_matches",
            format!("No matches for '{query}' in {}", scope.display()),
        ));
    }

    match format {
        OutputFormat::Json => output::print_json(
            "search",
            &SearchData {
                query,
                scope,
                hits: &results.hits,
                skipped: &results.skipped,
            },
        )?,
        _ => hits_table(query, &results.hits).print(format),
    }
    Ok(results)
}

fn hits_table(query: &str, hits: &[SearchHit]) -> Table {
    let mut table = Table::new(["Score", "File", "Line", "Snippet"])
        .with_title(format!("Search results for '{query}'"));
    for hit in hits {
        table.push([
            format!("{:.2}", hit.score),
            hit.path.display().to_string(),
            hit.line.to_string(),
            hit.snippet.clone(),
        ]);
    }
    table
}
