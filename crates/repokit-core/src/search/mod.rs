//! Relevance-scored search over markdown files
//!
//! Every query rescans the scope; nothing is indexed between calls.
//!
//! # Scoring
//!
//! For each document the score is
//!
//! ```text
//! overlap / (1 + sqrt(document token count))
//! ```
//!
//! where `overlap` is the capped multiset intersection of query and
//! document tokens. There is no corpus-wide IDF term: the square-root
//! length penalty alone favors short, focused documents over long ones
//! with the same raw overlap.
//!
//! # Ordering
//!
//! Hits are sorted by score, descending, with a stable sort. Equal scores
//! keep scan order, and the scan visits entries sorted by file name within
//! each directory, so results are deterministic for a given tree.

mod snippet;
mod tokenize;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use repokit_fs::{FileWalker, io};
use serde::Serialize;

use crate::{Error, Result};

pub use snippet::best_line;
pub use tokenize::{TokenCounts, tokenize};

/// Maximum snippet width in characters.
pub const DEFAULT_SNIPPET_CHARS: usize = 200;

/// Default number of hits returned.
pub const DEFAULT_LIMIT: usize = 10;

/// One scored result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    /// The matching file, as the scope joined with its path below it.
    pub path: PathBuf,
    /// Relative relevance; only comparable within one result set.
    pub score: f64,
    /// 1-based number of the best-matching line.
    pub line: usize,
    /// The best-matching line, trimmed and truncated.
    pub snippet: String,
}

/// Hits plus the files that could not be read.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResults {
    pub hits: Vec<SearchHit>,
    pub skipped: Vec<PathBuf>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

/// Immutable search configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Directory names pruned from the scan.
    pub skip_dirs: BTreeSet<String>,
    /// File extension searched, without the dot.
    pub extension: String,
    /// Snippet width in characters.
    pub snippet_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            skip_dirs: repokit_meta::SKIP_DIRS.iter().map(|s| s.to_string()).collect(),
            extension: "md".to_string(),
            snippet_chars: DEFAULT_SNIPPET_CHARS,
        }
    }
}

/// Search engine over a directory of markdown files.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Run `query` against every markdown file under `scope`.
    ///
    /// A query without tokens returns no hits and touches nothing on disk.
    /// Files that cannot be read are listed in [`SearchResults::skipped`]
    /// and do not abort the scan.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPath`] when `scope` is not a directory.
    pub fn search(&self, query: &str, scope: &Path, limit: usize) -> Result<SearchResults> {
        let query_counts = TokenCounts::from_text(query);
        if query_counts.is_empty() || limit == 0 {
            return Ok(SearchResults::default());
        }

        if !scope.is_dir() {
            return Err(Error::InvalidPath {
                path: scope.to_path_buf(),
            });
        }

        let walk = FileWalker::new()
            .skip_dirs(self.config.skip_dirs.iter().cloned())
            .extension(self.config.extension.clone())
            .walk(scope);

        let mut results = SearchResults {
            hits: Vec::new(),
            skipped: walk.errors,
        };
        if walk.files.is_empty() {
            return Ok(results);
        }

        let mut distinct: Vec<&str> = query_counts.distinct().collect();
        distinct.sort_unstable();

        for path in walk.files {
            let content = match io::read_text_lossy(&path) {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable file");
                    results.skipped.push(path);
                    continue;
                }
            };

            let Some(score) = score_document(&query_counts, &TokenCounts::from_text(&content))
            else {
                continue;
            };

            let (line, snippet) = best_line(&content, &distinct, self.config.snippet_chars);
            results.hits.push(SearchHit {
                path,
                score,
                line,
                snippet,
            });
        }

        // Stable: equal scores keep scan order
        results.hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        results.hits.truncate(limit);

        tracing::debug!(
            query,
            hits = results.hits.len(),
            skipped = results.skipped.len(),
            "Search complete"
        );
        Ok(results)
    }
}

/// Score a document against a query, or `None` when it does not match.
pub fn score_document(query: &TokenCounts, document: &TokenCounts) -> Option<f64> {
    if document.is_empty() {
        return None;
    }

    let overlap = query.overlap(document);
    if overlap == 0 {
        return None;
    }

    let norm = document.total() as f64;
    let score = overlap as f64 / (1.0 + norm.sqrt());
    (score > 0.0).then_some(score)
}

/// Search `scope` with the default configuration and return the hits.
pub fn search_markdown(query: &str, scope: &Path, limit: usize) -> Result<Vec<SearchHit>> {
    Ok(SearchEngine::default().search(query, scope, limit)?.hits)
}
