//! Markdown corpora for search tests.

use std::fs;
use std::path::Path;

/// Write each `(relative path, content)` pair below `root`, creating
/// parent directories as needed.
pub fn write_corpus(root: &Path, files: &[(&str, &str)]) {
    for (relative, content) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
    }
}

/// A small corpus with one clearly relevant document per topic.
///
/// `AGENTS.md` mentions redshift on line 1; `docs/deep/redshift.md` mentions
/// it many times in a longer body; `README.md` does not mention it at all.
pub const SAMPLE_CORPUS: &[(&str, &str)] = &[
    ("AGENTS.md", "Use read-only access for redshift queries\n"),
    ("README.md", "General project overview\n"),
    (
        "docs/deep/redshift.md",
        "# Warehouse notes\n\nredshift clusters are resized on Mondays.\n\
         Vacuum redshift tables after bulk loads.\n\
         The analytics team owns the redshift cost dashboard and the weekly report.\n",
    ),
    ("notes/empty.md", ""),
    ("notes/data.txt", "redshift redshift redshift\n"),
];

/// Generate a markdown document of `lines` lines, each `prefix N`.
pub fn numbered_lines(prefix: &str, lines: usize) -> String {
    (1..=lines)
        .map(|n| format!("{prefix} {n}\n"))
        .collect()
}
