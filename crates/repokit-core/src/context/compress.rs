use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use repokit_fs::io;
use serde::Serialize;

use super::{validate_context_path, validate_repo};
use crate::text::split_lines;
use crate::{Error, Result};

/// Directory, relative to the repository root, receiving archived lines.
pub const ARCHIVE_DIR: &str = "memory/archive";

/// Limits for [`compress_context_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressOptions {
    /// Context file, relative to the repository root.
    pub file: String,
    /// Files with at most this many lines are left alone.
    pub threshold: usize,
    /// Lines kept at the end of the file.
    pub keep_tail: usize,
    /// Lines kept at the start of the file.
    pub header_lines: usize,
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self {
            file: "LEARNINGS.md".to_string(),
            threshold: 200,
            keep_tail: 80,
            header_lines: 12,
        }
    }
}

impl CompressOptions {
    pub fn for_file(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<()> {
        for (flag, value) in [
            ("--threshold", self.threshold),
            ("--keep-tail", self.keep_tail),
            ("--header-lines", self.header_lines),
        ] {
            if value == 0 {
                return Err(Error::context(format!("{flag} must be greater than 0.")));
            }
        }
        if self.file.trim().is_empty() {
            return Err(Error::context("--file cannot be empty."));
        }
        Ok(())
    }
}

/// Outcome of a compression run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompressionReport {
    pub repo_path: PathBuf,
    pub file_path: PathBuf,
    pub threshold: usize,
    pub original_lines: usize,
    pub final_lines: usize,
    pub archived: bool,
    pub archive_path: Option<PathBuf>,
}

/// Compress a context file that grew past its threshold.
///
/// Keeps the header and tail, moves the lines between them into a
/// timestamped file under [`ARCHIVE_DIR`], and leaves a note pointing at
/// the archive. Files at or below the threshold are untouched.
pub fn compress_context_file(repo: &Path, options: &CompressOptions) -> Result<CompressionReport> {
    compress_context_file_at(repo, options, Utc::now())
}

/// [`compress_context_file`] with an explicit clock.
pub fn compress_context_file_at(
    repo: &Path,
    options: &CompressOptions,
    now: DateTime<Utc>,
) -> Result<CompressionReport> {
    let root = validate_repo(repo)?;
    options.validate()?;

    let relative = validate_context_path(&options.file)?;
    let target = root.join(&relative);
    if !target.is_file() {
        return Err(Error::context(format!(
            "Context file not found: {}",
            target.display()
        )));
    }

    let content = io::read_text(&target)?;
    let lines: Vec<&str> = split_lines(&content).collect();
    let original_lines = lines.len();

    let mut report = CompressionReport {
        repo_path: root.clone(),
        file_path: target.clone(),
        threshold: options.threshold,
        original_lines,
        final_lines: original_lines,
        archived: false,
        archive_path: None,
    };
    if original_lines <= options.threshold {
        tracing::debug!(file = %target.display(), lines = original_lines, "Below threshold");
        return Ok(report);
    }

    let head_count = options.header_lines.min(original_lines);
    let tail_count = options.keep_tail.min(original_lines - head_count);
    let middle_end = original_lines - tail_count;

    let head = &lines[..head_count];
    let middle = &lines[head_count..middle_end];
    let tail = &lines[middle_end..];

    let stem = Path::new(&relative)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| relative.clone());
    let archive_relative = format!("{ARCHIVE_DIR}/{stem}-{}.md", now.format("%Y%m%d-%H%M%S"));
    let archive_path = root.join(&archive_relative);

    io::write_text(&archive_path, &terminated(&middle.join("\n")))?;

    let note = compression_note(now, middle.len(), &archive_relative);
    let compressed: Vec<&str> = head
        .iter()
        .copied()
        .chain(note.iter().map(String::as_str))
        .chain(tail.iter().copied())
        .collect();
    io::write_text(&target, &terminated(&compressed.join("\n")))?;

    tracing::info!(
        file = %target.display(),
        archive = %archive_path.display(),
        archived_lines = middle.len(),
        "Compressed context file"
    );

    report.final_lines = compressed.len();
    report.archived = true;
    report.archive_path = Some(archive_path);
    Ok(report)
}

fn compression_note(now: DateTime<Utc>, archived_lines: usize, archive: &str) -> [String; 6] {
    [
        String::new(),
        "## Compression Note".to_string(),
        format!("- Compressed on {}.", now.date_naive()),
        format!("- Archived {archived_lines} lines to `{archive}`."),
        "- Promote repeated rules from archived notes into PROJECT_RULES.md or AGENTS.md."
            .to_string(),
        String::new(),
    ]
}

/// Trailing whitespace removed, exactly one newline appended.
fn terminated(text: &str) -> String {
    let mut out = text.trim_end().to_string();
    out.push('\n');
    out
}
