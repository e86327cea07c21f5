use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use repokit_fs::io;
use repokit_meta::{CONTEXT_FILES, ContextMode};
use serde::Serialize;

use super::{validate_context_path, validate_repo};
use crate::{Error, Result};

/// Outcome of moving context files between two repositories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferReport {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub mode: ContextMode,
    pub copied: Vec<String>,
    pub moved: Vec<String>,
    /// Requested files absent from the source.
    pub skipped: Vec<String>,
}

/// Carry context files from `source` to `destination`.
///
/// `files` replaces the default context file set. The override is trimmed,
/// de-duplicated and sorted; every entry must be a relative path that stays
/// inside the repository. Existing destination files are overwritten.
pub fn transfer_context(
    source: &Path,
    destination: &Path,
    mode: ContextMode,
    files: Option<&[String]>,
) -> Result<TransferReport> {
    let source = validate_repo(source)?;
    let destination = validate_repo(destination)?;
    if source == destination {
        return Err(Error::context(
            "Source and destination repositories must be different.",
        ));
    }

    let selected = select_files(files)?;

    let mut report = TransferReport {
        source,
        destination,
        mode,
        copied: Vec::new(),
        moved: Vec::new(),
        skipped: Vec::new(),
    };

    for relative in selected {
        let src_path = report.source.join(&relative);
        let dst_path = report.destination.join(&relative);

        if !src_path.is_file() {
            report.skipped.push(relative);
            continue;
        }

        let content = io::read_text(&src_path)?;
        io::write_text(&dst_path, &content)?;

        match mode {
            ContextMode::Copy => report.copied.push(relative),
            ContextMode::Move => {
                io::remove_file(&src_path)?;
                report.moved.push(relative);
            }
        }
    }

    tracing::info!(
        source = %report.source.display(),
        destination = %report.destination.display(),
        %mode,
        copied = report.copied.len(),
        moved = report.moved.len(),
        skipped = report.skipped.len(),
        "Transferred context files"
    );
    Ok(report)
}

fn select_files(files: Option<&[String]>) -> Result<Vec<String>> {
    let Some(files) = files else {
        return Ok(CONTEXT_FILES.iter().map(|f| f.to_string()).collect());
    };

    let requested: BTreeSet<&str> = files
        .iter()
        .map(|f| f.trim())
        .filter(|f| !f.is_empty())
        .collect();
    if requested.is_empty() {
        return Err(Error::context(
            "At least one --file value must be provided when overriding defaults.",
        ));
    }

    requested.into_iter().map(validate_context_path).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_default_files() {
        let files = select_files(None).unwrap();
        assert_eq!(files, CONTEXT_FILES.iter().map(|f| f.to_string()).collect::<Vec<_>>());
    }

    #[test]
    fn test_select_override_dedups_and_sorts() {
        let files = vec![
            " PROJECT_RULES.md".to_string(),
            "AGENTS.md".to_string(),
            "PROJECT_RULES.md ".to_string(),
        ];
        assert_eq!(
            select_files(Some(&files)).unwrap(),
            vec!["AGENTS.md", "PROJECT_RULES.md"]
        );
    }

    #[test]
    fn test_select_blank_override_rejected() {
        let files = vec!["  ".to_string()];
        assert!(select_files(Some(&files)).is_err());
    }

    #[test]
    fn test_select_escaping_path_rejected() {
        let files = vec!["../secrets.md".to_string()];
        let err = select_files(Some(&files)).unwrap_err();
        assert!(err.to_string().contains("Invalid context file path"));
    }
}
