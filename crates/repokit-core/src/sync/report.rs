//! Drift report type

use serde::{Deserialize, Serialize};

/// Result of one drift analysis.
///
/// Both lists hold sorted, forward-slash, repository-relative paths and
/// never share an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    /// The type the analysis ran against
    pub repo_type: String,
    /// Expected for this type but absent on disk
    pub missing: Vec<String>,
    /// Present on disk but expected only for other types
    pub unexpected: Vec<String>,
}

impl SyncReport {
    /// True when nothing is missing and nothing is unexpected.
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_report() {
        let report = SyncReport {
            repo_type: "agent".into(),
            missing: vec![],
            unexpected: vec![],
        };
        assert!(report.is_clean());
    }

    #[test]
    fn test_report_with_missing_is_not_clean() {
        let report = SyncReport {
            repo_type: "agent".into(),
            missing: vec!["DATA_CONTRACTS.md".into()],
            unexpected: vec![],
        };
        assert!(!report.is_clean());
    }

    #[test]
    fn test_serializes_field_names() {
        let report = SyncReport {
            repo_type: "ml".into(),
            missing: vec![],
            unexpected: vec!["DATA_CONTRACTS.md".into()],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["repo_type"], "ml");
        assert_eq!(json["unexpected"][0], "DATA_CONTRACTS.md");
    }
}
