use std::path::PathBuf;

use pretty_assertions::assert_eq;
use repokit_core::{
    DirectoryTemplates, Error, ScaffoldOptions, SyncAnalyzer, analyze_sync, scaffold_project,
};
use repokit_meta::RepoTypeCatalog;
use repokit_test_utils::TestRepo;
use rstest::rstest;
use tempfile::TempDir;

fn scaffold(temp: &TempDir, repo_type: &str) -> PathBuf {
    scaffold_project(&ScaffoldOptions::new("Drift Repo", repo_type, temp.path())).unwrap()
}

#[rstest]
#[case("agent")]
#[case("ml")]
#[case("data")]
#[case("app")]
#[case("automation")]
fn test_fresh_scaffold_has_no_drift(#[case] repo_type: &str) {
    let temp = TempDir::new().unwrap();
    let repo = scaffold(&temp, repo_type);

    let report = analyze_sync(&repo, None).unwrap();

    assert_eq!(report.repo_type, repo_type);
    assert!(report.missing.is_empty(), "missing: {:?}", report.missing);
    assert!(report.unexpected.is_empty(), "unexpected: {:?}", report.unexpected);
    assert!(report.is_clean());
}

#[test]
fn test_removed_contract_is_missing() {
    let temp = TempDir::new().unwrap();
    let repo = scaffold(&temp, "agent");
    std::fs::remove_file(repo.join("DATA_CONTRACTS.md")).unwrap();

    let report = analyze_sync(&repo, None).unwrap();

    assert_eq!(report.repo_type, "agent");
    assert_eq!(report.missing, vec!["DATA_CONTRACTS.md"]);
    assert!(report.unexpected.is_empty());
}

#[test]
fn test_other_type_output_is_unexpected() {
    let temp = TempDir::new().unwrap();
    let repo = scaffold(&temp, "agent");
    std::fs::write(repo.join("MODEL_CARD.md"), "# Model card\n").unwrap();
    std::fs::write(repo.join("NOTES.md"), "personal notes\n").unwrap();

    let report = analyze_sync(&repo, None).unwrap();

    assert_eq!(report.unexpected, vec!["MODEL_CARD.md"]);
    assert!(report.missing.is_empty());
}

#[test]
fn test_missing_and_unexpected_are_sorted_and_disjoint() {
    let temp = TempDir::new().unwrap();
    let repo = scaffold(&temp, "ml");
    for file in ["PIPELINE.md", "MODEL_CARD.md", "AGENTS.md"] {
        std::fs::remove_file(repo.join(file)).unwrap();
    }
    std::fs::write(repo.join("RUNBOOK.md"), "x").unwrap();
    std::fs::write(repo.join("DATA_CONTRACTS.md"), "x").unwrap();

    let report = analyze_sync(&repo, None).unwrap();

    assert_eq!(report.missing, vec!["AGENTS.md", "MODEL_CARD.md", "PIPELINE.md"]);
    assert_eq!(report.unexpected, vec!["DATA_CONTRACTS.md", "RUNBOOK.md"]);
    assert!(report.missing.iter().all(|m| !report.unexpected.contains(m)));
}

#[test]
fn test_explicit_type_overrides_sidecar() {
    let temp = TempDir::new().unwrap();
    let repo = scaffold(&temp, "agent");

    let report = analyze_sync(&repo, Some("ml")).unwrap();

    assert_eq!(report.repo_type, "ml");
    assert!(report.missing.contains(&"MODEL_CARD.md".to_string()));
    assert!(report.unexpected.contains(&"DATA_CONTRACTS.md".to_string()));
}

#[test]
fn test_explicit_type_without_sidecar() {
    let repo = TestRepo::new();
    repo.write_file("AGENTS.md", "# Agents\n");

    let report = analyze_sync(repo.root(), Some("app")).unwrap();
    assert_eq!(report.repo_type, "app");
    assert!(!report.missing.contains(&"AGENTS.md".to_string()));
    assert!(report.missing.contains(&"RUNBOOK.md".to_string()));
}

#[test]
fn test_unknown_explicit_type_is_rejected() {
    let repo = TestRepo::new();
    repo.write_sidecar("agent");

    let err = analyze_sync(repo.root(), Some("web")).unwrap_err();
    assert!(matches!(err, Error::InvalidRepoType { ref repo_type, .. } if repo_type == "web"));
}

#[rstest]
#[case("   ")]
#[case(" agent")]
#[case("agent\n")]
fn test_explicit_type_is_not_trimmed(#[case] explicit: &str) {
    let repo = TestRepo::new();
    repo.write_sidecar("agent");

    let err = analyze_sync(repo.root(), Some(explicit)).unwrap_err();
    assert!(matches!(err, Error::InvalidRepoType { ref repo_type, .. } if repo_type == explicit));
}

#[test]
fn test_empty_explicit_type_reads_sidecar() {
    let repo = TestRepo::new();
    repo.write_sidecar("ml");

    let report = analyze_sync(repo.root(), Some("")).unwrap();
    assert_eq!(report.repo_type, "ml");
}

#[test]
fn test_missing_sidecar_requires_explicit_type() {
    let repo = TestRepo::new();
    let err = analyze_sync(repo.root(), None).unwrap_err();
    assert!(matches!(err, Error::MetadataMissing { .. }));
}

#[test]
fn test_unknown_sidecar_type_is_detection_error() {
    let repo = TestRepo::new();
    repo.write_sidecar("web");

    let err = analyze_sync(repo.root(), None).unwrap_err();
    assert!(matches!(err, Error::TypeDetection { .. }));
}

#[test]
fn test_malformed_sidecar_is_detection_error() {
    let repo = TestRepo::new();
    repo.write_file(".repokit.yml", "type: [unclosed\n");

    let err = analyze_sync(repo.root(), None).unwrap_err();
    assert!(matches!(err, Error::TypeDetection { .. }));
}

#[test]
fn test_missing_repo_path_is_invalid() {
    let temp = TempDir::new().unwrap();
    let err = analyze_sync(&temp.path().join("missing"), Some("agent")).unwrap_err();
    assert!(matches!(err, Error::InvalidPath { .. }));
}

#[test]
fn test_analysis_never_writes() {
    let temp = TempDir::new().unwrap();
    let repo = scaffold(&temp, "agent");
    std::fs::remove_file(repo.join("README.md")).unwrap();

    analyze_sync(&repo, None).unwrap();
    assert!(!repo.join("README.md").exists());
}

#[test]
fn test_alternate_templates_and_catalog() {
    let templates = TestRepo::new();
    templates.write_file("_shared/README.md.j2", "# {{ project_name }}\n");
    templates.write_file("web/ROUTES.md.j2", "routes\n");
    templates.write_file("cli/COMMANDS.md.j2", "commands\n");

    let mut catalog = RepoTypeCatalog::new();
    catalog.register("web");
    catalog.register("cli");
    let analyzer = SyncAnalyzer::new(DirectoryTemplates::new(templates.root()), catalog);

    let repo = TestRepo::new();
    repo.write_sidecar("web");
    repo.write_file("COMMANDS.md", "x");

    let report = analyzer.analyze(repo.root(), None).unwrap();
    assert_eq!(report.repo_type, "web");
    assert_eq!(report.missing, vec!["README.md", "ROUTES.md"]);
    assert_eq!(report.unexpected, vec!["COMMANDS.md"]);

    // Built-in types are unknown to this catalog
    let err = analyzer.analyze(repo.root(), Some("agent")).unwrap_err();
    assert!(matches!(err, Error::InvalidRepoType { .. }));
}

#[test]
fn test_nested_outputs_use_forward_slashes() {
    let temp = TempDir::new().unwrap();
    let repo = scaffold(&temp, "agent");
    std::fs::remove_file(repo.join(".windsurf/rules/safety.md")).unwrap();
    std::fs::remove_file(repo.join("prompts/README.md")).unwrap();

    let report = analyze_sync(&repo, None).unwrap();
    assert_eq!(
        report.missing,
        vec![".windsurf/rules/safety.md", "prompts/README.md"]
    );
}
