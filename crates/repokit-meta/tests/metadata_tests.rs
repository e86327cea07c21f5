//! Integration tests for the metadata sidecar

use pretty_assertions::assert_eq;
use repokit_meta::{Error, METADATA_FILE, RepoMetadata};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_save_then_load() {
    let temp = TempDir::new().unwrap();
    let meta = RepoMetadata::new(
        "My Agent Repo",
        "my-agent-repo",
        "agent",
        "redshift",
        vec!["claude".into(), "windsurf".into()],
    );

    meta.save(temp.path()).unwrap();

    assert!(RepoMetadata::exists(temp.path()));
    assert_eq!(RepoMetadata::load(temp.path()).unwrap(), meta);
}

#[test]
fn test_saved_keys_keep_declaration_order() {
    let temp = TempDir::new().unwrap();
    RepoMetadata::new("Repo", "repo", "ml", "none", vec![])
        .save(temp.path())
        .unwrap();

    let content = fs::read_to_string(temp.path().join(METADATA_FILE)).unwrap();
    let keys: Vec<&str> = content
        .lines()
        .filter(|l| !l.starts_with(' ') && !l.starts_with('-'))
        .filter_map(|l| l.split(':').next())
        .collect();
    assert_eq!(keys, vec!["name", "slug", "type", "db_type", "tools", "created_at"]);
}

#[test]
fn test_load_missing_sidecar() {
    let temp = TempDir::new().unwrap();
    assert!(!RepoMetadata::exists(temp.path()));
    assert!(matches!(
        RepoMetadata::load(temp.path()),
        Err(Error::MetadataNotFound { .. })
    ));
}

#[test]
fn test_load_malformed_sidecar() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(METADATA_FILE), "type: [agent\n").unwrap();

    assert!(matches!(
        RepoMetadata::load(temp.path()),
        Err(Error::InvalidMetadata { .. })
    ));
}

#[test]
fn test_load_partial_sidecar_uses_defaults() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(METADATA_FILE),
        "type: data\nextra_key: ignored\n",
    )
    .unwrap();

    let meta = RepoMetadata::load(temp.path()).unwrap();
    assert_eq!(meta.repo_type, "data");
    assert!(meta.name.is_empty());
    assert!(meta.tools.is_empty());
}

#[test]
fn test_load_empty_sidecar() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(METADATA_FILE), "").unwrap();

    let meta = RepoMetadata::load(temp.path()).unwrap();
    assert_eq!(meta, RepoMetadata::default());
}
