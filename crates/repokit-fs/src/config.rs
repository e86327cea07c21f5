//! YAML configuration loading and saving

use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, NormalizedPath, Result, io};

/// Loads and saves YAML documents such as the `.repokit.yml` sidecar.
///
/// Only `.yaml` and `.yml` paths are accepted.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load a YAML document from `path`.
    ///
    /// An empty document deserializes as a mapping with no keys, so types
    /// with `#[serde(default)]` fields load their defaults.
    pub fn load<T: DeserializeOwned>(&self, path: impl AsRef<Path>) -> Result<T> {
        let path = path.as_ref();
        check_extension(path)?;
        let content = io::read_text(path)?;

        let source = if content.trim().is_empty() { "{}" } else { content.as_str() };
        serde_yaml::from_str(source).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Save `value` as YAML to `path` with an atomic write.
    pub fn save<T: Serialize>(&self, path: impl AsRef<Path>, value: &T) -> Result<()> {
        let path = path.as_ref();
        check_extension(path)?;

        let content = serde_yaml::to_string(value).map_err(|e| Error::ConfigSerialize {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        io::write_atomic(path, content.as_bytes())
    }
}

fn check_extension(path: &Path) -> Result<()> {
    let extension = NormalizedPath::new(path)
        .extension()
        .unwrap_or("")
        .to_lowercase();
    match extension.as_str() {
        "yaml" | "yml" => Ok(()),
        _ => Err(Error::UnsupportedFormat { extension }),
    }
}
