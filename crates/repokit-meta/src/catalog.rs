//! Catalog of known repository types
//!
//! Every scaffold, sync, and validation step checks type names against
//! a catalog value rather than a global list, so tests can run the core
//! against alternate type sets.

use crate::{Error, Result};

/// Built-in repository types, in their canonical order.
pub const BUILTIN_REPO_TYPES: &[&str] = &["agent", "ml", "data", "app", "automation"];

/// Ordered set of repository type names.
///
/// # Example
///
/// ```
/// use repokit_meta::RepoTypeCatalog;
///
/// let catalog = RepoTypeCatalog::with_builtins();
/// assert!(catalog.contains("agent"));
/// assert!(catalog.validate("web").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoTypeCatalog {
    types: Vec<String>,
}

impl RepoTypeCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self { types: Vec::new() }
    }

    /// Create a catalog holding the built-in types.
    pub fn with_builtins() -> Self {
        let mut catalog = Self::new();
        for name in BUILTIN_REPO_TYPES {
            catalog.register(*name);
        }
        catalog
    }

    /// Add a type name. Registering an existing name is a no-op.
    pub fn register(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.types.contains(&name) {
            self.types.push(name);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.iter().any(|t| t == name)
    }

    /// Check that `name` is a known type.
    pub fn validate<'a>(&self, name: &'a str) -> Result<&'a str> {
        if self.contains(name) {
            Ok(name)
        } else {
            Err(Error::InvalidRepoType {
                repo_type: name.to_string(),
            })
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for RepoTypeCatalog {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl std::fmt::Display for RepoTypeCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.types.join(", "))
    }
}
