//! Built-in configuration values
//!
//! These are the defaults the CLI injects into the core. Nothing in the
//! core reads them directly; it receives them through config values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Directory names pruned from markdown search.
pub const SKIP_DIRS: &[&str] = &[
    ".git",
    ".venv",
    "venv",
    "node_modules",
    "dist",
    "build",
    "__pycache__",
    ".mypy_cache",
    ".pytest_cache",
];

/// Tools rendered into new repositories when none are given.
pub const DEFAULT_TOOLS: &[&str] = &["claude", "windsurf", "amp", "gemini"];

/// Database flavor used when none is given.
pub const DEFAULT_DB_TYPE: &str = "redshift";

/// Knowledge files carried between repositories.
pub const CONTEXT_FILES: &[&str] = &[
    "AGENTS.md",
    "PROJECT_RULES.md",
    "LEARNINGS.md",
    "CHANGELOG.md",
];

/// A documentation layer and the paths that make it up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerRule {
    pub layer: &'static str,
    pub targets: &'static [&'static str],
}

/// Documentation layers reported by `info`, from most to least durable.
pub const LAYER_RULES: &[LayerRule] = &[
    LayerRule {
        layer: "A_executive",
        targets: &["AGENTS.md", "README.md"],
    },
    LayerRule {
        layer: "B_contracts",
        targets: &[
            "DATA_CONTRACTS.md",
            "MODEL_CARD.md",
            "PIPELINE.md",
            "prompts/README.md",
        ],
    },
    LayerRule {
        layer: "C_planning",
        targets: &["PRD.md", "CHANGELOG.md", "epics"],
    },
    LayerRule {
        layer: "D_scratch",
        targets: &["temp", "notebooks"],
    },
];

/// How context files travel between repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextMode {
    /// Leave the source file in place.
    #[default]
    Copy,
    /// Remove the source file after writing the destination.
    Move,
}

impl FromStr for ContextMode {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "copy" => Ok(ContextMode::Copy),
            "move" => Ok(ContextMode::Move),
            _ => Err(Error::InvalidContextMode {
                mode: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ContextMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextMode::Copy => write!(f, "copy"),
            ContextMode::Move => write!(f, "move"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_mode_default() {
        assert_eq!(ContextMode::default(), ContextMode::Copy);
    }

    #[test]
    fn test_context_mode_from_str() {
        assert_eq!("copy".parse::<ContextMode>().unwrap(), ContextMode::Copy);
        assert_eq!("MOVE".parse::<ContextMode>().unwrap(), ContextMode::Move);
        assert!("rename".parse::<ContextMode>().is_err());
    }

    #[test]
    fn test_context_mode_display() {
        assert_eq!(ContextMode::Copy.to_string(), "copy");
        assert_eq!(ContextMode::Move.to_string(), "move");
    }

    #[test]
    fn test_skip_dirs_include_vcs_and_caches() {
        assert!(SKIP_DIRS.contains(&".git"));
        assert!(SKIP_DIRS.contains(&"node_modules"));
        assert!(SKIP_DIRS.contains(&"__pycache__"));
    }

    #[test]
    fn test_layer_targets_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for rule in LAYER_RULES {
            for target in rule.targets {
                assert!(seen.insert(*target), "duplicate layer target {target}");
            }
        }
    }
}
