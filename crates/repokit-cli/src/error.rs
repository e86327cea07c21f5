//! Error types for repokit-cli

use crate::output::{EXIT_ERROR, EXIT_INVALID_INPUT, EXIT_NOT_FOUND};

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
///
/// Every variant maps to a process exit code and a stable error code
/// string used in the JSON envelope.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The user asked for something that cannot be done as given
    #[error("{message}")]
    InvalidInput { code: &'static str, message: String },

    /// The operation ran but found nothing
    #[error("{message}")]
    NotFound { code: &'static str, message: String },

    /// Unexpected error from repokit-core
    #[error(transparent)]
    Core(#[from] repokit_core::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON rendering error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn invalid(code: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(code: &'static str, message: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            message: message.into(),
        }
    }

    /// Classify a core error raised by a command.
    ///
    /// Domain errors become invalid input under `code`, except an unknown
    /// repository type which always reports `invalid_repo_type`. Filesystem
    /// faults stay internal errors.
    pub fn domain(code: &'static str, error: repokit_core::Error) -> Self {
        use repokit_core::Error as CoreError;

        match error {
            CoreError::InvalidRepoType { .. } => {
                Self::invalid("invalid_repo_type", error.to_string())
            }
            CoreError::Fs(_) | CoreError::Meta(_) => Self::Core(error),
            _ => Self::invalid(code, error.to_string()),
        }
    }

    /// Stable error code for machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput { code, .. } | Self::NotFound { code, .. } => code,
            Self::Core(_) | Self::Io(_) | Self::Json(_) => "internal_error",
        }
    }

    /// Process exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput { .. } => EXIT_INVALID_INPUT,
            Self::NotFound { .. } => EXIT_NOT_FOUND,
            Self::Core(_) | Self::Io(_) | Self::Json(_) => EXIT_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_domain_error_uses_command_code() {
        let error = CliError::domain(
            "invalid_scope",
            repokit_core::Error::InvalidPath {
                path: PathBuf::from("missing"),
            },
        );
        assert_eq!(error.code(), "invalid_scope");
        assert_eq!(error.exit_code(), EXIT_INVALID_INPUT);
        assert!(error.to_string().contains("missing"));
    }

    #[test]
    fn test_unknown_type_has_fixed_code() {
        let error = CliError::domain(
            "scaffold_error",
            repokit_core::Error::InvalidRepoType {
                repo_type: "web".into(),
                known: "agent".into(),
            },
        );
        assert_eq!(error.code(), "invalid_repo_type");
    }

    #[test]
    fn test_filesystem_fault_is_internal() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = CliError::domain(
            "context_error",
            repokit_core::Error::Fs(repokit_fs::Error::io("AGENTS.md", io)),
        );
        assert_eq!(error.code(), "internal_error");
        assert_eq!(error.exit_code(), EXIT_ERROR);
    }

    #[test]
    fn test_not_found_exit_code() {
        let error = CliError::not_found("no_matches", "No matches");
        assert_eq!(error.exit_code(), EXIT_NOT_FOUND);
        assert_eq!(error.to_string(), "No matches");
    }
}
