//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use repokit_meta::ContextMode;

use crate::output::OutputFormat;

/// repokit - Scaffold and maintain documentation-first repositories
#[derive(Parser, Debug)]
#[command(name = "repokit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create a new repository from templates
    ///
    /// Examples:
    ///   repokit new "Churn Agent" --type agent
    ///   repokit new "Vision Model" --type ml -d ~/src --tool claude --tool amp
    New {
        /// Project name; the directory is its slug
        name: String,

        /// Repository type (agent, ml, data, app, automation)
        #[arg(short = 't', long = "type")]
        repo_type: String,

        /// Parent directory for the new repository
        #[arg(short = 'd', long = "dir", default_value = ".")]
        destination: PathBuf,

        /// Warehouse rendered into the templates
        #[arg(long = "db", default_value = repokit_meta::DEFAULT_DB_TYPE)]
        db_type: String,

        /// Author rendered into the templates
        #[arg(long, default_value = "")]
        author: String,

        /// Assistant tools rendered into the templates (repeatable)
        #[arg(long = "tool")]
        tools: Vec<String>,

        /// Write into an existing directory
        #[arg(long)]
        force: bool,

        /// Read templates from this directory instead of the built-in set
        #[arg(long, env = "REPOKIT_TEMPLATES")]
        templates: Option<PathBuf>,
    },

    /// Search markdown files by relevance
    Search {
        /// Free-text query
        query: String,

        /// Directory to search
        #[arg(long, default_value = ".")]
        scope: PathBuf,

        /// Maximum number of hits
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },

    /// Report drift between a repository and its templates
    Sync {
        /// Repository to analyze
        #[arg(default_value = ".")]
        repo: PathBuf,

        /// Repository type; read from .repokit.yml when omitted
        #[arg(short = 't', long = "type")]
        repo_type: Option<String>,

        /// Read templates from this directory instead of the built-in set
        #[arg(long, env = "REPOKIT_TEMPLATES")]
        templates: Option<PathBuf>,
    },

    /// List repositories scaffolded by repokit
    List {
        /// Directory to inspect
        #[arg(long, default_value = ".")]
        scope: PathBuf,
    },

    /// Show document layers and completion status
    Info {
        /// Repository to inspect
        repo: PathBuf,
    },

    /// Manage context files across repositories
    Context {
        #[command(subcommand)]
        action: ContextAction,
    },

    /// Print version
    Version,
}

/// Context file actions
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ContextAction {
    /// Show which context files each repository carries
    Inventory {
        /// Directory to inspect
        #[arg(long, default_value = ".")]
        scope: PathBuf,
    },

    /// Copy or move context files between repositories
    Transfer {
        /// Source repository
        #[arg(long = "from")]
        source: PathBuf,

        /// Destination repository
        #[arg(long = "to")]
        destination: PathBuf,

        /// copy keeps the source files, move removes them
        #[arg(long, default_value = "copy", value_parser = parse_mode)]
        mode: ContextMode,

        /// Files to transfer instead of the default set (repeatable)
        #[arg(long = "file")]
        files: Vec<String>,
    },

    /// Archive the middle of a long context file
    Compress {
        /// Repository holding the file
        repo: PathBuf,

        /// Context file, relative to the repository
        #[arg(long, default_value = "LEARNINGS.md")]
        file: String,

        /// Compress only files longer than this many lines
        #[arg(long, default_value_t = 200)]
        threshold: usize,

        /// Lines kept at the end
        #[arg(long, default_value_t = 80)]
        keep_tail: usize,

        /// Lines kept at the start
        #[arg(long, default_value_t = 12)]
        header_lines: usize,
    },
}

fn parse_mode(value: &str) -> Result<ContextMode, String> {
    value.parse().map_err(|e: repokit_meta::Error| e.to_string())
}

impl Commands {
    /// Command name as reported in the JSON envelope.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::New { .. } => "new",
            Commands::Search { .. } => "search",
            Commands::Sync { .. } => "sync",
            Commands::List { .. } => "list",
            Commands::Info { .. } => "info",
            Commands::Context { action } => match action {
                ContextAction::Inventory { .. } => "context inventory",
                ContextAction::Transfer { .. } => "context transfer",
                ContextAction::Compress { .. } => "context compress",
            },
            Commands::Version => "version",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_no_args() {
        let cli = Cli::parse_from(["repokit"]);
        assert!(!cli.verbose);
        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["repokit", "list", "--format", "json", "-v"]);
        assert!(cli.verbose);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn parse_new_defaults() {
        let cli = Cli::parse_from(["repokit", "new", "My Repo", "--type", "agent"]);
        match cli.command {
            Some(Commands::New {
                name,
                repo_type,
                destination,
                db_type,
                author,
                tools,
                force,
                ..
            }) => {
                assert_eq!(name, "My Repo");
                assert_eq!(repo_type, "agent");
                assert_eq!(destination, PathBuf::from("."));
                assert_eq!(db_type, "redshift");
                assert!(author.is_empty());
                assert!(tools.is_empty());
                assert!(!force);
            }
            other => panic!("Expected New command, got {other:?}"),
        }
    }

    #[test]
    fn parse_new_requires_type() {
        assert!(Cli::try_parse_from(["repokit", "new", "My Repo"]).is_err());
    }

    #[test]
    fn parse_search_limit() {
        let cli = Cli::parse_from(["repokit", "search", "redshift", "-l", "3"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Search { ref query, limit, .. }) if query == "redshift" && limit == 3
        ));
    }

    #[test]
    fn parse_sync_optional_type() {
        let cli = Cli::parse_from(["repokit", "sync", "repo"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Sync { repo_type: None, .. })
        ));
    }

    #[test]
    fn parse_context_transfer() {
        let cli = Cli::parse_from([
            "repokit", "context", "transfer", "--from", "a", "--to", "b", "--mode", "move",
            "--file", "AGENTS.md", "--file", "LEARNINGS.md",
        ]);
        match cli.command {
            Some(Commands::Context {
                action:
                    ContextAction::Transfer {
                        mode, files, ..
                    },
            }) => {
                assert_eq!(mode, ContextMode::Move);
                assert_eq!(files, vec!["AGENTS.md", "LEARNINGS.md"]);
            }
            other => panic!("Expected context transfer, got {other:?}"),
        }
    }

    #[test]
    fn parse_context_transfer_rejects_unknown_mode() {
        let result = Cli::try_parse_from([
            "repokit", "context", "transfer", "--from", "a", "--to", "b", "--mode", "link",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_context_compress_defaults() {
        let cli = Cli::parse_from(["repokit", "context", "compress", "repo"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Context {
                action: ContextAction::Compress {
                    ref file,
                    threshold: 200,
                    keep_tail: 80,
                    header_lines: 12,
                    ..
                }
            }) if file == "LEARNINGS.md"
        ));
    }

    #[test]
    fn command_names() {
        let cli = Cli::parse_from(["repokit", "context", "inventory"]);
        assert_eq!(cli.command.unwrap().name(), "context inventory");
        let cli = Cli::parse_from(["repokit", "version"]);
        assert_eq!(cli.command.unwrap().name(), "version");
    }
}
