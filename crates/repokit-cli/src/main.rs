//! repokit CLI
//!
//! Scaffolds documentation-first repositories and maintains them: search,
//! drift reports, repository listing, and context file management.

mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use colored::Colorize;
use repokit_core::{CompressOptions, ScaffoldOptions};
use serde::Serialize;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands, ContextAction};
use error::Result;
use output::OutputFormat;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let format = cli.format;
    let Some(command) = cli.command else {
        println!("{} - documentation-first repository kit", "repokit".green().bold());
        println!();
        println!("Run {} for available commands.", "repokit --help".cyan());
        return;
    };

    let name = command.name();
    if let Err(e) = execute_command(command, format) {
        tracing::debug!(command = name, error = ?e, "Command failed");
        std::process::exit(output::print_error(name, format, &e));
    }
}

/// Logs go to stderr so stdout stays parseable.
fn init_tracing(verbose: bool) {
    let installed = if verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber).map_err(|e| e.to_string())
    } else {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| e.to_string())
    };

    match installed {
        Ok(()) if verbose => tracing::debug!("Verbose mode enabled"),
        Ok(()) => {}
        Err(e) => eprintln!("{} could not install logger: {}", "warning:".yellow().bold(), e),
    }
}

fn execute_command(cmd: Commands, format: OutputFormat) -> Result<()> {
    match cmd {
        Commands::New {
            name,
            repo_type,
            destination,
            db_type,
            author,
            tools,
            force,
            templates,
        } => {
            let options = ScaffoldOptions::new(name, repo_type, destination)
                .with_db_type(db_type)
                .with_author(author)
                .with_tools(tools)
                .with_force(force);
            commands::run_new(options, templates.as_deref(), format)?;
        }
        Commands::Search {
            query,
            scope,
            limit,
        } => {
            commands::run_search(&query, &scope, limit, format)?;
        }
        Commands::Sync {
            repo,
            repo_type,
            templates,
        } => {
            commands::run_sync(&repo, repo_type.as_deref(), templates.as_deref(), format)?;
        }
        Commands::List { scope } => {
            commands::run_list(&scope, format)?;
        }
        Commands::Info { repo } => {
            commands::run_info(&repo, format)?;
        }
        Commands::Context { action } => execute_context(action, format)?,
        Commands::Version => print_version(format)?,
    }
    Ok(())
}

fn execute_context(action: ContextAction, format: OutputFormat) -> Result<()> {
    match action {
        ContextAction::Inventory { scope } => {
            commands::run_inventory(&scope, format)?;
        }
        ContextAction::Transfer {
            source,
            destination,
            mode,
            files,
        } => {
            commands::run_transfer(&source, &destination, mode, &files, format)?;
        }
        ContextAction::Compress {
            repo,
            file,
            threshold,
            keep_tail,
            header_lines,
        } => {
            let options = CompressOptions {
                file,
                threshold,
                keep_tail,
                header_lines,
            };
            commands::run_compress(&repo, &options, format)?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct VersionData {
    version: &'static str,
}

fn print_version(format: OutputFormat) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    match format {
        OutputFormat::Json => output::print_json("version", &VersionData { version })?,
        _ => println!("{version}"),
    }
    Ok(())
}
