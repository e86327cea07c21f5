//! Output rendering: human tables, markdown, and the JSON envelope

use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;

use crate::error::{CliError, Result};

pub const EXIT_OK: i32 = 0;
pub const EXIT_ERROR: i32 = 1;
pub const EXIT_INVALID_INPUT: i32 = 2;
pub const EXIT_NOT_FOUND: i32 = 3;

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns for terminals
    #[default]
    Table,
    /// One JSON envelope on a single line
    Json,
    /// GitHub-flavored markdown tables
    Markdown,
}

/// Machine-readable wrapper around every command result.
#[derive(Debug, Serialize)]
struct Envelope<'a, T: Serialize> {
    ok: bool,
    command: &'a str,
    exit_code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorBody<'a>>,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    code: &'a str,
    message: String,
}

/// Print a successful result as a JSON envelope.
pub fn print_json<T: Serialize>(command: &str, data: &T) -> Result<()> {
    let envelope = Envelope {
        ok: true,
        command,
        exit_code: EXIT_OK,
        data: Some(data),
        error: None,
    };
    println!("{}", serde_json::to_string(&envelope)?);
    Ok(())
}

/// Report a failed command and return the exit code to use.
///
/// JSON output goes to stdout so scripts always get an envelope; human
/// output goes to stderr.
pub fn print_error(command: &str, format: OutputFormat, error: &CliError) -> i32 {
    let exit_code = error.exit_code();
    match format {
        OutputFormat::Json => {
            let envelope: Envelope<'_, ()> = Envelope {
                ok: false,
                command,
                exit_code,
                data: None,
                error: Some(ErrorBody {
                    code: error.code(),
                    message: error.to_string(),
                }),
            };
            match serde_json::to_string(&envelope) {
                Ok(line) => println!("{line}"),
                Err(e) => eprintln!("{}: {}", "error".red().bold(), e),
            }
        }
        OutputFormat::Table | OutputFormat::Markdown => {
            if matches!(error, CliError::NotFound { .. }) {
                eprintln!("{} {}", "warning:".yellow().bold(), error);
            } else {
                eprintln!("{}: {}", "error".red().bold(), error);
            }
        }
    }
    exit_code
}

/// A table rendered either as aligned columns or as markdown.
#[derive(Debug, Clone, Default)]
pub struct Table {
    title: Option<String>,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: None,
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn push<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    /// Print in the requested human format.
    pub fn print(&self, format: OutputFormat) {
        match format {
            OutputFormat::Markdown => print!("{}", self.to_markdown()),
            _ => print!("{}", self.to_columns()),
        }
    }

    /// Aligned columns with a bold header row.
    pub fn to_columns(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();
        if let Some(title) = &self.title {
            out.push_str(&format!("{}\n\n", title.bold()));
        }

        let header: Vec<String> = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| format!("{:<w$}", h, w = *w))
            .collect();
        out.push_str(&format!("{}\n", header.join("  ").trim_end().bold()));

        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, w)| format!("{:<w$}", cell, w = *w))
                .collect();
            out.push_str(cells.join("  ").trim_end());
            out.push('\n');
        }
        out
    }

    /// GitHub-flavored markdown table; `|` in cells is escaped.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        if let Some(title) = &self.title {
            out.push_str(&format!("## {title}\n\n"));
        }
        out.push_str(&markdown_row(&self.headers));
        out.push_str(&format!(
            "|{}|\n",
            vec!["---"; self.headers.len()].join("|")
        ));
        for row in &self.rows {
            out.push_str(&markdown_row(row));
        }
        out
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }
}

fn markdown_row(cells: &[String]) -> String {
    let escaped: Vec<String> = cells.iter().map(|c| c.replace('|', "\\|")).collect();
    format!("| {} |\n", escaped.join(" | "))
}

/// Print a bulleted list section, or nothing when `items` is empty.
pub fn print_list(format: OutputFormat, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    match format {
        OutputFormat::Markdown => {
            println!("### {heading}\n");
            for item in items {
                println!("- `{item}`");
            }
            println!();
        }
        _ => {
            println!("{}", heading.bold());
            for item in items {
                println!("   {} {}", "-".yellow(), item.cyan());
            }
        }
    }
}
