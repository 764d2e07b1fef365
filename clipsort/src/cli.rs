// clipsort/src/cli.rs
//! This file defines the command-line interface (CLI) for the clipsort application,
//! including all available commands and their arguments.
//! License: MIT OR APACHE 2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "clipsort",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Tell pasted code from prose",
    long_about = "clipsort decides whether a block of text is source code or natural language, reports how confident that decision is, and names the language the code most resembles. It is a fast, explainable, regex-weighted heuristic, not a parser.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `clipsort` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classifies an input file, the clipboard or stdin.
    #[command(about = "Classifies an input file, the clipboard or stdin as code or text.")]
    Classify(ClassifyCommand),

    /// Lists the active rule tables.
    #[command(about = "Lists the active scoring rules and language rules.")]
    Rules(RulesCommand),
}

/// Arguments for the `classify` command.
#[derive(Parser, Debug)]
pub struct ClassifyCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Read the text to classify from the system clipboard.
    #[arg(long, short = 'c', conflicts_with = "input_file", help = "Read input from the system clipboard.")]
    pub clipboard: bool,

    /// Path to a custom rule configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom rule configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Re-enable these rules or languages (comma-separated).
    #[arg(long, short = 'e', value_delimiter = ',', help = "Re-enable rules or languages disabled in the configuration (comma-separated).")]
    pub enable: Vec<String>,

    /// Disable these rules or languages (comma-separated).
    #[arg(long, short = 'x', value_delimiter = ',', help = "Disable these rule names or language tags (comma-separated).")]
    pub disable: Vec<String>,

    /// Print the result as JSON.
    #[arg(long, help = "Print the classification result as JSON.")]
    pub json: bool,

    /// Show the per-rule breakdown behind the result.
    #[arg(long, help = "Show rule hits, auxiliary signals and language scores.")]
    pub explain: bool,

    /// Remove terminal escape codes before classifying.
    #[arg(long = "strip-ansi", help = "Remove ANSI escape codes from the input before classifying.")]
    pub strip_ansi: bool,
}

/// Arguments for the `rules` command.
#[derive(Parser, Debug)]
pub struct RulesCommand {
    /// Path to a custom rule configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom rule configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Re-enable these rules or languages (comma-separated).
    #[arg(long, short = 'e', value_delimiter = ',', help = "Re-enable rules or languages disabled in the configuration (comma-separated).")]
    pub enable: Vec<String>,

    /// Disable these rules or languages (comma-separated).
    #[arg(long, short = 'x', value_delimiter = ',', help = "Disable these rule names or language tags (comma-separated).")]
    pub disable: Vec<String>,
}
