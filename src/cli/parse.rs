//! CLI parse: clap types for Metaprompt. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Metaprompt CLI - domain-aware prompt document generation
#[derive(Parser)]
#[command(name = "metaprompt")]
#[command(about = "Generate structured, domain-specific prompt documents")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace directory (where metaprompt.toml is looked up)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a prompt document from a JSON request
    Generate {
        /// Request file, or "-" for stdin
        #[arg(long, short)]
        request: PathBuf,
        /// Directory to save the document in (default from config)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Print the document JSON instead of saving it
        #[arg(long)]
        print: bool,
    },
    /// Collect a request interactively and generate a document
    Interactive {
        /// Directory to save the document in (default from config)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Validate a request and report output checks without refining or saving
    Check {
        /// Request file, or "-" for stdin
        #[arg(long, short)]
        request: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List known domains
    Domains,
    /// List registered capabilities, or look one up
    Tools {
        /// Capability to look up
        #[arg(long)]
        name: Option<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}
