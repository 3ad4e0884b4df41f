//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Solidafy Pager CLI
#[derive(Parser, Debug)]
#[command(name = "solidafy-pager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Paging option file (YAML or JSON)
    #[arg(short, long, global = true)]
    pub option: Option<PathBuf>,

    /// Inline paging option (YAML or JSON)
    #[arg(long, global = true)]
    pub option_json: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the query parameters for a paging option
    Plan {
        /// Sample record (JSON object) to check the cursor column against
        #[arg(long)]
        sample_json: Option<String>,
    },

    /// Interpret executor output for a paging option
    Interpret {
        /// Executor output file (JSON)
        #[arg(short, long)]
        results: Option<PathBuf>,

        /// Inline executor output JSON
        #[arg(long)]
        results_json: Option<String>,
    },

    /// Show the default paging option
    Defaults,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable output
    Pretty,
}
