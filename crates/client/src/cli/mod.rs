//! CLI command definitions.

pub mod query;

use clap::{Parser, Subcommand, ValueEnum};

/// Terminal client for school substitution monitor boards.
#[derive(Debug, Parser)]
#[command(name = "subboard")]
#[command(about = "Query a school's public substitution monitor board", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(
        long,
        env = "SUBBOARD_URL",
        default_value = "https://hepta.webuntis.com/WebUntis"
    )]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable board rendering.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch and display a substitution board.
    Query(query::QueryCommand),
}
