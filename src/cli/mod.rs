pub mod explain;
pub mod output;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

use crate::types::Severity;

#[derive(Parser, Debug)]
#[command(
    name = "astlint",
    version,
    about = "Deterministic AST-based validators for bad code patterns"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate source files under a directory
    Check {
        /// Project root directory to scan
        path: PathBuf,

        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Minimum severity that causes a non-zero exit code
        /// (overrides fail_on from config)
        #[arg(long)]
        fail_on: Option<Severity>,
    },
    /// Create a default .astlintrc.toml
    Init,
    /// Explain what a rule checks and why it matters (omit rule to list all)
    Explain {
        /// Rule id (e.g. unwrap-used, wildcard-import, banned-call)
        rule: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Github,
}
