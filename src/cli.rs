//! CLI argument parser for safe-clean
//!
//! Provides type-safe argument parsing using clap derive.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for safe-clean
#[derive(Parser, Debug)]
#[command(
    name = "safe-clean",
    version,
    about = "Remove untracked files from a Git working tree",
    long_about = "Removes files that are not tracked by the Git index and not ignored.\n\
                  With PATH arguments only those untracked files are affected.\n\
                  Use -n to preview; a real clean needs -f unless require_force = false.",
    args_conflicts_with_subcommands = true
)]
pub struct CliArgs {
    /// Subcommand (e.g., init)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Restrict cleaning to these untracked files
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Dry run mode (show what would be removed without removing)
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Actually remove files (required when require_force is enabled)
    #[arg(short, long)]
    pub force: bool,

    /// Only report errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Run as if started in DIR
    #[arg(short = 'C', value_name = "DIR")]
    pub directory: Option<PathBuf>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize configuration file (~/.config/safe-clean/config.toml)
    Init,
}

impl CliArgs {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
