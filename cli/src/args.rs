//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Inspect and validate the assistant's environment settings
#[derive(Parser, Debug)]
#[command(name = "assistant-settings")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory containing `envs/` (defaults to the workspace root)
    #[arg(long, global = true, env = "ASSISTANT_BASE_DIR")]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the settings and print them (API key redacted)
    Show(ShowArgs),

    /// Load the settings and report whether they are valid
    Check,

    /// List known environments and their env files
    Envs,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Print the settings as JSON
    #[arg(long)]
    pub json: bool,
}
