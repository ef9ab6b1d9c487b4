//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Inspect the resolved application configuration
#[derive(Parser, Debug)]
#[command(name = "app-config")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Dotenv file to load instead of `.env`
    #[arg(long, global = true, env = "APP_ENV_FILE")]
    pub env_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print settings resolved from the environment
    Show(OutputArgs),

    /// Print the compile-time API defaults
    Defaults(OutputArgs),
}

/// Output formatting options
#[derive(Args, Debug, Default)]
pub struct OutputArgs {
    /// Pretty-print the JSON output
    #[arg(short, long)]
    pub pretty: bool,
}
