//! CLI argument definitions for vbundle.
//!
//! Uses `clap` derive macros to define the full command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "vbundle",
    version,
    about = "Aggregate version bundles into compatible release groups",
    long_about = "vbundle reads the version bundles published by independently versioned \
                  authorities and computes every combination of one bundle per authority \
                  whose declared dependencies are satisfied."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to Vbundle.toml (discovered from the current directory by default)
    #[arg(long, global = true, env = "VBUNDLE_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the compatible bundle groups
    Aggregate {
        /// Bundle definition files or directories
        paths: Vec<PathBuf>,
        /// Output format: text, json, yaml
        #[arg(short, long, default_value = "text")]
        format: String,
        /// Keep bundles flagged as work in progress
        #[arg(long)]
        include_wip: bool,
    },

    /// Validate bundle definitions
    Validate {
        /// Bundle definition files or directories
        paths: Vec<PathBuf>,
    },

    /// Show the dependency conflicts between bundles
    Explain {
        /// Bundle definition files or directories
        paths: Vec<PathBuf>,
        /// Output format: text, json, yaml
        #[arg(short, long, default_value = "text")]
        format: String,
        /// Keep bundles flagged as work in progress
        #[arg(long)]
        include_wip: bool,
    },

    /// List bundles per authority
    List {
        /// Bundle definition files or directories
        paths: Vec<PathBuf>,
        /// Keep bundles flagged as work in progress
        #[arg(long)]
        include_wip: bool,
    },

    /// Show service version information
    Version {
        /// Output format: text, json, yaml
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Check that bundle definitions load and aggregate
    Health {
        /// Bundle definition files or directories
        paths: Vec<PathBuf>,
    },
}

/// Parse CLI arguments from `std::env::args`.
pub fn parse() -> Cli {
    Cli::parse()
}
