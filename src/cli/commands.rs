//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Incremental sync client for OData-style membership APIs
#[derive(Parser, Debug)]
#[command(name = "ams-sync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (YAML)
    #[arg(short, long, global = true, default_value = "ams-sync.yaml")]
    pub settings: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one incremental sync and update the stored bookmark
    Sync {
        /// Ignore the stored bookmark and fetch the full collection
        #[arg(long)]
        full: bool,

        /// Pretty-print the first N records received
        #[arg(long, default_value = "5")]
        preview: usize,

        /// Fetch and report without writing the bookmark
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the stored bookmark
    ShowState,
}
