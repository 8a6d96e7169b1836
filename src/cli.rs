//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ousthost")]
#[command(author, version, about = "Hostname Blocklist Builder")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "ousthost.yaml", global = true)]
    pub config: PathBuf,

    /// Quiet mode (for cron/systemd timer)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug output)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch all sources and write the merged blocklist
    Update {
        /// Dry-run mode: fetch and merge but don't write the output file
        #[arg(long)]
        dry_run: bool,

        /// Output path override (default: from config, `default.blocklist`)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List configured sources
    Sources,

    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Show version information
    Version,
}
