//! OustHost - Hostname Blocklist Builder
//!
//! Merges hosts-file formatted blocklists into a single sorted hostname list.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use ousthost::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let log_level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Execute command
    match cli.command {
        Commands::Update { dry_run, output } => {
            ousthost::commands::update::run(dry_run, output, &cli.config).await
        }
        Commands::Sources => ousthost::commands::sources::run(&cli.config),
        Commands::Init { force } => ousthost::commands::init::run(force, &cli.config),
        Commands::Version => {
            println!("ousthost {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
