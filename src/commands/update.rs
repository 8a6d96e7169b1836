//! Update command implementation.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::aggregator::{merge, sorted_hostnames};
use crate::config::Config;
use crate::fetcher::Fetcher;
use crate::parser::extract_hostnames;
use crate::utils::{format_bytes, format_count};
use crate::writer::write_blocklist;

/// Build the sorted hostname blocklist for the given configuration.
///
/// Sources are fetched and parsed strictly in configured order; the first
/// fetch failure aborts the build, so no partial result ever reaches the
/// writer. The config is passed in explicitly so tests can substitute
/// alternate source lists.
pub async fn build_blocklist(config: &Config, fetcher: &Fetcher) -> Result<Vec<String>> {
    let sources = config.get_enabled_sources();
    if sources.is_empty() {
        anyhow::bail!("No sources enabled. Check your configuration.");
    }

    let mut cumulative: HashSet<String> = HashSet::new();

    for source in sources {
        let body = fetcher.fetch_source(source).await?;
        let hostnames = extract_hostnames(&body);

        info!(
            "Fetched {} - {} hostnames",
            source.name,
            format_count(hostnames.len())
        );

        merge(&mut cumulative, hostnames);
        debug!("Cumulative set: {} hostnames", cumulative.len());
    }

    Ok(sorted_hostnames(cumulative))
}

/// Run the update command
pub async fn run(dry_run: bool, output: Option<PathBuf>, config_path: &Path) -> Result<()> {
    let config = Config::load_or_default(config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    info!("Updating blocklist...");

    let fetcher = Fetcher::new()?;
    let hostnames = build_blocklist(&config, &fetcher).await?;

    info!(
        "Merged {} unique hostnames ({} downloaded)",
        format_count(hostnames.len()),
        format_bytes(fetcher.total_downloaded() as u64)
    );

    let output_path = output.unwrap_or_else(|| config.output.clone());

    if dry_run {
        println!();
        println!(
            "[DRY RUN] {} hostnames would be written to {}",
            format_count(hostnames.len()),
            output_path.display()
        );
        return Ok(());
    }

    write_blocklist(&output_path, &hostnames)?;

    println!();
    println!(
        "[OK] {} hostnames written to {}",
        format_count(hostnames.len()),
        output_path.display()
    );

    Ok(())
}
