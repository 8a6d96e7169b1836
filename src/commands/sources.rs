//! Sources command implementation.

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::Config;
use crate::utils::truncate;

/// Run the sources command
pub fn run(config_path: &Path) -> Result<()> {
    let config = Config::load_or_default(config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    println!();
    println!(" CONFIGURED SOURCES");
    println!(" ────────────────── ─────── ──────────────────────────────────────────");
    println!(" {:<18} {:<7} {}", "NAME", "STATE", "URL");
    println!(" ────────────────── ─────── ──────────────────────────────────────────");

    for source in &config.sources {
        let state = if source.enabled { "on" } else { "off" };
        println!(
            " {:<18} {:<7} {}",
            truncate(&source.name, 18),
            state,
            source.url
        );
    }

    println!(" ────────────────── ─────── ──────────────────────────────────────────");
    println!(" Output: {}", config.output.display());
    println!();

    Ok(())
}
