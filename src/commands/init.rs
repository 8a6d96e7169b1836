//! Init command implementation.

use anyhow::Result;
use std::path::Path;
use tracing::info;

use crate::config::Config;

/// Run the init command: write the default configuration file
pub fn run(force: bool, config_path: &Path) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!(
            "Config file {:?} already exists (use --force to overwrite)",
            config_path
        );
    }

    let config = Config::default();
    config.save(config_path)?;

    info!("Wrote default config to {:?}", config_path);
    println!("[OK] Default config written to {}", config_path.display());

    Ok(())
}
