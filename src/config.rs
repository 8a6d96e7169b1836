//! Configuration management for OustHost.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default output path, relative to the current working directory
pub const DEFAULT_OUTPUT: &str = "default.blocklist";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hosts-file sources to merge
    pub sources: Vec<SourceList>,

    /// Output path for the generated blocklist
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// A single remote hosts-file source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceList {
    /// Short name used in logs and the sources table
    pub name: String,
    /// URL of the hosts-file document (HTTPS only)
    pub url: String,
    /// Whether this source participates in updates
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Config {
    /// Load configuration from a YAML file, falling back to defaults when the
    /// file does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.sources.is_empty() {
            anyhow::bail!("No sources configured");
        }

        for source in &self.sources {
            if source.name.is_empty() {
                anyhow::bail!("Source with URL {} has an empty name", source.url);
            }
            if !source.url.starts_with("https://") {
                anyhow::bail!(
                    "Source '{}' URL must use HTTPS: {}",
                    source.name,
                    source.url
                );
            }
        }

        if self.output.as_os_str().is_empty() {
            anyhow::bail!("Output path is empty");
        }

        Ok(())
    }

    /// Save configuration to a YAML file atomically
    ///
    /// Uses tempfile + rename pattern to prevent corruption on crash.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let path = path.as_ref();
        let content = serde_yaml::to_string(self).with_context(|| "Failed to serialize config")?;

        // Create temporary file in the same directory for atomic rename
        let parent_dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut temp_file = NamedTempFile::new_in(parent_dir)
            .context("Failed to create temporary file for config")?;

        temp_file.write_all(content.as_bytes())?;
        temp_file.as_file().sync_all()?;

        temp_file
            .persist(path)
            .with_context(|| format!("Failed to persist config file: {:?}", path))?;

        Ok(())
    }

    /// Get the sources that participate in an update, in configured order
    pub fn get_enabled_sources(&self) -> Vec<&SourceList> {
        self.sources.iter().filter(|s| s.enabled).collect()
    }
}

/// Default source list: the hagezi pro and StevenBlack hosts files
fn default_sources() -> Vec<SourceList> {
    vec![
        SourceList {
            name: "hagezi_pro".to_string(),
            url: "https://raw.githubusercontent.com/hagezi/dns-blocklists/main/hosts/pro.txt"
                .to_string(),
            enabled: true,
        },
        SourceList {
            name: "stevenblack".to_string(),
            url: "https://raw.githubusercontent.com/StevenBlack/hosts/master/hosts".to_string(),
            enabled: true,
        },
    ]
}
