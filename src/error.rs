//! Error types for OustHost.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OusthostError {
    #[error("Failed to fetch '{name}': {reason}")]
    Fetch { name: String, reason: String },

    #[error("Failed to write blocklist to {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl OusthostError {
    /// Build a fetch error for a named source
    pub fn fetch(name: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::Fetch {
            name: name.into(),
            reason: reason.to_string(),
        }
    }

    /// Build a write error for an output path
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
