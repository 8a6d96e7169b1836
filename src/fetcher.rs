//! HTTP fetcher for downloading hosts-file sources.

use reqwest::Client;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::{debug, info};

use crate::config::SourceList;
use crate::error::OusthostError;

const TIMEOUT_SECS: u64 = 30;

/// Maximum size per source document (64 MB)
/// Largest known list (hagezi pro hosts) is ~25 MB, so 64 MB provides margin
const MAX_LIST_SIZE: usize = 64 * 1024 * 1024;

/// Maximum total size for all downloads combined (256 MB)
const MAX_TOTAL_SIZE: usize = 256 * 1024 * 1024;

/// HTTP client for fetching hosts-file sources
pub struct Fetcher {
    client: Client,
    /// Cumulative download size tracker
    total_downloaded: AtomicUsize,
}

impl Fetcher {
    /// Create a new fetcher with default settings
    pub fn new() -> Result<Self, OusthostError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .user_agent(format!("ousthost/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| OusthostError::Config(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self {
            client,
            total_downloaded: AtomicUsize::new(0),
        })
    }

    /// Get the total bytes downloaded so far
    pub fn total_downloaded(&self) -> usize {
        self.total_downloaded.load(Ordering::Relaxed)
    }

    /// Fetch a single source document.
    ///
    /// One GET per source, no retry: any network failure or non-success final
    /// status aborts the whole run (redirects are followed by the client, so
    /// the status checked here is the end of the chain).
    pub async fn fetch_source(&self, source: &SourceList) -> Result<String, OusthostError> {
        info!("Fetching {}...", source.name);
        debug!("GET {}", source.url);

        let response = self
            .client
            .get(&source.url)
            .send()
            .await
            .map_err(|e| OusthostError::fetch(&source.name, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(OusthostError::fetch(
                &source.name,
                format!("HTTP {}", status),
            ));
        }

        // Check Content-Length header before downloading the body
        if let Some(content_length) = response.content_length() {
            if content_length as usize > MAX_LIST_SIZE {
                return Err(OusthostError::fetch(
                    &source.name,
                    format!(
                        "response too large: {} bytes (max: {} bytes)",
                        content_length, MAX_LIST_SIZE
                    ),
                ));
            }
        }

        let body = response
            .text()
            .await
            .map_err(|e| OusthostError::fetch(&source.name, e))?;

        // Double-check actual size after download
        if body.len() > MAX_LIST_SIZE {
            return Err(OusthostError::fetch(
                &source.name,
                format!(
                    "downloaded content too large: {} bytes (max: {} bytes)",
                    body.len(),
                    MAX_LIST_SIZE
                ),
            ));
        }

        let new_total = self
            .total_downloaded
            .fetch_add(body.len(), Ordering::Relaxed)
            + body.len();
        if new_total > MAX_TOTAL_SIZE {
            return Err(OusthostError::fetch(
                &source.name,
                format!(
                    "cumulative download limit exceeded: {} bytes (max: {} bytes)",
                    new_total, MAX_TOTAL_SIZE
                ),
            ));
        }

        Ok(body)
    }
}

// Note: Default is intentionally not implemented for Fetcher
// because new() can fail and we want explicit error handling.
