//! # OustHost - Hostname Blocklist Builder
//!
//! Downloads hosts-file formatted blocklists, extracts hostnames blocked via
//! the `0.0.0.0 <hostname>` convention, filters out IP-address literals, and
//! writes the deduplicated, sorted union to a single output file — one
//! hostname per line, ready for a downstream DNS filter.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                      OustHost                        │
//! ├──────────────────────────────────────────────────────┤
//! │  CLI (clap)                                          │
//! │    └── Commands: update, sources, init, version      │
//! ├──────────────────────────────────────────────────────┤
//! │  Config (serde_yaml)                                 │
//! │    └── Sources: hagezi pro, StevenBlack (defaults)   │
//! ├──────────────────────────────────────────────────────┤
//! │  Fetcher (reqwest + rustls)                          │
//! │    └── One GET per source, 30s timeout, no retry     │
//! ├──────────────────────────────────────────────────────┤
//! │  Parser (0.0.0.0 convention + IP-literal filter)     │
//! ├──────────────────────────────────────────────────────┤
//! │  Aggregator (set union) → Writer (atomic, sorted)    │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! The pipeline is strictly sequential and fails closed: the first fetch or
//! write error aborts the run before anything touches the output file, so a
//! failed update never clobbers a previously written blocklist.
//!
//! ## Example Usage
//!
//! ```no_run
//! use ousthost::commands::update::build_blocklist;
//! use ousthost::config::Config;
//! use ousthost::fetcher::Fetcher;
//! use ousthost::writer::write_blocklist;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let fetcher = Fetcher::new()?;
//!
//!     let hostnames = build_blocklist(&config, &fetcher).await?;
//!     write_blocklist(&config.output, &hostnames)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`aggregator`] - Hostname set union and deterministic ordering
//! - [`cli`] - Command-line interface definitions
//! - [`commands`] - CLI command implementations
//! - [`config`] - Configuration parsing and validation
//! - [`error`] - Fetch/write/config error types
//! - [`fetcher`] - HTTP client for downloading hosts-file sources
//! - [`parser`] - Hosts-file line parsing and IP-literal filtering
//! - [`utils`] - Common utility functions (formatting, truncation)
//! - [`writer`] - Atomic blocklist output writing

pub mod aggregator;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod parser;
pub mod utils;
pub mod writer;

pub use cli::{Cli, Commands};
pub use config::Config;
pub use error::OusthostError;
