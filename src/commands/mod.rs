//! CLI command implementations.

pub mod init;
pub mod sources;
pub mod update;
