//! CLI-specific error types

use thiserror::Error;

use crate::domain::StoreError;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors, all fatal
#[derive(Debug, Error)]
pub enum CliError {
    /// Store could not be populated
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Seed file could not be written
    #[error("failed to write seed file: {0}")]
    SeedWrite(String),

    /// Server failed to bind or serve
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}
