//! Error types for configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading startup configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An env file exists but could not be parsed.
    #[error("Failed to load env file {}: {source}", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
