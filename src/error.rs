//! Error types for og-meta

use thiserror::Error;

/// Errors that can occur when loading Open Graph or site configuration.
///
/// Tag resolution and rendering never fail; a value that cannot be resolved
/// simply produces no tag.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read a configuration file
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// JSON configuration could not be parsed
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML configuration could not be parsed
    #[cfg(feature = "toml")]
    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration file extension is not a supported format
    #[error("unsupported configuration format: {0}")]
    UnsupportedFormat(String),
}

/// Result type alias for og-meta operations.
pub type Result<T> = std::result::Result<T, Error>;
