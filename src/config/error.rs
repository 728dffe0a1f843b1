//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading, validating, or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration file at the given path.
    #[error("configuration file not found: {0}")]
    NotFound(PathBuf),

    /// The file exists but could not be read or written.
    #[error("cannot access configuration file '{path}': {source}")]
    Io {
        /// Offending file path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The content is not valid TOML for the expected schema.
    #[error("malformed configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A validator rejected the parsed configuration.
    #[error("configuration validation failed: {0}")]
    Invalid(String),

    /// The configuration could not be rendered back to TOML.
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
