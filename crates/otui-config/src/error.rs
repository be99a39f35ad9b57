//! Error types for loading component defaults.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Primary error type for configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The defaults document could not be read from disk.
    #[error("failed to read defaults from '{}'", .path.display())]
    Io {
        /// Path that failed to load.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: io::Error,
    },
    /// The defaults document was not valid JSON or had unexpected fields.
    #[error("failed to parse defaults document")]
    Parse {
        /// Underlying serde failure.
        #[source]
        source: serde_json::Error,
    },
    /// A field held a value that components cannot render.
    #[error("invalid value for '{field}' in '{section}': {message}")]
    InvalidField {
        /// Section that failed validation.
        section: &'static str,
        /// Field that failed validation.
        field: &'static str,
        /// Human-readable error description.
        message: &'static str,
    },
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;
