//! Error types for synthesis manifest operations.

use std::path::PathBuf;

/// Errors that can occur during synthesis manifest operations.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// TOML deserialization error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// I/O error reading/writing manifest files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest file not found.
    #[error("manifest not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// A manifest or build name was rejected.
    #[error("validation error: {detail}")]
    Validation {
        /// Description of the validation failure.
        detail: String,
    },
}

/// Result type for manifest operations.
pub type Result<T> = std::result::Result<T, ManifestError>;
