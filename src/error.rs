//! Error types for the Kopis library.
//!
//! All fallible operations return [`KopisError`]. Tokenization itself never
//! fails; errors only surface while a configuration is being built or resolved.
//!
//! # Examples
//!
//! ```
//! use kopis::error::{KopisError, Result};
//!
//! fn check_gram(min_gram: usize) -> Result<()> {
//!     if min_gram == 0 {
//!         return Err(KopisError::config("min_gram must be at least 1"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_gram(0).unwrap_err().is_config());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Kopis operations.
#[derive(Error, Debug)]
pub enum KopisError {
    /// Invalid or nonsensical tokenizer configuration: unknown variant name,
    /// non-compiling or zero-length-capable pattern, bad n-gram bounds.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A backing resource (such as a segmentation dictionary) failed to load.
    #[error("Resource error: {0}")]
    Resource(String),

    /// I/O errors (reading dictionary files, CLI output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with KopisError.
pub type Result<T> = std::result::Result<T, KopisError>;

impl KopisError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        KopisError::Config(msg.into())
    }

    /// Create a new resource error.
    pub fn resource<S: Into<String>>(msg: S) -> Self {
        KopisError::Resource(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        KopisError::Other(msg.into())
    }

    /// Whether this error was caused by an invalid configuration.
    pub fn is_config(&self) -> bool {
        matches!(self, KopisError::Config(_))
    }

    /// Whether this error was caused by a resource that failed to load.
    pub fn is_resource(&self) -> bool {
        matches!(self, KopisError::Resource(_))
    }
}
