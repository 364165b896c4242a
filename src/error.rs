//! Error types for catalog loading and configuration
//!
//! The scoring engine itself is infallible; these errors only arise at the
//! boundary where records and settings enter the crate.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog JSON")]
    Parse(#[from] serde_json::Error),

    #[error("catalog record {index} has an empty id")]
    MissingId { index: usize },

    #[error("duplicate crop id '{0}' in catalog")]
    DuplicateId(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidSetting {
        key: &'static str,
        value: String,
        reason: String,
    },
}
