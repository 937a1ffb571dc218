//! Error types for the mkhelp rule-listing tool.

use std::path::PathBuf;
use thiserror::Error;

/// CLI-facing errors. Malformed doc markers are not an error; the affected
/// target is simply omitted from the listing.
#[derive(Debug, Error)]
pub enum HelpError {
    #[error("Failed to read rule file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid output format: {0} (must be 'text' or 'json')")]
    InvalidFormat(String),

    #[error("Failed to encode JSON output: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl From<config::ConfigError> for HelpError {
    fn from(err: config::ConfigError) -> Self {
        HelpError::ConfigError(err.to_string())
    }
}
