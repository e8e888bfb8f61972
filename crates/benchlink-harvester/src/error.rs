//! Error types for the harvester

use thiserror::Error;

/// Errors raised while fetching, converting or persisting documents
///
/// Inside a batch these are caught at the document boundary and logged;
/// only configuration and output errors reach the caller.
#[derive(Error, Debug)]
pub enum HarvestError {
    /// Network request failed
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Converter could not be run or produced nothing usable
    #[error("Conversion error: {0}")]
    Conversion(String),

    /// Paper index page or API response had an unexpected shape
    #[error("Index format error: {0}")]
    IndexFormat(String),

    /// Input file does not exist
    #[error("Input not found: {0}")]
    MissingInput(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for HarvestError {
    fn from(e: reqwest::Error) -> Self {
        HarvestError::Fetch(e.to_string())
    }
}
