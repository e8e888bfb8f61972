//! Error types for the extractor

use thiserror::Error;

/// Errors that can occur while setting up extraction
///
/// Scanning itself never fails: malformed input simply yields fewer
/// candidates. Only configuration problems are reported.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
