//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the pipeline and the
//! collaborators it depends on. Implementations live in other crates.

use std::path::Path;

/// Trait for the external semantic judge
///
/// Implemented by the infrastructure layer (benchlink-llm). The pipeline
/// only inspects the returned text for an affirmative token.
pub trait Judge {
    /// Error type for judge operations
    type Error;

    /// Ask whether `url`, seen in `context`, points at a dataset or benchmark
    fn judge(&self, url: &str, context: &str) -> Result<String, Self::Error>;

    /// Model or provider name, for logging
    fn model_name(&self) -> &str;
}

/// Trait for converting a PDF into text and structured renderings
///
/// Implemented by the infrastructure layer (benchlink-harvester).
/// `Ok(None)` means the converter ran but produced no usable output.
pub trait DocumentConverter {
    /// Error type for conversion operations
    type Error;

    /// Produce the raw text rendering
    fn to_text(&self, pdf: &Path) -> Result<Option<String>, Self::Error>;

    /// Produce the structured (HTML, with anchors) rendering
    fn to_html(&self, pdf: &Path) -> Result<Option<String>, Self::Error>;
}

/// Trait for listing papers of a conference
///
/// Implemented by the infrastructure layer (benchlink-harvester).
/// Failures yield an empty (or partial) list, never an error, so that a
/// broken index cannot abort a batch.
pub trait DocumentSource {
    /// Ordered PDF URLs for the conference at `index_url`
    fn pdf_urls(&self, index_url: &str) -> Vec<String>;
}
