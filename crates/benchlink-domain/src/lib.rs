//! Benchlink Domain Layer
//!
//! This crate contains the data model shared by every stage of the
//! dataset-link pipeline, plus the trait interfaces for the collaborators
//! the pipeline talks to (judge, PDF converter, paper source).
//!
//! ## Key Concepts
//!
//! - **URL Candidate**: an absolute URL, normalized so `.../data/` and `.../data` compare equal
//! - **Context Window**: the text surrounding one occurrence of a URL or dataset name
//! - **Dataset Mention**: a short name phrase found in front of the word "dataset"
//! - **Verdict**: the classifier's positive/negative outcome plus the method and reason behind it
//! - **Aggregated Record**: one verified URL with every context and source document that produced it
//!
//! ## Architecture
//!
//! - No I/O and no infrastructure dependencies beyond `serde`
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod document;
pub mod mention;
pub mod record;
pub mod traits;
pub mod url;
pub mod verdict;

// Re-exports for convenience
pub use context::ContextMap;
pub use document::RawDocument;
pub use mention::DatasetMention;
pub use record::AggregatedRecord;
pub use url::{normalize_url, UrlCandidate};
pub use verdict::{ClassificationVerdict, Method, VerdictReason};
