//! Benchlink Extractor
//!
//! Pulls candidate dataset URLs and dataset name mentions out of converted
//! research papers.
//!
//! # Architecture
//!
//! ```text
//! text lines ─→ LineScanner ───┐
//!                              ├─→ reconcile ─→ normalized URL → contexts
//! HTML ───────→ AnchorScanner ─┘
//!
//! text lines ─→ DatasetNameFinder ─→ DatasetMention list
//! ```
//!
//! Both scanners validate their candidates syntactically (no network access)
//! and record one context window per occurrence.
//!
//! # Example
//!
//! ```
//! use benchlink_domain::RawDocument;
//! use benchlink_extractor::Extractor;
//!
//! let doc = RawDocument::from_text(
//!     "paper_1",
//!     "We train on the CIFAR-10 dataset.\nSee https://a.com/x-\ny for details",
//! );
//! let extractor = Extractor::default_config();
//!
//! let links = extractor.extract_links(&doc);
//! assert!(links.candidates.contains("https://a.com/xy"));
//!
//! let mentions = extractor.find_mentions(&doc);
//! assert_eq!(mentions[0].name, "CIFAR-10");
//! ```

#![warn(missing_docs)]

mod anchor_scanner;
mod config;
mod error;
mod extractor;
mod line_scanner;
mod mentions;
mod patterns;
mod reconcile;

#[cfg(test)]
mod tests;

pub use anchor_scanner::AnchorScanner;
pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use line_scanner::LineScanner;
pub use mentions::{tokenize, DatasetNameFinder, Token};
pub use patterns::{is_accessible, is_url, trim_url};
pub use reconcile::{reconcile, Reconciled};
