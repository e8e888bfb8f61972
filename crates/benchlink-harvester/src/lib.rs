//! Benchlink Harvester
//!
//! Batch processing of research papers into verified dataset links.
//!
//! # Overview
//!
//! The harvester is responsible for:
//! - **Retrieval**: Listing a conference tab's papers on OpenReview and downloading the PDFs
//! - **Conversion**: Rendering each PDF to text and HTML with the poppler tools
//! - **Processing**: Running extraction and classification per document
//! - **Aggregation**: Merging verified links across documents
//! - **Persistence**: Writing the aggregated records as JSON
//!
//! Documents are processed one at a time. A document that fails to
//! download or convert is logged and contributes nothing; the run
//! continues with the next one.
//!
//! # Usage
//!
//! ```no_run
//! use benchlink_harvester::{save_json, HarvestConfig, Harvester, Pipeline};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut harvester = Harvester::from_config(HarvestConfig::default(), Pipeline::default())?;
//! let outcome = harvester
//!     .run_conference("https://openreview.net/group?id=ICLR.cc/2025/Conference#tab-accept-oral");
//! println!("{}", outcome.summary());
//! save_json(Path::new("results.json"), &outcome.records)?;
//! # Ok(())
//! # }
//! ```
//!
//! Already converted text needs no network or converter:
//!
//! ```
//! use benchlink_harvester::{HarvestConfig, Harvester, Pipeline};
//!
//! let mut harvester = Harvester::from_config(HarvestConfig::default(), Pipeline::default()).unwrap();
//! let outcome = harvester.process_text("paper_1", "Data: https://zenodo.org/record/42", None);
//! assert_eq!(outcome.records[0].url, "https://zenodo.org/record/42");
//! ```

#![warn(missing_docs)]

pub mod aggregator;
pub mod config;
pub mod converter;
pub mod download;
pub mod error;
pub mod harvester;
pub mod openreview;
pub mod output;
pub mod pipeline;

pub use aggregator::Aggregator;
pub use config::HarvestConfig;
pub use converter::{convert_document, PopplerConverter};
pub use download::{HttpDownloader, PdfDownloader};
pub use error::HarvestError;
pub use harvester::{document_id_for, HarvestOutcome, Harvester};
pub use openreview::OpenReviewSource;
pub use output::{save_json, to_json};
pub use pipeline::{DocumentReport, Pipeline, VerifiedLink};
