//! Batch driver
//!
//! Documents are processed strictly one after another. The judge invoker
//! inside the pipeline owns a single rate limiter, so running documents
//! concurrently would need that limiter shared behind a lock.

use crate::aggregator::Aggregator;
use crate::converter::{convert_document, PopplerConverter};
use crate::download::{HttpDownloader, PdfDownloader};
use crate::openreview::OpenReviewSource;
use crate::pipeline::{DocumentReport, Pipeline};
use crate::{HarvestConfig, HarvestError};
use benchlink_domain::traits::{DocumentConverter, DocumentSource};
use benchlink_domain::{AggregatedRecord, RawDocument};
use std::fmt::Display;
use std::path::Path;
use tracing::{error, info};

/// Result of a harvesting run
#[derive(Debug, Default)]
pub struct HarvestOutcome {
    /// Verified links, first-seen order
    pub records: Vec<AggregatedRecord>,
    /// One report per successfully processed document
    pub reports: Vec<DocumentReport>,
    /// Documents that failed and contributed nothing
    pub failed_documents: Vec<String>,
}

impl HarvestOutcome {
    /// Human-readable summary of the run
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Harvest Summary".to_string(),
            "===============".to_string(),
            format!("Documents processed: {}", self.reports.len()),
            format!("Documents failed: {}", self.failed_documents.len()),
            format!("Verified links: {}", self.records.len()),
        ];
        let mentions: usize = self.reports.iter().map(|r| r.mentions.len()).sum();
        lines.push(format!("Dataset mentions: {}", mentions));
        let judge_failures: usize = self.reports.iter().map(|r| r.judge_failures).sum();
        if judge_failures > 0 {
            lines.push(format!("Judge failures: {}", judge_failures));
        }
        if !self.failed_documents.is_empty() {
            lines.push(String::new());
            lines.push("Failed documents:".to_string());
            for id in &self.failed_documents {
                lines.push(format!("  {}", id));
            }
        }
        lines.join("\n")
    }
}

/// Identifier for the `position`-th (1-based) PDF of a batch
///
/// The text after the last `id=` in the URL, else `paper_<position>`.
pub fn document_id_for(pdf_url: &str, position: usize) -> String {
    match pdf_url.rsplit_once("id=") {
        Some((_, id)) if !id.is_empty() => id.split('&').next().unwrap_or(id).to_string(),
        _ => format!("paper_{}", position),
    }
}

/// Drives the pipeline over a conference or a single document
pub struct Harvester<S, D, C> {
    config: HarvestConfig,
    pipeline: Pipeline,
    source: S,
    downloader: D,
    converter: C,
}

impl Harvester<OpenReviewSource, HttpDownloader, PopplerConverter> {
    /// Harvester using OpenReview, HTTP downloads and the poppler tools
    ///
    /// # Errors
    ///
    /// Returns `HarvestError::Config` if the configuration is invalid or the
    /// HTTP clients cannot be built.
    pub fn from_config(config: HarvestConfig, pipeline: Pipeline) -> Result<Self, HarvestError> {
        config.validate().map_err(HarvestError::Config)?;
        let source = OpenReviewSource::new(config.request_timeout(), config.page_size)?;
        let downloader = HttpDownloader::new(config.request_timeout())?;
        let converter = PopplerConverter::new(&config.pdftotext, &config.pdftohtml);
        Ok(Self::new(config, pipeline, source, downloader, converter))
    }
}

impl<S, D, C> Harvester<S, D, C>
where
    S: DocumentSource,
    D: PdfDownloader,
    C: DocumentConverter,
    C::Error: Display,
{
    /// Create a harvester from explicit collaborators
    pub fn new(config: HarvestConfig, pipeline: Pipeline, source: S, downloader: D, converter: C) -> Self {
        Self {
            config,
            pipeline,
            source,
            downloader,
            converter,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &HarvestConfig {
        &self.config
    }

    /// Process every listed paper of a conference tab
    ///
    /// A document that fails to download or convert is logged and skipped;
    /// the run always completes.
    pub fn run_conference(&mut self, index_url: &str) -> HarvestOutcome {
        let mut pdf_urls = self.source.pdf_urls(index_url);
        self.config.apply_limit(&mut pdf_urls);
        info!("Processing {} papers from {}", pdf_urls.len(), index_url);

        let mut aggregator = Aggregator::new();
        let mut outcome = HarvestOutcome::default();
        let delay = self.config.inter_document_delay();

        for (i, pdf_url) in pdf_urls.iter().enumerate() {
            let id = document_id_for(pdf_url, i + 1);
            info!("[{}/{}] {}", i + 1, pdf_urls.len(), id);

            match self.process_remote(&id, pdf_url) {
                Ok(report) => {
                    aggregator.add_report(&report);
                    outcome.reports.push(report);
                }
                Err(e) => {
                    error!("Document {} failed: {}", id, e);
                    outcome.failed_documents.push(id);
                }
            }

            if i + 1 < pdf_urls.len() && !delay.is_zero() {
                std::thread::sleep(delay);
            }
        }

        outcome.records = aggregator.into_records();
        info!(
            "Harvest complete: {} verified links from {} documents",
            outcome.records.len(),
            outcome.reports.len()
        );
        outcome
    }

    fn process_remote(&mut self, id: &str, pdf_url: &str) -> Result<DocumentReport, HarvestError> {
        let file = self.downloader.download(pdf_url)?;
        let doc = convert_document(&self.converter, id, file.path())?;
        Ok(self.pipeline.process_document(&doc))
    }

    /// Process one local PDF
    ///
    /// # Errors
    ///
    /// Returns `HarvestError::MissingInput` if `path` does not exist.
    /// Conversion failures are logged and yield an empty outcome.
    pub fn process_local_pdf(&mut self, path: &Path) -> Result<HarvestOutcome, HarvestError> {
        if !path.is_file() {
            return Err(HarvestError::MissingInput(path.display().to_string()));
        }

        let id = path.display().to_string();
        let outcome = match convert_document(&self.converter, &id, path) {
            Ok(doc) => self.single(&doc),
            Err(e) => {
                error!("Document {} failed: {}", id, e);
                HarvestOutcome {
                    failed_documents: vec![id],
                    ..HarvestOutcome::default()
                }
            }
        };
        Ok(outcome)
    }

    /// Process an already converted document
    pub fn process_text(&mut self, id: &str, text: &str, html: Option<&str>) -> HarvestOutcome {
        let mut doc = RawDocument::from_text(id, text);
        if let Some(html) = html {
            doc = doc.with_html(html);
        }
        self.single(&doc)
    }

    fn single(&mut self, doc: &RawDocument) -> HarvestOutcome {
        let report = self.pipeline.process_document(doc);
        let mut aggregator = Aggregator::new();
        aggregator.add_report(&report);
        HarvestOutcome {
            records: aggregator.into_records(),
            reports: vec![report],
            failed_documents: Vec::new(),
        }
    }
}
