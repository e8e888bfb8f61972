//! Extractor facade tying both scanners and the name finder to one config

use crate::anchor_scanner::AnchorScanner;
use crate::line_scanner::LineScanner;
use crate::mentions::DatasetNameFinder;
use crate::reconcile::{reconcile, Reconciled};
use crate::{ExtractorConfig, ExtractorError};
use benchlink_domain::{ContextMap, DatasetMention, RawDocument};
use tracing::{debug, info};

/// Pulls candidate URLs and dataset mentions out of a converted document
#[derive(Debug, Clone)]
pub struct Extractor {
    config: ExtractorConfig,
    lines: LineScanner,
    anchors: AnchorScanner,
    names: DatasetNameFinder,
}

impl Extractor {
    /// Create an extractor
    ///
    /// # Errors
    ///
    /// Returns `ExtractorError::Config` if the configuration is invalid.
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self {
            lines: LineScanner::new(config.context_radius),
            anchors: AnchorScanner::new(config.anchor_sibling_radius),
            names: DatasetNameFinder::new(config.mention_lookback, config.mention_context_markers),
            config,
        })
    }

    /// Create an extractor with default configuration
    pub fn default_config() -> Self {
        let config = ExtractorConfig::default();
        Self {
            lines: LineScanner::new(config.context_radius),
            anchors: AnchorScanner::new(config.anchor_sibling_radius),
            names: DatasetNameFinder::new(config.mention_lookback, config.mention_context_markers),
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Scan both renderings of `doc` and reconcile the candidates
    pub fn extract_links(&self, doc: &RawDocument) -> Reconciled {
        let from_lines = self.lines.scan(&doc.lines);
        let from_anchors = match doc.html.as_deref() {
            Some(html) => self.anchors.scan(html),
            None => {
                debug!("{}: no structured rendering, anchors skipped", doc.id);
                ContextMap::new()
            }
        };

        info!("Extracting links from {}", doc.id);
        reconcile(&from_lines, &from_anchors)
    }

    /// Find dataset name mentions in the text rendering of `doc`
    pub fn find_mentions(&self, doc: &RawDocument) -> Vec<DatasetMention> {
        let mentions = self.names.find(&doc.lines);
        info!("Found {} dataset mentions in {}", mentions.len(), doc.id);
        mentions
    }
}
