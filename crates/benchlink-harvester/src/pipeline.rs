//! Per-document pipeline: extract, classify, report

use benchlink_domain::{DatasetMention, RawDocument};
use benchlink_extractor::Extractor;
use benchlink_gatekeeper::Classifier;
use tracing::{debug, info};

/// A URL with at least one positive context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedLink {
    /// Normalized URL
    pub url: String,
    /// Contexts that produced a positive verdict, in scan order
    pub contexts: Vec<String>,
}

/// What one document contributed
#[derive(Debug, Clone, Default)]
pub struct DocumentReport {
    /// Document identifier
    pub document_id: String,
    /// URLs found by the line scanner
    pub from_text: usize,
    /// URLs found by the anchor scanner
    pub from_anchors: usize,
    /// Reconciled candidates sent to the classifier
    pub candidates: usize,
    /// Links verified as datasets
    pub verified: Vec<VerifiedLink>,
    /// Dataset names mentioned in the text
    pub mentions: Vec<DatasetMention>,
    /// Contexts whose judge call failed
    pub judge_failures: usize,
}

impl DocumentReport {
    /// Human-readable summary
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Document {}", self.document_id),
            format!("  URLs via text: {}", self.from_text),
            format!("  URLs via structure: {}", self.from_anchors),
            format!("  Candidates classified: {}", self.candidates),
            format!("  Verified links: {}", self.verified.len()),
        ];
        for link in &self.verified {
            lines.push(format!("    {} ({} contexts)", link.url, link.contexts.len()));
        }
        lines.push(format!("  Dataset mentions: {}", self.mentions.len()));
        for mention in &self.mentions {
            lines.push(format!("    {}", mention.name));
        }
        if self.judge_failures > 0 {
            lines.push(format!("  Judge failures: {}", self.judge_failures));
        }
        lines.join("\n")
    }
}

/// Extractor and classifier applied to one document at a time
pub struct Pipeline {
    extractor: Extractor,
    classifier: Classifier,
}

impl Pipeline {
    /// Create a pipeline
    pub fn new(extractor: Extractor, classifier: Classifier) -> Self {
        Self {
            extractor,
            classifier,
        }
    }

    /// Extractor in use
    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    /// Run extraction and classification over `doc`
    ///
    /// Every context of every candidate is classified; a URL is verified
    /// when any of its contexts comes back positive.
    pub fn process_document(&mut self, doc: &RawDocument) -> DocumentReport {
        let links = self.extractor.extract_links(doc);
        let mut report = DocumentReport {
            document_id: doc.id.clone(),
            from_text: links.from_text,
            from_anchors: links.from_anchors,
            candidates: links.candidates.len(),
            ..DocumentReport::default()
        };

        for (url, contexts) in links.candidates.iter() {
            let verdicts = self.classifier.classify_all(url, contexts);
            report.judge_failures += verdicts.iter().filter(|v| v.is_failure()).count();

            let positive: Vec<String> = contexts
                .iter()
                .zip(&verdicts)
                .filter(|(_, v)| v.verdict)
                .map(|(c, _)| c.clone())
                .collect();

            if positive.is_empty() {
                debug!("{}: {} not verified", doc.id, url);
                continue;
            }
            report.verified.push(VerifiedLink {
                url: url.to_string(),
                contexts: positive,
            });
        }

        report.mentions = self.extractor.find_mentions(doc);
        info!(
            "{}: {} of {} candidates verified",
            doc.id,
            report.verified.len(),
            report.candidates
        );
        report
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(Extractor::default_config(), Classifier::rules_only())
    }
}
