//! Cross-document aggregation of verified links

use crate::pipeline::DocumentReport;
use benchlink_domain::AggregatedRecord;
use std::collections::HashMap;
use tracing::debug;

/// Running set of verified links for a batch
///
/// Records keep first-seen order. A URL seen again in a later document
/// unions its contexts and gains the new document id.
#[derive(Debug, Default)]
pub struct Aggregator {
    records: Vec<AggregatedRecord>,
    index: HashMap<String, usize>,
}

impl Aggregator {
    /// Create an empty aggregator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one verified link from `document_id`
    pub fn add<I>(&mut self, document_id: &str, url: &str, contexts: I)
    where
        I: IntoIterator<Item = String>,
    {
        match self.index.get(url) {
            Some(&i) => {
                let record = &mut self.records[i];
                record.union_contexts(contexts);
                record.add_source(document_id);
                debug!("Merged {} from {}", url, document_id);
            }
            None => {
                self.index.insert(url.to_string(), self.records.len());
                self.records
                    .push(AggregatedRecord::new(url, document_id, contexts));
            }
        }
    }

    /// Add every verified link of a processed document
    pub fn add_report(&mut self, report: &DocumentReport) {
        for link in &report.verified {
            self.add(&report.document_id, &link.url, link.contexts.iter().cloned());
        }
    }

    /// Records in first-seen order
    pub fn records(&self) -> &[AggregatedRecord] {
        &self.records
    }

    /// Consume the aggregator, returning its records
    pub fn into_records(self) -> Vec<AggregatedRecord> {
        self.records
    }

    /// Number of distinct URLs
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been aggregated
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
