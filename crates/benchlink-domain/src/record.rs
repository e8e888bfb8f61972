//! Aggregated output records

use serde::{Deserialize, Serialize};

/// One verified dataset/benchmark URL across a whole run
///
/// Created on the first positive verdict for a URL and updated whenever the
/// same URL is verified again in a later document. Never deleted within a
/// run. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedRecord {
    /// Normalized URL
    pub url: String,

    /// Distinct context strings, first-seen order
    pub contexts: Vec<String>,

    /// Documents that referenced this URL, no duplicates
    pub source_documents: Vec<String>,
}

impl AggregatedRecord {
    /// Create a record for the first document that verified `url`
    pub fn new<I>(url: impl Into<String>, document_id: impl Into<String>, contexts: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut record = Self {
            url: url.into(),
            contexts: Vec::new(),
            source_documents: vec![document_id.into()],
        };
        record.union_contexts(contexts);
        record
    }

    /// Union new contexts into the set; identical strings collapse
    pub fn union_contexts<I>(&mut self, contexts: I)
    where
        I: IntoIterator<Item = String>,
    {
        for context in contexts {
            if !self.contexts.contains(&context) {
                self.contexts.push(context);
            }
        }
    }

    /// Append a source document unless it is already listed
    pub fn add_source(&mut self, document_id: impl Into<String>) {
        let document_id = document_id.into();
        if !self.source_documents.contains(&document_id) {
            self.source_documents.push(document_id);
        }
    }
}
