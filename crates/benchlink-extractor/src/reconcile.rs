//! Merge the two scanner outputs under normalized keys

use benchlink_domain::{normalize_url, ContextMap};
use std::collections::HashSet;
use tracing::info;

/// Union of both scanners' candidates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reconciled {
    /// Normalized URL → every context from either scanner
    pub candidates: ContextMap,

    /// Distinct normalized URLs the line scanner found
    pub from_text: usize,

    /// Distinct normalized URLs the anchor scanner found
    pub from_anchors: usize,
}

/// Normalize and merge text-derived and anchor-derived candidates
///
/// Text entries come first, then anchors, so a URL seen by both keeps the
/// position the line scanner gave it and accumulates both sets of contexts.
pub fn reconcile(text: &ContextMap, anchors: &ContextMap) -> Reconciled {
    let mut candidates = ContextMap::new();
    let from_text = merge_into(&mut candidates, text);
    let from_anchors = merge_into(&mut candidates, anchors);

    info!(
        "Found {} URLs via text, {} via structure, {} after reconciliation",
        from_text,
        from_anchors,
        candidates.len()
    );

    Reconciled {
        candidates,
        from_text,
        from_anchors,
    }
}

fn merge_into(target: &mut ContextMap, source: &ContextMap) -> usize {
    let mut seen = HashSet::new();
    for (url, contexts) in source.iter() {
        let key = normalize_url(url);
        target.extend(key.clone(), contexts.iter().cloned());
        seen.insert(key);
    }
    seen.len()
}
